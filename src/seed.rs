//! Seed strings for level generation.
//!
//! Daily seeds are the local calendar date (`YYYY-MM-DD`) and reproduce the
//! same content all day. Session seeds mix wall-clock time, a random
//! component and the level number; they only need to be practically unique.

use chrono::{Datelike, Local, NaiveDate};

use crate::mode::GameMode;

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD` from the date's own year/month/day, ignoring time of day.
pub fn daily_seed<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Fresh seed for one freeplay level.
pub fn session_seed(mode: GameMode, level: u32) -> String {
    let millis = Local::now().timestamp_millis();
    let nonce: u64 = rand::random();
    format!("{}_{}_{}_{}", mode.key(), millis, nonce, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn daily_seed_zero_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(daily_seed(&date), "2025-01-05");
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(daily_seed(&date), "2024-12-31");
    }

    #[test]
    fn daily_seed_ignores_time_of_day() {
        let morning: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();
        let night = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(daily_seed(&morning), daily_seed(&night));

        let local = Local.from_local_datetime(&night).earliest();
        if let Some(local) = local {
            assert_eq!(daily_seed(&local), "2025-01-01");
        }
    }

    #[test]
    fn daily_seed_for_today_parses_back() {
        let seed = daily_seed(&today());
        assert_eq!(seed.len(), 10);
        assert!(NaiveDate::parse_from_str(&seed, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn session_seeds_differ_per_call() {
        let a = session_seed(GameMode::GradientGap, 2);
        let b = session_seed(GameMode::GradientGap, 2);
        assert_ne!(a, b);
        assert!(a.starts_with("gradientGap_"));
        assert!(a.ends_with("_2"));
    }
}
