//! Player preferences
//!
//! Visual aids change what the player can see while matching, so they also
//! decide whether a score may count toward the best-score ladder.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Dark UI chrome; cosmetic only
    pub is_dark_mode: bool,

    // === Aids ===
    /// Live precision bar while dialing
    pub show_precision_bar: bool,
    /// Hex readout of the working colour
    pub show_hex_value: bool,
    /// Numeric channel labels on the sliders
    pub show_rgb_labels: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_dark_mode: true,

            // Aids - all off by default
            show_precision_bar: false,
            show_hex_value: false,
            show_rgb_labels: false,
        }
    }
}

impl Settings {
    /// True when any aid is on; such attempts never raise a best score.
    pub fn aids_enabled(&self) -> bool {
        self.show_precision_bar || self.show_hex_value || self.show_rgb_labels
    }

    /// Turns every aid off.
    pub fn disable_aids(&mut self) {
        self.show_precision_bar = false;
        self.show_hex_value = false;
        self.show_rgb_labels = false;
    }
}
