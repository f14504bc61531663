//! Colorea entry point
//!
//! Prints today's challenge and the stored best scores.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use colorea::persistence::MemoryStore;
    use colorea::{DailyChallenge, GameMode, GameStore};

    env_logger::init();
    log::info!("Colorea (native) starting...");

    let kv = MemoryStore::new();
    let mut store = GameStore::load(&kv);
    let challenge = DailyChallenge::today();
    let completed = store.visit_daily(challenge.date);

    println!("Daily challenge {}", challenge.seed);
    println!("  mode:   {}", challenge.mode.as_str());
    println!("  about:  {}", challenge.mode.description());
    println!("  target: {}", challenge.puzzle().target());
    if completed {
        println!("  done:   {}%", store.daily.score);
    }

    println!("\nBest scores");
    for mode in GameMode::ALL {
        println!("  {:<13} {:>3}%", mode.as_str(), store.best_score(mode));
    }
    println!("  {:<13} {:>3}%", "Daily", store.best.daily);
    println!("  {:<13} {:>3}%", "Overall", store.best.overall_average());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on wasm
}
