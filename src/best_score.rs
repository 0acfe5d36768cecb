//! Best score persistence
//!
//! A single decimal string under `"bestScore"`. Missing or unparseable values
//! read as 0 and are never treated as errors.

use crate::platform::storage::KeyValueStore;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "bestScore";

/// Read the persisted best score (absent/corrupt -> 0)
pub fn read_best_score(store: &dyn KeyValueStore) -> u32 {
    store
        .get_item(BEST_SCORE_KEY)
        .and_then(|text| text.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Write `score` if it beats the stored best. Returns true when written.
pub fn set_best_score(store: &mut dyn KeyValueStore, score: u32) -> bool {
    let best = read_best_score(store);
    if score > best {
        store.set_item(BEST_SCORE_KEY, &score.to_string());
        log::info!("New best score: {score} (was {best})");
        true
    } else {
        false
    }
}
