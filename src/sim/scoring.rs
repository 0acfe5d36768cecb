//! Score keeping for a session

use super::state::{GameEvent, GameState};
use crate::best_score;
use crate::platform::storage::KeyValueStore;

/// A pair was passed: +1 and refresh the score text
pub fn increase_score(state: &mut GameState) {
    state.score += 1;
    state.hud.score_text = format!("Score: {}", state.score);
    state.events.push(GameEvent::PairRecycled { score: state.score });
}

/// Persist the session score if it beats the stored best
pub fn set_best_score(state: &GameState, store: &mut dyn KeyValueStore) -> bool {
    best_score::set_best_score(store, state.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;
    use crate::{Tuning, read_best_score};

    #[test]
    fn test_increase_by_exactly_one() {
        let mut state = GameState::new(1, Tuning::default(), 0);
        increase_score(&mut state);
        increase_score(&mut state);
        assert_eq!(state.score, 2);
        assert_eq!(state.hud.score_text, "Score: 2");
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::PairRecycled { score: 1 },
                GameEvent::PairRecycled { score: 2 }
            ]
        );
    }

    #[test]
    fn test_lower_score_keeps_best() {
        let mut store = MemoryStore::new();
        store.set_item(crate::BEST_SCORE_KEY, "10");
        let mut state = GameState::new(1, Tuning::default(), 10);
        state.score = 4;
        assert!(!set_best_score(&state, &mut store));
        assert_eq!(read_best_score(&store), 10);
    }
}
