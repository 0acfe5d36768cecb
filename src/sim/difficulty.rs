//! Difficulty curve
//!
//! Score thresholds move the game from easy to normal to hard. Levels only
//! ever go up within a session; a restart puts the session back on easy.

use serde::{Deserialize, Serialize};

/// Score at which the game switches to normal
pub const NORMAL_AT_SCORE: u32 = 3;
/// Score at which the game switches to hard
pub const HARD_AT_SCORE: u32 = 6;

/// Difficulty levels, ordered from easiest to hardest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

/// Level after reaching `score`, starting from `current`
pub fn next_difficulty(current: Difficulty, score: u32) -> Difficulty {
    let threshold = match score {
        NORMAL_AT_SCORE => Difficulty::Normal,
        HARD_AT_SCORE => Difficulty::Hard,
        _ => return current,
    };
    current.max(threshold)
}
