//! Data-driven game balance
//!
//! Persisted as JSON alongside the best score. Anything not fixed by the
//! play field layout lives here so it can be tweaked without a rebuild.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{HEIGHT, PIPE_MARGIN};
use crate::platform::storage::KeyValueStore;
use crate::sim::Difficulty;

/// Inclusive integer range used for random draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min: i32,
    pub max: i32,
}

impl SpawnRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Spawn ranges for a single difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRanges {
    /// Horizontal spacing between consecutive pairs
    pub pipe_distance_range: SpawnRange,
    /// Vertical opening between upper and lower pipe
    pub pipe_opening_range: SpawnRange,
}

/// Spawn ranges for every difficulty level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    pub easy: DifficultyRanges,
    pub normal: DifficultyRanges,
    pub hard: DifficultyRanges,
}

impl DifficultyTable {
    pub fn ranges(&self, level: Difficulty) -> &DifficultyRanges {
        match level {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (Difficulty, &DifficultyRanges)> {
        [
            (Difficulty::Easy, &self.easy),
            (Difficulty::Normal, &self.normal),
            (Difficulty::Hard, &self.hard),
        ]
        .into_iter()
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultyRanges {
                pipe_distance_range: SpawnRange::new(300, 350),
                pipe_opening_range: SpawnRange::new(150, 200),
            },
            normal: DifficultyRanges {
                pipe_distance_range: SpawnRange::new(280, 330),
                pipe_opening_range: SpawnRange::new(140, 190),
            },
            hard: DifficultyRanges {
                pipe_distance_range: SpawnRange::new(250, 310),
                pipe_opening_range: SpawnRange::new(120, 170),
            },
        }
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration on the actor (units/s²)
    pub gravity: f32,
    /// Upward velocity set by a flap (units/s)
    pub flap_velocity: f32,
    /// Horizontal velocity shared by every pipe (units/s, negative = left)
    pub pipe_velocity: f32,
    /// Number of pipe pairs in the pool
    pub pipes_to_render: usize,
    /// Delay between game over and the session restart
    pub restart_delay_ms: u32,
    /// Countdown start value shown after resuming
    pub countdown_from: u32,
    /// Interval between countdown steps
    pub countdown_interval_ms: u32,
    pub difficulties: DifficultyTable,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 600.0,
            flap_velocity: 300.0,
            pipe_velocity: -200.0,
            pipes_to_render: 4,
            restart_delay_ms: 1000,
            countdown_from: 3,
            countdown_interval_ms: 1000,
            difficulties: DifficultyTable::default(),
        }
    }
}

/// Reasons a tuning file is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    Parse(String),
    EmptyPool,
    InvertedRange { level: Difficulty, field: &'static str },
    NonPositiveSpacing { level: Difficulty },
    NonPositiveOpening { level: Difficulty },
    /// `HEIGHT - margin - opening.max` would fall below the top margin
    OpeningTooLarge { level: Difficulty, max: i32 },
    NonPositiveInterval,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(msg) => write!(f, "invalid tuning JSON: {msg}"),
            TuningError::EmptyPool => write!(f, "pipes_to_render must be at least 1"),
            TuningError::InvertedRange { level, field } => {
                write!(f, "{} {field} has min > max", level.as_str())
            }
            TuningError::NonPositiveSpacing { level } => {
                write!(f, "{} pipe_distance_range must be positive", level.as_str())
            }
            TuningError::NonPositiveOpening { level } => {
                write!(f, "{} pipe_opening_range must be positive", level.as_str())
            }
            TuningError::OpeningTooLarge { level, max } => write!(
                f,
                "{} pipe_opening_range max {max} leaves no room for the {PIPE_MARGIN}px margins",
                level.as_str()
            ),
            TuningError::NonPositiveInterval => {
                write!(f, "countdown_interval_ms and restart_delay_ms must be positive")
            }
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Storage key for tuning overrides
    pub const STORAGE_KEY: &'static str = "flappy_tuning";

    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the constraints the spawner relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.pipes_to_render == 0 {
            return Err(TuningError::EmptyPool);
        }
        if self.countdown_interval_ms == 0 || self.restart_delay_ms == 0 {
            return Err(TuningError::NonPositiveInterval);
        }

        let height = HEIGHT as i64;
        let margin = i64::from(PIPE_MARGIN);
        for (level, ranges) in self.difficulties.iter() {
            if ranges.pipe_distance_range.min > ranges.pipe_distance_range.max {
                return Err(TuningError::InvertedRange {
                    level,
                    field: "pipe_distance_range",
                });
            }
            if ranges.pipe_opening_range.min > ranges.pipe_opening_range.max {
                return Err(TuningError::InvertedRange {
                    level,
                    field: "pipe_opening_range",
                });
            }
            if ranges.pipe_distance_range.min <= 0 {
                return Err(TuningError::NonPositiveSpacing { level });
            }
            if ranges.pipe_opening_range.min <= 0 {
                return Err(TuningError::NonPositiveOpening { level });
            }
            let max = ranges.pipe_opening_range.max;
            if height - margin - i64::from(max) < margin {
                return Err(TuningError::OpeningTooLarge { level, max });
            }
        }
        Ok(())
    }

    /// Load tuning overrides from storage, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get_item(Self::STORAGE_KEY) {
            match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    return tuning;
                }
                Err(e) => log::warn!("Ignoring stored tuning: {e}"),
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to storage
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set_item(Self::STORAGE_KEY, &json);
            log::info!("Tuning saved");
        }
    }
}
