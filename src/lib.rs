//! Flappy - A side-scrolling obstacle-avoidance arcade game
//!
//! Core modules:
//! - `sim`: Deterministic play-state simulation (physics, pipes, scoring, countdown)
//! - `scene`: Scene lifecycle around the simulation (create/update/pause/resume/restart)
//! - `ui`: Menu, score and pause screens built from a shared screen capability
//! - `platform`: Storage backends and input mapping for web/native
//! - `tuning`: Data-driven game balance

pub mod best_score;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use best_score::{BEST_SCORE_KEY, read_best_score, set_best_score};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 600.0;

    /// Actor start position (top-left of sprite)
    pub const START_X: f32 = WIDTH / 10.0;
    pub const START_Y: f32 = HEIGHT / 2.0;

    /// Actor sprite: 16px frame drawn at scale 2
    pub const ACTOR_WIDTH: f32 = 32.0;
    pub const ACTOR_HEIGHT: f32 = 32.0;
    /// Physics hitbox is 8px shorter than the frame, scaled, centered vertically
    pub const ACTOR_HITBOX_HEIGHT: f32 = 16.0;

    /// Pipe sprite size. Tall enough to cover the field on either side of a gap.
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 600.0;

    /// Gap must stay this far from the top and bottom edges
    pub const PIPE_MARGIN: i32 = 20;

    /// Pause button (bottom-right, 14px icon at scale 2)
    pub const PAUSE_BUTTON_SIZE: f32 = 28.0;
    pub const PAUSE_BUTTON_INSET: f32 = 10.0;

    /// Default frame step used by headless runners (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum dt accepted per frame to avoid tunnelling through pipes
    pub const MAX_FRAME_DT: f32 = 0.1;
}
