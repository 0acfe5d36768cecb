//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies beyond the injected store

pub mod body;
pub mod countdown;
pub mod difficulty;
pub mod pool;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;

pub use body::{Aabb, Body};
pub use countdown::{Countdown, begin_countdown, count_down};
pub use difficulty::{Difficulty, next_difficulty};
pub use pool::{create_pipes, find_recyclable, recycle_pipes};
pub use spawner::{place_pair, rightmost_x};
pub use state::{
    Actor, GameEvent, GamePhase, GameState, Hud, PauseState, Pipe, PipeKind, Snapshot,
};
pub use tick::{TickInput, flap, game_over, pause, restart, tick};
pub use timer::{Scheduler, TimerEvent, TimerHandle};
