//! Menu, score and pause screens
//!
//! Presentation is left to the host; these types say what each screen shows
//! and where each choice leads.

pub mod director;
pub mod screen;

pub use director::{Director, SceneKey};
pub use screen::{MenuAction, MenuItem, Screen, ScreenView};
