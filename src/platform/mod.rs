//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, a JSON file on native, memory in tests)
//! - Input events (pointer-down mapped to flap/pause)
//! - The wasm handle driven by the JS renderer

pub mod input;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::pointer_down;
pub use storage::{KeyValueStore, MemoryStore};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
