//! Browser entry points
//!
//! The JS host owns the canvas, the animation frame loop and the pointer
//! listeners. It forwards them here and draws whatever `snapshot` returns.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::input::pointer_down;
use super::storage::LocalStore;
use crate::sim::{GameEvent, Snapshot, TickInput};
use crate::tuning::Tuning;
use crate::ui::{Director, SceneKey, ScreenView};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Flappy (web) starting...");
}

/// Everything the renderer needs for one frame
#[derive(Serialize)]
struct WebFrame<'a> {
    scene: SceneKey,
    view: Option<ScreenView>,
    game: Option<Snapshot>,
    events: &'a [GameEvent],
}

#[wasm_bindgen]
pub struct WebGame {
    director: Director<LocalStore>,
    input: TickInput,
    last_events: Vec<GameEvent>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let store = LocalStore;
        let tuning = Tuning::load(&store);
        let seed = js_sys::Date::now() as u64;
        WebGame {
            director: Director::new(store, tuning, seed),
            input: TickInput::default(),
            last_events: Vec::new(),
        }
    }

    /// Advance by `dt` seconds, consuming queued input
    pub fn frame(&mut self, dt: f32) {
        let input = std::mem::take(&mut self.input);
        self.last_events = self.director.update(&input, dt);
    }

    /// Queue a pointer-down for the next frame
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let input = pointer_down(x, y);
        self.input.flap |= input.flap;
        self.input.pause |= input.pause;
    }

    /// Choose the `index`th item on the current menu screen
    pub fn select(&mut self, index: usize) -> bool {
        self.director.select_index(index)
    }

    /// Window lost focus
    pub fn blur(&mut self) {
        if self.director.pause() {
            log::info!("Auto-paused (window blur)");
        }
    }

    pub fn is_running(&self) -> bool {
        self.director.is_running()
    }

    /// JSON frame for the renderer
    pub fn snapshot(&self) -> String {
        let frame = WebFrame {
            scene: self.director.active(),
            view: self.director.view(),
            game: self.director.play().map(|play| play.state().snapshot()),
            events: &self.last_events,
        };
        serde_json::to_string(&frame).unwrap_or_else(|e| {
            log::warn!("Snapshot failed: {e}");
            String::from("{}")
        })
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
