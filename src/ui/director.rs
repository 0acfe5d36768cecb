//! Scene director
//!
//! Owns the store and the play scene, and moves between the menu, score
//! screen, play and the pause overlay. The play scene is created when Play is
//! chosen and shut down when the player exits from the pause overlay.

use serde::{Deserialize, Serialize};

use super::screen::{MenuAction, Screen, ScreenView, menu_screen, pause_screen, score_screen};
use crate::best_score::read_best_score;
use crate::platform::storage::KeyValueStore;
use crate::scene::PlayScene;
use crate::sim::{GameEvent, TickInput};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKey {
    Menu,
    Score,
    Play,
    /// Overlay on top of a suspended play scene
    Pause,
}

pub struct Director<S: KeyValueStore> {
    store: S,
    tuning: Tuning,
    seed: u64,
    screen: Screen,
    active: SceneKey,
    play: Option<PlayScene>,
    plays_started: u64,
    running: bool,
}

impl<S: KeyValueStore> Director<S> {
    pub fn new(store: S, tuning: Tuning, seed: u64) -> Self {
        Self {
            store,
            tuning,
            seed,
            screen: Screen::default(),
            active: SceneKey::Menu,
            play: None,
            plays_started: 0,
            running: true,
        }
    }

    pub fn active(&self) -> SceneKey {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn play(&self) -> Option<&PlayScene> {
        self.play.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The screen to present, if the active scene is a menu-style screen
    pub fn view(&self) -> Option<ScreenView> {
        match self.active {
            SceneKey::Menu => Some(menu_screen(&self.screen)),
            SceneKey::Score => Some(score_screen(&self.screen, read_best_score(&self.store))),
            SceneKey::Pause => Some(pause_screen(&self.screen)),
            SceneKey::Play => None,
        }
    }

    /// Pick the `index`th item of the current screen
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.view().and_then(|view| view.action_at(index)) {
            Some(action) => self.select(action),
            None => false,
        }
    }

    /// Apply a menu action. Returns false if the current screen doesn't offer it.
    pub fn select(&mut self, action: MenuAction) -> bool {
        if !self.view().is_some_and(|view| view.offers(action)) {
            return false;
        }

        match (self.active, action) {
            (SceneKey::Menu, MenuAction::Play) => self.start_play(),
            (SceneKey::Menu, MenuAction::Score) => self.active = SceneKey::Score,
            (SceneKey::Menu, MenuAction::Exit) => {
                log::info!("Exit requested");
                self.running = false;
            }
            (SceneKey::Score, MenuAction::Back) => self.active = SceneKey::Menu,
            (SceneKey::Pause, MenuAction::Continue) => {
                if let Some(play) = self.play.as_mut() {
                    play.resume();
                }
                self.active = SceneKey::Play;
            }
            (SceneKey::Pause, MenuAction::Exit) => {
                if let Some(mut play) = self.play.take() {
                    play.shutdown();
                }
                self.active = SceneKey::Menu;
            }
            _ => return false,
        }
        true
    }

    fn start_play(&mut self) {
        let seed = self.seed.wrapping_add(self.plays_started);
        self.plays_started += 1;
        self.play = Some(PlayScene::create(seed, self.tuning.clone(), &self.store));
        self.active = SceneKey::Play;
    }

    /// One frame. Only the play scene consumes tick input.
    pub fn update(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        if self.active != SceneKey::Play {
            return Vec::new();
        }
        let Some(play) = self.play.as_mut() else {
            return Vec::new();
        };

        let events = play.update(input, dt, &mut self.store);
        if play.is_suspended() {
            self.active = SceneKey::Pause;
        }
        events
    }

    /// Pause from outside the input stream (focus loss)
    pub fn pause(&mut self) -> bool {
        if self.active != SceneKey::Play {
            return false;
        }
        let paused = self.play.as_mut().is_some_and(|play| play.pause());
        if paused {
            self.active = SceneKey::Pause;
        }
        paused
    }
}
