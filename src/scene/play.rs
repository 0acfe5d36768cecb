//! Play scene lifecycle
//!
//! Wraps a `GameState` with the scene hooks a host drives: `create`,
//! `update` once per frame, `pause`, `resume`, `restart` and `shutdown`.
//! While suspended nothing advances, not even timers. The resume listener is
//! subscribed once in `create` and removed in `shutdown`.

use super::events::{SceneEvent, SceneEvents, SubscriptionId};
use crate::best_score::read_best_score;
use crate::consts::MAX_FRAME_DT;
use crate::platform::storage::KeyValueStore;
use crate::sim::{self, GameEvent, GameState, TickInput};
use crate::tuning::Tuning;

pub struct PlayScene {
    state: GameState,
    events: SceneEvents,
    resume_listener: Option<SubscriptionId>,
    suspended: bool,
}

impl PlayScene {
    /// Build the scene and its first session
    pub fn create(seed: u64, tuning: Tuning, store: &dyn KeyValueStore) -> Self {
        let state = GameState::new(seed, tuning, read_best_score(store));
        let mut events = SceneEvents::new();
        let resume_listener = Some(events.subscribe(SceneEvent::Resume));
        Self {
            state,
            events,
            resume_listener,
            suspended: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn events(&self) -> &SceneEvents {
        &self.events
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// One frame. Returns what happened; a `Paused` event means the scene
    /// has suspended itself and the pause overlay should take over.
    pub fn update(
        &mut self,
        input: &TickInput,
        dt: f32,
        store: &mut dyn KeyValueStore,
    ) -> Vec<GameEvent> {
        if self.suspended {
            return Vec::new();
        }

        sim::tick(&mut self.state, input, dt.min(MAX_FRAME_DT), store);
        let events = self.state.drain_events();
        if events.contains(&GameEvent::Paused) {
            self.suspend();
        }
        events
    }

    /// Pause-control activation outside of `update` (e.g. focus loss)
    pub fn pause(&mut self) -> bool {
        if self.suspended || !sim::pause(&mut self.state) {
            return false;
        }
        self.suspend();
        true
    }

    fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Hand control back from the overlay; starts the countdown
    pub fn resume(&mut self) -> bool {
        if !self.suspended {
            return false;
        }
        self.suspended = false;

        let listeners = self.events.emit(SceneEvent::Resume);
        if self
            .resume_listener
            .is_some_and(|id| listeners.contains(&id))
        {
            sim::begin_countdown(&mut self.state);
        }
        true
    }

    /// Full session reset
    pub fn restart(&mut self, store: &dyn KeyValueStore) {
        self.suspended = false;
        sim::restart(&mut self.state, store);
    }

    /// Tear down: drop timers and the resume subscription
    pub fn shutdown(&mut self) {
        if let Some(id) = self.resume_listener.take() {
            self.events.unsubscribe(id);
        }
        self.state.timers.clear();
        self.state.pause.countdown = None;
        self.suspended = true;
        log::info!("Play scene shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BEST_SCORE_KEY;
    use crate::consts::FRAME_DT;
    use crate::platform::storage::MemoryStore;
    use crate::sim::GamePhase;

    fn scene(store: &MemoryStore) -> PlayScene {
        PlayScene::create(42, Tuning::default(), store)
    }

    fn pause_press() -> TickInput {
        TickInput {
            flap: true,
            pause: true,
        }
    }

    #[test]
    fn test_create_reads_best_score() {
        let mut store = MemoryStore::new();
        store.set_item(BEST_SCORE_KEY, "9");
        let scene = scene(&store);
        assert_eq!(scene.state().hud.best_text, "Best score: 9");
        assert_eq!(scene.events().listener_count(SceneEvent::Resume), 1);
    }

    #[test]
    fn test_pause_suspends_everything() {
        let mut store = MemoryStore::new();
        let mut scene = scene(&store);

        let events = scene.update(&pause_press(), FRAME_DT, &mut store);
        assert!(events.contains(&GameEvent::Paused));
        assert!(scene.is_suspended());
        assert_eq!(scene.events().listener_count(SceneEvent::Resume), 1);

        let ticks = scene.state().time_ticks;
        assert!(scene.update(&TickInput::default(), 5.0, &mut store).is_empty());
        assert_eq!(scene.state().time_ticks, ticks);
    }

    #[test]
    fn test_resume_runs_countdown_then_flaps_work() {
        let mut store = MemoryStore::new();
        let mut scene = scene(&store);
        scene.update(&pause_press(), FRAME_DT, &mut store);

        assert!(scene.resume());
        assert_eq!(scene.state().hud.countdown_text, "Fly in: 3");

        let flap = TickInput {
            flap: true,
            pause: false,
        };
        let mut steps = Vec::new();
        // 3 seconds of 0.1s frames, with slack
        for _ in 0..40 {
            for event in scene.update(&flap, 0.1, &mut store) {
                if let GameEvent::CountdownStep(n) = event {
                    steps.push(n);
                }
            }
            if !scene.state().is_paused() {
                break;
            }
            assert_eq!(scene.state().actor.body.vel.y, 0.0);
        }
        assert_eq!(steps, vec![2, 1, 0]);
        assert!(!scene.state().is_paused());
        assert!(scene.state().timers.is_empty());

        scene.update(&flap, FRAME_DT, &mut store);
        assert!(scene.state().actor.body.vel.y < 0.0);
    }

    #[test]
    fn test_resume_without_pause_is_ignored() {
        let store = MemoryStore::new();
        let mut scene = scene(&store);
        assert!(!scene.resume());
        assert!(!scene.state().is_counting_down());
    }

    #[test]
    fn test_shutdown_unsubscribes() {
        let mut store = MemoryStore::new();
        let mut scene = scene(&store);
        scene.update(&pause_press(), FRAME_DT, &mut store);
        scene.shutdown();

        assert_eq!(scene.events().listener_count(SceneEvent::Resume), 0);
        scene.resume();
        assert!(!scene.state().is_counting_down());
        assert!(scene.state().timers.is_empty());
    }

    #[test]
    fn test_restart_keeps_single_listener() {
        let mut store = MemoryStore::new();
        let mut scene = scene(&store);
        scene.state_mut().actor.body.pos.y = 0.0;
        scene.update(&TickInput::default(), FRAME_DT, &mut store);
        assert_eq!(scene.state().phase, GamePhase::GameOver);

        scene.restart(&store);
        scene.restart(&store);
        assert_eq!(scene.state().phase, GamePhase::Playing);
        assert_eq!(scene.events().listener_count(SceneEvent::Resume), 1);
    }
}
