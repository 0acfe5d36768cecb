//! Per-frame simulation tick
//!
//! Order within a tick:
//! 1. input (pause, then flap)
//! 2. scene clock timers (restart, countdown steps)
//! 3. termination check on current positions
//! 4. physics step and pipe collisions
//! 5. recycle sweep

use super::countdown::count_down;
use super::pool::recycle_pipes;
use super::scoring;
use super::state::{GameEvent, GamePhase, GameState};
use super::timer::TimerEvent;
use crate::best_score::read_best_score;
use crate::consts::HEIGHT;
use crate::platform::storage::KeyValueStore;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Primary action (pointer-down / space)
    pub flap: bool,
    /// Pause button
    pub pause: bool,
}

/// Advance the play session by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, store: &mut dyn KeyValueStore) {
    if input.pause && pause(state) {
        return;
    }
    if input.flap {
        flap(state);
    }

    for (_, event) in state.timers.advance(dt * 1000.0) {
        match event {
            TimerEvent::Restart => {
                restart(state, store);
                return;
            }
            TimerEvent::CountdownTick => {
                count_down(state);
            }
        }
    }

    state.time_ticks += 1;

    if state.phase != GamePhase::Playing {
        return;
    }

    check_game_status(state, store);
    if state.phase == GamePhase::Playing && !state.physics_paused {
        step_physics(state, dt);
        if actor_hits_pipe(state) {
            game_over(state, store);
        }
    }

    if state.phase == GamePhase::Playing {
        recycle_pipes(state, store);
    }
}

/// Upward impulse, ignored while paused (including the countdown)
pub fn flap(state: &mut GameState) {
    if state.pause.paused {
        return;
    }
    state.actor.flap(state.tuning.flap_velocity);
    state.events.push(GameEvent::Flapped);
}

/// Freeze physics and mark the session paused. Only a live, unpaused session
/// can be paused; returns whether the pause took effect.
pub fn pause(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing || state.pause.paused {
        return false;
    }
    state.pause.paused = true;
    state.physics_paused = true;
    state.events.push(GameEvent::Paused);
    log::info!("Paused at score {}", state.score);
    true
}

/// Out of bounds: display bottom on the floor or top at the ceiling
pub fn check_game_status(state: &mut GameState, store: &mut dyn KeyValueStore) {
    let bounds = state.actor.body.bounds();
    if bounds.bottom() >= HEIGHT || bounds.top() <= 0.0 {
        game_over(state, store);
    }
}

fn step_physics(state: &mut GameState, dt: f32) {
    let world = state.world_bounds();
    state.actor.body.integrate(dt);
    state.actor.body.clamp_to(&world);

    let dx = state.tuning.pipe_velocity * dt;
    for pipe in &mut state.pipes {
        pipe.pos.x += dx;
    }
}

fn actor_hits_pipe(state: &GameState) -> bool {
    let hitbox = state.actor.body.hitbox();
    state.pipes.iter().any(|pipe| hitbox.overlaps(&pipe.bounds()))
}

/// Enter game over once per session: freeze, tint, persist, schedule restart
pub fn game_over(state: &mut GameState, store: &mut dyn KeyValueStore) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.physics_paused = true;
    state.actor.hit = true;
    state.actor.alive = false;

    scoring::set_best_score(state, store);

    state.restart_timer = Some(
        state
            .timers
            .schedule_once(state.tuning.restart_delay_ms, TimerEvent::Restart),
    );
    state.events.push(GameEvent::GameOver { score: state.score });
    log::info!("Game over with score {}", state.score);
}

/// Fresh session with the HUD showing the current persisted best
pub fn restart(state: &mut GameState, store: &dyn KeyValueStore) {
    let best = read_best_score(store);
    state.reset(best);
    state.events.push(GameEvent::Restarted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::consts::{FRAME_DT, PIPE_WIDTH};
    use crate::platform::storage::MemoryStore;
    use crate::sim::Difficulty;
    use crate::sim::countdown::begin_countdown;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(12345, Tuning::default(), 0)
    }

    #[test]
    fn test_actor_at_ceiling_ends_game() {
        let mut state = state();
        let mut store = MemoryStore::new();
        state.pipes.clear();
        state.actor.body.pos.y = 0.0;

        tick(&mut state, &TickInput::default(), FRAME_DT, &mut store);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.actor.hit);
        assert!(state.physics_paused);
        assert!(state.restart_timer.is_some());
    }

    #[test]
    fn test_falling_to_floor_ends_game() {
        let mut state = state();
        let mut store = MemoryStore::new();
        let input = TickInput::default();

        let mut frames = 0;
        while state.phase == GamePhase::Playing && frames < 600 {
            tick(&mut state, &input, FRAME_DT, &mut store);
            frames += 1;
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        // Display box reached the floor (hitbox clamps 8px above it)
        assert!(state.actor.body.bounds().bottom() >= 600.0);
    }

    #[test]
    fn test_pipe_collision_ends_game() {
        let mut state = state();
        let mut store = MemoryStore::new();
        state.actor.body.pos = Vec2::new(40.0, 300.0);
        // Put a lower pipe right under the actor
        state.pipes[1].pos = Vec2::new(30.0, 310.0);

        tick(&mut state, &TickInput::default(), FRAME_DT, &mut store);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_freezes_and_schedules_one_restart() {
        let mut state = state();
        let mut store = MemoryStore::new();
        state.actor.body.pos.y = 0.0;

        tick(&mut state, &TickInput::default(), FRAME_DT, &mut store);
        let frozen = state.actor.body.pos;
        let pipes: Vec<_> = state.pipes.iter().map(|p| p.pos).collect();

        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), FRAME_DT, &mut store);
        }
        assert_eq!(state.actor.body.pos, frozen);
        assert_eq!(pipes, state.pipes.iter().map(|p| p.pos).collect::<Vec<_>>());
        assert_eq!(state.timers.len(), 1);
    }

    #[test]
    fn test_restart_after_delay() {
        let mut state = state();
        let mut store = MemoryStore::new();
        state.score = 5;
        state.difficulty = Difficulty::Normal;
        state.actor.body.pos.y = 0.0;

        tick(&mut state, &TickInput::default(), FRAME_DT, &mut store);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(store.get_item(crate::BEST_SCORE_KEY).as_deref(), Some("5"));

        tick(&mut state, &TickInput::default(), 0.5, &mut store);
        assert_eq!(state.phase, GamePhase::GameOver);
        tick(&mut state, &TickInput::default(), 0.5, &mut store);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.actor.body.pos, Vec2::new(40.0, 300.0));
        assert!(!state.actor.hit);
        assert_eq!(state.hud.best_text, "Best score: 5");
        assert!(state.drain_events().contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_flap_sets_upward_velocity() {
        let mut state = state();
        state.actor.body.vel.y = 250.0;
        flap(&mut state);
        assert_eq!(state.actor.body.vel.y, -300.0);
    }

    #[test]
    fn test_flap_ignored_while_paused() {
        let mut state = state();
        let mut store = MemoryStore::new();
        assert!(pause(&mut state));
        begin_countdown(&mut state);
        state.actor.body.vel.y = 0.0;

        let input = TickInput {
            flap: true,
            pause: false,
        };
        tick(&mut state, &input, FRAME_DT, &mut store);
        assert_eq!(state.actor.body.vel.y, 0.0);
        assert!(!state.drain_events().contains(&GameEvent::Flapped));
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut state = state();
        let mut store = MemoryStore::new();
        let pause_input = TickInput {
            flap: true,
            pause: true,
        };
        tick(&mut state, &pause_input, FRAME_DT, &mut store);
        assert!(state.is_paused());
        assert!(state.physics_paused);
        assert_eq!(state.actor.body.vel.y, 0.0);

        let before = state.actor.body.pos;
        tick(&mut state, &TickInput::default(), FRAME_DT, &mut store);
        assert_eq!(state.actor.body.pos, before);
    }

    #[test]
    fn test_pause_ignored_after_game_over() {
        let mut state = state();
        let mut store = MemoryStore::new();
        state.actor.body.pos.y = 0.0;
        tick(&mut state, &TickInput::default(), FRAME_DT, &mut store);

        assert!(!pause(&mut state));
        assert!(!state.is_paused());
    }

    #[test]
    fn test_countdown_resumes_through_tick() {
        let mut state = state();
        let mut store = MemoryStore::new();
        state.actor.body.gravity = 0.0;
        pause(&mut state);
        begin_countdown(&mut state);

        for expected in ["Fly in: 2", "Fly in: 1"] {
            tick(&mut state, &TickInput::default(), 1.0, &mut store);
            assert_eq!(state.hud.countdown_text, expected);
            assert!(state.is_paused());
        }
        tick(&mut state, &TickInput::default(), 1.0, &mut store);
        assert!(!state.is_paused());
        assert!(!state.physics_paused);
        assert!(state.timers.is_empty());
    }

    #[test]
    fn test_pipes_scroll_and_recycle() {
        let mut state = state();
        let mut store = MemoryStore::new();
        // Park the actor mid-air with no gravity so only pipes move
        state.actor.body.gravity = 0.0;
        state.actor.body.pos = Vec2::new(40.0, 300.0);
        state.pipes[0].pos.x = -PIPE_WIDTH + 1.0;
        state.pipes[1].pos.x = -PIPE_WIDTH + 1.0;
        for pipe in state.pipes.iter_mut().skip(2) {
            pipe.pos.x += 1000.0;
        }

        tick(&mut state, &TickInput::default(), FRAME_DT, &mut store);
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].pos.x > 1000.0);
    }
}
