//! Game state and core simulation types
//!
//! Everything a play session owns lives here. `GameState::reset` is the
//! scene restart: it rebuilds the session but keeps the RNG stream going so
//! successive sessions differ.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Aabb, Body};
use super::countdown::Countdown;
use super::difficulty::Difficulty;
use super::pool;
use super::timer::{Scheduler, TimerHandle};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Actor is flying
    Playing,
    /// Actor hit something; physics frozen, restart scheduled
    GameOver,
}

/// The player-controlled actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub body: Body,
    pub alive: bool,
    /// Tinted red after a collision
    pub hit: bool,
}

impl Actor {
    pub fn new(gravity: f32) -> Self {
        Self {
            body: Body {
                pos: Vec2::new(START_X, START_Y),
                vel: Vec2::ZERO,
                size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
                hitbox_offset: Vec2::new(0.0, (ACTOR_HEIGHT - ACTOR_HITBOX_HEIGHT) / 2.0),
                hitbox_size: Vec2::new(ACTOR_WIDTH, ACTOR_HITBOX_HEIGHT),
                gravity,
            },
            alive: true,
            hit: false,
        }
    }

    /// Replace vertical velocity with an upward impulse
    pub fn flap(&mut self, velocity: f32) {
        self.body.vel.y = -velocity;
    }
}

/// Which half of a pair a pipe is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeKind {
    /// Anchored at its bottom edge (hangs from above)
    Upper,
    /// Anchored at its top edge (rises from below)
    Lower,
}

/// One obstacle. Pairs are consecutive entries in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub kind: PipeKind,
    /// Anchor: left edge and the edge facing the gap
    pub pos: Vec2,
}

impl Pipe {
    pub fn new(kind: PipeKind) -> Self {
        Self {
            kind,
            pos: Vec2::ZERO,
        }
    }

    pub fn bounds(&self) -> Aabb {
        let top = match self.kind {
            PipeKind::Upper => self.pos.y - PIPE_HEIGHT,
            PipeKind::Lower => self.pos.y,
        };
        Aabb::new(self.pos.x, top, PIPE_WIDTH, PIPE_HEIGHT)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + PIPE_WIDTH
    }
}

/// Pause flag plus the resume countdown, when one is running
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PauseState {
    pub paused: bool,
    pub countdown: Option<Countdown>,
}

/// Text shown over the play field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score_text: String,
    pub best_text: String,
    pub countdown_text: String,
}

impl Hud {
    pub fn new(score: u32, best: u32) -> Self {
        Self {
            score_text: format!("Score: {score}"),
            best_text: format!("Best score: {best}"),
            countdown_text: String::new(),
        }
    }
}

/// Things that happened during a tick, drained by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Flapped,
    PairRecycled { score: u32 },
    DifficultyChanged(Difficulty),
    GameOver { score: u32 },
    Restarted,
    Paused,
    CountdownStarted,
    CountdownStep(u32),
    Resumed,
}

/// Complete play session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub actor: Actor,
    /// Fixed pool: upper, lower, upper, lower, ...
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub pause: PauseState,
    /// Velocities stop integrating while set
    pub physics_paused: bool,
    pub timers: Scheduler,
    pub restart_timer: Option<TimerHandle>,
    pub hud: Hud,
    /// Ticks simulated in this session
    pub time_ticks: u64,
    /// Sessions started since construction (1-based)
    pub session: u32,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session. `best_score` only seeds the HUD text.
    pub fn new(seed: u64, tuning: Tuning, best_score: u32) -> Self {
        let mut state = Self {
            actor: Actor::new(tuning.gravity),
            pipes: Vec::new(),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            difficulty: Difficulty::Easy,
            phase: GamePhase::Playing,
            pause: PauseState::default(),
            physics_paused: false,
            timers: Scheduler::new(),
            restart_timer: None,
            hud: Hud::default(),
            time_ticks: 0,
            session: 0,
            events: Vec::new(),
        };
        state.reset(best_score);
        state
    }

    /// Full session reset: score, difficulty, actor, pool, timers and HUD
    pub fn reset(&mut self, best_score: u32) {
        self.score = 0;
        self.difficulty = Difficulty::Easy;
        self.phase = GamePhase::Playing;
        self.pause = PauseState::default();
        self.physics_paused = false;
        self.timers.clear();
        self.restart_timer = None;
        self.actor = Actor::new(self.tuning.gravity);
        self.pipes = pool::create_pipes(
            self.tuning.pipes_to_render,
            self.tuning.difficulties.ranges(self.difficulty),
            &mut self.rng,
        );
        self.hud = Hud::new(self.score, best_score);
        self.time_ticks = 0;
        self.session += 1;
        log::info!("Session {} started (seed {})", self.session, self.seed);
    }

    /// Play field bounds
    pub fn world_bounds(&self) -> Aabb {
        Aabb::new(0.0, 0.0, WIDTH, HEIGHT)
    }

    pub fn is_paused(&self) -> bool {
        self.pause.paused
    }

    pub fn is_counting_down(&self) -> bool {
        self.pause.countdown.is_some()
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Serializable view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            actor: self.actor.clone(),
            pipes: self.pipes.clone(),
            score: self.score,
            difficulty: self.difficulty,
            phase: self.phase,
            paused: self.pause.paused,
            hud: self.hud.clone(),
        }
    }
}

/// Render-facing copy of the visible state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub actor: Actor,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub paused: bool,
    pub hud: Hud,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(7, Tuning::default(), 4);
        assert_eq!(state.pipes.len(), 8);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.actor.body.pos, Vec2::new(40.0, 300.0));
        assert_eq!(state.hud.score_text, "Score: 0");
        assert_eq!(state.hud.best_text, "Best score: 4");
        assert_eq!(state.session, 1);

        for pair in state.pipes.chunks(2) {
            assert_eq!(pair[0].kind, PipeKind::Upper);
            assert_eq!(pair[1].kind, PipeKind::Lower);
            assert_eq!(pair[0].pos.x, pair[1].pos.x);
        }
    }

    #[test]
    fn test_pipe_bounds_face_the_gap() {
        let upper = Pipe {
            kind: PipeKind::Upper,
            pos: Vec2::new(100.0, 200.0),
        };
        let lower = Pipe {
            kind: PipeKind::Lower,
            pos: Vec2::new(100.0, 350.0),
        };
        assert_eq!(upper.bounds().bottom(), 200.0);
        assert_eq!(lower.bounds().top(), 350.0);
        assert_eq!(upper.right(), 152.0);
    }

    #[test]
    fn test_actor_hitbox_is_centered() {
        let actor = Actor::new(600.0);
        let hit = actor.body.hitbox();
        assert_eq!(hit.top(), 308.0);
        assert_eq!(hit.bottom(), 324.0);
    }

    #[test]
    fn test_reset_keeps_rng_stream() {
        let mut state = GameState::new(99, Tuning::default(), 0);
        let first: Vec<_> = state.pipes.iter().map(|p| p.pos).collect();
        state.score = 5;
        state.difficulty = Difficulty::Normal;
        state.reset(5);

        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.session, 2);
        let second: Vec<_> = state.pipes.iter().map(|p| p.pos).collect();
        assert_ne!(first, second);
    }
}
