//! Fixed pool of pipe pairs
//!
//! Pipes are allocated once per session and only ever repositioned. A pair
//! that has scrolled fully past the left edge is recycled ahead of the
//! rightmost pipe, and each recycle counts as one pair passed.

use rand::Rng;

use super::difficulty::next_difficulty;
use super::scoring;
use super::spawner::{place_pair, rightmost_x};
use super::state::{GameEvent, GameState, Pipe, PipeKind};
use crate::platform::storage::KeyValueStore;
use crate::tuning::DifficultyRanges;

/// Allocate `pairs` pipe pairs and place them left to right
pub fn create_pipes<R: Rng>(pairs: usize, ranges: &DifficultyRanges, rng: &mut R) -> Vec<Pipe> {
    let mut pipes = Vec::with_capacity(pairs * 2);
    for _ in 0..pairs {
        pipes.push(Pipe::new(PipeKind::Upper));
        pipes.push(Pipe::new(PipeKind::Lower));
    }

    for pair in 0..pairs {
        let rightmost = rightmost_x(&pipes);
        place_pair(&mut pipes, pair * 2, pair * 2 + 1, ranges, rightmost, rng);
    }
    pipes
}

/// Find the first two off-screen pipes in pool order.
///
/// Pairs move together, so the two are always an upper and its lower.
pub fn find_recyclable(pipes: &[Pipe]) -> Option<(usize, usize)> {
    let mut ready = pipes
        .iter()
        .enumerate()
        .filter(|(_, pipe)| pipe.right() <= 0.0)
        .map(|(i, _)| i);
    let first = ready.next()?;
    let second = ready.next()?;
    Some((first, second))
}

/// One recycle sweep. Places at most one pair, then scores it, persists the
/// best score and re-evaluates difficulty, in that order.
pub fn recycle_pipes(state: &mut GameState, store: &mut dyn KeyValueStore) -> bool {
    let Some((upper, lower)) = find_recyclable(&state.pipes) else {
        return false;
    };

    let rightmost = rightmost_x(&state.pipes);
    let ranges = *state.tuning.difficulties.ranges(state.difficulty);
    let (upper_pos, lower_pos) =
        place_pair(&mut state.pipes, upper, lower, &ranges, rightmost, &mut state.rng);
    log::debug!(
        "Recycled pair {}/{} to x={} gap {}..{}",
        upper,
        lower,
        upper_pos.x,
        upper_pos.y,
        lower_pos.y
    );

    scoring::increase_score(state);
    scoring::set_best_score(state, store);
    increase_difficulty(state);
    true
}

fn increase_difficulty(state: &mut GameState) {
    let next = next_difficulty(state.difficulty, state.score);
    if next != state.difficulty {
        log::info!(
            "Difficulty {} -> {} at score {}",
            state.difficulty.as_str(),
            next.as_str(),
            state.score
        );
        state.difficulty = next;
        state.events.push(GameEvent::DifficultyChanged(next));
    }
}
