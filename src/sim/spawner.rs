//! Pipe pair placement
//!
//! A pair is placed one random spacing to the right of the rightmost pipe,
//! with a random opening kept `PIPE_MARGIN` away from both edges. Spacing is
//! always positive, so pairs can never overlap horizontally.

use glam::Vec2;
use rand::Rng;

use super::state::Pipe;
use crate::consts::{HEIGHT, PIPE_MARGIN};
use crate::tuning::DifficultyRanges;

/// Largest anchor x in the pool, never less than 0
pub fn rightmost_x(pipes: &[Pipe]) -> f32 {
    pipes.iter().fold(0.0, |acc, pipe| pipe.pos.x.max(acc))
}

/// Reposition pipes `upper` and `lower` and return their new anchors.
///
/// The opening range must be positive and satisfy
/// `HEIGHT - margin - max >= margin`; this is checked by `Tuning::validate`,
/// not here.
pub fn place_pair<R: Rng>(
    pipes: &mut [Pipe],
    upper: usize,
    lower: usize,
    ranges: &DifficultyRanges,
    rightmost_x: f32,
    rng: &mut R,
) -> (Vec2, Vec2) {
    let opening = ranges.pipe_opening_range;
    let distance = ranges.pipe_distance_range;

    let vertical_gap = rng.random_range(opening.min..=opening.max);
    let vertical_position =
        rng.random_range(PIPE_MARGIN..=HEIGHT as i32 - PIPE_MARGIN - vertical_gap);
    let horizontal_spacing = rng.random_range(distance.min..=distance.max);

    let x = rightmost_x + horizontal_spacing as f32;
    let upper_pos = Vec2::new(x, vertical_position as f32);
    let lower_pos = Vec2::new(x, (vertical_position + vertical_gap) as f32);

    pipes[upper].pos = upper_pos;
    pipes[lower].pos = lower_pos;
    (upper_pos, lower_pos)
}
