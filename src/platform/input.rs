//! Pointer input mapping
//!
//! A pointer-down is always a flap request. If it lands on the pause button it
//! is also a pause request; the flap is then dropped by the paused gate.

use crate::consts::{HEIGHT, PAUSE_BUTTON_INSET, PAUSE_BUTTON_SIZE, WIDTH};
use crate::sim::TickInput;
use crate::sim::body::Aabb;

/// Screen-space rectangle of the pause button
pub fn pause_button_bounds() -> Aabb {
    let right = WIDTH - PAUSE_BUTTON_INSET;
    let bottom = HEIGHT - PAUSE_BUTTON_INSET;
    Aabb::new(
        right - PAUSE_BUTTON_SIZE,
        bottom - PAUSE_BUTTON_SIZE,
        PAUSE_BUTTON_SIZE,
        PAUSE_BUTTON_SIZE,
    )
}

/// Translate a pointer-down at (x, y) into tick input
pub fn pointer_down(x: f32, y: f32) -> TickInput {
    TickInput {
        flap: true,
        pause: pause_button_bounds().contains_point(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_in_field_flaps() {
        let input = pointer_down(200.0, 300.0);
        assert!(input.flap);
        assert!(!input.pause);
    }

    #[test]
    fn test_pointer_on_pause_button() {
        let input = pointer_down(WIDTH - 20.0, HEIGHT - 20.0);
        assert!(input.pause);

        let outside = pointer_down(WIDTH - 5.0, HEIGHT - 5.0);
        assert!(!outside.pause);
    }
}
