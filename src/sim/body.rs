//! Arcade physics primitives
//!
//! Axis-aligned boxes and a gravity body with world-bound clamping. This is
//! the minimum the play state needs from a physics engine; no collision
//! response beyond clamping to the field is performed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap; boxes that only touch edges do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Inclusive point test (used for button hit areas)
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}

/// A dynamic body with gravity
///
/// `pos` is the top-left of the display box. The hitbox is a sub-rectangle
/// offset from `pos`, and it is the hitbox that gets clamped to world bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Display size
    pub size: Vec2,
    pub hitbox_offset: Vec2,
    pub hitbox_size: Vec2,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
}

impl Body {
    /// Display bounds (what the player sees)
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Physics bounds (what collides)
    pub fn hitbox(&self) -> Aabb {
        let origin = self.pos + self.hitbox_offset;
        Aabb::new(origin.x, origin.y, self.hitbox_size.x, self.hitbox_size.y)
    }

    /// Semi-implicit Euler: velocity first, then position
    pub fn integrate(&mut self, dt: f32) {
        self.vel.y += self.gravity * dt;
        self.pos += self.vel * dt;
    }

    /// Keep the hitbox inside `world`, zeroing velocity into the wall
    pub fn clamp_to(&mut self, world: &Aabb) {
        let hit = self.hitbox();
        if hit.top() < world.top() {
            self.pos.y += world.top() - hit.top();
            self.vel.y = self.vel.y.max(0.0);
        } else if hit.bottom() > world.bottom() {
            self.pos.y -= hit.bottom() - world.bottom();
            self.vel.y = self.vel.y.min(0.0);
        }
        if hit.left() < world.left() {
            self.pos.x += world.left() - hit.left();
            self.vel.x = self.vel.x.max(0.0);
        } else if hit.right() > world.right() {
            self.pos.x -= hit.right() - world.right();
            self.vel.x = self.vel.x.min(0.0);
        }
    }
}
