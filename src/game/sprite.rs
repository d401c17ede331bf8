//! Sprite records
//!
//! Sprites are plain data: a kind tag, a center position, a scaled size and
//! a velocity. Behavior lives in the world update and the session systems.
//! Positions are in macroquad screen space: origin at the top-left corner
//! of the window, y growing downward.

use macroquad::math::Vec2;

/// What a sprite is. Drawing and collision dispatch on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Enemy,
    Cloud,
}

/// A drawable, movable game object.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Center of the bounding box, screen space
    pub pos: Vec2,
    /// Bounding-box extent (texture size times the uniform scale)
    pub size: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
}

impl Sprite {
    /// A stationary sprite of the given kind and scaled size, centered at
    /// the origin until positioned via the edge setters.
    pub fn new(kind: SpriteKind, size: Vec2) -> Self {
        Self {
            kind,
            pos: Vec2::ZERO,
            size,
            velocity: Vec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    // Bounding-box edges. Setters move the whole sprite so that the named
    // edge lands on the given coordinate, which is how spawners and the
    // boundary clamp position things.

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.size.x / 2.0;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y + self.size.y / 2.0;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Axis-aligned bounding-box overlap test.
    pub fn overlaps(&self, other: &Sprite) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
