//! Spawners
//!
//! Enemies and clouds enter from just past the right edge of the screen at
//! a fixed cadence. Each spawner is a plain accumulator timer owned by the
//! session and advanced once per frame, so a long frame can fire more than
//! once and nothing happens behind the session's back.

use macroquad::math::Vec2;

use super::entity::Entity;
use super::rng::SpawnRng;
use super::sprite::{Sprite, SpriteKind};
use super::world::World;

/// Horizontal band past the right screen edge where new sprites appear
const SPAWN_BAND: f32 = 80.0;
/// Vertical margin kept clear at the top and bottom of the spawn band
const SPAWN_MARGIN: f32 = 10.0;

/// Fixed-interval timer. Accumulates frame time and reports how many
/// whole intervals elapsed since the last call.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: f32,
    accumulator: f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Add elapsed time, returning the number of firings it produced.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut fired = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            fired += 1;
        }
        fired
    }
}

/// Position a freshly built sprite in the off-screen spawn band and
/// register it with the world.
fn spawn_flyer(
    world: &mut World,
    rng: &mut SpawnRng,
    screen: Vec2,
    mut sprite: Sprite,
) -> Entity {
    sprite.set_left(rng.range_f32(screen.x, screen.x + SPAWN_BAND));
    sprite.set_top(rng.range_f32(SPAWN_MARGIN, screen.y - SPAWN_MARGIN));
    world.spawn(sprite)
}

/// Spawn one enemy heading (mostly) left at a random integer speed.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut SpawnRng,
    screen: Vec2,
    size: Vec2,
    speed: (i32, i32),
) -> Entity {
    let vx = rng.range_i32(speed.0, speed.1) as f32;
    let sprite = Sprite::new(SpriteKind::Enemy, size).with_velocity(Vec2::new(vx, 0.0));
    spawn_flyer(world, rng, screen, sprite)
}

/// Spawn one cloud drifting left.
pub fn spawn_cloud(
    world: &mut World,
    rng: &mut SpawnRng,
    screen: Vec2,
    size: Vec2,
    speed: (i32, i32),
) -> Entity {
    let vx = rng.range_i32(speed.0, speed.1) as f32;
    let sprite = Sprite::new(SpriteKind::Cloud, size).with_velocity(Vec2::new(vx, 0.0));
    spawn_flyer(world, rng, screen, sprite)
}
