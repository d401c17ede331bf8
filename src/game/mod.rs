//! Game logic
//!
//! Everything the shooter simulates, kept apart from the macroquad frame
//! loop in `main`. The world owns the sprites and their collections, the
//! session (`Game`) owns the world plus pause/game-over state and the
//! spawn timers, and the renderer turns the current world into draw calls.
//!
//! None of the simulation code touches the window, so all of it runs in
//! plain unit tests.

pub mod entity;
pub mod renderer;
pub mod rng;
pub mod runtime;
pub mod spawn;
pub mod sprite;
pub mod world;

// Re-export main types
pub use entity::Entity;
pub use runtime::{Game, SpriteSizes};
pub use sprite::{Sprite, SpriteKind};
pub use world::World;
