//! Game World
//!
//! The world owns every live sprite and the three collections the game
//! works with: the enemies list, the clouds list, and the unified draw
//! order. A sprite always appears in the draw order; enemies and clouds
//! additionally appear in their kind list. Despawning removes a sprite
//! from every collection at once so the lists can never disagree.
//!
//! Storage is a sparse array indexed by entity slot. With a few dozen
//! sprites alive at a time there is no need for anything fancier.

use super::entity::{Entity, EntityAllocator};
use super::sprite::{Sprite, SpriteKind};

/// Container for all live sprites and their membership lists.
#[derive(Default)]
pub struct World {
    entities: EntityAllocator,
    /// Sparse sprite storage indexed by entity slot
    sprites: Vec<Option<Sprite>>,
    /// Live enemies, spawn order
    pub enemies: Vec<Entity>,
    /// Live clouds, spawn order
    pub clouds: Vec<Entity>,
    /// Every live sprite in insertion order; drawing walks this list
    pub draw_order: Vec<Entity>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sprite, registering it in the draw order and, for enemies
    /// and clouds, in its kind list.
    pub fn spawn(&mut self, sprite: Sprite) -> Entity {
        let entity = self.entities.allocate();

        let idx = entity.index() as usize;
        if idx >= self.sprites.len() {
            self.sprites.resize_with(idx + 1, || None);
        }
        self.sprites[idx] = Some(sprite);

        match sprite.kind {
            SpriteKind::Enemy => self.enemies.push(entity),
            SpriteKind::Cloud => self.clouds.push(entity),
            SpriteKind::Player => {}
        }
        self.draw_order.push(entity);

        entity
    }

    /// Remove a sprite from storage and from every list it belongs to.
    pub fn despawn(&mut self, entity: Entity) {
        if !self.entities.free(entity) {
            return;
        }

        self.sprites[entity.index() as usize] = None;
        self.enemies.retain(|&e| e != entity);
        self.clouds.retain(|&e| e != entity);
        self.draw_order.retain(|&e| e != entity);
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    pub fn sprite(&self, entity: Entity) -> Option<&Sprite> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        self.sprites.get(entity.index() as usize)?.as_ref()
    }

    pub fn sprite_mut(&mut self, entity: Entity) -> Option<&mut Sprite> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        self.sprites.get_mut(entity.index() as usize)?.as_mut()
    }

    pub fn sprite_count(&self) -> u32 {
        self.entities.alive_count()
    }

    /// Advance every sprite by its velocity, then cull enemies and clouds
    /// that have fully left the screen on the left. The player is never
    /// culled here; it is clamped by the session instead.
    pub fn update(&mut self, dt: f32) {
        let mut culled: Vec<Entity> = Vec::new();

        for &entity in &self.draw_order {
            let Some(sprite) = self
                .sprites
                .get_mut(entity.index() as usize)
                .and_then(|s| s.as_mut())
            else {
                continue;
            };

            sprite.pos += sprite.velocity * dt;

            if sprite.kind != SpriteKind::Player && sprite.right() < 0.0 {
                culled.push(entity);
            }
        }

        for entity in culled {
            self.despawn(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::Vec2;

    fn sprite_at(kind: SpriteKind, x: f32, y: f32, vx: f32, vy: f32) -> Sprite {
        let mut s = Sprite::new(kind, Vec2::new(40.0, 20.0)).with_velocity(Vec2::new(vx, vy));
        s.pos = Vec2::new(x, y);
        s
    }

    #[test]
    fn test_spawn_registers_in_kind_list_and_draw_order() {
        let mut world = World::new();

        let player = world.spawn(sprite_at(SpriteKind::Player, 30.0, 300.0, 0.0, 0.0));
        let enemy = world.spawn(sprite_at(SpriteKind::Enemy, 820.0, 100.0, -20.0, 0.0));
        let cloud = world.spawn(sprite_at(SpriteKind::Cloud, 820.0, 200.0, -3.0, 0.0));

        assert_eq!(world.enemies, vec![enemy]);
        assert_eq!(world.clouds, vec![cloud]);
        assert_eq!(world.draw_order, vec![player, enemy, cloud]);
        assert_eq!(world.sprite_count(), 3);
    }

    #[test]
    fn test_update_advances_by_velocity_times_dt() {
        let mut world = World::new();
        let e = world.spawn(sprite_at(SpriteKind::Enemy, 400.0, 100.0, -20.0, 4.0));

        for _ in 0..10 {
            world.update(0.5);
        }

        // 10 ticks of v * 0.5
        let s = world.sprite(e).unwrap();
        assert!((s.pos.x - (400.0 - 20.0 * 5.0)).abs() < 1e-4);
        assert!((s.pos.y - (100.0 + 4.0 * 5.0)).abs() < 1e-4);
    }

    #[test]
    fn test_cull_removes_from_all_collections() {
        let mut world = World::new();
        // Right edge at 20; one tick of -30 px/s puts it fully off screen
        let e = world.spawn(sprite_at(SpriteKind::Enemy, 0.0, 100.0, -30.0, 0.0));
        let stays = world.spawn(sprite_at(SpriteKind::Enemy, 400.0, 100.0, -30.0, 0.0));

        world.update(1.0);

        assert!(!world.is_alive(e));
        assert!(world.sprite(e).is_none());
        assert!(!world.enemies.contains(&e));
        assert!(!world.draw_order.contains(&e));
        assert!(world.is_alive(stays));

        // Still gone on later frames
        world.update(1.0);
        assert!(!world.enemies.contains(&e));
    }

    #[test]
    fn test_player_is_never_culled() {
        let mut world = World::new();
        let player = world.spawn(sprite_at(SpriteKind::Player, 10.0, 300.0, -100.0, 0.0));

        for _ in 0..20 {
            world.update(1.0);
        }

        assert!(world.is_alive(player));
        assert!(world.sprite(player).unwrap().right() < 0.0);
    }

    #[test]
    fn test_kind_lists_are_subsets_of_draw_order() {
        let mut world = World::new();
        for i in 0..5 {
            world.spawn(sprite_at(SpriteKind::Enemy, 100.0 * i as f32, 50.0, -60.0, 0.0));
            world.spawn(sprite_at(SpriteKind::Cloud, 100.0 * i as f32, 90.0, -60.0, 0.0));
        }

        // A few frames of culling
        for _ in 0..4 {
            world.update(1.0);
            for e in world.enemies.iter().chain(world.clouds.iter()) {
                assert!(world.draw_order.contains(e));
                assert!(world.sprite(*e).is_some());
            }
        }
    }
}
