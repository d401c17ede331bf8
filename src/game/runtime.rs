//! Game session
//!
//! Owns the world, the player, the pause/game-over flags and the spawn
//! timers, and runs one frame of simulation per `tick`. The frame loop in
//! `main` feeds it key events and the frame delta; everything else happens
//! in here.
//!
//! Pause is deliberately shallow: the spawn timers keep firing while
//! paused, only movement, culling and the collision check freeze.

use macroquad::input::KeyCode;
use macroquad::math::Vec2;

use crate::input::{action_for_key, Action, Axis};
use crate::settings::Settings;

use super::entity::Entity;
use super::rng::SpawnRng;
use super::spawn::{spawn_cloud, spawn_enemy, SpawnTimer};
use super::sprite::{Sprite, SpriteKind};
use super::world::World;

/// Scaled bounding-box sizes for each sprite kind, computed from the
/// loaded textures at startup.
#[derive(Debug, Clone, Copy)]
pub struct SpriteSizes {
    pub player: Vec2,
    pub enemy: Vec2,
    pub cloud: Vec2,
}

/// One running game: world state, player, timers and session flags.
pub struct Game {
    pub world: World,
    pub player: Entity,
    pub paused: bool,
    pub game_over: bool,
    quit_requested: bool,

    screen: Vec2,
    sizes: SpriteSizes,
    player_speed: f32,
    enemy_speed: (i32, i32),
    cloud_speed: (i32, i32),

    enemy_timer: SpawnTimer,
    cloud_timer: SpawnTimer,
    rng: SpawnRng,
}

impl Game {
    /// Set up a fresh session: empty world, player parked at the left
    /// edge at mid-height, timers at zero.
    pub fn new(settings: &Settings, sizes: SpriteSizes, screen: Vec2, seed: u32) -> Self {
        let mut world = World::new();

        let mut player_sprite = Sprite::new(SpriteKind::Player, sizes.player);
        player_sprite.pos.y = screen.y / 2.0;
        player_sprite.set_left(10.0);
        let player = world.spawn(player_sprite);

        Self {
            world,
            player,
            paused: false,
            game_over: false,
            quit_requested: false,
            screen,
            sizes,
            player_speed: settings.player_speed,
            enemy_speed: settings.enemy_speed,
            cloud_speed: settings.cloud_speed,
            enemy_timer: SpawnTimer::new(settings.enemy_interval),
            cloud_timer: SpawnTimer::new(settings.cloud_interval),
            rng: SpawnRng::new(seed),
        }
    }

    /// Has the quit key been pressed? The frame loop exits on this.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Apply a key-down event. Movement presses set the matching axis
    /// velocity; once the game is over only Quit is honored.
    pub fn handle_key_press(&mut self, key: KeyCode) {
        let Some(action) = action_for_key(key) else {
            return;
        };

        if action == Action::Quit {
            self.quit_requested = true;
            return;
        }
        if self.game_over {
            return;
        }

        if action == Action::TogglePause {
            self.paused = !self.paused;
            return;
        }

        let speed = self.player_speed;
        let Some(player) = self.world.sprite_mut(self.player) else {
            return;
        };
        match action {
            Action::MoveUp => player.velocity.y = -speed,
            Action::MoveDown => player.velocity.y = speed,
            Action::MoveLeft => player.velocity.x = -speed,
            Action::MoveRight => player.velocity.x = speed,
            Action::TogglePause | Action::Quit => {}
        }
    }

    /// Apply a key-up event. Releasing a movement key zeroes its whole
    /// axis, regardless of which key of the pair was released.
    pub fn handle_key_release(&mut self, key: KeyCode) {
        let Some(axis) = action_for_key(key).and_then(Action::movement_axis) else {
            return;
        };
        if self.game_over {
            return;
        }

        let Some(player) = self.world.sprite_mut(self.player) else {
            return;
        };
        match axis {
            Axis::Horizontal => player.velocity.x = 0.0,
            Axis::Vertical => player.velocity.y = 0.0,
        }
    }

    /// Run one frame of simulation.
    pub fn tick(&mut self, dt: f32) {
        if self.game_over {
            return;
        }

        // Timers fire even while paused
        for _ in 0..self.enemy_timer.advance(dt) {
            spawn_enemy(
                &mut self.world,
                &mut self.rng,
                self.screen,
                self.sizes.enemy,
                self.enemy_speed,
            );
        }
        for _ in 0..self.cloud_timer.advance(dt) {
            spawn_cloud(
                &mut self.world,
                &mut self.rng,
                self.screen,
                self.sizes.cloud,
                self.cloud_speed,
            );
        }

        if self.paused {
            return;
        }

        self.world.update(dt);
        self.clamp_player();
        self.check_player_hit();
    }

    /// Keep the player's bounding box inside the window.
    fn clamp_player(&mut self) {
        let screen = self.screen;
        let Some(player) = self.world.sprite_mut(self.player) else {
            return;
        };

        if player.top() < 0.0 {
            player.set_top(0.0);
        }
        if player.right() > screen.x {
            player.set_right(screen.x);
        }
        if player.bottom() > screen.y {
            player.set_bottom(screen.y);
        }
        if player.left() < 0.0 {
            player.set_left(0.0);
        }
    }

    /// Player touching any enemy ends the game.
    fn check_player_hit(&mut self) {
        let Some(player) = self.world.sprite(self.player).copied() else {
            return;
        };

        let hit = self
            .world
            .enemies
            .iter()
            .any(|&e| self.world.sprite(e).is_some_and(|s| s.overlaps(&player)));

        if hit {
            self.game_over = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    fn test_sizes() -> SpriteSizes {
        SpriteSizes {
            player: Vec2::new(30.0, 20.0),
            enemy: Vec2::new(40.0, 24.0),
            cloud: Vec2::new(60.0, 30.0),
        }
    }

    /// Session whose spawn timers effectively never fire, for tests that
    /// need full control over what is in the world.
    fn quiet_game() -> Game {
        let mut settings = Settings::default();
        settings.enemy_interval = 1e9;
        settings.cloud_interval = 1e9;
        Game::new(&settings, test_sizes(), SCREEN, 42)
    }

    fn player_sprite(game: &Game) -> Sprite {
        *game.world.sprite(game.player).unwrap()
    }

    #[test]
    fn test_player_starts_at_left_edge_mid_height() {
        let game = quiet_game();
        let p = player_sprite(&game);
        assert_eq!(p.left(), 10.0);
        assert_eq!(p.pos.y, 300.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_movement_keys_and_release_order() {
        let mut game = quiet_game();

        game.handle_key_press(KeyCode::W);
        game.handle_key_press(KeyCode::A);
        assert_eq!(player_sprite(&game).velocity, Vec2::new(-5.0, -5.0));

        game.handle_key_release(KeyCode::W);
        assert_eq!(player_sprite(&game).velocity, Vec2::new(-5.0, 0.0));

        game.handle_key_release(KeyCode::A);
        assert_eq!(player_sprite(&game).velocity, Vec2::ZERO);
    }

    #[test]
    fn test_releasing_either_key_of_an_axis_zeroes_it() {
        let mut game = quiet_game();

        // Hold Down, press Up over it, release Down: the axis goes to
        // zero even though Up is still logically held.
        game.handle_key_press(KeyCode::S);
        game.handle_key_press(KeyCode::Up);
        assert_eq!(player_sprite(&game).velocity.y, -5.0);

        game.handle_key_release(KeyCode::S);
        assert_eq!(player_sprite(&game).velocity.y, 0.0);
    }

    #[test]
    fn test_player_is_clamped_to_the_window() {
        let mut game = quiet_game();

        game.handle_key_press(KeyCode::Up);
        game.handle_key_press(KeyCode::Left);
        for _ in 0..100 {
            game.tick(10.0);
            let p = player_sprite(&game);
            assert!(p.left() >= 0.0 && p.right() <= SCREEN.x);
            assert!(p.top() >= 0.0 && p.bottom() <= SCREEN.y);
        }
        // Pushed all the way into the top-left corner
        let p = player_sprite(&game);
        assert_eq!(p.left(), 0.0);
        assert_eq!(p.top(), 0.0);

        game.handle_key_release(KeyCode::Up);
        game.handle_key_release(KeyCode::Left);
        game.handle_key_press(KeyCode::D);
        game.handle_key_press(KeyCode::S);
        for _ in 0..100 {
            game.tick(10.0);
        }
        let p = player_sprite(&game);
        assert_eq!(p.right(), SCREEN.x);
        assert_eq!(p.bottom(), SCREEN.y);
    }

    #[test]
    fn test_pause_freezes_movement_but_not_spawning() {
        let mut settings = Settings::default();
        settings.enemy_interval = 0.25;
        settings.cloud_interval = 1.0;
        let mut game = Game::new(&settings, test_sizes(), SCREEN, 7);

        game.handle_key_press(KeyCode::D);
        game.handle_key_press(KeyCode::P);
        assert!(game.paused);

        let before = player_sprite(&game).pos;
        game.tick(1.0);

        // Spawners fired, nothing moved
        assert_eq!(game.world.enemies.len(), 4);
        assert_eq!(game.world.clouds.len(), 1);
        assert_eq!(player_sprite(&game).pos, before);

        let first_enemy = game.world.enemies[0];
        let enemy_pos = game.world.sprite(first_enemy).unwrap().pos;
        game.tick(0.1);
        assert_eq!(game.world.sprite(first_enemy).unwrap().pos, enemy_pos);
    }

    #[test]
    fn test_pause_toggle_pairs_restore_updates() {
        let mut game = quiet_game();
        game.handle_key_press(KeyCode::D);

        game.handle_key_press(KeyCode::P);
        game.handle_key_press(KeyCode::P);
        assert!(!game.paused);

        let before = player_sprite(&game).pos;
        game.tick(1.0);
        assert!(player_sprite(&game).pos.x > before.x);
    }

    #[test]
    fn test_enemy_cull_scenario() {
        let mut game = quiet_game();

        let mut enemy = Sprite::new(SpriteKind::Enemy, test_sizes().enemy)
            .with_velocity(Vec2::new(-20.0, 0.0));
        enemy.set_right(820.0);
        enemy.set_top(100.0);
        let e = game.world.spawn(enemy);

        for _ in 0..41 {
            game.tick(1.0);
        }
        // Right edge has just reached 0, not yet past it
        assert!(game.world.is_alive(e));
        assert!(game.world.sprite(e).unwrap().right().abs() < 1e-3);

        game.tick(1.0);
        assert!(!game.world.is_alive(e));
        assert!(!game.world.enemies.contains(&e));
        assert!(!game.world.draw_order.contains(&e));
    }

    #[test]
    fn test_player_hit_ends_the_game() {
        let mut game = quiet_game();

        // Enemy parked right on top of the player
        let mut enemy = Sprite::new(SpriteKind::Enemy, test_sizes().enemy);
        enemy.pos = player_sprite(&game).pos;
        game.world.spawn(enemy);

        game.tick(0.016);
        assert!(game.game_over);

        // Session is frozen: ticks and movement keys are no-ops
        let before = player_sprite(&game).pos;
        game.handle_key_press(KeyCode::D);
        game.tick(1.0);
        assert_eq!(player_sprite(&game).pos, before);
        assert_eq!(player_sprite(&game).velocity, Vec2::ZERO);

        // Quit still works
        game.handle_key_press(KeyCode::Q);
        assert!(game.quit_requested());
    }

    #[test]
    fn test_quit_key() {
        let mut game = quiet_game();
        assert!(!game.quit_requested());
        game.handle_key_press(KeyCode::Q);
        assert!(game.quit_requested());
    }
}
