//! Raven Shooter: a minimal side-scroller on macroquad
//!
//! The raven starts on the left edge and can fly anywhere inside the
//! window. Enemies and clouds enter from past the right edge at random
//! heights and speeds and drift left until they leave the screen. Touching
//! an enemy ends the game.
//!
//! Controls: W/A/S/D or arrows to move, P to pause, Q to quit.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod game;
mod input;
mod settings;

use std::path::Path;

use macroquad::prelude::*;

use assets::SpriteTextures;
use game::renderer::draw_frame;
use game::Game;
use settings::Settings;

const SCREEN_WIDTH: i32 = 800;
const SCREEN_HEIGHT: i32 = 600;
const SCREEN_TITLE: &str = "Raven Shooter";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("{} v{}", SCREEN_TITLE, VERSION),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging first (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let settings = match Settings::load_or_default(Path::new("settings.ron")) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let textures = match SpriteTextures::load(&settings).await {
        Ok(textures) => textures,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // Fresh spawn sequence each run
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let screen = Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
    let sizes = textures.sizes(settings.sprite_scale);
    let mut game = Game::new(&settings, sizes, screen, macroquad::rand::rand());

    info!("{} v{} ready", SCREEN_TITLE, VERSION);

    loop {
        for key in get_keys_pressed() {
            game.handle_key_press(key);
        }
        for key in get_keys_released() {
            game.handle_key_release(key);
        }

        if game.quit_requested() {
            break;
        }

        game.tick(get_frame_time());
        draw_frame(&game, &textures);

        next_frame().await;
    }
}
