//! Frame rendering
//!
//! Turns the current world into macroquad draw calls. Sprites are drawn in
//! draw-order (insertion order); there is no z-index, so later spawns land
//! on top of earlier ones, which is fine for this game.

use macroquad::prelude::*;

use crate::assets::SpriteTextures;
use super::runtime::Game;

/// Draw one frame: background, every sprite, then any banner.
pub fn draw_frame(game: &Game, textures: &SpriteTextures) {
    clear_background(SKYBLUE);

    for &entity in &game.world.draw_order {
        let Some(sprite) = game.world.sprite(entity) else {
            continue;
        };

        draw_texture_ex(
            textures.texture_for(sprite.kind),
            sprite.left(),
            sprite.top(),
            WHITE,
            DrawTextureParams {
                dest_size: Some(sprite.size),
                ..Default::default()
            },
        );
    }

    if game.game_over {
        draw_banner("GAME OVER");
    } else if game.paused {
        draw_banner("PAUSED");
    }
}

/// Large centered text over the play field.
fn draw_banner(text: &str) {
    const FONT_SIZE: u16 = 64;

    let dims = measure_text(text, None, FONT_SIZE, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) / 2.0,
        screen_height() / 2.0,
        FONT_SIZE as f32,
        BLACK,
    );
}
