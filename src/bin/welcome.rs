//! Welcome screen: the smallest possible macroquad program
//!
//! Opens a window, fills the background and draws one static circle.
//! There is no game state at all; the only inputs that matter are the
//! quit key and closing the window.

use macroquad::prelude::*;

const SCREEN_WIDTH: i32 = 800;
const SCREEN_HEIGHT: i32 = 600;
const SCREEN_TITLE: &str = "Welcome Screen";

fn window_conf() -> Conf {
    Conf {
        window_title: SCREEN_TITLE.to_string(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    loop {
        if is_key_pressed(KeyCode::Q) {
            break;
        }

        clear_background(SKYBLUE);
        draw_circle(
            screen_width() / 2.0,
            screen_height() / 2.0,
            64.0,
            DARKBLUE,
        );

        next_frame().await;
    }
}
