//! Sprite textures
//!
//! The three sprite images are loaded once at startup and kept for the
//! lifetime of the program. Load failure is fatal; there is nothing
//! sensible to draw without them.

use macroquad::prelude::*;

use crate::game::{SpriteKind, SpriteSizes};
use crate::settings::Settings;

/// The loaded sprite textures, one per kind.
pub struct SpriteTextures {
    pub player: Texture2D,
    pub enemy: Texture2D,
    pub cloud: Texture2D,
}

impl SpriteTextures {
    /// Load all three textures from the paths in the settings.
    pub async fn load(settings: &Settings) -> Result<Self, String> {
        let player = load_sprite(&settings.player_image).await?;
        let enemy = load_sprite(&settings.enemy_image).await?;
        let cloud = load_sprite(&settings.cloud_image).await?;

        Ok(Self {
            player,
            enemy,
            cloud,
        })
    }

    pub fn texture_for(&self, kind: SpriteKind) -> &Texture2D {
        match kind {
            SpriteKind::Player => &self.player,
            SpriteKind::Enemy => &self.enemy,
            SpriteKind::Cloud => &self.cloud,
        }
    }

    /// Bounding-box sizes at the given uniform scale.
    pub fn sizes(&self, scale: f32) -> SpriteSizes {
        SpriteSizes {
            player: Vec2::new(self.player.width(), self.player.height()) * scale,
            enemy: Vec2::new(self.enemy.width(), self.enemy.height()) * scale,
            cloud: Vec2::new(self.cloud.width(), self.cloud.height()) * scale,
        }
    }
}

async fn load_sprite(path: &str) -> Result<Texture2D, String> {
    let texture = load_texture(path)
        .await
        .map_err(|e| format!("failed to load sprite '{}': {}", path, e))?;
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}
