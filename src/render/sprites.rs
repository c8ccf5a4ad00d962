//! Sprite loading and lookup.
//!
//! One PNG per sprite id, loaded from the assets directory at startup.
//! Magenta marks transparency; the art has no alpha channel.

use std::collections::HashMap;
use std::path::Path;

use sdl2::image::LoadSurface;
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::entity::{CactusKind, GuyKind, ProjectileKind};
use crate::error::{AssetError, GameError, GameResult};

pub const COLOR_KEY: Color = Color {
    r: 255,
    g: 0,
    b: 255,
    a: 255,
};

/// Every sprite the renderer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SpriteId {
    Background,
    Title,
    Instructions,
    Bartop,
    DragonIcon,
    Dragon,
    Customer,
    Bandit,
    Shotglass,
    Fireball,
    CactusLarge,
    CactusSmall,
    CactusTiny,
}

impl SpriteId {
    fn file_name(self) -> &'static str {
        match self {
            SpriteId::Background => "background.png",
            SpriteId::Title => "title.png",
            SpriteId::Instructions => "instructions.png",
            SpriteId::Bartop => "bartop.png",
            SpriteId::DragonIcon => "dragonicon.png",
            SpriteId::Dragon => "dragon.png",
            SpriteId::Customer => "customer.png",
            SpriteId::Bandit => "bandit.png",
            SpriteId::Shotglass => "shotglass.png",
            SpriteId::Fireball => "fireball.png",
            SpriteId::CactusLarge => "cactus1.png",
            SpriteId::CactusSmall => "cactus2.png",
            SpriteId::CactusTiny => "cactus3.png",
        }
    }

    pub fn for_guy(kind: GuyKind) -> Self {
        match kind {
            GuyKind::Customer => SpriteId::Customer,
            GuyKind::Bandit => SpriteId::Bandit,
        }
    }

    pub fn for_projectile(kind: ProjectileKind) -> Self {
        match kind {
            ProjectileKind::Shotglass => SpriteId::Shotglass,
            ProjectileKind::Fireball => SpriteId::Fireball,
        }
    }

    pub fn for_cactus(kind: CactusKind) -> Self {
        match kind {
            CactusKind::Large => SpriteId::CactusLarge,
            CactusKind::Small => SpriteId::CactusSmall,
            CactusKind::Tiny => SpriteId::CactusTiny,
        }
    }
}

/// All loaded sprite textures, keyed by id. Populated once at startup; a
/// missing file there is fatal.
pub struct SpriteStore {
    textures: HashMap<SpriteId, Texture<'static>>,
}

impl SpriteStore {
    pub fn load(texture_creator: &'static TextureCreator<WindowContext>, assets_dir: &Path) -> GameResult<Self> {
        let mut textures = HashMap::new();
        for id in SpriteId::iter() {
            let path = assets_dir.join(id.file_name());
            let mut surface = Surface::from_file(&path).map_err(|message| {
                GameError::Asset(AssetError::LoadFailed {
                    path: path.display().to_string(),
                    message,
                })
            })?;
            surface.set_color_key(true, COLOR_KEY).map_err(GameError::Sdl)?;
            let texture = texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| GameError::Sdl(e.to_string()))?;
            textures.insert(id, texture);
        }
        tracing::debug!(count = textures.len(), "Loaded sprite textures");
        Ok(Self { textures })
    }

    pub fn get(&self, id: SpriteId) -> &Texture<'static> {
        &self.textures[&id]
    }
}
