//! TTF text painting.
//!
//! Text is rendered per draw call: glyphs go to a blended surface, the
//! surface becomes a texture, and the texture is copied to the canvas. The
//! amount of text on screen is tiny, so no atlas or cache is needed.

use std::path::Path;

use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::{Font, FontStyle, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use crate::constants::ui::{HUD_FONT_SIZE, MENU_FONT_SIZE};
use crate::error::{AssetError, GameError, GameResult};

const FONT_FILE: &str = "FreeMono.ttf";

/// Which of the two loaded font sizes to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    /// Small bold face for the in-game score line.
    Hud,
    /// Large face for menus and overlays.
    Menu,
}

pub struct TextPainter {
    hud: Font<'static, 'static>,
    menu: Font<'static, 'static>,
    texture_creator: &'static TextureCreator<WindowContext>,
}

impl TextPainter {
    pub fn load(
        ttf: &'static Sdl2TtfContext,
        texture_creator: &'static TextureCreator<WindowContext>,
        assets_dir: &Path,
    ) -> GameResult<Self> {
        let path = assets_dir.join(FONT_FILE);
        let mut hud = Self::open(ttf, &path, HUD_FONT_SIZE)?;
        hud.set_style(FontStyle::BOLD);
        let menu = Self::open(ttf, &path, MENU_FONT_SIZE)?;
        Ok(Self {
            hud,
            menu,
            texture_creator,
        })
    }

    fn open(ttf: &'static Sdl2TtfContext, path: &Path, size: u16) -> GameResult<Font<'static, 'static>> {
        ttf.load_font(path, size).map_err(|message| {
            GameError::Asset(AssetError::LoadFailed {
                path: path.display().to_string(),
                message,
            })
        })
    }

    /// Pixel height of the menu face, for vertical layout.
    pub fn menu_height(&self) -> i32 {
        self.menu.height()
    }

    pub fn draw(&self, canvas: &mut Canvas<Window>, kind: FontKind, text: &str, pos: Vec2, color: Color) -> GameResult<()> {
        self.paint(canvas, kind, text, pos, color, false)
    }

    /// Draws with `pos.x` as the horizontal center of the text.
    pub fn draw_centered(
        &self,
        canvas: &mut Canvas<Window>,
        kind: FontKind,
        text: &str,
        pos: Vec2,
        color: Color,
    ) -> GameResult<()> {
        self.paint(canvas, kind, text, pos, color, true)
    }

    fn paint(
        &self,
        canvas: &mut Canvas<Window>,
        kind: FontKind,
        text: &str,
        pos: Vec2,
        color: Color,
        centered: bool,
    ) -> GameResult<()> {
        let font = match kind {
            FontKind::Hud => &self.hud,
            FontKind::Menu => &self.menu,
        };
        let surface = font
            .render(text)
            .blended(color)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let query = texture.query();
        let mut x = pos.x as i32;
        if centered {
            x -= query.width as i32 / 2;
        }
        canvas
            .copy(&texture, None, Some(Rect::new(x, pos.y as i32, query.width, query.height)))
            .map_err(GameError::Sdl)
    }
}
