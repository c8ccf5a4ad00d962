//! Scene drawing. The renderer is a pure consumer of the game value: it
//! reads the current state, entity collections, and score sheet each frame
//! and draws them; nothing here mutates simulation state.

pub mod sprites;
pub mod text;

use std::path::Path;

use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};

use crate::constants::{ui, CANVAS_SIZE, NUM_BARS};
use crate::entity::ProjectileKind;
use crate::error::{GameError, GameResult};
use crate::game::{Game, GameState};

use self::sprites::{SpriteId, SpriteStore};
use self::text::{FontKind, TextPainter};

const SAND: Color = Color {
    r: 255,
    g: 193,
    b: 20,
    a: 255,
};
const SKY: Color = Color {
    r: 110,
    g: 255,
    b: 255,
    a: 255,
};
/// Translucent black veil for the pause and game-over overlays.
const DARKEN: Color = Color { r: 0, g: 0, b: 0, a: 92 };
const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

pub struct Renderer {
    sprites: SpriteStore,
    text: TextPainter,
}

impl Renderer {
    pub fn new(
        texture_creator: &'static TextureCreator<WindowContext>,
        ttf: &'static Sdl2TtfContext,
        assets_dir: &Path,
    ) -> GameResult<Self> {
        let sprites = SpriteStore::load(texture_creator, assets_dir)?;
        let text = TextPainter::load(ttf, texture_creator, assets_dir)?;
        Ok(Self { sprites, text })
    }

    /// Draws one frame of the current state and presents it.
    pub fn draw(&mut self, canvas: &mut Canvas<Window>, game: &Game) -> GameResult<()> {
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(SAND);
        canvas.clear();

        match game.state {
            GameState::MainMenu => self.draw_menu(canvas, game)?,
            GameState::Instructions => self.blit(canvas, SpriteId::Instructions, Vec2::ZERO)?,
            GameState::InGame => self.draw_playfield(canvas, game)?,
            GameState::Paused => {
                self.draw_playfield(canvas, game)?;
                self.darken(canvas)?;
                self.draw_pause_overlay(canvas, game)?;
            }
            GameState::GameOver => {
                self.draw_playfield(canvas, game)?;
                self.darken(canvas)?;
                self.draw_game_over_overlay(canvas, game)?;
            }
        }

        canvas.present();
        Ok(())
    }

    fn draw_menu(&self, canvas: &mut Canvas<Window>, game: &Game) -> GameResult<()> {
        let width = CANVAS_SIZE.x as f32;
        let height = CANVAS_SIZE.y as f32;

        self.blit(canvas, SpriteId::Title, Vec2::new(222.0, 100.0))?;

        let item_x = width / 2.0 - 100.0;
        let continue_label = if game.load_error.is_some() { "Error" } else { "Continue" };
        self.text
            .draw(canvas, FontKind::Menu, "Start", Vec2::new(item_x, height - 220.0), BLACK)?;
        self.text.draw(
            canvas,
            FontKind::Menu,
            continue_label,
            Vec2::new(item_x, height - 170.0),
            BLACK,
        )?;
        self.text.draw(
            canvas,
            FontKind::Menu,
            "Instructions",
            Vec2::new(item_x, height - 120.0),
            BLACK,
        )?;

        let cursor_pos = Vec2::new(width / 2.0 - 200.0, height - 220.0 + 50.0 * game.cursor as f32);
        self.blit(canvas, SpriteId::DragonIcon, cursor_pos)
    }

    fn draw_playfield(&self, canvas: &mut Canvas<Window>, game: &Game) -> GameResult<()> {
        let session = &game.session;

        canvas.set_draw_color(SKY);
        canvas
            .fill_rect(Rect::new(0, 0, CANVAS_SIZE.x, ui::SKY_STRIP_HEIGHT))
            .map_err(GameError::Sdl)?;

        for cactus in &session.cactus {
            self.blit(
                canvas,
                SpriteId::for_cactus(cactus.kind),
                Vec2::new(cactus.entity.x, cactus.y),
            )?;
        }
        self.blit(canvas, SpriteId::Background, Vec2::ZERO)?;

        // Lives counter in the top-right corner.
        self.blit(canvas, SpriteId::DragonIcon, Vec2::new(CANVAS_SIZE.x as f32 - 230.0, 0.0))?;
        self.text.draw(
            canvas,
            FontKind::Menu,
            &format!("x {}", session.stat.lives),
            Vec2::new(CANVAS_SIZE.x as f32 - 130.0, 0.0),
            BLACK,
        )?;

        let stat = &session.stat;
        self.text.draw(
            canvas,
            FontKind::Hud,
            &format!(
                "Score: {}     Multiplier: x{}  ({} until next)",
                stat.score,
                stat.multiplier,
                stat.threshold.saturating_sub(stat.hits)
            ),
            Vec2::ZERO,
            BLACK,
        )?;

        for bar in 0..NUM_BARS {
            for guy in session.guys.iter().filter(|guy| guy.entity.bar == bar) {
                let y = ui::GUY_BASE_Y + ui::BAR_SPACE_Y * bar as f32 + ui::BOB_AMPLITUDE * guy.bob.sin();
                self.blit(canvas, SpriteId::for_guy(guy.kind), Vec2::new(guy.entity.x, y))?;
            }
            self.blit(
                canvas,
                SpriteId::Bartop,
                Vec2::new(0.0, ui::BAR_START_Y + ui::BAR_SPACE_Y * bar as f32),
            )?;
        }

        for projectile in &session.projectiles {
            let base = match projectile.kind {
                ProjectileKind::Shotglass => ui::SHOTGLASS_BASE_Y,
                ProjectileKind::Fireball => ui::FIREBALL_BASE_Y,
            };
            let y = base + ui::BAR_SPACE_Y * projectile.entity.bar as f32;
            self.blit(
                canvas,
                SpriteId::for_projectile(projectile.kind),
                Vec2::new(projectile.entity.x, y),
            )?;
        }

        let dragon = &session.dragon;
        let dragon_y = ui::DRAGON_BAR_Y_OFFSET + ui::BAR_START_Y + ui::BAR_SPACE_Y * dragon.bar() as f32;
        self.blit(canvas, SpriteId::Dragon, Vec2::new(dragon.entity.x, dragon_y))
    }

    fn draw_pause_overlay(&self, canvas: &mut Canvas<Window>, game: &Game) -> GameResult<()> {
        let center_x = CANVAS_SIZE.x as f32 / 2.0;
        let center_y = CANVAS_SIZE.y as f32 / 2.0 - 1.0 - self.text.menu_height() as f32;
        let bottom_y = CANVAS_SIZE.y as f32 - 50.0 - self.text.menu_height() as f32;

        self.text
            .draw_centered(canvas, FontKind::Menu, "PAUSED", Vec2::new(center_x, center_y), WHITE)?;

        let status = if game.save_error.is_some() {
            "Error saving game"
        } else if game.saved {
            "Game saved"
        } else {
            "Press S to save the game"
        };
        self.text
            .draw_centered(canvas, FontKind::Menu, status, Vec2::new(center_x, bottom_y), WHITE)
    }

    fn draw_game_over_overlay(&self, canvas: &mut Canvas<Window>, game: &Game) -> GameResult<()> {
        let center_x = CANVAS_SIZE.x as f32 / 2.0;
        let center_y = CANVAS_SIZE.y as f32 / 2.0 - 1.0 - self.text.menu_height() as f32;

        self.text
            .draw_centered(canvas, FontKind::Menu, "GAME OVER", Vec2::new(center_x, center_y), WHITE)?;
        self.text.draw_centered(
            canvas,
            FontKind::Menu,
            &format!("Your final score was {}", game.session.stat.score),
            Vec2::new(center_x, center_y + 50.0),
            WHITE,
        )
    }

    fn darken(&self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        canvas.set_draw_color(DARKEN);
        canvas.fill_rect(None).map_err(GameError::Sdl)
    }

    fn blit(&self, canvas: &mut Canvas<Window>, id: SpriteId, pos: Vec2) -> GameResult<()> {
        let texture = self.sprites.get(id);
        let query = texture.query();
        canvas
            .copy(
                texture,
                None,
                Some(Rect::new(pos.x as i32, pos.y as i32, query.width, query.height)),
            )
            .map_err(GameError::Sdl)
    }
}
