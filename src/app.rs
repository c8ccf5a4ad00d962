//! The application shell: SDL setup, the event pump, and the fixed-rate
//! frame loop. Everything here is plumbing; the interesting behavior lives
//! in [`crate::game`].

use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use sdl2::controller::GameController;
use sdl2::event::Event;
use sdl2::image::LoadSurface;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, GameControllerSubsystem};
use tracing::{debug, error, event, warn};

use crate::config::Config;
use crate::constants::{CANVAS_SIZE, LOOP_TIME};
use crate::game::Game;
use crate::input::{self, AxisGate};
use crate::render::{sprites::COLOR_KEY, Renderer};

const WINDOW_TITLE: &str = "Old West Railroad Dragon Bartender!";

pub struct App {
    game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    controller_subsystem: GameControllerSubsystem,
    /// Held only to keep the devices open; re-populated on hot-plug.
    controllers: Vec<GameController>,
    axis_gate: AxisGate,
    renderer: Renderer,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let controller_subsystem = sdl_context.game_controller().map_err(|e| anyhow!(e))?;
        let ttf_context: &'static sdl2::ttf::Sdl2TtfContext =
            Box::leak(Box::new(sdl2::ttf::init().map_err(|e| anyhow!(e.to_string()))?));

        let assets_dir = config.assets_dir();

        let mut window_builder = video_subsystem.window(WINDOW_TITLE, CANVAS_SIZE.x, CANVAS_SIZE.y);
        window_builder.resizable().position_centered();
        if config.fullscreen {
            window_builder.fullscreen_desktop();
        }
        let mut window = window_builder.build()?;

        match Surface::from_file(assets_dir.join("dragonicon.png")) {
            Ok(mut icon) => {
                if let Err(e) = icon.set_color_key(true, COLOR_KEY) {
                    warn!(error = %e, "Could not color-key window icon");
                }
                window.set_icon(icon);
            }
            Err(e) => warn!(error = %e, "Could not load window icon"),
        }

        let mut canvas = window.into_canvas().build()?;
        canvas.set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)?;
        let texture_creator: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));

        sdl_context.mouse().show_cursor(false);

        let renderer = Renderer::new(texture_creator, ttf_context, &assets_dir).context("failed to load assets")?;

        let controllers = open_controllers(&controller_subsystem);
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let game = Game::new(config.save_path(), config.invincible);

        Ok(Self {
            game,
            canvas,
            event_pump,
            controller_subsystem,
            controllers,
            axis_gate: AxisGate::default(),
            renderer,
        })
    }

    /// Runs one frame: drain input, advance the simulation one fixed step,
    /// draw, then sleep out the remainder of the frame budget.
    ///
    /// Returns false once the game has requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        for event in self.event_pump.poll_iter() {
            let command = match event {
                Event::Quit { .. } => Some(crate::events::GameCommand::Exit),
                Event::ControllerDeviceAdded { .. } => {
                    debug!("Controller attached, re-enumerating devices");
                    self.controllers = open_controllers(&self.controller_subsystem);
                    None
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => input::key_command(self.game.state, key),
                Event::ControllerButtonDown { button, .. } => input::button_command(self.game.state, button),
                Event::ControllerAxisMotion {
                    axis, value, timestamp, ..
                } => self.axis_gate.resolve(self.game.state, axis, value, timestamp),
                _ => None,
            };
            if let Some(command) = command {
                self.game.apply(command);
            }
        }

        self.game.tick();

        if let Err(e) = self.renderer.draw(&mut self.canvas, &self.game) {
            error!("Failed to draw frame: {e}");
        }

        if self.game.exit {
            return false;
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            event!(
                tracing::Level::WARN,
                "Game loop behind schedule by: {:?}",
                start.elapsed() - LOOP_TIME
            );
        }

        true
    }
}

/// Opens every attached device SDL recognizes as a game controller. A slot
/// that fails to open is logged and skipped. Reassigning the returned list
/// drops (and thereby closes) the previously opened handles.
fn open_controllers(subsystem: &GameControllerSubsystem) -> Vec<GameController> {
    let count = match subsystem.num_joysticks() {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, "Could not enumerate joysticks");
            return Vec::new();
        }
    };

    let mut controllers = Vec::new();
    for id in 0..count {
        if !subsystem.is_game_controller(id) {
            continue;
        }
        match subsystem.open(id) {
            Ok(controller) => {
                debug!(id, name = %controller.name(), "Opened game controller");
                controllers.push(controller);
            }
            Err(e) => warn!(id, error = %e, "Failed to open game controller"),
        }
    }
    controllers
}
