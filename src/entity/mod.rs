//! The entity model: plain data containers for everything that moves.
//!
//! There is no virtual dispatch here. Each variant embeds the shared
//! [`Entity`] fragment by value and carries its own kind enum; all traversal
//! happens over explicit typed collections owned by the simulation session.

pub mod cactus;
pub mod dragon;
pub mod guy;
pub mod projectile;

pub use cactus::{Cactus, CactusKind};
pub use dragon::Dragon;
pub use guy::{Guy, GuyKind};
pub use projectile::{Projectile, ProjectileKind};

/// Shared positional fragment embedded in every entity variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    /// Horizontal position on the playfield, in pixels.
    pub x: f32,
    /// The bar (lane) the entity occupies, always in `[0, NUM_BARS)`.
    pub bar: usize,
}

impl Entity {
    pub fn new(x: f32, bar: usize) -> Self {
        Self { x, bar }
    }
}
