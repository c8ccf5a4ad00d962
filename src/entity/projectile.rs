use strum_macros::{Display, FromRepr};

use super::Entity;
use crate::constants::mechanics::{FIREBALL_SPEED, PROJECTILE_EXIT_X, SHOTGLASS_SPEED};

/// The two things the dragon can sling down a bar. The discriminants are the
/// persisted tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromRepr)]
#[repr(u8)]
pub enum ProjectileKind {
    /// Short-range: slower, what customers want.
    Shotglass = 0,
    /// Long-range: faster, what bandits get.
    Fireball = 1,
}

impl ProjectileKind {
    /// Leftward speed in pixels per simulated frame.
    pub fn speed(self) -> f32 {
        match self {
            ProjectileKind::Shotglass => SHOTGLASS_SPEED,
            ProjectileKind::Fireball => FIREBALL_SPEED,
        }
    }
}

/// A projectile sliding down a bar toward the left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub entity: Entity,
    pub kind: ProjectileKind,
}

impl Projectile {
    pub fn new(kind: ProjectileKind, x: f32, bar: usize) -> Self {
        Self {
            entity: Entity::new(x, bar),
            kind,
        }
    }

    /// Advances one simulated frame of flight.
    pub fn advance(&mut self) {
        self.entity.x -= self.kind.speed();
    }

    /// Whether the projectile has left the playfield without hitting anyone.
    pub fn exited(&self) -> bool {
        self.entity.x < PROJECTILE_EXIT_X
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fireballs_outpace_shotglasses() {
        assert!(ProjectileKind::Fireball.speed() > ProjectileKind::Shotglass.speed());
    }

    #[test]
    fn advance_moves_left_by_kind_speed() {
        let mut shot = Projectile::new(ProjectileKind::Shotglass, 100.0, 0);
        let mut ball = Projectile::new(ProjectileKind::Fireball, 100.0, 0);
        shot.advance();
        ball.advance();
        assert_eq!(shot.entity.x, 100.0 - SHOTGLASS_SPEED);
        assert_eq!(ball.entity.x, 100.0 - FIREBALL_SPEED);
    }
}
