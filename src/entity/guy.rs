use std::f32::consts::PI;

use strum_macros::{Display, FromRepr};

use super::Entity;
use crate::constants::mechanics::{BOB_STEP, GUY_BREACH_X, GUY_WALK_SPEED, GUY_WIDTH};

/// What a spawned guy wants from the bartender. Customers take a shot glass;
/// bandits take a fireball. The discriminants are the persisted tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromRepr)]
#[repr(u8)]
pub enum GuyKind {
    Customer = 0,
    Bandit = 1,
}

/// A character walking a bar from left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Guy {
    pub entity: Entity,
    pub kind: GuyKind,
    /// Phase of the sinusoidal walk bob, a sawtooth over `[0, PI)`. Only the
    /// renderer consumes it; it has no effect on collisions.
    pub bob: f32,
}

impl Guy {
    pub fn new(kind: GuyKind, x: f32, bar: usize, bob: f32) -> Self {
        Self {
            entity: Entity::new(x, bar),
            kind,
            bob,
        }
    }

    /// Advances one simulated frame of walking.
    pub fn walk(&mut self) {
        self.entity.x += GUY_WALK_SPEED;
        self.bob += BOB_STEP;
        if self.bob > PI {
            self.bob -= PI;
        }
    }

    /// Whether the guy has walked off the right end of the bar.
    pub fn breached(&self) -> bool {
        self.entity.x > GUY_BREACH_X
    }

    /// Whether a projectile at `x` on the same bar lands inside the hit-box.
    pub fn hitbox_contains(&self, x: f32) -> bool {
        x > self.entity.x && x < self.entity.x + GUY_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bob_phase_wraps_as_sawtooth() {
        let mut guy = Guy::new(GuyKind::Customer, 0.0, 0, PI - 0.01);
        guy.walk();
        assert!(guy.bob >= 0.0 && guy.bob < PI);

        for _ in 0..400 {
            guy.walk();
            assert!(guy.bob >= 0.0 && guy.bob < PI);
        }
    }

    #[test]
    fn hitbox_is_exclusive_at_both_edges() {
        let guy = Guy::new(GuyKind::Bandit, 100.0, 2, 0.0);
        assert!(!guy.hitbox_contains(100.0));
        assert!(guy.hitbox_contains(100.1));
        assert!(guy.hitbox_contains(159.9));
        assert!(!guy.hitbox_contains(160.0));
    }
}
