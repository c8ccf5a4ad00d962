//! Score keeping and the prime-gated combo multiplier.
//!
//! Every good shot is worth the current multiplier. Earning another
//! multiplier point requires a streak of consecutive good shots as long as
//! the current prime threshold; each earned point moves the threshold two
//! entries further along the prime table, so streak requirements are
//! 7, 11, 17, 23, ... A single bad shot drops everything back to the start.

use crate::constants::{mechanics::STARTING_LIVES, PRIMES, START_PRIME_INDEX};
use crate::entity::{GuyKind, ProjectileKind};

/// The per-game score sheet. One instance lives in the session and is reset
/// wholesale at the start of every game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub score: u32,
    /// Points granted per good shot; never below 1.
    pub multiplier: u32,
    /// Total guys spawned this game.
    pub seen: u32,
    /// Consecutive good shots since the last bad one.
    pub hits: u32,
    /// The streak length required for the next multiplier point.
    pub threshold: u32,
    /// Index of `threshold` in the prime table.
    pub prime_index: usize,
    pub lives: u32,
}

impl Default for Stat {
    fn default() -> Self {
        Self {
            score: 0,
            multiplier: 1,
            seen: 0,
            hits: 0,
            threshold: PRIMES[START_PRIME_INDEX],
            prime_index: START_PRIME_INDEX,
            lives: STARTING_LIVES,
        }
    }
}

impl Stat {
    /// Applies one resolved hit to the score sheet.
    pub fn record_hit(&mut self, good_shot: bool) {
        if good_shot {
            self.score += self.multiplier;
            self.hits += 1;
            if self.hits >= self.threshold {
                self.multiplier += 1;
                self.prime_index = (self.prime_index + 2).min(PRIMES.len() - 1);
                self.hits = 0;
                self.threshold = PRIMES[self.prime_index];
            }
        } else {
            self.multiplier = 1;
            self.hits = 0;
            self.prime_index = START_PRIME_INDEX;
            self.threshold = PRIMES[START_PRIME_INDEX];
        }
    }

    /// Removes one life. Returns true when that was the last one.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}

/// The pairing rule: customers want shot glasses, bandits get fireballs.
/// Any other combination still destroys both entities but scores as bad.
pub fn good_shot(guy: GuyKind, projectile: ProjectileKind) -> bool {
    matches!(
        (guy, projectile),
        (GuyKind::Customer, ProjectileKind::Shotglass) | (GuyKind::Bandit, ProjectileKind::Fireball)
    )
}
