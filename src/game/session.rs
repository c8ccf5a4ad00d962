//! The simulation context: every entity collection plus the score sheet,
//! advanced one fixed step at a time.
//!
//! A `Session` owns all mutable simulation state so the whole game can be
//! reset by replacing the value, and so tests can drive a session directly
//! without a window or a clock. The step function is deterministic for a
//! given RNG seed.

use std::f32::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::mechanics::{BANDIT_ODDS, GUY_SPAWN_X, SPAWN_INTERVAL, SPAWN_INTERVAL_MIN};
use crate::constants::NUM_BARS;
use crate::entity::{Cactus, CactusKind, Dragon, Guy, GuyKind, Projectile, ProjectileKind};

use super::scoring::{good_shot, Stat};

/// All live simulation state for one game.
pub struct Session {
    pub stat: Stat,
    pub dragon: Dragon,
    pub guys: Vec<Guy>,
    pub projectiles: SmallVec<[Projectile; 8]>,
    /// Indexed by [`CactusKind`] discriminant; never grows or shrinks.
    pub cactus: [Cactus; 3],
    /// Frames until the next guy spawns; 0 spawns on the next step.
    spawner: u32,
    rng: SmallRng,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// A session with a fixed RNG seed, for deterministic harnesses.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            stat: Stat::default(),
            dragon: Dragon::new(),
            guys: Vec::new(),
            projectiles: SmallVec::new(),
            cactus: [
                Cactus::new(CactusKind::Tiny, 0.0),
                Cactus::new(CactusKind::Small, 0.0),
                Cactus::new(CactusKind::Large, 0.0),
            ],
            spawner: 0,
            rng,
        }
    }

    pub fn cactus(&self, kind: CactusKind) -> &Cactus {
        &self.cactus[kind as usize]
    }

    pub fn cactus_mut(&mut self, kind: CactusKind) -> &mut Cactus {
        &mut self.cactus[kind as usize]
    }

    /// Appends a projectile of the given kind at the dragon's position.
    pub fn fire(&mut self, kind: ProjectileKind) {
        self.projectiles
            .push(Projectile::new(kind, self.dragon.entity.x, self.dragon.entity.bar));
    }

    /// Advances the whole simulation by exactly one fixed step.
    ///
    /// Returns true when a bar breach consumed the last life and the game is
    /// over. With `invincible` set, breaches still remove the guy but cost
    /// nothing.
    pub fn step(&mut self, invincible: bool) -> bool {
        for cactus in &mut self.cactus {
            cactus.scroll();
        }

        self.run_spawner();
        let out_of_lives = self.walk_guys(invincible);
        self.fly_projectiles();

        out_of_lives
    }

    fn run_spawner(&mut self) {
        if self.spawner > 0 {
            self.spawner -= 1;
            return;
        }

        let kind = if self.rng.random_range(0..BANDIT_ODDS) == 0 {
            GuyKind::Bandit
        } else {
            GuyKind::Customer
        };
        let bar = self.rng.random_range(0..NUM_BARS);
        let bob = self.rng.random_range(0.0..PI);
        trace!(%kind, bar, "Spawned guy");
        self.guys.push(Guy::new(kind, GUY_SPAWN_X, bar, bob));
        self.stat.seen += 1;
        self.spawner = SPAWN_INTERVAL.max(SPAWN_INTERVAL_MIN);
    }

    fn walk_guys(&mut self, invincible: bool) -> bool {
        let mut out_of_lives = false;
        let mut i = 0;
        while i < self.guys.len() {
            self.guys[i].walk();
            if self.guys[i].breached() {
                self.guys.swap_remove(i);
                if !invincible && self.stat.lose_life() {
                    out_of_lives = true;
                }
            } else {
                i += 1;
            }
        }
        out_of_lives
    }

    /// Moves every projectile and resolves hits against guys sharing its
    /// bar. The first overlapping guy takes the hit: both entities are
    /// removed and the score sheet is updated with the pairing verdict.
    fn fly_projectiles(&mut self) {
        let mut i = 0;
        while i < self.projectiles.len() {
            self.projectiles[i].advance();
            let projectile = &self.projectiles[i];
            let (x, bar, kind) = (projectile.entity.x, projectile.entity.bar, projectile.kind);

            if let Some(j) = self
                .guys
                .iter()
                .position(|guy| guy.entity.bar == bar && guy.hitbox_contains(x))
            {
                let guy = self.guys.swap_remove(j);
                self.projectiles.swap_remove(i);
                self.stat.record_hit(good_shot(guy.kind, kind));
                i += 1;
                continue;
            }

            if self.projectiles[i].exited() {
                self.projectiles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
