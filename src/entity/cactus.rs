use strum_macros::{Display, EnumIter, FromRepr};

use super::Entity;
use crate::constants::CANVAS_SIZE;

/// The three background obstacle sizes. Each has its own parallax speed and
/// width; together they fake depth behind the bar scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum CactusKind {
    Tiny = 0,
    Small = 1,
    Large = 2,
}

/// A scrolling background obstacle. Exactly one instance per kind exists for
/// the lifetime of a session; going off-screen repositions it, never
/// destroys it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cactus {
    pub entity: Entity,
    pub kind: CactusKind,
    /// Vertical offset from the horizon line.
    pub y: f32,
    /// Leftward scroll speed in pixels per simulated frame.
    pub speed: f32,
    /// Sprite width, used for the off-screen test.
    pub width: f32,
}

impl Cactus {
    pub fn new(kind: CactusKind, x: f32) -> Self {
        let (y, speed, width) = match kind {
            CactusKind::Tiny => (-5.0, -1.5, 35.0),
            CactusKind::Small => (0.0, -3.0, 70.0),
            CactusKind::Large => (10.0, -5.0, 140.0),
        };
        Self {
            entity: Entity::new(x, 0),
            kind,
            y,
            speed,
            width,
        }
    }

    /// Advances one simulated frame of scrolling, wrapping back to the right
    /// edge of the playfield once fully off-screen on the left.
    pub fn scroll(&mut self) {
        self.entity.x += self.speed;
        if self.entity.x + self.width < 0.0 {
            self.entity.x = CANVAS_SIZE.x as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn kinds_have_distinct_speeds_and_widths() {
        let all: Vec<Cactus> = CactusKind::iter().map(|kind| Cactus::new(kind, 0.0)).collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.speed, b.speed);
                assert_ne!(a.width, b.width);
            }
        }
    }

    #[test]
    fn wraps_on_the_first_frame_fully_off_screen() {
        let mut cactus = Cactus::new(CactusKind::Large, 0.0);
        // One frame shy of fully off-screen: still visible after this scroll.
        cactus.entity.x = -cactus.width - cactus.speed + 0.1;

        cactus.scroll();
        assert!(cactus.entity.x + cactus.width >= 0.0);

        // The next scroll is the first frame the condition holds.
        cactus.scroll();
        assert_eq!(cactus.entity.x, CANVAS_SIZE.x as f32);
    }
}
