//! Deterministic text persistence of a running game.
//!
//! The format is whitespace-delimited tokens in a fixed order: the seven
//! stat fields, the dragon's bar, the three cactus positions, then the guy
//! and projectile collections each prefixed with a count. There is no
//! versioning and no checksum; anything malformed or truncated is a
//! [`LoadError`] and the live game is untouched, because loading builds a
//! fresh [`Session`] that the caller only swaps in on success.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::{FromStr, SplitAsciiWhitespace};

use tracing::debug;

use crate::constants::{NUM_BARS, PRIMES};
use crate::entity::{CactusKind, Dragon, Guy, GuyKind, Projectile, ProjectileKind};
use crate::error::{LoadError, SaveError};

use super::session::Session;

/// The fixed kind order cactus positions are written and read in.
const CACTUS_ORDER: [CactusKind; 3] = [CactusKind::Large, CactusKind::Small, CactusKind::Tiny];

pub fn save(path: &Path, session: &Session) -> Result<(), SaveError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    let stat = &session.stat;
    writeln!(w, "{}", stat.score)?;
    writeln!(w, "{}", stat.multiplier)?;
    writeln!(w, "{}", stat.seen)?;
    writeln!(w, "{}", stat.hits)?;
    writeln!(w, "{}", stat.threshold)?;
    writeln!(w, "{}", stat.prime_index)?;
    writeln!(w, "{}", stat.lives)?;
    writeln!(w, "{}", session.dragon.bar())?;
    for kind in CACTUS_ORDER {
        writeln!(w, "{}", session.cactus(kind).entity.x)?;
    }

    writeln!(w, "{}", session.guys.len())?;
    for guy in &session.guys {
        writeln!(w, "{} {} {} {}", guy.kind as u8, guy.entity.x, guy.entity.bar, guy.bob)?;
    }

    writeln!(w, "{}", session.projectiles.len())?;
    for projectile in &session.projectiles {
        writeln!(
            w,
            "{} {} {}",
            projectile.kind as u8, projectile.entity.x, projectile.entity.bar
        )?;
    }

    w.flush()?;
    debug!(path = %path.display(), guys = session.guys.len(), "Wrote save file");
    Ok(())
}

/// Reads a saved game into a fresh session. Entities are rebuilt through the
/// same constructors gameplay uses, so derived fields are recomputed rather
/// than trusted from the file.
pub fn load(path: &Path) -> Result<Session, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let mut tokens = Tokens::new(&text);

    let mut session = Session::new();
    session.stat.score = tokens.read("score")?;
    session.stat.multiplier = tokens.read("multiplier")?;
    session.stat.seen = tokens.read("guys seen")?;
    session.stat.hits = tokens.read("hit streak")?;
    session.stat.threshold = tokens.read("streak threshold")?;
    session.stat.prime_index = tokens.read("prime index")?;
    if session.stat.prime_index >= PRIMES.len() {
        return Err(LoadError::Malformed {
            field: "prime index",
            value: session.stat.prime_index.to_string(),
        });
    }
    session.stat.lives = tokens.read("lives")?;
    session.dragon = Dragon::at_bar(read_bar(&mut tokens, "dragon bar")?);
    for kind in CACTUS_ORDER {
        session.cactus_mut(kind).entity.x = tokens.read("cactus position")?;
    }

    let guy_count: usize = tokens.read("guy count")?;
    session.guys = Vec::new();
    for _ in 0..guy_count {
        let tag: u8 = tokens.read("guy kind")?;
        let kind = GuyKind::from_repr(tag).ok_or(LoadError::UnknownKind {
            field: "guy kind",
            value: tag,
        })?;
        let x: f32 = tokens.read("guy position")?;
        let bar = read_bar(&mut tokens, "guy bar")?;
        let bob: f32 = tokens.read("guy bob phase")?;
        session.guys.push(Guy::new(kind, x, bar, bob));
    }

    let projectile_count: usize = tokens.read("projectile count")?;
    session.projectiles.clear();
    for _ in 0..projectile_count {
        let tag: u8 = tokens.read("projectile kind")?;
        let kind = ProjectileKind::from_repr(tag).ok_or(LoadError::UnknownKind {
            field: "projectile kind",
            value: tag,
        })?;
        let x: f32 = tokens.read("projectile position")?;
        let bar = read_bar(&mut tokens, "projectile bar")?;
        session.projectiles.push(Projectile::new(kind, x, bar));
    }

    debug!(path = %path.display(), guys = guy_count, projectiles = projectile_count, "Read save file");
    Ok(session)
}

fn read_bar(tokens: &mut Tokens, field: &'static str) -> Result<usize, LoadError> {
    let bar: usize = tokens.read(field)?;
    if bar >= NUM_BARS {
        return Err(LoadError::BarOutOfRange(bar));
    }
    Ok(bar)
}

struct Tokens<'a> {
    iter: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_ascii_whitespace(),
        }
    }

    fn read<T: FromStr>(&mut self, field: &'static str) -> Result<T, LoadError> {
        let token = self.iter.next().ok_or(LoadError::Truncated(field))?;
        token.parse().map_err(|_| LoadError::Malformed {
            field,
            value: token.to_string(),
        })
    }
}
