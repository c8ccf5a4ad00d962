use std::fs;
use std::path::PathBuf;

use dragon_bartender::entity::{CactusKind, Guy, GuyKind, Projectile, ProjectileKind};
use dragon_bartender::error::LoadError;
use dragon_bartender::game::{save, Session};
use pretty_assertions::assert_eq;

/// A unique scratch path per test so parallel test threads never collide.
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dragon_bartender_{}_{}", std::process::id(), name))
}

fn populated_session() -> Session {
    let mut session = Session::from_seed(11);
    for _ in 0..3 {
        session.stat.record_hit(true);
    }
    session.guys.push(Guy::new(GuyKind::Bandit, 123.25, 2, 1.5));
    session.guys.push(Guy::new(GuyKind::Customer, -12.5, 0, 0.25));
    session.projectiles.push(Projectile::new(ProjectileKind::Fireball, 410.0, 2));
    session.projectiles.push(Projectile::new(ProjectileKind::Shotglass, 77.5, 3));
    session.dragon.move_down();
    session.cactus_mut(CactusKind::Large).entity.x = 512.5;
    session.cactus_mut(CactusKind::Small).entity.x = 96.0;
    session.cactus_mut(CactusKind::Tiny).entity.x = 700.75;
    // A few simulated frames so positions are not the constructor values.
    for _ in 0..5 {
        session.step(true);
    }
    session
}

#[test]
fn round_trip_reproduces_the_session() {
    let path = scratch_path("round_trip");
    let session = populated_session();

    save::save(&path, &session).expect("save should succeed");
    let loaded = save::load(&path).expect("load should succeed");
    fs::remove_file(&path).ok();

    assert_eq!(loaded.stat, session.stat);
    assert_eq!(loaded.dragon, session.dragon);
    for kind in [CactusKind::Tiny, CactusKind::Small, CactusKind::Large] {
        assert_eq!(loaded.cactus(kind).entity.x, session.cactus(kind).entity.x);
    }
    assert_eq!(loaded.guys, session.guys);
    assert_eq!(loaded.projectiles, session.projectiles);
}

#[test]
fn missing_file_is_an_io_error() {
    let result = save::load(&scratch_path("does_not_exist"));
    assert!(matches!(result, Err(LoadError::Io(_))));
}

mod corrupt_file_tests {
    use super::*;

    fn load_text(name: &str, text: &str) -> Result<Session, LoadError> {
        let path = scratch_path(name);
        fs::write(&path, text).expect("scratch file should be writable");
        let result = save::load(&path);
        fs::remove_file(&path).ok();
        result
    }

    /// Stat block, dragon bar, and cactus positions, all well-formed.
    const HEADER: &str = "10 2 5 3 11 5 3 1 100 200 300";

    #[test]
    fn truncated_file_is_rejected() {
        let result = load_text("truncated", "10 2 5");
        assert!(matches!(result, Err(LoadError::Truncated(_))));
    }

    #[test]
    fn non_numeric_token_is_rejected() {
        let result = load_text("garbage", "10 2 five 3 11 5 3 1 100 200 300 0 0");
        assert!(matches!(result, Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn unknown_guy_kind_is_rejected() {
        let text = format!("{HEADER} 1 7 -20 1 0.5 0");
        let result = load_text("bad_kind", &text);
        assert!(matches!(result, Err(LoadError::UnknownKind { value: 7, .. })));
    }

    #[test]
    fn out_of_range_bar_is_rejected() {
        let text = format!("{HEADER} 1 0 -20 9 0.5 0");
        let result = load_text("bad_bar", &text);
        assert!(matches!(result, Err(LoadError::BarOutOfRange(9))));
    }

    #[test]
    fn out_of_range_dragon_bar_is_rejected() {
        let result = load_text("bad_dragon", "10 2 5 3 11 5 3 8 100 200 300 0 0");
        assert!(matches!(result, Err(LoadError::BarOutOfRange(8))));
    }

    #[test]
    fn out_of_range_prime_index_is_rejected() {
        let result = load_text("bad_prime", "10 2 5 3 11 999 3 1 100 200 300 0 0");
        assert!(matches!(result, Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn cactus_positions_are_read_in_size_order() {
        let text = format!("{HEADER} 0 0");
        let session = load_text("cactus_order", &text).expect("well-formed file should load");
        assert_eq!(session.cactus(CactusKind::Large).entity.x, 100.0);
        assert_eq!(session.cactus(CactusKind::Small).entity.x, 200.0);
        assert_eq!(session.cactus(CactusKind::Tiny).entity.x, 300.0);
    }

    #[test]
    fn scalar_fields_land_in_the_stat() {
        let text = format!("{HEADER} 0 0");
        let session = load_text("stat_fields", &text).expect("well-formed file should load");
        assert_eq!(session.stat.score, 10);
        assert_eq!(session.stat.multiplier, 2);
        assert_eq!(session.stat.seen, 5);
        assert_eq!(session.stat.hits, 3);
        assert_eq!(session.stat.threshold, 11);
        assert_eq!(session.stat.prime_index, 5);
        assert_eq!(session.stat.lives, 3);
        assert_eq!(session.dragon.bar(), 1);
    }
}
