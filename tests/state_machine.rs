use std::fs;
use std::path::PathBuf;

use dragon_bartender::entity::{Guy, GuyKind};
use dragon_bartender::events::GameCommand;
use dragon_bartender::game::{save, Game, GameState, Session};
use speculoos::prelude::*;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dragon_bartender_sm_{}_{}", std::process::id(), name))
}

/// A game whose save path points somewhere no file exists.
fn fresh_game(name: &str) -> Game {
    Game::new(scratch_path(name), false)
}

mod menu_tests {
    use super::*;

    #[test]
    fn starts_on_the_main_menu() {
        let game = fresh_game("initial");
        assert_that(&game.state).is_equal_to(GameState::MainMenu);
        assert_that(&game.cursor).is_equal_to(0);
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut game = fresh_game("cursor");
        game.apply(GameCommand::Up);
        assert_that(&game.cursor).is_equal_to(2);
        game.apply(GameCommand::Down);
        assert_that(&game.cursor).is_equal_to(0);
        game.apply(GameCommand::Down);
        assert_that(&game.cursor).is_equal_to(1);
    }

    #[test]
    fn confirm_on_start_enters_the_game_with_a_fresh_session() {
        let mut game = fresh_game("start");
        game.session.stat.score = 50;
        game.apply(GameCommand::Confirm);

        assert_that(&game.state).is_equal_to(GameState::InGame);
        assert_that(&game.session.stat.score).is_equal_to(0);
    }

    #[test]
    fn instructions_round_trip() {
        let mut game = fresh_game("instructions");
        game.apply(GameCommand::Down);
        game.apply(GameCommand::Down);
        game.apply(GameCommand::Confirm);
        assert_that(&game.state).is_equal_to(GameState::Instructions);

        game.apply(GameCommand::Confirm);
        assert_that(&game.state).is_equal_to(GameState::MainMenu);
    }

    #[test]
    fn failed_load_stays_on_the_menu_and_records_the_error() {
        let mut game = fresh_game("load_failure");
        game.apply(GameCommand::Down);
        game.apply(GameCommand::Confirm);

        assert_that(&game.state).is_equal_to(GameState::MainMenu);
        assert!(game.load_error.is_some());
    }

    #[test]
    fn successful_load_enters_paused_with_the_saved_session() {
        let path = scratch_path("load_success");
        let mut session = Session::from_seed(5);
        session.stat.score = 42;
        save::save(&path, &session).expect("save should succeed");

        let mut game = Game::new(path.clone(), false);
        game.apply(GameCommand::Down);
        game.apply(GameCommand::Confirm);
        fs::remove_file(&path).ok();

        assert_that(&game.state).is_equal_to(GameState::Paused);
        assert_that(&game.session.stat.score).is_equal_to(42);
        assert!(game.load_error.is_none());
    }
}

mod gameplay_tests {
    use super::*;

    #[test]
    fn dragon_moves_and_fires_on_commands() {
        let mut game = fresh_game("gameplay");
        game.apply(GameCommand::Confirm);

        game.apply(GameCommand::Down);
        game.apply(GameCommand::Down);
        assert_that(&game.session.dragon.bar()).is_equal_to(2);

        game.apply(GameCommand::FireShotglass);
        game.apply(GameCommand::FireFireball);
        assert_that(&game.session.projectiles.len()).is_equal_to(2);
    }

    #[test]
    fn toggle_invincible_flips_the_flag() {
        let mut game = fresh_game("invincible");
        game.apply(GameCommand::Confirm);
        game.apply(GameCommand::ToggleInvincible);
        assert!(game.invincible);
        game.apply(GameCommand::ToggleInvincible);
        assert!(!game.invincible);
    }

    #[test]
    fn reset_abandons_the_game() {
        let mut game = fresh_game("reset");
        game.apply(GameCommand::Confirm);
        game.apply(GameCommand::Reset);
        assert_that(&game.state).is_equal_to(GameState::MainMenu);
    }

    #[test]
    fn tick_advances_only_in_game() {
        let mut game = fresh_game("menu_tick");
        game.tick();
        assert_that(&game.session.stat.seen).is_equal_to(0);

        game.apply(GameCommand::Confirm);
        game.tick();
        assert_that(&game.session.stat.seen).is_equal_to(1);
    }

    #[test]
    fn running_out_of_lives_ends_the_game() {
        let mut game = fresh_game("game_over");
        game.apply(GameCommand::Confirm);
        for bar in 0..3 {
            game.session.guys.push(Guy::new(GuyKind::Customer, 600.0, bar, 0.0));
        }
        game.tick();
        assert_that(&game.state).is_equal_to(GameState::GameOver);
    }
}

mod pause_tests {
    use super::*;

    #[test]
    fn pause_and_resume() {
        let mut game = fresh_game("pause");
        game.apply(GameCommand::Confirm);
        game.apply(GameCommand::TogglePause);
        assert_that(&game.state).is_equal_to(GameState::Paused);

        game.apply(GameCommand::TogglePause);
        assert_that(&game.state).is_equal_to(GameState::InGame);
    }

    #[test]
    fn paused_simulation_does_not_advance() {
        let mut game = fresh_game("pause_freeze");
        game.apply(GameCommand::Confirm);
        game.apply(GameCommand::TogglePause);
        game.tick();
        assert_that(&game.session.stat.seen).is_equal_to(0);
    }

    #[test]
    fn saving_is_allowed_once_per_pause() {
        let path = scratch_path("save_once");
        let mut game = Game::new(path.clone(), false);
        game.apply(GameCommand::Confirm);
        game.apply(GameCommand::TogglePause);

        game.apply(GameCommand::SaveGame);
        assert!(path.exists());
        assert!(game.saved);

        // A second save in the same pause is a no-op.
        fs::remove_file(&path).ok();
        game.apply(GameCommand::SaveGame);
        assert!(!path.exists());

        // Resuming and pausing again rearms the save.
        game.apply(GameCommand::TogglePause);
        game.apply(GameCommand::TogglePause);
        game.apply(GameCommand::SaveGame);
        assert!(path.exists());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn failed_save_is_recorded_and_still_consumes_the_save() {
        let mut game = Game::new(scratch_path("missing_dir").join("deep/savedgame"), false);
        game.apply(GameCommand::Confirm);
        game.apply(GameCommand::TogglePause);
        game.apply(GameCommand::SaveGame);

        assert!(game.save_error.is_some());
        assert!(game.saved);
        assert_that(&game.state).is_equal_to(GameState::Paused);
    }
}

mod game_over_tests {
    use super::*;

    #[test]
    fn any_input_resets_to_the_menu() {
        let mut game = fresh_game("transient");
        game.state = GameState::GameOver;
        game.session.stat.score = 99;
        game.session.stat.lives = 0;

        game.apply(GameCommand::Confirm);

        assert_that(&game.state).is_equal_to(GameState::MainMenu);
        assert_that(&game.session.stat.score).is_equal_to(0);
        assert_that(&game.session.stat.lives).is_equal_to(3);
    }
}

mod exit_tests {
    use super::*;

    #[test]
    fn exit_command_works_in_every_state() {
        for state in [
            GameState::MainMenu,
            GameState::Instructions,
            GameState::InGame,
            GameState::Paused,
            GameState::GameOver,
        ] {
            let mut game = fresh_game("exit");
            game.state = state;
            game.apply(GameCommand::Exit);
            assert!(game.exit);
        }
    }
}
