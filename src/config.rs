//! Command-line configuration for the application shell.
//!
//! The simulation core owns none of this; it only receives the resolved
//! save path and the invincibility flag.

use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub assets: Option<PathBuf>,
    pub pref: Option<PathBuf>,
    pub fullscreen: bool,
    pub invincible: bool,
}

impl Config {
    pub fn parse() -> Self {
        Self::from_args(env::args().skip(1))
    }

    pub fn from_args(args: impl Iterator<Item = String>) -> Self {
        let mut config = Self::default();
        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--assets" => config.assets = args.next().map(PathBuf::from),
                "--pref" => config.pref = args.next().map(PathBuf::from),
                "--fullscreen" => config.fullscreen = true,
                "--invincible" => config.invincible = true,
                other => warn!(argument = other, "Ignoring unknown argument"),
            }
        }
        config
    }

    /// The directory sprites and fonts are loaded from. Defaults to an
    /// `assets` directory next to the executable.
    pub fn assets_dir(&self) -> PathBuf {
        self.assets.clone().unwrap_or_else(|| {
            sdl2::filesystem::base_path()
                .map(PathBuf::from)
                .unwrap_or_default()
                .join("assets")
        })
    }

    /// Where the saved game lives. Defaults to the SDL preference directory.
    pub fn save_path(&self) -> PathBuf {
        self.pref
            .clone()
            .unwrap_or_else(|| {
                sdl2::filesystem::pref_path("", "dragon_bartender")
                    .map(PathBuf::from)
                    .unwrap_or_default()
            })
            .join("savedgame")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_are_off() {
        let config = parse(&[]);
        assert!(config.assets.is_none());
        assert!(config.pref.is_none());
        assert!(!config.fullscreen);
        assert!(!config.invincible);
    }

    #[test]
    fn parses_paths_and_flags() {
        let config = parse(&["--assets", "/tmp/art", "--pref", "/tmp/save", "--fullscreen", "--invincible"]);
        assert_eq!(config.assets.as_deref(), Some(std::path::Path::new("/tmp/art")));
        assert_eq!(config.pref.as_deref(), Some(std::path::Path::new("/tmp/save")));
        assert!(config.fullscreen);
        assert!(config.invincible);
    }

    #[test]
    fn save_path_appends_file_name() {
        let config = parse(&["--pref", "/tmp/save"]);
        assert_eq!(config.save_path(), PathBuf::from("/tmp/save/savedgame"));
    }

    #[test]
    fn unknown_arguments_are_skipped() {
        let config = parse(&["--bogus", "--invincible"]);
        assert!(config.invincible);
    }
}
