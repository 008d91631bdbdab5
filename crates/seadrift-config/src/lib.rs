//! Configuration loading for the seadrift terminal scene.

use std::path::PathBuf;
use std::{env, fs};

use directories::ProjectDirs;
use serde::Deserialize;

/// Environment variable overriding the reduced-motion preference; stands in
/// for the platform's reduced-motion setting.
pub const REDUCED_MOTION_ENV: &str = "SEADRIFT_REDUCED_MOTION";

/// User configuration, read from `seadrift.toml` in the platform config
/// directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Suppress motion: no parallax, frozen particles, tagline shown at once.
    pub reduced_motion: bool,
    /// Tagline phrase typed under the clock; empty disables the animator.
    pub tagline: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            tagline: "Web developer".to_owned(),
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when no file exists.
    /// A malformed file is an error; the environment override is applied on
    /// top of whatever was loaded.
    pub fn load() -> color_eyre::Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let raw = fs::read_to_string(&path)?;
                toml::from_str(&raw)?
            }
            _ => Self::default(),
        };
        if let Ok(value) = env::var(REDUCED_MOTION_ENV) {
            config.reduced_motion = motion_override(&value);
        }
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "seadrift").map(|dirs| dirs.config_dir().join("seadrift.toml"))
    }
}

/// Interpret the override variable: empty and `0` mean off, anything else on.
fn motion_override(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let config = Config::default();
        assert!(!config.reduced_motion);
        assert_eq!(config.tagline, "Web developer");
    }

    #[test]
    fn partial_files_keep_defaults_for_the_rest() {
        let config: Config = toml::from_str("reduced_motion = true").unwrap();
        assert!(config.reduced_motion);
        assert_eq!(config.tagline, "Web developer");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("reduced_mtion = true").is_err());
    }

    #[test]
    fn override_variable_parses_like_a_flag() {
        assert!(!motion_override(""));
        assert!(!motion_override("0"));
        assert!(motion_override("1"));
        assert!(motion_override("true"));
    }
}
