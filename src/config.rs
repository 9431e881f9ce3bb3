use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::color::Color;

/// Environment variable pointing at a config file.
pub const CONFIG_ENV_VAR: &str = "SWIMMING_FISH_CONFIG";
/// Config file picked up from the working directory when the env var is unset.
pub const DEFAULT_CONFIG_FILE: &str = "swimming-fish.toml";

/// Surface width per bubble in the pool.
pub const WIDTH_PER_BUBBLE: f32 = 100.0;
/// Surface width per fish in the pool.
pub const WIDTH_PER_MOTIF: f32 = 200.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("spacing.{name} must be a positive number of pixels, got {value}")]
    Spacing { name: &'static str, value: f32 },
}

/// Startup configuration, loaded once from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window title.
    pub title: String,
    /// Initial logical window size.
    pub width: u32,
    pub height: u32,
    /// Fish follow the pointer and a bait marker is drawn under it.
    pub interactive: bool,
    /// Fixed RNG seed for a reproducible aquarium.
    pub seed: Option<u64>,
    pub theme: Theme,
    pub spacing: Spacing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub bubble: Color,
    /// Fish RGB; alpha is replaced per fish.
    pub motif: Color,
    pub marker: Color,
}

/// Pool spacing: one particle per this many pixels of surface width.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub bubble: f32,
    pub motif: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "dqn.fish".to_string(),
            width: 1280,
            height: 480,
            interactive: true,
            seed: None,
            theme: Theme::default(),
            spacing: Spacing::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgba(0x27, 0x75, 0xCF, 0xFF),
            bubble: Color::rgba(0xFF, 0xFF, 0xFF, 0xA0),
            motif: Color::BLACK,
            marker: Color::WHITE,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            bubble: WIDTH_PER_BUBBLE,
            motif: WIDTH_PER_MOTIF,
        }
    }
}

impl Config {
    /// Load from `$SWIMMING_FISH_CONFIG`, then `./swimming-fish.toml`, then defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        for (name, value) in [("bubble", self.spacing.bubble), ("motif", self.spacing.motif)] {
            // Also rejects NaN.
            if !(value > 0.0) {
                return Err(ConfigError::Spacing { name, value });
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.title, "dqn.fish");
        assert!(config.interactive);
        assert_eq!(config.seed, None);
        assert_eq!(config.theme, Theme::default());
        assert_eq!(config.spacing, Spacing::default());
    }

    #[test]
    fn partial_overrides() {
        let config = Config::from_toml_str(
            r##"
            interactive = false
            seed = 42

            [theme]
            background = "#102030"

            [spacing]
            motif = 150.0
            "##,
        )
        .unwrap();

        assert!(!config.interactive);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.theme.background, Color(0x102030FF));
        assert_eq!(config.theme.bubble, Color(0xFFFFFFA0));
        assert_eq!(config.spacing.motif, 150.0);
        assert_eq!(config.spacing.bubble, WIDTH_PER_BUBBLE);
    }

    #[test]
    fn rejects_bad_color() {
        let err = Config::from_toml_str("[theme]\nbubble = \"white\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("white"));
    }

    #[test]
    fn rejects_non_positive_spacing() {
        let err = Config::from_toml_str("[spacing]\nbubble = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Spacing { name: "bubble", .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
