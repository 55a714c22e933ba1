//! View configuration loaded from TOML.
//!
//! Every field is optional in the file; missing fields take the values of
//! [`ViewConfig::default`]. A missing file means the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration parsed but describes an unusable geometry.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// An RGB color, written as `[r, g, b]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// A neutral gray with all channels set to `level`.
    pub const fn gray(level: u8) -> Self {
        Rgb(level, level, level)
    }

    /// Returns the color as a CSS hex string, e.g. `#88ff00`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colors used by renderers for tiles and piece glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub valid_move: Rgb,
    pub hover: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
    pub outline: Rgb,
    pub white_piece: Rgb,
    pub black_piece: Rgb,
    pub accent: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Rgb::gray(0x00),
            valid_move: Rgb(0x00, 0xFF, 0x00),
            hover: Rgb(0xFF, 0xFF, 0x00),
            light: Rgb::gray(0xFF),
            dark: Rgb::gray(0x88),
            outline: Rgb::gray(0x00),
            white_piece: Rgb::gray(220),
            black_piece: Rgb::gray(40),
            accent: Rgb::gray(0x00),
        }
    }
}

/// Viewport and tile geometry.
///
/// `tile_width` must be exactly twice `tile_height`; the projection and
/// its hit test rely on the 2:1 diamond.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Viewport width in pixels.
    pub screen_width: i32,
    /// Viewport height in pixels.
    pub screen_height: i32,
    /// Width of one diamond tile in pixels.
    pub tile_width: i32,
    /// Height of one diamond tile in pixels.
    pub tile_height: i32,
    /// How far a hovered piece is raised, in pixels.
    pub piece_lift: i32,
    pub palette: Palette,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            screen_width: 1000,
            screen_height: 1000,
            tile_width: 100,
            tile_height: 50,
            piece_lift: 10,
            palette: Palette::default(),
        }
    }
}

impl ViewConfig {
    /// Default file name looked up by [`ViewConfig::load`] callers.
    pub const FILE_NAME: &'static str = "iso-board.toml";

    /// Largest accepted screen, tile, or lift size in pixels. Keeps every
    /// projected coordinate well inside `i32`.
    pub const MAX_EXTENT: i32 = 1 << 16;

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// [`ConfigError::Parse`] for invalid TOML, or [`ConfigError::Invalid`]
    /// if the geometry fails [`ViewConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the geometry is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("piece_lift", self.piece_lift),
        ];
        if let Some((name, value)) = sizes.iter().find(|(_, v)| *v > Self::MAX_EXTENT) {
            return Err(ConfigError::Invalid(format!(
                "{name} must be at most {}, got {value}",
                Self::MAX_EXTENT
            )));
        }
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.tile_height <= 0 || self.tile_height % 2 != 0 {
            return Err(ConfigError::Invalid(format!(
                "tile_height must be a positive even number, got {}",
                self.tile_height
            )));
        }
        if self.tile_height.checked_mul(2) != Some(self.tile_width) {
            return Err(ConfigError::Invalid(format!(
                "tile_width must be twice tile_height, got {} and {}",
                self.tile_width, self.tile_height
            )));
        }
        if self.piece_lift < 0 {
            return Err(ConfigError::Invalid(format!(
                "piece_lift must not be negative, got {}",
                self.piece_lift
            )));
        }
        Ok(())
    }
}
