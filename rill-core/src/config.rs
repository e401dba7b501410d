//! The `rill_config.json5` configuration file.

use std::{fs, io, path::Path, path::PathBuf};

use rill_registry::fluid::{FluidConfig, vanilla};
use rill_registry::{BlockRegistry, TextureAtlas};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/rill_config.json5");

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Failed to access config file {path}: {source}")]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid json5 for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

/// Simulation speed, in fluid steps per driver frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    /// One step per frame.
    Slow,
    /// Two steps per frame.
    Normal,
    /// Four steps per frame.
    Fast,
}

impl Speed {
    /// Fluid steps run per driver frame.
    #[must_use]
    pub const fn steps_per_frame(self) -> u32 {
        match self {
            Self::Slow => 1,
            Self::Normal => 2,
            Self::Fast => 4,
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RillConfig {
    /// Water parameters.
    pub water: FluidConfig,
    /// Lava parameters.
    pub lava: FluidConfig,
    /// Whether leaves are opaque for face culling.
    pub leaves_opaque: bool,
    /// Simulation speed.
    pub speed: Speed,
    /// Radius, in chunks, of the demo world around the origin.
    pub world_radius: u8,
    /// Number of driver frames to run.
    pub frames: u32,
}

impl RillConfig {
    /// Loads the config at `path`, writing the default file there first if it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path.exists() {
            let config_str = fs::read_to_string(path).map_err(io_error)?;
            return Self::parse(&config_str);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(Self::default())
    }

    /// Parses and validates a config from json5 text.
    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: RillConfig = serde_json5::from_str(config_str)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        for fluid in [&self.water, &self.lava] {
            if fluid.max_level == 0 {
                return Err("Fluid max_level must be in range 1..=255");
            }
            if !fluid.texture.is_valid() {
                return Err("Fluid texture must be inside the 16x16 atlas");
            }
            if fluid.name.trim().is_empty() {
                return Err("Fluid name must not be empty");
            }
        }
        if self.world_radius > 8 {
            return Err("World radius must be in range 0..=8");
        }
        Ok(())
    }

    /// Builds the block registry described by this config.
    #[must_use]
    pub fn registry(&self) -> BlockRegistry {
        BlockRegistry::vanilla(self.leaves_opaque, self.water.clone(), self.lava.clone())
    }

    /// The terrain atlas geometry.
    #[must_use]
    pub fn atlas(&self) -> TextureAtlas {
        TextureAtlas::default()
    }
}

impl Default for RillConfig {
    fn default() -> Self {
        Self {
            water: vanilla::water(),
            lava: vanilla::lava(),
            leaves_opaque: true,
            speed: Speed::Normal,
            world_radius: 1,
            frames: 40,
        }
    }
}
