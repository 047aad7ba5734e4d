//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BlocksError, BlocksResult};
use crate::parser::ParseMode;
use crate::render::svg::SvgLayout;

use super::loader::{self, ConfigWarning};

/// Input parsing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub mode: ParseMode,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// SVG geometry, in user units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_block_width")]
    pub block_width: u32,

    #[serde(default = "default_gap")]
    pub gap: u32,

    #[serde(default = "default_padding")]
    pub padding: u32,

    #[serde(default = "default_max_height")]
    pub max_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            block_width: default_block_width(),
            gap: default_gap(),
            padding: default_padding(),
            max_height: default_max_height(),
        }
    }
}

fn default_block_width() -> u32 {
    50
}

fn default_gap() -> u32 {
    10
}

fn default_padding() -> u32 {
    20
}

fn default_max_height() -> u32 {
    300
}

impl From<&RenderConfig> for SvgLayout {
    fn from(render: &RenderConfig) -> Self {
        SvgLayout {
            block_width: render.block_width,
            gap: render.gap,
            padding: render.padding,
            max_height: render.max_height,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BlocksResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BlocksResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective config: explicit path, project file, user file
    /// or defaults, then `WATERBLOCKS_*` environment overrides.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> BlocksResult<LoadedConfig> {
        loader::resolve(explicit, cwd)
    }

    /// Apply environment variable overrides (WATERBLOCKS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject geometry that cannot be drawn.
    pub fn validate(&self, file: &Path) -> BlocksResult<()> {
        let invalid = |message: &str| BlocksError::InvalidConfig {
            file: file.to_path_buf(),
            message: message.to_string(),
        };

        if self.render.block_width == 0 {
            return Err(invalid("render.block_width must be greater than 0"));
        }
        if self.render.max_height == 0 {
            return Err(invalid("render.max_height must be greater than 0"));
        }
        Ok(())
    }
}

/// Config plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}
