//! Configuration module for waterblocks
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WATERBLOCKS_*)
//! 3. `--config` path, or `waterblocks.toml` in the working directory
//! 4. User config (`<config_dir>/waterblocks/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, InputConfig, LoadedConfig, OutputConfig, RenderConfig, Verbosity,
};
