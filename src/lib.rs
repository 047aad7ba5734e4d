//! waterblocks - trapped rainwater calculator and block visualizer
//!
//! Given column heights left to right, [`compute`] returns the total water
//! trapped between them after rainfall and the water surface level above
//! every column. Around that core the crate parses comma-separated height
//! lists, renders results as SVG or a text chart, and loads TOML config.

pub mod calculator;
pub mod config;
pub mod error;
pub mod fs;
pub mod heights;
pub mod parser;
pub mod render;

// Re-exports for convenience
pub use calculator::{compute, WaterResult};
pub use config::{Config, LoadedConfig};
pub use error::{BlocksError, BlocksResult};
pub use heights::HeightSequence;
pub use parser::{parse_heights, ParseMode};
pub use render::chart::{render_chart, ChartStyle};
pub use render::svg::{render_svg, SvgLayout};
