use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// waterblocks - trapped rainwater calculator and block visualizer
#[derive(Parser, Debug)]
#[command(name = "waterblocks")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'waterblocks' without arguments to compute the demo blocks 4, 2, 0, 3, 2, 5.")]
pub struct Cli {
    /// Output NDJSON events instead of boxes
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./waterblocks.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject the input on the first invalid or negative height
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the heights come from.
#[derive(Args, Debug, Clone, Default)]
pub struct HeightArgs {
    /// Block heights, comma and/or space separated (e.g. 4,2,0,3,2,5)
    #[arg(value_name = "HEIGHTS", allow_negative_numbers = true)]
    pub heights: Vec<String>,

    /// Read heights from a file ('-' for stdin)
    #[arg(short, long, conflicts_with = "heights")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute trapped water and show the levels, a chart and the total
    Compute {
        #[command(flatten)]
        input: HeightArgs,
    },

    /// Render blocks and trapped water as an SVG document
    Render {
        #[command(flatten)]
        input: HeightArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
