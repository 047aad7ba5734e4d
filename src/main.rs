//! waterblocks CLI - trapped rainwater calculator
//!
//! Usage: waterblocks [OPTIONS] [COMMAND]
//!
//! Commands:
//!   compute  Compute trapped water and show levels, chart and total
//!   render   Render blocks and trapped water as SVG

mod cli;
mod commands;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waterblocks::config::{Config, Verbosity};
use waterblocks::{ParseMode, SvgLayout};

use cli::{Cli, Commands, HeightArgs};
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let loaded = Config::resolve(cli.config.as_deref(), &cwd)?;
    let config = loaded.config;

    init_tracing(cli.verbose, config.output.verbosity);
    debug!(source = ?loaded.source, "config resolved");

    let ui = UiContext::new(cli.json, cli.color, &config);
    if !loaded.warnings.is_empty() {
        if ui.json {
            for w in &loaded.warnings {
                ui::json::emit(serde_json::json!({
                    "event": "warning",
                    "key": w.key,
                    "file": w.file.display().to_string(),
                    "line": w.line,
                    "suggestion": w.suggestion,
                }))?;
            }
        } else {
            eprint!(
                "{}",
                ui::views::warnings::render_config_warnings(&loaded.warnings, ui.color, ui.unicode)
            );
        }
    }

    let mode = if cli.strict {
        ParseMode::Strict
    } else {
        config.input.mode
    };

    match cli.command {
        None => {
            let heights = commands::read_heights(&HeightArgs::default(), mode)?;
            commands::compute::cmd_compute(&heights, &ui)
        }
        Some(Commands::Compute { input }) => {
            let heights = commands::read_heights(&input, mode)?;
            commands::compute::cmd_compute(&heights, &ui)
        }
        Some(Commands::Render { input, out }) => {
            let heights = commands::read_heights(&input, mode)?;
            let layout = SvgLayout::from(&config.render);
            commands::render::cmd_render(&heights, &layout, out.as_deref(), &ui)
        }
    }
}

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins; otherwise `-v` flags, then the configured verbosity.
fn init_tracing(verbose: u8, verbosity: Verbosity) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match (verbose, verbosity) {
        (0, Verbosity::Quiet) => "error",
        (0, Verbosity::Normal) => "warn",
        (0, Verbosity::Verbose) | (1, _) => "info",
        (0, Verbosity::Debug) | (2, _) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
