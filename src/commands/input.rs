use std::fmt;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use waterblocks::{parse_heights, HeightSequence, ParseMode};

use crate::cli::HeightArgs;

/// Raw height text, attached to parse errors so the UI can point into it.
#[derive(Debug, Clone)]
pub struct HeightInput(pub String);

impl fmt::Display for HeightInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read block heights from '{}'", self.0)
    }
}

/// Resolve the height sequence for a command.
///
/// Positional arguments are joined with commas; a file is read line by
/// line. With neither, the demo blocks are used.
pub fn read_heights(args: &HeightArgs, mode: ParseMode) -> Result<HeightSequence> {
    let raw = match &args.file {
        Some(path) => join_lines(&read_source(path)?),
        None if args.heights.is_empty() => {
            debug!("no heights given, using demo blocks");
            return Ok(HeightSequence::default_blocks());
        }
        None => join_args(&args.heights),
    };

    debug!(input = %raw, ?mode, "parsing heights");
    parse_heights(&raw, mode).with_context(|| HeightInput(raw.clone()))
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read heights from stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read heights from {}", path.display()))
}

/// `["4,2", "0", "3 2"]` becomes `"4,2,0,3,2"`.
fn join_args(args: &[String]) -> String {
    join_tokens(args.iter().map(String::as_str))
}

/// One height per line, or comma-separated lines; `"4,\n2,\n0"` becomes `"4,2,0"`.
fn join_lines(content: &str) -> String {
    join_tokens(content.lines())
}

fn join_tokens<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(|p| p.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
