//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BlocksError, BlocksResult};
use crate::parser::ParseMode;

use super::types::{ColorMode, Config, LoadedConfig, Verbosity};

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "waterblocks.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BlocksResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BlocksError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve config from an explicit path, the project file in `cwd`, the user
/// config directory, or defaults. Env overrides are applied last.
///
/// An explicit path must exist; the implicit locations are optional.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> BlocksResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let Some(path) = candidate else {
        debug!("no config file found, using defaults");
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            source: None,
            warnings: Vec::new(),
        });
    };

    debug!(path = %path.display(), "loading config");
    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: Some(path),
        warnings,
    })
}

/// Apply environment variable overrides (WATERBLOCKS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_from(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // WATERBLOCKS_PARSE_MODE
    if let Some(mode) = get_env("WATERBLOCKS_PARSE_MODE").and_then(|m| ParseMode::from_name(&m)) {
        config.input.mode = mode;
    }

    // WATERBLOCKS_COLOR
    if let Some(color) = get_env("WATERBLOCKS_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // WATERBLOCKS_UNICODE
    if let Some(val) = get_env("WATERBLOCKS_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    // WATERBLOCKS_VERBOSITY
    if let Some(verbosity) = get_env("WATERBLOCKS_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

/// `<config_dir>/waterblocks/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("waterblocks").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "input",
        "mode",
        "output",
        "verbosity",
        "color",
        "unicode",
        "render",
        "block_width",
        "gap",
        "padding",
        "max_height",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
