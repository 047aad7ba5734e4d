//! File output helpers.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::BlocksResult;

/// Write `content` to `path` atomically.
///
/// Parent directories are created. The content goes to a temp file in the
/// destination directory which is then renamed over `path`, so readers never
/// observe a partial file.
pub fn write_atomic(path: &Path, content: &[u8]) -> BlocksResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
