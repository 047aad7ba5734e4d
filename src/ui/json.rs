//! NDJSON output for `--json` mode: one JSON object per line on stdout.

use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes a raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Serialize a typed event and write it to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let value = serde_json::to_value(event).map_err(io::Error::other)?;
    emit(value)
}

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }
}
