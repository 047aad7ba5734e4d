use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use waterblocks::{render_svg, HeightSequence, SvgLayout};

use crate::ui::context::UiContext;
use crate::ui::json::{emit, emit_event, CompleteEvent, StartEvent};
use crate::ui::views::render::render_written;

pub fn cmd_render(
    heights: &HeightSequence,
    layout: &SvgLayout,
    out: Option<&Path>,
    ui: &UiContext,
) -> Result<()> {
    let result = heights.compute();
    let svg = render_svg(heights, &result, layout);

    if ui.json {
        emit_event(&StartEvent::new("render"))?;
    }

    match out {
        Some(path) => {
            waterblocks::fs::write_atomic(path, svg.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), total = result.total, "wrote svg");

            if ui.json {
                emit(serde_json::json!({
                    "event": "result",
                    "path": path.display().to_string(),
                    "total": result.total,
                }))?;
            } else {
                eprint!(
                    "{}",
                    render_written(path, result.total, ui.color, ui.unicode)
                );
            }
        }
        None if ui.json => {
            emit(serde_json::json!({
                "event": "result",
                "svg": svg,
                "total": result.total,
            }))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }

    if ui.json {
        emit_event(&CompleteEvent::success("render"))?;
    }
    Ok(())
}
