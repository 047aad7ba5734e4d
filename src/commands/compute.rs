use anyhow::Result;
use tracing::info;
use waterblocks::HeightSequence;

use crate::ui::context::UiContext;
use crate::ui::json::{emit, emit_event, CompleteEvent, StartEvent};
use crate::ui::views::report::render_report;

pub fn cmd_compute(heights: &HeightSequence, ui: &UiContext) -> Result<()> {
    let result = heights.compute();
    info!(
        columns = heights.len(),
        total = result.total,
        "computed trapped water"
    );

    if ui.json {
        emit_event(&StartEvent::new("compute"))?;
        emit(serde_json::json!({
            "event": "result",
            "heights": heights,
            "water_levels": result.water_levels,
            "total": result.total,
        }))?;
        emit_event(&CompleteEvent::success("compute"))?;
        return Ok(());
    }

    print!(
        "{}",
        render_report(
            heights,
            &result,
            usize::from(ui.caps.width),
            ui.color,
            ui.unicode
        )
    );
    Ok(())
}
