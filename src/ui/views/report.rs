use waterblocks::render::summary_line;
use waterblocks::{render_chart, ChartStyle, HeightSequence, WaterResult};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed report for `waterblocks compute`.
///
/// The chart is left out when it would not fit in `max_width` columns.
pub fn render_report(
    heights: &HeightSequence,
    result: &WaterResult,
    max_width: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = format!(
        "{} {}",
        Icon::Droplet.colored(supports_color, supports_unicode),
        ColoredText::plain("Water Blocks").bold().render(supports_color)
    );
    let mut b = Box::with_title(title).style(BoxStyle::Info);

    b.add_line(format!("Heights: {}", heights));
    b.add_line(format!("Levels:  {}", join(&result.water_levels)));
    b.add_empty();

    let style = ChartStyle {
        unicode: supports_unicode,
    };
    // four columns of frame and padding around every row
    let chart_width = (heights.len() * 3).saturating_sub(1) + 4;
    if chart_width > max_width {
        b.add_line(
            ColoredText::dim(format!(
                "(chart omitted: {} columns do not fit in {} terminal columns)",
                heights.len(),
                max_width
            ))
            .render(supports_color),
        );
    } else {
        let chart = render_chart(heights, result, &style);
        if chart.is_empty() {
            b.add_line(ColoredText::dim("(no blocks above ground)").render(supports_color));
        } else {
            let water = style.water().to_string().repeat(2);
            let painted = ColoredText::water(water.as_str()).render(supports_color);
            for line in chart.lines() {
                b.add_line(line.replace(&water, &painted));
            }
        }
    }

    b.add_empty();
    b.add_line(
        ColoredText::success(summary_line(result.total))
            .bold()
            .render(supports_color),
    );
    b.render(supports_color, supports_unicode)
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
