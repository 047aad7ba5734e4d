use std::path::Path;

use waterblocks::render::summary_line;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One-line confirmation after an SVG file is written.
pub fn render_written(path: &Path, total: u64, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Wrote {} ({})\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::plain(path.display().to_string())
            .bold()
            .render(supports_color),
        summary_line(total)
    )
}
