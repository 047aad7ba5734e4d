//! Text bar chart of blocks and water.

use crate::calculator::WaterResult;

/// Glyph set for [`render_chart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub unicode: bool,
}

impl ChartStyle {
    pub fn block(&self) -> char {
        if self.unicode {
            '█'
        } else {
            '#'
        }
    }

    pub fn water(&self) -> char {
        if self.unicode {
            '≈'
        } else {
            '~'
        }
    }

    fn baseline(&self) -> char {
        if self.unicode {
            '─'
        } else {
            '-'
        }
    }
}

/// Tallest chart drawn, in rows.
pub const MAX_CHART_ROWS: i64 = 20;

/// One row per unit of height, top row first, then a baseline.
///
/// Columns are two glyphs wide with a one-space gutter. Levels above
/// [`MAX_CHART_ROWS`] are scaled down so each row covers several units.
/// Returns an empty string when nothing rises above zero.
pub fn render_chart(heights: &[i64], result: &WaterResult, style: &ChartStyle) -> String {
    let top = result.max_level().unwrap_or(0);
    if top <= 0 {
        return String::new();
    }
    let rows = top.min(MAX_CHART_ROWS);

    let mut out = String::new();
    for row in (1..=rows).rev() {
        let threshold = row_threshold(row, rows, top);
        let cells: Vec<String> = heights
            .iter()
            .zip(&result.water_levels)
            .map(|(&height, &level)| {
                let glyph = if height >= threshold {
                    style.block()
                } else if level >= threshold {
                    style.water()
                } else {
                    ' '
                };
                glyph.to_string().repeat(2)
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }

    let width = (heights.len() * 3).saturating_sub(1);
    out.push_str(&style.baseline().to_string().repeat(width));
    out.push('\n');
    out
}

/// Smallest value that fills `row` when `top` units span `rows` rows.
///
/// Equals `row` when no scaling is needed.
fn row_threshold(row: i64, rows: i64, top: i64) -> i64 {
    let scaled = (i128::from(row) * i128::from(top) + i128::from(rows) - 1) / i128::from(rows);
    i64::try_from(scaled).unwrap_or(i64::MAX)
}
