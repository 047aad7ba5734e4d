//! SVG rendering of blocks and trapped water.
//!
//! Heights are scaled so the highest water surface fills `max_height`. Each
//! column gets a block rect; columns holding water get a second rect on top,
//! distorted by a looping turbulence filter.

use crate::calculator::WaterResult;
use crate::render::summary_line;

const BLOCK_FILL: &str = "#334155";
const WATER_FILL: &str = "#38bdf8";
const ARIA_LABEL: &str = "Visualization of blocks and trapped water";

/// Geometry of the drawing, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgLayout {
    pub block_width: u32,
    pub gap: u32,
    pub padding: u32,
    pub max_height: u32,
}

impl Default for SvgLayout {
    fn default() -> Self {
        Self {
            block_width: 50,
            gap: 10,
            padding: 20,
            max_height: 300,
        }
    }
}

impl SvgLayout {
    /// Canvas `(width, height)` for `columns` blocks.
    pub fn canvas_size(&self, columns: usize) -> (u64, u64) {
        let padding = 2 * u64::from(self.padding);
        let width = if columns == 0 {
            padding
        } else {
            let columns = columns as u64;
            let step = u64::from(self.block_width) + u64::from(self.gap);
            (columns.saturating_mul(step) - u64::from(self.gap)).saturating_add(padding)
        };
        (width, u64::from(self.max_height) + padding)
    }
}

/// Render `heights` and their computed `result` as an SVG document.
pub fn render_svg(heights: &[i64], result: &WaterResult, layout: &SvgLayout) -> String {
    let (width, height) = layout.canvas_size(heights.len());
    let max_height = f64::from(layout.max_height);
    let top = result.max_level().unwrap_or(0).max(1);
    let scale_y = max_height / top as f64;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" role=\"img\" aria-label=\"{label}\">\n",
        w = width,
        h = height,
        label = ARIA_LABEL,
    ));
    out.push_str(&format!("  <title>{}</title>\n", summary_line(result.total)));
    out.push_str(WAVE_FILTER);
    out.push_str(&format!(
        "  <g transform=\"translate({p}, {p})\">\n",
        p = layout.padding
    ));

    let step = f64::from(layout.block_width) + f64::from(layout.gap);
    for (i, (&column, &level)) in heights.iter().zip(&result.water_levels).enumerate() {
        let column = column.max(0) as f64;
        let level = level.max(0) as f64;
        let x = i as f64 * step;

        let block_height = column * scale_y;
        out.push_str(&rect(
            "block",
            x,
            max_height - block_height,
            layout.block_width,
            block_height,
            BLOCK_FILL,
        ));

        if level > column {
            out.push_str(&rect(
                "water",
                x,
                max_height - level * scale_y,
                layout.block_width,
                (level - column) * scale_y,
                WATER_FILL,
            ));
        }
    }

    out.push_str("  </g>\n");
    out.push_str("</svg>\n");
    out
}

const WAVE_FILTER: &str = r#"  <defs>
    <filter id="wave-filter" x="-20%" y="-20%" width="140%" height="140%">
      <feTurbulence baseFrequency="0.02 0.05" numOctaves="1" seed="2" stitchTiles="stitch" type="fractalNoise"/>
      <feDisplacementMap in="SourceGraphic" scale="8" xChannelSelector="R" yChannelSelector="G"/>
      <animate attributeName="baseFrequency" dur="6s" keyTimes="0;0.5;1" repeatCount="indefinite" values="0.02 0.05;0.03 0.06;0.02 0.05"/>
    </filter>
  </defs>
"#;

fn rect(class: &str, x: f64, y: f64, width: u32, height: f64, fill: &str) -> String {
    let extra = if class == "water" {
        " fill-opacity=\"0.8\" filter=\"url(#wave-filter)\""
    } else {
        ""
    };
    format!(
        "    <rect class=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"2\" fill=\"{}\"{}/>\n",
        class,
        number(x),
        number(y),
        width,
        number(height),
        fill,
        extra
    )
}

/// At most two decimals, trailing zeros stripped.
fn number(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
