//! Presentation of a computed [`WaterResult`](crate::WaterResult).
//!
//! - [`svg`]: standalone SVG document with blocks and water overlay
//! - [`chart`]: plain text bar chart for terminals

pub mod chart;
pub mod svg;

/// Labeled total, as shown under the visualization.
pub fn summary_line(total: u64) -> String {
    format!("Total Water Trapped: {} units", total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_labels_total() {
        insta::assert_snapshot!(summary_line(9), @"Total Water Trapped: 9 units");
    }
}
