//! Trapped rainwater calculation.
//!
//! Water above a column can rise no higher than the shorter of the tallest
//! wall on its left and the tallest wall on its right. Both running maxima
//! are precomputed so every column is resolved in a single pass.

use serde::Serialize;

/// Outcome of [`compute`] for one height sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterResult {
    /// Total trapped volume across all columns.
    pub total: u64,
    /// Water surface height per column; never below the column itself.
    pub water_levels: Vec<i64>,
}

impl WaterResult {
    pub fn len(&self) -> usize {
        self.water_levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.water_levels.is_empty()
    }

    /// Highest water surface, or `None` for an empty sequence.
    pub fn max_level(&self) -> Option<i64> {
        self.water_levels.iter().copied().max()
    }

    /// Depth of water resting on each column.
    ///
    /// `heights` must be the sequence this result was computed from.
    pub fn depths<'a>(&'a self, heights: &'a [i64]) -> impl Iterator<Item = u64> + 'a {
        self.water_levels
            .iter()
            .zip(heights)
            .map(|(&level, &height)| trapped_above(level, height))
    }
}

/// Compute the trapped volume and per-column water levels.
///
/// Negative heights are not rejected here; the result stays mathematically
/// consistent but has no physical meaning. Sequences shorter than two
/// columns trap nothing and their levels equal the input.
pub fn compute(heights: &[i64]) -> WaterResult {
    let n = heights.len();
    if n < 2 {
        return WaterResult {
            total: 0,
            water_levels: heights.to_vec(),
        };
    }

    let mut left_max = vec![0i64; n];
    let mut right_max = vec![0i64; n];

    left_max[0] = heights[0];
    for i in 1..n {
        left_max[i] = left_max[i - 1].max(heights[i]);
    }

    right_max[n - 1] = heights[n - 1];
    for i in (0..n - 1).rev() {
        right_max[i] = right_max[i + 1].max(heights[i]);
    }

    let water_levels: Vec<i64> = left_max
        .iter()
        .zip(&right_max)
        .map(|(&l, &r)| l.min(r))
        .collect();

    let total = water_levels
        .iter()
        .zip(heights)
        .fold(0u64, |acc, (&level, &height)| {
            acc.saturating_add(trapped_above(level, height))
        });

    WaterResult {
        total,
        water_levels,
    }
}

fn trapped_above(level: i64, height: i64) -> u64 {
    if level > height {
        level.abs_diff(height)
    } else {
        0
    }
}
