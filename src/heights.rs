//! Validated column heights.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::calculator::{self, WaterResult};
use crate::error::{BlocksError, BlocksResult};

/// Blocks shown when no heights are supplied.
const DEFAULT_BLOCKS: [i64; 6] = [4, 2, 0, 3, 2, 5];

/// Ordered column heights, left to right, all `>= 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeightSequence(Vec<i64>);

impl HeightSequence {
    /// Wrap `heights`, rejecting the first negative value.
    pub fn new(heights: Vec<i64>) -> BlocksResult<Self> {
        if let Some((index, &value)) = heights.iter().enumerate().find(|&(_, &h)| h < 0) {
            return Err(BlocksError::NegativeHeight { index, value });
        }
        Ok(Self(heights))
    }

    pub fn default_blocks() -> Self {
        Self(DEFAULT_BLOCKS.to_vec())
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }

    pub fn compute(&self) -> WaterResult {
        calculator::compute(&self.0)
    }
}

impl Deref for HeightSequence {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl TryFrom<Vec<i64>> for HeightSequence {
    type Error = BlocksError;

    fn try_from(heights: Vec<i64>) -> BlocksResult<Self> {
        Self::new(heights)
    }
}

impl fmt::Display for HeightSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, h) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", h)?;
        }
        Ok(())
    }
}
