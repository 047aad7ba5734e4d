//! Comma-separated height list parsing
//!
//! Turns user text such as `"4, 2, 0, 3, 2, 5"` into a [`HeightSequence`].
//! Lenient mode mirrors a web form: tokens are read by their integer
//! prefix and anything unusable is dropped. Strict mode rejects the input
//! at the first bad token instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BlocksError, BlocksResult};
use crate::heights::HeightSequence;

/// How unusable tokens are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Drop invalid and negative tokens; fail only if nothing is left.
    #[default]
    Lenient,
    /// Fail on the first invalid or negative token.
    Strict,
}

impl ParseMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Parse a comma-separated list of block heights.
pub fn parse_heights(input: &str, mode: ParseMode) -> BlocksResult<HeightSequence> {
    if input.is_empty() {
        return Err(BlocksError::EmptyInput);
    }
    if input.trim().is_empty() {
        return Err(BlocksError::NoValidHeights);
    }

    let mut heights = Vec::new();
    for (index, raw) in input.split(',').enumerate() {
        let token = raw.trim();
        match mode {
            ParseMode::Lenient => match leading_integer(token) {
                Some(value) if value >= 0 => heights.push(value),
                Some(value) => debug!(index, value, "dropping negative height"),
                None => debug!(index, token, "dropping non-numeric token"),
            },
            ParseMode::Strict => {
                let value = token
                    .parse::<i64>()
                    .map_err(|_| BlocksError::InvalidToken {
                        index,
                        token: token.to_string(),
                    })?;
                if value < 0 {
                    return Err(BlocksError::NegativeHeight { index, value });
                }
                heights.push(value);
            }
        }
    }

    if heights.is_empty() {
        return Err(BlocksError::NoValidHeights);
    }

    HeightSequence::new(heights)
}

/// Integer value of the longest `[+-]?[0-9]+` prefix of `token`.
///
/// Trailing characters are ignored (`"3px"` is 3, `"2.9"` is 2).
fn leading_integer(token: &str) -> Option<i64> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
