// ============================================================================
// Rounding Direction
// Direction applied when a value falls between two rounding boundaries
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction used by the Round operation.
///
/// Values already on a boundary are never moved. Otherwise `Down` truncates to
/// the boundary at or below the value and `Up` moves to the boundary at or
/// above it (floor and ceiling on the rounding-unit grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingDirection {
    /// Toward positive infinity on the unit grid
    Up,
    /// Toward negative infinity on the unit grid
    #[default]
    Down,
}

impl RoundingDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingDirection::Up => "up",
            RoundingDirection::Down => "down",
        }
    }
}

impl fmt::Display for RoundingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingDirection {
    type Err = NumericError;

    /// Only `"up"` and `"down"` (any case) are accepted. Unknown tags are an
    /// error rather than a silent round-down.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(RoundingDirection::Up),
            "down" => Ok(RoundingDirection::Down),
            _ => Err(NumericError::InvalidInput),
        }
    }
}
