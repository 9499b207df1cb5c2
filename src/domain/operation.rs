// ============================================================================
// Operation Tag
// Identifies which engine operation produced an event or error
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Round,
    Compare,
}

impl Operation {
    /// Whether this operation aligns exponents by addition of coefficients.
    #[inline]
    pub const fn is_additive(self) -> bool {
        matches!(self, Operation::Add | Operation::Subtract)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Round => "round",
            Operation::Compare => "compare",
        };
        f.write_str(name)
    }
}
