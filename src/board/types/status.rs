//! Check status types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Check state of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckStatus {
    #[default]
    None,
    Check,
    Checkmate,
    Stalemate,
}

impl CheckStatus {
    /// Classify from "king attacked" and the number of legal moves left.
    #[must_use]
    pub const fn from_parts(check: bool, moves_left: usize) -> Self {
        match (check, moves_left) {
            (true, 0) => CheckStatus::Checkmate,
            (false, 0) => CheckStatus::Stalemate,
            (true, _) => CheckStatus::Check,
            (false, _) => CheckStatus::None,
        }
    }

    /// True for checkmate and stalemate
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, CheckStatus::Checkmate | CheckStatus::Stalemate)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckStatus::None => "none",
            CheckStatus::Check => "check",
            CheckStatus::Checkmate => "checkmate",
            CheckStatus::Stalemate => "stalemate",
        };
        f.write_str(label)
    }
}

/// Flag view of a side's status, as consumed by a UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckReport {
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl From<CheckStatus> for CheckReport {
    fn from(status: CheckStatus) -> Self {
        CheckReport {
            check: matches!(status, CheckStatus::Check | CheckStatus::Checkmate),
            checkmate: status == CheckStatus::Checkmate,
            stalemate: status == CheckStatus::Stalemate,
        }
    }
}
