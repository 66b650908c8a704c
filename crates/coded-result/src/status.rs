//! Two-variant view of an outcome, for `match`-based branching.

use serde::{Deserialize, Serialize};

/// Whether an outcome succeeded, and with which code it failed if not.
///
/// Obtained from [`CodedResult::status`](crate::CodedResult::status). A
/// success carries no code, so a failure code can only be read from a result
/// that actually failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status<C> {
    /// The operation succeeded.
    Success,
    /// The operation failed with the given code.
    Failure(C),
}

impl<C> Status<C> {
    /// Returns `true` if the status is `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if the status is `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failure(_))
    }

    /// Returns the failure code, or `None` for a success.
    pub fn failure_code(self) -> Option<C> {
        match self {
            Status::Success => None,
            Status::Failure(code) => Some(code),
        }
    }
}
