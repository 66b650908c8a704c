//! Failing results lifted into `std::error::Error`.

use std::fmt;

use crate::domain::ErrorDomain;
use crate::result::CodedResult;

/// A [`CodedResult`] known to be a failure.
///
/// Produced by [`CodedResult::into_result`]. Implements
/// [`std::error::Error`], so it travels through `?`, `Box<dyn Error>` and
/// `anyhow`-style wrappers. Displays as [`CodedResult::format`].
#[derive(thiserror::Error)]
#[error("{result}")]
pub struct Failure<D: ErrorDomain> {
    result: CodedResult<D>,
}

impl<D: ErrorDomain> Failure<D> {
    pub(crate) fn new(result: CodedResult<D>) -> Self {
        debug_assert!(result.is_failure());
        Self { result }
    }

    /// Returns the failure code.
    pub fn code(&self) -> D::Code {
        self.result.code()
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        self.result.message()
    }

    /// Returns the wrapped result.
    pub fn result(&self) -> &CodedResult<D> {
        &self.result
    }

    /// Unwraps into the failing result.
    pub fn into_inner(self) -> CodedResult<D> {
        self.result
    }
}

impl<D: ErrorDomain> Clone for Failure<D> {
    fn clone(&self) -> Self {
        Self {
            result: self.result.clone(),
        }
    }
}

impl<D: ErrorDomain> PartialEq for Failure<D> {
    fn eq(&self, other: &Self) -> bool {
        self.result == other.result
    }
}

impl<D: ErrorDomain> Eq for Failure<D> {}

impl<D: ErrorDomain> fmt::Debug for Failure<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.result).finish()
    }
}

impl<D: ErrorDomain> From<Failure<D>> for CodedResult<D> {
    fn from(failure: Failure<D>) -> Self {
        failure.into_inner()
    }
}
