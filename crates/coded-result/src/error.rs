//! Error types for the coded-result library.

/// Errors raised by the library's own fallible operations.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An integer did not name any code of the domain.
    #[error("unknown {domain} code: {value}")]
    UnknownCode {
        /// Name of the domain that rejected the value
        domain: &'static str,
        /// The rejected integer
        value: i64,
    },
}

/// Convenience `Result` type alias for coded-result operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an unknown-code error.
    pub fn unknown_code(domain: &'static str, value: i64) -> Self {
        Error::UnknownCode { domain, value }
    }
}
