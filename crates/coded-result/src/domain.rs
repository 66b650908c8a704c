//! The error-domain contract.
//!
//! An error domain describes one error space: its code type, which code means
//! success, which code a result carries when none is given, and how codes read
//! as text. Every [`CodedResult`](crate::CodedResult) is parameterized over a
//! domain.

use std::borrow::Cow;
use std::fmt;

/// Describes the codes of one error domain.
///
/// Implementors are usually zero-sized marker types; the codes themselves live
/// in [`ErrorDomain::Code`], typically a fieldless enum.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use coded_result::ErrorDomain;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum StorageCode {
///     Ok = 0,
///     NotFound = 1,
///     IoError = 2,
/// }
///
/// pub struct Storage;
///
/// impl ErrorDomain for Storage {
///     type Code = StorageCode;
///
///     const SUCCESS: StorageCode = StorageCode::Ok;
///     const DEFAULT_ERROR: StorageCode = StorageCode::IoError;
///
///     fn code_to_string(code: StorageCode) -> Cow<'static, str> {
///         match code {
///             StorageCode::Ok => "ok".into(),
///             StorageCode::NotFound => "not found".into(),
///             StorageCode::IoError => "i/o error".into(),
///         }
///     }
///
///     fn code_value(code: StorageCode) -> i64 {
///         code as i64
///     }
/// }
///
/// assert_eq!(Storage::code_to_string(Storage::SUCCESS), "ok");
/// assert_eq!(Storage::code_value(StorageCode::NotFound), 1);
/// ```
pub trait ErrorDomain: 'static {
    /// The code type. One value is [`Self::SUCCESS`]; every other value is a
    /// failure.
    type Code: Copy + Eq + fmt::Debug + Send + Sync + 'static;

    /// The code meaning "the operation succeeded".
    const SUCCESS: Self::Code;

    /// The code a result carries when constructed without one.
    const DEFAULT_ERROR: Self::Code;

    /// Human-readable description of `code`.
    ///
    /// Must be total: every code the domain can produce has a description.
    fn code_to_string(code: Self::Code) -> Cow<'static, str>;

    /// Integer value of `code`, as shown by [`CodedResult::format`](crate::CodedResult::format).
    fn code_value(code: Self::Code) -> i64;

    /// Inverse of [`Self::code_value`].
    ///
    /// Returns `None` for integers that name no code. The default recognizes
    /// nothing, which makes results of the domain impossible to decode from
    /// their integer form.
    fn code_from_value(value: i64) -> Option<Self::Code> {
        let _ = value;
        None
    }

    /// Label for the domain in logs, `Debug` output and errors.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}
