//! The coded result type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::domain::ErrorDomain;
use crate::error::{Error, Result};
use crate::failure::Failure;
use crate::status::Status;

/// The outcome of an operation: success, or a failure code of domain `D`,
/// plus a diagnostic message built up by appending.
///
/// Equality compares codes only. Two results with the same code are equal
/// even when their messages differ.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use coded_result::{CodedResult, ErrorDomain};
///
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// # enum Code { Ok = 0, NotFound = 1, IoError = 2 }
/// # struct Storage;
/// # impl ErrorDomain for Storage {
/// #     type Code = Code;
/// #     const SUCCESS: Code = Code::Ok;
/// #     const DEFAULT_ERROR: Code = Code::IoError;
/// #     fn code_to_string(code: Code) -> Cow<'static, str> {
/// #         match code {
/// #             Code::Ok => "ok".into(),
/// #             Code::NotFound => "not found".into(),
/// #             Code::IoError => "i/o error".into(),
/// #         }
/// #     }
/// #     fn code_value(code: Code) -> i64 { code as i64 }
/// # }
/// let mut result = CodedResult::<Storage>::new(Code::NotFound);
/// assert_eq!(result.format(), "Code 1: not found");
///
/// result.append_value("file.txt");
/// assert_eq!(result.format(), "Code 1: not found (file.txt)");
/// ```
pub struct CodedResult<D: ErrorDomain> {
    code: D::Code,
    message: String,
    domain: PhantomData<fn() -> D>,
}

impl<D: ErrorDomain> CodedResult<D> {
    /// The success value of the domain: success code, empty message.
    pub const SUCCESS: Self = Self {
        code: D::SUCCESS,
        message: String::new(),
        domain: PhantomData,
    };

    /// Creates a result holding `code` and an empty message.
    pub fn new(code: D::Code) -> Self {
        Self {
            code,
            message: String::new(),
            domain: PhantomData,
        }
    }

    /// Returns the success value of the domain.
    ///
    /// Every call yields an equal value with an empty message.
    pub fn success() -> Self {
        Self::SUCCESS
    }

    /// Decodes a result from the integer form of its code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCode`] if the domain does not recognize `value`.
    pub fn from_raw_code(value: i64) -> Result<Self> {
        match D::code_from_value(value) {
            Some(code) => Ok(Self::new(code)),
            None => {
                tracing::trace!(domain = D::name(), value, "Rejected unknown code");
                Err(Error::unknown_code(D::name(), value))
            }
        }
    }

    /// Re-codes a result of another domain into this one.
    ///
    /// A failing `input` becomes `failure_code`, with `input.format()` as the
    /// whole message. A succeeding `input` becomes [`ErrorDomain::SUCCESS`].
    pub fn translate<E: ErrorDomain>(input: &CodedResult<E>, failure_code: D::Code) -> Self {
        Self::translate_with(input, failure_code, D::SUCCESS)
    }

    /// Like [`Self::translate`], but a succeeding `input` becomes `success_code`.
    pub fn translate_with<E: ErrorDomain>(
        input: &CodedResult<E>,
        failure_code: D::Code,
        success_code: D::Code,
    ) -> Self {
        if input.is_success() {
            return Self::new(success_code);
        }

        tracing::debug!(
            from = E::name(),
            to = D::name(),
            code = ?failure_code,
            "Translating failure across domains"
        );
        let mut result = Self::new(failure_code);
        result.append_cause(input);
        result
    }

    /// Returns the stored code, whether or not the result is a failure.
    ///
    /// For a success this is [`ErrorDomain::SUCCESS`]. Use
    /// [`Self::error_code`] to get a code only from failures.
    pub fn code(&self) -> D::Code {
        self.code
    }

    /// Returns the failure code, or `None` if the result is a success.
    pub fn error_code(&self) -> Option<D::Code> {
        self.status().failure_code()
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the code is the domain's success code.
    pub fn is_success(&self) -> bool {
        self.code == D::SUCCESS
    }

    /// Returns `true` if the code is anything but the domain's success code.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the outcome as a [`Status`], for `match`-based branching.
    pub fn status(&self) -> Status<D::Code> {
        if self.is_success() {
            Status::Success
        } else {
            Status::Failure(self.code)
        }
    }

    /// Renders the result for humans.
    ///
    /// A success renders as `Success`. A failure renders as
    /// `Code <value>: <description>`, followed by ` (<message>)` when the
    /// message is not empty. Same text as the `Display` impl.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Appends the rendering of `value` to the message, with no separator.
    pub fn append_value<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        self.message.push_str(&value.to_string());
        self
    }

    /// Appends the rendering of another result to the message.
    ///
    /// When the message already has content, `": "` goes in first, so a
    /// sequence of causes reads as a colon-separated trail.
    pub fn append_cause<E: ErrorDomain>(&mut self, cause: &CodedResult<E>) -> &mut Self {
        if !self.message.is_empty() {
            self.message.push_str(": ");
        }
        self.message.push_str(&cause.format());
        self
    }

    /// Converts into a `std::result::Result` so failures propagate with `?`.
    ///
    /// # Errors
    ///
    /// Returns the result wrapped in a [`Failure`] when it is not a success.
    pub fn into_result(self) -> std::result::Result<(), Failure<D>> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Failure::new(self))
        }
    }

    /// Splits the result into its code and message.
    pub fn into_parts(self) -> (D::Code, String) {
        (self.code, self.message)
    }
}

impl<D: ErrorDomain> Default for CodedResult<D> {
    /// A result holding [`ErrorDomain::DEFAULT_ERROR`].
    fn default() -> Self {
        Self::new(D::DEFAULT_ERROR)
    }
}

impl<D: ErrorDomain> Clone for CodedResult<D> {
    fn clone(&self) -> Self {
        Self {
            code: self.code,
            message: self.message.clone(),
            domain: PhantomData,
        }
    }
}

impl<D: ErrorDomain> PartialEq for CodedResult<D> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl<D: ErrorDomain> Eq for CodedResult<D> {}

impl<D> Hash for CodedResult<D>
where
    D: ErrorDomain,
    D::Code: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl<D: ErrorDomain> fmt::Debug for CodedResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodedResult")
            .field("domain", &D::name())
            .field("code", &self.code)
            .field("message", &self.message)
            .finish()
    }
}

impl<D: ErrorDomain> fmt::Display for CodedResult<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return f.write_str("Success");
        }

        write!(
            f,
            "Code {}: {}",
            D::code_value(self.code),
            D::code_to_string(self.code)
        )?;
        if !self.message.is_empty() {
            write!(f, " ({})", self.message)?;
        }
        Ok(())
    }
}

/// `write!` into a result appends to its message, like
/// [`CodedResult::append_value`].
impl<D: ErrorDomain> fmt::Write for CodedResult<D> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.message.push_str(s);
        Ok(())
    }
}
