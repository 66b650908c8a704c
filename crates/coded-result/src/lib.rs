#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Coded Result Library
//!
//! Success-or-error-code values with chained diagnostic messages, generic over
//! a caller-supplied error domain.

pub mod domain;
pub mod error;
pub mod failure;
pub mod result;
pub mod status;

mod proptests;
mod wire;

// Re-exports for convenience
pub use domain::ErrorDomain;
pub use error::{Error, Result};
pub use failure::Failure;
pub use result::CodedResult;
pub use status::Status;
