//! Error handling for the application shell.
//!
//! The calculator core has no error channel. Everything around it (config,
//! logging, terminal) reports through [`CalcError`], classified by
//! [`ErrorCategory`] so callers can tell a recoverable startup problem from
//! a fatal one.

mod calc_error;
mod category;

pub use calc_error::CalcError;
pub use category::ErrorCategory;

/// Type alias for Results using CalcError.
pub type CalcResult<T> = Result<T, CalcError>;
