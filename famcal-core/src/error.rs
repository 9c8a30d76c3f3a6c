//! Error types for famcal.
//!
//! The query engine itself never fails: bad event data degrades to exclusion.
//! These errors only come from strict parsing of caller-supplied input, such as
//! a date typed on the command line.

use thiserror::Error;

/// Errors that can occur when parsing caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FamcalError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown event type '{0}'")]
    UnknownEventType(String),

    #[error("Unknown responsible parent '{0}'")]
    UnknownParent(String),
}

/// Result type alias for famcal operations.
pub type FamcalResult<T> = Result<T, FamcalError>;
