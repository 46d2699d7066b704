//! Error types for the simetra library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`SimetraError`]. The metric functions themselves are total — any pair of
//! strings produces a defined numeric result — so errors only arise from
//! invalid arguments to the matcher.
//!
//! # Examples
//!
//! ```
//! use simetra::error::{Result, SimetraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SimetraError::invalid_argument("candidates must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use thiserror::Error;

/// The main error type for simetra operations.
///
/// Invalid arguments are programming errors at the call site, not transient
/// conditions; retrying the same call cannot change the outcome.
#[derive(Error, Debug)]
pub enum SimetraError {
    /// A caller-supplied argument is invalid (empty candidate list,
    /// out-of-range threshold).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with [`SimetraError`].
pub type Result<T> = std::result::Result<T, SimetraError>;

impl SimetraError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SimetraError::InvalidArgument(msg.into())
    }
}
