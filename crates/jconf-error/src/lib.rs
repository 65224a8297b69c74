//! # jconf-error
//!
//! Unified error handling for jconf2dot.
//!
//! - **ErrorKind**: what went wrong (e.g. `ParseFailed`, `FileNotFound`)
//! - **Error context**: which document, which operation
//! - **Error source**: the wrapped io or xml error, if any
//!
//! ## Usage
//!
//! ```rust
//! use jconf_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "unexpected end of stream")
//!         .with_operation("document::load")
//!         .with_context("path", "standalone.jconf"))
//! }
//! ```
//!
//! Every failure is fatal for the run: there is no retry and no partial output.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the jconf Error
pub type Result<T> = std::result::Result<T, Error>;
