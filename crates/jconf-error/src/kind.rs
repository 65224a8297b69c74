//! Error kinds for jconf2dot operations

use strum_macros::Display;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Invalid command-line arguments or options
    InvalidArgument,

    // =========================================================================
    // Document errors
    // =========================================================================
    /// The document is not well-formed XML
    ParseFailed,

    /// The document is not valid UTF-8
    EncodingError,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// Two distinct element names sanitize to the same identifier
    IdentifierCollision,
}
