//! Error types and handling for Sublock
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Sublock operations
#[derive(Error, Diagnostic, Debug)]
pub enum SublockError {
    // Lock file errors
    #[error("Failed to access lock file '{path}': {reason}")]
    #[diagnostic(code(sublock::lock::io_failed))]
    LockFileError { path: String, reason: String },

    #[error("Lock file version {found} is not supported (expected {expected})")]
    #[diagnostic(
        code(sublock::lock::version_mismatch),
        help("Delete the lock file and run 'sublock lock' to regenerate it")
    )]
    LockVersionMismatch { found: u32, expected: u32 },

    #[error("Malformed lock file: {reason}")]
    #[diagnostic(code(sublock::lock::malformed))]
    MalformedLock { reason: String },

    #[error("Lock file is missing")]
    #[diagnostic(
        code(sublock::lock::missing),
        help("Run 'sublock lock' to generate a lock file")
    )]
    LockFileMissing,

    // Wrap declaration errors
    #[error("Failed to read wrap file '{path}': {reason}")]
    #[diagnostic(code(sublock::wrap::read_failed))]
    WrapReadFailed { path: String, reason: String },

    #[error("Failed to parse wrap file '{path}': {reason}")]
    #[diagnostic(
        code(sublock::wrap::parse_failed),
        help("A wrap file needs one leading [wrap-git], [wrap-file], [wrap-hg] or [wrap-svn] section")
    )]
    WrapParseFailed { path: String, reason: String },

    // Lookup errors
    #[error("Subproject '{name}' is not locked")]
    #[diagnostic(
        code(sublock::subproject::not_found),
        help("Check the name against 'sublock show' and run 'sublock lock' to lock new subprojects")
    )]
    SubprojectNotFound { name: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(sublock::fs::io_error))]
    IoError { message: String },
}

/// Creates a lock file I/O error
pub fn lock_io_failed(path: impl Into<String>, reason: impl Into<String>) -> SublockError {
    SublockError::LockFileError {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed-lock error for a whole file
pub fn malformed_lock(reason: impl Into<String>) -> SublockError {
    SublockError::MalformedLock {
        reason: reason.into(),
    }
}

/// Creates a malformed-lock error naming the offending subproject
pub fn malformed_lock_entry(name: &str, reason: impl Into<String>) -> SublockError {
    SublockError::MalformedLock {
        reason: format!("subproject '{}': {}", name, reason.into()),
    }
}

/// Creates a wrap parse error
pub fn wrap_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SublockError {
    SublockError::WrapParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

impl From<std::io::Error> for SublockError {
    fn from(err: std::io::Error) -> Self {
        SublockError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SublockError>;
