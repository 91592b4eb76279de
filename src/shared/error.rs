use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// The Code Insight report framework only looks at zero/non-zero, but the
/// distinct values make failures easier to triage from wrapper scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated (and uploaded when a report ID was supplied)
    Success = 0,
    /// Report options were invalid; an error report was produced instead
    InvalidReportOptions = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidReportOptions => write!(f, "Invalid Report Options (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report artifact: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory exists and you have write permissions")]
    ArtifactWriteError { path: PathBuf, details: String },

    #[error("Failed to create report archive: {path}\nDetails: {details}")]
    ArchiveError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid server configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfiguration { message: String, hint: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Failures at the Code Insight REST boundary.
///
/// Only `Transient` is retried. Everything else fails the run so a report is
/// never built from partial data.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Code Insight request failed ({operation}): {details}")]
    Transient { operation: String, details: String },

    #[error("Code Insight rejected the authorization token ({operation}): HTTP {status}\n\n💡 Hint: Check that the token is valid and has access to the project")]
    Unauthorized { operation: String, status: u16 },

    #[error("Code Insight returned HTTP {status} ({operation}): {details}")]
    Rejected {
        operation: String,
        status: u16,
        details: String,
    },

    #[error("Unexpected response from Code Insight ({operation}): {details}")]
    Decode { operation: String, details: String },
}

impl RemoteError {
    pub fn is_transient(&self) -> bool {
        matches!(self, RemoteError::Transient { .. })
    }

    /// Classifies an HTTP status code into a remote error.
    /// 429 and 5xx are worth retrying, 401/403 mean the token is bad.
    pub fn from_status(operation: &str, status: u16, details: String) -> Self {
        match status {
            401 | 403 => RemoteError::Unauthorized {
                operation: operation.to_string(),
                status,
            },
            429 | 500..=599 => RemoteError::Transient {
                operation: operation.to_string(),
                details: format!("HTTP {}: {}", status, details),
            },
            _ => RemoteError::Rejected {
                operation: operation.to_string(),
                status,
                details,
            },
        }
    }
}
