//! Error types for the GIF assembler.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for the assembly task and its settings.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// Path does not exist
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotDirectory(PathBuf),
    /// Path is a directory where a file was expected
    #[error("Is a directory: {0}")]
    IsDirectory(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the assembler.
///
/// Every failure aborts the run; the binary reports it and exits non-zero.
#[derive(Error, Debug, Serialize)]
pub enum AssemblerError {
    /// Task or input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A directory entry could not be decoded as an image
    #[error("Failed to decode '{}': {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// The input directory holds no regular files
    #[error("No frames found in {}", .0.display())]
    EmptyInput(PathBuf),

    /// A frame does not match the dimensions of the first frame
    #[error(
        "Frame '{}' is {}x{}, expected {}x{}",
        .path.display(), .found.0, .found.1, .expected.0, .expected.1
    )]
    DimensionMismatch {
        path: PathBuf,
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// GIF encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// The optimizer executable could not be started
    #[error("Optimizer not available: {}", .0.display())]
    OptimizerUnavailable(PathBuf),

    /// The optimizer ran but reported failure
    #[error("Optimizer failed (exit code {}): {stderr}", .status.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    OptimizerFailed { status: Option<i32>, stderr: String },

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Settings file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for assembler operations.
pub type AssemblerResult<T> = Result<T, AssemblerError>;

// Helper methods for error creation
impl AssemblerError {
    pub fn decode(path: impl Into<PathBuf>, msg: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            message: msg.to_string(),
        }
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotDirectory(path.into()))
    }

    pub fn is_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::IsDirectory(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to AssemblerError
impl From<io::Error> for AssemblerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to AssemblerError
impl From<PathError> for AssemblerError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
