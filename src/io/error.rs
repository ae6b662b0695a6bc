//! Error types for maze generation, path walking and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all labyrinth operations
#[derive(Debug)]
pub enum MazeError {
    /// A generation step broke one of its own guarantees
    ///
    /// Never caused by caller input; indicates a bug in a builder.
    InvariantViolation {
        /// Name of the operation that detected the violation
        operation: &'static str,
        /// Description of what went wrong
        reason: String,
    },

    /// A path character outside the `N`, `S`, `E`, `W` alphabet
    InvalidDirection {
        /// The offending character
        symbol: char,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a rendered maze
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Internal invariant violated in {operation}: {reason}")
            }
            Self::InvalidDirection { symbol } => {
                write!(f, "Invalid direction '{symbol}' (expected one of N, S, E, W)")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for labyrinth results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> MazeError {
    MazeError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
