//! Error types and path context for loading, configuration and rendering

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all visualization operations
#[derive(Debug)]
pub enum VisError {
    /// Scalar field file is missing, unreadable or not a numeric matrix
    DataLoad {
        /// Path to the matrix file
        path: PathBuf,
        /// Description of what went wrong
        reason: String,
    },

    /// Option file is missing, malformed or lacks a required field
    ConfigRead {
        /// Path to the XML option file
        path: PathBuf,
        /// Description of what went wrong
        reason: String,
    },

    /// Display parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the rendered figure to disk
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

    /// Drawing backend rejected a figure element
    Render {
        /// Name of the drawing step that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for VisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataLoad { path, reason } => {
                write!(f, "Failed to load data '{}': {reason}", path.display())
            }
            Self::ConfigRead { path, reason } => {
                write!(
                    f,
                    "Failed to read option file '{}': {reason}",
                    path.display()
                )
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
            Self::Render { operation, reason } => {
                write!(f, "Rendering error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for VisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for visualization results
pub type Result<T> = std::result::Result<T, VisError>;

/// Attaches the offending path to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O failure into a file system error for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`VisError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;

    /// Convert an I/O failure into a data load error for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`VisError::DataLoad`]
    fn as_data_load(self, path: &Path) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| VisError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }

    fn as_data_load(self, path: &Path) -> Result<T> {
        self.map_err(|e| data_load(path, &e))
    }
}

/// Create a data load error
pub fn data_load(path: &Path, reason: &impl ToString) -> VisError {
    VisError::DataLoad {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create a configuration read error
pub fn config_read(path: &Path, reason: &impl ToString) -> VisError {
    VisError::ConfigRead {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> VisError {
    VisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a rendering error
pub fn render_error(operation: &'static str, reason: &impl ToString) -> VisError {
    VisError::Render {
        operation,
        reason: reason.to_string(),
    }
}
