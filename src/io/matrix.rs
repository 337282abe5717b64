//! Whitespace-delimited text matrices as written by the shadow simulator
//!
//! Rows are lines and columns are separated by any run of whitespace.
//! Blank lines and `#` comments are ignored. Every row must carry the same
//! number of values.

use crate::io::error::{Result, WithPath, data_load};
use ndarray::Array2;
use std::path::Path;

/// Reason a matrix text could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixParseError {
    /// The text holds no numeric rows
    Empty,
    /// A row has a different number of values than the first row
    Ragged {
        /// 1-based line number
        line: usize,
        /// Values found on that line
        found: usize,
        /// Values found on the first row
        expected: usize,
    },
    /// A token is not a floating-point number
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// 1-based column within the row
        column: usize,
        /// The offending token
        token: String,
    },
}

impl std::fmt::Display for MatrixParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no numeric rows found"),
            Self::Ragged {
                line,
                found,
                expected,
            } => write!(
                f,
                "line {line} has {found} values, expected {expected}"
            ),
            Self::InvalidNumber {
                line,
                column,
                token,
            } => write!(
                f,
                "line {line}, column {column}: '{token}' is not a number"
            ),
        }
    }
}

impl std::error::Error for MatrixParseError {}

/// Parse a text matrix into a 2D array
///
/// # Errors
///
/// Returns an error if the text is empty, a row is ragged or a token is
/// not a floating-point number
pub fn parse_matrix(text: &str) -> std::result::Result<Array2<f64>, MatrixParseError> {
    let mut values = Vec::new();
    let mut cols = None;
    let mut rows = 0;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let content = raw_line.split('#').next().unwrap_or_default();

        let before = values.len();
        for (column, token) in content.split_whitespace().enumerate() {
            let value = token
                .parse::<f64>()
                .ok()
                .ok_or_else(|| MatrixParseError::InvalidNumber {
                    line: line_number,
                    column: column + 1,
                    token: token.to_string(),
                })?;
            values.push(value);
        }

        let found = values.len() - before;
        if found == 0 {
            continue;
        }

        match cols {
            None => cols = Some(found),
            Some(expected) if expected != found => {
                return Err(MatrixParseError::Ragged {
                    line: line_number,
                    found,
                    expected,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let cols = cols.ok_or(MatrixParseError::Empty)?;
    // Shape is rows * cols by construction
    Array2::from_shape_vec((rows, cols), values)
        .ok()
        .ok_or(MatrixParseError::Empty)
}

/// Load a text matrix from disk
///
/// # Errors
///
/// Returns [`crate::VisError::DataLoad`] if the file cannot be read or
/// does not hold a rectangular numeric matrix
pub fn load_matrix(path: &Path) -> Result<Array2<f64>> {
    let text = std::fs::read_to_string(path).as_data_load(path)?;
    parse_matrix(&text).map_err(|e| data_load(path, &e))
}

/// Format a matrix the way the simulator writes it: `%6.2f ` per value
pub fn format_matrix(field: &Array2<f64>) -> String {
    field
        .rows()
        .into_iter()
        .map(|row| {
            let mut line: String = row.iter().map(|value| format!("{value:6.2} ")).collect();
            line.push('\n');
            line
        })
        .collect()
}

/// Write a matrix to disk in the simulator's format
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn save_matrix(field: &Array2<f64>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    std::fs::write(path, format_matrix(field)).with_path(path, "write matrix")
}

/// Loads scalar fields by path
pub trait FieldSource {
    /// Load the field stored at `path`
    ///
    /// # Errors
    ///
    /// Returns [`crate::VisError::DataLoad`] if the field cannot be loaded
    fn load(&mut self, path: &Path) -> Result<Array2<f64>>;
}

/// Reads text matrices from the file system
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFieldSource;

impl FieldSource for TextFieldSource {
    fn load(&mut self, path: &Path) -> Result<Array2<f64>> {
        load_matrix(path)
    }
}
