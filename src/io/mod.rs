//! Input/output: command line, option files, matrices, images and errors

/// Command-line parsing and viewer dispatch
pub mod cli;
/// Display constants and default paths
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// PNG export
pub mod image;
/// Whitespace-delimited matrix files
pub mod matrix;
/// Simulator XML option file
pub mod options;
/// Terminal progress display
pub mod progress;
