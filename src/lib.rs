//! Heatmap rendering for the output of a garden shadow simulation
//!
//! The simulator writes sun-exposure fields as whitespace-delimited text
//! matrices. This crate loads them, maps values through a continuous or
//! zoned colour scale and writes annotated PNG figures.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Colour scales, rasterization and figure composition
pub mod render;
/// The single-panel and grow-season viewers
pub mod view;

pub use io::error::{Result, VisError};
