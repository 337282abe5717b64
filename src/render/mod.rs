//! Turning scalar fields into pixels

/// Continuous and zoned colour scales
pub mod colormap;
/// Panel grid composition with gridlines, labels and colour bar
pub mod figure;
/// Label font registration
pub mod fonts;
/// Field to raster conversion in display orientation
pub mod raster;
/// Axis tick placement and formatting
pub mod ticks;
