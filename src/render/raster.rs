//! Scalar field to pixel conversion in display orientation
//!
//! Fields are stored row-major as loaded from disk. For display they are
//! transposed and drawn with the origin in the bottom-left corner, so the
//! first row of the transposed field ends up as the bottom pixel row.

use crate::render::colormap::ColorScale;
use image::{RgbImage, imageops};
use ndarray::{Array2, Axis};

/// Reorder a field into the pixel grid drawn top to bottom
///
/// Pixel `(row, col)` of the result holds field value `(col, n - 1 - row)`
/// where `n` is the number of columns of the field.
pub fn display_grid(field: &Array2<f64>) -> Array2<f64> {
    let mut view = field.t();
    view.invert_axis(Axis(0));
    view.to_owned()
}

/// Rasterize a field with one pixel per cell
pub fn rasterize(field: &Array2<f64>, scale: &dyn ColorScale) -> RgbImage {
    let grid = display_grid(field);
    let (rows, cols) = grid.dim();
    let mut img = RgbImage::new(cols as u32, rows as u32);

    for ((row, col), &value) in grid.indexed_iter() {
        img.put_pixel(col as u32, row as u32, scale.color(value));
    }

    img
}

/// Scale a raster to the target size without interpolating colours
pub fn upscale_nearest(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    if img.width() == width && img.height() == height {
        return img.clone();
    }
    imageops::resize(img, width.max(1), height.max(1), imageops::FilterType::Nearest)
}
