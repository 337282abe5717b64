//! PNG export for rendered figures

use crate::io::error::{Result, VisError, WithPath};
use image::RgbImage;
use std::path::Path;

/// Save a rendered figure as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The image has zero width or height
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(img: &RgbImage, output_path: &Path) -> Result<()> {
    if img.width() == 0 || img.height() == 0 {
        return Err(VisError::Render {
            operation: "export",
            reason: "figure has no pixels".to_string(),
        });
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| VisError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
