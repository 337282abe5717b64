//! Heatmap figures: a grid of panels sharing one colour bar
//!
//! Panel geometry is computed up front in pixel space (`Figure::layout`),
//! then the panels, gridlines, frames, labels and the colour bar are drawn
//! with plotters into an RGB buffer that is finally exported as PNG.

use crate::io::configuration::{COLORBAR_ASPECT, COLORBAR_FRACTION, FONT_FAMILY, FONT_SIZE_PT};
use crate::io::error::{Result, invalid_parameter, render_error};
use crate::io::image::export_png;
use crate::render::colormap::ColorScale;
use crate::render::raster::{rasterize, upscale_nearest};
use crate::render::ticks::{nice_ticks, tick_label, visible_ticks};
use image::{Rgb, RgbImage};
use ndarray::Array2;
use plotters::coord::Shift;
use plotters::prelude::{
    BLACK, BitMapBackend, Color, DrawingArea, IntoDrawingArea, IntoFont, PathElement, RGBColor,
    Rectangle, Text, TextStyle, WHITE,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const POINTS_PER_INCH: f64 = 72.0;
const TICK_LENGTH: i32 = 3;
const AUTO_TICK_TARGET: usize = 5;
const MIN_COLORBAR_THICKNESS: f64 = 6.0;

/// Axis-aligned pixel rectangle, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PixelRect {
    /// First column to the right of the rectangle
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// First row below the rectangle
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// One heatmap panel: a raster plus its axes decoration
#[derive(Debug, Clone)]
pub struct Panel {
    raster: RgbImage,
    extent: (f64, f64),
    x_ticks: Vec<f64>,
    y_ticks: Vec<f64>,
    title: Option<String>,
    gridlines: bool,
}

impl Panel {
    /// Panel showing `field` in cell units with round-number ticks
    pub fn new(field: &Array2<f64>, scale: &dyn ColorScale) -> Self {
        let raster = rasterize(field, scale);
        let extent = (f64::from(raster.width()), f64::from(raster.height()));
        Self {
            x_ticks: nice_ticks(0.0, extent.0, AUTO_TICK_TARGET),
            y_ticks: nice_ticks(0.0, extent.1, AUTO_TICK_TARGET),
            raster,
            extent,
            title: None,
            gridlines: false,
        }
    }

    /// Stretch the raster over a physical extent instead of cell units
    #[must_use]
    pub fn with_extent(mut self, width: f64, height: f64) -> Self {
        self.extent = (width, height);
        self
    }

    /// Replace the tick positions along both axes
    #[must_use]
    pub fn with_ticks(mut self, x_ticks: Vec<f64>, y_ticks: Vec<f64>) -> Self {
        self.x_ticks = x_ticks;
        self.y_ticks = y_ticks;
        self
    }

    /// Set the title drawn above the panel
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Draw white gridlines at the tick positions
    #[must_use]
    pub fn with_gridlines(mut self, enabled: bool) -> Self {
        self.gridlines = enabled;
        self
    }
}

/// Pixel placement of every panel and of the colour bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureLayout {
    /// Image area of each panel, in insertion order
    pub panels: Vec<PixelRect>,
    /// Colour bar strip
    pub colorbar: PixelRect,
}

/// A figure of `rows x cols` panels sharing one colour scale
pub struct Figure<S: ColorScale> {
    width: u32,
    height: u32,
    rows: usize,
    cols: usize,
    font_px: f64,
    scale: S,
    panels: Vec<Panel>,
    labels: bool,
}

impl<S: ColorScale> Figure<S> {
    /// Create an empty figure of `size_inches` at `dpi`
    ///
    /// # Errors
    ///
    /// Returns an error if the size or resolution is not positive, or the
    /// grid has no cells
    pub fn new(size_inches: (f64, f64), dpi: f64, grid: (usize, usize), scale: S) -> Result<Self> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(invalid_parameter("dpi", &dpi, &"must be a positive number"));
        }
        let (width_in, height_in) = size_inches;
        if !(width_in.is_finite() && height_in.is_finite() && width_in > 0.0 && height_in > 0.0) {
            return Err(invalid_parameter(
                "figure size",
                &format!("{width_in}x{height_in}"),
                &"must be positive",
            ));
        }
        let (rows, cols) = grid;
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{rows}x{cols}"),
                &"needs at least one row and one column",
            ));
        }

        Ok(Self {
            width: (width_in * dpi).round() as u32,
            height: (height_in * dpi).round() as u32,
            rows,
            cols,
            font_px: FONT_SIZE_PT * dpi / POINTS_PER_INCH,
            scale,
            panels: Vec::with_capacity(rows * cols),
            labels: true,
        })
    }

    /// Enable or disable titles and tick labels
    #[must_use]
    pub fn with_labels(mut self, enabled: bool) -> Self {
        self.labels = enabled;
        self
    }

    /// Output size in pixels (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Colour scale shared by all panels
    pub const fn scale(&self) -> &S {
        &self.scale
    }

    /// Number of panels added so far
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Rasterize `field` with the figure's scale into a new panel
    pub fn panel(&self, field: &Array2<f64>) -> Panel {
        Panel::new(field, &self.scale)
    }

    /// Append a panel to the next free grid cell (row-major)
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is full or the panel extent is not
    /// positive
    pub fn add_panel(&mut self, panel: Panel) -> Result<()> {
        if self.panels.len() >= self.rows * self.cols {
            return Err(invalid_parameter(
                "panels",
                &(self.panels.len() + 1),
                &format!("grid holds only {}x{} panels", self.rows, self.cols),
            ));
        }
        let (ex, ey) = panel.extent;
        if !(ex.is_finite() && ey.is_finite() && ex > 0.0 && ey > 0.0) {
            return Err(invalid_parameter(
                "extent",
                &format!("{ex}x{ey}"),
                &"must be positive",
            ));
        }
        self.panels.push(panel);
        Ok(())
    }

    /// Compute where panels and colour bar are drawn
    ///
    /// # Errors
    ///
    /// Returns an error if the figure is too small to hold the grid
    pub fn layout(&self) -> Result<FigureLayout> {
        let font = self.font_px;
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let rows = self.rows as f64;
        let cols = self.cols as f64;

        let margin = font;
        let y_label_width = 4.0 * font;
        let x_label_height = 2.0 * font;
        let gap = font;
        let title_height = if self.panels.iter().any(|p| p.title.is_some()) {
            2.0 * font
        } else {
            0.5 * font
        };

        let grid_height = 2.0f64.mul_add(-margin, height) - x_label_height;
        let thickness = (grid_height / COLORBAR_ASPECT).max(MIN_COLORBAR_THICKNESS);
        let colorbar_area =
            (width * COLORBAR_FRACTION).max(4.0f64.mul_add(font, gap + thickness));

        let left = margin + y_label_width;
        let right = width - margin - colorbar_area;
        let top = margin;
        let bottom = top + grid_height;

        if right - left < cols * 4.0 || bottom - top < rows * (title_height + 4.0) {
            return Err(render_error(
                "layout",
                &format!(
                    "{}x{} px is too small for a {}x{} grid",
                    self.width, self.height, self.rows, self.cols
                ),
            ));
        }

        let cell_width = (right - left) / cols;
        let cell_height = (bottom - top) / rows;

        let panels: Vec<PixelRect> = self
            .panels
            .iter()
            .enumerate()
            .map(|(index, panel)| {
                let row = (index / self.cols) as f64;
                let col = (index % self.cols) as f64;
                let gap_left = if col > 0.0 { gap / 2.0 } else { 0.0 };
                let gap_right = if col + 1.0 < cols { gap / 2.0 } else { 0.0 };
                let gap_below = if row + 1.0 < rows { gap } else { 0.0 };

                let box_x = col.mul_add(cell_width, left) + gap_left;
                let box_y = row.mul_add(cell_height, top) + title_height;
                let box_width = cell_width - gap_left - gap_right;
                let box_height = cell_height - title_height - gap_below;

                let (ex, ey) = panel.extent;
                let fit = (box_width / ex).min(box_height / ey);
                let panel_width = (ex * fit).floor().max(1.0);
                let panel_height = (ey * fit).floor().max(1.0);

                PixelRect {
                    x: (box_x + (box_width - panel_width) / 2.0).round() as i32,
                    y: (box_y + (box_height - panel_height) / 2.0).round() as i32,
                    width: panel_width as u32,
                    height: panel_height as u32,
                }
            })
            .collect();

        let bar_top = panels.iter().map(|r| r.y).min().unwrap_or(top as i32);
        let bar_bottom = panels
            .iter()
            .map(PixelRect::bottom)
            .max()
            .unwrap_or(bottom as i32);
        let bar_length = (bar_bottom - bar_top).max(1);
        let bar_thickness =
            (f64::from(bar_length) / COLORBAR_ASPECT).max(MIN_COLORBAR_THICKNESS);

        Ok(FigureLayout {
            panels,
            colorbar: PixelRect {
                x: (right + gap).round() as i32,
                y: bar_top,
                width: bar_thickness.round() as u32,
                height: bar_length as u32,
            },
        })
    }

    /// Draw the figure into an RGB image
    ///
    /// # Errors
    ///
    /// Returns an error if the layout does not fit or the backend rejects
    /// an element, e.g. when labels are enabled but no font is registered
    pub fn render(&self) -> Result<RgbImage> {
        let layout = self.layout()?;
        let mut buffer = vec![0u8; self.width as usize * self.height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(|e| render_error("background", &e))?;

            let count = self.panels.len();
            for (index, (panel, rect)) in self.panels.iter().zip(&layout.panels).enumerate() {
                // Shared axes: only the outer panels carry tick labels
                let left_column = index % self.cols == 0;
                let bottom_of_column = index + self.cols >= count;
                self.draw_panel(&root, panel, *rect, left_column, bottom_of_column)?;
            }

            self.draw_colorbar(&root, layout.colorbar)?;
            root.present().map_err(|e| render_error("present", &e))?;
        }

        RgbImage::from_raw(self.width, self.height, buffer)
            .ok_or_else(|| render_error("export", &"pixel buffer does not match figure size"))
    }

    /// Render and write the figure as PNG
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written
    pub fn save(&self, output_path: &Path) -> Result<()> {
        let img = self.render()?;
        export_png(&img, output_path)
    }

    fn draw_panel(
        &self,
        root: &Area<'_>,
        panel: &Panel,
        rect: PixelRect,
        y_labels: bool,
        x_labels: bool,
    ) -> Result<()> {
        let pixels = upscale_nearest(&panel.raster, rect.width, rect.height);
        for (x, y, pixel) in pixels.enumerate_pixels() {
            let Rgb([r, g, b]) = *pixel;
            root.draw_pixel((rect.x + x as i32, rect.y + y as i32), &RGBColor(r, g, b))
                .map_err(|e| render_error("heatmap", &e))?;
        }

        let (ex, ey) = panel.extent;
        let to_x = |v: f64| rect.x + (v / ex * f64::from(rect.width)).round() as i32;
        let to_y = |v: f64| rect.bottom() - (v / ey * f64::from(rect.height)).round() as i32;
        let x_ticks = visible_ticks(&panel.x_ticks, ex);
        let y_ticks = visible_ticks(&panel.y_ticks, ey);

        if panel.gridlines {
            let style = WHITE.stroke_width(1);
            for &t in &x_ticks {
                let px = to_x(t);
                root.draw(&PathElement::new(vec![(px, rect.y), (px, rect.bottom())], style))
                    .map_err(|e| render_error("gridlines", &e))?;
            }
            for &t in &y_ticks {
                let py = to_y(t);
                root.draw(&PathElement::new(vec![(rect.x, py), (rect.right(), py)], style))
                    .map_err(|e| render_error("gridlines", &e))?;
            }
        }

        root.draw(&Rectangle::new(
            [(rect.x - 1, rect.y - 1), (rect.right(), rect.bottom())],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| render_error("frame", &e))?;

        for &t in &x_ticks {
            let px = to_x(t);
            let tick = vec![(px, rect.bottom()), (px, rect.bottom() + TICK_LENGTH)];
            root.draw(&PathElement::new(tick, BLACK.stroke_width(1)))
                .map_err(|e| render_error("ticks", &e))?;
            if x_labels {
                self.label(
                    root,
                    &tick_label(t),
                    (px, rect.bottom() + TICK_LENGTH + 1),
                    Pos::new(HPos::Center, VPos::Top),
                )?;
            }
        }

        for &t in &y_ticks {
            let py = to_y(t);
            let tick = vec![(rect.x - TICK_LENGTH, py), (rect.x, py)];
            root.draw(&PathElement::new(tick, BLACK.stroke_width(1)))
                .map_err(|e| render_error("ticks", &e))?;
            if y_labels {
                self.label(
                    root,
                    &tick_label(t),
                    (rect.x - TICK_LENGTH - 2, py),
                    Pos::new(HPos::Right, VPos::Center),
                )?;
            }
        }

        if let Some(title) = &panel.title {
            self.label(
                root,
                title,
                (rect.x + rect.width as i32 / 2, rect.y - 3),
                Pos::new(HPos::Center, VPos::Bottom),
            )?;
        }

        Ok(())
    }

    fn draw_colorbar(&self, root: &Area<'_>, rect: PixelRect) -> Result<()> {
        let (lo, hi) = self.scale.range();
        let span = hi - lo;
        let length = f64::from(rect.height);

        // Sample each row at its centre, top row nearest to `hi`
        for y in 0..rect.height {
            let fraction = (length - f64::from(y) - 0.5) / length;
            let Rgb([r, g, b]) = self.scale.color(fraction.mul_add(span, lo));
            let py = rect.y + y as i32;
            root.draw(&PathElement::new(
                vec![(rect.x, py), (rect.right() - 1, py)],
                RGBColor(r, g, b).stroke_width(1),
            ))
            .map_err(|e| render_error("colorbar", &e))?;
        }

        root.draw(&Rectangle::new(
            [(rect.x - 1, rect.y - 1), (rect.right(), rect.bottom())],
            BLACK.stroke_width(1),
        ))
        .map_err(|e| render_error("colorbar", &e))?;

        for t in self.scale.legend_ticks() {
            if !(lo..=hi).contains(&t) {
                continue;
            }
            let py = rect.bottom() - ((t - lo) / span * length).round() as i32;
            let tick = vec![(rect.right(), py), (rect.right() + TICK_LENGTH, py)];
            root.draw(&PathElement::new(tick, BLACK.stroke_width(1)))
                .map_err(|e| render_error("colorbar", &e))?;
            self.label(
                root,
                &tick_label(t),
                (rect.right() + TICK_LENGTH + 2, py),
                Pos::new(HPos::Left, VPos::Center),
            )?;
        }

        Ok(())
    }

    fn label(&self, root: &Area<'_>, text: &str, pos: (i32, i32), anchor: Pos) -> Result<()> {
        if !self.labels {
            return Ok(());
        }
        let style = TextStyle::from((FONT_FAMILY, self.font_px).into_font())
            .color(&BLACK)
            .pos(anchor);
        root.draw(&Text::new(text.to_string(), pos, style))
            .map_err(|e| render_error("label", &e))
    }
}
