//! Single heatmap of one sun collector matrix on the continuous jet scale

use crate::io::configuration::{
    DEFAULT_SUN_COLLECTOR_OUTPUT, DEFAULT_SUN_COLLECTOR_PATH, FIGURE_DPI,
    SUN_COLLECTOR_FIGURE_INCHES, SUN_COLLECTOR_VMAX, SUN_COLLECTOR_VMIN,
};
use crate::io::error::Result;
use crate::io::matrix::FieldSource;
use crate::render::colormap::ContinuousScale;
use crate::render::figure::Figure;
use std::path::PathBuf;

/// Renders one field with a colour bar clamped to `[vmin, vmax]`
#[derive(Debug, Clone)]
pub struct SinglePanelViewer {
    /// Matrix to show
    pub input: PathBuf,
    /// Where the PNG is written
    pub output: PathBuf,
    /// Value mapped to the bottom of the colour bar
    pub vmin: f64,
    /// Value mapped to the top of the colour bar
    pub vmax: f64,
    /// Draw tick labels
    pub labels: bool,
}

impl Default for SinglePanelViewer {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SUN_COLLECTOR_PATH),
            output: PathBuf::from(DEFAULT_SUN_COLLECTOR_OUTPUT),
            vmin: SUN_COLLECTOR_VMIN,
            vmax: SUN_COLLECTOR_VMAX,
            labels: true,
        }
    }
}

impl SinglePanelViewer {
    /// Load the input and compose the figure without writing it
    ///
    /// # Errors
    ///
    /// Returns an error if the colour range is invalid or the input cannot
    /// be loaded
    pub fn figure(&self, source: &mut impl FieldSource) -> Result<Figure<ContinuousScale>> {
        let scale = ContinuousScale::jet(self.vmin, self.vmax)?;
        let field = source.load(&self.input)?;

        let mut figure = Figure::new(SUN_COLLECTOR_FIGURE_INCHES, FIGURE_DPI, (1, 1), scale)?
            .with_labels(self.labels);
        let panel = figure.panel(&field);
        figure.add_panel(panel)?;
        Ok(figure)
    }

    /// Load, render and save; returns the path written
    ///
    /// # Errors
    ///
    /// Returns an error if loading, rendering or saving fails
    pub fn run(&self, source: &mut impl FieldSource) -> Result<PathBuf> {
        let figure = self.figure(source)?;
        figure.save(&self.output)?;
        Ok(self.output.clone())
    }
}
