//! Nine-panel overview of the grow-season sun exposure at increasing heights
//!
//! Every field is loaded before anything is drawn, so a missing or
//! malformed input aborts the run without leaving an image behind.

use crate::io::configuration::{
    DEFAULT_GROW_SEASON_OUTPUT, DEFAULT_OPTIONS_PATH, FIGURE_DPI, GRID_COLS, GRID_ROWS,
    GROW_SEASON_FIGURE_INCHES, PANEL_COUNT, PANEL_EXTENT,
};
use crate::io::error::Result;
use crate::io::matrix::FieldSource;
use crate::io::options::GrowSeasonOptions;
use crate::io::progress::ProgressManager;
use crate::render::colormap::ZonedScale;
use crate::render::figure::Figure;
use crate::render::ticks::major_ticks;
use ndarray::Array2;
use std::path::PathBuf;

/// One loaded height plane
#[derive(Debug, Clone)]
pub struct HeightPanel {
    /// Position in the grid, row-major from the top left
    pub step: usize,
    /// Title drawn above the panel
    pub title: String,
    /// File the field was read from
    pub path: PathBuf,
    /// The field as stored on disk
    pub field: Array2<f64>,
}

/// Renders the grow-season overview from the simulator's option file
#[derive(Debug, Clone)]
pub struct GrowSeasonViewer {
    /// XML option file shared with the simulator
    pub options_path: PathBuf,
    /// Where the PNG is written
    pub output: PathBuf,
    /// Draw titles and tick labels
    pub labels: bool,
}

impl Default for GrowSeasonViewer {
    fn default() -> Self {
        Self {
            options_path: PathBuf::from(DEFAULT_OPTIONS_PATH),
            output: PathBuf::from(DEFAULT_GROW_SEASON_OUTPUT),
            labels: true,
        }
    }
}

impl GrowSeasonViewer {
    /// Read the option file
    ///
    /// # Errors
    ///
    /// Returns [`crate::VisError::ConfigRead`] if the file or a field is
    /// missing or malformed
    pub fn options(&self) -> Result<GrowSeasonOptions> {
        GrowSeasonOptions::from_file(&self.options_path)
    }

    /// Load all panel fields in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns [`crate::VisError::DataLoad`] for the first field that
    /// cannot be loaded
    pub fn load_panels(
        options: &GrowSeasonOptions,
        source: &mut impl FieldSource,
        progress: Option<&ProgressManager>,
    ) -> Result<Vec<HeightPanel>> {
        let mut panels = Vec::with_capacity(PANEL_COUNT);

        for step in 0..PANEL_COUNT {
            let path = options.panel_path(step);
            if let Some(pm) = progress {
                pm.start_field(&path);
            }

            let field = source.load(&path)?;

            if let Some(pm) = progress {
                pm.complete_field();
            }
            panels.push(HeightPanel {
                step,
                title: options.panel_title(step),
                path,
                field,
            });
        }

        Ok(panels)
    }

    /// Compose the 3x3 figure from loaded panels
    ///
    /// # Errors
    ///
    /// Returns an error if more panels are given than the grid holds
    pub fn figure(&self, panels: &[HeightPanel]) -> Result<Figure<ZonedScale>> {
        let mut figure = Figure::new(
            GROW_SEASON_FIGURE_INCHES,
            FIGURE_DPI,
            (GRID_ROWS, GRID_COLS),
            ZonedScale::grow_season(),
        )?
        .with_labels(self.labels);

        for height_panel in panels {
            // Fields are drawn transposed: x runs along the stored rows
            let (rows, cols) = height_panel.field.dim();
            let panel = figure
                .panel(&height_panel.field)
                .with_extent(PANEL_EXTENT.0, PANEL_EXTENT.1)
                .with_ticks(major_ticks(rows), major_ticks(cols))
                .with_title(height_panel.title.clone())
                .with_gridlines(true);
            figure.add_panel(panel)?;
        }

        Ok(figure)
    }

    /// Read options, load every field, render and save; returns the path
    /// written
    ///
    /// # Errors
    ///
    /// Returns the first configuration, load, render or export error
    pub fn run(
        &self,
        source: &mut impl FieldSource,
        progress: Option<&ProgressManager>,
    ) -> Result<PathBuf> {
        let options = self.options()?;
        let panels = Self::load_panels(&options, source, progress)?;
        let figure = self.figure(&panels)?;
        figure.save(&self.output)?;
        Ok(self.output.clone())
    }
}
