//! Command-line interface for the single-panel and grow-season viewers

use crate::io::configuration::{
    DEFAULT_GROW_SEASON_OUTPUT, DEFAULT_OPTIONS_PATH, DEFAULT_SUN_COLLECTOR_OUTPUT,
    DEFAULT_SUN_COLLECTOR_PATH, PANEL_COUNT, SUN_COLLECTOR_VMAX, SUN_COLLECTOR_VMIN,
};
use crate::io::error::Result;
use crate::io::matrix::TextFieldSource;
use crate::io::progress::ProgressManager;
use crate::render::fonts::ensure_font;
use crate::view::grow_season::GrowSeasonViewer;
use crate::view::single::SinglePanelViewer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sunvis")]
#[command(
    author,
    version,
    about = "Render garden sun-exposure fields as heatmaps"
)]
/// Command-line arguments for the heatmap renderer
pub struct Cli {
    /// Which figure to render
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TrueType font for titles and tick labels
    #[arg(long, global = true, value_name = "TTF")]
    pub font: Option<PathBuf>,
}

/// Figures the tool can render
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Heatmap of a single sun collector matrix on the jet scale
    Quick {
        /// Matrix written by the simulator
        #[arg(short, long, default_value = DEFAULT_SUN_COLLECTOR_PATH)]
        input: PathBuf,

        /// PNG file to write
        #[arg(short, long, default_value = DEFAULT_SUN_COLLECTOR_OUTPUT)]
        output: PathBuf,

        /// Value at the bottom of the colour bar
        #[arg(long, default_value_t = SUN_COLLECTOR_VMIN, allow_negative_numbers = true)]
        vmin: f64,

        /// Value at the top of the colour bar
        #[arg(long, default_value_t = SUN_COLLECTOR_VMAX, allow_negative_numbers = true)]
        vmax: f64,
    },

    /// Nine-panel zoned overview of the grow-season averages
    GrowSeason {
        /// Simulator option file providing heightIncr and outputPath
        #[arg(short = 'c', long = "options", default_value = DEFAULT_OPTIONS_PATH)]
        options: PathBuf,

        /// PNG file to write
        #[arg(short, long, default_value = DEFAULT_GROW_SEASON_OUTPUT)]
        output: PathBuf,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the selected viewer and reports progress
pub struct Processor {
    cli: Cli,
}

impl Processor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render the requested figure; returns the path of the written PNG
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit font cannot be loaded, or if the
    /// viewer fails to read, render or save
    pub fn process(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let labels = self.prepare_labels()?;

        let written = match &self.cli.command {
            Command::Quick {
                input,
                output,
                vmin,
                vmax,
            } => {
                let viewer = SinglePanelViewer {
                    input: input.clone(),
                    output: output.clone(),
                    vmin: *vmin,
                    vmax: *vmax,
                    labels,
                };
                self.status(&format!("Rendering {}", input.display()));
                viewer.run(&mut TextFieldSource)?
            }
            Command::GrowSeason { options, output } => {
                let viewer = GrowSeasonViewer {
                    options_path: options.clone(),
                    output: output.clone(),
                    labels,
                };
                let progress = self
                    .cli
                    .should_show_progress()
                    .then(|| ProgressManager::new(PANEL_COUNT));
                if let Some(pm) = &progress {
                    pm.note(&format!("Using option file {}", options.display()));
                }
                let result = viewer.run(&mut TextFieldSource, progress.as_ref());
                if let Some(pm) = &progress {
                    pm.finish();
                }
                result?
            }
        };

        self.status(&format!(
            "Wrote {} in {:.2}s",
            written.display(),
            start_time.elapsed().as_secs_f64()
        ));
        Ok(written)
    }

    fn prepare_labels(&self) -> Result<bool> {
        let registered = ensure_font(self.cli.font.as_deref())?;
        if registered.is_none() {
            self.status("No TrueType font found, rendering without labels (see --font)");
        }
        Ok(registered.is_some())
    }

    // Allow print for user feedback on progress
    #[allow(clippy::print_stderr)]
    fn status(&self, message: &str) {
        if self.cli.should_show_progress() {
            eprintln!("{message}");
        }
    }
}
