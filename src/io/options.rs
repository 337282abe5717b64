//! Simulator option file reader for the grow-season overview
//!
//! Only two direct children of the root element are consulted:
//! `heightIncr` (metres between simulated heights) and `outputPath`
//! (directory the simulator wrote its results to). Every other key the
//! simulator understands is ignored here.

use crate::io::configuration::{
    FIRST_HEIGHT_MULTIPLE, GROW_SEASON_SUBDIR, HEIGHT_INCR_KEY, METRES_TO_CENTIMETRES,
    OUTPUT_PATH_KEY,
};
use crate::io::error::{Result, config_read};
use std::path::{Path, PathBuf};

/// Options required to locate the grow-season averages
#[derive(Debug, Clone, PartialEq)]
pub struct GrowSeasonOptions {
    /// Height step between two simulated planes, in metres
    pub height_incr: f64,
    /// Simulator output directory
    pub output_path: PathBuf,
}

impl GrowSeasonOptions {
    /// Read options from an XML file
    ///
    /// # Errors
    ///
    /// Returns [`crate::VisError::ConfigRead`] if the file is missing, the
    /// XML is malformed, or a required field is absent or invalid
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| config_read(path, &e))?;
        Self::from_xml(&text, path)
    }

    /// Parse options from XML text; `origin` is only used in error messages
    ///
    /// # Errors
    ///
    /// Returns [`crate::VisError::ConfigRead`] if the XML is malformed or a
    /// required field is absent or invalid
    pub fn from_xml(text: &str, origin: &Path) -> Result<Self> {
        let doc = roxmltree::Document::parse(text).map_err(|e| config_read(origin, &e))?;
        let root = doc.root_element();

        let field = |key: &str| -> Result<String> {
            let node = root
                .children()
                .find(|n| n.has_tag_name(key))
                .ok_or_else(|| config_read(origin, &format!("missing <{key}> element")))?;
            let value = node.text().unwrap_or_default().trim();
            if value.is_empty() {
                return Err(config_read(origin, &format!("<{key}> is empty")));
            }
            Ok(value.to_string())
        };

        let raw_incr = field(HEIGHT_INCR_KEY)?;
        let output_path = PathBuf::from(field(OUTPUT_PATH_KEY)?);

        let height_incr = raw_incr.parse::<f64>().ok().ok_or_else(|| {
            config_read(
                origin,
                &format!("<{HEIGHT_INCR_KEY}> value '{raw_incr}' is not a number"),
            )
        })?;
        if !height_incr.is_finite() || height_incr <= 0.0 {
            return Err(config_read(
                origin,
                &format!("<{HEIGHT_INCR_KEY}> must be a positive finite number, got {raw_incr}"),
            ));
        }

        Ok(Self {
            height_incr,
            output_path,
        })
    }

    /// Height of panel `step` in centimetres
    pub fn height_cm(&self, step: usize) -> f64 {
        self.height_incr * (step + FIRST_HEIGHT_MULTIPLE) as f64 * METRES_TO_CENTIMETRES
    }

    /// File name the simulator uses for panel `step`, e.g. `height_20.txt`
    pub fn panel_file_name(&self, step: usize) -> String {
        format!("height_{:.0}.txt", self.height_cm(step))
    }

    /// Full path of the matrix shown in panel `step`
    pub fn panel_path(&self, step: usize) -> PathBuf {
        self.output_path
            .join(GROW_SEASON_SUBDIR)
            .join(self.panel_file_name(step))
    }

    /// Title drawn above panel `step`, e.g. `height:  20cm`
    pub fn panel_title(&self, step: usize) -> String {
        format!("height: {:3.0}cm", self.height_cm(step))
    }
}
