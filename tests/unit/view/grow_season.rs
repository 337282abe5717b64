//! Tests for the nine-panel grow-season overview
//!
//! Fixtures write an option file and the nine height matrices into a
//! temporary simulator output directory.

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use std::fs;
    use std::path::{Path, PathBuf};
    use sunvis::VisError;
    use sunvis::io::matrix::{FieldSource, TextFieldSource, save_matrix};
    use sunvis::io::options::GrowSeasonOptions;
    use sunvis::io::progress::ProgressManager;
    use sunvis::view::grow_season::GrowSeasonViewer;
    use tempfile::TempDir;

    /// Records requested paths and hands out constant fields
    #[derive(Default)]
    struct CountingSource {
        loads: Vec<PathBuf>,
    }

    impl FieldSource for CountingSource {
        fn load(&mut self, path: &Path) -> sunvis::Result<Array2<f64>> {
            self.loads.push(path.to_path_buf());
            Ok(Array2::from_elem((26, 77), 3.0))
        }
    }

    fn write_options(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("options.xml");
        fs::write(&path, format!("<options>{body}</options>")).unwrap();
        path
    }

    fn simulator_output(dir: &Path) -> (PathBuf, GrowSeasonOptions) {
        let results = dir.join("results");
        let options_path = write_options(
            dir,
            &format!(
                "<heightIncr>0.1</heightIncr><outputPath>{}</outputPath>",
                results.display()
            ),
        );
        let options = GrowSeasonOptions {
            height_incr: 0.1,
            output_path: results,
        };
        for step in 0..9 {
            let field = Array2::from_shape_fn((26, 77), |(i, j)| ((i + j + step) % 12) as f64);
            save_matrix(&field, &options.panel_path(step)).unwrap();
        }
        (options_path, options)
    }

    fn viewer(options_path: PathBuf, output: PathBuf) -> GrowSeasonViewer {
        GrowSeasonViewer {
            options_path,
            output,
            labels: false,
        }
    }

    // Tests a complete simulator output renders one 400x800 overview
    // Verified by skipping the save
    #[test]
    fn test_run_writes_overview() {
        let temp_dir = TempDir::new().unwrap();
        let (options_path, _) = simulator_output(temp_dir.path());
        let output = temp_dir.path().join("overview_grow_season_zoned.png");

        let written = viewer(options_path, output.clone())
            .run(&mut TextFieldSource, None)
            .unwrap();

        assert_eq!(written, output);
        let img = image::open(&output).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (400, 800));
    }

    // Tests a missing last height aborts without writing an image
    // Verified by rendering the panels that did load
    #[test]
    fn test_missing_height_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let (options_path, options) = simulator_output(temp_dir.path());
        let missing = options.panel_path(8);
        fs::remove_file(&missing).unwrap();
        let output = temp_dir.path().join("overview.png");

        let err = viewer(options_path, output.clone())
            .run(&mut TextFieldSource, None)
            .unwrap_err();

        match err {
            VisError::DataLoad { path, .. } => {
                assert_eq!(path, missing);
                assert!(path.ends_with("growseason/height_100.txt"));
            }
            other => unreachable!("Expected DataLoad, got {other:?}"),
        }
        assert!(!output.exists());
    }

    // Tests a missing outputPath fails before any field is requested
    // Verified by loading fields relative to the working directory
    #[test]
    fn test_missing_output_path_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let options_path = write_options(temp_dir.path(), "<heightIncr>0.1</heightIncr>");
        let output = temp_dir.path().join("overview.png");
        let mut source = CountingSource::default();

        let err = viewer(options_path, output.clone())
            .run(&mut source, None)
            .unwrap_err();

        assert!(matches!(err, VisError::ConfigRead { .. }));
        assert!(source.loads.is_empty());
        assert!(!output.exists());
    }

    // Tests fields are requested from the lowest to the highest plane
    // Verified by iterating heights in reverse
    #[test]
    fn test_load_order_and_titles() {
        let options = GrowSeasonOptions {
            height_incr: 0.1,
            output_path: PathBuf::from("results"),
        };
        let mut source = CountingSource::default();
        let progress = ProgressManager::new(9);

        let panels =
            GrowSeasonViewer::load_panels(&options, &mut source, Some(&progress)).unwrap();

        assert_eq!(progress.position(), 9);
        assert_eq!(source.loads.len(), 9);
        let names: Vec<String> = source
            .loads
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("height_20.txt"));
        assert_eq!(names.last().map(String::as_str), Some("height_100.txt"));
        assert!(source.loads.iter().all(|p| p.starts_with("results/growseason")));

        assert_eq!(panels[0].title, "height:  20cm");
        assert_eq!(panels[8].title, "height: 100cm");
        assert_eq!(panels[4].step, 4);
        assert_eq!(panels[4].path, source.loads[4]);
    }

    // Tests the figure holds nine panels on the physical garden extent
    // Verified by keeping cell units
    #[test]
    fn test_figure_panels() {
        let options = GrowSeasonOptions {
            height_incr: 0.1,
            output_path: PathBuf::from("results"),
        };
        let panels =
            GrowSeasonViewer::load_panels(&options, &mut CountingSource::default(), None).unwrap();

        let figure = viewer(PathBuf::new(), PathBuf::new()).figure(&panels).unwrap();

        assert_eq!(figure.panel_count(), 9);
        assert_eq!(figure.dimensions(), (400, 800));
    }

    // Tests a missing option file is a configuration error
    // Verified by falling back to defaults
    #[test]
    fn test_missing_option_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut source = CountingSource::default();

        let err = viewer(temp_dir.path().join("options.xml"), temp_dir.path().join("o.png"))
            .run(&mut source, None)
            .unwrap_err();

        assert!(matches!(err, VisError::ConfigRead { .. }));
        assert!(source.loads.is_empty());
    }

    // Tests the default viewer points at the simulator layout
    // Verified by changing the default option path
    #[test]
    fn test_default_viewer() {
        let viewer = GrowSeasonViewer::default();
        assert_eq!(viewer.options_path, PathBuf::from("../input/options.xml"));
        assert_eq!(viewer.output, PathBuf::from("overview_grow_season_zoned.png"));
        assert!(viewer.labels);
    }
}
