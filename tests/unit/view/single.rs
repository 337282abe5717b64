//! Tests for the single-panel sun collector viewer

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use std::path::{Path, PathBuf};
    use sunvis::VisError;
    use sunvis::io::matrix::{FieldSource, TextFieldSource, save_matrix};
    use sunvis::render::colormap::ColorScale;
    use sunvis::view::single::SinglePanelViewer;
    use tempfile::TempDir;

    struct ZeroSource {
        loads: usize,
    }

    impl FieldSource for ZeroSource {
        fn load(&mut self, _path: &Path) -> sunvis::Result<Array2<f64>> {
            self.loads += 1;
            Ok(Array2::zeros((5, 5)))
        }
    }

    // Tests an all-zero field paints the panel in the lowest jet colour
    // Verified by normalising to the field range
    #[test]
    fn test_zero_field_figure() {
        let viewer = SinglePanelViewer {
            labels: false,
            ..SinglePanelViewer::default()
        };
        let mut source = ZeroSource { loads: 0 };

        let figure = viewer.figure(&mut source).unwrap();
        let layout = figure.layout().unwrap();
        let img = figure.render().unwrap();

        assert_eq!(source.loads, 1);
        assert_eq!(img.dimensions(), (640, 480));
        let rect = layout.panels[0];
        let expected = figure.scale().color(0.0);
        for (dx, dy) in [(1, 1), (rect.width / 2, rect.height / 2), (rect.width - 2, rect.height - 2)] {
            let pixel = img.get_pixel(rect.x as u32 + dx, rect.y as u32 + dy);
            assert_eq!(*pixel, expected);
        }
    }

    // Tests an invalid range is rejected before the input is read
    // Verified by loading first
    #[test]
    fn test_invalid_range_skips_load() {
        let viewer = SinglePanelViewer {
            vmin: 12.0,
            vmax: 0.0,
            labels: false,
            ..SinglePanelViewer::default()
        };
        let mut source = ZeroSource { loads: 0 };

        assert!(matches!(
            viewer.figure(&mut source),
            Err(VisError::InvalidParameter { .. })
        ));
        assert_eq!(source.loads, 0);
    }

    // Tests the viewer reads a simulator matrix and writes the PNG
    // Verified by writing to the default output instead
    #[test]
    fn test_run_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("build").join("sunCollector.txt");
        let output = temp_dir.path().join("sunCollector.png");
        save_matrix(
            &Array2::from_shape_fn((30, 20), |(i, j)| (i * j) as f64 / 50.0),
            &input,
        )
        .unwrap();

        let viewer = SinglePanelViewer {
            input,
            output: output.clone(),
            labels: false,
            ..SinglePanelViewer::default()
        };

        assert_eq!(viewer.run(&mut TextFieldSource).unwrap(), output);
        assert!(output.is_file());
    }

    // Tests a missing input is a data load error and nothing is written
    // Verified by rendering an empty panel
    #[test]
    fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("sunCollector.png");
        let viewer = SinglePanelViewer {
            input: temp_dir.path().join("sunCollector.txt"),
            output: output.clone(),
            labels: false,
            ..SinglePanelViewer::default()
        };

        let err = viewer.run(&mut TextFieldSource).unwrap_err();

        assert!(matches!(err, VisError::DataLoad { .. }));
        assert!(!output.exists());
    }

    // Tests the defaults match the simulator build layout
    // Verified by changing the default range
    #[test]
    fn test_default_viewer() {
        let viewer = SinglePanelViewer::default();

        assert_eq!(viewer.input, PathBuf::from("./build/sunCollector.txt"));
        assert_eq!(viewer.output, PathBuf::from("sunCollector.png"));
        assert!(viewer.vmin.abs() < f64::EPSILON);
        assert!((viewer.vmax - 12.0).abs() < f64::EPSILON);
    }
}
