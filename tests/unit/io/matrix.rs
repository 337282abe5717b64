//! Tests for text matrix parsing, loading and writing

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use std::fs;
    use sunvis::VisError;
    use sunvis::io::matrix::{
        FieldSource, MatrixParseError, TextFieldSource, format_matrix, load_matrix,
        parse_matrix, save_matrix,
    };
    use tempfile::TempDir;

    // Tests rows and columns come from lines and whitespace
    // Verified by splitting on single spaces only
    #[test]
    fn test_parse_whitespace_matrix() {
        let field = parse_matrix("  1.00   2.50 \n\t3 \t 4\n").unwrap();

        assert_eq!(field, array![[1.0, 2.5], [3.0, 4.0]]);
    }

    // Tests blank lines and comments are skipped
    // Verified by counting blank lines as rows
    #[test]
    fn test_parse_skips_blank_lines_and_comments() {
        let text = "# sun collector\n\n1 2 3\n\n4 5 6 # trailing\n";
        let field = parse_matrix(text).unwrap();

        assert_eq!(field.dim(), (2, 3));
        assert!((field[[1, 2]] - 6.0).abs() < f64::EPSILON);
    }

    // Tests a single row loads as a 1xN matrix
    // Verified by returning a column vector
    #[test]
    fn test_parse_single_row() {
        let field = parse_matrix("7 8 9").unwrap();
        assert_eq!(field.dim(), (1, 3));
    }

    // Tests ragged rows are rejected with the offending line
    // Verified by padding short rows
    #[test]
    fn test_parse_ragged_rows() {
        let err = parse_matrix("1 2 3\n4 5\n").unwrap_err();

        assert_eq!(
            err,
            MatrixParseError::Ragged {
                line: 2,
                found: 2,
                expected: 3
            }
        );
    }

    // Tests non-numeric tokens are reported with position
    // Verified by skipping invalid tokens
    #[test]
    fn test_parse_invalid_number() {
        let err = parse_matrix("1 2\n3 x4\n").unwrap_err();

        assert_eq!(
            err,
            MatrixParseError::InvalidNumber {
                line: 2,
                column: 2,
                token: "x4".to_string()
            }
        );
        assert!(err.to_string().contains("'x4'"));
    }

    // Tests files without numbers are rejected
    // Verified by returning a 0x0 matrix
    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_matrix("").unwrap_err(), MatrixParseError::Empty);
        assert_eq!(parse_matrix("\n# only a comment\n").unwrap_err(), MatrixParseError::Empty);
    }

    // Tests the simulator's %6.2f format
    // Verified by dropping the trailing space
    #[test]
    fn test_format_matrix_layout() {
        let text = format_matrix(&array![[1.0, 2.5], [10.25, -3.0]]);

        assert_eq!(text, "  1.00   2.50 \n 10.25  -3.00 \n");
    }

    // Tests saving then loading reproduces values within the printed precision
    // Verified by writing one decimal only
    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("growseason").join("height_20.txt");
        let field = Array2::from_shape_fn((7, 4), |(i, j)| (i * 4 + j) as f64 * 0.37);

        save_matrix(&field, &path).unwrap();
        let loaded = load_matrix(&path).unwrap();

        assert_eq!(loaded.dim(), field.dim());
        for (a, b) in loaded.iter().zip(field.iter()) {
            assert!((a - b).abs() <= 0.005 + 1e-12, "{a} vs {b}");
        }
    }

    // Tests a missing file is a data load error naming the path
    // Verified by returning FileSystem instead
    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sunCollector.txt");

        match load_matrix(&path).unwrap_err() {
            VisError::DataLoad { path: failed, .. } => assert_eq!(failed, path),
            other => unreachable!("Expected DataLoad, got {other:?}"),
        }
    }

    // Tests malformed content is a data load error
    // Verified by accepting partial rows
    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.txt");
        fs::write(&path, "1 2\n3\n").unwrap();

        let err = TextFieldSource.load(&path).unwrap_err();
        assert!(matches!(err, VisError::DataLoad { .. }));
        assert!(err.to_string().contains("line 2"));
    }
}
