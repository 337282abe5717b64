//! Tests for display constants and default paths

#[cfg(test)]
mod tests {
    use sunvis::io::configuration::{
        DEFAULT_GROW_SEASON_OUTPUT, DEFAULT_OPTIONS_PATH, DEFAULT_SUN_COLLECTOR_PATH,
        FIGURE_DPI, GRID_COLS, GRID_ROWS, GROW_SEASON_FIGURE_INCHES, PANEL_COUNT, PANEL_EXTENT,
        SUN_COLLECTOR_VMAX, SUN_COLLECTOR_VMIN, ZONE_BOUNDARIES, ZONE_COLORS,
    };

    // Tests the overview is a 3x3 grid of nine heights
    // Verified by changing grid dimensions
    #[test]
    fn test_panel_grid() {
        assert_eq!(GRID_ROWS, 3);
        assert_eq!(GRID_COLS, 3);
        assert_eq!(PANEL_COUNT, 9);
    }

    // Tests the zone boundaries and one colour per zone
    // Verified by dropping a boundary
    #[test]
    fn test_zone_boundaries_match_colors() {
        assert_eq!(ZONE_BOUNDARIES, [0.0, 2.0, 5.0, 10.0]);
        assert_eq!(ZONE_BOUNDARIES.len(), ZONE_COLORS.len() + 1);
        assert!(ZONE_BOUNDARIES.windows(2).all(|w| w[0] < w[1]));
    }

    // Tests the continuous range of the single-panel viewer
    // Verified by changing vmax
    #[test]
    fn test_sun_collector_range() {
        assert!(SUN_COLLECTOR_VMIN.abs() < f64::EPSILON);
        assert!((SUN_COLLECTOR_VMAX - 12.0).abs() < f64::EPSILON);
    }

    // Tests the overview figure resolves to 400x800 pixels
    // Verified by changing the dpi
    #[test]
    fn test_overview_pixel_size() {
        let (w, h) = GROW_SEASON_FIGURE_INCHES;
        assert!((w * FIGURE_DPI - 400.0).abs() < f64::EPSILON);
        assert!((h * FIGURE_DPI - 800.0).abs() < f64::EPSILON);
        assert!(PANEL_EXTENT.0 < PANEL_EXTENT.1);
    }

    // Tests the default paths used when no arguments are given
    // Verified by editing a default path
    #[test]
    fn test_default_paths() {
        assert_eq!(DEFAULT_SUN_COLLECTOR_PATH, "./build/sunCollector.txt");
        assert_eq!(DEFAULT_OPTIONS_PATH, "../input/options.xml");
        assert_eq!(DEFAULT_GROW_SEASON_OUTPUT, "overview_grow_season_zoned.png");
    }
}
