//! Display constants and runtime configuration defaults

// Single-panel viewer
/// Matrix written by the simulator for a single run
pub const DEFAULT_SUN_COLLECTOR_PATH: &str = "./build/sunCollector.txt";
/// Output image for the single-panel viewer
pub const DEFAULT_SUN_COLLECTOR_OUTPUT: &str = "sunCollector.png";
/// Lower bound of the continuous colour range
pub const SUN_COLLECTOR_VMIN: f64 = 0.0;
/// Upper bound of the continuous colour range
pub const SUN_COLLECTOR_VMAX: f64 = 12.0;
/// Single-panel figure size in inches (width, height)
pub const SUN_COLLECTOR_FIGURE_INCHES: (f64, f64) = (6.4, 4.8);

// Grow-season viewer
/// Option file shared with the simulator
pub const DEFAULT_OPTIONS_PATH: &str = "../input/options.xml";
/// Output image for the grow-season overview
pub const DEFAULT_GROW_SEASON_OUTPUT: &str = "overview_grow_season_zoned.png";
/// Subdirectory of `outputPath` holding the grow-season averages
pub const GROW_SEASON_SUBDIR: &str = "growseason";
/// Option element holding the height increment in metres
pub const HEIGHT_INCR_KEY: &str = "heightIncr";
/// Option element holding the simulator output directory
pub const OUTPUT_PATH_KEY: &str = "outputPath";
/// Panel rows in the overview grid
pub const GRID_ROWS: usize = 3;
/// Panel columns in the overview grid
pub const GRID_COLS: usize = 3;
/// Number of heights shown in the overview
pub const PANEL_COUNT: usize = GRID_ROWS * GRID_COLS;
/// The first panel shows the second increment above ground
pub const FIRST_HEIGHT_MULTIPLE: usize = 2;
/// Metres to centimetres
pub const METRES_TO_CENTIMETRES: f64 = 100.0;
/// Overview figure size in inches (width, height)
pub const GROW_SEASON_FIGURE_INCHES: (f64, f64) = (4.0, 8.0);
/// Physical extent of every panel in centimetres (x, y)
pub const PANEL_EXTENT: (f64, f64) = (130.0, 385.0);

// Zoned colour map
/// Bucket boundaries, each zone is `[b_i, b_{i+1})`
pub const ZONE_BOUNDARIES: [f64; 4] = [0.0, 2.0, 5.0, 10.0];
/// Zone colours: darkblue, lawngreen, orange
pub const ZONE_COLORS: [[u8; 3]; 3] = [[0, 0, 139], [124, 252, 0], [255, 165, 0]];

/// Colour used for NaN cells
pub const BAD_COLOR: [u8; 3] = [255, 255, 255];

// Axis layout
/// Centimetres covered by one cell along either axis
pub const CELL_SPACING_CM: f64 = 5.0;
/// Cells between two major ticks
pub const MAJOR_TICK_EVERY: usize = 5;

// Output settings
/// Resolution used to turn figure inches into pixels
pub const FIGURE_DPI: f64 = 100.0;
/// Font size in points for titles and tick labels
pub const FONT_SIZE_PT: f64 = 6.0;
/// Font family name labels are registered under
pub const FONT_FAMILY: &str = "sans-serif";
/// TrueType fonts tried in order when no font is given on the command line
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];
/// Share of the figure width reserved for the colour bar
pub const COLORBAR_FRACTION: f64 = 0.07;
/// Length to thickness ratio of the colour bar
pub const COLORBAR_ASPECT: f64 = 50.0;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
