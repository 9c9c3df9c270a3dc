// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str =
    "https://s3.amazonaws.com/codecademy-content/courses/beautifulsoup/cacao/index.html";
pub const USER_AGENT: &str = concat!("cacao_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Page columns (CSS classes on the review table cells)
pub const CLASS_COMPANY: &str = "Company";
pub const CLASS_RATING: &str = "Rating";
pub const CLASS_COCOA: &str = "CocoaPercent";
pub const HEADER_CELLS: usize = 1; // first match of every class is the header cell

// Value ranges
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;
pub const COCOA_MIN: f64 = 0.0;
pub const COCOA_MAX: f64 = 100.0;

// Analysis
pub const DEFAULT_BINS: usize = 10;
pub const DEFAULT_TOP_N: usize = 10;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "reviews.csv";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "reviews";
pub const HISTOGRAM_PNG: &str = "ratings_histogram.png";
pub const SCATTER_PNG: &str = "cocoa_vs_rating.png";
pub const PLOT_W: u32 = 800;
pub const PLOT_H: u32 = 500;
