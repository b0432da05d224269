// src/config/consts.rs

// Net config
pub const HOST: &str = "munhak.dothome.co.kr";
pub const PORT: u16 = 80;
pub const SHEET_PATH: &str = "/sheets/index.csv";

// Refresh
pub const REFRESH_INTERVAL_SECS: u64 = 30;
pub const CANCEL_POLL_MS: u64 = 250;

// Paging
pub const PAGE_SIZE: usize = 20;

// Logging
pub const LOG_FILE: &str = ".lit_sheet.log";

// Outbound link shown in the GUI; opaque to the core
pub const VARIANT_EXERCISE_URL: &str = "https://forms.gle/variant-exercise";
