// src/log.rs
//
// Append-only debug log. Lines are stamped with time elapsed since the
// first log call, not wall-clock time. Errors are mirrored to stderr so
// CLI runs surface them without tailing the file.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::LOG_FILE;

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let m = total_ms / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{m:03}:{s:02}.{ms:03}")
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{level}] {msg}\n");

    if level == "ERROR" {
        eprint!("{line}");
    }

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
