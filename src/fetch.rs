// src/fetch.rs
//
// One fetch cycle: GET the published sheet with a cache-busting token,
// split into lines, parse and normalize into a Dataset.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::sheet::FeedSpec;
use crate::core::{csv, net};
use crate::dataset::Dataset;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx status or a failure on the wire.
    #[error("{0}")]
    Transport(String),
    /// Body had no data rows beyond the header.
    #[error("sheet is empty")]
    Empty,
}

/// Fetch and parse the sheet. `seq` is the refresh cycle number; it goes
/// into the cache-busting token so intermediaries can't serve stale text.
pub fn fetch_sheet(feed: &FeedSpec, seq: u64) -> Result<Dataset, FetchError> {
    let path = bust_path(&feed.path, seq);
    logd!("Fetch: GET {}:{}{}", feed.host, feed.port, path);

    let body = net::http_get(&feed.host, feed.port, &path)
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    parse_sheet(&body)
}

/// Parse a raw feed body. Fewer than two lines means no data rows at all,
/// which the caller surfaces as "sheet is empty"; individual rows that
/// fail to normalize are simply dropped, never fatal.
pub fn parse_sheet(body: &str) -> Result<Dataset, FetchError> {
    let mut lines = body.lines();
    let (Some(header), Some(first)) = (lines.next(), lines.next()) else {
        return Err(FetchError::Empty);
    };

    let header_fields = csv::split_line(header, ',');
    let data = std::iter::once(first)
        .chain(lines)
        .map(|l| csv::split_line(l, ','));

    Ok(Dataset::from_lines(header_fields, data))
}

fn bust_path(path: &str, seq: u64) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64);
    let sep = if path.contains('?') { "&" } else { "?" };
    let token = format!("t={millis}-{seq}");
    join!(path, sep, &token)
}
