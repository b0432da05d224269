// src/refresh.rs
//
// Background refresh of the sheet. One worker thread owns the fetch loop:
// fetch, publish, sleep, repeat. Publishing swaps an Arc snapshot behind a
// mutex, so readers always see a whole dataset, never a half-written one.
// A single worker also serializes fetches — a slow cycle can never be
// overtaken and applied out of order by a later one.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

use crate::config::consts::{CANCEL_POLL_MS, REFRESH_INTERVAL_SECS};
use crate::config::sheet::FeedSpec;
use crate::dataset::Dataset;
use crate::fetch::{self, FetchError};

#[derive(Clone, Debug)]
pub enum RefreshStatus {
    /// First fetch has not completed yet.
    Loading,
    Ready {
        last_updated: SystemTime,
    },
    /// Fetch failed; any previously published snapshot stays visible.
    Error {
        message: String,
        last_updated: Option<SystemTime>,
    },
}

struct Shared {
    snapshot: Mutex<Arc<Dataset>>,
    status: Mutex<RefreshStatus>,
    /// Bumped on every publish; consumers poll it for change detection.
    generation: AtomicU64,
    cancel: AtomicBool,
}

pub struct Refresher {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl Refresher {
    /// Start polling the published sheet at the standard interval.
    pub fn start(feed: FeedSpec) -> Self {
        Self::with_interval(feed, Duration::from_secs(REFRESH_INTERVAL_SECS))
    }

    /// Same, with a caller-chosen interval. Tests shorten it.
    pub fn with_interval(feed: FeedSpec, interval: Duration) -> Self {
        let shared = Arc::new(Shared {
            snapshot: Mutex::new(Arc::new(Dataset::empty())),
            status: Mutex::new(RefreshStatus::Loading),
            generation: AtomicU64::new(0),
            cancel: AtomicBool::new(false),
        });

        let worker = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || run_loop(&shared, &feed, interval))
        };

        Self { shared, worker: Some(worker) }
    }

    /// Latest published snapshot. Cheap: clones an Arc.
    pub fn snapshot(&self) -> Arc<Dataset> {
        self.shared.snapshot.lock().unwrap().clone()
    }

    pub fn status(&self) -> RefreshStatus {
        self.shared.status.lock().unwrap().clone()
    }

    /// Publish counter. Unchanged value ⇒ snapshot and status unchanged.
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Stop the loop. A fetch already in flight is not aborted, but its
    /// result is never published.
    pub fn stop(&self) {
        self.shared.cancel.store(true, Ordering::Release);
    }
}

impl Drop for Refresher {
    fn drop(&mut self) {
        self.stop();
        // Detach rather than join: an in-flight fetch may hold the worker
        // until its socket timeout, and its result is discarded anyway.
        if let Some(handle) = self.worker.take() {
            drop(handle);
        }
    }
}

/* ---------- worker ---------- */

fn run_loop(shared: &Shared, feed: &FeedSpec, interval: Duration) {
    let mut seq: u64 = 0;
    let mut first = true;

    loop {
        if shared.cancel.load(Ordering::Acquire) {
            return;
        }
        seq += 1;

        let outcome = fetch::fetch_sheet(feed, seq);

        // Re-check after the network round trip: once cancelled, nothing
        // is published, even a success that was already in flight.
        if shared.cancel.load(Ordering::Acquire) {
            return;
        }

        match outcome {
            Ok(ds) => {
                logf!("Refresh: OK seq={} rows={}", seq, ds.row_count());
                publish(shared, Some(Arc::new(ds)), RefreshStatus::Ready {
                    last_updated: SystemTime::now(),
                });
            }
            Err(FetchError::Empty) if first => {
                // Only the very first load replaces the snapshot with an
                // empty dataset; later empty responses keep prior data.
                loge!("Refresh: seq={} sheet is empty on first load", seq);
                publish(shared, Some(Arc::new(Dataset::empty())), RefreshStatus::Error {
                    message: FetchError::Empty.to_string(),
                    last_updated: None,
                });
            }
            Err(e) => {
                loge!("Refresh: seq={} {}", seq, e);
                let last_updated = match &*shared.status.lock().unwrap() {
                    RefreshStatus::Ready { last_updated } => Some(*last_updated),
                    RefreshStatus::Error { last_updated, .. } => *last_updated,
                    RefreshStatus::Loading => None,
                };
                publish(shared, None, RefreshStatus::Error {
                    message: e.to_string(),
                    last_updated,
                });
            }
        }
        first = false;

        // Sleep in short slices so stop() takes effect promptly.
        let mut slept = Duration::ZERO;
        while slept < interval {
            if shared.cancel.load(Ordering::Acquire) {
                return;
            }
            let step = Duration::from_millis(CANCEL_POLL_MS).min(interval - slept);
            thread::sleep(step);
            slept += step;
        }
    }
}

fn publish(shared: &Shared, snapshot: Option<Arc<Dataset>>, status: RefreshStatus) {
    if let Some(ds) = snapshot {
        *shared.snapshot.lock().unwrap() = ds;
    }
    *shared.status.lock().unwrap() = status;
    shared.generation.fetch_add(1, Ordering::AcqRel);
}
