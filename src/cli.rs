// src/cli.rs
use std::thread;
use std::time::Duration;

use crate::config::sheet::{FeedSpec, SHEET};
use crate::config::state::{SortMode, ViewState};
use crate::core::csv;
use crate::dataset::Dataset;
use crate::fetch;
use crate::page;
use crate::refresh::{Refresher, RefreshStatus};
use crate::view::{self, ResultView};

type CliError = Box<dyn std::error::Error>;

pub struct Params {
    pub search: Option<String>,
    /// (column, value) pairs as given on the command line.
    pub filters: Vec<(String, String)>,
    pub sort: SortMode,
    pub page: usize,
    pub list: Option<String>,
    pub sep: char,
    pub headers: bool,
    pub watch: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            search: None,
            filters: Vec::new(),
            sort: SortMode::Title,
            page: 1,
            list: None,
            sep: ',',
            headers: false,
            watch: false,
        }
    }
}

pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Params, CliError> {
    let mut params = Params::default();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-s" | "--search" => {
                params.search = Some(args.next().ok_or("Missing value for --search")?);
            }
            "-f" | "--filter" => {
                let v = args.next().ok_or("Missing value for --filter")?;
                let (col, val) = v
                    .split_once('=')
                    .ok_or_else(|| format!("Expected COL=VAL, got: {v}"))?;
                params.filters.push((s!(col.trim()), s!(val.trim())));
            }
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                params.sort = match v.to_ascii_lowercase().as_str() {
                    "title" => SortMode::Title,
                    "source" => SortMode::Source,
                    other => return Err(format!("Unknown sort mode: {other}").into()),
                };
            }
            "-p" | "--page" => {
                params.page = args.next().ok_or("Missing value for --page")?.parse()?;
            }
            "--list" => params.list = Some(args.next().ok_or("Missing value for --list")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.sep = match v.to_ascii_lowercase().as_str() {
                    "csv" => ',',
                    "tsv" => '\t',
                    other => return Err(format!("Unknown format: {other}").into()),
                };
            }
            "--headers" => params.headers = true,
            "-w" | "--watch" => params.watch = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(params)
}

pub fn run(params: Params) -> Result<(), CliError> {
    let feed = FeedSpec::default();

    if params.watch {
        watch(feed, &params)
    } else {
        let ds = fetch::fetch_sheet(&feed, 0)?;
        print_result(&ds, &params)
    }
}

/* ---------- one-shot output ---------- */

/// Apply CLI selections to a fresh ViewState. Filters are applied in
/// chain order so the cascade policy can't wipe a later command-line
/// selection with an earlier one.
fn state_from(params: &Params) -> Result<ViewState, CliError> {
    let mut state = ViewState::new(&SHEET);

    let mut by_level: Vec<(usize, &String)> = Vec::with_capacity(params.filters.len());
    for (col, val) in &params.filters {
        let level = SHEET
            .filter_level(col)
            .ok_or_else(|| format!("Not a filterable column: {col}"))?;
        by_level.push((level, val));
    }
    by_level.sort_by_key(|&(level, _)| level);
    for (level, val) in by_level {
        state.set_filter(&SHEET, level, Some(val.clone()));
    }

    if let Some(term) = &params.search {
        state.set_search(term.clone());
    }
    state.set_sort(params.sort);
    state.page = params.page;
    Ok(state)
}

fn print_result(ds: &Dataset, params: &Params) -> Result<(), CliError> {
    let mut state = state_from(params)?;

    if let Some(col) = &params.list {
        let level = SHEET
            .filter_level(col)
            .ok_or_else(|| format!("Not a filterable column: {col}"))?;
        for v in view::filter_options(ds, &SHEET, &state, level) {
            println!("{v}");
        }
        return Ok(());
    }

    let rv = ResultView::build(ds, &SHEET, &state);
    let total = rv.total_pages();
    state.page = page::clamp_page(state.page, total);

    let cols: Vec<Option<usize>> = SHEET.display.iter().map(|n| ds.col_index(n)).collect();

    let out = std::io::stdout();
    let mut w = out.lock();
    if params.headers {
        let headers: Vec<String> = SHEET.display.iter().map(|n| s!(*n)).collect();
        csv::write_row(&mut w, &headers, params.sep)?;
    }
    for &ix in rv.page_rows(state.page) {
        let row: Vec<String> = cols.iter().map(|c| s!(ds.value(ix, *c))).collect();
        csv::write_row(&mut w, &row, params.sep)?;
    }

    // Meta on stderr; stdout stays clean data.
    eprintln!("{} result(s), page {}/{}", rv.len(), state.page, total.max(1));
    Ok(())
}

/* ---------- watch mode ---------- */

fn watch(feed: FeedSpec, params: &Params) -> Result<(), CliError> {
    let refresher = Refresher::start(feed);
    // Start from 0, not generation(): the first fetch may already have
    // landed, and it must still be printed.
    let mut last_gen = 0;

    loop {
        thread::sleep(Duration::from_millis(500));
        let current = refresher.generation();
        if current == last_gen {
            continue;
        }
        last_gen = current;

        match refresher.status() {
            RefreshStatus::Error { message, .. } => eprintln!("Error: {message}"),
            RefreshStatus::Ready { .. } => {
                let ds = refresher.snapshot();
                print_result(&ds, params)?;
            }
            RefreshStatus::Loading => {}
        }
    }
}
