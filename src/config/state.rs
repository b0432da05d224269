// src/config/state.rs
//
// Central view state. Everything the pipeline derives from lives here,
// explicitly — no ambient globals. Mutators reset the page to 1 so a
// stale out-of-range page never displays an empty window silently.

use super::sheet::{CascadePolicy, SheetSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortMode {
    /// Work title, ascending. The default.
    Title,
    /// Group by source: textbook, then major unit, then minor unit.
    Source,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// One slot per entry of the sheet's filter chain. None = no filter.
    pub filters: Vec<Option<String>>,
    pub search: String,
    pub sort: SortMode,
    /// 1-based page number into the result view.
    pub page: usize,
}

impl ViewState {
    pub fn new(spec: &SheetSpec) -> Self {
        Self {
            filters: vec![None; spec.filterable.len()],
            search: s!(),
            sort: SortMode::Title,
            page: 1,
        }
    }

    /// Set or clear the filter at `level`. Under `ClearDownstream` a set
    /// or clear at level i also clears every selection below it.
    pub fn set_filter(&mut self, spec: &SheetSpec, level: usize, value: Option<String>) {
        if level >= self.filters.len() {
            return;
        }
        self.filters[level] = value.filter(|v| !v.is_empty());
        if matches!(spec.cascade, CascadePolicy::ClearDownstream) {
            for slot in self.filters.iter_mut().skip(level + 1) {
                *slot = None;
            }
        }
        self.page = 1;
    }

    pub fn set_search<T: Into<String>>(&mut self, term: T) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        if self.sort != mode {
            self.sort = mode;
            self.page = 1;
        }
    }

    pub fn has_filters(&self) -> bool {
        self.filters.iter().any(|f| f.is_some())
    }
}
