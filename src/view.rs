// src/view.rs
//
// Derived result view: filter → search → sort over a dataset snapshot,
// expressed as row indices into the snapshot (no row cloning). Rebuilt
// wholesale whenever the snapshot or the view state changes.

use crate::config::sheet::SheetSpec;
use crate::config::state::{SortMode, ViewState};
use crate::core::collate;
use crate::dataset::Dataset;
use crate::page;

/// Zero-copy ordered projection of a Dataset.
pub struct ResultView<'a> {
    /// Positions of surviving rows, in display order.
    pub row_ix: Vec<usize>,
    data: &'a Dataset,
}

impl<'a> ResultView<'a> {
    pub fn build(data: &'a Dataset, spec: &SheetSpec, state: &ViewState) -> Self {
        let mut keep: Vec<usize> = (0..data.rows.len()).collect();

        // Filters first, in chain order. Exact, case-sensitive match on
        // the whole cell. A configured column missing from the fetched
        // sheet matches nothing.
        for (level, selected) in state.filters.iter().enumerate() {
            let Some(want) = selected else { continue };
            let col = spec
                .filterable
                .get(level)
                .and_then(|f| data.col_index(f.column));
            keep.retain(|&ix| match col {
                Some(c) => data.rows[ix][c] == *want,
                None => false,
            });
        }

        // Search next: case-insensitive substring on the searchable
        // column(s); an empty term passes everything through.
        let term = state.search.trim().to_lowercase();
        if !term.is_empty() {
            let cols: Vec<usize> = spec
                .searchable
                .iter()
                .filter_map(|name| data.col_index(name))
                .collect();
            keep.retain(|&ix| {
                cols.iter().any(|&c| data.rows[ix][c].to_lowercase().contains(&term))
            });
        }

        // Sort last. Vec::sort_by is stable, so rows with fully-equal
        // keys keep their sheet order.
        match state.sort {
            SortMode::Title => {
                if let Some(c) = data.col_index(spec.title_column) {
                    keep.sort_by(|&a, &b| {
                        collate::compare(&data.rows[a][c], &data.rows[b][c])
                    });
                }
            }
            SortMode::Source => {
                let chain: Vec<usize> = spec
                    .source_chain
                    .iter()
                    .filter_map(|name| data.col_index(name))
                    .collect();
                if !chain.is_empty() {
                    keep.sort_by(|&a, &b| {
                        collate::compare_chain(
                            chain.iter().map(|&c| data.rows[a][c].as_str()),
                            chain.iter().map(|&c| data.rows[b][c].as_str()),
                        )
                    });
                }
            }
        }

        Self { row_ix: keep, data }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a row by result position (no cloning).
    pub fn row(&self, i: usize) -> Option<&[String]> {
        self.row_ix
            .get(i)
            .and_then(|&ix| self.data.rows.get(ix).map(|r| r.as_slice()))
    }

    pub fn total_pages(&self) -> usize {
        page::total_pages(self.row_ix.len())
    }

    /// Dataset row indices of one 1-based page.
    pub fn page_rows(&self, page_no: usize) -> &[usize] {
        &self.row_ix[page::page_bounds(self.row_ix.len(), page_no)]
    }

    /// Materialize one page as owned rows (for frontend boundaries).
    pub fn page_owned(&self, page_no: usize) -> Vec<Vec<String>> {
        self.page_rows(page_no)
            .iter()
            .map(|&ix| self.data.rows[ix].clone())
            .collect()
    }
}

/// Option list for the filterable column at `level`: distinct non-empty
/// values present after applying only the filters *earlier* in the chain,
/// sorted with the sheet collation. This is what makes the dropdowns
/// cascade, independent of the cascade-clear policy.
pub fn filter_options(
    data: &Dataset,
    spec: &SheetSpec,
    state: &ViewState,
    level: usize,
) -> Vec<String> {
    let Some(col) = spec
        .filterable
        .get(level)
        .and_then(|f| data.col_index(f.column))
    else {
        return Vec::new();
    };

    let upstream: Vec<(usize, &String)> = state
        .filters
        .iter()
        .take(level)
        .enumerate()
        .filter_map(|(lvl, sel)| {
            let want = sel.as_ref()?;
            let c = spec.filterable.get(lvl).and_then(|f| data.col_index(f.column));
            // An active filter on a missing column admits no rows at all;
            // usize::MAX never matches a real cell below.
            Some((c.unwrap_or(usize::MAX), want))
        })
        .collect();

    let mut values: Vec<String> = data
        .rows
        .iter()
        .filter(|row| {
            upstream
                .iter()
                .all(|&(c, want)| row.get(c).is_some_and(|v| v == want))
        })
        .map(|row| row[col].clone())
        .filter(|v| !v.is_empty())
        .collect();

    values.sort_by(|a, b| collate::compare(a, b));
    values.dedup();
    values
}
