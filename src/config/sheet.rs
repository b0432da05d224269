// src/config/sheet.rs
//
// Static sheet configuration. One published sheet, fixed at compile time:
// which column is searched, which columns filter (in hierarchy order),
// which columns are displayed, and how results may be sorted.

use super::consts::{HOST, PORT, SHEET_PATH};

/// Where the raw feed lives. Owned fields so tests can point a fetch at a
/// local stub server; `default()` is the published sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedSpec {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Default for FeedSpec {
    fn default() -> Self {
        Self { host: s!(HOST), port: PORT, path: s!(SHEET_PATH) }
    }
}

/// What picking a value at one level of the filter chain does to the
/// levels below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadePolicy {
    /// Selecting at level i clears selections at levels i+1..
    ClearDownstream,
    /// Selections are independent; downstream picks survive.
    Independent,
}

/// Dropdown labels for one filterable column. Explicit fields instead of
/// loose optional arguments.
#[derive(Clone, Copy, Debug)]
pub struct SelectSpec {
    pub column: &'static str,
    /// Shown while no value is picked.
    pub placeholder: &'static str,
    /// First entry of the option list; picking it clears the filter.
    pub all_label: &'static str,
}

pub struct SheetSpec {
    /// Columns matched by free-text search. The index sheet designates one.
    pub searchable: &'static [&'static str],
    /// Ordered hierarchy chain: textbook → major unit → minor unit.
    pub filterable: &'static [SelectSpec],
    /// Columns rendered, in order.
    pub display: &'static [&'static str],
    /// Default sort key (primary display column).
    pub title_column: &'static str,
    /// Tie-break chain for the grouping sort mode, compared in order.
    pub source_chain: &'static [&'static str],
    pub cascade: CascadePolicy,
}

impl SheetSpec {
    /// Position of `column` in the filter chain, if it is filterable.
    pub fn filter_level(&self, column: &str) -> Option<usize> {
        self.filterable.iter().position(|f| f.column == column)
    }
}

/// The literature-textbook index sheet.
pub static SHEET: SheetSpec = SheetSpec {
    searchable: &["작품명"],
    filterable: &[
        SelectSpec { column: "교과서", placeholder: "교과서 선택", all_label: "전체" },
        SelectSpec { column: "대단원", placeholder: "대단원 선택", all_label: "전체" },
        SelectSpec { column: "소단원", placeholder: "소단원 선택", all_label: "전체" },
    ],
    display: &["작품명", "작가", "갈래", "교과서", "대단원", "소단원"],
    title_column: "작품명",
    source_chain: &["교과서", "대단원", "소단원"],
    cascade: CascadePolicy::ClearDownstream,
};
