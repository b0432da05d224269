// src/dataset.rs
//
// In-memory sheet data. A Dataset is headers plus fixed-width rows: every
// row has exactly one cell per header column, so lookups never go out of
// bounds. Built fresh on each fetch and shared as an immutable snapshot;
// nothing mutates a published Dataset.

use crate::core::csv;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self { headers: Vec::new(), rows: Vec::new() }
    }

    /// Build from one parsed header line plus parsed data lines.
    ///
    /// Header cells are trimmed and unquoted. Each data row is widened or
    /// truncated to the header width (missing trailing fields become "")
    /// and each cell is trimmed, unquoted and unescaped. Rows whose every
    /// cell ends up empty are dropped.
    pub fn from_lines<I>(header_fields: Vec<String>, data_lines: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let headers: Vec<String> = header_fields.iter().map(|h| clean_header(h)).collect();
        let rows = data_lines
            .into_iter()
            .filter_map(|fields| normalize_row(headers.len(), &fields))
            .collect();
        Self { headers, rows }
    }

    /// Convenience used by tests and the CLI: parse a whole CSV body.
    pub fn from_csv_text(text: &str) -> Option<Self> {
        let mut lines = text.lines();
        let header = csv::split_line(lines.next()?, ',');
        Some(Self::from_lines(header, lines.map(|l| csv::split_line(l, ','))))
    }

    /// Header position of `name`, if the sheet has that column.
    pub fn col_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Cell value; "" for an unknown column.
    pub fn value(&self, row_ix: usize, col_ix: Option<usize>) -> &str {
        match col_ix {
            Some(c) => self.rows.get(row_ix).and_then(|r| r.get(c)).map_or("", |s| s.as_str()),
            None => "",
        }
    }
}

/* ---------- normalization ---------- */

fn clean_header(raw: &str) -> String {
    s!(strip_quotes(raw.trim()))
}

fn clean_cell(raw: &str) -> String {
    // One layer of surrounding quotes, then `""` → `"`. The scanning
    // parser usually leaves nothing to strip; double-encoded cells from
    // re-exported sheets still normalize.
    strip_quotes(raw.trim()).replace("\"\"", "\"")
}

fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Pad/truncate to `width` and clean every cell; None if the whole row is
/// blank.
fn normalize_row(width: usize, fields: &[String]) -> Option<Vec<String>> {
    let mut row = Vec::with_capacity(width);
    for i in 0..width {
        row.push(clean_cell(fields.get(i).map_or("", |f| f.as_str())));
    }
    if row.iter().all(|c| c.is_empty()) {
        None
    } else {
        Some(row)
    }
}
