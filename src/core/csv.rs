// src/core/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Split one line of CSV/TSV into fields (quotes tolerated). std-only.
///
/// Quoting rules: a `"` toggles the in-quotes state, except that `""`
/// inside quotes emits a literal `"` and advances past both characters.
/// A separator inside quotes is literal. The final field is always
/// emitted, and unterminated quotes never error — the rest of the line
/// just joins the current field. Embedded newlines are not supported;
/// the feed does not produce them.
pub fn split_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                fields.push(take(&mut field));
            }
            _ => field.push(ch),
        }
    }

    fields.push(field);
    fields
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows (optionally preceded by a header line) for output.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
