// src/core/collate.rs
//
// String comparison for sorting sheet values. ASCII is case-folded, then
// characters compare by code point. Hangul syllables (U+AC00..U+D7A3) are
// laid out in 가나다 order, so code-point comparison gives dictionary
// order for Korean text, and digits < Latin < Hangul falls out of the
// code-point ranges. Not a full UCA collator; the sheet's values don't
// need one.

use std::cmp::Ordering;

pub fn compare(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().map(|c| c.to_ascii_lowercase());
    let mut cb = b.chars().map(|c| c.to_ascii_lowercase());
    loop {
        match (ca.next(), cb.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = x.cmp(&y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Compare two value chains pairwise, stopping at the first non-equal
/// comparison. Used by the grouping sort (textbook → unit → subunit).
pub fn compare_chain<'a, I, J>(a: I, b: J) -> Ordering
where
    I: IntoIterator<Item = &'a str>,
    J: IntoIterator<Item = &'a str>,
{
    let mut ia = a.into_iter();
    let mut ib = b.into_iter();
    loop {
        match (ia.next(), ib.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
