//! Row naming
//!
//! Rows are labelled spreadsheet-column style: `A..Z`, then `AA..ZZ`, and so
//! on. Row index 0 (`A`) is the rearmost row of the cabin.
//!
//! # Example
//!
//! ```rust
//! use boarding_simulator_core_rs::models::rows::{row_label, row_names};
//!
//! assert_eq!(row_label(0), "A");
//! assert_eq!(row_label(26), "AA");
//!
//! let rows = row_names(28);
//! assert_eq!(rows.label(27), Some("AB"));
//! assert_eq!(rows.position("AB"), Some(27));
//! ```

use std::collections::HashMap;

const ALPHABET_LEN: usize = 26;

/// Label for a zero-based row index (bijective base-26)
pub fn row_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % ALPHABET_LEN) as u8);
        n /= ALPHABET_LEN;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Zero-based row index for a label, or `None` if it is not a row label
pub fn row_index(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for byte in label.bytes() {
        if !byte.is_ascii_uppercase() {
            return None;
        }
        n = n
            .checked_mul(ALPHABET_LEN)?
            .checked_add((byte - b'A') as usize + 1)?;
    }
    Some(n - 1)
}

/// Ordered row labels for a plane of `length` rows
///
/// Equivalent to `RowNames::new(length)`.
pub fn row_names(length: usize) -> RowNames {
    RowNames::new(length)
}

/// Bidirectional RowIndex ↔ RowLabel mapping for one plane
///
/// Built once per plane; both directions are exact inverses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowNames {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
}

impl RowNames {
    /// Labels for rows `0..length`
    pub fn new(length: usize) -> Self {
        let labels: Vec<String> = (0..length).map(row_label).collect();
        let positions = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        Self { labels, positions }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of the row at `index`
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Index of the row labelled `label`
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// All labels in row-index order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// `(index, label)` pairs in row-index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.labels.iter().map(String::as_str).enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(row_label(0), "A");
        assert_eq!(row_label(25), "Z");
    }

    #[test]
    fn test_double_letters() {
        assert_eq!(row_label(26), "AA");
        assert_eq!(row_label(51), "AZ");
        assert_eq!(row_label(52), "BA");
        assert_eq!(row_label(701), "ZZ");
    }

    #[test]
    fn test_index_inverts_label() {
        for i in 0..800 {
            assert_eq!(row_index(&row_label(i)), Some(i));
        }
    }

    #[test]
    fn test_index_rejects_garbage() {
        assert_eq!(row_index(""), None);
        assert_eq!(row_index("a"), None);
        assert_eq!(row_index("A1"), None);
    }

    #[test]
    fn test_row_names_is_bijective() {
        let rows = RowNames::new(40);
        assert_eq!(rows.len(), 40);
        for (i, label) in rows.iter() {
            assert_eq!(rows.position(label), Some(i));
        }
        assert_eq!(rows.position("AO"), None);
    }
}
