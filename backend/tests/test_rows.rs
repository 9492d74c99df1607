//! Tests for row naming

use boarding_simulator_core_rs::models::rows::{row_index, row_label};
use boarding_simulator_core_rs::row_names;

fn alphabet() -> Vec<String> {
    (b'A'..=b'Z').map(|c| (c as char).to_string()).collect()
}

#[test]
fn test_row_names_empty() {
    assert!(row_names(0).is_empty());
    assert_eq!(row_names(0).labels(), &[] as &[String]);
}

#[test]
fn test_row_names_small() {
    assert_eq!(row_names(1).labels(), &["A".to_string()]);
    assert_eq!(row_names(2).labels(), &["A".to_string(), "B".to_string()]);
}

#[test]
fn test_row_names_full_alphabet() {
    assert_eq!(row_names(26).labels(), alphabet().as_slice());
}

#[test]
fn test_row_names_rolls_over_to_double_letters() {
    let mut expected = alphabet();
    expected.extend(["AA", "AB", "AC", "AD"].map(String::from));

    let rows = row_names(30);
    assert_eq!(rows.labels(), expected.as_slice());
    assert_eq!(rows.label(26), Some("AA"));
    assert_eq!(rows.label(29), Some("AD"));
    assert_eq!(rows.label(30), None);
}

#[test]
fn test_row_names_are_a_prefix_of_each_other() {
    let long = row_names(100);
    for length in [0, 1, 25, 26, 27, 52, 99] {
        assert_eq!(row_names(length).labels(), &long.labels()[..length]);
    }
}

#[test]
fn test_inverse_lookup() {
    let rows = row_names(60);
    for (i, label) in rows.iter() {
        assert_eq!(rows.position(label), Some(i));
        assert_eq!(row_index(label), Some(i));
        assert_eq!(row_label(i), label);
    }
    assert_eq!(rows.position("ZZ"), None);
}
