//! Search, membership scans, and lexicographic comparison.

use super::common::seq;
use stackseq::{compare_slices, compare_slices_by, find, rfind};
use std::cmp::Ordering;

#[test]
fn find_returns_the_first_match() {
    let text = seq::<12>("Hello World");
    assert_eq!(text.find(b"World"), Some(6));
    assert_eq!(text.find(b"o"), Some(4));
    assert_eq!(text.find(b"Hello World"), Some(0));
}

#[test]
fn find_misses_cleanly() {
    let text = seq::<12>("Hello World");
    assert_eq!(text.find(b"Pin"), None);
    assert_eq!(text.find(b"Worlds"), None); // runs past the end
}

#[test]
fn rfind_returns_the_last_match() {
    let text = seq::<16>("abab");
    assert_eq!(text.rfind(b"ab"), Some(2));
    assert_eq!(text.find(b"ab"), Some(0));
}

#[test]
fn windowed_variants_respect_the_position() {
    let text = seq::<16>("abcabc");
    assert_eq!(text.find_from(b"abc", 1), Some(3));
    assert_eq!(text.find_from(b"abc", 4), None);
    assert_eq!(text.rfind_from(b"abc", 2), Some(0));
}

#[test]
fn needle_longer_than_haystack_is_false_immediately() {
    let text = seq::<8>("abc");
    assert!(!text.starts_with(b"abcd"));
    assert!(!text.ends_with(b"abcd"));
    assert!(!text.contains(b"abcd"));
}

#[test]
fn empty_needle_matches_trivially() {
    let text = seq::<8>("abc");
    assert!(text.starts_with(b""));
    assert!(text.ends_with(b""));
    assert!(text.contains(b""));

    let empty = seq::<8>("");
    assert!(empty.starts_with(b""));
    assert!(empty.contains(b""));
}

#[test]
fn prefix_suffix_membership() {
    let text = seq::<16>("Hello World");
    assert!(text.starts_with(b"Hello"));
    assert!(!text.starts_with(b"World"));
    assert!(text.ends_with(b"World"));
    assert!(text.contains(b"lo W"));
}

#[test]
fn character_class_scans() {
    let text = seq::<16>("2024-01-15");
    assert_eq!(text.find_first_of(b"-/"), Some(4));
    assert_eq!(text.find_first_not_of(b"0123456789"), Some(4));
    assert_eq!(text.find_last_of(b"-/"), Some(7));
    assert_eq!(text.find_last_not_of(b"0123456789"), Some(7));
    assert_eq!(text.find_first_of(b"xyz"), None);
}

#[test]
fn three_way_compare_is_a_clean_ordering() {
    let text = seq::<12>("Hello");
    assert_eq!(text.compare(b"Hello"), Ordering::Equal);
    assert_eq!(text.compare(b"Hellp"), Ordering::Less);
    assert_eq!(text.compare(b"Hell"), Ordering::Greater);
    // shorter-but-equal-prefix compares less
    assert_eq!(text.compare(b"Hello World"), Ordering::Less);
}

#[test]
fn compare_drives_the_ord_impls() {
    let a = seq::<12>("apple");
    let b = seq::<12>("banana");
    assert!(a < b);
    assert!(b > a);
    assert_eq!(a.max(b.clone()), b);
}

#[test]
fn free_functions_work_on_raw_slices() {
    // External buffers get the same algorithms without constructing a sequence.
    let hay: &[u16] = &[10, 20, 30, 20, 30];
    assert_eq!(find(hay, &[20, 30]), Some(1));
    assert_eq!(rfind(hay, &[20, 30]), Some(3));
    assert_eq!(compare_slices(hay, &[10, 20, 30]), Ordering::Greater);
}

#[test]
fn external_comparator_overrides_natural_order() {
    let case_fold = |a: &u8, b: &u8| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());
    assert_eq!(compare_slices_by(b"HELLO", b"hello", case_fold), Ordering::Equal);
    assert_eq!(compare_slices(b"HELLO", b"hello"), Ordering::Less);
}
