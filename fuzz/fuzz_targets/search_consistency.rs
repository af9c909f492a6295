// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the search scans.
//!
//! Cross-checks `find`/`rfind` against a naive quadratic scan and checks the
//! internal consistency of the windowed and membership variants. Search is
//! pure, so the only failure modes are wrong indices and panics on degenerate
//! needle/haystack combinations.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stackseq::{
    compare_slices, find, find_first_not_of, find_first_of, find_from, find_last_not_of,
    find_last_of, rfind, rfind_from,
};
use std::cmp::Ordering;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    haystack: Vec<u8>,
    needle: Vec<u8>,
    position: u8,
}

fn naive_find(hay: &[u8], pat: &[u8]) -> Option<usize> {
    if pat.is_empty() {
        return Some(0);
    }
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len()).find(|&at| &hay[at..at + pat.len()] == pat)
}

fuzz_target!(|input: SearchInput| {
    let hay = &input.haystack[..input.haystack.len().min(256)];
    let pat = &input.needle[..input.needle.len().min(16)];
    let position = input.position as usize;

    // Forward scan against the reference.
    assert_eq!(find(hay, pat), naive_find(hay, pat));

    // rfind result must be a real match site, and the last one.
    if let Some(at) = rfind(hay, pat) {
        assert_eq!(&hay[at..at + pat.len()], pat);
        assert_eq!(find_from(hay, pat, at), Some(at));
        if !pat.is_empty() {
            assert_eq!(find_from(hay, pat, at + 1), None);
        }
    } else {
        assert_eq!(find(hay, pat), None);
    }

    // Windowed variants never report a hit outside their window.
    if let Some(at) = find_from(hay, pat, position) {
        assert!(at >= position);
        assert!(at + pat.len() <= hay.len());
    }
    if let Some(at) = rfind_from(hay, pat, position) {
        assert!(at <= position || pat.is_empty());
        assert!(at + pat.len() <= hay.len());
    }

    // Membership scans partition the haystack between of/not_of.
    let set = pat;
    match (find_first_of(hay, set), find_first_not_of(hay, set)) {
        (Some(a), Some(b)) => assert_ne!(a, b),
        (None, None) => assert!(hay.is_empty()),
        _ => {}
    }
    if let Some(at) = find_last_of(hay, set) {
        assert!(set.contains(&hay[at]));
    }
    if let Some(at) = find_last_not_of(hay, set) {
        assert!(!set.contains(&hay[at]));
    }

    // Comparison is antisymmetric.
    let forward = compare_slices(hay, pat);
    let backward = compare_slices(pat, hay);
    match forward {
        Ordering::Equal => assert_eq!(backward, Ordering::Equal),
        Ordering::Less => assert_eq!(backward, Ordering::Greater),
        Ordering::Greater => assert_eq!(backward, Ordering::Less),
    }
});
