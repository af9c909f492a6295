// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for subview arithmetic.
//!
//! Subviews narrow with an end that clamps and a start that must be in
//! bounds. Whatever indices the fuzzer throws at `subview`, the result is
//! either a well-formed narrower view or a structured error; nothing panics
//! and no view ever dangles past its parent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stackseq::{EditError, SeqView};

#[derive(Debug, Arbitrary)]
struct ViewInput {
    backing: Vec<u8>,
    ranges: Vec<(u8, u8)>,
}

fuzz_target!(|input: ViewInput| {
    let backing = &input.backing[..input.backing.len().min(128)];
    let mut view = SeqView::new(backing);

    for &(first, last) in input.ranges.iter().take(16) {
        let first = first as usize;
        let last = last as usize;

        match view.subview(first, last) {
            Ok(narrower) => {
                assert!(first <= last);
                assert!(first <= view.len());
                assert_eq!(narrower.len(), last.min(view.len()) - first);
                // content is a window of the parent
                assert_eq!(narrower.as_slice(), &view.as_slice()[first..first + narrower.len()]);
                view = narrower;
            }
            Err(EditError::IteratorOrder { .. }) => assert!(first > last),
            Err(EditError::OutOfBounds { .. }) => assert!(first > view.len()),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    // Iteration agrees with the slice in both directions.
    let forward: Vec<u8> = view.iter().copied().collect();
    assert_eq!(forward, view.as_slice());
    let mut backward: Vec<u8> = view.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(backward, view.as_slice());
});
