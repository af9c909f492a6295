// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the sequence invariants.
//!
//! This module provides debug-mode assertions that verify the structural
//! invariants every operation must preserve. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Run after **every mutation** — the editor funnels all writes through
//!    its terminator step, which calls [`check_sequence`]
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                  | Property                                  |
//! |---------------------------|-------------------------------------------|
//! | `check_length_invariant`  | `0 <= len <= capacity` after every op     |
//! | `check_terminated`        | `buf[len] == TERMINATOR` after mutation   |
//! | `check_range_ordered`     | `(first, last)` ranges are not reversed   |

use crate::buffer::BoundedSeq;
use crate::elem::Elem;

/// Check that the length never exceeds the capacity.
#[inline]
pub fn check_length_invariant<T: Elem, const SLOTS: usize>(seq: &BoundedSeq<T, SLOTS>) {
    debug_assert!(
        seq.len() <= seq.capacity(),
        "Contract violation: len {} > capacity {}",
        seq.len(),
        seq.capacity()
    );
}

/// Check that the terminator sits at index `len`.
#[inline]
pub fn check_terminated<T: Elem, const SLOTS: usize>(seq: &BoundedSeq<T, SLOTS>) {
    debug_assert!(
        seq.as_terminated().last() == Some(&T::TERMINATOR),
        "Contract violation: missing terminator at index {}",
        seq.len()
    );
}

/// Check a `(first, last)` pair before it is used as a range.
#[inline]
pub fn check_range_ordered(first: usize, last: usize) {
    debug_assert!(
        first <= last,
        "Contract violation: reversed range ({}, {})",
        first,
        last
    );
}

/// All per-sequence contracts in one call.
#[inline]
pub fn check_sequence<T: Elem, const SLOTS: usize>(seq: &BoundedSeq<T, SLOTS>) {
    check_length_invariant(seq);
    check_terminated(seq);
}
