// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Canonical fixtures shared by unit, property, and fuzz tests.
//!
//! Kept in the library (rather than under `tests/`) so the fuzz targets and
//! the integration tests agree on what "the invariants hold" means.

use crate::buffer::BoundedSeq;
use crate::elem::Elem;
use crate::types::Policy;

/// Byte sequence from a string, clamped like `assign`.
pub fn seq<const SLOTS: usize>(content: &str) -> BoundedSeq<u8, SLOTS> {
    BoundedSeq::from_str_lossy(content)
}

/// Byte sequence with an explicit policy.
pub fn seq_with_policy<const SLOTS: usize>(content: &str, policy: Policy) -> BoundedSeq<u8, SLOTS> {
    let mut out = BoundedSeq::with_policy(policy);
    let _ = out.assign(content.as_bytes());
    out
}

/// Asserts the structural invariants that must hold after *every* operation:
/// length within capacity and the terminator in place.
pub fn assert_invariants<T: Elem + core::fmt::Debug, const SLOTS: usize>(
    seq: &BoundedSeq<T, SLOTS>,
) {
    assert!(
        seq.len() <= seq.capacity(),
        "len {} exceeds capacity {}",
        seq.len(),
        seq.capacity()
    );
    assert_eq!(
        seq.as_terminated().last(),
        Some(&T::TERMINATOR),
        "terminator missing at index {}",
        seq.len()
    );
    assert_eq!(seq.as_terminated().len(), seq.len() + 1);
}
