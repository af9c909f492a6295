// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The element contract for bounded sequences.
//!
//! A [`BoundedSeq`](crate::BoundedSeq) stores plain values and keeps a
//! terminator written one slot past the live content, so C-style terminated
//! APIs can consume the buffer without a copy. That only works for element
//! types where a terminator value exists and is unambiguous: the zero value.
//!
//! `Elem` bundles exactly what the editing algebra needs and nothing more:
//!
//! - `Copy` — elements are moved by plain assignment during shifts.
//! - `Eq + Ord` — substring search and lexicographic compare.
//! - [`DefaultIsZeroes`] — the secure-wipe path zeroes vacated storage through
//!   `zeroize`, which guarantees the writes are not elided by the optimizer.

use zeroize::DefaultIsZeroes;

/// A value that can live in a [`BoundedSeq`](crate::BoundedSeq).
///
/// Implemented for the character widths the string family is built from:
/// `u8` (narrow/UTF-8 bytes), `u16`, `u32` (wide text), and `char`.
pub trait Elem: Copy + Eq + Ord + DefaultIsZeroes {
    /// The terminator written at index `len` after every mutation.
    ///
    /// Always the zero value for the type. It is never counted in `len` and
    /// never participates in comparison or search.
    const TERMINATOR: Self;
}

impl Elem for u8 {
    const TERMINATOR: Self = 0;
}

impl Elem for u16 {
    const TERMINATOR: Self = 0;
}

impl Elem for u32 {
    const TERMINATOR: Self = 0;
}

impl Elem for char {
    const TERMINATOR: Self = '\0';
}
