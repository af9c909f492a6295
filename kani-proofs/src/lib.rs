// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the stackseq editing primitives.
//!
//! This standalone crate extracts the clamp arithmetic and the overlap-safe
//! copy loops from the main crate and provides mathematical proofs of their
//! correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the geometry functions never underflow or overflow for
//!    any in-contract input
//! 2. **Partition**: prefix + gap + surviving tail always tile the new length
//! 3. **Bounds**: the new length never exceeds the capacity, and the copies
//!    never index past the buffer

/// Buffer size used by the proofs. Small enough for the model checker,
/// large enough to exercise every clamp branch.
pub const SLOTS: usize = 8;
pub const CAPACITY: usize = SLOTS - 1;

// ============================================================================
// INSERT GEOMETRY (copied from src/edit.rs)
// ============================================================================

/// The shape of an insert: how much source survives, the resulting length,
/// and how much of the old tail is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertGeometry {
    pub kept: usize,
    pub new_len: usize,
    pub tail_keep: usize,
}

/// Clamp arithmetic for inserting `source_len` elements before `position`.
///
/// Contract: `position <= old_len <= capacity`.
pub fn insert_geometry(
    old_len: usize,
    position: usize,
    source_len: usize,
    capacity: usize,
) -> InsertGeometry {
    let needed = old_len + source_len;
    let kept = source_len.min(capacity - position);
    let new_len = needed.min(capacity);
    let tail_keep = new_len - (position + kept);
    InsertGeometry {
        kept,
        new_len,
        tail_keep,
    }
}

/// Clamp arithmetic for replacing `[first, last)` with `source_len` elements.
///
/// Contract: `first <= last <= old_len <= capacity`.
pub fn replace_geometry(
    old_len: usize,
    first: usize,
    last: usize,
    source_len: usize,
    capacity: usize,
) -> InsertGeometry {
    let needed = old_len - (last - first) + source_len;
    let kept = source_len.min(capacity - first);
    let new_len = needed.min(capacity);
    let tail_keep = new_len - (first + kept);
    InsertGeometry {
        kept,
        new_len,
        tail_keep,
    }
}

// ============================================================================
// OVERLAP-SAFE COPIES (copied from src/edit.rs)
// ============================================================================

/// Copies `count` elements from `src..` to `dst..`, low index first.
/// Safe for overlap only when moving content leftward (`dst <= src`).
pub fn copy_forward(buf: &mut [u8; SLOTS], src: usize, dst: usize, count: usize) {
    debug_assert!(dst <= src);
    for i in 0..count {
        buf[dst + i] = buf[src + i];
    }
}

/// Copies `count` elements from `src..` to `dst..`, high index first.
/// Safe for overlap only when moving content rightward (`dst >= src`).
pub fn copy_backward(buf: &mut [u8; SLOTS], src: usize, dst: usize, count: usize) {
    debug_assert!(dst >= src);
    let mut i = count;
    while i > 0 {
        i -= 1;
        buf[dst + i] = buf[src + i];
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Insert geometry never panics and always tiles the new length.
    #[kani::proof]
    fn verify_insert_geometry_partition() {
        let old_len: usize = kani::any_where(|&n| n <= CAPACITY);
        let position: usize = kani::any_where(|&p| p <= old_len);
        let source_len: usize = kani::any_where(|&s| s <= 2 * SLOTS);

        let g = insert_geometry(old_len, position, source_len, CAPACITY);

        kani::assert(g.new_len <= CAPACITY, "length stays under the capacity");
        kani::assert(g.new_len >= old_len, "insert never shrinks");
        kani::assert(g.kept <= source_len, "kept source is bounded");
        kani::assert(
            position + g.kept + g.tail_keep == g.new_len,
            "prefix + gap + tail tile the new length",
        );
    }

    /// Replace geometry never panics and always tiles the new length.
    #[kani::proof]
    fn verify_replace_geometry_partition() {
        let old_len: usize = kani::any_where(|&n| n <= CAPACITY);
        let last: usize = kani::any_where(|&l| l <= old_len);
        let first: usize = kani::any_where(|&f| f <= last);
        let source_len: usize = kani::any_where(|&s| s <= 2 * SLOTS);

        let g = replace_geometry(old_len, first, last, source_len, CAPACITY);

        kani::assert(g.new_len <= CAPACITY, "length stays under the capacity");
        kani::assert(
            first + g.kept + g.tail_keep == g.new_len,
            "prefix + gap + tail tile the new length",
        );
        kani::assert(
            g.new_len >= old_len - (last - first),
            "replace only shrinks by what it removes",
        );
    }

    /// The geometry keeps every copy inside the buffer: the backward shift
    /// destination range ends at `new_len < SLOTS`.
    #[kani::proof]
    fn verify_insert_shift_stays_in_bounds() {
        let old_len: usize = kani::any_where(|&n| n <= CAPACITY);
        let position: usize = kani::any_where(|&p| p <= old_len);
        let source_len: usize = kani::any_where(|&s| s <= 2 * SLOTS);

        let g = insert_geometry(old_len, position, source_len, CAPACITY);

        // copy_backward(position, position + kept, tail_keep) touches
        // src [position, position + tail_keep) and
        // dst [position + kept, position + kept + tail_keep).
        kani::assert(
            position + g.tail_keep <= old_len,
            "shift reads only live content",
        );
        kani::assert(
            position + g.kept + g.tail_keep < SLOTS,
            "shift writes stay inside the slots",
        );
    }

    /// `copy_backward` preserves the moved window for any rightward overlap.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_copy_backward_rightward_overlap() {
        let src: usize = kani::any_where(|&s| s < SLOTS);
        let dst: usize = kani::any_where(|&d| d >= src && d < SLOTS);
        let count: usize = kani::any_where(|&c| d_plus(dst, c) <= SLOTS && d_plus(src, c) <= SLOTS);

        let mut buf: [u8; SLOTS] = kani::any();
        let snapshot = buf;

        copy_backward(&mut buf, src, dst, count);

        for i in 0..count {
            kani::assert(buf[dst + i] == snapshot[src + i], "window moved intact");
        }
    }

    /// `copy_forward` preserves the moved window for any leftward overlap.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_copy_forward_leftward_overlap() {
        let dst: usize = kani::any_where(|&d| d < SLOTS);
        let src: usize = kani::any_where(|&s| s >= dst && s < SLOTS);
        let count: usize = kani::any_where(|&c| d_plus(src, c) <= SLOTS && d_plus(dst, c) <= SLOTS);

        let mut buf: [u8; SLOTS] = kani::any();
        let snapshot = buf;

        copy_forward(&mut buf, src, dst, count);

        for i in 0..count {
            kani::assert(buf[dst + i] == snapshot[src + i], "window moved intact");
        }
    }

    fn d_plus(a: usize, b: usize) -> usize {
        a.saturating_add(b)
    }
}

// ============================================================================
// PLAIN TESTS (run without Kani)
// ============================================================================
