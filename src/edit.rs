// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sequence editor: the mutable half of the editing algebra.
//!
//! Everything here edits in place. The two copy primitives at the bottom are
//! deliberately hand-rolled loops with an explicit direction, because the
//! whole correctness story for overlapping moves is *which end you copy
//! first*: shifting content rightward must copy high-to-low, shifting leftward
//! must copy low-to-high. Every operation above them reduces to "pick a
//! direction, shift the surviving tail once, fill the gap".
//!
//! # Truncation
//!
//! Edits never fail for being too big. They clamp to what fits, record the
//! sticky truncated flag, and only then consult the policy: under
//! [`Policy::fatal_truncation`] the call returns [`EditError::Truncated`]
//! *after* the clamped mutation has been committed. `erase` and `pop_back`
//! can only shrink and never touch the flag.
//!
//! # Aliasing
//!
//! A source slice can never alias the destination in safe Rust, so
//! self-editing has its own entry points (`append_within` and
//! `insert_within`) whose source is an index range of the sequence's own
//! live content. Those paths account for how the tail shift relocates the
//! source range before reading it.
//!
//! [`Policy::fatal_truncation`]: crate::Policy::fatal_truncation
//! [`EditError::Truncated`]: crate::EditError::Truncated

use crate::buffer::BoundedSeq;
use crate::contracts;
use crate::elem::Elem;
use crate::types::{EditError, EditOutcome};
use std::ops::Range;
use zeroize::Zeroize;

impl<T: Elem, const SLOTS: usize> BoundedSeq<T, SLOTS> {
    /// Replaces the whole content with `source`.
    ///
    /// A full reset: the sticky truncated flag is cleared first, then set
    /// again if `source` itself does not fit.
    pub fn assign(&mut self, source: &[T]) -> Result<EditOutcome, EditError> {
        let old_len = self.len;
        self.truncated = false;
        let kept = source.len().min(self.capacity());
        self.buf[..kept].copy_from_slice(&source[..kept]);
        if self.secure && kept < old_len {
            self.buf[kept..old_len].zeroize();
        }
        self.len = kept;
        self.terminate();
        if source.len() > self.capacity() {
            self.flag_truncation(source.len())?;
        }
        Ok(self.outcome())
    }

    /// Appends `source` at the end.
    pub fn append(&mut self, source: &[T]) -> Result<EditOutcome, EditError> {
        self.insert(self.len, source)
    }

    /// Appends a range of this sequence's own live content (self-append).
    ///
    /// `append_within(0..len())` doubles the content, clamped at capacity.
    pub fn append_within(&mut self, range: Range<usize>) -> Result<EditOutcome, EditError> {
        self.insert_within(self.len, range)
    }

    /// Inserts `source` before `position` (`0 <= position <= len`).
    ///
    /// Elements pushed past the capacity by the shift are dropped and the
    /// truncated flag is set.
    pub fn insert(&mut self, position: usize, source: &[T]) -> Result<EditOutcome, EditError> {
        if position > self.len {
            return Err(EditError::OutOfBounds {
                index: position,
                len: self.len,
            });
        }
        let old_len = self.len;
        let needed = old_len + source.len();
        let kept = source.len().min(self.capacity() - position);
        let new_len = needed.min(self.capacity());
        let tail_keep = new_len - (position + kept);

        self.copy_backward(position, position + kept, tail_keep);
        self.buf[position..position + kept].copy_from_slice(&source[..kept]);
        self.len = new_len;
        self.terminate();
        if needed > self.capacity() {
            self.flag_truncation(needed)?;
        }
        Ok(self.outcome())
    }

    /// Inserts a range of this sequence's own live content before `position`
    /// (self-insert).
    ///
    /// Correct for any overlap between the source range and the shifted tail.
    /// One caveat matches the behavior of assigning through a raw terminated
    /// pointer: if the insert truncates *and* the source range extends into
    /// the part of the tail that truncation drops, those dropped elements
    /// read as already-relocated content rather than their original values.
    pub fn insert_within(
        &mut self,
        position: usize,
        range: Range<usize>,
    ) -> Result<EditOutcome, EditError> {
        if position > self.len {
            return Err(EditError::OutOfBounds {
                index: position,
                len: self.len,
            });
        }
        let (start, end) = self.check_source_range(&range)?;
        let old_len = self.len;
        let requested = end - start;
        let needed = old_len + requested;
        let kept = requested.min(self.capacity() - position);
        let new_len = needed.min(self.capacity());
        let tail_keep = new_len - (position + kept);

        // The backward shift writes only [position + kept, new_len), so the
        // gap itself still holds original values afterwards.
        self.copy_backward(position, position + kept, tail_keep);

        // Where does old index `s` live now? Below the gap: unmoved. Inside
        // the gap: unmoved (see above). Past the gap: shifted right by
        // `kept`, unless truncation dropped it.
        let relocated = |s: usize| {
            if s < position + kept {
                s
            } else if s + kept < new_len {
                s + kept
            } else {
                s
            }
        };

        // Direction matters here too: a source that starts below the gap must
        // be filled high-to-low, otherwise the fill overwrites source slots
        // it has not read yet.
        if start >= position {
            for i in 0..kept {
                self.buf[position + i] = self.buf[relocated(start + i)];
            }
        } else {
            for i in (0..kept).rev() {
                self.buf[position + i] = self.buf[relocated(start + i)];
            }
        }

        self.len = new_len;
        self.terminate();
        if needed > self.capacity() {
            self.flag_truncation(needed)?;
        }
        Ok(self.outcome())
    }

    /// Removes `[first, last)`, shifting the tail left. Never truncates.
    ///
    /// `last` clamps to the length; a reversed range is an error, never
    /// silently corrected; `erase(i, i)` is a no-op.
    pub fn erase(&mut self, first: usize, last: usize) -> Result<EditOutcome, EditError> {
        if first > last {
            return Err(EditError::IteratorOrder { first, last });
        }
        if first > self.len {
            return Err(EditError::OutOfBounds {
                index: first,
                len: self.len,
            });
        }
        let last = last.min(self.len);
        let old_len = self.len;
        let new_len = old_len - (last - first);

        self.copy_forward(last, first, old_len - last);
        if self.secure {
            self.buf[new_len..old_len].zeroize();
        }
        self.len = new_len;
        self.terminate();
        Ok(self.outcome())
    }

    /// Count form of [`erase`](Self::erase): removes up to `count` elements
    /// starting at `position`. `usize::MAX` means "to the end".
    pub fn erase_at(&mut self, position: usize, count: usize) -> Result<EditOutcome, EditError> {
        self.erase(position, position.saturating_add(count))
    }

    /// Replaces `[first, last)` with `source`, as one combined shift.
    ///
    /// Semantically erase-then-insert, but the surviving tail moves exactly
    /// once. Truncation composes from the insert half.
    pub fn replace(
        &mut self,
        first: usize,
        last: usize,
        source: &[T],
    ) -> Result<EditOutcome, EditError> {
        if first > last {
            return Err(EditError::IteratorOrder { first, last });
        }
        if first > self.len {
            return Err(EditError::OutOfBounds {
                index: first,
                len: self.len,
            });
        }
        let last = last.min(self.len);
        let old_len = self.len;
        let needed = old_len - (last - first) + source.len();
        let kept = source.len().min(self.capacity() - first);
        let new_len = needed.min(self.capacity());
        let gap_end = first + kept;
        let tail_keep = new_len - gap_end;

        if gap_end > last {
            self.copy_backward(last, gap_end, tail_keep);
        } else if gap_end < last {
            self.copy_forward(last, gap_end, tail_keep);
        }
        self.buf[first..gap_end].copy_from_slice(&source[..kept]);
        if self.secure && new_len < old_len {
            self.buf[new_len..old_len].zeroize();
        }
        self.len = new_len;
        self.terminate();
        if needed > self.capacity() {
            self.flag_truncation(needed)?;
        }
        Ok(self.outcome())
    }

    /// Count form of [`replace`](Self::replace).
    pub fn replace_at(
        &mut self,
        position: usize,
        count: usize,
        source: &[T],
    ) -> Result<EditOutcome, EditError> {
        self.replace(position, position.saturating_add(count), source)
    }

    /// Appends one element. O(1).
    ///
    /// On a full sequence nothing is written; the truncated flag is set.
    pub fn push_back(&mut self, value: T) -> Result<EditOutcome, EditError> {
        if self.is_full() {
            self.flag_truncation(self.len + 1)?;
            return Ok(self.outcome());
        }
        self.buf[self.len] = value;
        self.len += 1;
        self.terminate();
        Ok(self.outcome())
    }

    /// Removes and returns the last element. O(1). `None` on empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let value = self.buf[self.len];
        if self.secure {
            self.buf[self.len].zeroize();
        }
        self.terminate();
        Some(value)
    }

    /// Empties the sequence. A full reset: clears the truncated flag too.
    pub fn clear(&mut self) {
        if self.secure {
            self.buf[..self.len].zeroize();
        }
        self.len = 0;
        self.truncated = false;
        self.terminate();
    }

    /// Shrinks to `new_len` if shorter. Never flags, never grows.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        if self.secure {
            self.buf[new_len..self.len].zeroize();
        }
        self.len = new_len;
        self.terminate();
    }

    /// Resizes to `new_len`, filling growth with `fill`. Clamps and flags
    /// when `new_len` exceeds the capacity.
    pub fn resize(&mut self, new_len: usize, fill: T) -> Result<EditOutcome, EditError> {
        let old_len = self.len;
        let kept = new_len.min(self.capacity());
        if kept > old_len {
            for slot in &mut self.buf[old_len..kept] {
                *slot = fill;
            }
        } else if self.secure && kept < old_len {
            self.buf[kept..old_len].zeroize();
        }
        self.len = kept;
        self.terminate();
        if new_len > self.capacity() {
            self.flag_truncation(new_len)?;
        }
        Ok(self.outcome())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Validates a source range against the live content. The end clamps to
    /// the length; a reversed range or an out-of-range start is an error.
    fn check_source_range(&self, range: &Range<usize>) -> Result<(usize, usize), EditError> {
        if range.start > range.end {
            return Err(EditError::IteratorOrder {
                first: range.start,
                last: range.end,
            });
        }
        if range.start > self.len {
            return Err(EditError::OutOfBounds {
                index: range.start,
                len: self.len,
            });
        }
        Ok((range.start, range.end.min(self.len)))
    }

    fn flag_truncation(&mut self, needed: usize) -> Result<(), EditError> {
        if !self.policy.truncation_checks {
            return Ok(());
        }
        self.truncated = true;
        if self.policy.fatal_truncation {
            return Err(EditError::Truncated {
                needed,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Writes the terminator at the current length and re-checks the
    /// invariants. Every mutation funnels through here.
    fn terminate(&mut self) {
        self.buf[self.len] = T::TERMINATOR;
        contracts::check_sequence(self);
    }

    #[inline]
    fn outcome(&self) -> EditOutcome {
        EditOutcome {
            len: self.len,
            truncated: self.truncated,
        }
    }

    /// Copies `count` elements from `src..` to `dst..`, low index first.
    /// Safe for overlap only when moving content leftward (`dst <= src`).
    fn copy_forward(&mut self, src: usize, dst: usize, count: usize) {
        debug_assert!(dst <= src, "forward copy must move content leftward");
        for i in 0..count {
            self.buf[dst + i] = self.buf[src + i];
        }
    }

    /// Copies `count` elements from `src..` to `dst..`, high index first.
    /// Safe for overlap only when moving content rightward (`dst >= src`).
    fn copy_backward(&mut self, src: usize, dst: usize, count: usize) {
        debug_assert!(dst >= src, "backward copy must move content rightward");
        let mut i = count;
        while i > 0 {
            i -= 1;
            self.buf[dst + i] = self.buf[src + i];
        }
    }
}

impl<const SLOTS: usize> BoundedSeq<u8, SLOTS> {
    /// `assign` for string sources.
    pub fn assign_str(&mut self, source: &str) -> Result<EditOutcome, EditError> {
        self.assign(source.as_bytes())
    }

    /// `append` for string sources.
    pub fn push_str(&mut self, source: &str) -> Result<EditOutcome, EditError> {
        self.append(source.as_bytes())
    }

    /// `insert` for string sources.
    pub fn insert_str(&mut self, position: usize, source: &str) -> Result<EditOutcome, EditError> {
        self.insert(position, source.as_bytes())
    }
}
