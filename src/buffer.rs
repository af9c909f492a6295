// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bounded sequence descriptor: storage, length, capacity, flags.
//!
//! A [`BoundedSeq`] owns its backing array outright. There is no internal
//! pointer into the storage, only the array and an index, so a value that has
//! been relocated by a raw byte copy is already self-consistent; [`repair`]
//! only has to clamp the length and rewrite the terminator.
//!
//! # Invariants
//!
//! - `0 <= len <= capacity()` after every operation, including failed ones.
//! - `buf[len] == T::TERMINATOR` after every mutation. The terminator slot is
//!   why `SLOTS` is capacity **plus one**: a full sequence still terminates.
//! - Capacity never changes for the life of the value.
//!
//! [`repair`]: BoundedSeq::repair

use crate::elem::Elem;
use crate::search;
use crate::types::Policy;
use crate::view::SeqView;
use std::cmp::Ordering;
use std::fmt;
use zeroize::Zeroize;

/// A mutable, fixed-maximum-length sequence with no heap allocation.
///
/// `SLOTS` is the raw backing-array size: the usable capacity is `SLOTS - 1`,
/// with one slot reserved so the terminator fits even at full length. A
/// `BoundedSeq<u8, 12>` holds up to 11 bytes.
///
/// Two sticky flags ride along with the content:
///
/// - `truncated` — set when an edit clamped; stays set until
///   [`clear_truncated`](Self::clear_truncated) or a full reset
///   (`assign`/`clear`).
/// - `secure` — set once via [`set_secure`](Self::set_secure); shrinking edits
///   zero the vacated storage and drop zeroes the whole array. Propagates to
///   clones.
pub struct BoundedSeq<T: Elem, const SLOTS: usize> {
    pub(crate) buf: [T; SLOTS],
    pub(crate) len: usize,
    pub(crate) truncated: bool,
    pub(crate) secure: bool,
    pub(crate) policy: Policy,
}

/// A bounded UTF-8/byte string. `BoundedStr<12>` holds up to 11 bytes.
pub type BoundedStr<const SLOTS: usize> = BoundedSeq<u8, SLOTS>;

impl<T: Elem, const SLOTS: usize> BoundedSeq<T, SLOTS> {
    /// Build-time guard: a sequence needs at least the terminator slot.
    const SLOTS_NONZERO: () = assert!(SLOTS > 0, "SLOTS must be >= 1 (capacity + terminator)");

    /// Creates an empty sequence with the default (lenient) policy.
    pub fn new() -> Self {
        Self::with_policy(Policy::default())
    }

    /// Creates an empty sequence with an explicit policy.
    ///
    /// The policy is fixed for the life of the value, the same way the
    /// capacity is.
    pub fn with_policy(policy: Policy) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SLOTS_NONZERO;
        BoundedSeq {
            buf: [T::TERMINATOR; SLOTS],
            len: 0,
            truncated: false,
            secure: false,
            policy,
        }
    }

    /// Creates a sequence from a slice, clamping to capacity like `assign`.
    pub fn from_slice(source: &[T]) -> Self {
        let mut seq = Self::new();
        // Default policy is never fatal, so this cannot fail.
        let _ = seq.assign(source);
        seq
    }

    /// Live length. The terminator is not counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum live length, `SLOTS - 1`. Immutable for the life of the value.
    #[inline]
    pub fn capacity(&self) -> usize {
        SLOTS - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Remaining room: `capacity() - len()`.
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity() - self.len
    }

    /// The live content.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// The live content plus the terminator, for terminated-API interop.
    ///
    /// The returned slice always has `len() + 1` elements and its last element
    /// is `T::TERMINATOR`.
    #[inline]
    pub fn as_terminated(&self) -> &[T] {
        &self.buf[..=self.len]
    }

    /// Element at `index`, or `None` past the live length.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// First live element, `None` when empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last live element, `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// A non-owning view of the live content.
    ///
    /// The view borrows the sequence, so the compiler retires it before the
    /// next mutating call can run.
    #[inline]
    pub fn view(&self) -> SeqView<'_, T> {
        SeqView::new(self.as_slice())
    }

    /// The policy this sequence was constructed with.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Whether any edit since the last full reset clamped.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Clears the sticky truncated flag.
    pub fn clear_truncated(&mut self) {
        self.truncated = false;
    }

    /// Whether secure mode is active.
    #[inline]
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Enables secure mode for the rest of this value's life.
    ///
    /// One-way: there is no way to turn it back off. A no-op when the policy
    /// was built with `secure_clear: false`.
    pub fn set_secure(&mut self) {
        if self.policy.secure_clear {
            self.secure = true;
        }
    }

    /// Re-establishes internal invariants after the value was reconstituted
    /// from raw bytes (e.g. read back from a memory-mapped region).
    ///
    /// The storage is an owned array, so there is no internal pointer to
    /// re-bind; a stale length and a missing terminator are the only damage a
    /// byte-level copy can cause, and both are fixed here.
    pub fn repair(&mut self) {
        if self.len > self.capacity() {
            self.len = self.capacity();
        }
        self.buf[self.len] = T::TERMINATOR;
    }
}

impl<const SLOTS: usize> BoundedSeq<u8, SLOTS> {
    /// Creates a byte string from `&str`, clamping to capacity like `assign`.
    ///
    /// "Lossy" because an over-long source is cut at the capacity boundary,
    /// which may split a multi-byte scalar; the truncated flag records it
    /// either way.
    pub fn from_str_lossy(source: &str) -> Self {
        Self::from_slice(source.as_bytes())
    }

    /// The live content as `&str`, or `None` if it is not valid UTF-8
    /// (possible when a clamped edit split a multi-byte scalar).
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_slice()).ok()
    }
}

impl<T: Elem, const SLOTS: usize> Default for BoundedSeq<T, SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}

// Clone copies only the live prefix. The clone's spare slots start zeroed no
// matter what the source's spare slots held, which keeps secure-mode clones
// from leaking previously-erased content.
impl<T: Elem, const SLOTS: usize> Clone for BoundedSeq<T, SLOTS> {
    fn clone(&self) -> Self {
        let mut out = BoundedSeq {
            buf: [T::TERMINATOR; SLOTS],
            len: self.len,
            truncated: self.truncated,
            secure: self.secure,
            policy: self.policy,
        };
        out.buf[..self.len].copy_from_slice(&self.buf[..self.len]);
        out
    }
}

impl<T: Elem, const SLOTS: usize> Drop for BoundedSeq<T, SLOTS> {
    fn drop(&mut self) {
        if self.secure {
            self.buf.zeroize();
        }
    }
}

impl<T: Elem + fmt::Debug, const SLOTS: usize> fmt::Debug for BoundedSeq<T, SLOTS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedSeq")
            .field("content", &self.as_slice())
            .field("capacity", &self.capacity())
            .field("truncated", &self.truncated)
            .field("secure", &self.secure)
            .finish()
    }
}

// Equality and ordering go by live content and ignore flags, so sequences of
// different capacities compare naturally.
impl<T: Elem, const A: usize, const B: usize> PartialEq<BoundedSeq<T, B>> for BoundedSeq<T, A> {
    fn eq(&self, other: &BoundedSeq<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Elem, const SLOTS: usize> Eq for BoundedSeq<T, SLOTS> {}

impl<T: Elem, const A: usize, const B: usize> PartialOrd<BoundedSeq<T, B>> for BoundedSeq<T, A> {
    fn partial_cmp(&self, other: &BoundedSeq<T, B>) -> Option<Ordering> {
        Some(search::compare_slices(self.as_slice(), other.as_slice()))
    }
}

impl<T: Elem, const SLOTS: usize> Ord for BoundedSeq<T, SLOTS> {
    fn cmp(&self, other: &Self) -> Ordering {
        search::compare_slices(self.as_slice(), other.as_slice())
    }
}

impl<T: Elem, const SLOTS: usize> PartialEq<[T]> for BoundedSeq<T, SLOTS> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Elem, const SLOTS: usize> PartialEq<&[T]> for BoundedSeq<T, SLOTS> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<const SLOTS: usize> PartialEq<str> for BoundedSeq<u8, SLOTS> {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<const SLOTS: usize> PartialEq<&str> for BoundedSeq<u8, SLOTS> {
    fn eq(&self, other: &&str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

/// Indexed access into the live content. Panics past `len()`, like any slice;
/// use [`BoundedSeq::get`] for checked access.
impl<T: Elem, const SLOTS: usize> std::ops::Index<usize> for BoundedSeq<T, SLOTS> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}
