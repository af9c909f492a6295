// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring search and lexicographic comparison.
//!
//! Everything in this module is read-only and borrows at most two slices, so
//! it is shared verbatim by [`BoundedSeq`], [`SeqView`], and raw slices from
//! external buffers. `Option<usize>` is the no-match result throughout; there
//! is no sentinel index to check against.
//!
//! The scans are plain linear window scans. Content here is short by
//! construction (it lives in a fixed stack buffer), so an accelerated
//! substring algorithm would be table setup cost with nothing to amortize it
//! over.
//!
//! [`BoundedSeq`]: crate::BoundedSeq
//! [`SeqView`]: crate::SeqView

use crate::buffer::BoundedSeq;
use crate::elem::Elem;
use std::cmp::Ordering;

// ============================================================================
// FREE FUNCTIONS OVER SLICES
// ============================================================================

/// First occurrence of `needle` in `haystack`.
///
/// An empty needle matches trivially at 0; a needle longer than the haystack
/// never matches.
pub fn find<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    find_from(haystack, needle, 0)
}

/// First occurrence of `needle` starting at or after `position`.
pub fn find_from<T: PartialEq>(haystack: &[T], needle: &[T], position: usize) -> Option<usize> {
    if position > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(position);
    }
    if needle.len() > haystack.len() - position {
        return None;
    }
    (position..=haystack.len() - needle.len())
        .find(|&at| &haystack[at..at + needle.len()] == needle)
}

/// Last occurrence of `needle` in `haystack`.
pub fn rfind<T: PartialEq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    rfind_from(haystack, needle, usize::MAX)
}

/// Last occurrence of `needle` starting at or before `position`.
pub fn rfind_from<T: PartialEq>(haystack: &[T], needle: &[T], position: usize) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    let last_start = (haystack.len() - needle.len()).min(position);
    if needle.is_empty() {
        return Some(last_start);
    }
    (0..=last_start)
        .rev()
        .find(|&at| &haystack[at..at + needle.len()] == needle)
}

/// Index of the first element that is a member of `set`.
pub fn find_first_of<T: PartialEq>(haystack: &[T], set: &[T]) -> Option<usize> {
    haystack.iter().position(|item| set.contains(item))
}

/// Index of the first element that is *not* a member of `set`.
pub fn find_first_not_of<T: PartialEq>(haystack: &[T], set: &[T]) -> Option<usize> {
    haystack.iter().position(|item| !set.contains(item))
}

/// Index of the last element that is a member of `set`.
pub fn find_last_of<T: PartialEq>(haystack: &[T], set: &[T]) -> Option<usize> {
    haystack.iter().rposition(|item| set.contains(item))
}

/// Index of the last element that is *not* a member of `set`.
pub fn find_last_not_of<T: PartialEq>(haystack: &[T], set: &[T]) -> Option<usize> {
    haystack.iter().rposition(|item| !set.contains(item))
}

/// Three-way lexicographic comparison by element.
///
/// A shorter sequence that is a prefix of the longer one compares as `Less`;
/// the result is an [`Ordering`], never an arbitrary magnitude.
pub fn compare_slices<T: Ord>(a: &[T], b: &[T]) -> Ordering {
    compare_slices_by(a, b, Ord::cmp)
}

/// [`compare_slices`] with an externally supplied comparator.
pub fn compare_slices_by<T, F>(a: &[T], b: &[T], cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    let common = a.len().min(b.len());
    for i in 0..common {
        match cmp(&a[i], &b[i]) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}

/// Whether `haystack` begins with `needle`. Empty needles match trivially.
pub fn starts_with<T: Ord>(haystack: &[T], needle: &[T]) -> bool {
    needle.len() <= haystack.len()
        && compare_slices(&haystack[..needle.len()], needle) == Ordering::Equal
}

/// Whether `haystack` ends with `needle`. Empty needles match trivially.
pub fn ends_with<T: Ord>(haystack: &[T], needle: &[T]) -> bool {
    needle.len() <= haystack.len()
        && compare_slices(&haystack[haystack.len() - needle.len()..], needle) == Ordering::Equal
}

/// Whether `needle` occurs anywhere in `haystack`.
pub fn contains<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    find(haystack, needle).is_some()
}

// ============================================================================
// METHOD SURFACE ON BoundedSeq
// ============================================================================

impl<T: Elem, const SLOTS: usize> BoundedSeq<T, SLOTS> {
    /// See [`find`].
    pub fn find(&self, needle: &[T]) -> Option<usize> {
        find(self.as_slice(), needle)
    }

    /// See [`find_from`].
    pub fn find_from(&self, needle: &[T], position: usize) -> Option<usize> {
        find_from(self.as_slice(), needle, position)
    }

    /// See [`rfind`].
    pub fn rfind(&self, needle: &[T]) -> Option<usize> {
        rfind(self.as_slice(), needle)
    }

    /// See [`rfind_from`].
    pub fn rfind_from(&self, needle: &[T], position: usize) -> Option<usize> {
        rfind_from(self.as_slice(), needle, position)
    }

    /// See [`find_first_of`].
    pub fn find_first_of(&self, set: &[T]) -> Option<usize> {
        find_first_of(self.as_slice(), set)
    }

    /// See [`find_first_not_of`].
    pub fn find_first_not_of(&self, set: &[T]) -> Option<usize> {
        find_first_not_of(self.as_slice(), set)
    }

    /// See [`find_last_of`].
    pub fn find_last_of(&self, set: &[T]) -> Option<usize> {
        find_last_of(self.as_slice(), set)
    }

    /// See [`find_last_not_of`].
    pub fn find_last_not_of(&self, set: &[T]) -> Option<usize> {
        find_last_not_of(self.as_slice(), set)
    }

    /// See [`compare_slices`].
    pub fn compare(&self, other: &[T]) -> Ordering {
        compare_slices(self.as_slice(), other)
    }

    /// See [`compare_slices_by`].
    pub fn compare_by<F>(&self, other: &[T], cmp: F) -> Ordering
    where
        F: Fn(&T, &T) -> Ordering,
    {
        compare_slices_by(self.as_slice(), other, cmp)
    }

    /// See [`starts_with`].
    pub fn starts_with(&self, needle: &[T]) -> bool {
        starts_with(self.as_slice(), needle)
    }

    /// See [`ends_with`].
    pub fn ends_with(&self, needle: &[T]) -> bool {
        ends_with(self.as_slice(), needle)
    }

    /// See [`contains`].
    pub fn contains(&self, needle: &[T]) -> bool {
        contains(self.as_slice(), needle)
    }
}
