// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Non-owning views over contiguous sub-sequences.
//!
//! A [`SeqView`] is the read-only currency of the crate: search, comparison,
//! and interop all speak views. It wraps a borrowed slice, so the two rules
//! that matter — a view must not outlive its storage, and a view is dead the
//! moment the storage mutates — are enforced by the borrow checker rather
//! than by convention.

use crate::buffer::BoundedSeq;
use crate::elem::Elem;
use crate::search;
use crate::types::EditError;
use std::cmp::Ordering;
use std::slice;

/// A borrowed `(begin, end)` window into a sequence or an external buffer.
///
/// Cheap to copy; carries no flags and no capacity, only the window.
#[derive(Debug, Clone, Copy)]
pub struct SeqView<'a, T: Elem> {
    items: &'a [T],
}

impl<'a, T: Elem> SeqView<'a, T> {
    /// Wraps an existing slice, e.g. an external buffer.
    pub fn new(items: &'a [T]) -> Self {
        SeqView { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.items.last()
    }

    /// Bidirectional iteration over the window.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }

    /// A narrower window `[first, last)` of this view.
    ///
    /// `last` clamps to the view length; a reversed pair is an
    /// [`EditError::IteratorOrder`], never silently corrected.
    pub fn subview(&self, first: usize, last: usize) -> Result<SeqView<'a, T>, EditError> {
        if first > last {
            return Err(EditError::IteratorOrder { first, last });
        }
        if first > self.items.len() {
            return Err(EditError::OutOfBounds {
                index: first,
                len: self.items.len(),
            });
        }
        let last = last.min(self.items.len());
        Ok(SeqView {
            items: &self.items[first..last],
        })
    }

    /// See [`search::find`](crate::find).
    pub fn find(&self, needle: &[T]) -> Option<usize> {
        search::find(self.items, needle)
    }

    /// See [`search::rfind`](crate::rfind).
    pub fn rfind(&self, needle: &[T]) -> Option<usize> {
        search::rfind(self.items, needle)
    }

    /// See [`search::compare_slices`](crate::compare_slices).
    pub fn compare(&self, other: &[T]) -> Ordering {
        search::compare_slices(self.items, other)
    }

    /// See [`search::starts_with`](crate::starts_with).
    pub fn starts_with(&self, needle: &[T]) -> bool {
        search::starts_with(self.items, needle)
    }

    /// See [`search::ends_with`](crate::ends_with).
    pub fn ends_with(&self, needle: &[T]) -> bool {
        search::ends_with(self.items, needle)
    }

    /// See [`search::contains`](crate::contains).
    pub fn contains(&self, needle: &[T]) -> bool {
        search::contains(self.items, needle)
    }
}

impl<'a, T: Elem, const SLOTS: usize> From<&'a BoundedSeq<T, SLOTS>> for SeqView<'a, T> {
    fn from(seq: &'a BoundedSeq<T, SLOTS>) -> Self {
        SeqView::new(seq.as_slice())
    }
}

impl<'a, T: Elem> From<&'a [T]> for SeqView<'a, T> {
    fn from(items: &'a [T]) -> Self {
        SeqView::new(items)
    }
}

impl<'a, T: Elem> IntoIterator for SeqView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, 'b, T: Elem> IntoIterator for &'b SeqView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Elem> PartialEq for SeqView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Elem> Eq for SeqView<'_, T> {}

impl<T: Elem> PartialEq<[T]> for SeqView<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: Elem> PartialOrd for SeqView<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Elem> Ord for SeqView<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        search::compare_slices(self.items, other.items)
    }
}

impl<T: Elem> std::ops::Index<usize> for SeqView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}
