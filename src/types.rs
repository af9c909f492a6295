// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Policy configuration and the error taxonomy.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **No error path corrupts the sequence**: whatever an operation returns,
//!   `len <= capacity` holds afterwards and the terminator is in place.
//!
//! - **Truncation is state first, error second**: an overflowing edit clamps,
//!   records the sticky flag, and only *then* consults
//!   [`Policy::fatal_truncation`]. A fatal-policy error therefore reports a
//!   mutation that has already been committed in clamped form. Callers that
//!   need all-or-nothing edits must check [`BoundedSeq::available`] up front.
//!
//! [`BoundedSeq::available`]: crate::BoundedSeq::available

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime configuration for a bounded sequence, chosen at construction.
///
/// The three switches are independent:
///
/// | Field               | Off means                                          |
/// |---------------------|----------------------------------------------------|
/// | `truncation_checks` | overflow still clamps, but is never recorded       |
/// | `fatal_truncation`  | overflow clamps and flags, call returns `Ok`       |
/// | `secure_clear`      | `set_secure` is a no-op, nothing is ever wiped     |
///
/// `fatal_truncation` has no effect while `truncation_checks` is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Record overflowing edits in the sticky truncated flag.
    pub truncation_checks: bool,
    /// Escalate a recorded truncation to an [`EditError::Truncated`] after the
    /// clamped mutation has been committed.
    pub fatal_truncation: bool,
    /// Permit secure mode: zero vacated storage on shrink and the whole
    /// backing array on drop.
    pub secure_clear: bool,
}

impl Policy {
    /// The default policy: clamp and flag, never fail, wiping available.
    pub const fn lenient() -> Self {
        Policy {
            truncation_checks: true,
            fatal_truncation: false,
            secure_clear: true,
        }
    }

    /// Like [`Policy::lenient`], but overflowing edits return an error after
    /// committing the clamped content.
    pub const fn strict() -> Self {
        Policy {
            truncation_checks: true,
            fatal_truncation: true,
            secure_clear: true,
        }
    }

    /// No truncation bookkeeping at all. Edits still clamp (overflow is
    /// structurally impossible), but `is_truncated` stays false forever.
    pub const fn unchecked() -> Self {
        Policy {
            truncation_checks: false,
            fatal_truncation: false,
            secure_clear: true,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::lenient()
    }
}

/// The length and truncation state observed right after a mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOutcome {
    /// Live length after the edit.
    pub len: usize,
    /// Sticky truncated flag after the edit.
    pub truncated: bool,
}

/// Error type for editing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// A position beyond the current length was used.
    OutOfBounds { index: usize, len: usize },
    /// A `(first, last)` range where `first` follows `last`. Never silently
    /// corrected.
    IteratorOrder { first: usize, last: usize },
    /// An edit needed more room than the capacity, under a fatal policy.
    /// The destination holds the clamped result.
    Truncated { needed: usize, capacity: usize },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::OutOfBounds { index, len } => {
                write!(f, "position {} out of bounds for length {}", index, len)
            }
            EditError::IteratorOrder { first, last } => {
                write!(f, "reversed range: first {} follows last {}", first, last)
            }
            EditError::Truncated { needed, capacity } => {
                write!(
                    f,
                    "edit needed {} elements but capacity is {}; clamped content committed",
                    needed, capacity
                )
            }
        }
    }
}

impl std::error::Error for EditError {}
