// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity, no-allocation mutable sequences.
//!
//! This crate provides [`BoundedSeq`]: a bounded buffer that behaves like a
//! variable-length sequence but never grows past a capacity fixed at compile
//! time. Every editing operation (assign, insert, erase, append, replace) is
//! implemented in place with overlap-safe shifting, and edits that would
//! overflow the capacity clamp and record a sticky `truncated` flag instead of
//! allocating.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   elem.rs   │────▶│  buffer.rs   │────▶│   edit.rs    │
//! │ (Elem trait,│     │ (BoundedSeq  │     │ (insert/erase│
//! │  terminator)│     │  descriptor) │     │  /replace)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              view.rs + search.rs                    │
//! │  (SeqView borrows, find/rfind/compare — read-only,  │
//! │   shared by sequences, views, and raw slices)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Module overview
//!
//! | Module      | Provides                        | Key invariant              |
//! |-------------|---------------------------------|----------------------------|
//! | `elem`      | Element contract, terminator    | terminator is the zero     |
//! | `buffer`    | `BoundedSeq` descriptor         | `len <= capacity` always   |
//! | `edit`      | The mutable editing algebra     | no write past the slots    |
//! | `search`    | find/rfind/compare free fns     | pure, never mutates        |
//! | `view`      | `SeqView` non-owning ranges     | borrow ends at mutation    |
//! | `types`     | `Policy`, `EditError`           | errors never corrupt `len` |
//! | `contracts` | Debug-build invariant checks    | zero cost in release       |
//!
//! # Usage
//!
//! ```
//! use stackseq::BoundedStr;
//!
//! // 12 slots = capacity 11 + one slot reserved for the terminator.
//! let mut s = BoundedStr::<12>::from_str_lossy("Hello World");
//! assert_eq!(s.len(), 11);
//! assert!(!s.is_truncated());
//!
//! s.push_str(" There").unwrap();
//! assert_eq!(s, "Hello World");   // clamped at capacity
//! assert!(s.is_truncated());      // and flagged
//!
//! assert_eq!(s.find(b"World"), Some(6));
//! ```

// Module declarations
mod buffer;
mod edit;
mod elem;
mod search;
mod serde_impls;
mod types;
mod view;

pub mod contracts;
pub mod testing;

// Re-exports for public API
pub use buffer::{BoundedSeq, BoundedStr};
pub use elem::Elem;
pub use search::{
    compare_slices, compare_slices_by, contains, ends_with, find, find_first_not_of,
    find_first_of, find_from, find_last_not_of, find_last_of, rfind, rfind_from, starts_with,
};
pub use types::{EditError, EditOutcome, Policy};
pub use view::SeqView;
