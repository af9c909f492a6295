// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serde support for [`BoundedSeq`].
//!
//! Serialization emits only the live prefix, never the spare slots — leaking
//! whatever bytes happen to sit past the length would defeat secure mode and
//! bloat every payload. Deserialization rebuilds with `assign` semantics: an
//! over-long payload clamps at capacity and sets the truncated flag instead
//! of failing, so reading data written by a larger-capacity peer degrades the
//! same way every other edit does.

use crate::buffer::BoundedSeq;
use crate::elem::Elem;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T, const SLOTS: usize> Serialize for BoundedSeq<T, SLOTS>
where
    T: Elem + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.as_slice() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct BoundedSeqVisitor<T, const SLOTS: usize>(PhantomData<T>);

impl<'de, T, const SLOTS: usize> Visitor<'de> for BoundedSeqVisitor<T, SLOTS>
where
    T: Elem + Deserialize<'de>,
{
    type Value = BoundedSeq<T, SLOTS>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of at most {} elements", SLOTS - 1)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut seq = BoundedSeq::new();
        while let Some(value) = access.next_element::<T>()? {
            // Default policy is never fatal; overflow clamps and flags.
            let _ = seq.push_back(value);
        }
        Ok(seq)
    }
}

impl<'de, T, const SLOTS: usize> Deserialize<'de> for BoundedSeq<T, SLOTS>
where
    T: Elem + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(BoundedSeqVisitor(PhantomData))
    }
}
