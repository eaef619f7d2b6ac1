// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A list with at least one element.

use alloc::vec::Vec;
use core::{fmt, iter, slice};

use smallvec::SmallVec;

use crate::PathError;

/// A vector that has at least 1 element.
///
/// Batched instructions carry their points in a `OneVec`, so an `M` or `L` with no coordinates
/// cannot be represented. The first element is stored inline, the rest in a [`SmallVec`] that
/// only spills to the heap after two more elements.
///
/// You can create a new `OneVec` either from the first element ([`single`][OneVec::single]) or
/// from the `TryFrom<Vec<T>>` implementation.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneVec<T> {
    first: T,
    rest: SmallVec<[T; 2]>,
}

impl<T> OneVec<T> {
    /// Create a `OneVec` from a single element.
    pub fn single(val: T) -> Self {
        Self {
            first: val,
            rest: SmallVec::new(),
        }
    }

    /// Create a `OneVec` from its first element and any number of following elements.
    pub fn from_single_rest(first: T, rest: impl IntoIterator<Item = T>) -> Self {
        Self {
            first,
            rest: rest.into_iter().collect(),
        }
    }

    /// Append an element.
    pub fn push(&mut self, val: T) {
        self.rest.push(val);
    }

    /// Iterate over the values in this `OneVec`.
    ///
    /// The iterator is statically guaranteed to produce at least one element.
    pub fn iter(&self) -> iter::Chain<iter::Once<&T>, slice::Iter<'_, T>> {
        self.into_iter()
    }

    /// The number of elements, which is never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Get the first element.
    pub fn first(&self) -> &T {
        &self.first
    }

    /// Get the last element.
    pub fn last(&self) -> &T {
        self.rest.last().unwrap_or(&self.first)
    }

    /// Get the element at the given index.
    ///
    /// If the index is `0`, then this is guaranteed to return `Some`.
    pub fn get(&self, idx: usize) -> Option<&T> {
        if idx == 0 {
            Some(&self.first)
        } else {
            self.rest.get(idx - 1)
        }
    }

    /// Splits the `OneVec` into the first element and the rest.
    pub fn split(&self) -> (&T, &[T]) {
        (&self.first, &self.rest)
    }

    /// Apply `f` to every element, keeping the order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> OneVec<U> {
        OneVec {
            first: f(&self.first),
            rest: self.rest.iter().map(f).collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OneVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> TryFrom<Vec<T>> for OneVec<T> {
    type Error = PathError;

    fn try_from(v: Vec<T>) -> Result<Self, Self::Error> {
        let mut iter = v.into_iter();
        let first = iter.next().ok_or(PathError::EmptyBatch)?;
        Ok(OneVec::from_single_rest(first, iter))
    }
}

impl<'a, T> IntoIterator for &'a OneVec<T> {
    type IntoIter = iter::Chain<iter::Once<&'a T>, slice::Iter<'a, T>>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(&self.first).chain(self.rest.iter())
    }
}

impl<T> IntoIterator for OneVec<T> {
    type IntoIter = iter::Chain<iter::Once<T>, smallvec::IntoIter<[T; 2]>>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.first).chain(self.rest)
    }
}
