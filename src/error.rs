// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors.

use core::fmt;

/// An error which can be returned when building path data.
///
/// Formatting and propagation never fail. The only fallible step is turning an arbitrary list
/// into a batch, which must contain at least one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    /// A batched instruction was given no elements.
    EmptyBatch,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::EmptyBatch => write!(f, "a batched instruction needs at least one element"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}
