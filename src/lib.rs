// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed SVG path instructions.
//!
//! The pathdata library lets you describe a vector drawing as a sequence of typed
//! [`Instruction`]s instead of hand-writing path strings, and turns that sequence into the exact
//! text a path renderer expects in the `d` attribute of an SVG `<path>` element. It also
//! simulates where a virtual pen ends up after each instruction ([`DrawState`]), which is what
//! you need to chain one path onto the end of another.
//!
//! # Examples
//!
//! Building and formatting a path:
//! ```
//! use pathdata::{Instruction, Path, Precision, StartingPoint, Subpath};
//!
//! let triangle = Subpath::closed(
//!     StartingPoint::MoveTo((0.0, 0.0).into()),
//!     vec![
//!         Instruction::line_to((10.0, 0.0)),
//!         Instruction::line_to_rel((-5.0, 8.5)),
//!     ],
//! );
//! let path: Path = [triangle].into_iter().collect();
//! assert_eq!(path.to_string(), "M0,0 L10,0 l-5,8.5 Z");
//! assert_eq!(
//!     path.to_attribute(Precision::Decimals(0)),
//!     r#"d="M0,0 L10,0 l-5,9 Z""#
//! );
//! ```
//!
//! Following the pen:
//! ```
//! use pathdata::{propagate, DrawState, Instruction, Point};
//!
//! let state = [
//!     Instruction::move_to((1.0, 1.0)),
//!     Instruction::horiz_rel(4.0),
//!     Instruction::vert(3.0),
//! ]
//! .iter()
//! .fold(DrawState::default(), |state, inst| propagate(inst, state));
//! assert_eq!(state.current, Point::new(5.0, 3.0));
//! ```
//!
//! # Number formatting
//!
//! Numbers are written with Rust's shortest round-trip `f64` formatting, which never uses
//! exponent notation and drops a zero fractional part (`20.0` is written `20`). A
//! [`Precision`] limits the number of decimal places. See [`Precision`] for the handling of
//! negative zero and non-finite values.
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate regardless.
//!
//! The `tracing` feature emits debug events while assembling and composing paths.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::bool_to_int_with_if)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pathdata requires either the `std` or `libm` feature");

extern crate alloc;

mod common;
mod error;
mod format;
mod instruction;
mod log;
mod number;
mod onevec;
pub mod optimize;
mod path;
mod point;
mod state;
mod vec2;

pub use crate::error::*;
pub use crate::format::*;
pub use crate::instruction::*;
pub use crate::number::*;
pub use crate::onevec::*;
pub use crate::optimize::merge_adjacent_moves;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::state::*;
pub use crate::vec2::*;
