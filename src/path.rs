// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-paths and paths.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use crate::log::{debug, trace};
use crate::{DrawState, Instruction, Point, Precision, Vec2};

/// The move that begins a [`Subpath`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartingPoint {
    /// `M`: start at the given point.
    MoveTo(Point),
    /// `m`: start at the given offset from where the pen is.
    MoveToRel(Point),
}

impl StartingPoint {
    /// The move instruction this starting point stands for.
    pub fn to_instruction(self) -> Instruction {
        match self {
            StartingPoint::MoveTo(p) => Instruction::MoveTo(p),
            StartingPoint::MoveToRel(d) => Instruction::MoveToRel(d),
        }
    }

    /// Where the sub-path starts when the pen is at `current`.
    pub fn resolve(self, current: Point) -> Point {
        match self {
            StartingPoint::MoveTo(p) => p,
            StartingPoint::MoveToRel(d) => current + d.to_vec2(),
        }
    }
}

/// A starting move, the instructions drawn from there, and whether to close the shape.
///
/// The starting move is kept apart from the body, and the closing `Z` is never stored: it is
/// added once, at the end, by [`to_instructions`](Subpath::to_instructions) when `closed` is
/// set. A [`ClosePath`](Instruction::ClosePath) found in the body is skipped when the sub-path
/// is written or followed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subpath {
    /// The move that begins the sub-path.
    pub start: StartingPoint,
    /// Whether a `Z` is drawn after the body.
    pub closed: bool,
    /// The instructions after the starting move. `Z` here is ignored, use `closed`.
    pub body: Vec<Instruction>,
}

impl Subpath {
    /// Create a new sub-path.
    pub fn new(start: StartingPoint, closed: bool, body: Vec<Instruction>) -> Self {
        Subpath {
            start,
            closed,
            body,
        }
    }

    /// A sub-path that is left open.
    pub fn open(start: StartingPoint, body: Vec<Instruction>) -> Self {
        Subpath::new(start, false, body)
    }

    /// A sub-path that ends with `Z`.
    pub fn closed(start: StartingPoint, body: Vec<Instruction>) -> Self {
        Subpath::new(start, true, body)
    }

    /// The full instruction list: the starting move, the body, then `Z` if the sub-path is
    /// closed.
    ///
    /// ```
    /// use pathdata::{Instruction, StartingPoint, Subpath};
    ///
    /// let sub = Subpath::closed(StartingPoint::MoveTo((0.0, 0.0).into()), vec![Instruction::horiz(4.0)]);
    /// assert_eq!(
    ///     sub.to_instructions(),
    ///     [Instruction::move_to((0.0, 0.0)), Instruction::horiz(4.0), Instruction::close()]
    /// );
    /// ```
    pub fn to_instructions(&self) -> Vec<Instruction> {
        let mut instructions = Vec::with_capacity(self.body.len() + 2);
        instructions.push(self.start.to_instruction());
        instructions.extend(self.drawn_body().cloned());
        if self.closed {
            instructions.push(Instruction::ClosePath);
        }
        instructions
    }

    /// Follow the pen through the sub-path.
    ///
    /// The starting move is resolved against `state.current` and becomes the new `start`, so a
    /// closing `Z` returns there.
    #[must_use]
    pub fn propagate(&self, state: DrawState) -> DrawState {
        let moved = state.propagate(&self.start.to_instruction());
        let state = DrawState {
            start: moved.current,
            ..moved
        };
        trace!(start = ?state.start, "sub-path");
        let state = state.propagate_all(self.drawn_body());
        if self.closed {
            state.propagate(&Instruction::ClosePath)
        } else {
            state
        }
    }

    /// Shift every absolute coordinate by `offset`, see [`Instruction::translate`].
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> Subpath {
        let start = match self.start {
            StartingPoint::MoveTo(p) => StartingPoint::MoveTo(p + offset),
            rel @ StartingPoint::MoveToRel(_) => rel,
        };
        Subpath {
            start,
            closed: self.closed,
            body: self.body.iter().map(|inst| inst.translate(offset)).collect(),
        }
    }

    /// Display the sub-path with the given precision.
    pub fn display(&self, precision: Precision) -> DisplaySubpath<'_> {
        DisplaySubpath {
            subpath: self,
            precision,
        }
    }

    /// The body without any stray `Z`.
    fn drawn_body(&self) -> impl Iterator<Item = &Instruction> {
        self.body
            .iter()
            .filter(|inst| !matches!(inst, Instruction::ClosePath))
    }
}

/// A [`Display`](fmt::Display) adaptor for a [`Subpath`], see [`Subpath::display`].
#[derive(Clone, Copy, Debug)]
pub struct DisplaySubpath<'a> {
    subpath: &'a Subpath,
    precision: Precision,
}

impl fmt::Display for DisplaySubpath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subpath = self.subpath;
        write!(f, "{}", subpath.start.to_instruction().display(self.precision))?;
        for inst in subpath.drawn_body() {
            write!(f, " {}", inst.display(self.precision))?;
        }
        if subpath.closed {
            f.write_str(" Z")?;
        }
        Ok(())
    }
}

impl fmt::Display for Subpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(Precision::Full), f)
    }
}

/// An SVG path: sub-paths drawn in order.
///
/// Sub-paths are written one after the other with a single space between them. Each one starts
/// with its own move, which is all the separation the path syntax needs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    subpaths: Vec<Subpath>,
}

impl Path {
    /// Create a new, empty path.
    pub fn new() -> Self {
        Path::default()
    }

    /// Create a path from sub-paths, in drawing order.
    pub fn from_subpaths(subpaths: Vec<Subpath>) -> Self {
        Path { subpaths }
    }

    /// Append a sub-path, drawn after (and so on top of) the existing ones.
    pub fn push(&mut self, subpath: Subpath) {
        self.subpaths.push(subpath);
    }

    /// The sub-paths, in drawing order.
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    /// Every instruction of every sub-path, in drawing order.
    pub fn to_instructions(&self) -> Vec<Instruction> {
        self.subpaths
            .iter()
            .flat_map(Subpath::to_instructions)
            .collect()
    }

    /// The path data, with numbers written under `precision`.
    ///
    /// The [`Display`](fmt::Display) implementation of `Path` uses [`Precision::Full`].
    ///
    /// ```
    /// use pathdata::{Instruction, Path, Precision, StartingPoint, Subpath};
    ///
    /// let path = Path::from_subpaths(vec![
    ///     Subpath::open(StartingPoint::MoveTo((0.5, 0.5).into()), vec![Instruction::line_to((1.0, 1.0))]),
    ///     Subpath::closed(StartingPoint::MoveToRel((2.0, 0.0).into()), vec![Instruction::vert_rel(2.0)]),
    /// ]);
    /// assert_eq!(path.to_string_with(Precision::Decimals(0)), "M1,1 L1,1 m2,0 v2 Z");
    /// ```
    pub fn to_string_with(&self, precision: Precision) -> String {
        self.display(precision).to_string()
    }

    /// The path data as a `d` attribute, ready to be put inside a `<path>` element.
    ///
    /// ```
    /// use pathdata::{Instruction, Path, Precision, StartingPoint, Subpath};
    ///
    /// let path: Path = [Subpath::open(StartingPoint::MoveTo((1.0, 2.0).into()), vec![Instruction::horiz(3.0)])]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(path.to_attribute(Precision::Full), r#"d="M1,2 H3""#);
    /// ```
    pub fn to_attribute(&self, precision: Precision) -> String {
        format!("d=\"{}\"", self.display(precision))
    }

    /// Display the path with the given precision.
    pub fn display(&self, precision: Precision) -> DisplayPath<'_> {
        DisplayPath {
            path: self,
            precision,
        }
    }

    /// Write out the text representation of this path to anything implementing `io::Write`.
    ///
    /// Note that this call will produce a lot of write calls under the hood, so it is
    /// recommended to use a buffer (e.g. [`BufWriter`][std::io::BufWriter]) if your writer's
    /// [`write`][std::io::Write::write] calls are expensive.
    #[cfg(feature = "std")]
    pub fn write_to(&self, precision: Precision, mut w: impl std::io::Write) -> std::io::Result<()> {
        write!(w, "{}", self.display(precision))
    }

    /// Follow the pen through every sub-path, starting from `state`.
    #[must_use]
    pub fn propagate(&self, state: DrawState) -> DrawState {
        self.subpaths
            .iter()
            .fold(state, |state, subpath| subpath.propagate(state))
    }

    /// Where the pen is after drawing the whole path from the origin.
    ///
    /// ```
    /// use pathdata::{Instruction, Path, Point, StartingPoint, Subpath};
    ///
    /// let path = Path::from_subpaths(vec![Subpath::open(
    ///     StartingPoint::MoveTo((1.0, 1.0).into()),
    ///     vec![Instruction::line_to_rel((2.0, 0.0))],
    /// )]);
    /// assert_eq!(path.end_state().current, Point::new(3.0, 1.0));
    /// ```
    pub fn end_state(&self) -> DrawState {
        self.propagate(DrawState::default())
    }

    /// Shift every absolute coordinate by `offset`, see [`Instruction::translate`].
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> Path {
        Path {
            subpaths: self.subpaths.iter().map(|s| s.translate(offset)).collect(),
        }
    }

    /// Move the path so that, drawn right after a path whose pen ended at `state`, it starts
    /// exactly where that pen is.
    ///
    /// The shape is moved as a whole: absolute coordinates are shifted, and a relative first
    /// starting point is rewritten so that it lands on `state.current`.
    ///
    /// ```
    /// use pathdata::{DrawState, Instruction, Path, Point, StartingPoint, Subpath};
    ///
    /// let tail = Path::from_subpaths(vec![Subpath::open(
    ///     StartingPoint::MoveTo((0.0, 0.0).into()),
    ///     vec![Instruction::line_to((1.0, 0.0))],
    /// )]);
    /// let moved = tail.continue_from(&DrawState::at(Point::new(5.0, 5.0)));
    /// assert_eq!(moved.to_string(), "M5,5 L6,5");
    /// ```
    #[must_use]
    pub fn continue_from(&self, state: &DrawState) -> Path {
        let Some((first, rest)) = self.subpaths.split_first() else {
            return self.clone();
        };
        let offset = state.current - first.start.resolve(state.current);
        debug!(?offset, to = ?state.current, "continuing path");
        let mut moved = first.translate(offset);
        // Set the start directly, the shifted coordinates may be off by a rounding error.
        moved.start = match first.start {
            StartingPoint::MoveTo(_) => StartingPoint::MoveTo(state.current),
            StartingPoint::MoveToRel(_) => StartingPoint::MoveToRel(Point::ZERO),
        };
        let mut subpaths = Vec::with_capacity(self.subpaths.len());
        subpaths.push(moved);
        subpaths.extend(rest.iter().map(|s| s.translate(offset)));
        Path { subpaths }
    }

    /// Append `other`, moved so that it starts where this path's pen ends.
    pub fn append_continuing(&mut self, other: &Path) {
        let tail = other.continue_from(&self.end_state());
        self.subpaths.extend(tail.subpaths);
    }
}

/// A [`Display`](fmt::Display) adaptor for a [`Path`], see [`Path::display`].
#[derive(Clone, Copy, Debug)]
pub struct DisplayPath<'a> {
    path: &'a Path,
    precision: Precision,
}

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, subpath) in self.path.subpaths.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", subpath.display(self.precision))?;
        }
        Ok(())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(Precision::Full), f)
    }
}

impl Deref for Path {
    type Target = [Subpath];

    fn deref(&self) -> &[Subpath] {
        &self.subpaths
    }
}

impl From<Vec<Subpath>> for Path {
    fn from(subpaths: Vec<Subpath>) -> Self {
        Path::from_subpaths(subpaths)
    }
}

impl FromIterator<Subpath> for Path {
    fn from_iter<T: IntoIterator<Item = Subpath>>(iter: T) -> Self {
        Path {
            subpaths: iter.into_iter().collect(),
        }
    }
}

impl Extend<Subpath> for Path {
    fn extend<T: IntoIterator<Item = Subpath>>(&mut self, iter: T) {
        self.subpaths.extend(iter);
    }
}
