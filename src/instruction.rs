// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path instruction model.

use alloc::vec::Vec;

use crate::{OneVec, Point, Vec2};

/// A single drawing command of SVG path data.
///
/// The set of variants is closed. The formatter and the [propagator](crate::propagate) both
/// match on it exhaustively.
///
/// # Absolute and relative variants
///
/// Every family has an absolute variant, written with an uppercase command letter, and a
/// relative one (`...Rel`), written in lowercase. The coordinates of a relative variant are
/// offsets from the pen position before the instruction.
///
/// # Batched variants
///
/// The `...Many` variants write several segments under one command letter. A batched move or
/// line holds a non-empty list of points. A batched curve holds one full curve followed by any
/// number of [`CurveContinuation`]s, which is the only place continuations can appear.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// `M`: Start a new sub-path at the given point.
    MoveTo(Point),
    /// `m`: Start a new sub-path, offset from the current point.
    MoveToRel(Point),
    /// `M` with several points.
    MoveToMany(OneVec<Point>),
    /// `m` with several offsets, each one relative to the point reached by the previous one.
    MoveToManyRel(OneVec<Point>),
    /// `L`: Draw a line from the current point to the given point.
    LineTo(Point),
    /// `l`: Draw a line from the current point by the given offset.
    LineToRel(Point),
    /// `L` with several points.
    LineToMany(OneVec<Point>),
    /// `l` with several offsets, each one relative to the point reached by the previous one.
    LineToManyRel(OneVec<Point>),
    /// `H`: Draw a horizontal line to the given x coordinate.
    Horiz(f64),
    /// `h`: Draw a horizontal line of the given signed length.
    HorizRel(f64),
    /// `V`: Draw a vertical line to the given y coordinate.
    Vert(f64),
    /// `v`: Draw a vertical line of the given signed length.
    VertRel(f64),
    /// `A`: Draw an elliptical arc to [`ArcTo::to`].
    ArcTo(ArcTo),
    /// `a`: Draw an elliptical arc, with [`ArcTo::to`] taken as an offset.
    ArcToRel(ArcTo),
    /// `Q`: Draw a quadratic Bézier curve.
    QuadTo(QuadTo),
    /// `q`: Draw a quadratic Bézier curve, with both points taken as offsets.
    QuadToRel(QuadTo),
    /// `Q` followed by continuations.
    QuadToMany(QuadTo, Vec<CurveContinuation>),
    /// `q` followed by continuations.
    QuadToManyRel(QuadTo, Vec<CurveContinuation>),
    /// `C`: Draw a cubic Bézier curve.
    CubicTo(CubicTo),
    /// `c`: Draw a cubic Bézier curve, with all three points taken as offsets.
    CubicToRel(CubicTo),
    /// `C` followed by continuations.
    CubicToMany(CubicTo, Vec<CurveContinuation>),
    /// `c` followed by continuations.
    CubicToManyRel(CubicTo, Vec<CurveContinuation>),
    /// `Z`: Close the current sub-path by drawing back to its starting point.
    ClosePath,
}

/// A smooth curve segment that follows a curve inside a batched curve instruction.
///
/// The renderer infers the first control point by reflecting the previous segment's last
/// control point through the current point. Each continuation carries its own absolute or
/// relative flavor, independent of the curve it follows.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveContinuation {
    /// `T`: A smooth quadratic segment ending at the given point.
    SmoothQuadTo(Point),
    /// `t`: A smooth quadratic segment ending at the given offset.
    SmoothQuadToRel(Point),
    /// `S`: A smooth cubic segment.
    SmoothCubicTo(SmoothCubicTo),
    /// `s`: A smooth cubic segment, with both points taken as offsets.
    SmoothCubicToRel(SmoothCubicTo),
}

/// The parameters of a `QuadTo` or `QuadToRel` element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadTo {
    /// The control point
    pub ctrl: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// The parameters of a `CubicTo` or `CubicToRel` element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicTo {
    /// The first control point (from the start)
    pub ctrl1: Point,
    /// The second control point (from the start)
    pub ctrl2: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// The parameters of a smooth cubic continuation.
///
/// The first control point is the reflection of the previous curve's second control point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothCubicTo {
    /// The second control point (from the start)
    pub ctrl2: Point,
    /// The point that this curve ends at
    pub to: Point,
}

/// An SVG arc segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcTo {
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation`.
    pub radii: Vec2,
    /// How much the ellipse is rotated relative to the x axis, in degrees.
    pub x_rotation: f64,
    /// Which of the two candidate arcs to draw.
    pub arc_flag: ArcFlag,
    /// Which way round the arc is drawn.
    pub sweep: SweepFlag,
    /// The arc's end point.
    pub to: Point,
}

/// Picks one of the two arcs that connect the end points of an arc segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArcFlag {
    /// The arc spanning at most 180 degrees, written `0`.
    Smallest,
    /// The arc spanning at least 180 degrees, written `1`.
    Largest,
}

/// The direction an arc is swept in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepFlag {
    /// Sweep through decreasing angles, written `0`.
    AntiClockwise,
    /// Sweep through increasing angles, written `1`.
    Clockwise,
}

impl ArcFlag {
    /// The flag as it appears in path data.
    pub const fn as_char(self) -> char {
        match self {
            ArcFlag::Smallest => '0',
            ArcFlag::Largest => '1',
        }
    }
}

impl SweepFlag {
    /// The flag as it appears in path data.
    pub const fn as_char(self) -> char {
        match self {
            SweepFlag::AntiClockwise => '0',
            SweepFlag::Clockwise => '1',
        }
    }
}

impl Instruction {
    /// `M`
    pub fn move_to(p: impl Into<Point>) -> Self {
        Instruction::MoveTo(p.into())
    }

    /// `m`
    pub fn move_to_rel(p: impl Into<Point>) -> Self {
        Instruction::MoveToRel(p.into())
    }

    /// `M` with several points.
    pub fn move_to_many(points: OneVec<Point>) -> Self {
        Instruction::MoveToMany(points)
    }

    /// `m` with several offsets.
    pub fn move_to_many_rel(points: OneVec<Point>) -> Self {
        Instruction::MoveToManyRel(points)
    }

    /// `L`
    pub fn line_to(p: impl Into<Point>) -> Self {
        Instruction::LineTo(p.into())
    }

    /// `l`
    pub fn line_to_rel(p: impl Into<Point>) -> Self {
        Instruction::LineToRel(p.into())
    }

    /// `L` with several points.
    pub fn line_to_many(points: OneVec<Point>) -> Self {
        Instruction::LineToMany(points)
    }

    /// `l` with several offsets.
    pub fn line_to_many_rel(points: OneVec<Point>) -> Self {
        Instruction::LineToManyRel(points)
    }

    /// `H`
    pub fn horiz(x: f64) -> Self {
        Instruction::Horiz(x)
    }

    /// `h`
    pub fn horiz_rel(dx: f64) -> Self {
        Instruction::HorizRel(dx)
    }

    /// `V`
    pub fn vert(y: f64) -> Self {
        Instruction::Vert(y)
    }

    /// `v`
    pub fn vert_rel(dy: f64) -> Self {
        Instruction::VertRel(dy)
    }

    /// `A`
    pub fn arc_to(
        radii: impl Into<Vec2>,
        x_rotation: f64,
        (arc_flag, sweep): (ArcFlag, SweepFlag),
        to: impl Into<Point>,
    ) -> Self {
        Instruction::ArcTo(ArcTo::new(radii, x_rotation, arc_flag, sweep, to))
    }

    /// `a`
    pub fn arc_to_rel(
        radii: impl Into<Vec2>,
        x_rotation: f64,
        (arc_flag, sweep): (ArcFlag, SweepFlag),
        to: impl Into<Point>,
    ) -> Self {
        Instruction::ArcToRel(ArcTo::new(radii, x_rotation, arc_flag, sweep, to))
    }

    /// `Q`
    pub fn quad_to(ctrl: impl Into<Point>, to: impl Into<Point>) -> Self {
        Instruction::QuadTo(QuadTo::new(ctrl, to))
    }

    /// `q`
    pub fn quad_to_rel(ctrl: impl Into<Point>, to: impl Into<Point>) -> Self {
        Instruction::QuadToRel(QuadTo::new(ctrl, to))
    }

    /// `Q` followed by continuations.
    pub fn quad_to_many(
        ctrl: impl Into<Point>,
        to: impl Into<Point>,
        continuations: impl IntoIterator<Item = CurveContinuation>,
    ) -> Self {
        Instruction::QuadToMany(QuadTo::new(ctrl, to), continuations.into_iter().collect())
    }

    /// `q` followed by continuations.
    pub fn quad_to_many_rel(
        ctrl: impl Into<Point>,
        to: impl Into<Point>,
        continuations: impl IntoIterator<Item = CurveContinuation>,
    ) -> Self {
        Instruction::QuadToManyRel(QuadTo::new(ctrl, to), continuations.into_iter().collect())
    }

    /// `C`
    pub fn cubic_to(
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        to: impl Into<Point>,
    ) -> Self {
        Instruction::CubicTo(CubicTo::new(ctrl1, ctrl2, to))
    }

    /// `c`
    pub fn cubic_to_rel(
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        to: impl Into<Point>,
    ) -> Self {
        Instruction::CubicToRel(CubicTo::new(ctrl1, ctrl2, to))
    }

    /// `C` followed by continuations.
    pub fn cubic_to_many(
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        to: impl Into<Point>,
        continuations: impl IntoIterator<Item = CurveContinuation>,
    ) -> Self {
        Instruction::CubicToMany(
            CubicTo::new(ctrl1, ctrl2, to),
            continuations.into_iter().collect(),
        )
    }

    /// `c` followed by continuations.
    pub fn cubic_to_many_rel(
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        to: impl Into<Point>,
        continuations: impl IntoIterator<Item = CurveContinuation>,
    ) -> Self {
        Instruction::CubicToManyRel(
            CubicTo::new(ctrl1, ctrl2, to),
            continuations.into_iter().collect(),
        )
    }

    /// `Z`
    pub fn close() -> Self {
        Instruction::ClosePath
    }

    /// Whether the coordinates of this instruction are offsets from the current point.
    ///
    /// `ClosePath` has no coordinates and counts as absolute.
    pub fn is_relative(&self) -> bool {
        match self {
            Instruction::MoveToRel(_)
            | Instruction::MoveToManyRel(_)
            | Instruction::LineToRel(_)
            | Instruction::LineToManyRel(_)
            | Instruction::HorizRel(_)
            | Instruction::VertRel(_)
            | Instruction::ArcToRel(_)
            | Instruction::QuadToRel(_)
            | Instruction::QuadToManyRel(..)
            | Instruction::CubicToRel(_)
            | Instruction::CubicToManyRel(..) => true,
            Instruction::MoveTo(_)
            | Instruction::MoveToMany(_)
            | Instruction::LineTo(_)
            | Instruction::LineToMany(_)
            | Instruction::Horiz(_)
            | Instruction::Vert(_)
            | Instruction::ArcTo(_)
            | Instruction::QuadTo(_)
            | Instruction::QuadToMany(..)
            | Instruction::CubicTo(_)
            | Instruction::CubicToMany(..)
            | Instruction::ClosePath => false,
        }
    }

    /// Shift every absolute coordinate by `offset`.
    ///
    /// Offsets of relative instructions and relative continuations stay as they are, so a
    /// translated sequence draws the same shape, moved by `offset`, provided it starts from a
    /// pen position moved by the same amount. `H` and `V` only take the matching component.
    ///
    /// ```
    /// use pathdata::{Instruction, Vec2};
    ///
    /// let offset = Vec2::new(10.0, 1.0);
    /// assert_eq!(Instruction::horiz(2.0).translate(offset), Instruction::horiz(12.0));
    /// assert_eq!(Instruction::line_to_rel((2.0, 2.0)).translate(offset), Instruction::line_to_rel((2.0, 2.0)));
    /// ```
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> Instruction {
        match self {
            Instruction::MoveTo(p) => Instruction::MoveTo(*p + offset),
            Instruction::MoveToMany(points) => Instruction::MoveToMany(points.map(|p| *p + offset)),
            Instruction::LineTo(p) => Instruction::LineTo(*p + offset),
            Instruction::LineToMany(points) => Instruction::LineToMany(points.map(|p| *p + offset)),
            Instruction::Horiz(x) => Instruction::Horiz(x + offset.x),
            Instruction::Vert(y) => Instruction::Vert(y + offset.y),
            Instruction::ArcTo(arc) => Instruction::ArcTo(ArcTo {
                to: arc.to + offset,
                ..*arc
            }),
            Instruction::QuadTo(quad) => Instruction::QuadTo(quad.translate(offset)),
            Instruction::QuadToMany(quad, continuations) => Instruction::QuadToMany(
                quad.translate(offset),
                translate_continuations(continuations, offset),
            ),
            Instruction::QuadToManyRel(quad, continuations) => Instruction::QuadToManyRel(
                *quad,
                translate_continuations(continuations, offset),
            ),
            Instruction::CubicTo(cubic) => Instruction::CubicTo(cubic.translate(offset)),
            Instruction::CubicToMany(cubic, continuations) => Instruction::CubicToMany(
                cubic.translate(offset),
                translate_continuations(continuations, offset),
            ),
            Instruction::CubicToManyRel(cubic, continuations) => Instruction::CubicToManyRel(
                *cubic,
                translate_continuations(continuations, offset),
            ),
            Instruction::MoveToRel(_)
            | Instruction::MoveToManyRel(_)
            | Instruction::LineToRel(_)
            | Instruction::LineToManyRel(_)
            | Instruction::HorizRel(_)
            | Instruction::VertRel(_)
            | Instruction::ArcToRel(_)
            | Instruction::QuadToRel(_)
            | Instruction::CubicToRel(_)
            | Instruction::ClosePath => self.clone(),
        }
    }
}

fn translate_continuations(
    continuations: &[CurveContinuation],
    offset: Vec2,
) -> Vec<CurveContinuation> {
    continuations.iter().map(|c| c.translate(offset)).collect()
}

impl CurveContinuation {
    /// `T`
    pub fn smooth_quad_to(to: impl Into<Point>) -> Self {
        CurveContinuation::SmoothQuadTo(to.into())
    }

    /// `t`
    pub fn smooth_quad_to_rel(to: impl Into<Point>) -> Self {
        CurveContinuation::SmoothQuadToRel(to.into())
    }

    /// `S`
    pub fn smooth_cubic_to(ctrl2: impl Into<Point>, to: impl Into<Point>) -> Self {
        CurveContinuation::SmoothCubicTo(SmoothCubicTo::new(ctrl2, to))
    }

    /// `s`
    pub fn smooth_cubic_to_rel(ctrl2: impl Into<Point>, to: impl Into<Point>) -> Self {
        CurveContinuation::SmoothCubicToRel(SmoothCubicTo::new(ctrl2, to))
    }

    /// Whether the points of this continuation are offsets from the current point.
    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            CurveContinuation::SmoothQuadToRel(_) | CurveContinuation::SmoothCubicToRel(_)
        )
    }

    /// The point this continuation ends at, or its offset when relative.
    pub fn end(&self) -> Point {
        match self {
            CurveContinuation::SmoothQuadTo(to) | CurveContinuation::SmoothQuadToRel(to) => *to,
            CurveContinuation::SmoothCubicTo(cubic) | CurveContinuation::SmoothCubicToRel(cubic) => {
                cubic.to
            }
        }
    }

    /// Shift the points of an absolute continuation by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> CurveContinuation {
        match self {
            CurveContinuation::SmoothQuadTo(to) => CurveContinuation::SmoothQuadTo(*to + offset),
            CurveContinuation::SmoothCubicTo(cubic) => {
                CurveContinuation::SmoothCubicTo(SmoothCubicTo {
                    ctrl2: cubic.ctrl2 + offset,
                    to: cubic.to + offset,
                })
            }
            CurveContinuation::SmoothQuadToRel(_) | CurveContinuation::SmoothCubicToRel(_) => *self,
        }
    }
}

impl QuadTo {
    /// Create a new quadratic segment.
    pub fn new(ctrl: impl Into<Point>, to: impl Into<Point>) -> Self {
        QuadTo {
            ctrl: ctrl.into(),
            to: to.into(),
        }
    }

    fn translate(self, offset: Vec2) -> Self {
        QuadTo {
            ctrl: self.ctrl + offset,
            to: self.to + offset,
        }
    }
}

impl CubicTo {
    /// Create a new cubic segment.
    pub fn new(ctrl1: impl Into<Point>, ctrl2: impl Into<Point>, to: impl Into<Point>) -> Self {
        CubicTo {
            ctrl1: ctrl1.into(),
            ctrl2: ctrl2.into(),
            to: to.into(),
        }
    }

    fn translate(self, offset: Vec2) -> Self {
        CubicTo {
            ctrl1: self.ctrl1 + offset,
            ctrl2: self.ctrl2 + offset,
            to: self.to + offset,
        }
    }
}

impl SmoothCubicTo {
    /// Create a new smooth cubic segment.
    pub fn new(ctrl2: impl Into<Point>, to: impl Into<Point>) -> Self {
        SmoothCubicTo {
            ctrl2: ctrl2.into(),
            to: to.into(),
        }
    }
}

impl ArcTo {
    /// Create a new arc segment.
    pub fn new(
        radii: impl Into<Vec2>,
        x_rotation: f64,
        arc_flag: ArcFlag,
        sweep: SweepFlag,
        to: impl Into<Point>,
    ) -> Self {
        ArcTo {
            radii: radii.into(),
            x_rotation,
            arc_flag,
            sweep,
            to: to.into(),
        }
    }
}
