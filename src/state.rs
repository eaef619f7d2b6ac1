// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Following the pen through a sequence of instructions.

use crate::{CurveContinuation, Instruction, Point, Vec2};

/// Where the pen is while a path is being drawn.
///
/// A `DrawState` is never changed in place: [`propagate`] returns the state after an
/// instruction. The default state has every field at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawState {
    /// The starting point of the current sub-path, where `Z` returns to.
    pub start: Point,
    /// The pen position after the last instruction.
    pub current: Point,
    /// Unit vector along the last segment drawn, or zero if it had no length.
    pub direction: Vec2,
}

/// Compute the pen state after `instruction`, starting from `state`.
///
/// This is the same as [`DrawState::propagate`].
///
/// ```
/// use pathdata::{propagate, DrawState, Instruction, Point, Vec2};
///
/// let state = DrawState::at(Point::new(1.0, 1.0));
/// let state = propagate(&Instruction::line_to_rel((3.0, 4.0)), state);
/// assert_eq!(state.current, Point::new(4.0, 5.0));
/// assert_eq!(state.direction, Vec2::new(0.6, 0.8));
/// assert_eq!(state.start, Point::new(1.0, 1.0));
/// ```
pub fn propagate(instruction: &Instruction, state: DrawState) -> DrawState {
    state.propagate(instruction)
}

impl DrawState {
    /// Create a new state.
    pub fn new(start: impl Into<Point>, current: impl Into<Point>, direction: Vec2) -> Self {
        DrawState {
            start: start.into(),
            current: current.into(),
            direction,
        }
    }

    /// A pen resting at `point` at the start of a sub-path, with no direction.
    pub fn at(point: Point) -> Self {
        DrawState {
            start: point,
            current: point,
            direction: Vec2::ZERO,
        }
    }

    /// Compute the state after `instruction`.
    ///
    /// `current` becomes the point the instruction draws to. Control points, arc radii and arc
    /// flags do not move the pen. `direction` is recomputed from the last segment: for batched
    /// instructions that is the segment between the last two points they reach. `start` is
    /// only read, by `Z`. Setting it when a sub-path begins is up to the caller, see
    /// [`Subpath::propagate`](crate::Subpath::propagate).
    #[must_use]
    pub fn propagate(self, instruction: &Instruction) -> DrawState {
        let pen = Pen::new(self.current);
        let pen = match instruction {
            Instruction::MoveTo(p) | Instruction::LineTo(p) => pen.to(*p),
            Instruction::MoveToRel(d) | Instruction::LineToRel(d) => pen.by(*d),
            Instruction::MoveToMany(points) | Instruction::LineToMany(points) => {
                points.iter().fold(pen, |pen, p| pen.to(*p))
            }
            Instruction::MoveToManyRel(points) | Instruction::LineToManyRel(points) => {
                points.iter().fold(pen, |pen, d| pen.by(*d))
            }
            Instruction::Horiz(x) => pen.to(self.current.with_x(*x)),
            Instruction::HorizRel(dx) => pen.by(Point::new(*dx, 0.)),
            Instruction::Vert(y) => pen.to(self.current.with_y(*y)),
            Instruction::VertRel(dy) => pen.by(Point::new(0., *dy)),
            Instruction::ArcTo(arc) => pen.to(arc.to),
            Instruction::ArcToRel(arc) => pen.by(arc.to),
            Instruction::QuadTo(quad) => pen.to(quad.to),
            Instruction::QuadToRel(quad) => pen.by(quad.to),
            Instruction::QuadToMany(quad, continuations) => {
                pen.to(quad.to).continue_with(continuations)
            }
            Instruction::QuadToManyRel(quad, continuations) => {
                pen.by(quad.to).continue_with(continuations)
            }
            Instruction::CubicTo(cubic) => pen.to(cubic.to),
            Instruction::CubicToRel(cubic) => pen.by(cubic.to),
            Instruction::CubicToMany(cubic, continuations) => {
                pen.to(cubic.to).continue_with(continuations)
            }
            Instruction::CubicToManyRel(cubic, continuations) => {
                pen.by(cubic.to).continue_with(continuations)
            }
            Instruction::ClosePath => pen.to(self.start),
        };
        DrawState {
            start: self.start,
            current: pen.current,
            direction: (pen.current - pen.previous).normalize(),
        }
    }

    /// Propagate through every instruction in order.
    #[must_use]
    pub fn propagate_all<'a>(self, instructions: impl IntoIterator<Item = &'a Instruction>) -> Self {
        instructions
            .into_iter()
            .fold(self, |state, inst| state.propagate(inst))
    }
}

/// The last two positions the pen went through.
#[derive(Clone, Copy)]
struct Pen {
    previous: Point,
    current: Point,
}

impl Pen {
    fn new(at: Point) -> Self {
        Pen {
            previous: at,
            current: at,
        }
    }

    fn to(self, next: Point) -> Self {
        Pen {
            previous: self.current,
            current: next,
        }
    }

    fn by(self, offset: Point) -> Self {
        self.to(self.current + offset.to_vec2())
    }

    fn continue_with(self, continuations: &[CurveContinuation]) -> Self {
        continuations.iter().fold(self, |pen, c| {
            if c.is_relative() {
                pen.by(c.end())
            } else {
                pen.to(c.end())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArcFlag, OneVec, SweepFlag};
    use alloc::vec;
    use alloc::vec::Vec;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn state_at(x: f64, y: f64) -> DrawState {
        DrawState::at(Point::new(x, y))
    }

    fn points(points: &[(f64, f64)]) -> OneVec<Point> {
        let points: Vec<Point> = points.iter().map(|&p| p.into()).collect();
        OneVec::try_from(points).unwrap()
    }

    #[test]
    fn move_and_line() {
        let s = state_at(1., 1.);
        for (inst, expected) in [
            (Instruction::move_to((5., 5.)), (5., 5.)),
            (Instruction::line_to((-2., 0.)), (-2., 0.)),
            (Instruction::move_to_rel((5., 5.)), (6., 6.)),
            (Instruction::line_to_rel((-2., 0.)), (-1., 1.)),
        ] {
            assert_eq!(s.propagate(&inst).current, Point::from(expected), "{inst}");
        }
    }

    #[test]
    fn batched_points_fold_in_order() {
        let s = state_at(10., 10.);
        let abs = s.propagate(&Instruction::line_to_many(points(&[(1., 1.), (4., 5.)])));
        assert_eq!(abs.current, Point::new(4., 5.));
        assert_eq!(abs.direction, Vec2::new(0.6, 0.8));

        let rel = s.propagate(&Instruction::move_to_many_rel(points(&[
            (1., 0.),
            (0., 2.),
            (3., 0.),
        ])));
        assert_eq!(rel.current, Point::new(14., 12.));
        assert_eq!(rel.direction, Vec2::new(1., 0.));

        let single = s.propagate(&Instruction::line_to_many_rel(points(&[(0., -2.)])));
        assert_eq!(single.current, Point::new(10., 8.));
        assert_eq!(single.direction, Vec2::new(0., -1.));
    }

    #[test]
    fn axis_lines_touch_one_coordinate() {
        let s = state_at(3., 4.);
        assert_eq!(s.propagate(&Instruction::horiz(-1.)).current, Point::new(-1., 4.));
        assert_eq!(s.propagate(&Instruction::horiz_rel(2.)).current, Point::new(5., 4.));
        assert_eq!(s.propagate(&Instruction::vert(0.)).current, Point::new(3., 0.));
        assert_eq!(s.propagate(&Instruction::vert_rel(-4.)).current, Point::new(3., 0.));
        assert_eq!(s.propagate(&Instruction::vert(0.)).direction, Vec2::new(0., -1.));
    }

    #[test]
    fn arcs_only_use_their_end_point() {
        let s = state_at(1., 2.);
        let flags = (ArcFlag::Largest, SweepFlag::Clockwise);
        let abs = Instruction::arc_to((100., 3.), 45., flags, (7., 2.));
        let rel = Instruction::arc_to_rel((0., 0.), 0., flags, (7., 2.));
        assert_eq!(s.propagate(&abs).current, Point::new(7., 2.));
        assert_eq!(s.propagate(&abs).direction, Vec2::new(1., 0.));
        assert_eq!(s.propagate(&rel).current, Point::new(8., 4.));
    }

    #[test]
    fn curves_ignore_control_points() {
        let s = state_at(0., 0.);
        let quad = Instruction::quad_to((50., 50.), (0., 10.));
        assert_eq!(s.propagate(&quad).current, Point::new(0., 10.));
        assert_eq!(s.propagate(&quad).direction, Vec2::new(0., 1.));
        let cubic = Instruction::cubic_to_rel((9., 9.), (-9., 9.), (2., 0.));
        assert_eq!(s.propagate(&cubic).current, Point::new(2., 0.));
    }

    #[test]
    fn continuations_move_like_lines() {
        let s = state_at(0., 0.);
        let quad = Instruction::quad_to_many(
            (5., 5.),
            (10., 0.),
            [
                CurveContinuation::smooth_quad_to((20., 0.)),
                CurveContinuation::smooth_quad_to_rel((0., 5.)),
            ],
        );
        let after = s.propagate(&quad);
        assert_eq!(after.current, Point::new(20., 5.));
        assert_eq!(after.direction, Vec2::new(0., 1.));

        let cubic = Instruction::cubic_to_many_rel(
            (1., 1.),
            (2., 2.),
            (3., 0.),
            [
                CurveContinuation::smooth_cubic_to_rel((100., 100.), (5., 0.)),
                CurveContinuation::smooth_cubic_to((-100., 0.), (6., -4.)),
            ],
        );
        let after = state_at(1., 0.).propagate(&cubic);
        assert_eq!(after.current, Point::new(6., -4.));
        assert_eq!(after.direction, Vec2::new(-0.6, -0.8));
    }

    #[test]
    fn close_returns_to_start() {
        let s = DrawState::new((10., 10.), (3., -7.), Vec2::new(1., 0.));
        let closed = s.propagate(&Instruction::close());
        assert_eq!(closed.current, Point::new(10., 10.));
        assert_eq!(closed.start, Point::new(10., 10.));
    }

    #[test]
    fn start_is_never_changed() {
        let s = DrawState::new((1., 1.), (2., 2.), Vec2::ZERO);
        for inst in [
            Instruction::move_to((5., 5.)),
            Instruction::move_to_rel((5., 5.)),
            Instruction::line_to((0., 0.)),
            Instruction::close(),
        ] {
            assert_eq!(s.propagate(&inst).start, Point::new(1., 1.));
        }
    }

    #[test]
    fn zero_length_segments_have_no_direction() {
        let s = DrawState::new((0., 0.), (2., 2.), Vec2::new(1., 0.));
        assert_eq!(s.propagate(&Instruction::line_to((2., 2.))).direction, Vec2::ZERO);
        assert_eq!(s.propagate(&Instruction::horiz_rel(0.)).direction, Vec2::ZERO);
        let back_and_forth = points(&[(3., 3.), (3., 3.)]);
        assert_eq!(
            s.propagate(&Instruction::line_to_many(back_and_forth)).direction,
            Vec2::ZERO
        );
        let at_start = DrawState::at(Point::new(4., 4.));
        assert_eq!(at_start.propagate(&Instruction::close()).direction, Vec2::ZERO);
    }

    #[test]
    fn propagate_all_folds() {
        let insts = vec![
            Instruction::move_to((1., 1.)),
            Instruction::horiz_rel(4.),
            Instruction::vert(3.),
        ];
        let end = DrawState::default().propagate_all(&insts);
        assert_eq!(end.current, Point::new(5., 3.));
        assert_eq!(end, insts.iter().fold(DrawState::default(), |s, i| propagate(i, s)));
    }

    // Integer valued coordinates keep the arithmetic below exact.
    fn coord(rng: &mut StdRng) -> f64 {
        f64::from(rng.random_range(-100_i32..100))
    }

    fn point(rng: &mut StdRng) -> Point {
        Point::new(coord(rng), coord(rng))
    }

    fn random_instruction(rng: &mut StdRng, relative: bool) -> Instruction {
        let flags = (ArcFlag::Smallest, SweepFlag::AntiClockwise);
        let (p, q, r) = (point(rng), point(rng), point(rng));
        let many = OneVec::from_single_rest(p, [q, r]);
        match (rng.random_range(0..9), relative) {
            (0, false) => Instruction::MoveTo(p),
            (0, true) => Instruction::MoveToRel(p),
            (1, false) => Instruction::LineToMany(many),
            (1, true) => Instruction::LineToManyRel(many),
            (2, false) => Instruction::Horiz(p.x),
            (2, true) => Instruction::HorizRel(p.x),
            (3, false) => Instruction::Vert(p.y),
            (3, true) => Instruction::VertRel(p.y),
            (4, false) => Instruction::arc_to((2., 3.), 10., flags, p),
            (4, true) => Instruction::arc_to_rel((2., 3.), 10., flags, p),
            (5, false) => Instruction::quad_to(p, q),
            (5, true) => Instruction::quad_to_rel(p, q),
            (6, false) => Instruction::cubic_to(p, q, r),
            (6, true) => Instruction::cubic_to_rel(p, q, r),
            (7, false) => Instruction::quad_to_many(
                p,
                q,
                [
                    CurveContinuation::smooth_quad_to(r),
                    CurveContinuation::smooth_quad_to(p),
                ],
            ),
            (7, true) => Instruction::quad_to_many_rel(
                p,
                q,
                [CurveContinuation::smooth_quad_to_rel(r)],
            ),
            (_, false) => Instruction::cubic_to_many(
                p,
                q,
                r,
                [CurveContinuation::smooth_cubic_to(q, p)],
            ),
            (_, true) => Instruction::cubic_to_many_rel(
                p,
                q,
                r,
                [CurveContinuation::smooth_cubic_to_rel(q, p)],
            ),
        }
    }

    #[test]
    fn absolute_sequences_forget_the_initial_pen() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let len = rng.random_range(1..8);
            // Horizontal and vertical lines keep one coordinate, so start with a full point.
            let mut insts = vec![Instruction::MoveTo(point(&mut rng))];
            insts.extend((0..len).map(|_| random_instruction(&mut rng, false)));
            let start = point(&mut rng);
            let a = DrawState::new(start, point(&mut rng), Vec2::ZERO).propagate_all(&insts);
            let b = DrawState::new(start, point(&mut rng), Vec2::ZERO).propagate_all(&insts);
            assert_eq!(a.current, b.current);
        }
    }

    #[test]
    fn relative_sequences_are_translation_equivariant() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let len = rng.random_range(1..8);
            let insts: Vec<_> = (0..len).map(|_| random_instruction(&mut rng, true)).collect();
            let initial = DrawState::at(point(&mut rng));
            let d = point(&mut rng).to_vec2();
            let moved = DrawState::at(initial.current + d);
            let a = initial.propagate_all(&insts);
            let b = moved.propagate_all(&insts);
            assert_eq!(a.current + d, b.current);
            assert_eq!(a.direction, b.direction);
        }
    }
}
