// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing instructions as SVG path data.
//!
//! Formatting is a stateless map: each instruction is written on its own, and a sequence is
//! the instructions joined by single spaces.

use alloc::string::{String, ToString};
use core::fmt;

use crate::{ArcTo, CubicTo, CurveContinuation, Instruction, OneVec, Point, Precision, QuadTo};

/// Format one instruction as path data.
///
/// ```
/// use pathdata::{format_instruction, Instruction, Precision};
///
/// assert_eq!(format_instruction(Precision::Full, &Instruction::move_to((42.0, 0.0))), "M42,0");
/// assert_eq!(
///     format_instruction(Precision::Decimals(1), &Instruction::line_to((1.25, 0.0))),
///     "L1.3,0"
/// );
/// ```
pub fn format_instruction(precision: Precision, instruction: &Instruction) -> String {
    instruction.display(precision).to_string()
}

/// Format a sequence of instructions as path data, separated by single spaces.
///
/// ```
/// use pathdata::{format_instructions, Instruction, Precision};
///
/// let text = format_instructions(
///     Precision::Full,
///     &[Instruction::move_to((0.0, 0.0)), Instruction::horiz_rel(5.0), Instruction::close()],
/// );
/// assert_eq!(text, "M0,0 h5 Z");
/// ```
pub fn format_instructions(precision: Precision, instructions: &[Instruction]) -> String {
    Instructions {
        instructions,
        precision,
    }
    .to_string()
}

/// A [`Display`](fmt::Display) adaptor for an [`Instruction`], see [`Instruction::display`].
#[derive(Clone, Copy, Debug)]
pub struct DisplayInstruction<'a> {
    instruction: &'a Instruction,
    precision: Precision,
}

/// A [`Display`](fmt::Display) adaptor for a [`CurveContinuation`], see
/// [`CurveContinuation::display`].
#[derive(Clone, Copy, Debug)]
pub struct DisplayContinuation<'a> {
    continuation: &'a CurveContinuation,
    precision: Precision,
}

/// Space separated instructions.
struct Instructions<'a> {
    instructions: &'a [Instruction],
    precision: Precision,
}

impl Instruction {
    /// Display the instruction with the given precision.
    ///
    /// The [`Display`](fmt::Display) implementation of `Instruction` itself uses
    /// [`Precision::Full`].
    pub fn display(&self, precision: Precision) -> DisplayInstruction<'_> {
        DisplayInstruction {
            instruction: self,
            precision,
        }
    }
}

impl CurveContinuation {
    /// Display the continuation with the given precision.
    pub fn display(&self, precision: Precision) -> DisplayContinuation<'_> {
        DisplayContinuation {
            continuation: self,
            precision,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(Precision::Full), f)
    }
}

impl fmt::Display for CurveContinuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(Precision::Full), f)
    }
}

impl fmt::Display for DisplayInstruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = Writer {
            precision: self.precision,
        };
        match self.instruction {
            Instruction::MoveTo(p) => w.command(f, 'M', p),
            Instruction::MoveToRel(p) => w.command(f, 'm', p),
            Instruction::MoveToMany(points) => w.points(f, 'M', points),
            Instruction::MoveToManyRel(points) => w.points(f, 'm', points),
            Instruction::LineTo(p) => w.command(f, 'L', p),
            Instruction::LineToRel(p) => w.command(f, 'l', p),
            Instruction::LineToMany(points) => w.points(f, 'L', points),
            Instruction::LineToManyRel(points) => w.points(f, 'l', points),
            Instruction::Horiz(x) => w.scalar(f, 'H', *x),
            Instruction::HorizRel(dx) => w.scalar(f, 'h', *dx),
            Instruction::Vert(y) => w.scalar(f, 'V', *y),
            Instruction::VertRel(dy) => w.scalar(f, 'v', *dy),
            Instruction::ArcTo(arc) => w.arc(f, 'A', arc),
            Instruction::ArcToRel(arc) => w.arc(f, 'a', arc),
            Instruction::QuadTo(quad) => w.quad(f, 'Q', quad),
            Instruction::QuadToRel(quad) => w.quad(f, 'q', quad),
            Instruction::QuadToMany(quad, continuations) => {
                w.quad(f, 'Q', quad)?;
                w.continuations(f, continuations)
            }
            Instruction::QuadToManyRel(quad, continuations) => {
                w.quad(f, 'q', quad)?;
                w.continuations(f, continuations)
            }
            Instruction::CubicTo(cubic) => w.cubic(f, 'C', cubic),
            Instruction::CubicToRel(cubic) => w.cubic(f, 'c', cubic),
            Instruction::CubicToMany(cubic, continuations) => {
                w.cubic(f, 'C', cubic)?;
                w.continuations(f, continuations)
            }
            Instruction::CubicToManyRel(cubic, continuations) => {
                w.cubic(f, 'c', cubic)?;
                w.continuations(f, continuations)
            }
            Instruction::ClosePath => f.write_str("Z"),
        }
    }
}

impl fmt::Display for DisplayContinuation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Writer {
            precision: self.precision,
        }
        .continuation(f, self.continuation)
    }
}

impl fmt::Display for Instructions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.instructions.iter();
        if let Some(inst) = iter.next() {
            write!(f, "{}", inst.display(self.precision))?;
        }
        for inst in iter {
            write!(f, " {}", inst.display(self.precision))?;
        }
        Ok(())
    }
}

/// Writes the tokens of one instruction.
#[derive(Clone, Copy)]
struct Writer {
    precision: Precision,
}

impl Writer {
    fn number(self, f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
        write!(f, "{}", self.precision.number(value))
    }

    fn point(self, f: &mut fmt::Formatter<'_>, Point { x, y }: &Point) -> fmt::Result {
        self.number(f, *x)?;
        f.write_str(",")?;
        self.number(f, *y)
    }

    /// Points after the first are preceded by a space.
    fn spaced_points<'p>(
        self,
        f: &mut fmt::Formatter<'_>,
        points: impl IntoIterator<Item = &'p Point>,
    ) -> fmt::Result {
        for (idx, p) in points.into_iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            self.point(f, p)?;
        }
        Ok(())
    }

    fn command(self, f: &mut fmt::Formatter<'_>, letter: char, p: &Point) -> fmt::Result {
        write!(f, "{letter}")?;
        self.point(f, p)
    }

    fn points(self, f: &mut fmt::Formatter<'_>, letter: char, points: &OneVec<Point>) -> fmt::Result {
        write!(f, "{letter}")?;
        self.spaced_points(f, points)
    }

    fn scalar(self, f: &mut fmt::Formatter<'_>, letter: char, value: f64) -> fmt::Result {
        write!(f, "{letter}")?;
        self.number(f, value)
    }

    fn arc(self, f: &mut fmt::Formatter<'_>, letter: char, arc: &ArcTo) -> fmt::Result {
        write!(f, "{letter}")?;
        self.point(f, &arc.radii.to_point())?;
        f.write_str(" ")?;
        self.number(f, arc.x_rotation)?;
        write!(f, " {},{} ", arc.arc_flag.as_char(), arc.sweep.as_char())?;
        self.point(f, &arc.to)
    }

    fn quad(self, f: &mut fmt::Formatter<'_>, letter: char, quad: &QuadTo) -> fmt::Result {
        write!(f, "{letter}")?;
        self.spaced_points(f, [&quad.ctrl, &quad.to])
    }

    fn cubic(self, f: &mut fmt::Formatter<'_>, letter: char, cubic: &CubicTo) -> fmt::Result {
        write!(f, "{letter}")?;
        self.spaced_points(f, [&cubic.ctrl1, &cubic.ctrl2, &cubic.to])
    }

    /// Continuations follow each other and the curve without a separator.
    fn continuations(
        self,
        f: &mut fmt::Formatter<'_>,
        continuations: &[CurveContinuation],
    ) -> fmt::Result {
        continuations
            .iter()
            .try_for_each(|continuation| self.continuation(f, continuation))
    }

    fn continuation(
        self,
        f: &mut fmt::Formatter<'_>,
        continuation: &CurveContinuation,
    ) -> fmt::Result {
        match continuation {
            CurveContinuation::SmoothQuadTo(to) => self.command(f, 'T', to),
            CurveContinuation::SmoothQuadToRel(to) => self.command(f, 't', to),
            CurveContinuation::SmoothCubicTo(cubic) => {
                f.write_str("S")?;
                self.spaced_points(f, [&cubic.ctrl2, &cubic.to])
            }
            CurveContinuation::SmoothCubicToRel(cubic) => {
                f.write_str("s")?;
                self.spaced_points(f, [&cubic.ctrl2, &cubic.to])
            }
        }
    }
}
