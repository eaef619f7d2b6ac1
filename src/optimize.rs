// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rewrites that make instruction lists shorter to write out.

use alloc::vec::Vec;

use crate::log::trace;
use crate::{Instruction, OneVec};

/// Merge runs of moves into batched moves.
///
/// Consecutive `MoveTo`s become one `MoveToMany`, consecutive `MoveToRel`s one `MoveToManyRel`,
/// and a single move right after a batched move of the same kind is appended to it. Absolute and
/// relative moves are never merged together, and any other instruction ends the run.
///
/// A renderer reads the coordinates after the first in a batched `M` as line-tos, so this
/// changes what is drawn whenever the merged moves were meant to lift the pen. Only use it on
/// lists where that reading is wanted.
///
/// ```
/// use pathdata::{format_instructions, merge_adjacent_moves, Instruction, Precision};
///
/// let merged = merge_adjacent_moves(vec![
///     Instruction::move_to((0.0, 0.0)),
///     Instruction::move_to((1.0, 1.0)),
///     Instruction::move_to_rel((2.0, 2.0)),
///     Instruction::horiz(3.0),
/// ]);
/// assert_eq!(format_instructions(Precision::Full, &merged), "M0,0 1,1 m2,2 H3");
/// ```
pub fn merge_adjacent_moves(instructions: Vec<Instruction>) -> Vec<Instruction> {
    let before = instructions.len();
    let mut out: Vec<Instruction> = Vec::with_capacity(before);
    for inst in instructions {
        let merged = match (out.last_mut(), &inst) {
            (Some(Instruction::MoveTo(prev)), Instruction::MoveTo(p)) => {
                let batch = Instruction::MoveToMany(OneVec::from_single_rest(*prev, [*p]));
                out.pop();
                out.push(batch);
                true
            }
            (Some(Instruction::MoveToRel(prev)), Instruction::MoveToRel(p)) => {
                let batch = Instruction::MoveToManyRel(OneVec::from_single_rest(*prev, [*p]));
                out.pop();
                out.push(batch);
                true
            }
            (Some(Instruction::MoveToMany(points)), Instruction::MoveTo(p))
            | (Some(Instruction::MoveToManyRel(points)), Instruction::MoveToRel(p)) => {
                points.push(*p);
                true
            }
            _ => false,
        };
        if !merged {
            out.push(inst);
        }
    }
    trace!(before, after = out.len(), "merged adjacent moves");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format_instructions, Point, Precision};
    use alloc::vec;

    fn text(instructions: &[Instruction]) -> alloc::string::String {
        format_instructions(Precision::Full, instructions)
    }

    #[test]
    fn absolute_run() {
        let merged = merge_adjacent_moves(vec![
            Instruction::move_to((0., 0.)),
            Instruction::move_to((1., 1.)),
            Instruction::move_to((2., 2.)),
        ]);
        assert_eq!(merged.len(), 1);
        match &merged[0] {
            Instruction::MoveToMany(points) => {
                assert_eq!(points.len(), 3);
                assert_eq!(*points.last(), Point::new(2., 2.));
            }
            other => panic!("expected a batched move, got {other:?}"),
        }
    }

    #[test]
    fn relative_and_absolute_stay_apart() {
        let merged = merge_adjacent_moves(vec![
            Instruction::move_to_rel((1., 0.)),
            Instruction::move_to_rel((0., 1.)),
            Instruction::move_to((5., 5.)),
            Instruction::move_to_rel((1., 1.)),
        ]);
        assert_eq!(text(&merged), "m1,0 0,1 M5,5 m1,1");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn existing_batches_are_extended() {
        let merged = merge_adjacent_moves(vec![
            Instruction::move_to_many_rel(OneVec::from_single_rest(
                Point::new(1., 1.),
                [Point::new(2., 2.)],
            )),
            Instruction::move_to_rel((3., 3.)),
        ]);
        assert_eq!(text(&merged), "m1,1 2,2 3,3");
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn other_instructions_break_runs() {
        let input = vec![
            Instruction::move_to((0., 0.)),
            Instruction::line_to((1., 1.)),
            Instruction::move_to((2., 2.)),
            Instruction::close(),
            Instruction::move_to((3., 3.)),
        ];
        assert_eq!(merge_adjacent_moves(input.clone()), input);
        assert!(merge_adjacent_moves(vec![]).is_empty());
    }
}
