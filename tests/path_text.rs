// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End to end checks of path text and pen tracking.

use pathdata::{
    format_instruction, format_instructions, ArcFlag, CurveContinuation, DrawState, Instruction,
    Path, Point, Precision, StartingPoint, Subpath, SweepFlag, Vec2,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn single_instructions() {
    assert_eq!(
        format_instruction(Precision::Full, &Instruction::move_to((42.0, 0.0))),
        "M42,0"
    );
    assert_eq!(
        format_instruction(
            Precision::Decimals(2),
            &Instruction::line_to((std::f64::consts::PI, 0.0))
        ),
        "L3.14,0"
    );
    assert_eq!(
        format_instruction(
            Precision::Full,
            &Instruction::arc_to(
                (0.0, 0.0),
                0.0,
                (ArcFlag::Largest, SweepFlag::Clockwise),
                (0.0, 0.0)
            )
        ),
        "A0,0 0 1,1 0,0"
    );
}

#[test]
fn closed_square() {
    let square = Subpath::closed(
        StartingPoint::MoveTo(Point::new(0.0, 0.0)),
        vec![
            Instruction::line_to((20.0, 0.0)),
            Instruction::line_to((20.0, 20.0)),
            Instruction::line_to((0.0, 20.0)),
        ],
    );
    let path: Path = [square].into_iter().collect();
    assert_eq!(path.to_string(), "M0,0 L20,0 L20,20 L0,20 Z");
    assert_eq!(
        path.to_attribute(Precision::Decimals(3)),
        "d=\"M0,0 L20,0 L20,20 L0,20 Z\""
    );
    let end = path.end_state();
    assert_eq!(end.current, Point::new(0.0, 0.0));
    assert_eq!(end.direction, Vec2::new(0.0, -1.0));
}

#[test]
fn mixed_path() {
    let mut path = Path::new();
    path.push(Subpath::open(
        StartingPoint::MoveTo(Point::new(10.0, 80.0)),
        vec![Instruction::cubic_to_many(
            (40.0, 10.0),
            (65.0, 10.0),
            (95.0, 80.0),
            [CurveContinuation::smooth_cubic_to((150.0, 150.0), (180.0, 80.0))],
        )],
    ));
    path.extend([Subpath::closed(
        StartingPoint::MoveToRel(Point::new(10.0, 0.0)),
        vec![
            Instruction::arc_to_rel(
                (45.0, 45.0),
                0.0,
                (ArcFlag::Smallest, SweepFlag::AntiClockwise),
                (-40.0, 40.0),
            ),
            Instruction::horiz_rel(12.5),
        ],
    )]);
    assert_eq!(
        path.to_string(),
        "M10,80 C40,10 65,10 95,80S150,150 180,80 m10,0 a45,45 0 0,0 -40,40 h12.5 Z"
    );
    assert_eq!(path.iter().filter(|s| s.closed).count(), 1);
    let end = path.end_state();
    assert_eq!(end.start, Point::new(190.0, 80.0));
    assert_eq!(end.current, end.start);
}

#[test]
fn precision_and_special_values() {
    let insts = [
        Instruction::move_to((-0.0, 0.0)),
        Instruction::line_to((f64::NAN, f64::INFINITY)),
        Instruction::horiz(f64::NEG_INFINITY),
        Instruction::vert(-0.0004),
    ];
    assert_eq!(
        format_instructions(Precision::Decimals(3), &insts),
        "M0,0 LNaN,Infinity H-Infinity V0"
    );
    assert_eq!(
        format_instructions(Precision::Full, &insts),
        "M0,0 LNaN,Infinity H-Infinity V-0.0004"
    );
}

#[test]
fn chaining_paths() {
    let stem = Path::from_subpaths(vec![Subpath::open(
        StartingPoint::MoveTo(Point::new(0.0, 0.0)),
        vec![Instruction::line_to((0.0, 10.0))],
    )]);
    let leaf = Path::from_subpaths(vec![Subpath::closed(
        StartingPoint::MoveTo(Point::new(50.0, 50.0)),
        vec![
            Instruction::line_to((55.0, 45.0)),
            Instruction::line_to_rel((5.0, 5.0)),
        ],
    )]);
    let mut plant = stem.clone();
    plant.append_continuing(&leaf);
    assert_eq!(plant.to_string(), "M0,0 L0,10 M0,10 L5,5 l5,5 Z");
    assert_eq!(plant.len(), 2);

    let state = stem.end_state();
    assert_eq!(state, DrawState::new((0.0, 0.0), (0.0, 10.0), Vec2::new(0.0, 1.0)));
    let moved = leaf.continue_from(&state);
    assert_eq!(moved.end_state().start, state.current);
}

fn random_point(rng: &mut impl Rng) -> Point {
    Point::new(
        rng.random_range(-100..100) as f64,
        rng.random_range(-100..100) as f64,
    )
}

fn random_subpath(rng: &mut impl Rng) -> Subpath {
    let start = if rng.random_bool(0.5) {
        StartingPoint::MoveTo(random_point(rng))
    } else {
        StartingPoint::MoveToRel(random_point(rng))
    };
    let body = (0..rng.random_range(0..6))
        .map(|_| {
            let p = random_point(rng);
            match rng.random_range(0..6) {
                0 => Instruction::line_to(p),
                1 => Instruction::line_to_rel(p),
                2 => Instruction::horiz(p.x),
                3 => Instruction::vert_rel(p.y),
                4 => Instruction::quad_to(random_point(rng), p),
                _ => Instruction::cubic_to_rel(random_point(rng), random_point(rng), p),
            }
        })
        .collect();
    Subpath::new(start, rng.random_bool(0.5), body)
}

#[test]
fn translate_by_zero_keeps_text() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let path: Path = (0..rng.random_range(1..4))
            .map(|_| random_subpath(&mut rng))
            .collect();
        assert_eq!(path.translate(Vec2::ZERO).to_string(), path.to_string());
    }
}

#[test]
fn continued_paths_start_at_the_pen() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let head: Path = (0..rng.random_range(1..3))
            .map(|_| random_subpath(&mut rng))
            .collect();
        let tail: Path = (0..rng.random_range(1..3))
            .map(|_| random_subpath(&mut rng))
            .collect();
        let state = head.end_state();
        let moved = tail.continue_from(&state);
        let first_start = moved[0].start.resolve(state.current);
        assert_eq!(first_start, state.current);
        // Drawn after `head`, the whole shape moves by the same amount.
        let shift = state.current - tail[0].start.resolve(state.current);
        assert_eq!(
            moved.propagate(state).current,
            tail.propagate(state).current + shift
        );
    }
}
