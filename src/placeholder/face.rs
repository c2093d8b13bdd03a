//! Square portrait placeholder: an abstract face with a caption.

use crate::layout::{pt, Caption, Color, Layout, Point, Primitive, Shape, TextStyle};

const SKIN: Color = Color::rgb(200, 180, 160);
const SOCKET: Color = Color::gray(50);
const NOSE: Color = Color::rgb(150, 130, 110);
const MOUTH: Color = Color::rgb(150, 50, 50);

const LEFT_EYE: Point = pt(200, 220);
const RIGHT_EYE: Point = pt(312, 220);

const NOSE_POINTS: &[Point] = &[pt(256, 250), pt(240, 290), pt(256, 285), pt(272, 290)];

const SHAPES: &[Shape] = &[
    Shape::filled(Primitive::Circle { center: pt(256, 256), radius: 150 }, SKIN),
    Shape::filled(Primitive::Circle { center: LEFT_EYE, radius: 20 }, SOCKET),
    Shape::filled(Primitive::Circle { center: RIGHT_EYE, radius: 20 }, SOCKET),
    Shape::filled(Primitive::Circle { center: LEFT_EYE, radius: 8 }, Color::WHITE),
    Shape::filled(Primitive::Circle { center: RIGHT_EYE, radius: 8 }, Color::WHITE),
    Shape::stroked(Primitive::Polyline { points: NOSE_POINTS, closed: false }, NOSE, 2),
    Shape::stroked(
        Primitive::Arc { center: pt(256, 300), axes: (60, 40), start_deg: 0, end_deg: 180 },
        MOUTH,
        3,
    ),
];

const CAPTIONS: &[Caption] = &[
    Caption {
        text: "PLACEHOLDER FACE",
        baseline: 450,
        style: TextStyle { scale: 0.7, thickness: 2 },
        color: Color::gray(100),
        backing: None,
    },
    Caption {
        text: "Replace with your own image",
        baseline: 480,
        style: TextStyle { scale: 0.5, thickness: 1 },
        color: Color::gray(120),
        backing: None,
    },
];

/// 512x512 face placeholder.
pub const FACE: Layout = Layout {
    name: "face",
    width: 512,
    height: 512,
    background: Color::gray(240),
    shapes: SHAPES,
    captions: CAPTIONS,
};
