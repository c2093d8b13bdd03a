//! Portrait full-body placeholder: head, torso, arms and legs with captions.

use crate::layout::{pt, Backing, Caption, Color, Layout, Primitive, Rect, Shape, TextStyle};

const SKIN: Color = Color::rgb(200, 180, 160);
const EYE: Color = Color::gray(50);
const CLOTHES: Color = Color::rgb(100, 120, 140);
const TROUSERS: Color = Color::rgb(60, 80, 100);

const HEAD: Primitive = Primitive::Circle { center: pt(256, 150), radius: 80 };
const TORSO: Rect = Rect::new(180, 232, 152, 318);
const LEFT_ARM: Rect = Rect::new(120, 250, 60, 250);
const RIGHT_ARM: Rect = Rect::new(332, 250, 60, 250);
const LEFT_LEG: Rect = Rect::new(200, 550, 70, 200);
const RIGHT_LEG: Rect = Rect::new(280, 550, 70, 200);

const SHAPES: &[Shape] = &[
    Shape::filled(HEAD, SKIN),
    Shape::filled(Primitive::Circle { center: pt(230, 140), radius: 12 }, EYE),
    Shape::filled(Primitive::Circle { center: pt(282, 140), radius: 12 }, EYE),
    Shape::filled(Primitive::Rect(TORSO), CLOTHES),
    Shape::filled(Primitive::Rect(LEFT_ARM), CLOTHES),
    Shape::filled(Primitive::Rect(RIGHT_ARM), CLOTHES),
    Shape::filled(Primitive::Rect(LEFT_LEG), TROUSERS),
    Shape::filled(Primitive::Rect(RIGHT_LEG), TROUSERS),
];

const CAPTIONS: &[Caption] = &[
    Caption {
        text: "PLACEHOLDER PERSON",
        baseline: 600,
        style: TextStyle { scale: 0.9, thickness: 2 },
        color: Color::gray(100),
        backing: Some(Backing { color: Color::WHITE, pad_x: 10, pad_y: 6 }),
    },
    Caption {
        text: "Replace with your own image",
        baseline: 650,
        style: TextStyle { scale: 0.6, thickness: 1 },
        color: Color::gray(120),
        backing: Some(Backing { color: Color::WHITE, pad_x: 5, pad_y: 5 }),
    },
];

/// 512x768 full-body placeholder.
pub const PERSON: Layout = Layout {
    name: "person",
    width: 512,
    height: 768,
    background: Color::gray(240),
    shapes: SHAPES,
    captions: CAPTIONS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::raster::font;

    #[test]
    fn canvas_is_portrait() {
        assert_eq!((PERSON.width, PERSON.height), (512, 768));
    }

    #[test]
    fn head_is_above_torso() {
        assert!(HEAD.bounds().bottom() <= TORSO.top());
        assert!(!HEAD.bounds().intersects(&TORSO));
    }

    #[test]
    fn arms_flank_torso_without_overlap() {
        for arm in [LEFT_ARM, RIGHT_ARM] {
            assert!(!arm.overlaps_horizontally(&TORSO));
            assert!(arm.top() > TORSO.top(), "arm starts at shoulder level");
            assert!(arm.bottom() < TORSO.bottom(), "arm ends above torso bottom");
        }
        assert_eq!(LEFT_ARM.right(), TORSO.left());
        assert_eq!(RIGHT_ARM.left(), TORSO.right());
    }

    #[test]
    fn legs_stand_below_torso_side_by_side() {
        for leg in [LEFT_LEG, RIGHT_LEG] {
            assert!(leg.top() >= TORSO.bottom());
        }
        assert!(LEFT_LEG.right() <= RIGHT_LEG.left());
        assert_eq!(LEFT_LEG.top(), RIGHT_LEG.top());
        assert!(!LEFT_LEG.intersects(&RIGHT_LEG));
    }

    #[test]
    fn caption_backings_fit_and_do_not_collide() {
        let backings: Vec<Rect> = CAPTIONS
            .iter()
            .map(|c| {
                let placed = c.place(font::measure(c.text, c.style), PERSON.width);
                let backing = placed.backing.expect("person captions are backed");
                assert!(backing.fits_within(PERSON.width, PERSON.height), "{}", c.text);
                assert!(backing.left() < placed.text_box.left());
                assert!(backing.right() > placed.text_box.right());
                backing
            })
            .collect();
        assert!(!backings[0].intersects(&backings[1]));
        assert!(backings[0].bottom() <= backings[1].top());
    }
}
