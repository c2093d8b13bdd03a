//! Placeholder generators: fixed layouts rendered onto a fresh canvas.

pub mod accessory;
pub mod face;
pub mod person;

use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::adapters::raster::{Canvas, RasterPainter};
use crate::adapters::recording::{DrawOp, RecordingPainter};
use crate::layout::Layout;
use crate::render::render;

pub use accessory::{Accessory, Swatch};
pub use face::FACE;
pub use person::PERSON;

/// The placeholder images this crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Square portrait used as the face-swap target.
    Face,
    /// Portrait full body used as the body-replacement target.
    Person,
}

impl Kind {
    /// Every kind, in the order the CLI produces them.
    pub const ALL: [Kind; 2] = [Kind::Face, Kind::Person];

    /// Layout constant for this kind.
    #[must_use]
    pub fn layout(self) -> &'static Layout {
        match self {
            Kind::Face => &FACE,
            Kind::Person => &PERSON,
        }
    }

    /// Render this kind's placeholder.
    #[must_use]
    pub fn generate(self) -> Canvas {
        match self {
            Kind::Face => face_placeholder(),
            Kind::Person => person_placeholder(),
        }
    }

    /// File name, without extension, the face-swap pipeline looks for.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Kind::Face => "default_face",
            Kind::Person => "default_person",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layout().name)
    }
}

/// Render `layout` onto a new canvas.
#[must_use]
pub fn generate(layout: &Layout) -> Canvas {
    debug!(
        layout = layout.name,
        width = layout.width,
        height = layout.height,
        shapes = layout.shapes.len(),
        captions = layout.captions.len(),
        "rendering placeholder"
    );
    let mut painter = RasterPainter::new(layout.width, layout.height);
    render(layout, &mut painter);
    painter.into_canvas()
}

/// Like [`generate`], also returning every draw call that was made.
#[must_use]
pub fn generate_recorded(layout: &Layout) -> (Canvas, Vec<DrawOp>) {
    let mut painter = RecordingPainter::new(RasterPainter::new(layout.width, layout.height));
    render(layout, &mut painter);
    let (inner, ops) = painter.into_parts();
    (inner.into_canvas(), ops)
}

/// The face placeholder: 512x512.
#[must_use]
pub fn face_placeholder() -> Canvas {
    generate(&FACE)
}

/// The full-body placeholder: 512x768.
#[must_use]
pub fn person_placeholder() -> Canvas {
    generate(&PERSON)
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;
    use crate::adapters::raster::font;
    use crate::layout::{Paint, Point};

    fn pixel(canvas: &Canvas, p: Point) -> Rgb<u8> {
        *canvas.get_pixel(p.x as u32, p.y as u32)
    }

    #[test]
    fn every_shape_and_caption_fits_its_canvas() {
        for kind in Kind::ALL {
            let layout = kind.layout();
            for shape in layout.shapes {
                let mut bounds = shape.primitive.bounds();
                if let Paint::Stroke { width } = shape.paint {
                    let spill = width.div_ceil(2);
                    bounds.x -= spill as i32;
                    bounds.y -= spill as i32;
                    bounds.width += 2 * spill;
                    bounds.height += 2 * spill;
                }
                assert!(bounds.fits_within(layout.width, layout.height), "{kind}: {shape:?}");
            }
            for caption in layout.captions {
                let placed = caption.place(font::measure(caption.text, caption.style), layout.width);
                let outer = placed.backing.unwrap_or(placed.text_box);
                assert!(outer.fits_within(layout.width, layout.height), "{kind}: {}", caption.text);
            }
        }
    }

    #[test]
    fn dimensions_are_fixed() {
        assert_eq!(face_placeholder().dimensions(), (512, 512));
        assert_eq!(person_placeholder().dimensions(), (512, 768));
    }

    #[test]
    fn corners_keep_the_background() {
        for kind in Kind::ALL {
            let layout = kind.layout();
            let canvas = generate(layout);
            let (w, h) = (layout.width - 1, layout.height - 1);
            for (x, y) in [(0, 0), (w, 0), (0, h), (w, h)] {
                assert_eq!(*canvas.get_pixel(x, y), Rgb::from(layout.background), "{kind}");
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(face_placeholder(), face_placeholder());
        assert_eq!(person_placeholder(), person_placeholder());
        assert_eq!(generate_recorded(&FACE).1, generate_recorded(&FACE).1);
    }

    #[test]
    fn recorded_generation_matches_plain_generation() {
        let (canvas, ops) = generate_recorded(&PERSON);
        assert_eq!(canvas, person_placeholder());
        // clear + 8 shapes + (backing + text) per caption
        assert_eq!(ops.len(), 1 + 8 + 2 * 2);
    }

    #[test]
    fn face_head_differs_from_corners() {
        let canvas = face_placeholder();
        let chin = pixel(&canvas, Point { x: 256, y: 380 });
        assert_eq!(chin, Rgb([200, 180, 160]));
        assert_ne!(chin, *canvas.get_pixel(0, 0));
    }

    #[test]
    fn face_eyes_have_highlights() {
        let canvas = face_placeholder();
        assert_eq!(pixel(&canvas, Point { x: 200, y: 220 }), Rgb([255, 255, 255]));
        assert_eq!(pixel(&canvas, Point { x: 200, y: 235 }), Rgb([50, 50, 50]));
    }

    #[test]
    fn person_leg_midpoint_differs_from_torso_midpoint() {
        let canvas = person_placeholder();
        let torso = pixel(&canvas, Point { x: 256, y: 232 + 318 / 2 });
        // the left leg's midpoint sits under the secondary caption's backing
        let leg = pixel(&canvas, Point { x: 235, y: 550 + 200 / 2 });
        assert_eq!(torso, Rgb([100, 120, 140]));
        assert_ne!(torso, leg);

        let leg_below_caption = pixel(&canvas, Point { x: 235, y: 700 });
        assert_eq!(leg_below_caption, Rgb([60, 80, 100]));
        assert_ne!(torso, leg_below_caption);
    }

    #[test]
    fn rendered_captions_are_centered_on_their_measured_width() {
        for layout in [&FACE, &PERSON] {
            let texts: Vec<_> = generate_recorded(layout)
                .1
                .into_iter()
                .filter_map(|op| match op {
                    DrawOp::Text { origin, extent, .. } => Some((origin, extent)),
                    _ => None,
                })
                .collect();
            assert_eq!(texts.len(), 2, "{}", layout.name);
            assert_ne!(texts[0].1.width, texts[1].1.width, "{}", layout.name);
            for (origin, extent) in texts {
                assert_eq!(origin.x, (layout.width as i32 - extent.width as i32) / 2, "{}", layout.name);
            }
        }
    }

    #[test]
    fn kind_names_and_stems() {
        assert_eq!(Kind::Face.to_string(), "face");
        assert_eq!(Kind::Person.file_stem(), "default_person");
    }
}
