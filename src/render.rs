//! Shared rendering routine: turns a [`Layout`] into painter calls.

use tracing::{debug, trace};

use crate::layout::{Layout, Paint, Primitive};
use crate::ports::Painter;

/// Draw `layout` onto `painter`, back to front.
///
/// The background is assigned to every pixel first, then each shape in
/// order, then each caption. A caption's backing rectangle, when present, is
/// filled immediately before its text.
pub fn render<P: Painter + ?Sized>(layout: &Layout, painter: &mut P) {
    debug_assert_eq!(painter.size(), (layout.width, layout.height));

    painter.clear(layout.background);

    for shape in layout.shapes {
        trace!(
            layout = layout.name,
            bounds = ?shape.primitive.bounds(),
            paint = ?shape.paint,
            "shape"
        );
        match shape.paint {
            Paint::Fill => painter.fill(&shape.primitive, shape.color),
            Paint::Stroke { width } => painter.stroke(&shape.primitive, shape.color, width),
        }
    }

    for caption in layout.captions {
        let extent = painter.measure_text(caption.text, caption.style);
        let placed = caption.place(extent, layout.width);
        debug!(
            layout = layout.name,
            text = caption.text,
            x = placed.origin.x,
            baseline = placed.origin.y,
            width = extent.width,
            "placed caption"
        );
        debug_assert!(
            placed.backing.unwrap_or(placed.text_box).fits_within(layout.width, layout.height),
            "caption {:?} leaves the canvas",
            caption.text
        );
        if let (Some(backing), Some(rect)) = (caption.backing, placed.backing) {
            painter.fill(&Primitive::Rect(rect), backing.color);
        }
        painter.draw_text(caption.text, placed.origin, caption.style, caption.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::raster::RasterPainter;
    use crate::adapters::recording::{DrawOp, RecordingPainter};
    use crate::layout::{pt, Backing, Caption, Color, Rect, Shape, TextStyle};

    const SHAPES: &[Shape] = &[
        Shape::filled(Primitive::Rect(Rect::new(0, 0, 10, 10)), Color::gray(0)),
        Shape::stroked(Primitive::Circle { center: pt(50, 20), radius: 8 }, Color::gray(9), 2),
    ];

    const CAPTIONS: &[Caption] = &[Caption {
        text: "abc",
        baseline: 50,
        style: TextStyle { scale: 0.5, thickness: 1 },
        color: Color::gray(100),
        backing: Some(Backing { color: Color::WHITE, pad_x: 4, pad_y: 2 }),
    }];

    const LAYOUT: Layout = Layout {
        name: "test",
        width: 100,
        height: 60,
        background: Color::gray(240),
        shapes: SHAPES,
        captions: CAPTIONS,
    };

    fn recorded() -> Vec<DrawOp> {
        let mut painter = RecordingPainter::new(RasterPainter::new(100, 60));
        render(&LAYOUT, &mut painter);
        painter.into_parts().1
    }

    #[test]
    fn background_comes_first() {
        assert_eq!(recorded()[0], DrawOp::Clear { color: Color::gray(240) });
    }

    #[test]
    fn shapes_follow_paint_mode() {
        let ops = recorded();
        assert!(matches!(ops[1], DrawOp::Fill { primitive: Primitive::Rect(_), .. }));
        assert!(matches!(ops[2], DrawOp::Stroke { width: 2, .. }));
    }

    #[test]
    fn backing_precedes_centered_text() {
        let ops = recorded();
        assert_eq!(ops.len(), 5);
        // "abc" at dot 2 measures 34 wide: x = (100 - 34) / 2 = 33
        assert_eq!(
            ops[3],
            DrawOp::Fill { primitive: Primitive::Rect(Rect::new(29, 34, 42, 22)), color: Color::WHITE }
        );
        match &ops[4] {
            DrawOp::Text { origin, .. } => assert_eq!(*origin, pt(33, 50)),
            other => panic!("unexpected op {other:?}"),
        }
    }
}
