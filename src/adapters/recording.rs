//! Recording adapter for the `Painter` port.

use serde::Serialize;

use crate::layout::{Color, Point, Primitive, TextExtent, TextStyle};
use crate::ports::Painter;

/// One call made against a painter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// [`Painter::clear`].
    Clear {
        /// Background color.
        color: Color,
    },
    /// [`Painter::fill`].
    Fill {
        /// Geometry.
        primitive: Primitive,
        /// Paint color.
        color: Color,
    },
    /// [`Painter::stroke`].
    Stroke {
        /// Geometry.
        primitive: Primitive,
        /// Paint color.
        color: Color,
        /// Pen width.
        width: u32,
    },
    /// [`Painter::draw_text`], with the extent the painter reports for it.
    Text {
        /// Rendered string.
        text: String,
        /// Baseline origin.
        origin: Point,
        /// Font scale and weight.
        style: TextStyle,
        /// Text color.
        color: Color,
        /// Measured extent.
        extent: TextExtent,
    },
}

/// Records draw calls while delegating to an inner painter.
pub struct RecordingPainter<P> {
    inner: P,
    ops: Vec<DrawOp>,
}

impl<P: Painter> RecordingPainter<P> {
    /// Wrap `inner`; nothing is recorded until the first call.
    pub fn new(inner: P) -> Self {
        Self { inner, ops: Vec::new() }
    }

    /// Release the inner painter together with the recorded calls.
    pub fn into_parts(self) -> (P, Vec<DrawOp>) {
        (self.inner, self.ops)
    }
}

impl<P: Painter> Painter for RecordingPainter<P> {
    fn size(&self) -> (u32, u32) {
        self.inner.size()
    }

    fn clear(&mut self, color: Color) {
        self.inner.clear(color);
        self.ops.push(DrawOp::Clear { color });
    }

    fn fill(&mut self, primitive: &Primitive, color: Color) {
        self.inner.fill(primitive, color);
        self.ops.push(DrawOp::Fill { primitive: *primitive, color });
    }

    fn stroke(&mut self, primitive: &Primitive, color: Color, width: u32) {
        self.inner.stroke(primitive, color, width);
        self.ops.push(DrawOp::Stroke { primitive: *primitive, color, width });
    }

    fn measure_text(&self, text: &str, style: TextStyle) -> TextExtent {
        self.inner.measure_text(text, style)
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: TextStyle, color: Color) {
        self.inner.draw_text(text, origin, style, color);
        let extent = self.inner.measure_text(text, style);
        self.ops.push(DrawOp::Text { text: text.to_string(), origin, style, color, extent });
    }
}
