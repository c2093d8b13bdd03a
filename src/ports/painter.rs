//! Drawing capability used by the shared render routine.

use crate::layout::{Color, Point, Primitive, TextExtent, TextStyle};

/// A surface that shapes and text can be drawn onto.
///
/// Layout code talks only to this trait, so a backend can be swapped without
/// touching any placeholder definition.
pub trait Painter {
    /// Canvas size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Assign `color` to every pixel.
    fn clear(&mut self, color: Color);

    /// Cover the interior of `primitive`.
    fn fill(&mut self, primitive: &Primitive, color: Color);

    /// Trace the outline of `primitive` with a pen `width` pixels wide.
    fn stroke(&mut self, primitive: &Primitive, color: Color, width: u32);

    /// Measure `text` as [`Painter::draw_text`] would render it.
    fn measure_text(&self, text: &str, style: TextStyle) -> TextExtent;

    /// Render `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: TextStyle, color: Color);
}
