//! In-memory raster painter backed by an `image::RgbImage`.

pub mod draw;
pub mod font;

use image::{Rgb, RgbImage};

use crate::layout::{Color, Point, Primitive, Rect, TextExtent, TextStyle};
use crate::ports::Painter;

/// A placeholder canvas: 8-bit RGB pixels, row-major.
pub type Canvas = RgbImage;

/// Software painter that draws straight into a [`Canvas`].
pub struct RasterPainter {
    canvas: Canvas,
}

impl RasterPainter {
    /// Create a painter over a black `width` x `height` canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { canvas: RgbImage::new(width, height) }
    }

    /// Hand over the finished canvas.
    #[must_use]
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

impl Painter for RasterPainter {
    fn size(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    fn clear(&mut self, color: Color) {
        let px = Rgb::from(color);
        for p in self.canvas.pixels_mut() {
            *p = px;
        }
    }

    fn fill(&mut self, primitive: &Primitive, color: Color) {
        let px = Rgb::from(color);
        match *primitive {
            Primitive::Circle { center, radius } => {
                draw::fill_circle(&mut self.canvas, center, radius, px);
            }
            Primitive::Rect(rect) => draw::fill_rect(&mut self.canvas, rect, px),
            Primitive::Polyline { points, .. } => draw::fill_polygon(&mut self.canvas, points, px),
            Primitive::Arc { center, axes, start_deg, end_deg } => {
                // Pie slice: the arc plus the center.
                let mut sector = draw::arc_points(center, axes, start_deg, end_deg);
                sector.push(center);
                draw::fill_polygon(&mut self.canvas, &sector, px);
            }
        }
    }

    fn stroke(&mut self, primitive: &Primitive, color: Color, width: u32) {
        let px = Rgb::from(color);
        match *primitive {
            Primitive::Circle { center, radius } => {
                draw::stroke_circle(&mut self.canvas, center, radius, width, px);
            }
            Primitive::Rect(rect) => draw::stroke_rect(&mut self.canvas, rect, width, px),
            Primitive::Polyline { points, closed } => {
                draw::polyline(&mut self.canvas, points, closed, width, px);
            }
            Primitive::Arc { center, axes, start_deg, end_deg } => {
                let points = draw::arc_points(center, axes, start_deg, end_deg);
                draw::polyline(&mut self.canvas, &points, false, width, px);
            }
        }
    }

    fn measure_text(&self, text: &str, style: TextStyle) -> TextExtent {
        font::measure(text, style)
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: TextStyle, color: Color) {
        let px = Rgb::from(color);
        let dot = font::dot_size(style.scale);
        let bold = style.thickness.saturating_sub(1);
        let top = origin.y - (font::ASCENT_ROWS * dot) as i32;

        for (i, ch) in text.chars().enumerate() {
            let left = origin.x + (i as u32 * font::ADVANCE * dot) as i32;
            for (row, bits) in font::glyph(ch).iter().enumerate() {
                for col in 0..font::GLYPH_COLS {
                    if bits >> (font::GLYPH_COLS - 1 - col) & 1 == 0 {
                        continue;
                    }
                    let cell = Rect::new(
                        left + (col * dot) as i32,
                        top + (row as u32 * dot) as i32,
                        dot + bold,
                        dot,
                    );
                    draw::fill_rect(&mut self.canvas, cell, px);
                }
            }
        }
    }
}
