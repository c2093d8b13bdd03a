//! Declarative layout data shared by every placeholder kind.
//!
//! A [`Layout`] is pure data: canvas size, background, the shapes to draw
//! back-to-front, and the captions to overlay. The drawing mechanics live in
//! [`crate::render`] and the painter adapters.

use serde::Serialize;

/// An RGB color. Channel order is red, green, blue everywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Build a color from its red, green and blue channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Uniform gray.
    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self([level, level, level])
    }

    /// White.
    pub const WHITE: Self = Self::gray(255);
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.0)
    }
}

/// Integer pixel coordinate; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

/// Shorthand constructor used by the layout tables.
#[must_use]
pub const fn pt(x: i32, y: i32) -> Point {
    Point { x, y }
}

/// Axis-aligned rectangle covering columns `x..x + width` and rows
/// `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    /// Left column (inclusive).
    pub x: i32,
    /// Top row (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Build a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// First covered column.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// One past the last covered column.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// First covered row.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// One past the last covered row.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Whether the rectangle lies entirely within a `width` x `height` canvas.
    #[must_use]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left() >= 0
            && self.top() >= 0
            && i64::from(self.right()) <= i64::from(width)
            && i64::from(self.bottom()) <= i64::from(height)
    }
}

#[cfg(test)]
impl Rect {
    /// Whether the two rectangles share at least one pixel.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether the two rectangles share at least one column.
    #[must_use]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }
}

/// Geometry of a single drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Circle around `center`.
    Circle {
        /// Center pixel.
        center: Point,
        /// Radius in pixels.
        radius: u32,
    },
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Connected line segments through `points`.
    Polyline {
        /// Vertices in drawing order.
        points: &'static [Point],
        /// Connect the last vertex back to the first.
        closed: bool,
    },
    /// Part of an axis-aligned ellipse outline.
    ///
    /// Angles are in degrees, measured clockwise on screen from the +x axis,
    /// so `0..180` sweeps through the lower half.
    Arc {
        /// Ellipse center.
        center: Point,
        /// Horizontal and vertical semi-axes.
        axes: (u32, u32),
        /// Sweep start.
        start_deg: i32,
        /// Sweep end.
        end_deg: i32,
    },
}

impl Primitive {
    /// Smallest rectangle covering every pixel the primitive can touch when
    /// filled. Strokes may spill by up to half their width beyond this.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match *self {
            Primitive::Circle { center, radius } => {
                let r = radius as i32;
                Rect::new(center.x - r, center.y - r, 2 * radius + 1, 2 * radius + 1)
            }
            Primitive::Rect(rect) => rect,
            Primitive::Polyline { points, .. } => {
                let min_x = points.iter().map(|p| p.x).min().unwrap_or(0);
                let max_x = points.iter().map(|p| p.x).max().unwrap_or(0);
                let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
                let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);
                Rect::new(min_x, min_y, (max_x - min_x + 1) as u32, (max_y - min_y + 1) as u32)
            }
            Primitive::Arc { center, axes: (a, b), .. } => {
                let (a, b) = (a as i32, b as i32);
                Rect::new(center.x - a, center.y - b, 2 * a as u32 + 1, 2 * b as u32 + 1)
            }
        }
    }
}

/// How a primitive is applied to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Cover the interior.
    Fill,
    /// Trace the outline with the given pen width.
    Stroke {
        /// Pen width in pixels.
        width: u32,
    },
}

/// One drawing step of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Geometry.
    pub primitive: Primitive,
    /// Paint color.
    pub color: Color,
    /// Fill or stroke.
    pub paint: Paint,
}

impl Shape {
    /// A filled shape.
    #[must_use]
    pub const fn filled(primitive: Primitive, color: Color) -> Self {
        Self { primitive, color, paint: Paint::Fill }
    }

    /// An outlined shape.
    #[must_use]
    pub const fn stroked(primitive: Primitive, color: Color, width: u32) -> Self {
        Self { primitive, color, paint: Paint::Stroke { width } }
    }
}

/// Font scale and stroke weight for a caption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Relative font size; `1.0` is the painter's nominal size.
    pub scale: f32,
    /// Stroke weight in pixels; `1` is regular.
    pub thickness: u32,
}

/// Measured size of a rendered string, relative to its baseline origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextExtent {
    /// Horizontal advance of the whole string.
    pub width: u32,
    /// Pixels above the baseline.
    pub ascent: u32,
    /// Pixels below the baseline.
    pub descent: u32,
}

/// Opaque rectangle drawn behind a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backing {
    /// Fill color.
    pub color: Color,
    /// Horizontal padding on each side of the text.
    pub pad_x: u32,
    /// Vertical padding above the ascent and below the descent.
    pub pad_y: u32,
}

/// A horizontally centered line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caption {
    /// Text content.
    pub text: &'static str,
    /// Row of the baseline.
    pub baseline: i32,
    /// Font scale and weight.
    pub style: TextStyle,
    /// Text color.
    pub color: Color,
    /// Optional legibility backing.
    pub backing: Option<Backing>,
}

/// Where a caption ends up once its text has been measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionPlacement {
    /// Left end of the baseline.
    pub origin: Point,
    /// Box covering the text from ascent to descent.
    pub text_box: Rect,
    /// Backing rectangle, when the caption has one.
    pub backing: Option<Rect>,
}

/// Left edge that centers `text_width` pixels on a canvas `canvas_width` wide.
#[must_use]
pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width as i32 - text_width as i32) / 2
}

impl Caption {
    /// Resolve the caption's position from its measured extent.
    #[must_use]
    pub fn place(&self, extent: TextExtent, canvas_width: u32) -> CaptionPlacement {
        let x = centered_x(canvas_width, extent.width);
        let origin = pt(x, self.baseline);
        let text_box = Rect::new(
            x,
            self.baseline - extent.ascent as i32,
            extent.width,
            extent.ascent + extent.descent,
        );
        let backing = self.backing.map(|b| {
            Rect::new(
                text_box.x - b.pad_x as i32,
                text_box.y - b.pad_y as i32,
                text_box.width + 2 * b.pad_x,
                text_box.height + 2 * b.pad_y,
            )
        });
        CaptionPlacement { origin, text_box, backing }
    }
}

/// Complete description of one placeholder image.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Short name, also used for logging.
    pub name: &'static str,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Color every pixel gets before any shape is drawn.
    pub background: Color,
    /// Shapes, back to front.
    pub shapes: &'static [Shape],
    /// Captions, drawn after all shapes in order.
    pub captions: &'static [Caption],
}
