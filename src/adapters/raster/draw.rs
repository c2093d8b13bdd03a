//! CPU rasterization of the layout primitives onto an `RgbImage`.
//!
//! Every routine clips against the canvas; nothing here panics on
//! out-of-range coordinates.

use image::{Rgb, RgbImage};

use crate::layout::{Point, Rect};

/// Degrees between successive vertices when flattening an arc.
const ARC_STEP_DEG: i32 = 1;

/// Write one pixel if it lies on the canvas.
pub fn put(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}

/// Fill the half-open rectangle, clipped to the canvas.
pub fn fill_rect(img: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    let x0 = rect.left().max(0);
    let y0 = rect.top().max(0);
    let x1 = rect.right().min(img.width() as i32);
    let y1 = rect.bottom().min(img.height() as i32);
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Outline the rectangle with bands `width` pixels thick, drawn inward.
pub fn stroke_rect(img: &mut RgbImage, rect: Rect, width: u32, color: Rgb<u8>) {
    let w = width.max(1);
    if 2 * w >= rect.width || 2 * w >= rect.height {
        fill_rect(img, rect, color);
        return;
    }
    let inner_h = rect.height - 2 * w;
    fill_rect(img, Rect::new(rect.x, rect.y, rect.width, w), color);
    fill_rect(img, Rect::new(rect.x, rect.bottom() - w as i32, rect.width, w), color);
    fill_rect(img, Rect::new(rect.x, rect.y + w as i32, w, inner_h), color);
    fill_rect(img, Rect::new(rect.right() - w as i32, rect.y + w as i32, w, inner_h), color);
}

/// Fill every pixel whose center is within `radius` of `center`.
pub fn fill_circle(img: &mut RgbImage, center: Point, radius: u32, color: Rgb<u8>) {
    let r = radius as i32;
    let r2 = i64::from(r) * i64::from(r);
    for dy in -r..=r {
        for dx in -r..=r {
            if i64::from(dx * dx + dy * dy) <= r2 {
                put(img, center.x + dx, center.y + dy, color);
            }
        }
    }
}

/// Ring of pen `width` centered on the circle of `radius`.
pub fn stroke_circle(img: &mut RgbImage, center: Point, radius: u32, width: u32, color: Rgb<u8>) {
    let half = width.max(1) as f32 / 2.0;
    let inner = (radius as f32 - half).max(0.0);
    let outer = radius as f32 + half;
    let reach = outer.ceil() as i32;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let d = ((dx * dx + dy * dy) as f32).sqrt();
            if d >= inner && d <= outer {
                put(img, center.x + dx, center.y + dy, color);
            }
        }
    }
}

/// Stamp a round pen of diameter `width` at `(x, y)`.
fn stamp(img: &mut RgbImage, x: i32, y: i32, width: u32, color: Rgb<u8>) {
    if width <= 1 {
        put(img, x, y, color);
        return;
    }
    let r = width as f32 / 2.0;
    let reach = r.ceil() as i32;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if ((dx * dx + dy * dy) as f32) <= r * r {
                put(img, x + dx, y + dy, color);
            }
        }
    }
}

/// Bresenham line from `a` to `b` with a round pen.
pub fn line(img: &mut RgbImage, a: Point, b: Point, width: u32, color: Rgb<u8>) {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let (mut x, mut y) = (a.x, a.y);
    let mut err = dx + dy;
    loop {
        stamp(img, x, y, width, color);
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Connected segments through `points`, optionally closing the loop.
pub fn polyline(img: &mut RgbImage, points: &[Point], closed: bool, width: u32, color: Rgb<u8>) {
    match points {
        [] => {}
        [only] => stamp(img, only.x, only.y, width, color),
        _ => {
            for pair in points.windows(2) {
                line(img, pair[0], pair[1], width, color);
            }
            if closed {
                line(img, points[points.len() - 1], points[0], width, color);
            }
        }
    }
}

/// Flatten an elliptical arc into vertices, one per degree.
///
/// Consecutive duplicates are dropped. A reversed range is swapped so the
/// sweep always runs clockwise on screen.
#[must_use]
pub fn arc_points(center: Point, axes: (u32, u32), start_deg: i32, end_deg: i32) -> Vec<Point> {
    let (start, end) = if start_deg <= end_deg { (start_deg, end_deg) } else { (end_deg, start_deg) };
    let (a, b) = (f64::from(axes.0), f64::from(axes.1));
    let mut points: Vec<Point> = Vec::new();
    let mut deg = start;
    loop {
        let theta = f64::from(deg).to_radians();
        let p = Point {
            x: center.x + (a * theta.cos()).round() as i32,
            y: center.y + (b * theta.sin()).round() as i32,
        };
        if points.last() != Some(&p) {
            points.push(p);
        }
        if deg >= end {
            break;
        }
        deg = (deg + ARC_STEP_DEG).min(end);
    }
    points
}

/// Even-odd scanline fill of the polygon through `points`.
///
/// Pixel centers are sampled at `y + 0.5`; the polygon is implicitly closed.
pub fn fill_polygon(img: &mut RgbImage, points: &[Point], color: Rgb<u8>) {
    if points.len() < 3 {
        for p in points {
            put(img, p.x, p.y, color);
        }
        return;
    }
    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = points.iter().map(|p| p.y).max().unwrap_or(0).min(img.height() as i32 - 1);
    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

    for y in min_y..=max_y {
        let sample = f64::from(y) + 0.5;
        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let (ay, by) = (f64::from(a.y), f64::from(b.y));
            if (ay <= sample && by > sample) || (by <= sample && ay > sample) {
                let t = (sample - ay) / (by - ay);
                crossings.push(f64::from(a.x) + t * f64::from(b.x - a.x));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            let x0 = (span[0] - 0.5).ceil() as i32;
            let x1 = (span[1] - 0.5).floor() as i32;
            for x in x0..=x1 {
                put(img, x, y, color);
            }
        }
    }
    // Horizontal edges never cross a sample line; draw the outline so thin
    // polygons stay visible.
    polyline(img, points, true, 1, color);
}
