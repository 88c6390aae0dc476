//! A small software drawing surface.
//!
//! [`Canvas`] offers the handful of 2D drawing operations the procedural
//! generators and decal recipes need: filled shapes, anti-aliased strokes,
//! gradients and noise. Everything is composited with the usual source-over
//! rule on top of an [`image::RgbaImage`].

use crate::color::{self, Color};
use crate::texture::TextMask;
use glamx::Vec2;
use image::{Rgba, RgbaImage};
use rand::Rng;

/// Number of line segments a cubic bezier curve is flattened into.
const BEZIER_SEGMENTS: usize = 24;

/// A color stop of a gradient.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Position of the stop along the gradient, in [0, 1].
    pub offset: f32,
    /// Color at that position.
    pub color: Color,
}

impl GradientStop {
    /// Creates a new gradient stop.
    pub fn new(offset: f32, color: Color) -> GradientStop {
        GradientStop { offset, color }
    }
}

/// Samples a sorted list of stops at `t`. Positions before the first and after
/// the last stop take that stop's color.
fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Color::new(0.0, 0.0, 0.0, 0.0),
    };

    if t <= first.offset {
        return first.color;
    }

    for pair in stops.windows(2) {
        if t <= pair[1].offset {
            let span = pair[1].offset - pair[0].offset;
            let local = if span > 0.0 {
                (t - pair[0].offset) / span
            } else {
                1.0
            };
            return color::mix(pair[0].color, pair[1].color, local);
        }
    }

    last.color
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Distance from `p` to the segment `[a, b]`.
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// An RGBA drawing surface.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas {
            image: RgbaImage::new(width, height),
        }
    }

    /// Creates a canvas filled with `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        canvas.fill(color);
        canvas
    }

    /// The canvas width, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// The canvas height, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The pixels drawn so far.
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Direct access to the pixels, for per-pixel passes.
    #[inline]
    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Consumes the canvas and returns its pixels.
    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Composites `color` over the pixel at `(x, y)`. Out of bounds pixels are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }

        let src_a = color.a.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        for (i, src) in [color.r, color.g, color.b].iter().enumerate() {
            let d = dst[i] as f32 / 255.0;
            dst[i] = to_byte((src * src_a + d * dst_a * (1.0 - src_a)) / out_a);
        }
        dst[3] = to_byte(out_a);
    }

    /// Paints the whole canvas.
    pub fn fill(&mut self, color: Color) {
        self.fill_rect(0.0, 0.0, self.width() as f32, self.height() as f32, color);
    }

    /// Paints the pixels whose centers fall inside the rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let x0 = x.round().max(0.0) as i32;
        let y0 = y.round().max(0.0) as i32;
        let x1 = ((x + width).round() as i32).min(self.width() as i32);
        let y1 = ((y + height).round() as i32).min(self.height() as i32);

        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Paints an anti-aliased disc.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let reach = Vec2::splat(radius + 1.0);
        let (x0, y0, x1, y1) = self.clip_bounds(center - reach, center + reach);

        for py in y0..y1 {
            for px in x0..x1 {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = (radius + 0.5 - p.distance(center)).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(px, py, color::alpha(color, color.a * coverage));
                }
            }
        }
    }

    /// Strokes a single line segment.
    pub fn stroke_segment(&mut self, a: Vec2, b: Vec2, width: f32, color: Color) {
        self.stroke_polyline(&[a, b], width, color);
    }

    /// Strokes an open polyline. Each pixel is painted once, even where segments meet.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }

        let half = width * 0.5;
        let (lo, hi) = points.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(lo, hi), p| (lo.min(*p), hi.max(*p)),
        );
        let reach = Vec2::splat(half + 1.0);
        let (x0, y0, x1, y1) = self.clip_bounds(lo - reach, hi + reach);

        for py in y0..y1 {
            for px in x0..x1 {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let dist = points
                    .windows(2)
                    .map(|s| segment_distance(p, s[0], s[1]))
                    .fold(f32::MAX, f32::min);
                let coverage = (half + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(px, py, color::alpha(color, color.a * coverage));
                }
            }
        }
    }

    /// Strokes a cubic bezier curve.
    pub fn stroke_cubic(
        &mut self,
        p0: Vec2,
        c0: Vec2,
        c1: Vec2,
        p1: Vec2,
        width: f32,
        color: Color,
    ) {
        let points: Vec<Vec2> = (0..=BEZIER_SEGMENTS)
            .map(|i| {
                let t = i as f32 / BEZIER_SEGMENTS as f32;
                let u = 1.0 - t;
                p0 * (u * u * u)
                    + c0 * (3.0 * u * u * t)
                    + c1 * (3.0 * u * t * t)
                    + p1 * (t * t * t)
            })
            .collect();
        self.stroke_polyline(&points, width, color);
    }

    /// Paints a radial gradient inside the ellipse of the given radius.
    ///
    /// `stretch` scales the gradient along each axis; `Vec2::ONE` gives a
    /// circle. Pixels outside the ellipse are left untouched.
    pub fn radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        stretch: Vec2,
        stops: &[GradientStop],
    ) {
        if radius <= 0.0 {
            return;
        }

        let extent = stretch.abs() * radius;
        let (x0, y0, x1, y1) = self.clip_bounds(center - extent, center + extent + Vec2::ONE);

        for py in y0..y1 {
            for px in x0..x1 {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let t = ((p - center) / stretch).length() / radius;
                if t <= 1.0 {
                    self.blend_pixel(px, py, sample_stops(stops, t));
                }
            }
        }
    }

    /// Paints a linear gradient running from `from` to `to` over the whole canvas.
    pub fn linear_gradient(&mut self, from: Vec2, to: Vec2, stops: &[GradientStop]) {
        let dir = to - from;
        let len2 = dir.length_squared().max(f32::EPSILON);

        for py in 0..self.height() as i32 {
            for px in 0..self.width() as i32 {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let t = ((p - from).dot(dir) / len2).clamp(0.0, 1.0);
                self.blend_pixel(px, py, sample_stops(stops, t));
            }
        }
    }

    /// Adds the same uniform noise in `[-amplitude / 2, amplitude / 2)` to the
    /// three color channels of every pixel.
    pub fn add_noise<R: Rng + ?Sized>(&mut self, rng: &mut R, amplitude: f32) {
        for pixel in self.image.pixels_mut() {
            let n = (rng.random::<f32>() - 0.5) * amplitude;
            for c in 0..3 {
                pixel[c] = (pixel[c] as f32 + n).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    /// Adds independent uniform noise to each color channel, with a separate
    /// amplitude per channel.
    pub fn add_channel_noise<R: Rng + ?Sized>(&mut self, rng: &mut R, amplitudes: [f32; 3]) {
        for pixel in self.image.pixels_mut() {
            for (c, amplitude) in amplitudes.iter().enumerate() {
                let n = (rng.random::<f32>() - 0.5) * amplitude;
                pixel[c] = (pixel[c] as f32 + n).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    /// Paints `color` through a coverage mask whose top-left corner lands on `offset`.
    pub fn draw_mask(&mut self, mask: &TextMask, offset: Vec2, color: Color) {
        let ox = offset.x.round() as i32;
        let oy = offset.y.round() as i32;

        for y in 0..mask.height() {
            for x in 0..mask.width() {
                let coverage = mask.coverage(x, y);
                if coverage > 0.0 {
                    self.blend_pixel(
                        ox + x as i32,
                        oy + y as i32,
                        color::alpha(color, color.a * coverage),
                    );
                }
            }
        }
    }

    /// Reads back a pixel.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    fn clip_bounds(&self, lo: Vec2, hi: Vec2) -> (i32, i32, i32, i32) {
        (
            (lo.x.floor() as i32).max(0),
            (lo.y.floor() as i32).max(0),
            (hi.x.ceil() as i32).min(self.width() as i32),
            (hi.y.ceil() as i32).min(self.height() as i32),
        )
    }
}
