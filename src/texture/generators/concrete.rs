use crate::color;
use crate::texture::canvas::{Canvas, GradientStop};
use glamx::Vec2;
use image::RgbaImage;
use rand::Rng;
use rgb::RGB8;

const NOISE_AMPLITUDE: f32 = 16.0;
const CRACKS: usize = 5;
const STAINS: usize = 5;

/// Noisy concrete with a few jagged cracks and soft stains.
pub fn concrete<R: Rng + ?Sized>(rng: &mut R, base: RGB8, size: u32) -> RgbaImage {
    let s = size as f32;
    let mut canvas = Canvas::filled(size, size, color::with_alpha(base, 1.0));
    canvas.add_noise(rng, NOISE_AMPLITUDE);

    let crack = color::shade(color::with_alpha(base, 1.0), 0.5);
    for _ in 0..CRACKS {
        let mut p = Vec2::new(rng.random_range(0.0..s), rng.random_range(0.0..s));
        let mut points = vec![p];
        for _ in 0..rng.random_range(3..8) {
            p += Vec2::new(rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0));
            points.push(p);
        }
        let alpha = rng.random_range(0.3..0.5);
        let width = rng.random_range(0.5..1.5);
        canvas.stroke_polyline(&points, width, color::alpha(crack, alpha));
    }

    let stain = color::shade(color::with_alpha(base, 1.0), 0.7);
    for _ in 0..STAINS {
        let center = Vec2::new(rng.random_range(0.0..s), rng.random_range(0.0..s));
        let radius = rng.random_range(20.0..60.0);
        canvas.radial_gradient(
            center,
            radius,
            Vec2::ONE,
            &[
                GradientStop::new(0.0, color::alpha(stain, 0.15)),
                GradientStop::new(1.0, color::alpha(stain, 0.0)),
            ],
        );
    }

    canvas.into_image()
}
