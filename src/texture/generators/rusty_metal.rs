use crate::color::{self, Color};
use crate::texture::canvas::{Canvas, GradientStop};
use glamx::Vec2;
use image::RgbaImage;
use rand::Rng;
use rgb::RGB8;

const RUST_PATCHES: usize = 12;
const SCRATCHES: usize = 10;
const NOISE_AMPLITUDE: f32 = 20.0;

/// The rust tone derived from a metal color: warmer and darker.
pub fn rust_tone(base: Color) -> Color {
    Color::new(
        (base.r * 0.8 + 0.2).min(1.0),
        base.g * 0.55,
        base.b * 0.3,
        1.0,
    )
}

/// Metal with soft rust patches, thin scratches and coarse noise.
pub fn rusty_metal<R: Rng + ?Sized>(rng: &mut R, base: RGB8, size: u32) -> RgbaImage {
    let s = size as f32;
    let base = color::with_alpha(base, 1.0);
    let rust = rust_tone(base);
    let mut canvas = Canvas::filled(size, size, base);

    for _ in 0..RUST_PATCHES {
        let center = Vec2::new(rng.random_range(0.0..s), rng.random_range(0.0..s));
        let radius = rng.random_range(8.0..28.0);
        canvas.radial_gradient(
            center,
            radius,
            Vec2::ONE,
            &[
                GradientStop::new(0.0, color::alpha(rust, 0.6)),
                GradientStop::new(0.7, color::alpha(rust, 0.25)),
                GradientStop::new(1.0, color::alpha(rust, 0.0)),
            ],
        );
    }

    let scratch = color::alpha(color::shade(base, 1.3), 0.3);
    for _ in 0..SCRATCHES {
        let from = Vec2::new(rng.random_range(0.0..s), rng.random_range(0.0..s));
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let length = rng.random_range(5.0..25.0);
        let to = from + Vec2::new(angle.cos(), angle.sin()) * length;
        canvas.stroke_segment(from, to, rng.random_range(0.5..1.0), scratch);
    }

    canvas.add_noise(rng, NOISE_AMPLITUDE);
    canvas.into_image()
}
