use crate::color;
use crate::texture::canvas::{Canvas, GradientStop};
use glamx::Vec2;
use image::RgbaImage;
use rand::Rng;
use rgb::RGB8;

const GRAIN_ALPHA: f32 = 0.15;
const KNOTS: usize = 2;
const NOISE_AMPLITUDE: f32 = 8.0;

/// Grain band profile of scanline `y`, in [-1, 1].
#[inline]
pub fn grain_wave(y: f32) -> f32 {
    (y * 0.08 + (y * 0.02).sin() * 3.0).sin()
}

/// Wood with horizontal grain bands and a couple of elliptical knots.
pub fn wood<R: Rng + ?Sized>(rng: &mut R, base: RGB8, size: u32) -> RgbaImage {
    let s = size as f32;
    let base = color::with_alpha(base, 1.0);
    let dark = color::shade(base, 0.6);
    let mut canvas = Canvas::filled(size, size, base);

    for y in 0..size {
        let wave = grain_wave(y as f32);
        let alpha = (wave * 0.5 + 0.5) * GRAIN_ALPHA;
        canvas.fill_rect(0.0, y as f32, s, 1.0, color::alpha(dark, alpha));
    }

    for _ in 0..KNOTS {
        let center = Vec2::new(rng.random_range(0.0..s), rng.random_range(0.0..s));
        let radius = rng.random_range(4.0..10.0);
        canvas.radial_gradient(
            center,
            radius,
            Vec2::new(1.6, 0.8),
            &[
                GradientStop::new(0.0, color::alpha(color::shade(base, 0.4), 0.6)),
                GradientStop::new(0.6, color::alpha(dark, 0.3)),
                GradientStop::new(1.0, color::alpha(dark, 0.0)),
            ],
        );
    }

    canvas.add_noise(rng, NOISE_AMPLITUDE);
    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grain_wave_is_bounded_and_varies() {
        let samples: Vec<f32> = (0..128).map(|y| grain_wave(y as f32)).collect();
        assert!(samples.iter().all(|w| (-1.0..=1.0).contains(w)));
        assert_eq!(grain_wave(0.0), 0.0);
        let (lo, hi) = samples
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), w| (lo.min(*w), hi.max(*w)));
        assert!(hi - lo > 1.5);
    }
}
