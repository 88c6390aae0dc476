use crate::color;
use crate::texture::canvas::{Canvas, GradientStop};
use glamx::Vec2;
use image::RgbaImage;
use rand::Rng;
use rgb::RGB8;

const SCANLINE_ALPHA: f32 = 0.15;
/// Static noise amplitudes for red, green and blue; tinted toward blue.
const STATIC_AMPLITUDE: [f32; 3] = [20.0, 10.0, 30.0];
const GLOW_ALPHA: f32 = 0.2;

/// A glowing screen: scanlines every other row, bluish static and a soft center glow.
pub fn screen<R: Rng + ?Sized>(rng: &mut R, base: RGB8, size: u32) -> RgbaImage {
    let s = size as f32;
    let base = color::with_alpha(base, 1.0);
    let mut canvas = Canvas::filled(size, size, base);

    let scanline = color::alpha(color::BLACK, SCANLINE_ALPHA);
    for y in (0..size).step_by(2) {
        canvas.fill_rect(0.0, y as f32, s, 1.0, scanline);
    }

    canvas.add_channel_noise(rng, STATIC_AMPLITUDE);

    let glow = color::shade(base, 1.5);
    canvas.radial_gradient(
        Vec2::splat(s * 0.5),
        s * 0.5,
        Vec2::ONE,
        &[
            GradientStop::new(0.0, color::alpha(glow, GLOW_ALPHA)),
            GradientStop::new(1.0, color::alpha(glow, 0.0)),
        ],
    );

    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn even_rows_are_scanlines() {
        let image = screen(&mut StdRng::seed_from_u64(9), RGB8::new(40, 160, 120), 64);
        let row_mean = |y: u32| {
            let sum: f32 = (0..64).map(|x| image.get_pixel(x, y)[1] as f32).sum();
            sum / 64.0
        };
        assert!(row_mean(2) < row_mean(3));
        assert!(row_mean(60) < row_mean(61));
    }
}
