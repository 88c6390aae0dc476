use crate::color;
use crate::texture::canvas::{Canvas, GradientStop};
use glamx::Vec2;
use image::RgbaImage;
use rand::Rng;
use rgb::RGB8;

const STREAK_AMPLITUDE: f32 = 10.0;
const NOISE_AMPLITUDE: f32 = 6.0;
const SHEEN_ALPHA: f32 = 0.1;

/// Brushed metal: a random brightness streak per scanline, fine noise and a diagonal sheen.
pub fn metal<R: Rng + ?Sized>(rng: &mut R, base: RGB8, size: u32) -> RgbaImage {
    let s = size as f32;
    let mut canvas = Canvas::filled(size, size, color::with_alpha(base, 1.0));

    let image = canvas.image_mut();
    for y in 0..size {
        let streak = (rng.random::<f32>() - 0.5) * STREAK_AMPLITUDE;
        for x in 0..size {
            let noise = (rng.random::<f32>() - 0.5) * NOISE_AMPLITUDE;
            let pixel = image.get_pixel_mut(x, y);
            for c in 0..3 {
                pixel[c] = (pixel[c] as f32 + streak + noise).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    canvas.linear_gradient(
        Vec2::ZERO,
        Vec2::splat(s),
        &[
            GradientStop::new(0.0, color::alpha(color::WHITE, 0.0)),
            GradientStop::new(0.5, color::alpha(color::WHITE, SHEEN_ALPHA)),
            GradientStop::new(1.0, color::alpha(color::WHITE, 0.0)),
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
    fn sheen_brightens_the_diagonal() {
        let image = metal(&mut StdRng::seed_from_u64(4), RGB8::new(100, 100, 100), 128);
        let mean = |keep: &dyn Fn(u32) -> bool| {
            let values: Vec<f32> = image
                .enumerate_pixels()
                .filter(|(x, y, _)| keep(x + y))
                .map(|(_, _, p)| p[0] as f32)
                .collect();
            values.iter().sum::<f32>() / values.len() as f32
        };
        // The sheen peaks across the anti-diagonal and fades out at the corners.
        let band = mean(&|d| (120..136).contains(&d));
        let corner = mean(&|d| d < 16);
        assert!(band > corner + 8.0, "{} vs {}", band, corner);
    }
}
