use crate::color;
use crate::texture::canvas::Canvas;
use image::RgbaImage;
use rand::Rng;
use rgb::RGB8;

/// Tiles per row and column unless overridden.
pub const DEFAULT_TILE_COUNT: u32 = 4;
/// Grout gap between neighboring tiles, in pixels.
pub const GROUT_WIDTH: f32 = 4.0;

const GROUT_SHADE: f32 = 0.6;
const TILE_JITTER: f32 = 6.0;
const NOISE_AMPLITUDE: f32 = 10.0;

/// A grid of `count x count` tiles, each slightly brighter or darker, on darker grout.
pub fn tile<R: Rng + ?Sized>(rng: &mut R, base: RGB8, size: u32, count: u32) -> RgbaImage {
    let count = count.max(1);
    let base = color::with_alpha(base, 1.0);
    let mut canvas = Canvas::filled(size, size, color::shade(base, GROUT_SHADE));

    let step = size as f32 / count as f32;
    let inset = GROUT_WIDTH * 0.5;

    for row in 0..count {
        for col in 0..count {
            let jitter = rng.random_range(-TILE_JITTER..=TILE_JITTER) / 255.0;
            let tint = color::Color::new(
                (base.r + jitter).clamp(0.0, 1.0),
                (base.g + jitter).clamp(0.0, 1.0),
                (base.b + jitter).clamp(0.0, 1.0),
                1.0,
            );
            canvas.fill_rect(
                col as f32 * step + inset,
                row as f32 * step + inset,
                step - GROUT_WIDTH,
                step - GROUT_WIDTH,
                tint,
            );
        }
    }

    canvas.add_noise(rng, NOISE_AMPLITUDE);
    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn grout_lines_are_darker_than_tiles() {
        let mut rng = StdRng::seed_from_u64(2);
        let image = tile(&mut rng, RGB8::new(200, 200, 200), 256, 4);
        // Pixel 0 sits in the grout, the tile centers are 64 px apart.
        let grout = image.get_pixel(0, 0)[0] as i32;
        let tile_center = image.get_pixel(32, 32)[0] as i32;
        assert!(tile_center - grout > 50, "{} vs {}", tile_center, grout);
    }

    #[test]
    fn tile_count_changes_the_grid() {
        let mut rng = StdRng::seed_from_u64(2);
        let image = tile(&mut rng, RGB8::new(200, 200, 200), 256, 2);
        // With two tiles the midline at 128 is grout, 64 is inside a tile.
        assert!((image.get_pixel(128, 64)[0] as i32) < 140);
        assert!((image.get_pixel(64, 64)[0] as i32) > 180);
    }
}
