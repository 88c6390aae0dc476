use crate::color;
use crate::texture::canvas::Canvas;
use image::RgbaImage;
use rand::Rng;
use rgb::RGB8;

const NOISE_AMPLITUDE: f32 = 15.0;

/// Plain plaster: a flat fill with fine noise.
pub fn plaster<R: Rng + ?Sized>(rng: &mut R, base: RGB8, size: u32) -> RgbaImage {
    let mut canvas = Canvas::filled(size, size, color::with_alpha(base, 1.0));
    canvas.add_noise(rng, NOISE_AMPLITUDE);
    canvas.into_image()
}
