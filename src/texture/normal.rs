//! Normal map extraction.
//!
//! The diffuse image is turned into a luminance height field, and a 3x3
//! Sobel kernel estimates the slope at every pixel. Neighbors are sampled
//! toroidally so the normal map tiles exactly like the diffuse image does.

use glamx::Vec3;
use image::{Rgba, RgbaImage};

/// Bump strength applied to the Sobel gradient.
pub const NORMAL_STRENGTH: f32 = 0.8;

/// The encoding of a normal pointing straight out of the surface.
pub const FLAT_NORMAL: Rgba<u8> = Rgba([128, 128, 255, 255]);

/// Encodes a unit normal component from [-1, 1] to [0, 255].
///
/// Halfway values round to even, so the zero component encodes to 128.
#[inline]
fn encode(component: f32) -> u8 {
    ((component * 0.5 + 0.5) * 255.0)
        .round_ties_even()
        .clamp(0.0, 255.0) as u8
}

/// Converts an image into normalized luminance samples, row-major.
pub fn height_field(image: &RgbaImage) -> Vec<f32> {
    image
        .pixels()
        .map(|p| (0.299 * p[0] as f32 + 0.587 * p[1] as f32 + 0.114 * p[2] as f32) / 255.0)
        .collect()
}

/// Computes a tangent-space normal map from the luminance of `diffuse`.
pub fn normal_from_diffuse(diffuse: &RgbaImage, strength: f32) -> RgbaImage {
    let (width, height) = diffuse.dimensions();
    let heights = height_field(diffuse);
    let (w, h) = (width as i64, height as i64);

    let sample = |x: i64, y: i64| -> f32 {
        let sx = x.rem_euclid(w);
        let sy = y.rem_euclid(h);
        heights[(sy * w + sx) as usize]
    };

    RgbaImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as i64, y as i64);

        let tl = sample(x - 1, y - 1);
        let t = sample(x, y - 1);
        let tr = sample(x + 1, y - 1);
        let l = sample(x - 1, y);
        let r = sample(x + 1, y);
        let bl = sample(x - 1, y + 1);
        let b = sample(x, y + 1);
        let br = sample(x + 1, y + 1);

        let dx = (tr + 2.0 * r + br) - (tl + 2.0 * l + bl);
        let dy = (bl + 2.0 * b + br) - (tl + 2.0 * t + tr);

        let n = Vec3::new(-dx * strength, -dy * strength, 1.0).normalize();
        Rgba([encode(n.x), encode(n.y), encode(n.z), 255])
    })
}

/// A normal map with no bump at all.
pub fn flat_normal(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, FLAT_NORMAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_gives_flat_normals() {
        let diffuse = RgbaImage::from_pixel(16, 16, Rgba([90, 140, 200, 255]));
        let normal = normal_from_diffuse(&diffuse, NORMAL_STRENGTH);
        assert!(normal.pixels().all(|p| *p == FLAT_NORMAL));
        assert_eq!(normal, flat_normal(16, 16));
    }

    #[test]
    fn sampling_wraps_around_the_edges() {
        let mut diffuse = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        diffuse.put_pixel(0, 4, Rgba([255, 255, 255, 255]));
        let normal = normal_from_diffuse(&diffuse, NORMAL_STRENGTH);

        // The bright pixel is the right-hand neighbor of the last column, so the
        // surface there slopes up toward +x and the normal tilts toward -x.
        let last = normal.get_pixel(7, 4);
        assert!(last[0] < 128, "{:?}", last);
        assert_eq!(last[1], 128);

        // And the first column sees the wrapped last column on its left.
        let mut diffuse = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        diffuse.put_pixel(7, 4, Rgba([255, 255, 255, 255]));
        let normal = normal_from_diffuse(&diffuse, NORMAL_STRENGTH);
        let first = normal.get_pixel(0, 4);
        assert!(first[0] > 128, "{:?}", first);

        // Columns far from the bright pixel stay flat.
        assert_eq!(*normal.get_pixel(3, 4), FLAT_NORMAL);
    }

    #[test]
    fn vertical_gradient_tilts_y() {
        let mut diffuse = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        diffuse.put_pixel(3, 0, Rgba([255, 255, 255, 255]));
        let normal = normal_from_diffuse(&diffuse, NORMAL_STRENGTH);
        // Row 7 wraps onto row 0 below it.
        assert!(normal.get_pixel(3, 7)[1] < 128);
        assert!(normal.get_pixel(3, 1)[1] > 128);
    }

    #[test]
    fn height_field_is_normalized_luminance() {
        let image = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([255, 0, 0, 255])
            }
        });
        let heights = height_field(&image);
        assert!((heights[0] - 1.0).abs() < 1.0e-5);
        assert!((heights[1] - 0.299).abs() < 1.0e-5);
    }
}
