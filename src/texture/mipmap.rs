//! CPU mip chain generation for textures sampled with mip-mapping.

use image::RgbaImage;

/// Number of mip levels of a `width x height` image, the full-size level included.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    (width.max(height).max(1) as f32).log2().floor() as u32 + 1
}

/// Downsamples an RGBA image by half using box filtering.
pub fn downsample(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let new_width = (width / 2).max(1);
    let new_height = (height / 2).max(1);

    RgbaImage::from_fn(new_width, new_height, |x, y| {
        let mut sum = [0u32; 4];
        let mut count = 0u32;

        // Sample the 2x2 source block, or fewer pixels at the edges.
        for dy in 0..2 {
            for dx in 0..2 {
                let sx = x * 2 + dx;
                let sy = y * 2 + dy;
                if sx < width && sy < height {
                    let p = image.get_pixel(sx, sy);
                    for c in 0..4 {
                        sum[c] += p[c] as u32;
                    }
                    count += 1;
                }
            }
        }

        let count = count.max(1);
        image::Rgba([
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
            (sum[3] / count) as u8,
        ])
    })
}

/// Builds every mip level below `base`, down to 1x1. The base level itself is not included.
pub fn mip_chain(base: &RgbaImage) -> Vec<RgbaImage> {
    let levels = mip_level_count(base.width(), base.height());
    let mut chain: Vec<RgbaImage> = Vec::with_capacity(levels.saturating_sub(1) as usize);

    for _ in 1..levels {
        let next = downsample(chain.last().unwrap_or(base));
        chain.push(next);
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn chain_goes_down_to_one_pixel() {
        let base = RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255]));
        let chain = mip_chain(&base);
        assert_eq!(mip_level_count(64, 64), 7);
        assert_eq!(chain.len(), 6);
        assert_eq!(chain[0].dimensions(), (32, 32));
        assert_eq!(chain[5].dimensions(), (1, 1));
        assert_eq!(*chain[5].get_pixel(0, 0), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn downsample_averages_blocks() {
        let base = RgbaImage::from_fn(2, 2, |x, _| {
            if x == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([200, 100, 50, 255])
            }
        });
        assert_eq!(*downsample(&base).get_pixel(0, 0), Rgba([100, 50, 25, 255]));
    }
}
