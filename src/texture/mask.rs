//! Glyph coverage masks.

use crate::error::LevelError;
use rusttype::{point, Font, Scale};

/// Pixel extent of the inked part of a mask, inclusive on every side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InkBounds {
    /// First inked column.
    pub left: u32,
    /// Last inked column.
    pub right: u32,
    /// First inked row.
    pub top: u32,
    /// Last inked row.
    pub bottom: u32,
}

/// A single-channel coverage mask, each sample in [0, 1].
///
/// Decal recipes never draw glyphs directly: the text is rasterized once into
/// a mask and every pass paints through it, offset, grown or outlined.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMask {
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

impl TextMask {
    /// Creates an empty mask.
    pub fn new(width: u32, height: u32) -> TextMask {
        TextMask {
            width,
            height,
            coverage: vec![0.0; (width as usize) * (height as usize)],
        }
    }

    /// Wraps existing row-major coverage samples.
    pub fn from_coverage(
        width: u32,
        height: u32,
        coverage: Vec<f32>,
    ) -> Result<TextMask, LevelError> {
        if coverage.len() != (width as usize) * (height as usize) {
            return Err(LevelError::InvalidDimension {
                what: "mask coverage length",
                value: coverage.len() as f32,
            });
        }

        Ok(TextMask {
            width,
            height,
            coverage,
        })
    }

    /// Rasterizes a single line of text at `size` pixels, with `margin` empty
    /// pixels on every side.
    pub fn rasterize(font: &Font<'_>, text: &str, size: f32, margin: u32) -> TextMask {
        let scale = Scale::uniform(size);
        let v_metrics = font.v_metrics(scale);
        let m = margin as f32;

        let glyphs: Vec<_> = font
            .layout(text, scale, point(m, m + v_metrics.ascent))
            .collect();

        let text_width = glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width - m)
            .unwrap_or(0.0);
        let border = margin.saturating_mul(2);
        let width = (text_width.max(0.0).ceil() as u32).saturating_add(border);
        let text_height = (v_metrics.ascent - v_metrics.descent).ceil().max(0.0) as u32;
        let height = text_height.saturating_add(border);

        let mut mask = TextMask::new(width, height);
        for glyph in &glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, v| {
                    let px = x as i32 + bb.min.x;
                    let py = y as i32 + bb.min.y;
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        let i = (py as u32 * width + px as u32) as usize;
                        mask.coverage[i] = mask.coverage[i].max(v);
                    }
                });
            }
        }

        mask
    }

    /// Mask width, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coverage at `(x, y)`. Zero outside of the mask.
    #[inline]
    pub fn coverage(&self, x: u32, y: u32) -> f32 {
        if x < self.width && y < self.height {
            self.coverage[(y * self.width + x) as usize]
        } else {
            0.0
        }
    }

    /// The inked region, or `None` for an empty mask.
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        let mut bounds: Option<InkBounds> = None;

        for y in 0..self.height {
            for x in 0..self.width {
                if self.coverage(x, y) <= 0.0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => InkBounds {
                        left: x,
                        right: x,
                        top: y,
                        bottom: y,
                    },
                    Some(b) => InkBounds {
                        left: b.left.min(x),
                        right: b.right.max(x),
                        top: b.top.min(y),
                        bottom: b.bottom.max(y),
                    },
                });
            }
        }

        bounds
    }

    /// Grows the inked area by `radius` pixels.
    pub fn dilate(&self, radius: u32) -> TextMask {
        self.morph(radius, f32::max, 0.0)
    }

    /// Shrinks the inked area by `radius` pixels.
    pub fn erode(&self, radius: u32) -> TextMask {
        self.morph(radius, f32::min, 1.0)
    }

    /// A band of `radius` pixels on both sides of the glyph edges, like a
    /// centered stroke of width `2 * radius`.
    pub fn outline(&self, radius: u32) -> TextMask {
        let outer = self.dilate(radius);
        let inner = self.erode(radius);
        let coverage = outer
            .coverage
            .iter()
            .zip(&inner.coverage)
            .map(|(o, i)| (o - i).max(0.0))
            .collect();

        TextMask {
            width: self.width,
            height: self.height,
            coverage,
        }
    }

    fn morph(&self, radius: u32, pick: fn(f32, f32) -> f32, start: f32) -> TextMask {
        if radius == 0 {
            return self.clone();
        }

        let r = radius as i32;
        let r2 = r * r;
        let mut out = TextMask::new(self.width, self.height);

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let mut acc = start;
                for dy in -r..=r {
                    for dx in -r..=r {
                        if dx * dx + dy * dy > r2 {
                            continue;
                        }
                        let (sx, sy) = (x + dx, y + dy);
                        let sample = if sx < 0 || sy < 0 {
                            0.0
                        } else {
                            self.coverage(sx as u32, sy as u32)
                        };
                        acc = pick(acc, sample);
                    }
                }
                out.coverage[(y as u32 * self.width + x as u32) as usize] = acc;
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 12x8 mask with a solid 4x4 block at (4, 2).
    fn block() -> TextMask {
        let coverage = (0..8)
            .flat_map(|y| {
                (0..12).map(move |x| ((4..8).contains(&x) && (2..6).contains(&y)) as u32 as f32)
            })
            .collect();
        TextMask::from_coverage(12, 8, coverage).unwrap()
    }

    #[test]
    fn rejects_mismatched_coverage() {
        assert!(TextMask::from_coverage(3, 3, vec![0.0; 8]).is_err());
    }

    #[test]
    fn ink_bounds_of_block() {
        assert_eq!(
            block().ink_bounds(),
            Some(InkBounds {
                left: 4,
                right: 7,
                top: 2,
                bottom: 5
            })
        );
        assert_eq!(TextMask::new(4, 4).ink_bounds(), None);
    }

    #[test]
    fn dilate_and_erode() {
        let mask = block();
        let grown = mask.dilate(1).ink_bounds().unwrap();
        assert_eq!(
            (grown.left, grown.right, grown.top, grown.bottom),
            (3, 8, 1, 6)
        );
        let shrunk = mask.erode(1).ink_bounds().unwrap();
        assert_eq!(
            (shrunk.left, shrunk.right, shrunk.top, shrunk.bottom),
            (5, 6, 3, 4)
        );
    }

    #[test]
    fn outline_is_hollow() {
        let outline = block().outline(1);
        assert_eq!(outline.coverage(4, 2), 1.0);
        assert_eq!(outline.coverage(3, 3), 1.0);
        assert_eq!(outline.coverage(5, 3), 0.0);
        assert_eq!(outline.coverage(0, 0), 0.0);
    }
}
