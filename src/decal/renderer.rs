use crate::color::{self, RGB8};
use crate::decal::style::{self, Placement};
use crate::decal::DecalStyle;
use crate::error::LevelError;
use crate::texture::{Canvas, TextMask};
use glamx::Vec2;
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusttype::Font;

/// Largest glyph height a decal is drawn at, in pixels.
pub const MAX_GLYPH_SIZE: f32 = 1024.0;

/// Size and look parameters of a decal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecalOptions {
    /// Glyph height in pixels.
    pub font_size: f32,
    /// Overall opacity in [0, 1].
    pub opacity: f32,
    /// Color of the wall the decal is applied to. Only carved writing uses it.
    pub surface: RGB8,
    /// Empty pixels around the text. Defaults to half the glyph size, and is
    /// never more than [`MAX_GLYPH_SIZE`].
    pub padding: Option<u32>,
}

impl Default for DecalOptions {
    fn default() -> Self {
        Self {
            font_size: 48.0,
            opacity: 0.85,
            surface: color::rgb_from_hex(0x808080),
            padding: None,
        }
    }
}

impl DecalOptions {
    /// Sets the glyph height.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the overall opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the color of the underlying wall.
    pub fn with_surface(mut self, surface: RGB8) -> Self {
        self.surface = surface;
        self
    }

    /// Sets the empty border around the text.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Glyph height actually used for drawing, in `[1, MAX_GLYPH_SIZE]`.
    #[inline]
    pub fn glyph_size(&self) -> f32 {
        if self.font_size.is_finite() {
            self.font_size.clamp(1.0, MAX_GLYPH_SIZE)
        } else {
            1.0
        }
    }

    fn padding(&self) -> u32 {
        let limit = MAX_GLYPH_SIZE as u32;
        self.padding
            .unwrap_or_else(|| (self.glyph_size() * 0.5).ceil() as u32)
            .min(limit)
    }
}

/// Renders a coverage mask as wall writing.
///
/// The image is the mask plus padding on every side, and one extra font
/// height below the text for drips. Empty masks give a fully transparent image.
pub fn render_mask<R: Rng + ?Sized>(
    rng: &mut R,
    mask: &TextMask,
    style: DecalStyle,
    options: &DecalOptions,
) -> RgbaImage {
    let pad = options.padding();
    let border = pad.saturating_mul(2);
    let width = mask.width().saturating_add(border);
    let height = mask
        .height()
        .saturating_add(border)
        .saturating_add(options.glyph_size().ceil() as u32);
    let mut canvas = Canvas::new(width, height);

    if let Some(ink) = mask.ink_bounds() {
        let placement = Placement {
            mask,
            origin: Vec2::splat(pad as f32),
            ink,
        };
        style::draw(style, &mut canvas, &placement, options, rng);
    }

    canvas.into_image()
}

/// Renders text decals with a given font.
pub struct WallTextRenderer {
    font: Font<'static>,
    rng: StdRng,
}

impl WallTextRenderer {
    /// Creates a renderer seeded from the operating system.
    pub fn new(font: Font<'static>) -> WallTextRenderer {
        WallTextRenderer {
            font,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a renderer with reproducible output.
    pub fn with_seed(font: Font<'static>, seed: u64) -> WallTextRenderer {
        WallTextRenderer {
            font,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Parses a TrueType or OpenType font and creates a renderer for it.
    pub fn from_font_bytes(bytes: Vec<u8>) -> Result<WallTextRenderer, LevelError> {
        let font = Font::try_from_vec(bytes).ok_or(LevelError::InvalidFont)?;
        Ok(WallTextRenderer::new(font))
    }

    /// Rasterizes `text` without styling it.
    pub fn mask(&self, text: &str, options: &DecalOptions) -> TextMask {
        TextMask::rasterize(&self.font, text, options.glyph_size(), 0)
    }

    /// Draws `text` in the given style onto a transparent image.
    pub fn generate_wall_text(
        &mut self,
        text: &str,
        style: DecalStyle,
        options: &DecalOptions,
    ) -> RgbaImage {
        let mask = self.mask(text, options);
        log::debug!(
            "Drawing {} wall text {:?} ({}x{} mask).",
            style,
            text,
            mask.width(),
            mask.height()
        );
        render_mask(&mut self.rng, &mask, style, options)
    }

    /// Like [`WallTextRenderer::generate_wall_text`], with the style looked up
    /// by name and unknown names falling back to scratch.
    pub fn generate_wall_text_named(
        &mut self,
        text: &str,
        style: &str,
        options: &DecalOptions,
    ) -> RgbaImage {
        self.generate_wall_text(text, DecalStyle::from_name_or_default(style), options)
    }
}
