//! Color types and helpers shared by the texture, decal and door modules.
//!
//! Surface colors come in as 24-bit RGB values (the way level data stores
//! them) and are converted to [`Color`] values with RGBA components in the
//! range [0.0, 1.0] whenever they are used for drawing.
//!
//! # Example
//! ```
//! # use roomkit::color;
//! let wood = color::rgb_from_hex(0x6b5b3a);
//! let boosted = color::boost(wood, 1.25);
//! assert_eq!(boosted.r, 134);
//! ```

pub use rgb::{Rgba, RGB8};

/// The color type used for drawing. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// Black (0, 0, 0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// White (255, 255, 255)
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Indicator color of a closed door.
pub const INDICATOR_CLOSED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Indicator color of an open door.
pub const INDICATOR_OPEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Splits a `0xRRGGBB` value into its channels. Bits above the lower 24 are ignored.
#[inline]
pub fn rgb_from_hex(hex: u32) -> RGB8 {
    RGB8::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Packs a color back into its `0xRRGGBB` form.
#[inline]
pub fn rgb_to_hex(color: RGB8) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Multiplies every channel by `factor`, rounding and clamping to 255.
///
/// Procedural textures are drawn with a boosted base color because the
/// renderer's lighting and tone mapping darken raw texture colors.
#[inline]
pub fn boost(color: RGB8, factor: f32) -> RGB8 {
    let channel = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    RGB8::new(channel(color.r), channel(color.g), channel(color.b))
}

/// Converts a 24-bit color into a drawing color with the given alpha.
#[inline]
pub fn with_alpha(color: RGB8, alpha: f32) -> Color {
    Color::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        alpha,
    )
}

/// Scales the color channels by `factor`, leaving alpha untouched.
///
/// Factors below one darken, factors above one lighten. Channels saturate at 1.0.
#[inline]
pub fn shade(color: Color, factor: f32) -> Color {
    Color::new(
        (color.r * factor).clamp(0.0, 1.0),
        (color.g * factor).clamp(0.0, 1.0),
        (color.b * factor).clamp(0.0, 1.0),
        color.a,
    )
}

/// Linear interpolation between two colors, alpha included.
#[inline]
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Returns `color` with its alpha replaced.
#[inline]
pub fn alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_rounds_and_clamps() {
        let boosted = boost(RGB8::new(0, 204, 255), 1.25);
        assert_eq!(boosted, RGB8::new(0, 255, 255));

        // 2 * 1.25 = 2.5 rounds up, 100 * 1.25 is exact.
        let boosted = boost(RGB8::new(2, 100, 205), 1.25);
        assert_eq!(boosted, RGB8::new(3, 125, 255));
    }

    #[test]
    fn hex_round_trips_through_channels() {
        let c = rgb_from_hex(0x6b5b3a);
        assert_eq!(c, RGB8::new(0x6b, 0x5b, 0x3a));
        assert_eq!(rgb_to_hex(c), 0x6b5b3a);
        assert_eq!(rgb_from_hex(0xff_123456), RGB8::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn shade_saturates() {
        let c = shade(Color::new(0.8, 0.5, 0.1, 0.3), 2.0);
        assert_eq!(c, Color::new(1.0, 1.0, 0.2, 0.3));
    }
}
