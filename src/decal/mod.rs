//! Wall writing decals.
//!
//! Text is rasterized into a [`TextMask`](crate::texture::TextMask) and painted onto a transparent
//! image by one of the [`DecalStyle`] recipes. Decals are random by nature
//! and are never cached.

pub use self::renderer::{render_mask, DecalOptions, WallTextRenderer, MAX_GLYPH_SIZE};
pub use self::style::DecalStyle;

mod renderer;
mod style;
