//! Procedural surface textures.
//!
//! A [`TextureSynthesizer`] draws a diffuse image for one of the
//! [`SurfaceArchetype`] recipes, derives a normal map from it and caches the
//! resulting [`TexturePair`]. Materials built from a pair share its pixels
//! and only carry their own tiling.
//!
//! # Example
//! ```
//! # use roomkit::prelude::*;
//! # use glamx::Vec2;
//! let mut synth = TextureSynthesizer::with_config(SynthesizerConfig::default().with_seed(7));
//! let floor = synth.material(
//!     SurfaceArchetype::Tile,
//!     0xd8d4c8,
//!     Vec2::new(6.0, 4.0),
//!     &TextureOptions::default(),
//! );
//! assert_eq!(floor.repeat, Vec2::new(3.0, 2.0));
//! synth.dispose();
//! ```

pub use self::archetype::{ArchetypeDefaults, SurfaceArchetype, TextureOptions};
pub use self::canvas::{Canvas, GradientStop};
pub use self::mask::{InkBounds, TextMask};
pub use self::material::{SamplerSettings, SurfaceMaterial, TexturePair, TextureWrapping};
pub use self::normal::{flat_normal, normal_from_diffuse, FLAT_NORMAL, NORMAL_STRENGTH};
pub use self::synthesizer::{SynthesizerConfig, TextureSynthesizer, BRIGHTNESS_BOOST};

mod archetype;
pub mod canvas;
pub mod generators;
mod mask;
mod material;
pub mod mipmap;
pub mod normal;
mod synthesizer;
