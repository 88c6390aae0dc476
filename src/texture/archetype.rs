//! The catalog of procedural surface recipes.

use crate::error::LevelError;
use crate::texture::TextureWrapping;
use std::fmt;
use std::str::FromStr;

/// A named procedural texture recipe.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SurfaceArchetype {
    /// Noisy concrete with cracks and stains.
    #[default]
    Concrete,
    /// A grid of individually tinted tiles separated by grout.
    Tile,
    /// Finely grained plaster, used for ceilings. Has no bump.
    Plaster,
    /// Wavy wood grain with a couple of knots.
    Wood,
    /// Brushed metal with a diagonal sheen.
    Metal,
    /// A glowing, scanlined screen. Clamped and flat.
    Screen,
    /// Metal covered with rust patches and scratches.
    RustyMetal,
}

impl SurfaceArchetype {
    /// All archetypes, in catalog order.
    pub const ALL: [SurfaceArchetype; 7] = [
        SurfaceArchetype::Concrete,
        SurfaceArchetype::Tile,
        SurfaceArchetype::Plaster,
        SurfaceArchetype::Wood,
        SurfaceArchetype::Metal,
        SurfaceArchetype::Screen,
        SurfaceArchetype::RustyMetal,
    ];

    /// The name used by level data for this archetype.
    pub fn name(self) -> &'static str {
        match self {
            SurfaceArchetype::Concrete => "concrete",
            SurfaceArchetype::Tile => "tile",
            SurfaceArchetype::Plaster => "plaster",
            SurfaceArchetype::Wood => "wood",
            SurfaceArchetype::Metal => "metal",
            SurfaceArchetype::Screen => "screen",
            SurfaceArchetype::RustyMetal => "rusty_metal",
        }
    }

    /// Looks up an archetype by name, falling back to [`SurfaceArchetype::Concrete`].
    ///
    /// A typo in level data degrades to concrete instead of failing the level load.
    pub fn from_name_or_default(name: &str) -> SurfaceArchetype {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown surface archetype {:?}, using concrete.", name);
            SurfaceArchetype::Concrete
        })
    }

    /// The fixed generation and material parameters of this archetype.
    pub fn defaults(self) -> ArchetypeDefaults {
        match self {
            SurfaceArchetype::Concrete => ArchetypeDefaults {
                resolution: 256,
                roughness: 0.9,
                metalness: 0.0,
                tex_scale: 2.0,
                normal_strength: 1.0,
                wrapping: TextureWrapping::Repeat,
                bumped: true,
            },
            SurfaceArchetype::Tile => ArchetypeDefaults {
                resolution: 256,
                roughness: 0.5,
                metalness: 0.0,
                tex_scale: 2.0,
                normal_strength: 0.8,
                wrapping: TextureWrapping::Repeat,
                bumped: true,
            },
            SurfaceArchetype::Plaster => ArchetypeDefaults {
                resolution: 128,
                roughness: 0.95,
                metalness: 0.0,
                tex_scale: 3.0,
                normal_strength: 0.0,
                wrapping: TextureWrapping::Repeat,
                bumped: false,
            },
            SurfaceArchetype::Wood => ArchetypeDefaults {
                resolution: 128,
                roughness: 0.7,
                metalness: 0.0,
                tex_scale: 1.5,
                normal_strength: 0.6,
                wrapping: TextureWrapping::Repeat,
                bumped: true,
            },
            SurfaceArchetype::Metal => ArchetypeDefaults {
                resolution: 128,
                roughness: 0.35,
                metalness: 0.8,
                tex_scale: 1.0,
                normal_strength: 0.5,
                wrapping: TextureWrapping::Repeat,
                bumped: true,
            },
            SurfaceArchetype::Screen => ArchetypeDefaults {
                resolution: 64,
                roughness: 0.2,
                metalness: 0.1,
                tex_scale: 1.0,
                normal_strength: 0.0,
                wrapping: TextureWrapping::ClampToEdge,
                bumped: false,
            },
            SurfaceArchetype::RustyMetal => ArchetypeDefaults {
                resolution: 128,
                roughness: 0.75,
                metalness: 0.6,
                tex_scale: 1.5,
                normal_strength: 1.0,
                wrapping: TextureWrapping::Repeat,
                bumped: true,
            },
        }
    }
}

impl fmt::Display for SurfaceArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurfaceArchetype {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurfaceArchetype::ALL
            .iter()
            .copied()
            .find(|a| a.name() == s)
            .ok_or_else(|| LevelError::UnknownArchetype(s.to_string()))
    }
}

/// Fixed parameters of an archetype.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeDefaults {
    /// Width and height of the generated images, in pixels.
    pub resolution: u32,
    /// Material roughness in [0, 1].
    pub roughness: f32,
    /// Material metalness in [0, 1].
    pub metalness: f32,
    /// World units covered by one repetition of the texture.
    pub tex_scale: f32,
    /// Scale the material applies to the normal map.
    pub normal_strength: f32,
    /// How the texture behaves outside of [0, 1].
    pub wrapping: TextureWrapping,
    /// Whether the normal map is extracted from the diffuse image, or flat.
    pub bumped: bool,
}

/// Archetype-specific generation overrides.
///
/// Options are not part of the texture cache key: the first request for an
/// archetype and color decides the options the cached pair is built with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureOptions {
    /// Number of tiles per row and column for [`SurfaceArchetype::Tile`]. Defaults to 4.
    pub tile_count: Option<u32>,
}

impl TextureOptions {
    /// Sets the tile grid count.
    pub fn with_tile_count(mut self, count: u32) -> Self {
        self.tile_count = Some(count);
        self
    }
}
