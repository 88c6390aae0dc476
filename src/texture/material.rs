//! Texture pairs and the material descriptors built from them.

use crate::texture::{mipmap, ArchetypeDefaults, SurfaceArchetype};
use glamx::Vec2;
use image::RgbaImage;
use std::sync::Arc;

/// Wrapping parameters for a texture.
///
/// This is only the wrapping intent; the renderer maps it to its own sampler
/// address modes.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextureWrapping {
    /// Repeats the texture when a texture coordinate is out of bounds.
    Repeat,
    /// Repeats the nearest edge point texture color when a texture coordinate is out of bounds.
    ClampToEdge,
}

/// How a texture should be sampled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerSettings {
    /// Wrapping along the horizontal texture axis.
    pub wrap_u: TextureWrapping,
    /// Wrapping along the vertical texture axis.
    pub wrap_v: TextureWrapping,
    /// Whether the texture supports mip-mapping.
    pub generate_mipmaps: bool,
}

impl SamplerSettings {
    /// Same wrapping on both axes.
    pub fn uniform(wrapping: TextureWrapping, generate_mipmaps: bool) -> SamplerSettings {
        SamplerSettings {
            wrap_u: wrapping,
            wrap_v: wrapping,
            generate_mipmaps,
        }
    }

    /// Whether both axes repeat.
    pub fn repeats(&self) -> bool {
        self.wrap_u == TextureWrapping::Repeat && self.wrap_v == TextureWrapping::Repeat
    }
}

/// A generated diffuse image and the normal map derived from it.
///
/// Pairs are immutable and shared between every material built from them.
#[derive(Clone, Debug)]
pub struct TexturePair {
    archetype: SurfaceArchetype,
    diffuse: RgbaImage,
    normal: RgbaImage,
    sampler: SamplerSettings,
    diffuse_mips: Vec<RgbaImage>,
    normal_mips: Vec<RgbaImage>,
}

impl TexturePair {
    /// Bundles a diffuse image with its normal map.
    ///
    /// Mip levels are generated right away when the sampler asks for them.
    pub fn new(
        archetype: SurfaceArchetype,
        diffuse: RgbaImage,
        normal: RgbaImage,
        sampler: SamplerSettings,
    ) -> TexturePair {
        debug_assert_eq!(diffuse.dimensions(), normal.dimensions());

        let (diffuse_mips, normal_mips) = if sampler.generate_mipmaps {
            (mipmap::mip_chain(&diffuse), mipmap::mip_chain(&normal))
        } else {
            (Vec::new(), Vec::new())
        };

        TexturePair {
            archetype,
            diffuse,
            normal,
            sampler,
            diffuse_mips,
            normal_mips,
        }
    }

    /// The archetype this pair was generated for.
    #[inline]
    pub fn archetype(&self) -> SurfaceArchetype {
        self.archetype
    }

    /// The base color image.
    #[inline]
    pub fn diffuse(&self) -> &RgbaImage {
        &self.diffuse
    }

    /// The tangent-space normal map.
    #[inline]
    pub fn normal(&self) -> &RgbaImage {
        &self.normal
    }

    /// Sampling intent for both images.
    #[inline]
    pub fn sampler(&self) -> SamplerSettings {
        self.sampler
    }

    /// Width and height shared by both images.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.diffuse.dimensions()
    }

    /// Mip levels below the full-size diffuse image. Empty when mip-mapping is disabled.
    #[inline]
    pub fn diffuse_mips(&self) -> &[RgbaImage] {
        &self.diffuse_mips
    }

    /// Mip levels below the full-size normal map. Empty when mip-mapping is disabled.
    #[inline]
    pub fn normal_mips(&self) -> &[RgbaImage] {
        &self.normal_mips
    }
}

/// A material instance: a shared texture pair plus per-instance tiling.
///
/// Cloning a material is cheap and never copies pixels; each clone may set
/// its own repeat factor.
#[derive(Clone, Debug)]
pub struct SurfaceMaterial {
    /// The shared textures.
    pub textures: Arc<TexturePair>,
    /// How many times the texture repeats across the surface, per axis.
    pub repeat: Vec2,
    /// Material roughness in [0, 1].
    pub roughness: f32,
    /// Material metalness in [0, 1].
    pub metalness: f32,
    /// Scale applied to the normal map by the shader.
    pub normal_scale: f32,
}

impl SurfaceMaterial {
    /// Creates a material covering a surface of `world_size` units.
    ///
    /// Repeat-wrapped textures tile once every `tex_scale` world units;
    /// clamped textures are stretched over the surface exactly once.
    pub fn new(
        textures: Arc<TexturePair>,
        defaults: &ArchetypeDefaults,
        world_size: Vec2,
    ) -> SurfaceMaterial {
        let repeat = if textures.sampler().repeats() && defaults.tex_scale > 0.0 {
            world_size / defaults.tex_scale
        } else {
            Vec2::ONE
        };

        SurfaceMaterial {
            textures,
            repeat,
            roughness: defaults.roughness,
            metalness: defaults.metalness,
            normal_scale: defaults.normal_strength,
        }
    }

    /// Returns a copy of this material with a different repeat factor.
    pub fn with_repeat(&self, repeat: Vec2) -> SurfaceMaterial {
        SurfaceMaterial {
            repeat,
            ..self.clone()
        }
    }
}
