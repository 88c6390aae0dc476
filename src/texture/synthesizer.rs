//! The texture synthesizer and its cache.

use crate::color::{self, RGB8};
use crate::error::LevelError;
use crate::texture::normal::{self, NORMAL_STRENGTH};
use crate::texture::{
    generators, SamplerSettings, SurfaceArchetype, SurfaceMaterial, TextureOptions, TexturePair,
};
use glamx::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;

/// Brightness factor applied to every base color before drawing.
pub const BRIGHTNESS_BOOST: f32 = 1.25;

/// Settings of a [`TextureSynthesizer`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesizerConfig {
    /// Seed of the random source. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Factor applied to the base color channels.
    pub brightness_boost: f32,
    /// Strength of the Sobel gradient when extracting normal maps.
    pub normal_strength: f32,
    /// Whether generated textures carry a mip chain.
    pub generate_mipmaps: bool,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            brightness_boost: BRIGHTNESS_BOOST,
            normal_strength: NORMAL_STRENGTH,
            generate_mipmaps: false,
        }
    }
}

impl SynthesizerConfig {
    /// Uses a fixed seed, making generation reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether generated textures carry a mip chain.
    pub fn with_mipmaps(mut self, enabled: bool) -> Self {
        self.generate_mipmaps = enabled;
        self
    }
}

/// Generates and caches diffuse + normal texture pairs.
///
/// Pairs are cached by archetype and color. The generation options are not
/// part of the key: once a pair exists, later requests for the same archetype
/// and color get it back regardless of their options.
pub struct TextureSynthesizer {
    config: SynthesizerConfig,
    rng: StdRng,
    cache: HashMap<(SurfaceArchetype, u32), Arc<TexturePair>>,
}

impl Default for TextureSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureSynthesizer {
    /// Creates a synthesizer with the default configuration.
    pub fn new() -> TextureSynthesizer {
        TextureSynthesizer::with_config(SynthesizerConfig::default())
    }

    /// Creates a synthesizer with the given configuration.
    pub fn with_config(config: SynthesizerConfig) -> TextureSynthesizer {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        TextureSynthesizer {
            config,
            rng,
            cache: HashMap::new(),
        }
    }

    /// The configuration this synthesizer was built with.
    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Gets the texture pair of `archetype` in the 24-bit color `color`,
    /// generating it on first use.
    pub fn get(
        &mut self,
        archetype: SurfaceArchetype,
        color: u32,
        options: &TextureOptions,
    ) -> Arc<TexturePair> {
        let color = color & 0x00ff_ffff;
        let key = (archetype, color);

        if let Some(pair) = self.cache.get(&key) {
            return pair.clone();
        }

        let base = color::rgb_from_hex(color);
        let pair = Arc::new(self.generate(archetype, base, options));
        log::debug!(
            "Generated {} texture for #{:06x} ({}x{}).",
            archetype,
            color,
            pair.size().0,
            pair.size().1
        );
        let _ = self.cache.insert(key, pair.clone());
        pair
    }

    /// Like [`TextureSynthesizer::get`] but looks the archetype up by name,
    /// falling back to concrete for unknown names.
    pub fn get_named(
        &mut self,
        archetype: &str,
        color: u32,
        options: &TextureOptions,
    ) -> Arc<TexturePair> {
        let archetype = SurfaceArchetype::from_name_or_default(archetype);
        self.get(archetype, color, options)
    }

    /// Like [`TextureSynthesizer::get_named`] but rejects unknown archetype names.
    pub fn try_get(
        &mut self,
        archetype: &str,
        color: u32,
        options: &TextureOptions,
    ) -> Result<Arc<TexturePair>, LevelError> {
        let archetype = archetype.parse()?;
        Ok(self.get(archetype, color, options))
    }

    /// Builds a material covering a surface of `world_size` units, sharing the cached pair.
    pub fn material(
        &mut self,
        archetype: SurfaceArchetype,
        color: u32,
        world_size: Vec2,
        options: &TextureOptions,
    ) -> SurfaceMaterial {
        let textures = self.get(archetype, color, options);
        SurfaceMaterial::new(textures, &archetype.defaults(), world_size)
    }

    /// Number of cached texture pairs.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Releases every cached texture pair.
    ///
    /// Pairs still held by materials stay alive until those are dropped; the
    /// synthesizer itself no longer references them.
    pub fn dispose(&mut self) {
        log::info!("Disposing {} cached texture pairs.", self.cache.len());
        self.cache.clear();
    }

    fn generate(
        &mut self,
        archetype: SurfaceArchetype,
        color: RGB8,
        options: &TextureOptions,
    ) -> TexturePair {
        let defaults = archetype.defaults();
        let base = color::boost(color, self.config.brightness_boost);
        let diffuse = generators::diffuse(archetype, &mut self.rng, base, options);

        let normal = if defaults.bumped {
            normal::normal_from_diffuse(&diffuse, self.config.normal_strength)
        } else {
            normal::flat_normal(diffuse.width(), diffuse.height())
        };

        let sampler = SamplerSettings::uniform(defaults.wrapping, self.config.generate_mipmaps);
        TexturePair::new(archetype, diffuse, normal, sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::normal::FLAT_NORMAL;

    fn synthesizer() -> TextureSynthesizer {
        TextureSynthesizer::with_config(SynthesizerConfig::default().with_seed(42))
    }

    #[test]
    fn pairs_have_matching_archetype_resolution() {
        let mut synth = synthesizer();
        for archetype in SurfaceArchetype::ALL {
            let pair = synth.get(archetype, 0x808080, &TextureOptions::default());
            let size = archetype.defaults().resolution;
            assert_eq!(pair.diffuse().dimensions(), (size, size));
            assert_eq!(pair.normal().dimensions(), (size, size));
        }
        assert_eq!(synth.len(), 7);
    }

    #[test]
    fn cache_returns_the_same_pair() {
        let mut synth = synthesizer();
        let a = synth.get(SurfaceArchetype::Wood, 0x6b5b3a, &TextureOptions::default());
        let b = synth.get(SurfaceArchetype::Wood, 0x6b5b3a, &TextureOptions::default());
        assert!(Arc::ptr_eq(&a, &b));

        let other = synth.get(SurfaceArchetype::Wood, 0x6b5b3b, &TextureOptions::default());
        assert!(!Arc::ptr_eq(&a, &other));
        assert_eq!(synth.len(), 2);
    }

    #[test]
    fn options_are_not_part_of_the_key() {
        let mut synth = synthesizer();
        let a = synth.get(SurfaceArchetype::Tile, 0xdddddd, &TextureOptions::default());
        let b = synth.get(
            SurfaceArchetype::Tile,
            0xdddddd,
            &TextureOptions::default().with_tile_count(8),
        );
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn plaster_and_screen_have_flat_normals() {
        let mut synth = synthesizer();
        let options = TextureOptions::default();
        for archetype in [SurfaceArchetype::Plaster, SurfaceArchetype::Screen] {
            let pair = synth.get(archetype, 0x405060, &options);
            assert!(pair.normal().pixels().all(|p| *p == FLAT_NORMAL));
        }
        let concrete = synth.get(SurfaceArchetype::Concrete, 0x405060, &options);
        assert!(concrete.normal().pixels().any(|p| *p != FLAT_NORMAL));
    }

    #[test]
    fn unknown_names() {
        let mut synth = synthesizer();
        let options = TextureOptions::default();
        let pair = synth.get_named("granite", 0x777777, &options);
        assert_eq!(pair.archetype(), SurfaceArchetype::Concrete);
        assert!(synth.try_get("granite", 0x777777, &options).is_err());
        assert!(synth.try_get("rusty_metal", 0x777777, &options).is_ok());
    }

    #[test]
    fn dispose_empties_the_cache() {
        let mut synth = synthesizer();
        let material = synth.material(
            SurfaceArchetype::Metal,
            0x999999,
            Vec2::new(4.0, 2.0),
            &TextureOptions::default(),
        );
        assert_eq!(material.repeat, Vec2::new(4.0, 2.0));
        assert!(!synth.is_empty());
        synth.dispose();
        assert!(synth.is_empty());
        // Materials keep their pixels alive on their own.
        assert_eq!(material.textures.size(), (128, 128));
    }
}
