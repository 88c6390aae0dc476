//! Diffuse image generators, one per surface archetype.
//!
//! Every generator receives the already-boosted base color and draws an
//! image of the archetype's fixed resolution.

use crate::texture::{SurfaceArchetype, TextureOptions};
use image::RgbaImage;
use rand::Rng;
use rgb::RGB8;

pub use self::concrete::concrete;
pub use self::metal::metal;
pub use self::plaster::plaster;
pub use self::rusty_metal::rusty_metal;
pub use self::screen::screen;
pub use self::tile::tile;
pub use self::wood::wood;

mod concrete;
mod metal;
mod plaster;
mod rusty_metal;
mod screen;
mod tile;
mod wood;

/// Draws the diffuse image of `archetype`.
pub fn diffuse<R: Rng + ?Sized>(
    archetype: SurfaceArchetype,
    rng: &mut R,
    base: RGB8,
    options: &TextureOptions,
) -> RgbaImage {
    let size = archetype.defaults().resolution;

    match archetype {
        SurfaceArchetype::Concrete => concrete(rng, base, size),
        SurfaceArchetype::Tile => {
            let count = options.tile_count.unwrap_or(tile::DEFAULT_TILE_COUNT);
            tile(rng, base, size, count)
        }
        SurfaceArchetype::Plaster => plaster(rng, base, size),
        SurfaceArchetype::Wood => wood(rng, base, size),
        SurfaceArchetype::Metal => metal(rng, base, size),
        SurfaceArchetype::Screen => screen(rng, base, size),
        SurfaceArchetype::RustyMetal => rusty_metal(rng, base, size),
    }
}
