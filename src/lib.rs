/*!
# Roomkit

Level content for walkable 3D rooms: procedural surface textures, wall
writing decals and sliding shutter doors.

**roomkit** does not render anything. It hands images, material intents and
box-shaped door parts to whatever engine draws the level, and keeps the
runtime state of the doors.

## Features

* seven procedural surface archetypes (concrete, tile, plaster, wood, metal,
  screen, rusty metal), each a diffuse image plus a Sobel-derived normal map.
* a texture cache keyed by archetype and color, with explicit disposal.
* per-surface material instances that share the cached pixels and only carry
  their own tiling.
* five wall writing styles (scratch, chalk, paint, blood, carved) rendered
  onto transparent images.
* two-panel sliding doors with an ease-out opening animation, collider and
  interaction volume bookkeeping.

```
use roomkit::prelude::*;
use glamx::{Vec2, Vec3};

let mut textures = TextureSynthesizer::new();
let wall = textures.material(
    SurfaceArchetype::Concrete,
    0x8a8a85,
    Vec2::new(6.0, 3.0),
    &TextureOptions::default(),
);
assert_eq!(wall.textures.size(), (256, 256));

let mut doors = DoorController::new();
let atrium = DoorSpec::new("atrium", WallSide::East, Vec3::new(5.0, 1.2, 0.0), 2.0, 2.4);
let door = doors.create_door(atrium);
doors.open_door(door);
for _ in 0..60 {
    doors.update(1.0 / 60.0);
}
assert!(doors.door(door).map_or(false, |d| d.is_open()));
```

Everything is single-threaded and synchronous. Texture generation is
expensive and belongs in level loading; door updates are cheap and belong in
the frame loop.
*/
#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]

pub use glamx;

pub mod color;
pub mod decal;
pub mod door;
pub mod error;
pub mod texture;

pub mod prelude {
    pub use crate::color::*;
    pub use crate::decal::*;
    pub use crate::door::*;
    pub use crate::error::*;
    pub use crate::texture::*;
    pub use glamx::{Vec2, Vec3};
}
