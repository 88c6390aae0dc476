//! Sliding shutter doors.
//!
//! A [`DoorController`] owns every door of a level. Doors start closed,
//! start sliding open on [`DoorController::open_door`] and finish opening
//! after [`DoorConfig::duration`] seconds of [`DoorController::update`]
//! calls. They never close again.
//!
//! Teardown happens in two steps: the collider disappears the moment a door
//! is told to open, while the interaction volume stays until the panels are
//! fully retracted.
//!
//! # Example
//! ```
//! # use roomkit::prelude::*;
//! # use glamx::Vec3;
//! let mut doors = DoorController::new();
//! let id = doors.create_door(DoorSpec::new("lobby", WallSide::North, Vec3::ZERO, 2.0, 2.4));
//! doors.open_door(id);
//! assert_eq!(doors.colliders().count(), 0);
//! assert_eq!(doors.interactables().count(), 1);
//! doors.update(0.9);
//! assert_eq!(doors.interactables().count(), 0);
//! ```

pub use self::controller::{DoorController, Interactable};
pub use self::door::{
    ease_out_cubic, Door, DoorConfig, DoorId, DoorSpec, DoorState, InteractVolume, Panel, VolumeId,
};
pub use self::geometry::{Aabb, DoorPart, SlideAxis, WallSide};

mod controller;
mod door;
mod geometry;
