//! Runtime owner of every door in a level.

use crate::door::{Aabb, Door, DoorConfig, DoorId, DoorSpec, InteractVolume, VolumeId};
use crate::error::LevelError;

/// An interaction target handed to the interaction layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interactable<'a> {
    /// The room the door belongs to.
    pub room: &'a str,
    /// The door to open when the target is used.
    pub door: DoorId,
    /// The volume to hit-test against.
    pub volume: &'a InteractVolume,
}

/// Creates, animates and answers queries about the doors of a level.
///
/// Driven by the host's frame loop through [`DoorController::update`].
pub struct DoorController {
    config: DoorConfig,
    // Sorted by id: ids only grow.
    doors: Vec<Door>,
    animating: Vec<DoorId>,
    next_door: u32,
    next_volume: u32,
}

impl Default for DoorController {
    fn default() -> Self {
        Self::new()
    }
}

impl DoorController {
    /// Creates a controller with the default door configuration.
    pub fn new() -> DoorController {
        DoorController::with_config(DoorConfig::default())
    }

    /// Creates a controller with the given door configuration.
    pub fn with_config(config: DoorConfig) -> DoorController {
        DoorController {
            config,
            doors: Vec::new(),
            animating: Vec::new(),
            next_door: 0,
            next_volume: 0,
        }
    }

    /// The configuration shared by all doors.
    pub fn config(&self) -> &DoorConfig {
        &self.config
    }

    /// Builds a closed door and registers it.
    ///
    /// Dimensions are trusted; see [`DoorController::try_create_door`] for a
    /// checked variant.
    pub fn create_door(&mut self, spec: DoorSpec) -> DoorId {
        let id = DoorId(self.next_door);
        let volume = VolumeId(self.next_volume);
        self.next_door += 1;
        self.next_volume += 1;

        log::debug!(
            "Creating door {:?} in {} ({:?} wall, {}x{}).",
            id,
            spec.room,
            spec.wall,
            spec.width,
            spec.height
        );
        self.doors.push(Door::new(id, volume, spec, &self.config));
        id
    }

    /// Like [`DoorController::create_door`], but rejects zero, negative and
    /// non-finite sizes.
    pub fn try_create_door(&mut self, spec: DoorSpec) -> Result<DoorId, LevelError> {
        for (what, value) in [("door width", spec.width), ("door height", spec.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LevelError::InvalidDimension { what, value });
            }
        }
        Ok(self.create_door(spec))
    }

    /// Starts opening a door.
    ///
    /// Returns `false`, and changes nothing, if the door is already opening,
    /// already open, or unknown. The collider is removed immediately.
    pub fn open_door(&mut self, id: DoorId) -> bool {
        let door = match self.index_of(id) {
            Some(i) => &mut self.doors[i],
            None => {
                log::warn!("Cannot open unknown door {:?}.", id);
                return false;
            }
        };

        if !door.begin_opening() {
            return false;
        }

        log::debug!("Opening door {:?}.", id);
        self.animating.push(id);
        true
    }

    /// Advances every opening door by `delta` seconds.
    ///
    /// A door finishes once its elapsed time reaches the configured duration.
    /// Progress within `1e-5` of the end, about 9 µs of the default 0.9 s,
    /// counts as reached, so frame deltas that sum to the duration in `f32`
    /// always open the door. Anything shorter leaves it opening.
    pub fn update(&mut self, delta: f32) {
        let duration = self.config.duration;
        let doors = &mut self.doors;

        self.animating.retain(|id| match doors.binary_search_by_key(id, |d| d.id()) {
            Ok(i) => {
                let done = doors[i].advance(delta, duration);
                if done {
                    log::debug!("Door {:?} is open.", id);
                }
                !done
            }
            Err(_) => false,
        });
    }

    /// Collision volumes of the doors that still block the way.
    pub fn colliders(&self) -> impl Iterator<Item = (DoorId, &Aabb)> + '_ {
        self.doors
            .iter()
            .filter_map(|d| d.collider().map(|c| (d.id(), c)))
    }

    /// Interaction targets of the doors that are closed or still opening.
    pub fn interactables(&self) -> impl Iterator<Item = Interactable<'_>> + '_ {
        self.doors.iter().filter_map(|d| {
            d.interact_volume().map(|volume| Interactable {
                room: d.room(),
                door: d.id(),
                volume,
            })
        })
    }

    /// Resolves a hit interaction volume back to its door.
    pub fn door_by_interact_volume(&self, volume: VolumeId) -> Option<DoorId> {
        self.doors
            .iter()
            .find(|d| d.interact_volume().map(|v| v.id) == Some(volume))
            .map(|d| d.id())
    }

    /// Looks a door up by handle.
    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.index_of(id).map(|i| &self.doors[i])
    }

    /// All doors, in creation order.
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Number of doors currently sliding open.
    pub fn animating_count(&self) -> usize {
        self.animating.len()
    }

    /// Drops every door. Handles from before the call no longer resolve.
    pub fn clear(&mut self) {
        log::info!("Clearing {} doors.", self.doors.len());
        self.doors.clear();
        self.animating.clear();
    }

    fn index_of(&self, id: DoorId) -> Option<usize> {
        self.doors.binary_search_by_key(&id, |d| d.id()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::door::{DoorState, WallSide};
    use glamx::Vec3;

    fn spec() -> DoorSpec {
        DoorSpec::new("hall", WallSide::South, Vec3::ZERO, 2.0, 2.0)
    }

    #[test]
    fn open_is_idempotent() {
        let mut doors = DoorController::new();
        let id = doors.create_door(spec());
        assert!(doors.open_door(id));
        doors.update(0.3);
        assert!(!doors.open_door(id));
        assert_eq!(doors.animating_count(), 1);
        assert_eq!(
            doors.door(id).map(|d| d.state()),
            Some(DoorState::Opening { elapsed: 0.3 })
        );
    }

    #[test]
    fn unknown_doors_are_ignored() {
        let mut doors = DoorController::new();
        assert!(!doors.open_door(DoorId(7)));
        assert!(doors.door(DoorId(7)).is_none());
    }

    #[test]
    fn volume_lookup() {
        let mut doors = DoorController::new();
        let a = doors.create_door(spec());
        let b = doors.create_door(spec());
        let volume = doors.door(b).and_then(Door::interact_volume).unwrap().id;
        assert_eq!(doors.door_by_interact_volume(volume), Some(b));
        assert_ne!(doors.door_by_interact_volume(volume), Some(a));
        assert_eq!(doors.door_by_interact_volume(VolumeId(99)), None);
    }

    #[test]
    fn strict_creation_rejects_bad_sizes() {
        let mut doors = DoorController::new();
        let mut bad = spec();
        bad.width = 0.0;
        assert_eq!(
            doors.try_create_door(bad),
            Err(LevelError::InvalidDimension {
                what: "door width",
                value: 0.0
            })
        );
        let mut bad = spec();
        bad.height = f32::NAN;
        assert!(doors.try_create_door(bad).is_err());
        assert!(doors.doors().is_empty());
        assert!(doors.try_create_door(spec()).is_ok());
    }

    #[test]
    fn clear_invalidates_handles() {
        let mut doors = DoorController::new();
        let old = doors.create_door(spec());
        doors.open_door(old);
        doors.clear();
        assert_eq!(doors.colliders().count(), 0);
        assert_eq!(doors.animating_count(), 0);
        let new = doors.create_door(spec());
        assert_ne!(old, new);
        assert!(doors.door(old).is_none());
    }
}
