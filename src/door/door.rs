//! A single two-panel sliding door.

use crate::color::{self, Color};
use crate::door::{Aabb, DoorPart, SlideAxis, WallSide};
use glamx::Vec3;

/// Animation progress within this distance of the end counts as finished,
/// so frame deltas that add up to the duration always complete the door.
const COMPLETION_TOLERANCE: f32 = 1.0e-5;

const PANEL_COLOR: Color = Color::new(0.45, 0.47, 0.5, 1.0);
const SEAM_COLOR: Color = Color::new(0.1, 0.1, 0.1, 1.0);
const FRAME_COLOR: Color = Color::new(0.25, 0.25, 0.27, 1.0);

/// The ease-out-cubic curve: fast at first, decelerating toward the end.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Stable handle to a door.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorId(pub u32);

/// Identifies the interaction volume of a door, as returned by hit tests.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeId(pub u32);

/// Timing and geometry constants shared by all doors of a controller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorConfig {
    /// Length of the opening animation, in seconds.
    pub duration: f32,
    /// Thickness of the jambs and the lintel.
    pub frame_thickness: f32,
    /// Thickness of the panels, through the wall.
    pub depth: f32,
    /// Width of the seam strip between the panels.
    pub seam_width: f32,
    /// How far the interaction volume reaches past the opening on every side.
    pub interact_margin: f32,
    /// Edge length of the status indicators.
    pub indicator_size: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            duration: 0.9,
            frame_thickness: 0.12,
            depth: 0.15,
            seam_width: 0.03,
            interact_margin: 0.4,
            indicator_size: 0.1,
        }
    }
}

impl DoorConfig {
    /// Sets the opening animation length.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }
}

/// Where and how big a door is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorSpec {
    /// The room the door belongs to.
    pub room: String,
    /// The wall of that room the door is cut into.
    pub wall: WallSide,
    /// Center of the opening.
    pub center: Vec3,
    /// Width of the opening.
    pub width: f32,
    /// Height of the opening.
    pub height: f32,
    /// Axis the panels slide along.
    pub axis: SlideAxis,
}

impl DoorSpec {
    /// A door in `wall` of `room`, sliding along that wall.
    pub fn new(
        room: impl Into<String>,
        wall: WallSide,
        center: Vec3,
        width: f32,
        height: f32,
    ) -> DoorSpec {
        DoorSpec {
            room: room.into(),
            wall,
            center,
            width,
            height,
            axis: wall.slide_axis(),
        }
    }

    /// Overrides the slide axis.
    pub fn with_axis(mut self, axis: SlideAxis) -> Self {
        self.axis = axis;
        self
    }
}

/// The lifecycle of a door. Doors only ever move forward through these states.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    /// Shut. Blocks movement and can be interacted with.
    Closed,
    /// Panels are sliding apart. Passable, still interactable.
    Opening {
        /// Seconds since the door was told to open.
        elapsed: f32,
    },
    /// Fully open.
    Open,
}

/// The volume players aim at to interact with a door.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractVolume {
    /// Hit-test identifier.
    pub id: VolumeId,
    /// Space covered by the volume.
    pub bounds: Aabb,
}

/// One of the two sliding panels.
///
/// A panel's slide coordinate is its outer edge, the one facing away from
/// the seam. Its slab extends one panel width from there toward the seam.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Panel {
    part: DoorPart,
    axis: SlideAxis,
    start: f32,
    target: f32,
    position: f32,
    /// Signed offset from the outer edge to the slab center.
    inward: f32,
}

impl Panel {
    fn new(part: DoorPart, axis: SlideAxis, start: f32, target: f32, inward: f32) -> Panel {
        let mut panel = Panel {
            part,
            axis,
            start,
            target,
            position: start,
            inward,
        };
        panel.slide_to(start);
        panel
    }

    /// Outer edge coordinate when closed.
    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Outer edge coordinate when open.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current outer edge coordinate.
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Distance travelled from the closed position.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.position - self.start
    }

    /// The slab to render.
    #[inline]
    pub fn part(&self) -> &DoorPart {
        &self.part
    }

    fn slide_to(&mut self, position: f32) {
        let axis = self.axis;
        self.position = position;
        axis.set(&mut self.part.position, position + self.inward);
    }
}

/// A two-panel sliding door.
#[derive(Clone, Debug)]
pub struct Door {
    id: DoorId,
    spec: DoorSpec,
    panels: [Panel; 2],
    seam: DoorPart,
    frame: [DoorPart; 3],
    indicators: [DoorPart; 2],
    collider: Option<Aabb>,
    interact: Option<InteractVolume>,
    state: DoorState,
}

impl Door {
    pub(crate) fn new(id: DoorId, volume: VolumeId, spec: DoorSpec, config: &DoorConfig) -> Door {
        let axis = spec.axis;
        let c = spec.center;
        let (w, h) = (spec.width, spec.height);
        let ft = config.frame_thickness;
        let depth = config.depth;
        let panel_width = w * 0.5;
        let cx = axis.get(c);

        let panel = |start: f32, target: f32, inward: f32| {
            let slab = DoorPart::new(c, axis.local(panel_width, h, depth).abs(), PANEL_COLOR);
            Panel::new(slab, axis, start, target, inward)
        };
        let panels = [
            panel(cx - panel_width, cx - w, panel_width * 0.5),
            panel(cx + panel_width, cx + w, -panel_width * 0.5),
        ];

        let seam = DoorPart::new(
            c,
            axis.local(config.seam_width, h, depth * 1.1).abs(),
            SEAM_COLOR,
        );

        let jamb = axis.local(ft, h, depth * 1.5).abs();
        let frame = [
            DoorPart::new(c + axis.local(-(w + ft) * 0.5, 0.0, 0.0), jamb, FRAME_COLOR),
            DoorPart::new(c + axis.local((w + ft) * 0.5, 0.0, 0.0), jamb, FRAME_COLOR),
            DoorPart::new(
                c + axis.local(0.0, (h + ft) * 0.5, 0.0),
                axis.local(w + 2.0 * ft, ft, depth * 1.5).abs(),
                FRAME_COLOR,
            ),
        ];

        let s = config.indicator_size;
        let indicator_up = h * 0.5 + ft + s;
        let indicator_out = depth * 0.75 + s * 0.5;
        let indicator = |side: f32| {
            DoorPart::new(
                c + axis.local(0.0, indicator_up, side * indicator_out),
                Vec3::splat(s),
                color::INDICATOR_CLOSED,
            )
        };
        let indicators = [indicator(1.0), indicator(-1.0)];

        let collider = Aabb::from_center(c, axis.local(w, h, depth));
        let m = config.interact_margin;
        let interact = InteractVolume {
            id: volume,
            bounds: Aabb::from_center(c, axis.local(w + 2.0 * m, h + m, depth + 2.0 * m)),
        };

        Door {
            id,
            spec,
            panels,
            seam,
            frame,
            indicators,
            collider: Some(collider),
            interact: Some(interact),
            state: DoorState::Closed,
        }
    }

    /// The door handle.
    #[inline]
    pub fn id(&self) -> DoorId {
        self.id
    }

    /// Placement the door was created with.
    #[inline]
    pub fn spec(&self) -> &DoorSpec {
        &self.spec
    }

    /// The room the door belongs to.
    #[inline]
    pub fn room(&self) -> &str {
        &self.spec.room
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> DoorState {
        self.state
    }

    /// Whether the opening animation has completed.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    /// Whether the panels are currently sliding.
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, DoorState::Opening { .. })
    }

    /// Both panels; the first one slides toward negative coordinates.
    #[inline]
    pub fn panels(&self) -> &[Panel; 2] {
        &self.panels
    }

    /// The seam strip between the panels.
    #[inline]
    pub fn seam(&self) -> &DoorPart {
        &self.seam
    }

    /// The two jambs and the lintel.
    #[inline]
    pub fn frame(&self) -> &[DoorPart; 3] {
        &self.frame
    }

    /// Status lights, one on each face.
    #[inline]
    pub fn indicators(&self) -> &[DoorPart; 2] {
        &self.indicators
    }

    /// The blocking volume, present until the door is told to open.
    #[inline]
    pub fn collider(&self) -> Option<&Aabb> {
        self.collider.as_ref()
    }

    /// The interaction volume, present until the door is fully open.
    #[inline]
    pub fn interact_volume(&self) -> Option<&InteractVolume> {
        self.interact.as_ref()
    }

    /// Starts opening. Returns `false` if the door was not closed.
    ///
    /// The collider goes away right now, not when the panels are clear.
    pub(crate) fn begin_opening(&mut self) -> bool {
        if self.state != DoorState::Closed {
            return false;
        }

        self.state = DoorState::Opening { elapsed: 0.0 };
        self.collider = None;
        true
    }

    /// Advances the opening animation. Returns `true` once the door is open.
    pub(crate) fn advance(&mut self, delta: f32, duration: f32) -> bool {
        let elapsed = match self.state {
            DoorState::Opening { elapsed } => elapsed + delta.max(0.0),
            DoorState::Open => return true,
            DoorState::Closed => return false,
        };

        let t = if duration > 0.0 {
            (elapsed / duration).min(1.0)
        } else {
            1.0
        };

        if t >= 1.0 - COMPLETION_TOLERANCE {
            self.finish();
            return true;
        }

        self.state = DoorState::Opening { elapsed };
        let ease = ease_out_cubic(t);
        for panel in &mut self.panels {
            let position = panel.start + (panel.target - panel.start) * ease;
            panel.slide_to(position);
        }
        self.track_seam();
        false
    }

    fn finish(&mut self) {
        for panel in &mut self.panels {
            let target = panel.target;
            panel.slide_to(target);
        }
        self.track_seam();

        for indicator in &mut self.indicators {
            indicator.color = color::INDICATOR_OPEN;
        }
        self.interact = None;
        self.state = DoorState::Open;
    }

    fn track_seam(&mut self) {
        let axis = self.spec.axis;
        let seam = axis.get(self.spec.center) + self.panels[1].displacement();
        axis.set(&mut self.seam.position, seam);
    }
}
