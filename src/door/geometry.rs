//! Placement helpers for door parts.

use crate::color::Color;
use glamx::Vec3;

/// The horizontal axis door panels slide along.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideAxis {
    /// Panels slide along the world X axis; the door faces +Z/-Z.
    X,
    /// Panels slide along the world Z axis; the door faces +X/-X.
    Z,
}

impl SlideAxis {
    /// Unit vector along the slide axis.
    #[inline]
    pub fn along(self) -> Vec3 {
        match self {
            SlideAxis::X => Vec3::X,
            SlideAxis::Z => Vec3::Z,
        }
    }

    /// Unit vector through the door, from one face to the other.
    #[inline]
    pub fn across(self) -> Vec3 {
        match self {
            SlideAxis::X => Vec3::Z,
            SlideAxis::Z => Vec3::X,
        }
    }

    /// The component of `v` along this axis.
    #[inline]
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            SlideAxis::X => v.x,
            SlideAxis::Z => v.z,
        }
    }

    /// Overwrites the component of `v` along this axis.
    #[inline]
    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            SlideAxis::X => v.x = value,
            SlideAxis::Z => v.z = value,
        }
    }

    /// Builds a vector from door-local components.
    #[inline]
    pub fn local(self, along: f32, up: f32, across: f32) -> Vec3 {
        self.along() * along + Vec3::Y * up + self.across() * across
    }
}

/// The wall of a room a door is cut into.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallSide {
    /// The wall at -Z.
    North,
    /// The wall at +Z.
    South,
    /// The wall at +X.
    East,
    /// The wall at -X.
    West,
}

impl WallSide {
    /// Doors slide along their wall.
    #[inline]
    pub fn slide_axis(self) -> SlideAxis {
        match self {
            WallSide::North | WallSide::South => SlideAxis::X,
            WallSide::East | WallSide::West => SlideAxis::Z,
        }
    }
}

/// An axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Lowest corner.
    pub min: Vec3,
    /// Highest corner.
    pub max: Vec3,
}

impl Aabb {
    /// A box of full size `extents` centered on `center`.
    pub fn from_center(center: Vec3, extents: Vec3) -> Aabb {
        let half = extents.abs() * 0.5;
        Aabb {
            min: center - half,
            max: center + half,
        }
    }

    /// The box center.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full size of the box.
    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether `point` is inside the box, boundary included.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Whether `inner` fits entirely inside this box.
    #[inline]
    pub fn encloses(&self, inner: &Aabb) -> bool {
        self.contains(inner.min) && self.contains(inner.max)
    }
}

/// A box-shaped piece of a door, placed by the rendering layer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorPart {
    /// World-space center.
    pub position: Vec3,
    /// Full size along each world axis.
    pub extents: Vec3,
    /// Base color.
    pub color: Color,
}

impl DoorPart {
    /// Creates a new part.
    pub fn new(position: Vec3, extents: Vec3, color: Color) -> DoorPart {
        DoorPart {
            position,
            extents,
            color,
        }
    }

    /// The space the part occupies.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, self.extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_axes_follow_the_wall() {
        assert_eq!(WallSide::North.slide_axis(), SlideAxis::X);
        assert_eq!(WallSide::West.slide_axis(), SlideAxis::Z);
        assert_eq!(SlideAxis::Z.local(1.0, 2.0, 3.0), Vec3::new(3.0, 2.0, 1.0));

        let mut v = Vec3::ZERO;
        SlideAxis::Z.set(&mut v, 4.0);
        assert_eq!(SlideAxis::Z.get(v), 4.0);
        assert_eq!(v, Vec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn aabb_containment() {
        let outer = Aabb::from_center(Vec3::ZERO, Vec3::splat(2.0));
        let inner = Aabb::from_center(Vec3::new(0.5, 0.0, 0.0), Vec3::splat(0.5));
        assert!(outer.encloses(&inner));
        assert!(!inner.encloses(&outer));
        assert!(outer.contains(Vec3::new(1.0, -1.0, 0.0)));
        assert!(!outer.contains(Vec3::new(1.1, 0.0, 0.0)));
        assert_eq!(outer.extents(), Vec3::splat(2.0));
    }
}
