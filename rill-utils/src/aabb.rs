//! Axis aligned bounding boxes in world units.

use crate::math::Vector3;

/// An axis aligned box spanning `min..max`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    /// Lowest corner.
    pub min: Vector3<f32>,
    /// Highest corner.
    pub max: Vector3<f32>,
}

impl Aabb {
    /// A box with the given footprint edge and height, starting at `corner`.
    #[must_use]
    pub fn from_corner(corner: Vector3<f32>, edge: f32, height: f32) -> Self {
        Self {
            min: corner,
            max: Vector3::new(corner.x + edge, corner.y + height, corner.z + edge),
        }
    }
}
