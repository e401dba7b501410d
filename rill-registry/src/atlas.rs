//! Terrain texture atlas lookup.
//!
//! The atlas is a square grid of equally sized slots. Mesh vertices address it
//! with normalized coordinates, previews with pixel rectangles in a second,
//! downscaled copy of the atlas.

use serde::Deserialize;

/// Number of slots along each edge of the atlas.
pub const ATLAS_SLOTS: u8 = 16;

/// A slot in the atlas grid, column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[u8; 2]")]
pub struct AtlasSlot {
    /// Column.
    pub x: u8,
    /// Row.
    pub y: u8,
}

impl AtlasSlot {
    /// Creates a slot reference.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns true if the slot lies inside the atlas grid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.x < ATLAS_SLOTS && self.y < ATLAS_SLOTS
    }
}

impl From<[u8; 2]> for AtlasSlot {
    fn from([x, y]: [u8; 2]) -> Self {
        Self::new(x, y)
    }
}

/// The four edge coordinates of an atlas slot, normalized to `0.0..=1.0`.
///
/// `top` is smaller than `bottom`: texture v grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasEntry {
    /// U of the left edge.
    pub left: f32,
    /// U of the right edge.
    pub right: f32,
    /// V of the top edge.
    pub top: f32,
    /// V of the bottom edge.
    pub bottom: f32,
}

impl AtlasEntry {
    /// The v coordinate reached when only `ratio` of the slot height is shown,
    /// measured upwards from the bottom edge.
    #[must_use]
    pub fn v_at(&self, ratio: f32) -> f32 {
        self.bottom - ratio * (self.bottom - self.top)
    }
}

/// A pixel rectangle inside the downscaled preview atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewRect {
    /// Left pixel column.
    pub x: u32,
    /// Top pixel row.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Atlas geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAtlas {
    preview_slot_size: u32,
}

impl TextureAtlas {
    /// Creates an atlas whose preview copy uses square slots of `preview_slot_size` pixels.
    #[must_use]
    pub const fn new(preview_slot_size: u32) -> Self {
        Self { preview_slot_size }
    }

    /// Edge coordinates of a slot for mesh texturing.
    #[must_use]
    pub fn entry(&self, slot: AtlasSlot) -> AtlasEntry {
        debug_assert!(slot.is_valid(), "atlas slot {slot:?} out of range");

        let step = 1.0 / f32::from(ATLAS_SLOTS);
        AtlasEntry {
            left: f32::from(slot.x) * step,
            right: f32::from(slot.x + 1) * step,
            top: f32::from(slot.y) * step,
            bottom: f32::from(slot.y + 1) * step,
        }
    }

    /// Pixel rectangle of a slot in the preview atlas.
    #[must_use]
    pub fn preview_entry(&self, slot: AtlasSlot) -> PreviewRect {
        debug_assert!(slot.is_valid(), "atlas slot {slot:?} out of range");

        PreviewRect {
            x: u32::from(slot.x) * self.preview_slot_size,
            y: u32::from(slot.y) * self.preview_slot_size,
            width: self.preview_slot_size,
            height: self.preview_slot_size,
        }
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        Self::new(16)
    }
}
