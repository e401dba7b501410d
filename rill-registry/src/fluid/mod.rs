//! Fluid kinds.
//!
//! Every fluid shares one simulation and rendering code path; the kinds only
//! differ in the values carried by their [`FluidConfig`].

pub mod vanilla;

use serde::Deserialize;

use crate::{AtlasSlot, BlockId, BlockValue};

/// Parameters of one fluid kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FluidConfig {
    /// Block type that carries this fluid.
    #[serde(skip, default = "unassigned_block")]
    pub block: BlockId,
    /// Highest level. A block at this level is a source and renders as a full cube.
    pub max_level: u8,
    /// Atlas slot used for every face and for the preview.
    pub texture: AtlasSlot,
    /// Display name.
    pub name: String,
}

const fn unassigned_block() -> BlockId {
    crate::vanilla_blocks::AIR
}

impl FluidConfig {
    /// Returns this config bound to the given block type.
    #[must_use]
    pub fn for_block(mut self, block: BlockId) -> Self {
        self.block = block;
        self
    }

    /// Returns true if `value` is a block of this fluid.
    #[must_use]
    pub const fn matches(&self, value: BlockValue) -> bool {
        value.id().0 == self.block.0
    }

    /// A block of this fluid at the given level.
    #[must_use]
    pub const fn at_level(&self, level: u8) -> BlockValue {
        BlockValue::new(self.block, level)
    }

    /// A full-level source block of this fluid.
    #[must_use]
    pub const fn source(&self) -> BlockValue {
        self.at_level(self.max_level)
    }

    /// Fill ratio of a level, `level / max_level`.
    #[must_use]
    pub fn fill_ratio(&self, level: u8) -> f32 {
        debug_assert!(level <= self.max_level, "level {level} above {}", self.max_level);
        f32::from(level) / f32::from(self.max_level)
    }
}
