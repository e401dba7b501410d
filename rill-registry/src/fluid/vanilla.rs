//! Built-in fluid kinds.

use super::FluidConfig;
use crate::{AtlasSlot, vanilla_blocks};

/// Highest water level.
pub const RANGE_WATER: u8 = 5;
/// Highest lava level. Lava spreads a shorter distance than water.
pub const RANGE_LAVA: u8 = 3;

/// Default water parameters.
#[must_use]
pub fn water() -> FluidConfig {
    FluidConfig {
        block: vanilla_blocks::WATER,
        max_level: RANGE_WATER,
        texture: AtlasSlot::new(13, 12),
        name: "Water".to_string(),
    }
}

/// Default lava parameters.
#[must_use]
pub fn lava() -> FluidConfig {
    FluidConfig {
        block: vanilla_blocks::LAVA,
        max_level: RANGE_LAVA,
        texture: AtlasSlot::new(13, 14),
        name: "Lava".to_string(),
    }
}
