//! Packed block values.

use std::fmt::{self, Display};

/// A block type id. Stored in the low byte of a [`BlockValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u8);

/// A block type plus its auxiliary data byte, packed into 16 bits.
///
/// The low byte is the block id, the high byte is the data field. For fluids
/// the data field is the fill level. Equality compares both halves, so two
/// fluid blocks are equal only when they share type and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockValue(pub u16);

impl BlockValue {
    /// The empty block.
    pub const AIR: BlockValue = BlockValue(0);

    /// Packs a block id and its data byte.
    #[must_use]
    pub const fn new(id: BlockId, data: u8) -> Self {
        Self(((data as u16) << 8) | id.0 as u16)
    }

    /// A block of the given type with a zero data field.
    #[must_use]
    pub const fn of(id: BlockId) -> Self {
        Self::new(id, 0)
    }

    /// The block type.
    #[must_use]
    pub const fn id(self) -> BlockId {
        BlockId((self.0 & 0xFF) as u8)
    }

    /// The auxiliary data field.
    #[must_use]
    pub const fn data(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns true for air.
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.id().0 == vanilla_blocks::AIR.0
    }
}

impl Display for BlockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id().0, self.data())
    }
}

/// Ids of the built-in block types.
pub mod vanilla_blocks {
    use super::BlockId;

    /// Empty space.
    pub const AIR: BlockId = BlockId(0);
    /// Opaque stone.
    pub const STONE: BlockId = BlockId(1);
    /// Opaque dirt.
    pub const DIRT: BlockId = BlockId(2);
    /// Opaque wooden planks.
    pub const PLANKS: BlockId = BlockId(3);
    /// Solid but see-through glass.
    pub const GLASS: BlockId = BlockId(4);
    /// Leaves, opaque or not depending on settings.
    pub const LEAVES: BlockId = BlockId(5);
    /// Water fluid.
    pub const WATER: BlockId = BlockId(6);
    /// Lava fluid.
    pub const LAVA: BlockId = BlockId(7);
}
