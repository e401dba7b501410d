//! Fluid blocks.
//!
//! Water and lava share one implementation, [`FluidBlock`], parameterized by
//! a [`FluidConfig`]. The automaton in [`automaton`] decides how a block
//! changes each step; [`mesher`] turns its level into geometry.

pub mod automaton;
mod mesher;

pub use automaton::{FlowPlan, Support};

use std::ops::Index;

use rill_registry::{BlockValue, FluidConfig};
use rill_utils::{BlockPos, Direction};

use crate::chunk::BlockSource;

/// Simulation and rendering logic for one fluid kind.
///
/// Holds nothing but the kind's parameters, so one instance serves every
/// block of that kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluidBlock {
    config: FluidConfig,
}

impl FluidBlock {
    /// Creates the logic object for a fluid kind.
    #[must_use]
    pub const fn new(config: FluidConfig) -> Self {
        Self { config }
    }

    /// The level of a block of this kind.
    fn level(&self, block: BlockValue) -> u8 {
        debug_assert!(
            self.config.matches(block),
            "{block} is not a block of {}",
            self.config.name
        );
        let level = block.data();
        debug_assert!(
            level <= self.config.max_level,
            "{} level {level} above {}",
            self.config.name,
            self.config.max_level
        );
        level
    }

    /// Returns true if `other` is this fluid at `level` or higher.
    fn at_least(&self, other: BlockValue, level: u8) -> bool {
        self.config.matches(other) && other.data() >= level
    }
}

/// The six blocks around a fluid block, read once before any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbourhood {
    blocks: [BlockValue; 6],
}

impl Neighbourhood {
    /// Reads the neighbours of a chunk-local position.
    #[must_use]
    pub fn gather<S: BlockSource + ?Sized>(chunk: &S, local: BlockPos) -> Self {
        Self {
            blocks: Direction::ALL.map(|direction| chunk.neighbour(local, direction)),
        }
    }
}

impl Index<Direction> for Neighbourhood {
    type Output = BlockValue;

    fn index(&self, direction: Direction) -> &BlockValue {
        &self.blocks[direction as usize]
    }
}
