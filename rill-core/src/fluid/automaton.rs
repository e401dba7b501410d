//! The per-block fluid update rule.
//!
//! A tick is split in two. [`FluidBlock::evaluate`] is a pure function of the
//! block and its six neighbours that decides whether the block survives and,
//! if so, where it flows. [`FluidBlock::tick`] reads the neighbours, runs the
//! evaluation and writes the result back through the chunk.

use rill_registry::BlockValue;
use rill_utils::{BlockPos, Direction};
use smallvec::SmallVec;

use super::{FluidBlock, Neighbourhood};
use crate::chunk::ChunkAccess;

/// Outcome of the support check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Support {
    /// The block has no supply and turns into air.
    Despawn,
    /// The block stays and flows according to the plan.
    Survive(FlowPlan),
}

/// Where a surviving fluid block flows this step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowPlan {
    /// Nothing is written.
    Rest,
    /// A full block is written below.
    Fall(BlockValue),
    /// `value` is written into each target, in the order listed.
    Spread {
        /// The decayed block written sideways.
        value: BlockValue,
        /// Horizontal sides receiving it.
        targets: SmallVec<[Direction; 4]>,
    },
}

impl FlowPlan {
    /// The writes this plan performs, as side and value.
    #[must_use]
    pub fn writes(&self) -> SmallVec<[(Direction, BlockValue); 4]> {
        match self {
            Self::Rest => SmallVec::new(),
            Self::Fall(value) => smallvec::smallvec![(Direction::Down, *value)],
            Self::Spread { value, targets } => {
                targets.iter().map(|&side| (side, *value)).collect()
            }
        }
    }
}

impl FluidBlock {
    /// Decides the fate of a block with a non-zero level.
    ///
    /// Blocks below the maximum level need a same-kind neighbour beside them
    /// with a higher level, or any block of the same kind above them.
    /// Full blocks are sources and always survive.
    #[must_use]
    pub fn evaluate(&self, block: BlockValue, around: &Neighbourhood) -> Support {
        let level = self.level(block);
        debug_assert!(level > 0, "level 0 {} is inert", self.config.name);

        if level < self.config.max_level && !self.is_supported(level, around) {
            return Support::Despawn;
        }
        Support::Survive(self.plan_flow(level, around))
    }

    fn is_supported(&self, level: u8, around: &Neighbourhood) -> bool {
        Direction::HORIZONTAL
            .iter()
            .any(|&side| self.at_least(around[side], level + 1))
            || self.config.matches(around[Direction::Up])
    }

    /// Plans the flow of a surviving block.
    ///
    /// Falling takes priority: if the block below is air or the same fluid,
    /// a full block is written there unless one already is, and nothing
    /// spreads sideways. Otherwise `level - 1` spreads into every horizontal
    /// neighbour that is air or the same fluid below `level - 1`. Level 1
    /// never flows.
    #[must_use]
    pub fn plan_flow(&self, level: u8, around: &Neighbourhood) -> FlowPlan {
        if level <= 1 {
            return FlowPlan::Rest;
        }

        let below = around[Direction::Down];
        if below.is_air() || self.config.matches(below) {
            let source = self.config.source();
            return if below == source {
                FlowPlan::Rest
            } else {
                FlowPlan::Fall(source)
            };
        }

        let spread = level - 1;
        let targets: SmallVec<[Direction; 4]> = Direction::HORIZONTAL
            .into_iter()
            .filter(|&side| {
                let neighbour = around[side];
                neighbour.is_air() || (self.config.matches(neighbour) && neighbour.data() < spread)
            })
            .collect();

        if targets.is_empty() {
            FlowPlan::Rest
        } else {
            FlowPlan::Spread {
                value: self.config.at_level(spread),
                targets,
            }
        }
    }

    /// Advances one block by one step.
    ///
    /// All six neighbours are read before anything is written. Returns `None`
    /// for an inert level 0 block, otherwise the decision that was applied.
    pub fn tick(
        &self,
        block: BlockValue,
        local: BlockPos,
        chunk: &mut dyn ChunkAccess,
    ) -> Option<Support> {
        if self.level(block) == 0 {
            return None;
        }

        let around = Neighbourhood::gather(&*chunk, local);
        let support = self.evaluate(block, &around);

        match &support {
            Support::Despawn => {
                log::trace!(
                    "{} at {} dried up",
                    self.config.name,
                    BlockPos(chunk.origin().0 + local.0)
                );
                chunk.set_local_block(local.0.x, local.0.y, local.0.z, BlockValue::AIR);
            }
            Support::Survive(plan) => {
                for (side, value) in plan.writes() {
                    let target = side.relative(local);
                    chunk.set_global_block_relative(target.0.x, target.0.y, target.0.z, value);
                }
            }
        }
        Some(support)
    }
}
