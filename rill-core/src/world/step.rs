//! The simulation step and the mesh rebuild pass.

use rayon::prelude::*;
use rill_registry::BlockRegistry;
use rill_utils::{BlockPos, ChunkPos};

use super::World;
use crate::render::{BlockRenderers, ChunkMesh, RenderContext, mesh_chunk};

/// Counters of one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Fluid blocks ticked.
    pub ticked: usize,
    /// Block writes that changed a value.
    pub changed: u64,
}

impl World {
    /// World positions of every fluid block with a non-zero level, chunk by
    /// chunk in sorted order and in storage order inside each chunk.
    #[must_use]
    pub fn fluid_positions(&self, registry: &BlockRegistry) -> Vec<BlockPos> {
        let mut positions = Vec::new();
        for chunk_pos in self.chunk_positions() {
            let Some(chunk) = self.chunks.get(&chunk_pos) else {
                continue;
            };
            let origin = chunk_pos.origin();
            positions.extend(
                chunk
                    .iter()
                    .filter(|(_, value)| value.data() > 0 && registry.is_fluid(value.id()))
                    .map(|(local, _)| BlockPos(origin.0 + local.0)),
            );
        }
        positions
    }

    /// Runs one simulation step.
    ///
    /// The set of fluid blocks is captured up front. Each captured position is
    /// then ticked with the value it holds at that moment, so writes made
    /// earlier in the same step are visible to later ticks. Positions that no
    /// longer hold a fluid are skipped.
    pub fn step(&mut self, registry: &BlockRegistry, renderers: &BlockRenderers) -> StepStats {
        let positions = self.fluid_positions(registry);
        let changes_before = self.changes;
        let mut ticked = 0;

        for pos in positions {
            let block = self.get_block(pos);
            if !registry.is_fluid(block.id()) {
                continue;
            }
            let renderer = renderers.get(block.id());
            renderer.tick(block, pos.chunk_local(), &mut self.view_mut(pos.chunk()));
            ticked += 1;
        }

        let stats = StepStats {
            ticked,
            changed: self.changes - changes_before,
        };
        log::debug!(
            "Fluid step ticked {} blocks, {} changed, {} chunks dirty",
            stats.ticked,
            stats.changed,
            self.dirty.len()
        );
        stats
    }

    /// Meshes every dirty chunk in parallel and clears the dirty set.
    ///
    /// The meshers only read the world, so all chunks share one borrow.
    pub fn rebuild_dirty_meshes(
        &mut self,
        renderers: &BlockRenderers,
        ctx: &RenderContext<'_>,
    ) -> Vec<(ChunkPos, ChunkMesh)> {
        let dirty = self.take_dirty();
        let world: &World = self;

        let meshes: Vec<_> = dirty
            .into_par_iter()
            .map(|pos| (pos, mesh_chunk(&world.view(pos), renderers, ctx)))
            .collect();

        log::debug!("Rebuilt {} chunk meshes", meshes.len());
        meshes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_registry::{BlockValue, TextureAtlas, fluid::vanilla, vanilla_blocks};

    fn basin() -> (World, BlockRegistry, BlockRenderers) {
        let registry = BlockRegistry::default();
        let renderers = BlockRenderers::new(&registry);
        let mut world = World::new();
        world.create_empty_chunk(ChunkPos::new(0, 0, 0));
        world.fill(
            BlockPos::new(0, 7, 0),
            BlockPos::new(15, 7, 15),
            BlockValue::of(vanilla_blocks::STONE),
        );
        (world, registry, renderers)
    }

    #[test]
    fn test_pool_settles() {
        let (mut world, registry, renderers) = basin();
        let source = vanilla::water().for_block(vanilla_blocks::WATER).source();
        world.set_block(BlockPos::new(8, 8, 8), source);

        let first = world.step(&registry, &renderers);
        assert_eq!(first, StepStats { ticked: 1, changed: 4 });

        let mut last = first;
        for _ in 0..20 {
            last = world.step(&registry, &renderers);
        }
        assert_eq!(last.changed, 0);

        // A diamond of radius four around the source, one level lower per step out.
        let water = world.fluid_positions(&registry);
        assert_eq!(water.len(), 41);
        for pos in water {
            let distance = (pos.0.x - 8).abs() + (pos.0.z - 8).abs();
            assert_eq!(pos.0.y, 8);
            assert_eq!(i32::from(world.get_block(pos).data()), 5 - distance);
        }
    }

    #[test]
    fn test_fall_crosses_chunk_border() {
        let registry = BlockRegistry::default();
        let renderers = BlockRenderers::new(&registry);
        let mut world = World::new();
        world.create_empty_chunk(ChunkPos::new(0, 0, 0));
        world.create_empty_chunk(ChunkPos::new(0, -1, 0));
        let source = BlockValue::new(vanilla_blocks::WATER, vanilla::RANGE_WATER);
        world.set_block(BlockPos::new(4, 0, 4), source);

        world.step(&registry, &renderers);
        assert_eq!(world.get_block(BlockPos::new(4, -1, 4)), source);
        assert_eq!(world.get_block(BlockPos::new(5, 0, 4)), BlockValue::AIR);
    }

    #[test]
    fn test_level_zero_is_not_ticked() {
        let (mut world, registry, renderers) = basin();
        world.set_block(BlockPos::new(2, 8, 2), BlockValue::new(vanilla_blocks::WATER, 0));
        assert!(world.fluid_positions(&registry).is_empty());
        assert_eq!(world.step(&registry, &renderers), StepStats::default());
    }

    #[test]
    fn test_rebuild_drains_dirty_chunks() {
        let (mut world, registry, renderers) = basin();
        let atlas = TextureAtlas::default();
        let ctx = RenderContext::new(&registry, &atlas);

        let meshes = world.rebuild_dirty_meshes(&renderers, &ctx);
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].0, ChunkPos::new(0, 0, 0));
        assert!(meshes[0].1.quad_count() > 0);
        assert!(world.rebuild_dirty_meshes(&renderers, &ctx).is_empty());

        world.set_block(
            BlockPos::new(3, 8, 3),
            BlockValue::new(vanilla_blocks::LAVA, vanilla::RANGE_LAVA),
        );
        world.step(&registry, &renderers);
        assert_eq!(world.rebuild_dirty_meshes(&renderers, &ctx).len(), 1);
    }
}
