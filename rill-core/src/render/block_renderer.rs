//! Per-block-type renderer objects and the table the chunk mesher dispatches through.

use rill_registry::{AtlasSlot, BlockId, BlockRegistry, BlockValue};
use rill_utils::{Aabb, BlockPos, Direction, math::Vector3};
use rustc_hash::FxHashMap;

use super::{CubeBlock, MeshSink, PreviewCanvas, RenderContext};
use crate::chunk::{BlockSource, ChunkAccess};
use crate::fluid::FluidBlock;

/// Rendering, collision and simulation behavior of one block type.
///
/// Implementations hold no per-block state; everything they need is in the
/// block value and its neighbours.
pub trait BlockRenderer: Send + Sync {
    /// Returns true if the block is an ordinary cube and only needs
    /// [`geometry_normal_block`](Self::geometry_normal_block) faces.
    fn is_block_shaped(&self, block: BlockValue) -> bool;

    /// Emits the geometry of a block that is not block shaped. `pos` is the
    /// block's world position.
    fn render_special_block(
        &self,
        block: BlockValue,
        pos: BlockPos,
        chunk: &dyn BlockSource,
        ctx: &RenderContext<'_>,
        sink: &mut dyn MeshSink,
    );

    /// Emits one cube face at chunk-local coordinates. Called only for sides
    /// whose neighbour is not opaque.
    fn geometry_normal_block(
        &self,
        block: BlockValue,
        local: BlockPos,
        side: Direction,
        chunk: &dyn BlockSource,
        ctx: &RenderContext<'_>,
        sink: &mut dyn MeshSink,
    );

    /// Collision box of the block whose lowest corner is `corner`.
    fn get_aabb(&self, block: BlockValue, corner: Vector3<f32>) -> Aabb;

    /// Draws the inventory thumbnail.
    fn draw_preview(
        &self,
        block: BlockValue,
        canvas: &mut dyn PreviewCanvas,
        ctx: &RenderContext<'_>,
        x: i32,
        y: i32,
    );

    /// Display name.
    fn name(&self, block: BlockValue) -> &str;

    /// Advances the block by one simulation step. Most blocks are static.
    fn tick(&self, _block: BlockValue, _local: BlockPos, _chunk: &mut dyn ChunkAccess) {}
}

/// One renderer per registered block type.
pub struct BlockRenderers {
    by_id: FxHashMap<BlockId, Box<dyn BlockRenderer>>,
    fallback: CubeBlock,
}

impl BlockRenderers {
    /// Builds the table for a registry: a [`FluidBlock`] for each fluid kind,
    /// a [`CubeBlock`] for everything else.
    #[must_use]
    pub fn new(registry: &BlockRegistry) -> Self {
        let mut by_id: FxHashMap<BlockId, Box<dyn BlockRenderer>> = FxHashMap::default();
        for entry in registry.entries() {
            let renderer: Box<dyn BlockRenderer> = match registry.fluid(entry.id) {
                Some(fluid) => Box::new(FluidBlock::new(fluid.clone())),
                None => Box::new(CubeBlock::new(entry.texture, entry.name)),
            };
            by_id.insert(entry.id, renderer);
        }

        Self {
            by_id,
            fallback: CubeBlock::new(AtlasSlot::new(0, 0), "Unknown"),
        }
    }

    /// The renderer of a block type, falling back to a plain cube for unknown ids.
    #[must_use]
    pub fn get(&self, id: BlockId) -> &dyn BlockRenderer {
        match self.by_id.get(&id) {
            Some(renderer) => renderer.as_ref(),
            None => {
                log::debug!("No renderer for block id {}, drawing a plain cube", id.0);
                &self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_registry::vanilla_blocks;

    #[test]
    fn test_fluids_get_fluid_renderers() {
        let registry = BlockRegistry::default();
        let renderers = BlockRenderers::new(&registry);

        let partial_water = BlockValue::new(vanilla_blocks::WATER, 2);
        assert!(!renderers.get(vanilla_blocks::WATER).is_block_shaped(partial_water));
        assert_eq!(renderers.get(vanilla_blocks::WATER).name(partial_water), "Water");
        assert_eq!(
            renderers
                .get(vanilla_blocks::LAVA)
                .name(BlockValue::new(vanilla_blocks::LAVA, 1)),
            "Lava"
        );
    }

    #[test]
    fn test_solid_blocks_are_cubes() {
        let registry = BlockRegistry::default();
        let renderers = BlockRenderers::new(&registry);
        let stone = BlockValue::of(vanilla_blocks::STONE);
        assert!(renderers.get(vanilla_blocks::STONE).is_block_shaped(stone));
        assert_eq!(renderers.get(vanilla_blocks::STONE).name(stone), "stone");
    }

    #[test]
    fn test_unknown_id_falls_back() {
        let registry = BlockRegistry::default();
        let renderers = BlockRenderers::new(&registry);
        let unknown = BlockValue::of(BlockId(99));
        assert!(renderers.get(BlockId(99)).is_block_shaped(unknown));
        assert_eq!(renderers.get(BlockId(99)).name(unknown), "Unknown");
    }
}
