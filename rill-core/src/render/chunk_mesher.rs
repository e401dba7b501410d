//! Whole-chunk mesh generation.

use rill_utils::{BlockPos, CHUNK_SIZE, Direction};

use super::{BlockRenderers, ChunkMesh, RenderContext};
use crate::chunk::BlockSource;

/// Builds the mesh of one chunk.
///
/// Every side of a non-air block whose neighbour is not opaque goes through
/// the block's `geometry_normal_block`; blocks that are not block shaped
/// additionally get `render_special_block`.
#[must_use]
pub fn mesh_chunk(
    chunk: &dyn BlockSource,
    renderers: &BlockRenderers,
    ctx: &RenderContext<'_>,
) -> ChunkMesh {
    let mut mesh = ChunkMesh::new();
    let origin = chunk.origin();

    for y in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let block = chunk.get_global_block_relative(x, y, z);
                if block.is_air() {
                    continue;
                }

                let local = BlockPos::new(x, y, z);
                let renderer = renderers.get(block.id());

                for side in Direction::ALL {
                    if ctx.registry.is_opaque(chunk.neighbour(local, side)) {
                        continue;
                    }
                    renderer.geometry_normal_block(block, local, side, chunk, ctx, &mut mesh);
                }

                if !renderer.is_block_shaped(block) {
                    let pos = BlockPos(origin.0 + local.0);
                    renderer.render_special_block(block, pos, chunk, ctx, &mut mesh);
                }
            }
        }
    }

    mesh
}
