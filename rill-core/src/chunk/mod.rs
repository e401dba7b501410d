//! Chunk storage and the block access interfaces the fluid code runs against.
//!
//! Fluid logic never touches a [`World`](crate::world::World) directly. It is
//! handed a chunk-relative view: reads may address coordinates outside the
//! chunk and transparently resolve into neighbouring chunks.

mod storage;

pub use storage::Chunk;

use rill_registry::BlockValue;
use rill_utils::{BlockPos, Direction};

/// Read access to blocks, addressed relative to one chunk.
pub trait BlockSource {
    /// World position of the chunk's lowest corner block.
    fn origin(&self) -> BlockPos;

    /// Reads the block at chunk-local coordinates. Coordinates outside
    /// `0..CHUNK_SIZE` resolve into the neighbouring chunks.
    fn get_global_block_relative(&self, x: i32, y: i32, z: i32) -> BlockValue;

    /// Converts a world position into this chunk's local coordinates.
    fn to_local(&self, pos: BlockPos) -> BlockPos {
        BlockPos(pos.0 - self.origin().0)
    }

    /// Reads the neighbour of a chunk-local position.
    fn neighbour(&self, local: BlockPos, direction: Direction) -> BlockValue {
        let pos = direction.relative(local);
        self.get_global_block_relative(pos.0.x, pos.0.y, pos.0.z)
    }
}

/// Read and write access to blocks, addressed relative to one chunk.
pub trait ChunkAccess: BlockSource {
    /// Writes a block at chunk-local coordinates that may lie outside this chunk.
    fn set_global_block_relative(&mut self, x: i32, y: i32, z: i32, value: BlockValue);

    /// Writes a block inside this chunk.
    fn set_local_block(&mut self, x: i32, y: i32, z: i32, value: BlockValue);
}
