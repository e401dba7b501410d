//! Chunk-relative views over a [`World`].

use rill_registry::BlockValue;
use rill_utils::{BlockPos, ChunkPos};

use super::World;
use crate::chunk::{BlockSource, Chunk, ChunkAccess};

/// Read access to the world, addressed relative to one chunk.
#[derive(Clone, Copy)]
pub struct ChunkView<'w> {
    world: &'w World,
    chunk: ChunkPos,
}

impl<'w> ChunkView<'w> {
    /// Creates a view whose local origin is the lowest corner of `chunk`.
    #[must_use]
    pub const fn new(world: &'w World, chunk: ChunkPos) -> Self {
        Self { world, chunk }
    }
}

impl BlockSource for ChunkView<'_> {
    fn origin(&self) -> BlockPos {
        self.chunk.origin()
    }

    fn get_global_block_relative(&self, x: i32, y: i32, z: i32) -> BlockValue {
        self.world.get_block(self.origin().offset(x, y, z))
    }
}

/// Read and write access to the world, addressed relative to one chunk.
pub struct ChunkViewMut<'w> {
    world: &'w mut World,
    chunk: ChunkPos,
}

impl<'w> ChunkViewMut<'w> {
    /// Creates a mutable view whose local origin is the lowest corner of `chunk`.
    pub fn new(world: &'w mut World, chunk: ChunkPos) -> Self {
        Self { world, chunk }
    }
}

impl BlockSource for ChunkViewMut<'_> {
    fn origin(&self) -> BlockPos {
        self.chunk.origin()
    }

    fn get_global_block_relative(&self, x: i32, y: i32, z: i32) -> BlockValue {
        self.world.get_block(self.origin().offset(x, y, z))
    }
}

impl ChunkAccess for ChunkViewMut<'_> {
    fn set_global_block_relative(&mut self, x: i32, y: i32, z: i32, value: BlockValue) {
        let pos = self.origin().offset(x, y, z);
        self.world.set_block(pos, value);
    }

    fn set_local_block(&mut self, x: i32, y: i32, z: i32, value: BlockValue) {
        debug_assert!(
            Chunk::contains_local(BlockPos::new(x, y, z)),
            "local write ({x}, {y}, {z}) outside chunk {}",
            self.chunk
        );
        let pos = self.origin().offset(x, y, z);
        self.world.set_block(pos, value);
    }
}
