//! A cubic chunk of block values.

use rill_registry::BlockValue;
use rill_utils::{BlockPos, CHUNK_SIZE, CHUNK_VOLUME, ChunkPos};

/// A `CHUNK_SIZE`³ cube of blocks.
#[derive(Debug, Clone)]
pub struct Chunk {
    pos: ChunkPos,
    blocks: Box<[BlockValue]>,
}

impl Chunk {
    /// Creates a chunk filled with air.
    #[must_use]
    pub fn new_empty(pos: ChunkPos) -> Self {
        Self {
            pos,
            blocks: vec![BlockValue::AIR; CHUNK_VOLUME].into_boxed_slice(),
        }
    }

    /// Position of this chunk.
    #[must_use]
    pub const fn pos(&self) -> ChunkPos {
        self.pos
    }

    /// Returns true if `local` lies inside the chunk.
    #[must_use]
    pub const fn contains_local(local: BlockPos) -> bool {
        local.0.x >= 0
            && local.0.x < CHUNK_SIZE
            && local.0.y >= 0
            && local.0.y < CHUNK_SIZE
            && local.0.z >= 0
            && local.0.z < CHUNK_SIZE
    }

    fn index(local: BlockPos) -> usize {
        debug_assert!(Self::contains_local(local), "{local} is outside the chunk");
        ((local.0.y * CHUNK_SIZE + local.0.z) * CHUNK_SIZE + local.0.x) as usize
    }

    fn local_at(index: usize) -> BlockPos {
        let index = index as i32;
        BlockPos::new(
            index % CHUNK_SIZE,
            index / (CHUNK_SIZE * CHUNK_SIZE),
            (index / CHUNK_SIZE) % CHUNK_SIZE,
        )
    }

    /// Reads a block at local coordinates.
    #[must_use]
    pub fn get(&self, local: BlockPos) -> BlockValue {
        self.blocks[Self::index(local)]
    }

    /// Writes a block at local coordinates, returning the previous value.
    pub fn set(&mut self, local: BlockPos, value: BlockValue) -> BlockValue {
        std::mem::replace(&mut self.blocks[Self::index(local)], value)
    }

    /// Iterates over every block with its local position, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, BlockValue)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(index, &value)| (Self::local_at(index), value))
    }
}
