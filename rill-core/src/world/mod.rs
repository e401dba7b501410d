//! The in-memory block world.
//!
//! Owns the loaded chunks and implements the chunk collaborator interfaces
//! through [`ChunkView`] and [`ChunkViewMut`].

mod step;
mod view;

pub use step::StepStats;
pub use view::{ChunkView, ChunkViewMut};

use std::collections::hash_map::Entry;

use rill_registry::BlockValue;
use rill_utils::{BlockPos, CHUNK_SIZE, ChunkPos, Direction};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::chunk::Chunk;

/// A sparse set of cubic chunks.
#[derive(Debug, Default)]
pub struct World {
    chunks: FxHashMap<ChunkPos, Chunk>,
    /// Chunks whose mesh is out of date.
    dirty: FxHashSet<ChunkPos>,
    /// Number of block writes that changed a value.
    changes: u64,
}

impl World {
    /// Creates a world with no chunks loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an empty chunk, replacing any chunk already at `pos`.
    pub fn create_empty_chunk(&mut self, pos: ChunkPos) -> &mut Chunk {
        self.insert_chunk(Chunk::new_empty(pos))
    }

    /// Loads a chunk, replacing any chunk already at its position.
    pub fn insert_chunk(&mut self, chunk: Chunk) -> &mut Chunk {
        let pos = chunk.pos();
        self.dirty.insert(pos);
        for direction in Direction::ALL {
            let (dx, dy, dz) = direction.offset();
            self.mark_dirty(ChunkPos::new(pos.0.x + dx, pos.0.y + dy, pos.0.z + dz));
        }
        match self.chunks.entry(pos) {
            Entry::Occupied(mut entry) => {
                entry.insert(chunk);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(chunk),
        }
    }

    /// Positions of all loaded chunks, sorted.
    #[must_use]
    pub fn chunk_positions(&self) -> Vec<ChunkPos> {
        let mut positions: Vec<_> = self.chunks.keys().copied().collect();
        positions.sort_unstable();
        positions
    }

    /// Reads a block. Unloaded space reads as air.
    #[must_use]
    pub fn get_block(&self, pos: BlockPos) -> BlockValue {
        self.chunks
            .get(&pos.chunk())
            .map_or(BlockValue::AIR, |chunk| chunk.get(pos.chunk_local()))
    }

    /// Writes a block, returning true if the stored value changed.
    ///
    /// Writes into unloaded space are dropped. A change marks the chunk dirty,
    /// together with every loaded neighbour chunk the block touches.
    pub fn set_block(&mut self, pos: BlockPos, value: BlockValue) -> bool {
        let chunk_pos = pos.chunk();
        let Some(chunk) = self.chunks.get_mut(&chunk_pos) else {
            log::trace!("Dropped write of {value} to unloaded position {pos}");
            return false;
        };

        let local = pos.chunk_local();
        if chunk.set(local, value) == value {
            return false;
        }

        self.changes += 1;
        self.dirty.insert(chunk_pos);
        for direction in Direction::ALL {
            let neighbour = direction.relative(local);
            if !Chunk::contains_local(neighbour) {
                self.mark_dirty(direction.relative(pos).chunk());
            }
        }
        true
    }

    /// Fills the inclusive box between two corners with one value.
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, value: BlockValue) {
        for y in from.0.y.min(to.0.y)..=from.0.y.max(to.0.y) {
            for z in from.0.z.min(to.0.z)..=from.0.z.max(to.0.z) {
                for x in from.0.x.min(to.0.x)..=from.0.x.max(to.0.x) {
                    self.set_block(BlockPos::new(x, y, z), value);
                }
            }
        }
    }

    /// Read-only view relative to one chunk.
    #[must_use]
    pub fn view(&self, chunk: ChunkPos) -> ChunkView<'_> {
        ChunkView::new(self, chunk)
    }

    /// Read-write view relative to one chunk.
    pub fn view_mut(&mut self, chunk: ChunkPos) -> ChunkViewMut<'_> {
        ChunkViewMut::new(self, chunk)
    }

    /// Flags a loaded chunk for a mesh rebuild.
    pub fn mark_dirty(&mut self, pos: ChunkPos) {
        if self.chunks.contains_key(&pos) {
            self.dirty.insert(pos);
        }
    }

    /// Removes and returns every dirty chunk position, sorted.
    pub fn take_dirty(&mut self) -> Vec<ChunkPos> {
        let mut dirty: Vec<_> = self
            .dirty
            .drain()
            .filter(|pos| self.chunks.contains_key(pos))
            .collect();
        dirty.sort_unstable();
        dirty
    }

    /// Total number of value-changing block writes so far.
    #[must_use]
    pub const fn change_count(&self) -> u64 {
        self.changes
    }

    /// Loads empty chunks in a cube of `radius` chunks around the origin.
    pub fn load_cube(&mut self, radius: i32) {
        for y in -radius..=radius {
            for z in -radius..=radius {
                for x in -radius..=radius {
                    self.create_empty_chunk(ChunkPos::new(x, y, z));
                }
            }
        }
        log::debug!(
            "Loaded {} chunks of {} blocks",
            self.chunks.len(),
            CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE
        );
    }
}
