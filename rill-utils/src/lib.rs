//! Shared position, direction and bounding-box types for the rill workspace.

pub mod aabb;
pub mod direction;
pub mod math;
pub mod types;

pub use aabb::Aabb;
pub use direction::Direction;
pub use types::{BlockPos, ChunkPos};

/// Edge length of one block in world units.
pub const BLOCK_SIZE: f32 = 1.0;

/// Edge length of a cubic chunk, in blocks.
pub const CHUNK_SIZE: i32 = 16;

/// Number of blocks stored in one chunk.
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;
