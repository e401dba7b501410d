//! Wrapper types making it harder to accidentally mix block and chunk coordinates.

use std::fmt::{self, Display};

use crate::CHUNK_SIZE;
use crate::math::Vector3;

/// A block position in world coordinates, or chunk-local coordinates where noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockPos(pub Vector3<i32>);

/// A cubic chunk position, counted in chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChunkPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Returns this position shifted by the given offset.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// The chunk containing this world position.
    #[must_use]
    pub const fn chunk(&self) -> ChunkPos {
        ChunkPos(Vector3::new(
            self.0.x.div_euclid(CHUNK_SIZE),
            self.0.y.div_euclid(CHUNK_SIZE),
            self.0.z.div_euclid(CHUNK_SIZE),
        ))
    }

    /// The coordinates of this world position inside its chunk, each in `0..CHUNK_SIZE`.
    #[must_use]
    pub const fn chunk_local(&self) -> Self {
        Self::new(
            self.0.x.rem_euclid(CHUNK_SIZE),
            self.0.y.rem_euclid(CHUNK_SIZE),
            self.0.z.rem_euclid(CHUNK_SIZE),
        )
    }
}

impl ChunkPos {
    /// Creates a new chunk position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The world position of the chunk's lowest corner block.
    #[must_use]
    pub const fn origin(&self) -> BlockPos {
        BlockPos::new(
            self.0.x * CHUNK_SIZE,
            self.0.y * CHUNK_SIZE,
            self.0.z * CHUNK_SIZE,
        )
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0.x, self.0.y, self.0.z)
    }
}
