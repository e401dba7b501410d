//! Mesh generation.
//!
//! Renderers emit quads as four consecutive vertices into a [`MeshSink`].
//! They only ever see a [`BlockSource`](crate::chunk::BlockSource), so a mesh
//! rebuild cannot change simulation state.

mod block_renderer;
mod chunk_mesher;
pub mod cube;

pub use block_renderer::{BlockRenderer, BlockRenderers};
pub use chunk_mesher::mesh_chunk;
pub use cube::CubeBlock;

use rill_registry::{BlockRegistry, PreviewRect, TextureAtlas};
use rill_utils::{Direction, math::Vector3};

/// A mesh vertex in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// World-space position.
    pub position: Vector3<f32>,
    /// Atlas u.
    pub u: f32,
    /// Atlas v.
    pub v: f32,
    /// Face normal, as a [`Direction`] ordinal.
    pub normal: u8,
}

impl Vertex {
    /// Creates a vertex for a face pointing towards `normal`.
    #[must_use]
    pub const fn new(position: Vector3<f32>, u: f32, v: f32, normal: Direction) -> Self {
        Self {
            position,
            u,
            v,
            normal: normal as u8,
        }
    }
}

/// Receives vertices from renderers. Every four vertices form one quad.
pub trait MeshSink {
    /// Appends one vertex.
    fn add_unaligned_vertex(&mut self, vertex: Vertex);
}

/// The generated geometry of one chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// Quad vertices, four per quad.
    pub vertices: Vec<Vertex>,
}

impl ChunkMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of complete quads.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.quads().len()
    }

    /// Iterates over quads as vertex quadruples.
    pub fn quads(&self) -> impl ExactSizeIterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(4)
    }
}

impl MeshSink for ChunkMesh {
    fn add_unaligned_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }
}

/// Destination of inventory thumbnails.
pub trait PreviewCanvas {
    /// Copies a rectangle of the preview atlas to `(x, y)`.
    fn draw_atlas_entry(&mut self, entry: PreviewRect, x: i32, y: i32);
}

/// Shared lookup tables handed to every renderer call.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Block registry, source of the opacity predicate.
    pub registry: &'a BlockRegistry,
    /// Terrain atlas geometry.
    pub atlas: &'a TextureAtlas,
}

impl<'a> RenderContext<'a> {
    /// Creates a render context.
    #[must_use]
    pub const fn new(registry: &'a BlockRegistry, atlas: &'a TextureAtlas) -> Self {
        Self { registry, atlas }
    }
}
