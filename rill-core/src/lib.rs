//! # Rill core
//!
//! Discrete fluid simulation and variable-height fluid meshing over a world of
//! cubic block chunks.
//!
//! Simulation and rendering are separate passes over the same chunk data:
//! [`world::World::step`] ticks every fluid block, then
//! [`world::World::rebuild_dirty_meshes`] regenerates geometry for the chunks
//! those ticks touched.

pub mod chunk;
pub mod config;
pub mod fluid;
pub mod render;
pub mod world;

pub use config::{ConfigError, RillConfig, Speed};
pub use fluid::FluidBlock;
pub use render::{BlockRenderer, BlockRenderers, ChunkMesh, RenderContext};
pub use world::World;
