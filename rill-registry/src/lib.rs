//! Block identities, the opacity table, fluid kinds and the texture atlas.

pub mod atlas;
pub mod blocks;
pub mod fluid;
pub mod registry;

pub use atlas::{AtlasEntry, AtlasSlot, PreviewRect, TextureAtlas};
pub use blocks::{BlockId, BlockValue, vanilla_blocks};
pub use fluid::FluidConfig;
pub use registry::{BlockEntry, BlockRegistry};

/// Registries that accept entries until frozen.
pub trait RegistryExt {
    /// Stops accepting new entries.
    fn freeze(&mut self);
}
