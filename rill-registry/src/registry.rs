//! The block registry and its opacity table.

use rustc_hash::FxHashMap;

use crate::fluid::{FluidConfig, vanilla};
use crate::{AtlasSlot, BlockId, BlockValue, RegistryExt, vanilla_blocks};

/// One registered block type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEntry {
    /// Block type id.
    pub id: BlockId,
    /// Registry name.
    pub name: &'static str,
    /// Whether the block hides the faces of its neighbours.
    pub opaque: bool,
    /// Atlas slot used for the block's faces and preview.
    pub texture: AtlasSlot,
}

/// Registered block types, indexed by id, plus the fluid kinds.
pub struct BlockRegistry {
    by_id: FxHashMap<BlockId, BlockEntry>,
    fluids: FxHashMap<BlockId, FluidConfig>,
    allows_registering: bool,
}

impl BlockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            fluids: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Creates a frozen registry holding the built-in blocks and the given fluid kinds.
    #[must_use]
    pub fn vanilla(leaves_opaque: bool, water: FluidConfig, lava: FluidConfig) -> Self {
        let mut registry = Self::new();
        let solid = [
            (vanilla_blocks::AIR, "air", false, AtlasSlot::new(0, 0)),
            (vanilla_blocks::STONE, "stone", true, AtlasSlot::new(1, 0)),
            (vanilla_blocks::DIRT, "dirt", true, AtlasSlot::new(2, 0)),
            (vanilla_blocks::PLANKS, "planks", true, AtlasSlot::new(4, 0)),
            (vanilla_blocks::GLASS, "glass", false, AtlasSlot::new(1, 3)),
            (vanilla_blocks::LEAVES, "leaves", leaves_opaque, AtlasSlot::new(4, 3)),
        ];
        for (id, name, opaque, texture) in solid {
            registry.register(BlockEntry {
                id,
                name,
                opaque,
                texture,
            });
        }
        registry.register_fluid("water", water.for_block(vanilla_blocks::WATER));
        registry.register_fluid("lava", lava.for_block(vanilla_blocks::LAVA));
        registry.freeze();
        registry
    }

    /// Registers a block type.
    ///
    /// # Panics
    /// Panics if the registry is frozen.
    pub fn register(&mut self, entry: BlockEntry) {
        assert!(
            self.allows_registering,
            "Cannot register block after registry is frozen"
        );
        log::trace!("Registering block {} as {}", entry.name, entry.id.0);
        self.by_id.insert(entry.id, entry);
    }

    /// Registers a fluid kind on its block type. Fluids are never opaque.
    ///
    /// # Panics
    /// Panics if the registry is frozen.
    pub fn register_fluid(&mut self, name: &'static str, config: FluidConfig) {
        self.register(BlockEntry {
            id: config.block,
            name,
            opaque: false,
            texture: config.texture,
        });
        self.fluids.insert(config.block, config);
    }

    /// The opacity predicate used for face culling.
    #[must_use]
    pub fn is_opaque(&self, value: BlockValue) -> bool {
        self.by_id.get(&value.id()).is_some_and(|entry| entry.opaque)
    }

    /// The fluid kind carried by a block type, if any.
    #[must_use]
    pub fn fluid(&self, id: BlockId) -> Option<&FluidConfig> {
        self.fluids.get(&id)
    }

    /// Returns true if the block type is a registered fluid.
    #[must_use]
    pub fn is_fluid(&self, id: BlockId) -> bool {
        self.fluids.contains_key(&id)
    }

    /// Iterates over all registered block types.
    pub fn entries(&self) -> impl Iterator<Item = &BlockEntry> {
        self.by_id.values()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::vanilla(true, vanilla::water(), vanilla::lava())
    }
}

impl RegistryExt for BlockRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
