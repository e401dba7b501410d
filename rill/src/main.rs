//! Runs the fluid simulation over a small walled basin and reports what each
//! frame did.

mod logger;

use std::path::Path;

use anyhow::Context;
use rill_core::{BlockRenderers, RenderContext, RillConfig, World};
use rill_registry::{BlockRegistry, BlockValue, vanilla_blocks};
use rill_utils::{BlockPos, CHUNK_SIZE};

const CONFIG_PATH: &str = "config/rill_config.json5";

fn main() -> anyhow::Result<()> {
    logger::init()?;

    let config = RillConfig::load_or_create(Path::new(CONFIG_PATH))
        .with_context(|| format!("Failed to load {CONFIG_PATH}"))?;
    let registry = config.registry();
    let atlas = config.atlas();
    let renderers = BlockRenderers::new(&registry);
    let ctx = RenderContext::new(&registry, &atlas);

    let mut world = basin(&config, &registry);
    let steps = config.speed.steps_per_frame();
    tracing::info!(
        water = renderers
            .get(vanilla_blocks::WATER)
            .name(BlockValue::of(vanilla_blocks::WATER)),
        lava = renderers
            .get(vanilla_blocks::LAVA)
            .name(BlockValue::of(vanilla_blocks::LAVA)),
        steps_per_frame = steps,
        "Starting simulation"
    );

    let initial = world.rebuild_dirty_meshes(&renderers, &ctx);
    tracing::info!(chunks = initial.len(), "Built initial meshes");

    for frame in 1..=config.frames {
        let mut ticked = 0;
        let mut changed = 0;
        for _ in 0..steps {
            let stats = world.step(&registry, &renderers);
            ticked += stats.ticked;
            changed += stats.changed;
        }

        let meshes = world.rebuild_dirty_meshes(&renderers, &ctx);
        let quads: usize = meshes.iter().map(|(_, mesh)| mesh.quad_count()).sum();
        tracing::info!(frame, ticked, changed, remeshed = meshes.len(), quads, "Frame done");

        if changed == 0 {
            tracing::info!("Fluids settled after {frame} frames");
            break;
        }
    }

    tracing::info!(
        fluid_blocks = world.fluid_positions(&registry).len(),
        writes = world.change_count(),
        "Simulation finished"
    );
    Ok(())
}

/// Loads the configured chunks and builds a walled stone tray with a water
/// source dropping into it and a lava source in one corner.
fn basin(config: &RillConfig, registry: &BlockRegistry) -> World {
    let radius = i32::from(config.world_radius);
    let mut world = World::new();
    world.load_cube(radius);

    let lo = -CHUNK_SIZE * radius;
    let hi = CHUNK_SIZE * (radius + 1) - 1;
    let mid = (lo + hi) / 2;

    world.fill(
        BlockPos::new(lo, lo, lo),
        BlockPos::new(hi, lo, hi),
        BlockValue::of(vanilla_blocks::STONE),
    );
    let wall = BlockValue::of(vanilla_blocks::PLANKS);
    world.fill(BlockPos::new(lo, lo + 1, lo), BlockPos::new(hi, lo + 3, lo), wall);
    world.fill(BlockPos::new(lo, lo + 1, hi), BlockPos::new(hi, lo + 3, hi), wall);
    world.fill(BlockPos::new(lo, lo + 1, lo), BlockPos::new(lo, lo + 3, hi), wall);
    world.fill(BlockPos::new(hi, lo + 1, lo), BlockPos::new(hi, lo + 3, hi), wall);
    world.fill(
        BlockPos::new(mid + 2, lo + 1, mid - 2),
        BlockPos::new(mid + 2, lo + 2, mid + 2),
        BlockValue::of(vanilla_blocks::GLASS),
    );

    let water = config.water.clone().for_block(vanilla_blocks::WATER);
    let lava = config.lava.clone().for_block(vanilla_blocks::LAVA);
    world.set_block(BlockPos::new(mid, lo + 6, mid), water.source());
    world.set_block(BlockPos::new(lo + 2, lo + 1, lo + 2), lava.source());

    tracing::debug!(
        chunks = world.chunk_positions().len(),
        fluids = world.fluid_positions(registry).len(),
        "Built basin"
    );
    world
}
