#![allow(missing_docs)]
//! Benchmarks for fluid simulation and meshing.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rill_core::{BlockRenderers, RenderContext, World, render::mesh_chunk};
use rill_registry::{BlockRegistry, BlockValue, TextureAtlas, fluid::vanilla, vanilla_blocks};
use rill_utils::{BlockPos, ChunkPos};

/// A stone tray one chunk wide with a fluid source in the middle.
fn tray(source: BlockValue) -> World {
    let mut world = World::new();
    world.create_empty_chunk(ChunkPos::new(0, 0, 0));
    world.fill(
        BlockPos::new(0, 0, 0),
        BlockPos::new(15, 0, 15),
        BlockValue::of(vanilla_blocks::STONE),
    );
    world.set_block(BlockPos::new(8, 1, 8), source);
    world
}

/// Runs steps until nothing changes.
fn settle(world: &mut World, registry: &BlockRegistry, renderers: &BlockRenderers) {
    while world.step(registry, renderers).changed > 0 {}
}

fn bench_step(c: &mut Criterion) {
    let registry = BlockRegistry::default();
    let renderers = BlockRenderers::new(&registry);

    let mut group = c.benchmark_group("fluid_step");
    for (name, source) in [("water", vanilla::water().source()), ("lava", vanilla::lava().source())] {
        group.bench_with_input(BenchmarkId::new("spread", name), &source, |b, &source| {
            b.iter(|| {
                let mut world = tray(source);
                settle(&mut world, &registry, &renderers);
                black_box(world.change_count());
            });
        });

        let mut settled = tray(source);
        settle(&mut settled, &registry, &renderers);
        group.bench_with_input(BenchmarkId::new("settled", name), &(), |b, _| {
            b.iter(|| black_box(settled.step(&registry, &renderers)));
        });
    }
    group.finish();
}

fn bench_mesh(c: &mut Criterion) {
    let registry = BlockRegistry::default();
    let renderers = BlockRenderers::new(&registry);
    let atlas = TextureAtlas::default();
    let ctx = RenderContext::new(&registry, &atlas);

    let mut world = tray(vanilla::water().source());
    settle(&mut world, &registry, &renderers);

    c.bench_function("mesh_flooded_chunk", |b| {
        let view = world.view(ChunkPos::new(0, 0, 0));
        b.iter(|| black_box(mesh_chunk(&view, &renderers, &ctx)));
    });
}

criterion_group!(benches, bench_step, bench_mesh);
criterion_main!(benches);
