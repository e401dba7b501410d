//! Fluid geometry.
//!
//! A full block is drawn as a cube through the normal face path. A partial
//! block is a prism whose height and side texture follow its fill ratio.

use rill_registry::BlockValue;
use rill_utils::{Aabb, BLOCK_SIZE, BlockPos, Direction, math::Vector3};

use super::FluidBlock;
use crate::chunk::{BlockSource, ChunkAccess};
use crate::render::cube::{emit_face, render_normal_block_side};
use crate::render::{BlockRenderer, MeshSink, PreviewCanvas, RenderContext};

/// Prism sides in emission order: front, back, left, right.
const PRISM_SIDES: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

impl BlockRenderer for FluidBlock {
    fn is_block_shaped(&self, block: BlockValue) -> bool {
        self.level(block) == self.config.max_level
    }

    fn render_special_block(
        &self,
        block: BlockValue,
        pos: BlockPos,
        chunk: &dyn BlockSource,
        ctx: &RenderContext<'_>,
        sink: &mut dyn MeshSink,
    ) {
        let level = self.level(block);
        if level == 0 || level == self.config.max_level {
            return;
        }

        let tex = ctx.atlas.entry(self.config.texture);
        let ratio = self.config.fill_ratio(level);
        let height = BLOCK_SIZE * ratio;
        let v_top = tex.v_at(ratio);
        let local = chunk.to_local(pos);
        let corner = pos.0.to_world(BLOCK_SIZE);

        for side in PRISM_SIDES {
            let neighbour = chunk.neighbour(local, side);
            // An equally or more filled neighbour covers this face.
            if ctx.registry.is_opaque(neighbour) || self.at_least(neighbour, level) {
                continue;
            }
            emit_face(sink, corner, side, height, &tex, v_top);
        }

        emit_face(sink, corner, Direction::Up, height, &tex, tex.top);
    }

    fn geometry_normal_block(
        &self,
        block: BlockValue,
        local: BlockPos,
        side: Direction,
        chunk: &dyn BlockSource,
        ctx: &RenderContext<'_>,
        sink: &mut dyn MeshSink,
    ) {
        let level = self.level(block);
        if level == 0 || (level != self.config.max_level && side != Direction::Down) {
            return;
        }

        let neighbour = chunk.neighbour(local, side);
        let hidden = match side {
            // Any amount of the same fluid below hides the bottom.
            Direction::Down => self.config.matches(neighbour),
            _ => neighbour == block,
        };
        if hidden {
            return;
        }

        let tex = ctx.atlas.entry(self.config.texture);
        render_normal_block_side(local, side, &tex, chunk, sink);
    }

    fn get_aabb(&self, block: BlockValue, corner: Vector3<f32>) -> Aabb {
        let ratio = self.config.fill_ratio(self.level(block));
        Aabb::from_corner(corner, BLOCK_SIZE, BLOCK_SIZE * ratio)
    }

    fn draw_preview(
        &self,
        _block: BlockValue,
        canvas: &mut dyn PreviewCanvas,
        ctx: &RenderContext<'_>,
        x: i32,
        y: i32,
    ) {
        canvas.draw_atlas_entry(ctx.atlas.preview_entry(self.config.texture), x, y);
    }

    fn name(&self, _block: BlockValue) -> &str {
        &self.config.name
    }

    fn tick(&self, block: BlockValue, local: BlockPos, chunk: &mut dyn ChunkAccess) {
        FluidBlock::tick(self, block, local, chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{BlockRenderers, ChunkMesh, mesh_chunk};
    use crate::world::World;
    use rill_registry::{
        AtlasSlot, BlockRegistry, PreviewRect, TextureAtlas, fluid::vanilla, vanilla_blocks,
    };
    use rill_utils::ChunkPos;

    struct Scene {
        world: World,
        registry: BlockRegistry,
        atlas: TextureAtlas,
        water: FluidBlock,
    }

    impl Scene {
        fn new() -> Self {
            let mut world = World::new();
            world.create_empty_chunk(ChunkPos::new(0, 0, 0));
            Self {
                world,
                registry: BlockRegistry::default(),
                atlas: TextureAtlas::default(),
                water: FluidBlock::new(vanilla::water()),
            }
        }

        fn special(&self, pos: BlockPos) -> ChunkMesh {
            let mut mesh = ChunkMesh::new();
            let view = self.world.view(ChunkPos::new(0, 0, 0));
            let ctx = RenderContext::new(&self.registry, &self.atlas);
            self.water
                .render_special_block(self.world.get_block(pos), pos, &view, &ctx, &mut mesh);
            mesh
        }

        fn side(&self, pos: BlockPos, side: Direction) -> ChunkMesh {
            let mut mesh = ChunkMesh::new();
            let view = self.world.view(ChunkPos::new(0, 0, 0));
            let ctx = RenderContext::new(&self.registry, &self.atlas);
            self.water.geometry_normal_block(
                self.world.get_block(pos),
                pos.chunk_local(),
                side,
                &view,
                &ctx,
                &mut mesh,
            );
            mesh
        }

        fn whole_chunk(&self) -> ChunkMesh {
            let renderers = BlockRenderers::new(&self.registry);
            let view = self.world.view(ChunkPos::new(0, 0, 0));
            mesh_chunk(&view, &renderers, &RenderContext::new(&self.registry, &self.atlas))
        }
    }

    fn water_at(level: u8) -> BlockValue {
        BlockValue::new(vanilla_blocks::WATER, level)
    }

    #[derive(Default)]
    struct Recorder(Vec<(PreviewRect, i32, i32)>);

    impl PreviewCanvas for Recorder {
        fn draw_atlas_entry(&mut self, entry: PreviewRect, x: i32, y: i32) {
            self.0.push((entry, x, y));
        }
    }

    #[test]
    fn test_lone_partial_block_is_a_capped_prism() {
        let mut scene = Scene::new();
        let pos = BlockPos::new(8, 8, 8);
        scene.world.set_block(pos, water_at(3));

        let mesh = scene.special(pos);
        assert_eq!(mesh.quad_count(), 5);
        assert!(mesh.vertices.len() <= 24);

        let cap = mesh.quads().last().expect("top cap emitted");
        assert!(cap.iter().all(|v| v.position.y == 8.6));
        assert!(cap.iter().all(|v| v.normal == Direction::Up as u8));

        let normals: Vec<u8> = mesh.quads().map(|quad| quad[0].normal).collect();
        assert_eq!(
            normals,
            vec![
                Direction::North as u8,
                Direction::South as u8,
                Direction::West as u8,
                Direction::East as u8,
                Direction::Up as u8
            ]
        );
    }

    #[test]
    fn test_side_texture_follows_fill_ratio() {
        let mut scene = Scene::new();
        let pos = BlockPos::new(8, 8, 8);
        scene.world.set_block(pos, water_at(3));

        let tex = scene.atlas.entry(vanilla::water().texture);
        let mesh = scene.special(pos);
        let front = mesh.quads().next().expect("front face emitted");
        assert_eq!(front[0].v, tex.bottom);
        assert_eq!(front[1].v, tex.v_at(0.6));
        assert_eq!(front[1].position.y, 8.6);
        assert!(front[1].v > tex.top && front[1].v < tex.bottom);
    }

    #[test]
    fn test_partial_sides_cull_against_fuller_fluid_and_solids() {
        let mut scene = Scene::new();
        let pos = BlockPos::new(8, 8, 8);
        scene.world.set_block(pos, water_at(3));
        scene.world.set_block(BlockPos::new(9, 8, 8), water_at(3));
        scene.world.set_block(BlockPos::new(7, 8, 8), water_at(4));
        scene.world.set_block(BlockPos::new(8, 8, 7), water_at(2));
        scene.world.set_block(BlockPos::new(8, 8, 9), BlockValue::of(vanilla_blocks::STONE));

        let mesh = scene.special(pos);
        let normals: Vec<u8> = mesh.quads().map(|quad| quad[0].normal).collect();
        assert_eq!(normals, vec![Direction::North as u8, Direction::Up as u8]);
    }

    #[test]
    fn test_partial_sides_show_through_glass_and_lava() {
        let mut scene = Scene::new();
        let pos = BlockPos::new(8, 8, 8);
        scene.world.set_block(pos, water_at(2));
        scene.world.set_block(BlockPos::new(9, 8, 8), BlockValue::of(vanilla_blocks::GLASS));
        scene.world.set_block(BlockPos::new(7, 8, 8), vanilla::lava().source());

        assert_eq!(scene.special(pos).quad_count(), 5);
    }

    #[test]
    fn test_full_blocks_hide_shared_face() {
        let mut scene = Scene::new();
        let source = water_at(5);
        scene.world.set_block(BlockPos::new(4, 4, 4), source);
        scene.world.set_block(BlockPos::new(5, 4, 4), source);

        assert!(scene.side(BlockPos::new(4, 4, 4), Direction::East).vertices.is_empty());
        assert!(scene.side(BlockPos::new(5, 4, 4), Direction::West).vertices.is_empty());
        assert_eq!(scene.side(BlockPos::new(4, 4, 4), Direction::North).quad_count(), 1);
        assert_eq!(scene.whole_chunk().quad_count(), 10);
    }

    #[test]
    fn test_full_block_shows_face_towards_lower_fluid() {
        let mut scene = Scene::new();
        scene.world.set_block(BlockPos::new(4, 4, 4), water_at(5));
        scene.world.set_block(BlockPos::new(5, 4, 4), water_at(4));

        assert_eq!(scene.side(BlockPos::new(4, 4, 4), Direction::East).quad_count(), 1);
    }

    #[test]
    fn test_bottom_hidden_by_any_level_below() {
        let mut scene = Scene::new();
        scene.world.set_block(BlockPos::new(4, 5, 4), water_at(5));
        scene.world.set_block(BlockPos::new(4, 4, 4), water_at(4));
        assert!(scene.side(BlockPos::new(4, 5, 4), Direction::Down).vertices.is_empty());

        scene.world.set_block(BlockPos::new(4, 4, 4), BlockValue::AIR);
        assert_eq!(scene.side(BlockPos::new(4, 5, 4), Direction::Down).quad_count(), 1);
    }

    #[test]
    fn test_partial_block_only_draws_bottom_through_cube_path() {
        let mut scene = Scene::new();
        let pos = BlockPos::new(4, 4, 4);
        scene.world.set_block(pos, water_at(2));

        for side in Direction::ALL {
            let expected = usize::from(side == Direction::Down);
            assert_eq!(scene.side(pos, side).quad_count(), expected, "{side:?}");
        }
        // Prism plus bottom.
        assert_eq!(scene.whole_chunk().quad_count(), 6);
    }

    #[test]
    fn test_shape_and_bounds() {
        let water = FluidBlock::new(vanilla::water());
        let corner = Vector3::new(1.0, 2.0, 3.0);

        assert!(water.is_block_shaped(water_at(5)));
        assert!(!water.is_block_shaped(water_at(4)));
        assert_eq!(
            water.get_aabb(water_at(5), corner),
            Aabb::from_corner(corner, BLOCK_SIZE, BLOCK_SIZE)
        );

        let mut previous = 0.0;
        for level in 1..5 {
            let aabb = water.get_aabb(water_at(level), Vector3::new(0.0, 0.0, 0.0));
            assert_eq!(aabb.max.y, BLOCK_SIZE * f32::from(level) / 5.0);
            assert_eq!(aabb.max.x - aabb.min.x, BLOCK_SIZE);
            assert_eq!(aabb.max.z - aabb.min.z, BLOCK_SIZE);
            assert!(aabb.max.y > previous);
            previous = aabb.max.y;
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Water level 9 above 5")]
    fn test_level_above_maximum_panics() {
        let water = FluidBlock::new(vanilla::water());
        let _ = water.is_block_shaped(water_at(9));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not a block of Water")]
    fn test_foreign_fluid_panics() {
        let water = FluidBlock::new(vanilla::water());
        let _ = water.is_block_shaped(vanilla::lava().source());
    }

    #[test]
    fn test_preview_ignores_level() {
        let registry = BlockRegistry::default();
        let atlas = TextureAtlas::default();
        let ctx = RenderContext::new(&registry, &atlas);
        let water = FluidBlock::new(vanilla::water());

        let mut canvas = Recorder::default();
        water.draw_preview(water_at(1), &mut canvas, &ctx, 10, 20);
        water.draw_preview(water_at(5), &mut canvas, &ctx, 10, 20);

        let expected = (atlas.preview_entry(AtlasSlot::new(13, 12)), 10, 20);
        assert_eq!(canvas.0, vec![expected, expected]);
    }

    #[test]
    fn test_level_zero_draws_nothing() {
        let mut scene = Scene::new();
        let pos = BlockPos::new(4, 4, 4);
        scene.world.set_block(pos, water_at(0));
        assert!(scene.special(pos).vertices.is_empty());
        assert!(scene.side(pos, Direction::Down).vertices.is_empty());
    }
}
