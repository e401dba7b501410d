//! Ordinary cube faces.

use rill_registry::{AtlasEntry, AtlasSlot, BlockValue};
use rill_utils::{Aabb, BLOCK_SIZE, BlockPos, Direction, math::Vector3};

use super::{BlockRenderer, MeshSink, PreviewCanvas, RenderContext, Vertex};
use crate::chunk::BlockSource;

/// Emits one quad of a box standing on `corner` with a `BLOCK_SIZE` footprint.
///
/// Side faces span `height` and sample the texture between its bottom edge and
/// `v_top`. The top face lies at `corner.y + height`, the bottom face at
/// `corner.y`; both use the whole slot.
pub fn emit_face(
    sink: &mut dyn MeshSink,
    corner: Vector3<f32>,
    side: Direction,
    height: f32,
    tex: &AtlasEntry,
    v_top: f32,
) {
    let Vector3 { x, y, z } = corner;
    let s = BLOCK_SIZE;
    let h = height;
    let (l, r, t, b) = (tex.left, tex.right, tex.top, tex.bottom);

    let quad: [(f32, f32, f32, f32, f32); 4] = match side {
        Direction::North => [
            (x, y, z, l, b),
            (x, y + h, z, l, v_top),
            (x + s, y + h, z, r, v_top),
            (x + s, y, z, r, b),
        ],
        Direction::South => [
            (x + s, y, z + s, l, b),
            (x + s, y + h, z + s, l, v_top),
            (x, y + h, z + s, r, v_top),
            (x, y, z + s, r, b),
        ],
        Direction::West => [
            (x, y, z + s, l, b),
            (x, y + h, z + s, l, v_top),
            (x, y + h, z, r, v_top),
            (x, y, z, r, b),
        ],
        Direction::East => [
            (x + s, y, z, l, b),
            (x + s, y + h, z, l, v_top),
            (x + s, y + h, z + s, r, v_top),
            (x + s, y, z + s, r, b),
        ],
        Direction::Up => [
            (x, y + h, z, l, b),
            (x, y + h, z + s, l, t),
            (x + s, y + h, z + s, r, t),
            (x + s, y + h, z, r, b),
        ],
        Direction::Down => [
            (x + s, y, z, r, b),
            (x + s, y, z + s, r, t),
            (x, y, z + s, l, t),
            (x, y, z, l, b),
        ],
    };

    for (px, py, pz, u, v) in quad {
        sink.add_unaligned_vertex(Vertex::new(Vector3::new(px, py, pz), u, v, side));
    }
}

/// World-space corner of a chunk-local block.
#[must_use]
pub fn block_corner(chunk: &dyn BlockSource, local: BlockPos) -> Vector3<f32> {
    (chunk.origin().0 + local.0).to_world(BLOCK_SIZE)
}

/// Renders one side of a full cube at chunk-local coordinates.
///
/// Culling against neighbours is the caller's job.
pub fn render_normal_block_side(
    local: BlockPos,
    side: Direction,
    tex: &AtlasEntry,
    chunk: &dyn BlockSource,
    sink: &mut dyn MeshSink,
) {
    emit_face(
        sink,
        block_corner(chunk, local),
        side,
        BLOCK_SIZE,
        tex,
        tex.top,
    );
}

/// Renderer for ordinary full cubes.
pub struct CubeBlock {
    texture: AtlasSlot,
    name: String,
}

impl CubeBlock {
    /// Creates a cube renderer using one atlas slot for all faces.
    #[must_use]
    pub fn new(texture: AtlasSlot, name: impl Into<String>) -> Self {
        Self {
            texture,
            name: name.into(),
        }
    }
}

impl BlockRenderer for CubeBlock {
    fn is_block_shaped(&self, _block: BlockValue) -> bool {
        true
    }

    fn render_special_block(
        &self,
        _block: BlockValue,
        _pos: BlockPos,
        _chunk: &dyn BlockSource,
        _ctx: &RenderContext<'_>,
        _sink: &mut dyn MeshSink,
    ) {
    }

    fn geometry_normal_block(
        &self,
        _block: BlockValue,
        local: BlockPos,
        side: Direction,
        chunk: &dyn BlockSource,
        ctx: &RenderContext<'_>,
        sink: &mut dyn MeshSink,
    ) {
        let tex = ctx.atlas.entry(self.texture);
        render_normal_block_side(local, side, &tex, chunk, sink);
    }

    fn get_aabb(&self, _block: BlockValue, corner: Vector3<f32>) -> Aabb {
        Aabb::from_corner(corner, BLOCK_SIZE, BLOCK_SIZE)
    }

    fn draw_preview(
        &self,
        _block: BlockValue,
        canvas: &mut dyn PreviewCanvas,
        ctx: &RenderContext<'_>,
        x: i32,
        y: i32,
    ) {
        canvas.draw_atlas_entry(ctx.atlas.preview_entry(self.texture), x, y);
    }

    fn name(&self, _block: BlockValue) -> &str {
        &self.name
    }
}
