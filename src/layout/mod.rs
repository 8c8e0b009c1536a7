//! The seam between the animation engine and a text layout/rendering
//! subsystem.
//!
//! The layout system owns the glyph geometry and the render buffers. The
//! engine only reads [`GlyphRecord`]s and the live [`MeshGroup`] buffers,
//! and pushes mutated copies back through [`TextLayout::commit_vertices`]
//! and [`TextLayout::commit_colors`].

mod monospace;

use std::ops::Range;

use glam::Vec3;
pub use monospace::MonospaceLayout;

/// 8-bit RGBA vertex color.
pub type Rgba8 = [u8; 4];

/// Corner slot of the bottom-left vertex within a glyph quad.
pub const BOTTOM_LEFT: usize = 0;
/// Corner slot of the top-left vertex within a glyph quad.
pub const TOP_LEFT: usize = 1;
/// Corner slot of the top-right vertex within a glyph quad.
pub const TOP_RIGHT: usize = 2;
/// Corner slot of the bottom-right vertex within a glyph quad.
pub const BOTTOM_RIGHT: usize = 3;

/// Layout-provided description of one character.
///
/// Re-supplied wholesale whenever the layout reflows; the engine never
/// modifies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRecord {
    /// Character index within the text.
    pub index: usize,
    /// Whether the character has renderable geometry.
    pub visible: bool,
    /// Undeformed quad corners in `BL, TL, TR, BR` order.
    pub corners: [Vec3; 4],
    /// Baseline height of the line this glyph sits on.
    pub baseline: f32,
    /// Top-right corner of the glyph's bounding box.
    pub top_right: Vec3,
    /// Render batch (mesh group) holding this glyph's vertices.
    pub mesh_group: usize,
    /// Index of the glyph's first vertex inside its mesh group.
    pub vertex_index: usize,
}

impl GlyphRecord {
    /// Range of this glyph's four vertices inside its mesh group.
    #[must_use]
    pub fn vertex_range(&self) -> Range<usize> {
        self.vertex_index..self.vertex_index + 4
    }
}

/// Live vertex and color buffers for one render batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshGroup {
    /// Vertex positions, four per glyph.
    pub vertices: Vec<Vec3>,
    /// Vertex colors, parallel to `vertices`.
    pub colors: Vec<Rgba8>,
}

/// Text layout/rendering collaborator consumed by the animator.
pub trait TextLayout {
    /// Synchronously (re)compute glyph geometry, restoring undeformed
    /// vertex buffers. Must be cheap to call redundantly.
    fn force_layout_update(&mut self);

    /// Current glyph records, in character order.
    fn glyphs(&self) -> &[GlyphRecord];

    /// Current live buffers, indexed by mesh group.
    fn mesh_groups(&self) -> &[MeshGroup];

    /// Replace the vertex buffer of `group` for rendering.
    fn commit_vertices(&mut self, group: usize, vertices: &[Vec3]);

    /// Replace the color buffer of `group` for rendering.
    fn commit_colors(&mut self, group: usize, colors: &[Rgba8]);
}
