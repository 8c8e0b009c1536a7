//! Color cycling: `ChangeColor`.

use rand::Rng;

use crate::layout::{GlyphRecord, MeshGroup, Rgba8};
use crate::util::random::opaque_color;

/// A recolored mesh group ready to commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Recolor {
    /// Mesh group whose color buffer changed.
    pub group: usize,
    /// Full replacement color buffer for that group.
    pub colors: Vec<Rgba8>,
}

/// Recolor the glyph under `cursor` and advance the cursor by one.
///
/// Visible glyphs get one random opaque color on all four vertices.
/// Invisible glyphs are skipped but still consume a tick. The cursor wraps
/// modulo the glyph count and is pulled back to 0 if the text shrank under
/// it. Returns `None` when nothing was recolored.
pub fn change_color<R: Rng + ?Sized>(
    glyphs: &[GlyphRecord],
    groups: &[MeshGroup],
    cursor: &mut usize,
    rng: &mut R,
) -> Option<Recolor> {
    if glyphs.is_empty() {
        *cursor = 0;
        return None;
    }
    if *cursor >= glyphs.len() {
        *cursor = 0;
    }
    let glyph = &glyphs[*cursor];
    *cursor = (*cursor + 1) % glyphs.len();

    if !glyph.visible {
        return None;
    }
    let mut colors = groups.get(glyph.mesh_group)?.colors.clone();
    let quad = colors.get_mut(glyph.vertex_range())?;
    quad.fill(opaque_color(rng));
    Some(Recolor {
        group: glyph.mesh_group,
        colors,
    })
}
