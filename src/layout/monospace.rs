//! Minimal fixed-advance text layout.
//!
//! Lays characters out on a grid, one quad per character. ASCII glyphs go
//! into mesh group 0 and everything else into group 1, the way a primary
//! font and a fallback font end up in separate render batches.

use glam::Vec3;

use super::{GlyphRecord, MeshGroup, Rgba8, TextLayout};

/// Grid layout used by the demo binary, tests and benches.
#[derive(Debug, Clone)]
pub struct MonospaceLayout {
    text: String,
    advance: f32,
    ascent: f32,
    line_height: f32,
    base_color: Rgba8,
    glyphs: Vec<GlyphRecord>,
    groups: Vec<MeshGroup>,
    layout_updates: usize,
    vertex_commits: usize,
    color_commits: usize,
}

impl MonospaceLayout {
    /// Lay out `text` with a 10-unit advance and 14-unit ascent.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut layout = Self {
            text: text.to_owned(),
            advance: 10.0,
            ascent: 14.0,
            line_height: 20.0,
            base_color: [255, 255, 255, 255],
            glyphs: Vec::new(),
            groups: Vec::new(),
            layout_updates: 0,
            vertex_commits: 0,
            color_commits: 0,
        };
        layout.rebuild();
        layout
    }

    /// Override glyph metrics and reflow.
    #[must_use]
    pub fn with_metrics(mut self, advance: f32, ascent: f32, line_height: f32) -> Self {
        self.advance = advance;
        self.ascent = ascent;
        self.line_height = line_height;
        self.rebuild();
        self
    }

    /// Replace the text and reflow immediately.
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.rebuild();
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of `force_layout_update` calls so far.
    #[must_use]
    pub fn layout_updates(&self) -> usize {
        self.layout_updates
    }

    /// Number of vertex buffer commits so far.
    #[must_use]
    pub fn vertex_commits(&self) -> usize {
        self.vertex_commits
    }

    /// Number of color buffer commits so far.
    #[must_use]
    pub fn color_commits(&self) -> usize {
        self.color_commits
    }

    /// Live quad of character `index`, if it exists.
    #[must_use]
    pub fn quad(&self, index: usize) -> Option<[Vec3; 4]> {
        let glyph = self.glyphs.get(index)?;
        let group = self.groups.get(glyph.mesh_group)?;
        let slice = group.vertices.get(glyph.vertex_range())?;
        <[Vec3; 4]>::try_from(slice).ok()
    }

    /// Live color of the first vertex of character `index`.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Rgba8> {
        let glyph = self.glyphs.get(index)?;
        self.groups
            .get(glyph.mesh_group)?
            .colors
            .get(glyph.vertex_index)
            .copied()
    }

    fn rebuild(&mut self) {
        self.glyphs.clear();
        self.groups = vec![MeshGroup::default(), MeshGroup::default()];

        let mut column = 0usize;
        let mut line = 0usize;
        for (index, ch) in self.text.chars().enumerate() {
            let x = column as f32 * self.advance;
            let baseline = -(line as f32) * self.line_height;
            let width = self.advance * 0.8;
            let corners = [
                Vec3::new(x, baseline, 0.0),
                Vec3::new(x, baseline + self.ascent, 0.0),
                Vec3::new(x + width, baseline + self.ascent, 0.0),
                Vec3::new(x + width, baseline, 0.0),
            ];

            let mesh_group = usize::from(!ch.is_ascii());
            let group = &mut self.groups[mesh_group];
            let vertex_index = group.vertices.len();
            group.vertices.extend_from_slice(&corners);
            group.colors.extend_from_slice(&[self.base_color; 4]);

            self.glyphs.push(GlyphRecord {
                index,
                visible: !ch.is_whitespace(),
                corners,
                baseline,
                top_right: corners[2],
                mesh_group,
                vertex_index,
            });

            if ch == '\n' {
                column = 0;
                line += 1;
            } else {
                column += 1;
            }
        }
    }
}

impl TextLayout for MonospaceLayout {
    fn force_layout_update(&mut self) {
        self.layout_updates += 1;
        self.rebuild();
    }

    fn glyphs(&self) -> &[GlyphRecord] {
        &self.glyphs
    }

    fn mesh_groups(&self) -> &[MeshGroup] {
        &self.groups
    }

    fn commit_vertices(&mut self, group: usize, vertices: &[Vec3]) {
        if let Some(target) = self.groups.get_mut(group) {
            target.vertices.clear();
            target.vertices.extend_from_slice(vertices);
            self.vertex_commits += 1;
        }
    }

    fn commit_colors(&mut self, group: usize, colors: &[Rgba8]) {
        if let Some(target) = self.groups.get_mut(group) {
            target.colors.clear();
            target.colors.extend_from_slice(colors);
            self.color_commits += 1;
        }
    }
}
