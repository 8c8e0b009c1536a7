//! Baseline glyph geometry cache.
//!
//! Transforms always displace from the baseline captured here, never from a
//! previous tick's output, so repeated ticks cannot compound. The cache is
//! replaced wholesale whenever it is marked dirty (animation start, content
//! change); it is never patched in place.

use glam::Vec3;

use crate::layout::{GlyphRecord, MeshGroup};

/// Undeformed vertex positions, one buffer per mesh group, indexed exactly
/// like the live buffers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphSnapshot {
    groups: Vec<Vec<Vec3>>,
}

impl GlyphSnapshot {
    /// Capture the resting geometry of `glyphs`.
    ///
    /// Starts from a copy of the live buffers (so any non-glyph vertices are
    /// carried through) and overwrites every glyph quad with the layout's
    /// own corners.
    #[must_use]
    pub fn capture(glyphs: &[GlyphRecord], groups: &[MeshGroup]) -> Self {
        let mut buffers: Vec<Vec<Vec3>> =
            groups.iter().map(|g| g.vertices.clone()).collect();
        for glyph in glyphs {
            let quad = buffers
                .get_mut(glyph.mesh_group)
                .and_then(|buf| buf.get_mut(glyph.vertex_range()));
            if let Some(quad) = quad {
                quad.copy_from_slice(&glyph.corners);
            }
        }
        Self { groups: buffers }
    }

    /// Baseline quad of `glyph`, or `None` if its indices fall outside the
    /// captured buffers.
    #[must_use]
    pub fn quad(&self, glyph: &GlyphRecord) -> Option<[Vec3; 4]> {
        let slice = self
            .groups
            .get(glyph.mesh_group)?
            .get(glyph.vertex_range())?;
        <[Vec3; 4]>::try_from(slice).ok()
    }

    /// Captured buffers by mesh group.
    #[must_use]
    pub fn groups(&self) -> &[Vec<Vec3>] {
        &self.groups
    }

    /// Whether the captured buffers have the same group count and lengths
    /// as `groups`.
    #[must_use]
    pub fn matches_shape(&self, groups: &[MeshGroup]) -> bool {
        self.groups.len() == groups.len()
            && self
                .groups
                .iter()
                .zip(groups)
                .all(|(snap, live)| snap.len() == live.vertices.len())
    }

    /// Whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

/// A [`GlyphSnapshot`] plus the dirty flag that decides when to recapture.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    snapshot: GlyphSnapshot,
    dirty: bool,
}

impl SnapshotCache {
    /// Empty cache; the first refresh always captures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: GlyphSnapshot::default(),
            dirty: true,
        }
    }

    /// Force a recapture on the next refresh.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the next refresh will recapture.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recapture from the live layout if dirty, or if the layout reflowed
    /// into buffers of a different shape, then clear the flag.
    ///
    /// Returns `true` if a capture happened.
    pub fn refresh_if_dirty(
        &mut self,
        glyphs: &[GlyphRecord],
        groups: &[MeshGroup],
    ) -> bool {
        if !self.dirty {
            if self.snapshot.matches_shape(groups) {
                return false;
            }
            log::debug!("mesh buffers changed shape without notice; recapturing");
        }
        self.snapshot = GlyphSnapshot::capture(glyphs, groups);
        self.dirty = false;
        log::debug!(
            "captured glyph snapshot: {} glyphs in {} mesh groups",
            glyphs.len(),
            groups.len()
        );
        true
    }

    /// The current baseline.
    #[must_use]
    pub fn snapshot(&self) -> &GlyphSnapshot {
        &self.snapshot
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}
