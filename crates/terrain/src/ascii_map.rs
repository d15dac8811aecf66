//! ASCII elevation preview.
//!
//! Renders a generated mesh's vertex heights as a character grid, one glyph
//! per vertex, brightest glyph at the top of the normalized range. Built
//! on demand from a [`MeshData`] snapshot; a cheap inspection surface for
//! logs and terminals.

use crate::mesh::{ElevationRange, MeshData};

/// Glyphs ordered dark-to-bright; index by normalized elevation.
const GLYPHS: &[u8] = b" .:-=+*#%@";

/// Map a normalized height in `[0, 1]` to its preview glyph.
pub fn glyph_for(t: f32) -> char {
    let last = GLYPHS.len() - 1;
    let idx = (t.clamp(0.0, 1.0) * last as f32).round() as usize;
    GLYPHS[idx.min(last)] as char
}

/// Render the vertex grid of `mesh` as one text block, `depth + 1` lines of
/// `width + 1` glyphs each.
///
/// `width` and `depth` must be the cell dimensions the mesh was built with
/// (after clamping). Heights are normalized with the same zero-anchored
/// range policy the color pass uses, so the preview matches the ramp.
pub fn render(mesh: &MeshData, width: u32, depth: u32) -> String {
    let columns = width.max(1) as usize + 1;
    let rows = depth.max(1) as usize + 1;
    debug_assert_eq!(columns * rows, mesh.positions.len());

    let mut range = ElevationRange::default();
    for p in &mesh.positions {
        range.observe(p[1]);
    }

    let mut out = String::with_capacity(rows * (columns + 1));
    for z in 0..rows {
        for x in 0..columns {
            let y = mesh.positions[z * columns + x][1];
            out.push(glyph_for(range.normalize(y)));
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
