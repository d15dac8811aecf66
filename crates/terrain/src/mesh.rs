//! Terrain mesh synthesis.
//!
//! [`build_terrain_mesh`] turns a [`NoiseField`] into the three attribute
//! buffers a renderer consumes: vertex positions over a regular grid,
//! a triangle index list, and per-vertex colors resolved from normalized
//! elevation. Every call is a full from-scratch rebuild, with no caching or
//! incremental updates, so a host may regenerate as often as it likes and
//! simply swap the previous snapshot out.

use tracing::debug;

use crate::color_ramp::ColorRamp;
use crate::noise_field::NoiseField;

/// One generated mesh snapshot.
///
/// `positions[i]` and `colors[i]` describe the same vertex; `indices` holds
/// `width * depth * 6` entries, two consistently wound triangles per grid
/// cell. Normals are not included; recompute them from the final topology
/// (engine-side, or via [`crate::normals::recompute_normals`]).
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub colors: Vec<[f32; 4]>,
}

// ---------------------------------------------------------------------------
// Elevation range
// ---------------------------------------------------------------------------

/// Running (min, max) elevation over one generation pass.
///
/// Each pass starts from `(0.0, 0.0)`, not from the first sample. Terrain
/// that never crosses zero therefore keeps the zero bound in its range:
/// fully positive elevations normalize into the upper part of the ramp
/// (sea-level anchoring), fully negative ones into the lower part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationRange {
    pub min: f32,
    pub max: f32,
}

impl Default for ElevationRange {
    fn default() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

impl ElevationRange {
    /// Widen the range to include `y`.
    pub fn observe(&mut self, y: f32) {
        if y > self.max {
            self.max = y;
        }
        if y < self.min {
            self.min = y;
        }
    }

    /// Map an elevation into `[0, 1]` against this range.
    ///
    /// A zero-span range (flat field) resolves to 0.0 instead of dividing
    /// by zero.
    pub fn normalize(&self, y: f32) -> f32 {
        if self.max == self.min {
            0.0
        } else {
            ((y - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        }
    }
}

// ---------------------------------------------------------------------------
// Mesh builder
// ---------------------------------------------------------------------------

/// Generate a terrain mesh over a `width x depth` cell grid.
///
/// The vertex grid has `(width + 1) * (depth + 1)` vertices laid out
/// row-major (z outer, x inner) at integer grid coordinates, with elevation
/// sampled from `field`. Degenerate dimensions clamp to one cell.
///
/// Three passes: sample elevations while widening the running
/// [`ElevationRange`], emit two triangles per cell, then resolve each
/// vertex color through `ramp` at its normalized height.
pub fn build_terrain_mesh(
    width: u32,
    depth: u32,
    field: &NoiseField,
    ramp: &ColorRamp,
) -> MeshData {
    if width == 0 || depth == 0 {
        debug!("degenerate grid {width}x{depth} clamped to the 1-cell minimum");
    }
    let width = width.max(1) as usize;
    let depth = depth.max(1) as usize;

    let vertex_count = (width + 1) * (depth + 1);
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut range = ElevationRange::default();

    // Elevation pass.
    for z in 0..=depth {
        for x in 0..=width {
            let y = field.evaluate(x as f32, z as f32);
            positions.push([x as f32, y, z as f32]);
            range.observe(y);
        }
    }

    // Topology pass. Winding keeps recalculated normals facing up on level
    // ground; both triangles share the cell's anti-diagonal.
    let stride = (width + 1) as u32;
    let mut indices: Vec<u32> = Vec::with_capacity(width * depth * 6);
    for z in 0..depth {
        for x in 0..width {
            let v = z as u32 * stride + x as u32;
            indices.extend_from_slice(&[v, v + stride, v + 1]);
            indices.extend_from_slice(&[v + 1, v + stride, v + stride + 1]);
        }
    }

    // Color pass.
    let colors = positions
        .iter()
        .map(|p| ramp.sample(range.normalize(p[1])))
        .collect();

    MeshData {
        positions,
        indices,
        colors,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
