//! Per-vertex normal recomputation.
//!
//! The mesh builder emits positions, indices, and colors only; shading
//! normals are derived from the final triangle topology afterwards. Engine
//! hosts usually run their own recalculation; this is the equivalent for
//! engine-less consumers.

/// Recompute smooth per-vertex normals from triangle topology.
///
/// Face normals are accumulated area-weighted (unnormalized cross products)
/// onto each referenced vertex, then normalized. Vertices with no triangle
/// contribution, or with contributions that cancel out, fall back to
/// straight up.
pub fn recompute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![[0.0f32; 3]; positions.len()];

    for tri in indices.chunks_exact(3) {
        let a = positions[tri[0] as usize];
        let b = positions[tri[1] as usize];
        let c = positions[tri[2] as usize];

        let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let face = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];

        for &i in tri {
            let n = &mut normals[i as usize];
            n[0] += face[0];
            n[1] += face[1];
            n[2] += face[2];
        }
    }

    for n in &mut normals {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if len < 1e-8 {
            *n = [0.0, 1.0, 0.0];
        } else {
            n[0] /= len;
            n[1] /= len;
            n[2] /= len;
        }
    }

    normals
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
