//! Heightmap terrain mesh generation from layered Perlin noise.
//!
//! The pipeline is a pure function of its configuration: a
//! [`config::TerrainConfig`] describes the grid and the octave tables, a
//! [`noise_field::NoiseField`] turns it into a deterministic elevation
//! field, and [`mesh::build_terrain_mesh`] samples the field into vertex /
//! index / color buffers, shading by normalized elevation through a
//! [`color_ramp::ColorRamp`]. The host application owns invocation cadence
//! and rendering; this crate owns generation only.

pub mod ascii_map;
pub mod color_ramp;
pub mod config;
pub mod mesh;
pub mod noise_field;
pub mod normals;
