//! Generation constants and the terrain configuration struct.
//!
//! `TerrainConfig` is the in-process interface boundary: a host application
//! (or its UI layer) reads and writes these fields through plain getters and
//! setters, then hands the config to [`crate::noise_field::NoiseField`] and
//! [`crate::mesh::build_terrain_mesh`]. Out-of-range values are clamped
//! rather than rejected.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hard cap on the number of noise octaves summed per sample.
pub const MAX_OCTAVES: usize = 6;

/// Number of active octaves in the default configuration.
pub const DEFAULT_OCTAVES: usize = 3;

/// Spatial frequency of the first octave.
pub const BASE_FREQUENCY: f32 = 0.3;

/// Vertical contribution of the first octave.
pub const BASE_AMPLITUDE: f32 = 2.0;

/// Frequency multiplier between successive octaves.
pub const LACUNARITY: f32 = 2.0;

/// Amplitude multiplier between successive octaves.
pub const PERSISTENCE: f32 = 0.5;

/// Upper bound of the uniform range session offsets are drawn from.
pub const OFFSET_RANGE: f32 = 99_999.0;

/// Default grid size, in cells per side.
pub const DEFAULT_GRID_WIDTH: u32 = 20;
pub const DEFAULT_GRID_DEPTH: u32 = 20;

/// Default seed for the noise permutation table.
pub const DEFAULT_NOISE_SEED: i32 = 1337;

// ---------------------------------------------------------------------------
// TerrainConfig
// ---------------------------------------------------------------------------

/// Full parameter set for one generation pass.
///
/// Fields are private so the clamping invariants survive mutation; the
/// setters correct bad values instead of failing. Values arriving through
/// serde bypass the setters, so consumers re-clamp where it matters
/// (`NoiseField::from_config`, `build_terrain_mesh`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    width: u32,
    depth: u32,
    octave_count: usize,
    frequencies: [f32; MAX_OCTAVES],
    amplitudes: [f32; MAX_OCTAVES],
    offset_x: f32,
    offset_y: f32,
    offset_scale: f32,
    noise_seed: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        let mut frequencies = [0.0; MAX_OCTAVES];
        let mut amplitudes = [0.0; MAX_OCTAVES];
        for i in 0..MAX_OCTAVES {
            frequencies[i] = BASE_FREQUENCY * LACUNARITY.powi(i as i32);
            amplitudes[i] = BASE_AMPLITUDE * PERSISTENCE.powi(i as i32);
        }
        Self {
            width: DEFAULT_GRID_WIDTH,
            depth: DEFAULT_GRID_DEPTH,
            octave_count: DEFAULT_OCTAVES,
            frequencies,
            amplitudes,
            offset_x: 0.0,
            offset_y: 0.0,
            offset_scale: 1.0,
            noise_seed: DEFAULT_NOISE_SEED,
        }
    }
}

impl TerrainConfig {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn octave_count(&self) -> usize {
        self.octave_count
    }

    pub fn frequencies(&self) -> &[f32; MAX_OCTAVES] {
        &self.frequencies
    }

    pub fn amplitudes(&self) -> &[f32; MAX_OCTAVES] {
        &self.amplitudes
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn offset_scale(&self) -> f32 {
        self.offset_scale
    }

    pub fn noise_seed(&self) -> i32 {
        self.noise_seed
    }

    /// Set the grid width in cells. Zero is corrected to 1.
    pub fn set_width(&mut self, width: u32) {
        if width == 0 {
            debug!("grid width 0 clamped to 1");
        }
        self.width = width.max(1);
    }

    /// Set the grid depth in cells. Zero is corrected to 1.
    pub fn set_depth(&mut self, depth: u32) {
        if depth == 0 {
            debug!("grid depth 0 clamped to 1");
        }
        self.depth = depth.max(1);
    }

    /// Set the number of active octaves, clamped to `[1, MAX_OCTAVES]`.
    pub fn set_octave_count(&mut self, count: usize) {
        let clamped = count.clamp(1, MAX_OCTAVES);
        if clamped != count {
            debug!("octave count {count} clamped to {clamped}");
        }
        self.octave_count = clamped;
    }

    /// Set the frequency of one octave. Indices past `MAX_OCTAVES` are ignored.
    pub fn set_frequency(&mut self, octave: usize, frequency: f32) {
        match self.frequencies.get_mut(octave) {
            Some(slot) => *slot = frequency,
            None => debug!("frequency index {octave} out of range, ignored"),
        }
    }

    /// Set the amplitude of one octave. Indices past `MAX_OCTAVES` are ignored.
    pub fn set_amplitude(&mut self, octave: usize, amplitude: f32) {
        match self.amplitudes.get_mut(octave) {
            Some(slot) => *slot = amplitude,
            None => debug!("amplitude index {octave} out of range, ignored"),
        }
    }

    /// Set both noise offsets explicitly (deterministic / testable mode).
    pub fn set_offsets(&mut self, offset_x: f32, offset_y: f32) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Set the scale factor applied to the offsets before noise evaluation.
    pub fn set_offset_scale(&mut self, scale: f32) {
        self.offset_scale = scale;
    }

    /// Set the seed of the noise permutation table.
    pub fn set_noise_seed(&mut self, seed: i32) {
        self.noise_seed = seed;
    }

    /// Draw fresh offsets from `[0, OFFSET_RANGE]`.
    ///
    /// This is the once-per-session initialization step that decorrelates
    /// successive runs. Callers own the RNG, so tests and replay tooling can
    /// pass a fixed-seed generator and get identical offsets every time.
    pub fn randomize_offsets(&mut self, rng: &mut impl Rng) {
        self.offset_x = rng.gen_range(0.0..=OFFSET_RANGE);
        self.offset_y = rng.gen_range(0.0..=OFFSET_RANGE);
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
