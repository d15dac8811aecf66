//! Deterministic layered-noise elevation field.
//!
//! Combines up to [`MAX_OCTAVES`] octaves of Perlin noise, each with its own
//! frequency and amplitude, over a seeded permutation table. The session
//! offsets shift every octave's sample position so successive runs with
//! fresh offsets produce unrelated terrain from the same parameter set.

use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::config::{TerrainConfig, MAX_OCTAVES};

/// A deterministic 2D scalar field over continuous `(x, z)` coordinates.
///
/// Evaluation is pure (`&self`, no interior mutability), so one field can
/// be sampled concurrently for disjoint coordinates. Same configuration
/// always produces bit-identical output, across calls and across
/// independently constructed instances.
pub struct NoiseField {
    sampler: FastNoiseLite,
    octave_count: usize,
    frequencies: [f32; MAX_OCTAVES],
    amplitudes: [f32; MAX_OCTAVES],
    offset_x: f32,
    offset_y: f32,
    offset_scale: f32,
}

impl NoiseField {
    /// Build a field from a configuration snapshot.
    ///
    /// `octave_count` is re-clamped here because serde-loaded configs bypass
    /// the clamping setters.
    pub fn from_config(config: &TerrainConfig) -> Self {
        let mut sampler = FastNoiseLite::with_seed(config.noise_seed());
        sampler.set_noise_type(Some(NoiseType::Perlin));
        // The octave tables own all frequency arithmetic; the sampler itself
        // must not rescale coordinates.
        sampler.set_frequency(Some(1.0));

        Self {
            sampler,
            octave_count: config.octave_count().clamp(1, MAX_OCTAVES),
            frequencies: *config.frequencies(),
            amplitudes: *config.amplitudes(),
            offset_x: config.offset_x(),
            offset_y: config.offset_y(),
            offset_scale: config.offset_scale(),
        }
    }

    /// Perlin noise remapped from [-1, 1] to the nominal [0, 1] range.
    fn perlin01(&self, x: f32, z: f32) -> f32 {
        (self.sampler.get_noise_2d(x, z) + 1.0) * 0.5
    }

    /// Sample the field at `(x, z)`.
    ///
    /// Sums the first `octave_count` octaves:
    /// `amplitude[i] * perlin01(frequency[i] * x + offset_x * scale,
    /// frequency[i] * z + offset_y * scale)`.
    pub fn evaluate(&self, x: f32, z: f32) -> f32 {
        let ox = self.offset_x * self.offset_scale;
        let oz = self.offset_y * self.offset_scale;

        let mut height = 0.0;
        for i in 0..self.octave_count {
            let frequency = self.frequencies[i];
            height += self.amplitudes[i] * self.perlin01(frequency * x + ox, frequency * z + oz);
        }
        height
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_NOISE_SEED;

    /// Config with a single octave (frequency 1, amplitude 1) and no offset:
    /// samples land directly on the raw noise lattice.
    fn lattice_config() -> TerrainConfig {
        let mut config = TerrainConfig::default();
        config.set_octave_count(1);
        config.set_frequency(0, 1.0);
        config.set_amplitude(0, 1.0);
        config.set_offsets(0.0, 0.0);
        config.set_offset_scale(0.0);
        config
    }

    #[test]
    fn test_deterministic_across_calls_and_instances() {
        let config = TerrainConfig::default();
        let a = NoiseField::from_config(&config);
        let b = NoiseField::from_config(&config);
        for i in 0..20 {
            let x = i as f32 * 0.37;
            let z = i as f32 * 0.73 + 0.1;
            let first = a.evaluate(x, z);
            assert_eq!(first, a.evaluate(x, z));
            assert_eq!(first, b.evaluate(x, z));
        }
    }

    #[test]
    fn test_integer_lattice_anchor() {
        // Perlin gradient noise is exactly zero on the integer lattice, for
        // any seed: the gradient is dotted with a zero fractional offset.
        // Remapped, that pins evaluate() to exactly 0.5 at grid coordinates.
        let field = NoiseField::from_config(&lattice_config());
        for (x, z) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (3.0, 7.0), (-2.0, 5.0)] {
            assert_eq!(field.evaluate(x, z), 0.5, "at ({x}, {z})");
        }
    }

    #[test]
    fn test_seed_changes_field() {
        let mut config = TerrainConfig::default();
        config.set_noise_seed(DEFAULT_NOISE_SEED + 1);
        let a = NoiseField::from_config(&TerrainConfig::default());
        let b = NoiseField::from_config(&config);
        let differs = (0..10).any(|i| {
            let x = 0.4 + i as f32 * 1.3;
            a.evaluate(x, x * 0.5) != b.evaluate(x, x * 0.5)
        });
        assert!(differs, "reseeding must change off-lattice samples");
    }

    #[test]
    fn test_offsets_decorrelate_samples() {
        let mut offset_config = lattice_config();
        offset_config.set_offsets(1234.5, 987.25);
        offset_config.set_offset_scale(1.0);
        let base = NoiseField::from_config(&lattice_config());
        let shifted = NoiseField::from_config(&offset_config);
        let differs = (0..10).any(|i| {
            let x = 0.3 + i as f32 * 0.9;
            base.evaluate(x, x + 0.2) != shifted.evaluate(x, x + 0.2)
        });
        assert!(differs, "offsets must shift the sample positions");
    }

    #[test]
    fn test_zero_amplitudes_give_flat_field() {
        let mut config = TerrainConfig::default();
        for i in 0..MAX_OCTAVES {
            config.set_amplitude(i, 0.0);
        }
        let field = NoiseField::from_config(&config);
        for i in 0..10 {
            assert_eq!(field.evaluate(i as f32 * 0.61, i as f32), 0.0);
        }
    }

    #[test]
    fn test_only_active_octaves_contribute() {
        let mut junk = TerrainConfig::default();
        junk.set_octave_count(2);
        let mut zeroed = junk.clone();
        for i in 2..MAX_OCTAVES {
            junk.set_frequency(i, 777.7);
            junk.set_amplitude(i, 55.5);
            zeroed.set_frequency(i, 0.0);
            zeroed.set_amplitude(i, 0.0);
        }
        let a = NoiseField::from_config(&junk);
        let b = NoiseField::from_config(&zeroed);
        for i in 0..10 {
            let x = i as f32 * 0.47;
            assert_eq!(a.evaluate(x, 1.0 - x), b.evaluate(x, 1.0 - x));
        }
    }

    #[test]
    fn test_serde_loaded_octave_count_is_reclamped() {
        // Deserialization bypasses the clamping setters; from_config must
        // restore the invariant rather than index past the tables.
        let json = r#"{
            "width": 4, "depth": 4, "octave_count": 11,
            "frequencies": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            "amplitudes": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            "offset_x": 0.0, "offset_y": 0.0, "offset_scale": 0.0,
            "noise_seed": 1337
        }"#;
        let config: TerrainConfig = serde_json::from_str(json).expect("deserialize");
        let field = NoiseField::from_config(&config);

        let mut six = TerrainConfig::default();
        six.set_octave_count(MAX_OCTAVES);
        for i in 0..MAX_OCTAVES {
            six.set_frequency(i, 1.0);
            six.set_amplitude(i, 1.0);
        }
        six.set_offsets(0.0, 0.0);
        six.set_offset_scale(0.0);
        let reference = NoiseField::from_config(&six);

        for i in 0..10 {
            let x = 0.21 + i as f32 * 0.77;
            assert_eq!(field.evaluate(x, 2.0 * x), reference.evaluate(x, 2.0 * x));
        }
    }
}
