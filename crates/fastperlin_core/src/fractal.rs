//! # Fractal Compositor
//!
//! Stacks octaves at rising frequency and falling amplitude, then
//! normalizes by the accumulated amplitude so the result stays inside
//! [-strength, strength] no matter how many layers are stacked.

use crate::config::NoiseConfig;
use crate::error::NoiseResult;
use crate::noise::{NoiseSeed, PerlinNoise};

/// Layered fractal noise for one validated config.
///
/// Construction validates the config and builds one octave evaluator per
/// layer; sampling is pure `&self` arithmetic after that, so a single
/// instance is shared read-only by every grid worker.
pub struct FractalNoise {
    layers: Vec<PerlinNoise>,
    persistence: f32,
    roughness: f32,
    base_roughness: f32,
    strength: f32,
}

impl FractalNoise {
    /// Builds the compositor for a config.
    ///
    /// # Errors
    ///
    /// Returns the validation error for the first out-of-domain field;
    /// nothing is computed in that case.
    pub fn new(config: &NoiseConfig) -> NoiseResult<Self> {
        config.validate()?;

        let seed = NoiseSeed::new(config.seed);
        let layers = (0..config.num_layers)
            .map(|layer| PerlinNoise::new(seed, layer))
            .collect();

        Ok(Self {
            layers,
            persistence: config.persistence,
            roughness: config.roughness,
            base_roughness: config.base_roughness,
            strength: config.strength,
        })
    }

    /// Number of octaves stacked by this compositor.
    #[inline]
    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Samples the composed field at a continuous 2D coordinate.
    ///
    /// # Returns
    ///
    /// A value in `[-|strength|, |strength|]`: the normalized octave sum
    /// lands in [-1, 1] and `strength` rescales it linearly.
    #[must_use]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let mut frequency = self.base_roughness;
        let mut amplitude = 1.0_f32;
        let mut total = 0.0_f32;
        let mut normalization = 0.0_f32;

        for layer in &self.layers {
            total += amplitude * layer.sample(x * frequency, y * frequency);
            normalization += amplitude;
            amplitude *= self.persistence;
            frequency *= self.roughness;
        }

        // normalization >= 1 because the first amplitude is 1
        (total / normalization) * self.strength
    }
}
