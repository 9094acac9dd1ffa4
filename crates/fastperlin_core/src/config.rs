//! # Generation Config
//!
//! The six-parameter contract shared with the C boundary. Every field is a
//! fixed-width 32-bit value so the struct crosses the ABI without padding.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};

/// Parameters for one noise generation call.
///
/// Constructed once per call and shared read-only by every worker. Hosts may
/// load it from a config file (serde) or assemble it from raw ABI arguments;
/// either way [`NoiseConfig::validate`] is the single fail-fast gate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct NoiseConfig {
    /// Per-octave amplitude decay factor, in (0, 1]. A value of 1 weighs all
    /// octaves equally.
    pub persistence: f32,
    /// Number of octaves summed. Must be at least 1.
    pub num_layers: u32,
    /// Per-octave frequency growth multiplier. Values below 1 are legal and
    /// simply coarsen the higher layers.
    pub roughness: f32,
    /// Frequency of the first octave, over the unit square.
    pub base_roughness: f32,
    /// Final linear output scale. Any finite value, including 0 or negative.
    pub strength: f32,
    /// Seed for the deterministic gradient field.
    pub seed: u32,
}

impl NoiseConfig {
    /// Checks every field against its documented domain.
    ///
    /// NaN fails the range comparisons like any other out-of-domain value,
    /// so a config full of NaN is rejected, never computed with.
    ///
    /// # Errors
    ///
    /// Returns the [`NoiseError`] variant for the first invalid field.
    pub fn validate(&self) -> NoiseResult<()> {
        if !self.persistence.is_finite() || self.persistence <= 0.0 || self.persistence > 1.0 {
            return Err(NoiseError::InvalidPersistence(self.persistence));
        }
        if self.num_layers == 0 {
            return Err(NoiseError::InvalidLayerCount);
        }
        if !self.roughness.is_finite() || self.roughness <= 0.0 {
            return Err(NoiseError::InvalidRoughness(self.roughness));
        }
        if !self.base_roughness.is_finite() || self.base_roughness <= 0.0 {
            return Err(NoiseError::InvalidBaseRoughness(self.base_roughness));
        }
        if !self.strength.is_finite() {
            return Err(NoiseError::InvalidStrength(self.strength));
        }
        Ok(())
    }
}

impl Default for NoiseConfig {
    /// Reference parameters for a typical 256x256 height map.
    fn default() -> Self {
        Self {
            persistence: 0.65,
            num_layers: 4,
            roughness: 2.85,
            base_roughness: 0.9,
            strength: 0.6,
            seed: 0,
        }
    }
}
