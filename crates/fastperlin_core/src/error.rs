//! # Noise Error Types
//!
//! All errors that can be reported before generation starts. Once workers
//! spawn, the computation is pure arithmetic and cannot fail.

use thiserror::Error;

/// Errors surfaced synchronously, before any buffer cell is written.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Persistence must decay (or hold) amplitude, so it lives in (0, 1].
    #[error("persistence must be in (0, 1], got {0}")]
    InvalidPersistence(f32),

    /// At least one octave is required.
    #[error("at least one noise layer is required")]
    InvalidLayerCount,

    /// Per-octave frequency growth must be positive and finite.
    #[error("roughness must be positive and finite, got {0}")]
    InvalidRoughness(f32),

    /// First-octave frequency must be positive and finite.
    #[error("base roughness must be positive and finite, got {0}")]
    InvalidBaseRoughness(f32),

    /// The final output scale must be a real number.
    #[error("strength must be finite, got {0}")]
    InvalidStrength(f32),

    /// The caller's buffer does not match the requested grid.
    #[error("output buffer holds {actual} cells, grid needs {expected}")]
    BufferSizeMismatch {
        /// Cells required by `width * height`.
        expected: usize,
        /// Cells actually provided.
        actual: usize,
    },
}

/// Result type for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
