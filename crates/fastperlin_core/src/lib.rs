//! # fastperlin Core
//!
//! Deterministic 2D fractal noise, filled into a caller-owned buffer in
//! parallel.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same config and seed always produce the same field,
//!    bit-for-bit, regardless of worker count or platform
//! 2. **Caller owns the buffer**: the engine writes in place and never
//!    allocates, resizes, or retains the output
//! 3. **Fail fast**: invalid configs are rejected before any worker spawns
//! 4. **Fast**: one permutation lookup chain per lattice corner, no locks
//!
//! ## Core Components
//!
//! - `PerlinNoise`: one octave of seeded gradient-lattice noise
//! - `FractalNoise`: stacks octaves with amplitude normalization
//! - `GridFiller`: partitions rows across scoped worker threads
//! - `NoiseConfig`: the six-parameter generation contract
//!
//! ## Example
//!
//! ```rust,ignore
//! use fastperlin_core::{FractalNoise, GridFiller, NoiseConfig};
//!
//! let noise = FractalNoise::new(&NoiseConfig::default())?;
//! let mut buffer = vec![0.0f32; 256 * 256];
//! GridFiller::new().fill(&noise, 256, 256, &mut buffer)?;
//! // buffer[row * 256 + col] now holds the height at (col, row)
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod fractal;
pub mod grid;
pub mod noise;

pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use fractal::FractalNoise;
pub use grid::GridFiller;
pub use noise::{NoiseSeed, PerlinNoise};
