//! # Parallel Grid Engine
//!
//! Fills a caller-owned row-major buffer with fractal noise, one disjoint
//! block of rows per worker.
//!
//! ## Thread Safety
//!
//! The buffer is split with `chunks_mut`, so each worker holds an exclusive
//! slice and no cell is ever touched twice; the compositor is shared
//! read-only. `std::thread::scope` joins every worker before `fill`
//! returns, which is the only synchronization the caller needs.

use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use crate::error::{NoiseError, NoiseResult};
use crate::fractal::FractalNoise;

/// Parallel grid fill engine.
///
/// Worker count defaults to the number of logical processors and can be
/// pinned for testing; the output never depends on it.
pub struct GridFiller {
    workers: NonZeroUsize,
}

impl GridFiller {
    /// Creates an engine sized to the available parallelism.
    #[must_use]
    pub fn new() -> Self {
        let workers = thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self { workers }
    }

    /// Creates an engine with a pinned worker count.
    #[must_use]
    pub const fn with_workers(workers: NonZeroUsize) -> Self {
        Self { workers }
    }

    /// Fills `buffer[row * width + col]` with the composed noise value for
    /// every cell of a `width` x `height` grid.
    ///
    /// Cells are sampled at unit-square coordinates `(col / width,
    /// row / height)`, so `base_roughness` reads as a frequency over the
    /// whole grid regardless of resolution.
    ///
    /// The buffer is written in place; nothing is allocated for the output
    /// and no reference to it survives the call. An empty grid is a no-op,
    /// not an error.
    ///
    /// # Errors
    ///
    /// [`NoiseError::BufferSizeMismatch`] if `buffer.len()` differs from
    /// `width * height`. Rejection happens before any worker spawns and
    /// before any cell is written.
    pub fn fill(
        &self,
        noise: &FractalNoise,
        width: u32,
        height: u32,
        buffer: &mut [f32],
    ) -> NoiseResult<()> {
        let expected = (width as usize) * (height as usize);
        if buffer.len() != expected {
            return Err(NoiseError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        if width == 0 || height == 0 {
            return Ok(());
        }

        let started = Instant::now();
        let cols = width as usize;
        let rows = height as usize;

        // Never spawn more workers than there are rows to hand out.
        let workers = self.workers.get().min(rows);
        let rows_per_worker = rows.div_ceil(workers);
        let inv_width = 1.0 / width as f32;
        let inv_height = 1.0 / height as f32;

        thread::scope(|scope| {
            for (chunk_index, chunk) in buffer.chunks_mut(rows_per_worker * cols).enumerate() {
                let first_row = chunk_index * rows_per_worker;
                scope.spawn(move || {
                    for (row_offset, row) in chunk.chunks_exact_mut(cols).enumerate() {
                        let y = (first_row + row_offset) as f32 * inv_height;
                        for (col, cell) in row.iter_mut().enumerate() {
                            let x = col as f32 * inv_width;
                            *cell = noise.sample(x, y);
                        }
                    }
                });
            }
        });

        tracing::debug!(
            "filled {}x{} grid with {} workers in {:?}",
            width,
            height,
            workers,
            started.elapsed()
        );
        Ok(())
    }
}

impl Default for GridFiller {
    fn default() -> Self {
        Self::new()
    }
}
