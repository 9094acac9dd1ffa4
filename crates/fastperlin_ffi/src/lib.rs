//! # fastperlin C ABI
//!
//! The boundary a dynamically-loading host (ctypes, dlopen, ...) calls.
//!
//! ## Safety Note
//!
//! This crate requires unsafe code to accept the caller's raw buffer
//! pointer. The pointer is viewed as a slice for the duration of one call
//! and never retained; the host owns the allocation for its whole lifetime.
//!
//! ## Host Contract
//!
//! The host allocates exactly `width * height` 32-bit float cells, passes
//! the pointer together with the grid dimensions and the six config fields,
//! and must not touch or free the buffer while the call runs. On return
//! with status 0 the buffer holds the field in row-major order
//! (`row * width + col`); the host reshapes it however it likes.

#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use fastperlin_core::{FractalNoise, GridFiller, NoiseConfig};

/// Generation succeeded and the buffer is fully written.
pub const STATUS_OK: i32 = 0;
/// The buffer pointer was null for a non-empty grid; nothing was written.
pub const STATUS_NULL_BUFFER: i32 = 1;
/// The configuration failed validation; nothing was written.
pub const STATUS_INVALID_CONFIG: i32 = 2;

/// Fills a caller-owned buffer with a `width` x `height` fractal noise
/// field, row-major, every cell inside `[-|strength|, |strength|]`.
///
/// Identical arguments reproduce an identical buffer, bit-for-bit, across
/// calls, processes, and platforms. A zero-sized grid is a successful
/// no-op and the pointer is not inspected.
///
/// Returns [`STATUS_OK`], [`STATUS_NULL_BUFFER`], or
/// [`STATUS_INVALID_CONFIG`]; on a non-zero status the buffer is untouched.
///
/// # Safety
///
/// `buffer` must point to at least `width * height` writable `f32` cells,
/// and the allocation must not be read, written, or freed by the host
/// concurrently with this call.
// The parameter list is fixed by the host's ctypes signature.
#[allow(clippy::too_many_arguments)]
#[no_mangle]
pub unsafe extern "C" fn generate_perlin_noise(
    buffer: *mut f32,
    width: u32,
    height: u32,
    persistence: f32,
    num_layers: u32,
    roughness: f32,
    base_roughness: f32,
    strength: f32,
    seed: u32,
) -> i32 {
    let config = NoiseConfig {
        persistence,
        num_layers,
        roughness,
        base_roughness,
        strength,
        seed,
    };

    let noise = match FractalNoise::new(&config) {
        Ok(noise) => noise,
        Err(err) => {
            tracing::warn!("rejected noise config: {err}");
            return STATUS_INVALID_CONFIG;
        }
    };

    let cells = (width as usize) * (height as usize);
    if cells == 0 {
        return STATUS_OK;
    }
    if buffer.is_null() {
        tracing::warn!("null output buffer for {width}x{height} grid");
        return STATUS_NULL_BUFFER;
    }

    // Transient view of the host's allocation; dropped before return.
    let out = unsafe { std::slice::from_raw_parts_mut(buffer, cells) };
    match GridFiller::new().fill(&noise, width, height, out) {
        Ok(()) => STATUS_OK,
        Err(err) => {
            // Unreachable with a slice sized above, kept for the contract.
            tracing::warn!("grid fill rejected: {err}");
            STATUS_INVALID_CONFIG
        }
    }
}
