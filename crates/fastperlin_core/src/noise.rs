//! # Perlin Noise Octave Evaluator
//!
//! One layer of seeded gradient-lattice noise.
//!
//! ## Determinism Guarantee
//!
//! Gradients are anchored at integer lattice nodes through a permutation
//! table computed once from `(seed, layer)`. Sampling reads the table and
//! nothing else, so any number of workers can evaluate the same octave
//! concurrently and every platform reproduces it bit-for-bit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for the deterministic gradient field.
///
/// All octaves derive from this value; each layer gets an independent
/// permutation stream via [`NoiseSeed::layer_seed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoiseSeed(u32);

impl NoiseSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Derives the RNG seed for one octave.
    ///
    /// FNV-style mixing keeps the streams independent: adjacent layers of
    /// the same seed share no visible structure.
    #[inline]
    #[must_use]
    pub const fn layer_seed(self, layer: u32) -> u64 {
        let mut hash = (self.0 as u64) ^ 0x9E37_79B9_7F4A_7C15;
        hash ^= (layer as u64).wrapping_mul(0x517c_c1b7_2722_0a95);
        hash = hash.wrapping_mul(0x2545_F491_4F6C_DD1D);
        hash ^= hash >> 32;
        hash
    }
}

/// The eight unit gradients anchored at lattice nodes.
const GRAD2: [[f32; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.707_106_77, 0.707_106_77],
    [-0.707_106_77, 0.707_106_77],
    [0.707_106_77, -0.707_106_77],
    [-0.707_106_77, -0.707_106_77],
];

/// Pre-computed permutation table.
///
/// 256 entries shuffled by a seeded Fisher-Yates pass, doubled so the
/// two-level lookup never wraps an index.
struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut perm = [0u8; 512];

        for i in 0..256 {
            perm[i] = i as u8;
        }

        for i in (1..256).rev() {
            let j = rng.gen_range(0..=i);
            perm.swap(i, j);
        }

        for i in 0..256 {
            perm[256 + i] = perm[i];
        }

        Self { perm }
    }

    /// Hashes a lattice node to a gradient index. The field is periodic
    /// every 256 nodes, far beyond any unit-square sampling window.
    #[inline]
    fn hash(&self, xi: i32, yi: i32) -> u8 {
        let xi = (xi & 255) as usize;
        let yi = (yi & 255) as usize;
        self.perm[self.perm[xi] as usize + yi]
    }
}

/// One octave of 2D gradient-lattice noise.
///
/// Produces smooth, continuous values in [-1, 1] with no seams at lattice
/// boundaries (quintic easing is C2-continuous).
///
/// # Performance
///
/// - O(1) per sample: four hashes, four dot products, three lerps
/// - No allocations after construction
/// - `&self` sampling, safe to share across workers
pub struct PerlinNoise {
    table: PermutationTable,
}

impl PerlinNoise {
    /// Creates the octave evaluator for one `(seed, layer)` pair.
    #[must_use]
    pub fn new(seed: NoiseSeed, layer: u32) -> Self {
        Self {
            table: PermutationTable::new(seed.layer_seed(layer)),
        }
    }

    /// Samples the octave at a continuous 2D coordinate.
    ///
    /// # Returns
    ///
    /// A value in [-1, 1]. Always succeeds for finite input; non-finite
    /// coordinates are the caller's contract violation.
    #[must_use]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        // Lattice cell and position inside it
        let xi = fast_floor(x);
        let yi = fast_floor(y);
        let xf = x - xi as f32;
        let yf = y - yi as f32;

        // Gradient indices at the four surrounding nodes
        let aa = self.table.hash(xi, yi);
        let ba = self.table.hash(xi + 1, yi);
        let ab = self.table.hash(xi, yi + 1);
        let bb = self.table.hash(xi + 1, yi + 1);

        // Gradient contributions toward the sample point
        let g00 = grad(aa, xf, yf);
        let g10 = grad(ba, xf - 1.0, yf);
        let g01 = grad(ab, xf, yf - 1.0);
        let g11 = grad(bb, xf - 1.0, yf - 1.0);

        let u = fade(xf);
        let v = fade(yf);

        let nx0 = lerp(g00, g10, u);
        let nx1 = lerp(g01, g11, u);
        let value = lerp(nx0, nx1, v);

        // Unit gradients bound lattice noise by +/- sqrt(2)/2; rescale to
        // [-1, 1] and clamp the last bit of rounding at the edges.
        (value * std::f32::consts::SQRT_2).clamp(-1.0, 1.0)
    }
}

/// Quintic easing curve 6t^5 - 15t^4 + 10t^3.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Dot product of a hashed gradient with the offset to the sample point.
#[inline]
fn grad(hash: u8, x: f32, y: f32) -> f32 {
    let g = GRAD2[(hash & 7) as usize];
    g[0] * x + g[1] * y
}

/// Fast floor function.
///
/// Faster than `f32::floor()` for our use case.
#[inline]
fn fast_floor(x: f32) -> i32 {
    let xi = x as i32;
    if x < xi as f32 {
        xi - 1
    } else {
        xi
    }
}
