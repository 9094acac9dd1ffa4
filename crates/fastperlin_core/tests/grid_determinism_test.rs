//! # Grid Determinism Tests
//!
//! End-to-end properties of the parallel fill: bit-identical output across
//! runs and worker counts, seed sensitivity, bounded range, smoothness, and
//! the 256x256 reference scenario.

use std::num::NonZeroUsize;

use fastperlin_core::{FractalNoise, GridFiller, NoiseConfig, NoiseError};

/// The parameter set the reference host passes across the boundary.
fn reference_config() -> NoiseConfig {
    NoiseConfig {
        persistence: 0.65,
        num_layers: 4,
        roughness: 2.85,
        base_roughness: 0.9,
        strength: 0.6,
        seed: 0,
    }
}

fn generate(config: &NoiseConfig, width: u32, height: u32, workers: usize) -> Vec<f32> {
    let noise = FractalNoise::new(config).expect("reference config is valid");
    let mut buffer = vec![0.0f32; (width * height) as usize];
    GridFiller::with_workers(NonZeroUsize::new(workers).unwrap())
        .fill(&noise, width, height, &mut buffer)
        .expect("buffer is sized to the grid");
    buffer
}

fn bits(buffer: &[f32]) -> Vec<u32> {
    buffer.iter().map(|v| v.to_bits()).collect()
}

/// Test: 1 worker vs N workers is the core concurrency-correctness scenario.
#[test]
fn test_worker_count_invariance() {
    let config = reference_config();
    let serial = generate(&config, 64, 64, 1);

    for workers in [2, 3, 4, 8, 64, 1024] {
        let parallel = generate(&config, 64, 64, workers);
        assert_eq!(
            bits(&serial),
            bits(&parallel),
            "{workers} workers must reproduce the serial field bit-for-bit"
        );
    }
}

/// Test: two independent generation calls agree byte-for-byte.
#[test]
fn test_repeated_runs_are_identical() {
    let config = reference_config();
    let first = generate(&config, 96, 128, 4);
    let second = generate(&config, 96, 128, 4);
    assert_eq!(bits(&first), bits(&second));
}

/// Test: changing only the seed changes the field but not its range.
#[test]
fn test_seed_sensitivity() {
    let base = reference_config();
    let reseeded = NoiseConfig { seed: 1, ..base };

    let a = generate(&base, 64, 64, 4);
    let b = generate(&reseeded, 64, 64, 4);

    let differing = a
        .iter()
        .zip(&b)
        .filter(|(x, y)| x.to_bits() != y.to_bits())
        .count();
    println!("differing cells: {differing} / {}", a.len());
    assert!(
        differing > a.len() / 2,
        "a new seed should rewrite most of the field, changed {differing}"
    );
    assert!(
        b.iter().all(|v| v.abs() <= base.strength),
        "reseeding must preserve the output range"
    );
}

/// Test: the reference 256x256 scenario - 65536 cells, all inside
/// [-strength, strength], smooth enough to render as a grayscale image.
#[test]
fn test_reference_scenario_256x256() {
    let config = reference_config();
    let field = generate(&config, 256, 256, 8);
    assert_eq!(field.len(), 65_536);

    for (i, value) in field.iter().enumerate() {
        assert!(
            value.abs() <= 0.6,
            "cell {i} = {value} escapes [-0.6, 0.6]"
        );
    }

    // Horizontal neighbors must not jump: adjacent-cell differences stay
    // small relative to strength at this resolution.
    let mut max_step = 0.0f32;
    for row in 0..256 {
        for col in 0..255 {
            let here = field[row * 256 + col];
            let right = field[row * 256 + col + 1];
            max_step = max_step.max((here - right).abs());
        }
    }
    println!("max adjacent step: {max_step}");
    assert!(
        max_step < 0.1,
        "field is not smooth: adjacent step {max_step}"
    );

    // And the whole thing reproduces.
    assert_eq!(bits(&field), bits(&generate(&config, 256, 256, 3)));
}

/// Test: the pre-strength octave sum is bounded, so strength bounds scale.
#[test]
fn test_bounds_follow_strength() {
    for strength in [0.25, 1.0, -0.6] {
        let config = NoiseConfig {
            strength,
            ..reference_config()
        };
        let field = generate(&config, 64, 64, 4);
        assert!(
            field.iter().all(|v| v.abs() <= strength.abs()),
            "strength {strength} bound violated"
        );
    }
}

/// Test: degenerate grids return immediately with no writes and no error.
#[test]
fn test_degenerate_grid_is_not_an_error() {
    let noise = FractalNoise::new(&reference_config()).unwrap();
    let mut empty: Vec<f32> = Vec::new();
    assert_eq!(GridFiller::new().fill(&noise, 0, 100, &mut empty), Ok(()));
    assert_eq!(GridFiller::new().fill(&noise, 100, 0, &mut empty), Ok(()));
    assert_eq!(GridFiller::new().fill(&noise, 0, 0, &mut empty), Ok(()));
}

/// Test: invalid configs are rejected before any work happens.
#[test]
fn test_invalid_configs_fail_fast() {
    let cases = [
        (
            NoiseConfig {
                num_layers: 0,
                ..reference_config()
            },
            NoiseError::InvalidLayerCount,
        ),
        (
            NoiseConfig {
                persistence: 0.0,
                ..reference_config()
            },
            NoiseError::InvalidPersistence(0.0),
        ),
        (
            NoiseConfig {
                roughness: -2.0,
                ..reference_config()
            },
            NoiseError::InvalidRoughness(-2.0),
        ),
        (
            NoiseConfig {
                base_roughness: 0.0,
                ..reference_config()
            },
            NoiseError::InvalidBaseRoughness(0.0),
        ),
    ];

    for (config, expected) in cases {
        match FractalNoise::new(&config) {
            Err(err) => assert_eq!(err, expected),
            Ok(_) => panic!("config {config:?} should have been rejected"),
        }
    }
}
