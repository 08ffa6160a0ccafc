// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reproducible input generation.

use crate::config::check_range;
use crate::HarnessError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns a generator seeded for reproducible runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates `len` uniform values in `[min, max)`.
///
/// # Errors
/// Returns [`HarnessError::InvalidRange`] unless `min < max` and both are finite.
pub fn random_f32<R: Rng + ?Sized>(
    len: usize,
    min: f32,
    max: f32,
    rng: &mut R,
) -> Result<Vec<f32>, HarnessError> {
    check_range("random_f32", min, max)?;
    Ok((0..len).map(|_| rng.gen_range(min..max)).collect())
}

/// Generates one value per integer in `start..=end`, each jittered by
/// a uniform offset in `[-0.5, 0.5)`.
pub fn jittered_grid<R: Rng + ?Sized>(start: i32, end: i32, rng: &mut R) -> Vec<f32> {
    (start..=end)
        .map(|i| i as f32 + rng.gen::<f32>() - 0.5)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_in_range() {
        let mut rng = seeded_rng(1);
        let xs = random_f32(500, -2.0, 3.0, &mut rng).unwrap();
        assert_eq!(xs.len(), 500);
        assert!(xs.iter().all(|&x| (-2.0..3.0).contains(&x)));
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = random_f32(16, -1.0, 1.0, &mut seeded_rng(9)).unwrap();
        let b = random_f32(16, -1.0, 1.0, &mut seeded_rng(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_range() {
        let mut rng = seeded_rng(0);
        assert!(random_f32(4, 1.0, 1.0, &mut rng).is_err());
        assert!(random_f32(4, f32::NEG_INFINITY, 0.0, &mut rng).is_err());
    }

    #[test]
    fn test_jittered_grid() {
        let xs = jittered_grid(-30, 30, &mut seeded_rng(3));
        assert_eq!(xs.len(), 61);
        for (x, i) in xs.iter().zip(-30..=30) {
            assert!((x - i as f32).abs() <= 0.5, "{x} too far from {i}");
        }
    }
}
