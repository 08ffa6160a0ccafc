// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Harness configuration loaded from TOML files or constructed programmatically.
//!
//! Every field is optional in the file; missing fields take the
//! [`Default`] value.
//!
//! # TOML Format
//! ```toml
//! length = 1000
//! seed = 42
//! repetitions = 5
//! warmup = true
//! exp_min = -30.0
//! exp_max = 30.0
//! pow_min_exponent = -8
//! pow_max_exponent = 8
//! random_min = -1000000.0
//! random_max = 1000000.0
//! ```

use crate::HarnessError;
use numeric_kernels::MAX_EXP_ITERATIONS;
use std::path::Path;

/// Largest `|x|` accepted for `exp_min`/`exp_max`.
///
/// Well past the point where the kernel saturates to `inf` or `0`, and
/// keeps the one-sample-per-integer accuracy grid small.
pub const EXP_RANGE_LIMIT: f32 = MAX_EXP_ITERATIONS as f32;

/// Configuration for accuracy and timing runs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Number of elements in generated buffers.
    pub length: usize,
    /// Seed for the input generator, so runs are reproducible.
    pub seed: u64,
    /// Timed repetitions per measurement.
    pub repetitions: usize,
    /// Whether to run each kernel once untimed before measuring.
    pub warmup: bool,
    /// Lower bound of random `exp` inputs.
    pub exp_min: f32,
    /// Upper bound of random `exp` inputs.
    pub exp_max: f32,
    /// Smallest exponent in the `pow` timing sweep.
    pub pow_min_exponent: i32,
    /// Largest exponent in the `pow` timing sweep (inclusive).
    pub pow_max_exponent: i32,
    /// Lower bound for general random buffers.
    pub random_min: f32,
    /// Upper bound for general random buffers.
    pub random_max: f32,
}

impl HarnessConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, HarnessError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| HarnessError::ConfigError(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, HarnessError> {
        toml::to_string_pretty(self)
            .map_err(|e| HarnessError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Checks that sizes are non-zero and every range is ordered and finite,
    /// with the `exp` range inside `±EXP_RANGE_LIMIT`.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.length == 0 {
            return Err(HarnessError::ConfigError("length must be at least 1".into()));
        }
        if self.repetitions == 0 {
            return Err(HarnessError::ConfigError(
                "repetitions must be at least 1".into(),
            ));
        }
        check_range("exp_min..exp_max", self.exp_min, self.exp_max)?;
        if self.exp_min < -EXP_RANGE_LIMIT || self.exp_max > EXP_RANGE_LIMIT {
            return Err(HarnessError::InvalidRange {
                what: "exp_min..exp_max",
                min: self.exp_min as f64,
                max: self.exp_max as f64,
            });
        }
        check_range("random_min..random_max", self.random_min, self.random_max)?;
        if self.pow_min_exponent > self.pow_max_exponent {
            return Err(HarnessError::InvalidRange {
                what: "pow_min_exponent..=pow_max_exponent",
                min: self.pow_min_exponent as f64,
                max: self.pow_max_exponent as f64,
            });
        }
        Ok(())
    }

    /// Returns the inclusive exponent sweep.
    pub fn pow_exponents(&self) -> std::ops::RangeInclusive<i32> {
        self.pow_min_exponent..=self.pow_max_exponent
    }
}

pub(crate) fn check_range(what: &'static str, min: f32, max: f32) -> Result<(), HarnessError> {
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(HarnessError::InvalidRange {
            what,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            length: 1000,
            seed: 42,
            repetitions: 5,
            warmup: true,
            exp_min: -30.0,
            exp_max: 30.0,
            pow_min_exponent: -8,
            pow_max_exponent: 8,
            random_min: -1e6,
            random_max: 1e6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = HarnessConfig::default();
        assert_eq!(c.length, 1000);
        assert_eq!(c.repetitions, 5);
        assert_eq!(c.pow_exponents().count(), 17);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let toml = r#"
length = 64
seed = 7
exp_min = -5.0
exp_max = 5.0
"#;
        let c = HarnessConfig::from_toml(toml).unwrap();
        assert_eq!(c.length, 64);
        assert_eq!(c.seed, 7);
        assert_eq!(c.exp_min, -5.0);
        assert_eq!(c.repetitions, 5);
        assert!(c.warmup);
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = HarnessConfig {
            pow_min_exponent: -3,
            warmup: false,
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = HarnessConfig::from_toml(&toml).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_rejects_zero_length() {
        let err = HarnessConfig::from_toml("length = 0").unwrap_err();
        assert!(matches!(err, HarnessError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = HarnessConfig::from_toml("exp_min = 1.0\nexp_max = -1.0").unwrap_err();
        assert!(matches!(err, HarnessError::InvalidRange { .. }));

        let err = HarnessConfig::from_toml("pow_min_exponent = 3\npow_max_exponent = 2").unwrap_err();
        assert!(matches!(err, HarnessError::InvalidRange { .. }));
    }

    #[test]
    fn test_rejects_exp_range_past_limit() {
        let err = HarnessConfig::from_toml("exp_max = 1e30").unwrap_err();
        assert!(matches!(
            err,
            HarnessError::InvalidRange { what: "exp_min..exp_max", .. }
        ));
        assert!(HarnessConfig::from_toml("exp_min = -2000.0").is_err());

        let edge = HarnessConfig::from_toml("exp_min = -1024.0\nexp_max = 1024.0").unwrap();
        assert_eq!(edge.exp_max, EXP_RANGE_LIMIT);
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(HarnessConfig::from_toml("length = \"many\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = HarnessConfig::from_file(Path::new("/nonexistent/harness.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }
}
