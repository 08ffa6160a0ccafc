// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # kernel-harness
//!
//! Measurement tooling around `numeric-kernels`.
//!
//! The harness provides:
//! - [`HarnessConfig`]: TOML-backed run configuration.
//! - [`accuracy`]: error of the `exp` and `pow_int` kernels against the
//!   `std` reference functions.
//! - [`timing`]: wall-clock timing of single and repeated calls.
//! - [`random`]: seeded input generation.
//!
//! Reference math from `std` lives here and in tests only; the kernels
//! never call it.

pub mod accuracy;
mod config;
mod error;
pub mod random;
pub mod timing;

pub use accuracy::{exp_accuracy, pow_accuracy, ExpAccuracyReport, PowAccuracyReport};
pub use config::{HarnessConfig, EXP_RANGE_LIMIT};
pub use error::HarnessError;
pub use timing::{time_repeated, timed, try_time_repeated, TimingStats};
