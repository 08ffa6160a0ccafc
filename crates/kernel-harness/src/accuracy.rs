// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Accuracy comparison of the approximation kernels against `std`.
//!
//! References are evaluated in `f64` so the reported error is the
//! kernel's, not the reference's.

use crate::HarnessError;
use numeric_kernels::{exp, pow_int, Buffer, BufferView, KernelError};

/// One `exp` input and how far the kernel landed from the reference.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ExpSample {
    pub x: f32,
    pub approx: f32,
    pub reference: f64,
    pub abs_error: f64,
    pub rel_error: f64,
}

/// Per-sample and aggregate error of the `exp` kernel.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExpAccuracyReport {
    pub samples: Vec<ExpSample>,
    /// Mean relative error, in percent.
    pub mean_relative_error_pct: f64,
    /// Worst relative error (fraction, not percent).
    pub max_relative_error: f64,
}

/// Runs the `exp` kernel over `xs` and compares each element with `f64::exp`.
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] (wrapped) when `xs` is empty.
pub fn exp_accuracy(xs: &[f32]) -> Result<ExpAccuracyReport, HarnessError> {
    if xs.is_empty() {
        return Err(KernelError::EmptyInput { op: "exp_accuracy" }.into());
    }

    let mut out = vec![0.0f32; xs.len()];
    exp(&mut Buffer::new(&mut out), &BufferView::new(xs))?;

    let samples: Vec<ExpSample> = xs
        .iter()
        .zip(&out)
        .map(|(&x, &approx)| {
            let reference = (x as f64).exp();
            let abs_error = (approx as f64 - reference).abs();
            ExpSample {
                x,
                approx,
                reference,
                abs_error,
                rel_error: abs_error / reference,
            }
        })
        .collect();

    let total: f64 = samples.iter().map(|s| s.rel_error).sum();
    let max_relative_error = samples.iter().map(|s| s.rel_error).fold(0.0, f64::max);

    let report = ExpAccuracyReport {
        mean_relative_error_pct: total * 100.0 / samples.len() as f64,
        max_relative_error,
        samples,
    };
    tracing::info!(
        "exp accuracy: {} samples, mean {:.6}% relative error",
        report.samples.len(),
        report.mean_relative_error_pct,
    );
    Ok(report)
}

/// Result of raising every base to one exponent.
#[derive(Debug, Clone)]
pub struct PowRow {
    pub exponent: i32,
    /// Kernel output, or the error the kernel returned.
    pub outcome: Result<Vec<f32>, KernelError>,
    /// Sum of `|kernel - reference|` over elements that differ.
    pub abs_error: f64,
}

/// Integer-power results over an exponent sweep.
#[derive(Debug, Clone)]
pub struct PowAccuracyReport {
    pub bases: Vec<f32>,
    pub rows: Vec<PowRow>,
    /// Sum of every row's `abs_error`.
    pub cumulative_abs_error: f64,
}

impl PowAccuracyReport {
    /// Number of rows the kernel rejected.
    pub fn failed_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.outcome.is_err()).count()
    }
}

/// Runs the `pow_int` kernel for every exponent and compares with `f64::powi`.
///
/// A row whose exponent is negative while some base is zero is recorded
/// with its `DivisionByZero` error and contributes no error.
pub fn pow_accuracy(
    bases: &[f32],
    exponents: impl IntoIterator<Item = i32>,
) -> PowAccuracyReport {
    let mut rows = Vec::new();
    let mut cumulative_abs_error = 0.0;

    for exponent in exponents {
        let mut out = vec![0.0f32; bases.len()];
        let outcome = pow_int(&mut Buffer::new(&mut out), &BufferView::new(bases), exponent);

        let row = match outcome {
            Ok(()) => {
                let abs_error: f64 = out
                    .iter()
                    .zip(bases)
                    .map(|(&y, &b)| {
                        let reference = (b as f64).powi(exponent);
                        if y as f64 == reference {
                            0.0
                        } else {
                            (y as f64 - reference).abs()
                        }
                    })
                    .sum();
                PowRow {
                    exponent,
                    outcome: Ok(out),
                    abs_error,
                }
            }
            Err(e) => {
                tracing::debug!("pow_int rejected exponent {exponent}: {e}");
                PowRow {
                    exponent,
                    outcome: Err(e),
                    abs_error: 0.0,
                }
            }
        };
        cumulative_abs_error += row.abs_error;
        rows.push(row);
    }

    PowAccuracyReport {
        bases: bases.to_vec(),
        rows,
        cumulative_abs_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_accuracy_tight() {
        let xs: Vec<f32> = (-30..=30).map(|i| i as f32 * 0.97).collect();
        let report = exp_accuracy(&xs).unwrap();
        assert_eq!(report.samples.len(), 61);
        assert!(report.mean_relative_error_pct < 0.01);
        assert!(report.max_relative_error < 1e-4);
    }

    #[test]
    fn test_exp_accuracy_empty() {
        let err = exp_accuracy(&[]).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Kernel(KernelError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_pow_accuracy_sweep() {
        let bases = [-1.0f32, -0.5, 0.0, 0.5, 1.0, 10.0];
        let report = pow_accuracy(&bases, -10..=10);
        assert_eq!(report.rows.len(), 21);
        // Every negative exponent hits the zero base.
        assert_eq!(report.failed_rows(), 10);
        assert!(report.cumulative_abs_error < 1e-6);

        let row = report.rows.iter().find(|r| r.exponent == 3).unwrap();
        assert_eq!(
            row.outcome.as_ref().unwrap(),
            &vec![-1.0, -0.125, 0.0, 0.125, 1.0, 1000.0]
        );
    }

    #[test]
    fn test_pow_accuracy_without_zero() {
        let bases = [0.5f32, 2.0, -4.0];
        let report = pow_accuracy(&bases, [-4, 0, 4]);
        assert_eq!(report.failed_rows(), 0);
        assert_eq!(report.cumulative_abs_error, 0.0);
    }
}
