// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Exponential approximation built from add, multiply and divide only.
//!
//! The series `1 + x(1 + x/2(1 + x/3(...)))` is evaluated inside out,
//! truncated after `n = floor(2.8·|x| + 8)` terms. Negative inputs are
//! evaluated at `|x|` and inverted, which keeps every partial sum positive.

use crate::error::check_len;
use crate::{Buffer, BufferView, KernelError};

/// Slope of the iteration-count line, tuned for `f32` precision.
pub const EXP_SLOPE: f32 = 2.8;

/// Intercept of the iteration-count line.
pub const EXP_OFFSET: f32 = 8.0;

/// Upper bound on the iteration count.
///
/// Any `|x|` that reaches it is far past `ln(f32::MAX) ≈ 88.7`, so the
/// result is already `inf` (or `0.0` after inversion).
pub const MAX_EXP_ITERATIONS: i32 = 1024;

/// Approximates `e^x` for a single value.
///
/// Relative error against the library exponential stays below `1e-4`
/// over `[-30, 30]`. NaN propagates.
///
/// # Examples
/// ```
/// use numeric_kernels::exp_approx;
/// assert_eq!(exp_approx(0.0), 1.0);
/// assert!((exp_approx(1.0) - std::f32::consts::E).abs() < 1e-5);
/// ```
#[inline]
pub fn exp_approx(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }

    let inverted = x < 0.0;
    let x = if inverted { -x } else { x };

    // `as` truncates toward zero and saturates; the operand is >= 8 here.
    let n = ((EXP_SLOPE * x + EXP_OFFSET) as i32).clamp(0, MAX_EXP_ITERATIONS);

    let mut f = 1.0f32;
    let mut i = n as f32;
    for _ in 0..n {
        f = 1.0 + x * f / i;
        i -= 1.0;
    }

    if inverted {
        1.0 / f
    } else {
        f
    }
}

/// Writes `exp_approx(src[i])` into `dst[i]`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn exp(dst: &mut Buffer<'_, f32>, src: &BufferView<'_, f32>) -> Result<(), KernelError> {
    check_len("exp", dst.len(), src.len())?;
    for (d, &x) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = exp_approx(x);
    }
    Ok(())
}

/// Replaces every element with its approximate exponential.
pub fn exp_in_place(buf: &mut Buffer<'_, f32>) {
    for x in buf.as_mut_slice() {
        *x = exp_approx(*x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_err(approx: f32, reference: f32) -> f32 {
        ((approx - reference) / reference).abs()
    }

    #[test]
    fn test_exp_zero_is_exact() {
        assert_eq!(exp_approx(0.0), 1.0);
        assert_eq!(exp_approx(-0.0), 1.0);
    }

    #[test]
    fn test_exp_known_values() {
        for x in [-5.0f32, -1.0, -0.1, 0.1, 0.5, 1.0, 2.0, 10.0, 30.0] {
            let e = rel_err(exp_approx(x), x.exp());
            assert!(e < 1e-4, "exp({x}) relative error {e}");
        }
    }

    #[test]
    fn test_exp_error_bound_over_range() {
        for k in -120..=120 {
            let x = k as f32 * 0.25;
            let reference = (x as f64).exp();
            let e = ((exp_approx(x) as f64 - reference) / reference).abs();
            assert!(e < 1e-4, "exp({x}) relative error {e}");
        }
    }

    #[test]
    fn test_exp_negative_is_reciprocal() {
        for x in [0.25f32, 3.0, 17.5] {
            assert_eq!(exp_approx(-x), 1.0 / exp_approx(x));
        }
    }

    #[test]
    fn test_exp_overflow() {
        assert_eq!(exp_approx(89.0), f32::INFINITY);
        assert_eq!(exp_approx(1e30), f32::INFINITY);
        assert_eq!(exp_approx(f32::INFINITY), f32::INFINITY);
        assert_eq!(exp_approx(-1e30), 0.0);
        assert_eq!(exp_approx(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_exp_nan() {
        assert!(exp_approx(f32::NAN).is_nan());
    }

    #[test]
    fn test_exp_buffer() {
        let src = [-1.0f32, 0.0, 1.0, 2.0];
        let mut dst = [0.0f32; 4];
        exp(&mut Buffer::new(&mut dst), &BufferView::new(&src)).unwrap();
        for (d, s) in dst.iter().zip(src) {
            assert_eq!(*d, exp_approx(s));
        }
    }

    #[test]
    fn test_exp_in_place_matches_out_of_place() {
        let src = [-3.5f32, 0.2, 7.0];
        let mut dst = [0.0f32; 3];
        exp(&mut Buffer::new(&mut dst), &BufferView::new(&src)).unwrap();

        let mut aliased = src;
        exp_in_place(&mut Buffer::new(&mut aliased));
        assert_eq!(aliased, dst);
    }

    #[test]
    fn test_exp_length_mismatch() {
        let mut dst = [0.0f32; 2];
        let err = exp(&mut Buffer::new(&mut dst), &BufferView::new(&[1.0f32])).unwrap_err();
        assert_eq!(
            err,
            KernelError::LengthMismatch {
                op: "exp",
                expected: 2,
                actual: 1
            }
        );
    }
}
