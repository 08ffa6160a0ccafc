// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Cross-type kernels: float-by-int arithmetic and full-buffer conversion.

use super::elementwise_op::check_divisors;
use crate::error::check_len;
use crate::{Buffer, BufferView, KernelError};

/// `dst[i] /= src[i] as f32`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ, or
/// [`KernelError::DivisionByZero`] if any `src[i]` is zero.
pub fn div_by_int(dst: &mut Buffer<'_, f32>, src: &BufferView<'_, i32>) -> Result<(), KernelError> {
    check_len("div_by_int", dst.len(), src.len())?;
    check_divisors("div_by_int", src.as_slice())?;
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d /= s as f32;
    }
    Ok(())
}

/// `dst[i] *= src[i] as f32`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn mul_by_int(dst: &mut Buffer<'_, f32>, src: &BufferView<'_, i32>) -> Result<(), KernelError> {
    check_len("mul_by_int", dst.len(), src.len())?;
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d *= s as f32;
    }
    Ok(())
}

/// Converts floats to integers, rounding to nearest with ties to even.
///
/// Values outside the `i32` range saturate; NaN converts to `0`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn int_from_float(dst: &mut Buffer<'_, i32>, src: &BufferView<'_, f32>) -> Result<(), KernelError> {
    check_len("int_from_float", dst.len(), src.len())?;
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = s.round_ties_even() as i32;
    }
    Ok(())
}

/// Converts integers to floats. Magnitudes above 2^24 round to nearest.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn float_from_int(dst: &mut Buffer<'_, f32>, src: &BufferView<'_, i32>) -> Result<(), KernelError> {
    check_len("float_from_int", dst.len(), src.len())?;
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = s as f32;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_by_int() {
        let mut x = [-0.1f32, 0.0, 0.1, 0.2];
        let a = [-10i32, 1, 10, 20];
        div_by_int(&mut Buffer::new(&mut x), &BufferView::new(&a)).unwrap();
        assert_eq!(x, [-0.1 / -10.0, 0.0, 0.1 / 10.0, 0.2 / 20.0]);
    }

    #[test]
    fn test_div_by_int_zero() {
        let mut x = [-0.1f32, 0.0, 0.1, 0.2];
        let a = [-10i32, 0, 10, 20];
        let err = div_by_int(&mut Buffer::new(&mut x), &BufferView::new(&a)).unwrap_err();
        assert_eq!(err, KernelError::DivisionByZero { op: "div_by_int", index: 1 });
        assert_eq!(x, [-0.1, 0.0, 0.1, 0.2]);
    }

    #[test]
    fn test_mul_by_int() {
        let mut x = [-0.5f32, 0.0, 0.25, 2.0];
        let a = [-10i32, 0, 10, 20];
        mul_by_int(&mut Buffer::new(&mut x), &BufferView::new(&a)).unwrap();
        assert_eq!(x, [5.0, 0.0, 2.5, 40.0]);
    }

    #[test]
    fn test_int_from_float_ties_to_even() {
        let src = [-1.0f32, 0.0, 1.0, 2.0, 0.5, 1.5, 2.5, -2.5, 2.6];
        let mut dst = [0i32; 9];
        int_from_float(&mut Buffer::new(&mut dst), &BufferView::new(&src)).unwrap();
        assert_eq!(dst, [-1, 0, 1, 2, 0, 2, 2, -2, 3]);
    }

    #[test]
    fn test_int_from_float_saturates() {
        let src = [1e20f32, -1e20, f32::NAN];
        let mut dst = [7i32; 3];
        int_from_float(&mut Buffer::new(&mut dst), &BufferView::new(&src)).unwrap();
        assert_eq!(dst, [i32::MAX, i32::MIN, 0]);
    }

    #[test]
    fn test_float_from_int() {
        let src = [-10i32, 0, 10, 20];
        let mut dst = [0.0f32; 4];
        float_from_int(&mut Buffer::new(&mut dst), &BufferView::new(&src)).unwrap();
        assert_eq!(dst, [-10.0, 0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_conversion_length_mismatch() {
        let mut dst = [0.0f32; 2];
        let err = float_from_int(&mut Buffer::new(&mut dst), &BufferView::new(&[1i32, 2, 3]));
        assert!(matches!(err, Err(KernelError::LengthMismatch { .. })));
    }
}
