// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integer powers of `f32` values by repeated squaring.

use crate::error::check_len;
use crate::{Buffer, BufferView, KernelError};

/// Computes `base^exponent` by exponentiation by squaring.
///
/// A negative exponent inverts the base first, so precision matches
/// `(1/base)^|exponent|` rather than `1/base^|exponent|`.
///
/// # Errors
/// Returns [`KernelError::DivisionByZero`] for a zero base (of either
/// sign) with a negative exponent.
///
/// # Examples
/// ```
/// use numeric_kernels::pow_int_scalar;
/// assert_eq!(pow_int_scalar(2.0, -3).unwrap(), 0.125);
/// assert_eq!(pow_int_scalar(7.5, 0).unwrap(), 1.0);
/// assert!(pow_int_scalar(0.0, -1).is_err());
/// ```
pub fn pow_int_scalar(base: f32, exponent: i32) -> Result<f32, KernelError> {
    if exponent < 0 && base == 0.0 {
        return Err(KernelError::DivisionByZero {
            op: "pow_int",
            index: 0,
        });
    }
    Ok(pow_unchecked(base, exponent))
}

/// Writes `src[i]^exponent` into `dst[i]`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ, or
/// [`KernelError::DivisionByZero`] naming the first zero base when
/// `exponent` is negative. Nothing is written on error.
pub fn pow_int(dst: &mut Buffer<'_, f32>, src: &BufferView<'_, f32>, exponent: i32) -> Result<(), KernelError> {
    check_len("pow_int", dst.len(), src.len())?;
    check_bases(src.as_slice(), exponent)?;
    for (d, &b) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = pow_unchecked(b, exponent);
    }
    Ok(())
}

/// Raises every element of `buf` to `exponent` in place.
///
/// # Errors
/// Returns [`KernelError::DivisionByZero`] as [`pow_int`] does.
pub fn pow_int_in_place(buf: &mut Buffer<'_, f32>, exponent: i32) -> Result<(), KernelError> {
    check_bases(buf.as_slice(), exponent)?;
    for b in buf.as_mut_slice() {
        *b = pow_unchecked(*b, exponent);
    }
    Ok(())
}

fn check_bases(bases: &[f32], exponent: i32) -> Result<(), KernelError> {
    if exponent >= 0 {
        return Ok(());
    }
    match bases.iter().position(|&b| b == 0.0) {
        Some(index) => Err(KernelError::DivisionByZero {
            op: "pow_int",
            index,
        }),
        None => Ok(()),
    }
}

#[inline]
fn pow_unchecked(base: f32, exponent: i32) -> f32 {
    match exponent {
        1 => return base,
        -1 => return 1.0 / base,
        0 => return 1.0,
        _ => {}
    }

    let mut x = if exponent < 0 { 1.0 / base } else { base };
    let mut n = exponent.unsigned_abs();
    let mut acc = 1.0f32;
    while n > 0 {
        if n & 1 == 1 {
            acc *= x;
        }
        x *= x;
        n >>= 1;
    }
    acc
}
