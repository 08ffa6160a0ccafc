// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! In-place element-wise arithmetic for `i32` and `f32` buffers.
//!
//! Every kernel walks the buffer once, front to back, one element per
//! step. Integer arithmetic wraps; float arithmetic is plain IEEE 754.

use crate::error::check_len;
use crate::{Buffer, BufferView, Element, KernelError};

/// Sets every element of `dst` to `value`.
pub fn assign_scalar<T: Element>(dst: &mut Buffer<'_, T>, value: T) {
    for d in dst.as_mut_slice() {
        *d = value;
    }
}

/// `dst[i] += value`.
pub fn add_scalar<T: Element>(dst: &mut Buffer<'_, T>, value: T) {
    map_in_place(dst, |x| x.add(value));
}

/// `dst[i] -= value`.
pub fn sub_scalar<T: Element>(dst: &mut Buffer<'_, T>, value: T) {
    map_in_place(dst, |x| x.sub(value));
}

/// `dst[i] *= value`.
pub fn mul_scalar<T: Element>(dst: &mut Buffer<'_, T>, value: T) {
    map_in_place(dst, |x| x.mul(value));
}

/// `dst[i] /= value`. Integer division truncates toward zero.
///
/// # Errors
/// Returns [`KernelError::DivisionByZero`] if `value` is zero, before any
/// element is touched.
pub fn div_scalar<T: Element>(dst: &mut Buffer<'_, T>, value: T) -> Result<(), KernelError> {
    if value.is_zero() {
        return Err(KernelError::DivisionByZero {
            op: "div_scalar",
            index: 0,
        });
    }
    map_in_place(dst, |x| x.div(value));
    Ok(())
}

/// Copies `src` into `dst`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn copy<T: Element>(dst: &mut Buffer<'_, T>, src: &BufferView<'_, T>) -> Result<(), KernelError> {
    check_len("copy", dst.len(), src.len())?;
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = s;
    }
    Ok(())
}

/// `dst[i] += src[i]`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn add<T: Element>(dst: &mut Buffer<'_, T>, src: &BufferView<'_, T>) -> Result<(), KernelError> {
    check_len("add", dst.len(), src.len())?;
    zip_in_place(dst, src, T::add);
    Ok(())
}

/// `dst[i] -= src[i]`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn sub<T: Element>(dst: &mut Buffer<'_, T>, src: &BufferView<'_, T>) -> Result<(), KernelError> {
    check_len("sub", dst.len(), src.len())?;
    zip_in_place(dst, src, T::sub);
    Ok(())
}

/// `dst[i] *= src[i]`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn mul<T: Element>(dst: &mut Buffer<'_, T>, src: &BufferView<'_, T>) -> Result<(), KernelError> {
    check_len("mul", dst.len(), src.len())?;
    zip_in_place(dst, src, T::mul);
    Ok(())
}

/// `dst[i] /= src[i]`.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ, or
/// [`KernelError::DivisionByZero`] naming the first zero divisor. Both are
/// detected before `dst` is modified.
pub fn div<T: Element>(dst: &mut Buffer<'_, T>, src: &BufferView<'_, T>) -> Result<(), KernelError> {
    check_len("div", dst.len(), src.len())?;
    check_divisors("div", src.as_slice())?;
    zip_in_place(dst, src, T::div);
    Ok(())
}

/// `dst[i] = -dst[i]`.
pub fn neg<T: Element>(dst: &mut Buffer<'_, T>) {
    map_in_place(dst, T::neg);
}

/// `dst[i] = |dst[i]|`. For floats this clears the sign bit only.
pub fn abs<T: Element>(dst: &mut Buffer<'_, T>) {
    map_in_place(dst, T::abs);
}

/// `dst[i] = dst[i] * dst[i]`.
pub fn square<T: Element>(dst: &mut Buffer<'_, T>) {
    map_in_place(dst, |x| x.mul(x));
}

/// `dst[i] = sqrt(dst[i])`. Negative inputs produce NaN.
pub fn sqrt(dst: &mut Buffer<'_, f32>) {
    map_in_place(dst, f32::sqrt);
}

/// Returns the index of the first zero in `divisors`, as an error.
pub(crate) fn check_divisors<T: Element>(op: &'static str, divisors: &[T]) -> Result<(), KernelError> {
    match divisors.iter().position(|d| d.is_zero()) {
        Some(index) => Err(KernelError::DivisionByZero { op, index }),
        None => Ok(()),
    }
}

#[inline(always)]
fn map_in_place<T: Element>(dst: &mut Buffer<'_, T>, f: impl Fn(T) -> T) {
    for d in dst.as_mut_slice() {
        *d = f(*d);
    }
}

#[inline(always)]
fn zip_in_place<T: Element>(dst: &mut Buffer<'_, T>, src: &BufferView<'_, T>, f: impl Fn(T, T) -> T) {
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = f(*d, s);
    }
}
