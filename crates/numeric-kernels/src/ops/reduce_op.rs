// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Single-pass reductions: sum, max, min and their argument variants.
//!
//! Accumulation stays in the element's own 32-bit width, so integer sums
//! wrap and float sums round exactly as a sequential `+` would.

use crate::{BufferView, Element, KernelError};
use std::cmp::Ordering;

/// Left fold with `+` starting from zero.
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] for a zero-length buffer.
pub fn sum<T: Element>(src: &BufferView<'_, T>) -> Result<T, KernelError> {
    non_empty("sum", src)?;
    Ok(src.as_slice().iter().fold(T::ZERO, |acc, &x| acc.add(x)))
}

/// Largest element; on ties the earliest occurrence wins.
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] for a zero-length buffer.
pub fn max<T: Element>(src: &BufferView<'_, T>) -> Result<T, KernelError> {
    argmax(src).map(|i| src.as_slice()[i])
}

/// Smallest element; on ties the earliest occurrence wins.
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] for a zero-length buffer.
pub fn min<T: Element>(src: &BufferView<'_, T>) -> Result<T, KernelError> {
    argmin(src).map(|i| src.as_slice()[i])
}

/// Index of the element [`max`] returns.
///
/// A later element replaces the running maximum unless the maximum is
/// greater than or equal to it. Equal elements keep the earliest index.
/// An unordered pair (either side NaN) also replaces, so a NaN later in
/// the buffer is taken and a leading NaN is dropped by the next element.
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] for a zero-length buffer.
pub fn argmax<T: Element>(src: &BufferView<'_, T>) -> Result<usize, KernelError> {
    non_empty("max", src)?;
    Ok(scan(src.as_slice(), |candidate, best| {
        !matches!(
            best.partial_cmp(&candidate),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }))
}

/// Index of the element [`min`] returns.
///
/// A later element replaces the running minimum only when strictly
/// smaller, so NaN never replaces and a leading NaN is kept.
///
/// # Errors
/// Returns [`KernelError::EmptyInput`] for a zero-length buffer.
pub fn argmin<T: Element>(src: &BufferView<'_, T>) -> Result<usize, KernelError> {
    non_empty("min", src)?;
    Ok(scan(src.as_slice(), |candidate, best| candidate < best))
}

fn non_empty<T: Element>(op: &'static str, src: &BufferView<'_, T>) -> Result<(), KernelError> {
    if src.is_empty() {
        return Err(KernelError::EmptyInput { op });
    }
    Ok(())
}

#[inline(always)]
fn scan<T: Element>(data: &[T], replaces: impl Fn(T, T) -> bool) -> usize {
    let mut best = 0;
    for (i, &x) in data.iter().enumerate().skip(1) {
        if replaces(x, data[best]) {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&BufferView::new(&[-10i32, 0, 10, 20])).unwrap(), 20);
        assert_eq!(sum(&BufferView::new(&[5i32])).unwrap(), 5);
        assert_eq!(sum(&BufferView::new(&[-1.0f32, 0.0, 1.0, 2.0])).unwrap(), 2.0);
    }

    #[test]
    fn test_sum_wraps() {
        assert_eq!(sum(&BufferView::new(&[i32::MAX, 1])).unwrap(), i32::MIN);
    }

    #[test]
    fn test_sum_keeps_f32_rounding() {
        // 2^24 + 1 is not representable; sequential f32 addition drops each 1.
        let data = [16_777_216.0f32, 1.0, 1.0];
        assert_eq!(sum(&BufferView::new(&data)).unwrap(), 16_777_216.0);
    }

    #[test]
    fn test_empty_input() {
        let empty: [i32; 0] = [];
        let v = BufferView::new(&empty);
        assert_eq!(sum(&v).unwrap_err(), KernelError::EmptyInput { op: "sum" });
        assert_eq!(max(&v).unwrap_err(), KernelError::EmptyInput { op: "max" });
        assert_eq!(min(&v).unwrap_err(), KernelError::EmptyInput { op: "min" });
    }

    #[test]
    fn test_max_min() {
        let v = BufferView::new(&[3i32, 1, 4, 1, 5]);
        assert_eq!(max(&v).unwrap(), 5);
        assert_eq!(min(&v).unwrap(), 1);
        assert_eq!(argmin(&v).unwrap(), 1);
        assert_eq!(argmax(&v).unwrap(), 4);
    }

    #[test]
    fn test_ties_keep_first() {
        assert_eq!(argmax(&BufferView::new(&[5i32, 5, 3])).unwrap(), 0);
        assert_eq!(argmin(&BufferView::new(&[3i32, 1, 1])).unwrap(), 1);

        // Signed zeros compare equal, so the first one is returned bit for bit.
        let z = [-0.0f32, 0.0];
        assert_eq!(max(&BufferView::new(&z)).unwrap().to_bits(), 0x8000_0000);
        let z = [0.0f32, -0.0];
        assert_eq!(min(&BufferView::new(&z)).unwrap().to_bits(), 0);
    }

    #[test]
    fn test_float_max_min() {
        let v = BufferView::new(&[-0.1f32, 0.0, 0.1, 0.2]);
        assert_eq!(max(&v).unwrap(), 0.2);
        assert_eq!(min(&v).unwrap(), -0.1);
    }

    #[test]
    fn test_max_takes_later_nan() {
        assert!(max(&BufferView::new(&[1.0f32, f32::NAN])).unwrap().is_nan());
        assert_eq!(argmax(&BufferView::new(&[1.0f32, f32::NAN, 3.0])).unwrap(), 2);
        assert_eq!(argmax(&BufferView::new(&[1.0f32, 3.0, f32::NAN])).unwrap(), 2);
    }

    #[test]
    fn test_max_drops_leading_nan() {
        assert_eq!(max(&BufferView::new(&[f32::NAN, 1.0])).unwrap(), 1.0);
        assert_eq!(argmax(&BufferView::new(&[f32::NAN, 1.0, 1.0])).unwrap(), 1);
    }

    #[test]
    fn test_min_never_takes_nan() {
        assert!(min(&BufferView::new(&[f32::NAN, 1.0])).unwrap().is_nan());
        assert_eq!(min(&BufferView::new(&[1.0f32, f32::NAN, 3.0])).unwrap(), 1.0);
        assert_eq!(min(&BufferView::new(&[2.0f32, f32::NAN, -3.0])).unwrap(), -3.0);
    }
}
