// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element-wise equality.

use crate::error::check_len;
use crate::{Buffer, BufferView, Element, KernelError};

/// Overwrites `dst[i]` with `1` if `dst[i] == src[i]`, else `0`.
///
/// The flag is written in `dst`'s own type (`1.0` / `0.0` for floats).
/// Comparison is exact: `0.0 == -0.0` holds and NaN never equals anything.
///
/// # Errors
/// Returns [`KernelError::LengthMismatch`] if the lengths differ.
pub fn eq<T: Element>(dst: &mut Buffer<'_, T>, src: &BufferView<'_, T>) -> Result<(), KernelError> {
    check_len("eq", dst.len(), src.len())?;
    for (d, &s) in dst.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = if *d == s { T::ONE } else { T::ZERO };
    }
    Ok(())
}
