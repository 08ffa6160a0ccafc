// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for kernel operations.

/// Errors that can occur during a kernel call.
///
/// Every kernel validates its arguments before writing, so when one of
/// these is returned no output element has been modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// Two buffers taking part in the same operation have different lengths.
    #[error("length mismatch in {op}: expected {expected} elements, got {actual}")]
    LengthMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A reduction was asked to fold a zero-length buffer.
    #[error("{op} requires a non-empty buffer")]
    EmptyInput { op: &'static str },

    /// A divisor (or a base that must be inverted) is zero.
    #[error("division by zero in {op} at element {index}")]
    DivisionByZero { op: &'static str, index: usize },

    /// A checked access went past the end of a buffer.
    #[error("index {index} out of bounds for buffer of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Returns `LengthMismatch` unless `actual == expected`.
pub(crate) fn check_len(op: &'static str, expected: usize, actual: usize) -> Result<(), KernelError> {
    if expected != actual {
        return Err(KernelError::LengthMismatch {
            op,
            expected,
            actual,
        });
    }
    Ok(())
}
