// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the kernel harness.

/// Errors that can occur while preparing or running a harness pass.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A kernel rejected its arguments.
    #[error("kernel error: {0}")]
    Kernel(#[from] numeric_kernels::KernelError),

    /// A numeric range has its bounds in the wrong order or non-finite.
    #[error("invalid range for {what}: [{min}, {max})")]
    InvalidRange {
        what: &'static str,
        min: f64,
        max: f64,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
