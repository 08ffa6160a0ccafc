// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # numeric-kernels
//!
//! Allocation-free numeric kernels over flat `i32` and `f32` buffers, for
//! targets without a hardware floating-point math library.
//!
//! This crate provides:
//! - [`Buffer`] / [`BufferView`]: non-owning, fixed-length views over
//!   caller memory, with checked and unchecked element access.
//! - [`DType`] and the sealed [`Element`] trait: the two supported
//!   element types and their scalar arithmetic.
//! - Element-wise kernels (assign, add, sub, mul, div, neg, abs, square,
//!   sqrt, copy, equality, int/float conversion).
//! - Reductions: [`sum`], [`max`], [`min`], [`argmax`], [`argmin`].
//! - [`exp_approx`]: a truncated-series exponential using only add,
//!   multiply and divide.
//! - [`pow_int_scalar`]: integer powers by repeated squaring.
//!
//! # Example
//! ```
//! use numeric_kernels::{add_scalar, Buffer};
//! let mut a = [-10i32, 0, 10, 20];
//! add_scalar(&mut Buffer::new(&mut a), 1);
//! assert_eq!(a, [-9, 1, 11, 21]);
//! ```
//!
//! # Design Goals
//! - No heap allocation, no global state, no logging in kernels.
//! - One forward pass per kernel, one element per step.
//! - All-or-nothing: arguments are validated before the first write.
//! - Clean error types via `thiserror`.

mod buffer;
mod dtype;
mod error;
pub mod ops;

pub use buffer::{Buffer, BufferView};
pub use dtype::{DType, Element};
pub use error::KernelError;
pub use ops::*;
