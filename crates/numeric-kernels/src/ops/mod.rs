// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Kernel families.
//!
//! Each kernel works on caller-provided buffers and never allocates.
//! Fallible kernels validate every argument before the first write, so an
//! `Err` always leaves the output untouched.

mod compare_op;
mod convert_op;
mod elementwise_op;
mod exp_op;
mod pow_op;
mod reduce_op;

pub use compare_op::eq;
pub use convert_op::{div_by_int, float_from_int, int_from_float, mul_by_int};
pub use elementwise_op::{
    abs, add, add_scalar, assign_scalar, copy, div, div_scalar, mul, mul_scalar, neg, sqrt,
    square, sub, sub_scalar,
};
pub use exp_op::{exp, exp_approx, exp_in_place, EXP_OFFSET, EXP_SLOPE, MAX_EXP_ITERATIONS};
pub use pow_op::{pow_int, pow_int_in_place, pow_int_scalar};
pub use reduce_op::{argmax, argmin, max, min, sum};
