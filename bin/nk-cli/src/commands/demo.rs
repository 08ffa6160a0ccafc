// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nk demo`: run every kernel family on fixed reference inputs.
//!
//! Each kernel works on a fresh copy of the inputs. Kernel errors are
//! printed in place of the result so the walk always completes.

use numeric_kernels as nk;
use numeric_kernels::{Buffer, BufferView, KernelError};
use std::fmt::Debug;

const A: [i32; 4] = [-10, 0, 10, 20];
const B: [i32; 4] = [-1, 0, 1, 2];
const X: [f32; 4] = [-0.1, 0.0, 0.1, 0.2];
const Y: [f32; 4] = [-1.0, 0.0, 1.0, 2.0];
const I: i32 = 2;
const Z: f32 = 1.5;

pub fn execute() -> anyhow::Result<()> {
    super::banner("numeric-kernels · Demo");

    println!("  a = {A:?}    b = {B:?}");
    println!("  x = {X:?}    y = {Y:?}");
    println!("  i = {I}    z = {Z}");
    println!();

    // ── Scalar ops ──────────────────────────────────────────────
    println!("── Scalar ops ──────────────────────────────────────────");
    show("a = i", apply(A, |d| nk::assign_scalar(d, I)));
    show("a + i", apply(A, |d| nk::add_scalar(d, I)));
    show("a - i", apply(A, |d| nk::sub_scalar(d, I)));
    show("a * i", apply(A, |d| nk::mul_scalar(d, I)));
    show("a / i", unary(A, |d| nk::div_scalar(d, I)));
    show("x = z", apply(X, |d| nk::assign_scalar(d, Z)));
    show("x + z", apply(X, |d| nk::add_scalar(d, Z)));
    show("x - z", apply(X, |d| nk::sub_scalar(d, Z)));
    show("x * z", apply(X, |d| nk::mul_scalar(d, Z)));
    show("x / z", unary(X, |d| nk::div_scalar(d, Z)));
    show("x / 0", unary(X, |d| nk::div_scalar(d, 0.0)));
    println!();

    // ── Binary ops ──────────────────────────────────────────────
    println!("── Binary ops ──────────────────────────────────────────");
    show("a <- b", binary(A, &B, nk::copy));
    show("a + b", binary(A, &B, nk::add));
    show("a - b", binary(A, &B, nk::sub));
    show("a * b", binary(A, &B, nk::mul));
    show("a / b", binary(A, &B, nk::div));
    show("x + y", binary(X, &Y, nk::add));
    show("x - y", binary(X, &Y, nk::sub));
    show("x * y", binary(X, &Y, nk::mul));
    show("x / y", binary(X, &Y, nk::div));
    show("a == b", binary(A, &B, nk::eq));
    show("x == y", binary(X, &Y, nk::eq));
    show("a + b[..2]", binary(A, &B[..2], nk::add));
    println!();

    // ── Unary ops ───────────────────────────────────────────────
    println!("── Unary ops ───────────────────────────────────────────");
    show("-a", apply(A, nk::neg));
    show("|a|", apply(A, nk::abs));
    show("a²", apply(A, nk::square));
    show("-x", apply(X, nk::neg));
    show("|x|", apply(X, nk::abs));
    show("x²", apply(X, nk::square));
    show("√y", apply(Y, nk::sqrt));
    println!();

    // ── Mixed-type ops ──────────────────────────────────────────
    println!("── Mixed-type ops ──────────────────────────────────────");
    show("x / a", binary(X, &A, nk::div_by_int));
    show("x * a", binary(X, &A, nk::mul_by_int));
    show("float(a)", binary([0.0f32; 4], &A, nk::float_from_int));
    show("int(y * z)", {
        let mut scaled = Y;
        nk::mul_scalar(&mut Buffer::new(&mut scaled), Z);
        binary([0i32; 4], &scaled, nk::int_from_float)
    });
    println!();

    // ── Reductions ──────────────────────────────────────────────
    println!("── Reductions ──────────────────────────────────────────");
    show("sum(a)", nk::sum(&BufferView::new(&A)));
    show("max(a)", nk::max(&BufferView::new(&A)));
    show("min(a)", nk::min(&BufferView::new(&A)));
    show("argmax(a)", nk::argmax(&BufferView::new(&A)));
    show("sum(x)", nk::sum(&BufferView::new(&X)));
    show("max(x)", nk::max(&BufferView::new(&X)));
    show("min(x)", nk::min(&BufferView::new(&X)));
    show("argmin(x)", nk::argmin(&BufferView::new(&X)));
    show("sum([])", nk::sum::<f32>(&BufferView::new(&[])));
    println!();

    // ── Approximations ──────────────────────────────────────────
    println!("── Approximations ──────────────────────────────────────");
    show("exp(x)", binary([0.0f32; 4], &X, nk::exp));
    show("exp(y)", apply(Y, nk::exp_in_place));
    show("y^i", binary([0.0f32; 4], &Y, |d, s| nk::pow_int(d, s, I)));
    show("y^-i", unary(Y, |d| nk::pow_int_in_place(d, -I)));
    show("z^-i", nk::pow_int_scalar(Z, -I));

    Ok(())
}

/// Runs an infallible kernel on a copy of `init`.
fn apply<T: nk::Element, const N: usize>(
    init: [T; N],
    f: impl FnOnce(&mut Buffer<'_, T>),
) -> Result<[T; N], KernelError> {
    let mut data = init;
    f(&mut Buffer::new(&mut data));
    Ok(data)
}

/// Runs a fallible kernel on a copy of `init`.
fn unary<T: nk::Element, const N: usize>(
    init: [T; N],
    f: impl FnOnce(&mut Buffer<'_, T>) -> Result<(), KernelError>,
) -> Result<[T; N], KernelError> {
    let mut data = init;
    f(&mut Buffer::new(&mut data))?;
    Ok(data)
}

/// Runs `f` with a copy of `init` as destination and `src` as source.
fn binary<D: nk::Element, S: nk::Element, const N: usize>(
    init: [D; N],
    src: &[S],
    f: impl FnOnce(&mut Buffer<'_, D>, &BufferView<'_, S>) -> Result<(), KernelError>,
) -> Result<[D; N], KernelError> {
    let mut data = init;
    f(&mut Buffer::new(&mut data), &BufferView::new(src))?;
    Ok(data)
}

fn show<R: Debug>(label: &str, result: Result<R, KernelError>) {
    match result {
        Ok(value) => println!("  {label:<12} {value:?}"),
        Err(e) => println!("  {label:<12} error: {e}"),
    }
}
