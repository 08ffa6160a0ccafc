// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nk bench`: time every kernel family on one random buffer.
//!
//! Uses wall-clock repetitions from [`kernel_harness::timing`]. The
//! criterion benches under `crates/numeric-kernels/benches` are the
//! statistically careful version of the same measurements.

use kernel_harness::random::{random_f32, seeded_rng};
use kernel_harness::{time_repeated, try_time_repeated, HarnessConfig, TimingStats};
use numeric_kernels as nk;
use numeric_kernels::{Buffer, BufferView};

pub fn execute(config: HarnessConfig, length: Option<usize>) -> anyhow::Result<()> {
    let config = super::with_length(config, length)?;

    super::banner("numeric-kernels · Benchmark Suite");
    println!("  Elements:    {}", config.length);
    println!("  Repetitions: {}", config.repetitions);
    println!("  Warmup:      {}", config.warmup);
    println!("  Seed:        {}", config.seed);
    println!();

    let mut rng = seeded_rng(config.seed);
    let floats = random_f32(config.length, config.random_min, config.random_max, &mut rng)?;
    // Divisors and exp inputs come from tighter ranges so no call errors out.
    let divisors = random_f32(config.length, 1.0, 100.0, &mut rng)?;
    let exp_inputs = random_f32(config.length, config.exp_min, config.exp_max, &mut rng)?;
    let ints: Vec<i32> = divisors.iter().map(|d| *d as i32).collect();

    let mut f_out = vec![0.0f32; config.length];
    let mut i_out = vec![0i32; config.length];
    let reps = config.repetitions;
    let warm = config.warmup;

    let mut results: Vec<TimingStats> = Vec::new();

    // ── Elementwise ────────────────────────────────────────────
    results.push(time_repeated("add_scalar", reps, warm, || {
        nk::add_scalar(&mut Buffer::new(&mut f_out), 1.5)
    }));
    results.push(try_time_repeated("add", reps, warm, || {
        nk::add(&mut Buffer::new(&mut f_out), &BufferView::new(&floats))
    })?);
    results.push(try_time_repeated("div", reps, warm, || {
        nk::div(&mut Buffer::new(&mut f_out), &BufferView::new(&divisors))
    })?);
    results.push(time_repeated("sqrt", reps, warm, || {
        nk::sqrt(&mut Buffer::new(&mut f_out))
    }));

    // ── Mixed-type ─────────────────────────────────────────────
    results.push(try_time_repeated("mul_by_int", reps, warm, || {
        nk::mul_by_int(&mut Buffer::new(&mut f_out), &BufferView::new(&ints))
    })?);
    results.push(try_time_repeated("int_from_float", reps, warm, || {
        nk::int_from_float(&mut Buffer::new(&mut i_out), &BufferView::new(&floats))
    })?);

    // ── Reductions ─────────────────────────────────────────────
    results.push(try_time_repeated("sum", reps, warm, || {
        nk::sum(&BufferView::new(&floats))
    })?);
    results.push(try_time_repeated("max", reps, warm, || {
        nk::max(&BufferView::new(&floats))
    })?);

    // ── Approximations ─────────────────────────────────────────
    results.push(try_time_repeated("exp", reps, warm, || {
        nk::exp(&mut Buffer::new(&mut f_out), &BufferView::new(&exp_inputs))
    })?);
    results.push(try_time_repeated("pow_int^7", reps, warm, || {
        nk::pow_int(&mut Buffer::new(&mut f_out), &BufferView::new(&divisors), 7)
    })?);

    // ── Results Table ──────────────────────────────────────────
    println!(
        "  {:<16} {:>10} {:>10} {:>10} {:>12}",
        "Kernel", "Mean ms", "Min ms", "Max ms", "Melem/s",
    );
    println!("  {}", "-".repeat(62));
    for s in &results {
        let throughput = if s.mean_ms() > 0.0 {
            config.length as f64 / (s.mean_ms() * 1000.0)
        } else {
            f64::INFINITY
        };
        println!(
            "  {:<16} {:>10.4} {:>10.4} {:>10.4} {:>12.1}",
            s.label,
            s.mean_ms(),
            s.min_ms(),
            s.max_ms(),
            throughput,
        );
    }

    Ok(())
}
