// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nk exp`: accuracy and timing of the series `exp` against `f32::exp`.

use kernel_harness::random::{jittered_grid, random_f32, seeded_rng};
use kernel_harness::{exp_accuracy, time_repeated, try_time_repeated, HarnessConfig};
use numeric_kernels::{exp, Buffer, BufferView};

pub fn execute(config: HarnessConfig, length: Option<usize>, json: bool) -> anyhow::Result<()> {
    let config = super::with_length(config, length)?;
    let mut rng = seeded_rng(config.seed);

    // One sample per integer step across the configured range.
    let xs = jittered_grid(
        config.exp_min.floor() as i32,
        config.exp_max.ceil() as i32,
        &mut rng,
    );
    let report = exp_accuracy(&xs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    super::banner("numeric-kernels · exp Accuracy");

    // ── Accuracy Table ─────────────────────────────────────────
    println!(
        "  {:>10} {:>14} {:>14} {:>12} {:>12}",
        "x", "kernel", "std", "abs err", "rel err",
    );
    println!("  {}", "-".repeat(66));
    for s in &report.samples {
        println!(
            "  {:>10.4} {:>14.6e} {:>14.6e} {:>12.3e} {:>12.3e}",
            s.x, s.approx, s.reference, s.abs_error, s.rel_error,
        );
    }
    println!();
    println!(
        "  Average % error compared to std exp: {:.6}",
        report.mean_relative_error_pct
    );
    println!("  Worst relative error:               {:.3e}", report.max_relative_error);
    println!();

    // ── Timing ─────────────────────────────────────────────────
    let input = random_f32(config.length, config.exp_min, config.exp_max, &mut rng)?;
    let mut out = vec![0.0f32; input.len()];

    let kernel = try_time_repeated("kernel exp", config.repetitions, config.warmup, || {
        exp(&mut Buffer::new(&mut out), &BufferView::new(&input))
    })?;
    let reference = time_repeated("std exp", config.repetitions, config.warmup, || {
        for (o, x) in out.iter_mut().zip(&input) {
            *o = x.exp();
        }
    });

    println!("── Timing ({} elements) ──────────────────────────────", config.length);
    println!("  {}", kernel.summary());
    println!("  {}", reference.summary());
    if reference.mean_ms() > 0.0 {
        println!(
            "  Kernel / std:  {:.2}x",
            kernel.mean_ms() / reference.mean_ms()
        );
    }

    Ok(())
}
