// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nk pow`: integer-exponent sweep and per-exponent timing.

use kernel_harness::random::{random_f32, seeded_rng};
use kernel_harness::{pow_accuracy, try_time_repeated, HarnessConfig};
use numeric_kernels::{pow_int, Buffer, BufferView};

/// Bases the accuracy sweep raises to every exponent.
const SWEEP_BASES: [f32; 6] = [-1.0, -0.5, 0.0, 0.5, 1.0, 10.0];

pub fn execute(config: HarnessConfig, min_exponent: i32, max_exponent: i32) -> anyhow::Result<()> {
    if min_exponent > max_exponent {
        anyhow::bail!("--min-exponent {min_exponent} is larger than --max-exponent {max_exponent}");
    }

    super::banner("numeric-kernels · pow Sweep");

    // ── Accuracy Sweep ─────────────────────────────────────────
    let report = pow_accuracy(&SWEEP_BASES, min_exponent..=max_exponent);

    print!("  {:>4} ", "n");
    for b in &report.bases {
        print!(" {:>12}", format!("{b}^n"));
    }
    println!();
    println!("  {}", "-".repeat(6 + 13 * report.bases.len()));

    for row in &report.rows {
        print!("  {:>4} ", row.exponent);
        match &row.outcome {
            Ok(values) => {
                for v in values {
                    print!(" {:>12.6e}", v);
                }
                println!();
            }
            Err(e) => println!(" error: {e}"),
        }
    }
    println!();
    println!(
        "  Rows rejected: {} of {}",
        report.failed_rows(),
        report.rows.len()
    );
    println!(
        "  Cumulative abs error vs f64::powi: {:.6e}",
        report.cumulative_abs_error
    );
    println!();

    // ── Timing ─────────────────────────────────────────────────
    // Bases stay inside (-1, 1) so large exponents remain finite.
    let mut rng = seeded_rng(config.seed);
    let input = random_f32(config.length, -0.99, 0.99, &mut rng)?;
    let mut out = vec![0.0f32; input.len()];

    println!("── Timing ({} elements) ──────────────────────────────", config.length);
    println!("  {:>4} {:>12} {:>12}", "n", "mean ms", "min ms");
    for n in config.pow_exponents() {
        let label = format!("pow_int^{n}");
        let timing = try_time_repeated(&label, config.repetitions, config.warmup, || {
            pow_int(&mut Buffer::new(&mut out), &BufferView::new(&input), n)
        });
        match timing {
            Ok(stats) => println!("  {:>4} {:>12.4} {:>12.4}", n, stats.mean_ms(), stats.min_ms()),
            Err(e) => println!("  {:>4} rejected: {e}", n),
        }
    }

    Ok(())
}
