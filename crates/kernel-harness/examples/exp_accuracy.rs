// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: print the `exp` kernel's error table over `[-30, 30]`.
//!
//! ```bash
//! cargo run -p kernel-harness --example exp_accuracy
//! ```

use kernel_harness::exp_accuracy;
use kernel_harness::random::{jittered_grid, seeded_rng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt().with_env_filter("info").init();

    let xs = jittered_grid(-30, 30, &mut seeded_rng(42));
    let report = exp_accuracy(&xs)?;

    println!(
        "{:>10} {:>14} {:>14} {:>12} {:>12}",
        "x", "kernel", "reference", "abs err", "rel err",
    );
    println!("{}", "-".repeat(66));
    for s in &report.samples {
        println!(
            "{:>10.4} {:>14.6e} {:>14.6e} {:>12.3e} {:>12.3e}",
            s.x, s.approx, s.reference, s.abs_error, s.rel_error,
        );
    }
    println!();
    println!(
        "Average % error compared to std exp: {:.6}",
        report.mean_relative_error_pct
    );

    Ok(())
}
