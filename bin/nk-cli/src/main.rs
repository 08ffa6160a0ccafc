// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nk
//!
//! Command-line harness for the numeric-kernels library.
//!
//! ## Usage
//! ```bash
//! # Walk every kernel family on small fixed inputs
//! nk demo
//!
//! # exp accuracy table and timing vs std
//! nk exp --length 1000
//!
//! # Integer-power sweep and per-exponent timing
//! nk pow
//!
//! # Time every kernel family on one random buffer
//! nk bench --config harness.toml
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nk",
    about = "Accuracy and timing harness for allocation-free numeric kernels",
    version,
    author
)]
struct Cli {
    /// Path to a TOML harness configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every kernel family on the reference inputs and print the results.
    Demo,

    /// Compare the exp kernel with std and time both.
    Exp {
        /// Buffer length for the timing run (overrides the config file).
        #[arg(short, long)]
        length: Option<usize>,

        /// Print the accuracy report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Sweep integer exponents through the pow kernel.
    Pow {
        /// Smallest exponent of the accuracy sweep.
        #[arg(long, default_value_t = -10, allow_hyphen_values = true)]
        min_exponent: i32,

        /// Largest exponent of the accuracy sweep (inclusive).
        #[arg(long, default_value_t = 10)]
        max_exponent: i32,
    },

    /// Time every kernel family on a random buffer.
    Bench {
        /// Buffer length (overrides the config file).
        #[arg(short, long)]
        length: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Demo => commands::demo::execute(),
        Commands::Exp { length, json } => commands::exp::execute(config, length, json),
        Commands::Pow {
            min_exponent,
            max_exponent,
        } => commands::pow::execute(config, min_exponent, max_exponent),
        Commands::Bench { length } => commands::bench::execute(config, length),
    }
}
