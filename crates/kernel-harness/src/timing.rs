// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Wall-clock timing for kernel calls.
//!
//! [`timed`] wraps a single call and logs its duration; [`TimingStats`]
//! aggregates repeated measurements of the same call.

use std::time::{Duration, Instant};

/// Runs `f`, logs the elapsed milliseconds, and returns both.
pub fn timed<R>(label: &str, f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    tracing::info!(function = label, "Function Time = {:6.3}ms", as_ms(elapsed));
    (result, elapsed)
}

/// Runs `f` `repetitions` times and collects the durations.
///
/// With `warmup`, one extra untimed call runs first.
pub fn time_repeated<R>(
    label: &str,
    repetitions: usize,
    warmup: bool,
    mut f: impl FnMut() -> R,
) -> TimingStats {
    if warmup {
        std::hint::black_box(f());
    }
    let mut stats = TimingStats::new(label);
    for _ in 0..repetitions {
        let start = Instant::now();
        std::hint::black_box(f());
        stats.record(start.elapsed());
    }
    tracing::debug!("{}", stats.summary());
    stats
}

/// Like [`time_repeated`], for calls that can fail.
///
/// Stops at the first `Err` (warmup included) and returns it, so a
/// rejected call is never reported as a timing.
pub fn try_time_repeated<R, E>(
    label: &str,
    repetitions: usize,
    warmup: bool,
    mut f: impl FnMut() -> Result<R, E>,
) -> Result<TimingStats, E> {
    if warmup {
        std::hint::black_box(f()?);
    }
    let mut stats = TimingStats::new(label);
    for _ in 0..repetitions {
        let start = Instant::now();
        let value = f()?;
        stats.record(start.elapsed());
        std::hint::black_box(value);
    }
    tracing::debug!("{}", stats.summary());
    Ok(stats)
}

/// Repeated timings of one labelled operation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TimingStats {
    /// What was timed.
    pub label: String,
    /// One entry per timed call.
    pub samples: Vec<Duration>,
}

impl TimingStats {
    /// Creates an empty container.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            samples: Vec::new(),
        }
    }

    /// Records one measurement.
    pub fn record(&mut self, elapsed: Duration) {
        self.samples.push(elapsed);
    }

    /// Mean duration in milliseconds, or 0 with no samples.
    pub fn mean_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: Duration = self.samples.iter().sum();
        as_ms(total) / self.samples.len() as f64
    }

    /// Fastest sample in milliseconds.
    pub fn min_ms(&self) -> f64 {
        self.samples.iter().min().map_or(0.0, |d| as_ms(*d))
    }

    /// Slowest sample in milliseconds.
    pub fn max_ms(&self) -> f64 {
        self.samples.iter().max().map_or(0.0, |d| as_ms(*d))
    }

    /// Returns a one-line summary suitable for CLI output.
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.3}ms mean over {} runs (min {:.3}ms, max {:.3}ms)",
            self.label,
            self.mean_ms(),
            self.samples.len(),
            self.min_ms(),
            self.max_ms(),
        )
    }
}

fn as_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
