/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::compare::same_nodes;
use crate::{GlobalArgs, GraphArgs, NumThreadsArg, get_thread_pool};
use anyhow::{Result, ensure};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use parbfs_algo::prelude::*;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "bench", about = "Benchmarks the serial and the parallel traversal on a random graph.", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArgs,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,

    /// Number of repeats (usually to warm up the cache).
    #[arg(short = 'R', long, default_value_t = 1)]
    pub repeats: usize,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(args.repeats > 0, "The number of repeats must be positive");
    let (graph, _) = args.graph.build();
    let start = args.graph.start;
    let thread_pool = get_thread_pool(args.num_threads.num_threads)?;

    let mut pl = progress_logger![item_name = "node"];
    let mut cpl = concurrent_progress_logger![item_name = "node"];
    if let Some(duration) = global_args.log_interval {
        pl.log_interval(duration);
        cpl.log_interval(duration);
    }

    let mut serial_total = Duration::ZERO;
    let mut parallel_total = Duration::ZERO;

    for repeat in 0..args.repeats {
        let timer = Instant::now();
        let serial = serial_traverse(&graph, start, &mut pl)?;
        let serial_elapsed = timer.elapsed();

        let timer = Instant::now();
        let parallel = parallel_traverse_in(&graph, start, &thread_pool, &mut cpl)?;
        let parallel_elapsed = timer.elapsed();

        ensure!(
            same_nodes(&serial, &parallel),
            "The serial and the parallel traversal visited different nodes (repeat {}: {} vs {} nodes)",
            repeat + 1,
            serial.len(),
            parallel.len()
        );

        log::info!(
            "Repeat {}: serial {:.6}s, parallel {:.6}s ({} nodes)",
            repeat + 1,
            serial_elapsed.as_secs_f64(),
            parallel_elapsed.as_secs_f64(),
            serial.len()
        );
        serial_total += serial_elapsed;
        parallel_total += parallel_elapsed;
    }

    let serial_avg = serial_total.as_secs_f64() / args.repeats as f64;
    let parallel_avg = parallel_total.as_secs_f64() / args.repeats as f64;
    log::info!(
        "Average over {} repeats: serial {:.6}s, parallel {:.6}s (speedup {:.3})",
        args.repeats,
        serial_avg,
        parallel_avg,
        serial_avg / parallel_avg
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli_main;

    #[test]
    fn test_bench() -> anyhow::Result<()> {
        cli_main([
            "parbfs", "bench", "-n", "500", "-d", "4", "-s", "2", "-j", "3", "-R", "3",
        ])
    }

    #[test]
    fn test_zero_repeats() {
        assert!(cli_main(["parbfs", "bench", "-n", "10", "-s", "0", "-R", "0"]).is_err());
    }

    #[test]
    fn test_invalid_start() {
        assert!(cli_main(["parbfs", "bench", "-n", "10", "-s", "0", "--start", "20"]).is_err());
    }
}
