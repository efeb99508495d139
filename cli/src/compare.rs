/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{GlobalArgs, GraphArgs, NumThreadsArg};
use anyhow::{Context, Result, ensure};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use parbfs::prelude::*;
use parbfs_algo::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Runs the serial and the parallel traversal on a random graph and checks that they visit the same nodes.", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArgs,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,

    #[arg(long)]
    /// Print the visit order of both traversals.
    pub print_order: bool,

    #[arg(long)]
    /// Print the report in JSON format.
    pub json: bool,
}

/// The outcome of a single traversal.
#[derive(Serialize, Debug)]
pub struct TraversalReport {
    /// The number of visited nodes.
    pub visited: usize,
    /// The elapsed time in seconds.
    pub seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<usize>>,
}

/// The outcome of a comparison.
#[derive(Serialize, Debug)]
pub struct Report {
    pub nodes: usize,
    pub arcs: u64,
    pub degree: usize,
    pub seed: u64,
    pub start: usize,
    pub threads: usize,
    pub serial: TraversalReport,
    pub parallel: TraversalReport,
    /// Whether the two traversals visited the same set of nodes.
    pub same_nodes: bool,
}

fn write_order(f: &mut Formatter<'_>, name: &str, order: &Option<Vec<usize>>) -> fmt::Result {
    if let Some(order) = order {
        write!(f, "{name} order:")?;
        for node in order {
            write!(f, " {node}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph: {} nodes, {} arcs, {} edges per node, seed {}",
            self.nodes, self.arcs, self.degree, self.seed
        )?;
        write_order(f, "Serial", &self.serial.order)?;
        write_order(f, "Parallel", &self.parallel.order)?;
        writeln!(
            f,
            "Serial: visited {} nodes from {} in {:.6}s",
            self.serial.visited, self.start, self.serial.seconds
        )?;
        writeln!(
            f,
            "Parallel ({} threads): visited {} nodes from {} in {:.6}s",
            self.threads, self.parallel.visited, self.start, self.parallel.seconds
        )?;
        writeln!(
            f,
            "Same nodes: {}",
            if self.same_nodes { "yes" } else { "no" }
        )
    }
}

/// Returns whether `parallel` contains each node of `serial` exactly once,
/// and no other node.
pub fn same_nodes(serial: &[usize], parallel: &[usize]) -> bool {
    let serial_nodes: HashSet<usize> = serial.iter().copied().collect();
    let parallel_nodes: HashSet<usize> = parallel.iter().copied().collect();
    parallel_nodes.len() == parallel.len() && serial_nodes == parallel_nodes
}

/// Runs both traversals on the graph described by `args`.
pub fn compare(global_args: &GlobalArgs, args: &CliArgs) -> Result<Report> {
    let (graph, seed) = args.graph.build();
    let start = args.graph.start;
    let num_threads = args.num_threads.num_threads;

    let mut pl = progress_logger![item_name = "node"];
    let mut cpl = concurrent_progress_logger![item_name = "node"];
    if let Some(duration) = global_args.log_interval {
        pl.log_interval(duration);
        cpl.log_interval(duration);
    }

    let timer = Instant::now();
    let serial = serial_traverse(&graph, start, &mut pl).context("Serial traversal failed")?;
    let serial_seconds = timer.elapsed().as_secs_f64();

    let timer = Instant::now();
    let parallel = parallel_traverse(&graph, start, num_threads, &mut cpl)
        .context("Parallel traversal failed")?;
    let parallel_seconds = timer.elapsed().as_secs_f64();

    let same = same_nodes(&serial, &parallel);

    Ok(Report {
        nodes: graph.num_nodes(),
        arcs: graph.num_arcs(),
        degree: args.graph.degree,
        seed,
        start,
        threads: num_threads,
        serial: TraversalReport {
            visited: serial.len(),
            seconds: serial_seconds,
            order: args.print_order.then_some(serial),
        },
        parallel: TraversalReport {
            visited: parallel.len(),
            seconds: parallel_seconds,
            order: args.print_order.then_some(parallel),
        },
        same_nodes: same,
    })
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let report = compare(&global_args, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    ensure!(
        report.same_nodes,
        "The serial and the parallel traversal visited different nodes"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, SubCommands};

    fn parse(args: &[&str]) -> (GlobalArgs, CliArgs) {
        let cli = Cli::parse_from(["parbfs", "compare"].iter().chain(args));
        match cli.command {
            SubCommands::Compare(args) => (cli.args, args),
            _ => panic!("Expected the compare command"),
        }
    }

    #[test]
    fn test_compare() -> Result<()> {
        let (global_args, args) = parse(&["-n", "200", "-d", "3", "-s", "1", "-j", "4"]);
        let report = compare(&global_args, &args)?;
        assert!(report.same_nodes);
        assert_eq!(report.nodes, 200);
        assert_eq!(report.seed, 1);
        assert_eq!(report.serial.visited, report.parallel.visited);
        assert!(report.serial.order.is_none());
        Ok(())
    }

    #[test]
    fn test_print_order() -> Result<()> {
        let (global_args, args) = parse(&["-n", "50", "-d", "2", "-s", "3", "--print-order"]);
        let report = compare(&global_args, &args)?;
        let serial = report.serial.order.as_ref().unwrap();
        let parallel = report.parallel.order.as_ref().unwrap();
        assert_eq!(serial[0], 0);
        assert_eq!(serial.len(), parallel.len());

        let text = report.to_string();
        assert!(text.starts_with("Graph: 50 nodes"));
        assert!(text.contains("Serial order: 0"));
        assert!(text.ends_with("Same nodes: yes\n"));
        Ok(())
    }

    #[test]
    fn test_json() -> Result<()> {
        let (global_args, args) = parse(&["-n", "100", "-d", "4", "-s", "5", "--start", "7"]);
        let report = compare(&global_args, &args)?;
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&report)?)?;
        assert_eq!(json["nodes"], 100);
        assert_eq!(json["seed"], 5);
        assert_eq!(json["start"], 7);
        assert_eq!(json["same_nodes"], true);
        assert!(json["serial"].get("order").is_none());
        assert_eq!(json["serial"]["visited"], json["parallel"]["visited"]);
        Ok(())
    }

    #[test]
    fn test_invalid_start() {
        let (global_args, args) = parse(&["-n", "10", "--start", "10"]);
        let err = compare(&global_args, &args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TraversalError>(),
            Some(TraversalError::InvalidStart {
                start: 10,
                num_nodes: 10
            })
        ));
    }

    #[test]
    fn test_same_nodes() {
        assert!(same_nodes(&[0, 1, 2], &[2, 0, 1]));
        assert!(same_nodes(&[], &[]));
        assert!(!same_nodes(&[0, 1, 2], &[0, 1]));
        assert!(!same_nodes(&[0, 1, 2], &[0, 1, 3]));
        // Same length, same set, but a node twice and another missing
        assert!(!same_nodes(&[0, 1, 2], &[0, 1, 1]));
        assert!(!same_nodes(&[0, 1], &[0, 1, 1]));
    }

    #[test]
    fn test_main() -> Result<()> {
        crate::cli_main(["parbfs", "compare", "-n", "100", "-d", "3", "-s", "0", "-j", "2"])
    }
}
