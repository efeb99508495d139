/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first traversals returning the visit order.
//!
//! [`serial_traverse`] returns the nodes reachable from a start node in
//! breadth-first order, and it is the reference against which
//! [`parallel_traverse`] is checked: the latter returns the same nodes, each
//! exactly once, but in an order depending on the interleaving of the
//! workers.
//!
//! Each call allocates a fresh visited set and frontier, so traversals are
//! independent, and the graph is only read.
//!
//! ```
//! use dsi_progress_logger::no_logging;
//! use parbfs::graphs::vec_graph::VecGraph;
//! use parbfs_algo::prelude::*;
//!
//! let graph = VecGraph::from_edges([(0, 1), (1, 2), (3, 4)]);
//! let order = serial_traverse(&graph, 0, no_logging![])?;
//! assert_eq!(order, [0, 1, 2]);
//!
//! let mut order = parallel_traverse(&graph, 0, 4, no_logging![])?;
//! order.sort();
//! assert_eq!(order, [0, 1, 2]);
//!
//! assert!(matches!(
//!     serial_traverse(&graph, 5, no_logging![]),
//!     Err(TraversalError::InvalidStart { start: 5, num_nodes: 5 })
//! ));
//! # Ok::<(), TraversalError>(())
//! ```

use crate::visits::{
    Parallel, Sequential,
    breadth_first::{EventPred, ParSync, Seq},
};
use dsi_progress_logger::{ConcurrentProgressLog, ProgressLog};
use no_break::NoBreak;
use parbfs::traits::RandomAccessGraph;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::{cell::RefCell, ops::ControlFlow::Continue};
use thiserror::Error;
use thread_local::ThreadLocal;

/// Errors reported by traversals before they start.
#[derive(Error, Debug)]
pub enum TraversalError {
    /// The start node is not a node of the graph.
    #[error("Start node {start} does not exist (the graph has {num_nodes} nodes)")]
    InvalidStart {
        /// The requested start node.
        start: usize,
        /// The number of nodes of the graph.
        num_nodes: usize,
    },
    /// A parallel traversal was requested with no workers.
    #[error("The number of workers must be positive")]
    InvalidWorkerCount,
    /// The pool of workers could not be created.
    #[error("Cannot build a thread pool with {num_workers} threads")]
    ThreadPool {
        /// The requested number of workers.
        num_workers: usize,
        /// The error reported by Rayon.
        #[source]
        source: ThreadPoolBuildError,
    },
}

fn check_start(graph: &impl RandomAccessGraph, start: usize) -> Result<(), TraversalError> {
    let num_nodes = graph.num_nodes();
    if start >= num_nodes {
        return Err(TraversalError::InvalidStart { start, num_nodes });
    }
    Ok(())
}

/// Returns the nodes reachable from `start` in breadth-first order, using a
/// [sequential visit](Seq).
///
/// The order is deterministic given the graph, as successors are expanded in
/// the order in which they are returned by
/// [`successors`](RandomAccessGraph::successors).
///
/// # Errors
///
/// [`TraversalError::InvalidStart`] if `start` is not a node of the graph.
pub fn serial_traverse(
    graph: impl RandomAccessGraph,
    start: usize,
    pl: &mut impl ProgressLog,
) -> Result<Vec<usize>, TraversalError> {
    check_start(&graph, start)?;

    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Visiting graph sequentially...");

    let mut order = Vec::new();
    Seq::new(graph)
        .visit([start], |event| {
            if let EventPred::Unknown { node, .. } = event {
                order.push(node);
                pl.light_update();
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    Ok(order)
}

/// Returns the nodes reachable from `start`, using a [parallel
/// visit](ParSync) with `num_workers` workers.
///
/// Each reachable node appears exactly once in the result, but the order
/// depends on the interleaving of the workers: nodes emitted by the same
/// worker appear in the order in which that worker expanded them.
///
/// With a single worker the result is the same as that of
/// [`serial_traverse`].
///
/// # Errors
///
/// * [`TraversalError::InvalidStart`] if `start` is not a node of the graph;
/// * [`TraversalError::InvalidWorkerCount`] if `num_workers` is zero;
/// * [`TraversalError::ThreadPool`] if the pool of workers cannot be built.
pub fn parallel_traverse(
    graph: impl RandomAccessGraph + Sync,
    start: usize,
    num_workers: usize,
    pl: &mut impl ConcurrentProgressLog,
) -> Result<Vec<usize>, TraversalError> {
    check_start(&graph, start)?;
    if num_workers == 0 {
        return Err(TraversalError::InvalidWorkerCount);
    }
    let thread_pool = ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .build()
        .map_err(|source| TraversalError::ThreadPool {
            num_workers,
            source,
        })?;
    parallel_traverse_in(graph, start, &thread_pool, pl)
}

/// Returns the nodes reachable from `start`, using a [parallel
/// visit](ParSync) whose workers are the threads of `thread_pool`.
///
/// See [`parallel_traverse`] for the order of the result.
///
/// # Errors
///
/// [`TraversalError::InvalidStart`] if `start` is not a node of the graph.
pub fn parallel_traverse_in(
    graph: impl RandomAccessGraph + Sync,
    start: usize,
    thread_pool: &ThreadPool,
    pl: &mut impl ConcurrentProgressLog,
) -> Result<Vec<usize>, TraversalError> {
    check_start(&graph, start)?;

    log::info!(
        "Visiting graph with {} workers",
        thread_pool.current_num_threads()
    );
    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Visiting graph in parallel...");

    let order = ThreadLocal::<RefCell<Vec<usize>>>::new();
    ParSync::new(graph)
        .par_visit_with(
            [start],
            pl.clone(),
            |pl, event| {
                if let EventPred::Unknown { node, .. } = event {
                    order.get_or_default().borrow_mut().push(node);
                    pl.light_update();
                }
                Continue(())
            },
            thread_pool,
        )
        .continue_value_no_break();

    pl.done();
    Ok(order.into_iter().flat_map(RefCell::into_inner).collect())
}
