/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Generates random undirected graphs in which every node draws a fixed
/// number of neighbors uniformly at random.
///
/// For each node *x*, in order, `edges_per_node` nodes *y* are drawn
/// uniformly from [0 . . *n*); whenever *y* ≠ *x* the undirected edge {*x*,
/// *y*} is added to the graph. Draws equal to *x* are discarded, so no loops
/// are generated, but the same edge can be drawn more than once, in which
/// case it appears more than once in the successor lists.
///
/// Every node is thus the source of about `edges_per_node` edges, and its
/// expected degree is about twice that number.
///
/// The generator uses a [`SmallRng`] seeded with the provided seed, so the
/// same parameters yield the same graph.
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
///
/// let graph = UniformDegree::new(1000, 10, 0).build();
/// assert_eq!(graph.num_nodes(), 1000);
/// assert!(graph.is_symmetric());
/// assert_eq!(graph, UniformDegree::new(1000, 10, 0).build());
/// ```
#[derive(Debug, Clone)]
pub struct UniformDegree {
    n: usize,
    edges_per_node: usize,
    seed: u64,
}

impl UniformDegree {
    /// Creates a new generator, given the number of nodes, the number of
    /// neighbors drawn for each node, and a seed for the [pseudorandom number
    /// generator](SmallRng).
    pub fn new(n: usize, edges_per_node: usize, seed: u64) -> Self {
        Self {
            n,
            edges_per_node,
            seed,
        }
    }

    /// Generates the graph.
    pub fn build(&self) -> VecGraph {
        log::debug!(
            "Generating a random graph with {} nodes and {} edges per node (seed {})",
            self.n,
            self.edges_per_node,
            self.seed
        );
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = VecGraph::empty(self.n);
        for x in 0..self.n {
            for _ in 0..self.edges_per_node {
                let y = rng.random_range(0..self.n);
                if y != x {
                    graph.add_edge(x, y);
                }
            }
        }
        graph
    }
}

impl From<UniformDegree> for VecGraph {
    fn from(generator: UniformDegree) -> Self {
        generator.build()
    }
}
