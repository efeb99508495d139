/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{RandomAccessGraph, is_symmetric};
use std::{iter::Copied, slice::Iter};

/// A [`RandomAccessGraph`] implementation based on a vector of vectors.
///
/// Successor lists keep the order in which arcs are added, and the same arc
/// can be added more than once: this is the natural representation of the
/// adjacency lists produced by random generators such as
/// [`UniformDegree`](crate::graphs::random::UniformDegree).
///
/// Undirected graphs are built with [`add_edge`](Self::add_edge) or
/// [`from_edges`](Self::from_edges), which store each edge as two opposite
/// arcs; [`is_symmetric`](Self::is_symmetric) checks that a graph is in
/// this form.
///
/// By setting the feature `serde`, this struct can be serialized using
/// [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with `n` nodes and no arcs.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an isolated node to the graph, together with all missing nodes
    /// with a smaller index, and returns true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an arc from `u` to `v`.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        self.succ[u].push(v);
        self.num_arcs += 1;
    }

    /// Adds an undirected edge between `u` and `v`, that is, an arc from `u`
    /// to `v` and an arc from `v` to `u`.
    ///
    /// A loop is stored as a single arc.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.add_arc(u, v);
        if u != v {
            self.add_arc(v, u);
        }
    }

    /// Adds arcs from an [`IntoIterator`], adding new nodes as needed.
    pub fn add_arcs(&mut self, arcs: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in arcs {
            self.add_node(u.max(v));
            self.add_arc(u, v);
        }
    }

    /// Adds undirected edges from an [`IntoIterator`], adding new nodes as
    /// needed.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in edges {
            self.add_node(u.max(v));
            self.add_edge(u, v);
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of arcs.
    ///
    /// The number of nodes is one plus the largest node appearing in an arc.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_arcs(arcs);
        g
    }

    /// Creates a new undirected graph from an [`IntoIterator`] of edges.
    ///
    /// The number of nodes is one plus the largest node appearing in an edge.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_edges(edges);
        g
    }

    /// Returns whether the graph is symmetric, that is, whether it represents
    /// an undirected graph.
    pub fn is_symmetric(&self) -> bool {
        is_symmetric(self)
    }

    /// Shrinks the capacity of the graph to fit its current size.
    pub fn shrink_to_fit(&mut self) {
        self.succ.shrink_to_fit();
        for s in self.succ.iter_mut() {
            s.shrink_to_fit();
        }
    }
}

impl RandomAccessGraph for VecGraph {
    type Successors<'succ> = Copied<Iter<'succ, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

impl From<Vec<Vec<usize>>> for VecGraph {
    /// Wraps adjacency lists, one per node.
    ///
    /// # Panics
    ///
    /// This method will panic if a successor is greater or equal than the
    /// number of lists.
    fn from(succ: Vec<Vec<usize>>) -> Self {
        let num_nodes = succ.len();
        if let Some(&max) = succ.iter().flatten().max() {
            if max >= num_nodes {
                panic!(
                    "Node {} does not exist (the graph has {} nodes)",
                    max, num_nodes,
                );
            }
        }
        let num_arcs = succ.iter().map(|s| s.len() as u64).sum();
        Self { num_arcs, succ }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_loop() {
        let mut g = VecGraph::empty(2);
        g.add_edge(0, 0);
        g.add_edge(0, 1);
        assert_eq!(g.num_arcs(), 3);
        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![0]);
        assert!(g.is_symmetric());
    }

    #[test]
    #[should_panic(expected = "Node 3 does not exist")]
    fn test_add_arc_missing_node() {
        let mut g = VecGraph::empty(3);
        g.add_arc(0, 3);
    }
}
