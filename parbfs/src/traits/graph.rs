/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for graphs with random access to successor lists.

A graph has *n* nodes, identified by the integers in the interval
[0 . . *n*), and associates to each node a list of successors. Undirected
graphs are represented by storing each edge as two opposite arcs, so
[`num_arcs`](RandomAccessGraph::num_arcs) of an undirected graph is twice its
number of edges (loops excepted).

Visits only need to enumerate successors, so graphs are never mutated while
they are being visited and can be shared among threads whenever they are
[`Sync`].

*/

use impl_tools::autoimpl;
use std::rc::Rc;

/// A graph providing random access to successor lists.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>)]
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node
    /// returned by [`successors`](RandomAccessGraph::successors).
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node.
    ///
    /// # Panics
    ///
    /// Implementations panic if `node` is not smaller than
    /// [`num_nodes`](RandomAccessGraph::num_nodes).
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize;

    /// Returns whether there is an arc going from `src` to `dst`.
    ///
    /// Note that the default implementation performs a linear scan.
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.successors(src).into_iter().any(|succ| succ == dst)
    }
}

/// Returns whether every arc of the graph has an opposite arc with the same
/// multiplicity, that is, whether the graph represents an undirected graph.
///
/// For every arc (*u*, *v*) the successor list of *v* is scanned once per
/// distinct *v*, so this function is meant for tests and debug assertions.
pub fn is_symmetric<G: RandomAccessGraph>(graph: &G) -> bool {
    let num_nodes = graph.num_nodes();
    let mut forward = Vec::new();
    let mut backward = Vec::new();
    for node in 0..num_nodes {
        forward.clear();
        backward.clear();
        forward.extend(graph.successors(node));
        forward.sort_unstable();
        for &succ in forward.iter() {
            if succ >= num_nodes {
                return false;
            }
        }
        // Count the arcs pointing back at node from each successor; loops
        // are stored once and count once in both directions
        let mut prev = None;
        for &succ in forward.iter() {
            if prev == Some(succ) {
                continue;
            }
            prev = Some(succ);
            let count = graph
                .successors(succ)
                .into_iter()
                .filter(|&x| x == node)
                .count();
            backward.extend(std::iter::repeat_n(succ, count));
        }
        if forward != backward {
            return false;
        }
    }
    true
}
