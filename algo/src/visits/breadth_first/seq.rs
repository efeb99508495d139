/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::visits::{
    Sequential,
    breadth_first::{EventPred, FilterArgsPred},
};
use parbfs::traits::RandomAccessGraph;
use std::{collections::VecDeque, ops::ControlFlow, ops::ControlFlow::Continue};
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This is the textbook algorithm: roots are marked as known and enqueued;
/// then nodes are repeatedly dequeued, emitted, and their unknown successors
/// are marked and enqueued. Distances are obtained without storing them by
/// counting how many nodes of the current level are still in the queue.
///
/// Given a graph and a set of roots the visit order is deterministic, and it
/// is used as the reference against which the [parallel visit](super::ParSync)
/// is checked.
///
/// # Examples
///
/// Let's compute the distances from 0:
///
/// ```
/// use parbfs_algo::visits::*;
/// use parbfs::graphs::vec_graph::VecGraph;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit.visit(
///     [0],
///     |event| {
///          // Set distance from 0
///          if let breadth_first::EventPred::Unknown { node, distance, .. } = event {
///              d[node] = distance;
///          }
///          Continue(())
///     },
/// ).continue_value_no_break();
///
/// assert_eq!(d, [0, 1, 1, 2]);
/// ```
///
/// Here instead we collect the ball of radius one around node 0 by refusing,
/// in the filter, nodes farther than one from the root:
///
/// ```
/// use parbfs_algo::visits::*;
/// use parbfs::graphs::vec_graph::VecGraph;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (2, 4)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut ball = vec![];
/// visit.visit_filtered(
///     [0],
///     |event| {
///         if let breadth_first::EventPred::Unknown { node, .. } = event {
///             ball.push(node);
///         }
///         Continue(())
///     },
///     |breadth_first::FilterArgsPred { distance, .. }| distance <= 1,
/// ).continue_value_no_break();
/// assert_eq!(ball, [0, 1, 3]);
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    /// The visit queue, containing pairs given by a node and its predecessor.
    queue: VecDeque<(usize, usize)>,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }
}

impl<G: RandomAccessGraph> Sequential<EventPred> for Seq<G> {
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventPred) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, FilterArgsPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.queue.clear();

        for root in roots {
            if self.visited[root]
                || !filter(
                    &mut init,
                    FilterArgsPred {
                        node: root,
                        pred: root,
                        distance: 0,
                    },
                )
            {
                continue;
            }

            // We call the init event only if there are some non-filtered roots
            if self.queue.is_empty() {
                callback(&mut init, EventPred::Init {})?;
            }

            self.visited.set(root, true);
            self.queue.push_back((root, root));
        }

        if self.queue.is_empty() {
            return Continue(());
        }

        let mut distance = 0;
        // Nodes at the current distance still in the queue
        let mut level_left = self.queue.len();
        callback(
            &mut init,
            EventPred::FrontierSize {
                distance,
                nodes: level_left,
            },
        )?;

        while let Some((node, pred)) = self.queue.pop_front() {
            callback(
                &mut init,
                EventPred::Unknown {
                    node,
                    pred,
                    distance,
                },
            )?;

            for succ in self.graph.successors(node) {
                if self.visited[succ] {
                    callback(&mut init, EventPred::Known { node: succ, pred: node })?;
                } else if filter(
                    &mut init,
                    FilterArgsPred {
                        node: succ,
                        pred: node,
                        distance: distance + 1,
                    },
                ) {
                    self.visited.set(succ, true);
                    self.queue.push_back((succ, node));
                }
            }

            level_left -= 1;
            if level_left == 0 && !self.queue.is_empty() {
                // The queue now contains exactly the next level
                distance += 1;
                level_left = self.queue.len();
                callback(
                    &mut init,
                    EventPred::FrontierSize {
                        distance,
                        nodes: level_left,
                    },
                )?;
            }
        }

        callback(&mut init, EventPred::Done {})
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
