/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventPred`]. The associated filter argument type is [`FilterArgsPred`].
//!
//! Nodes are *emitted*, that is, passed to the callback with an
//! [`Unknown`](EventPred::Unknown) event, when they are taken from the
//! frontier and their successors are about to be expanded. The sequence of
//! emitted nodes is the visit order: for [`Seq`] it is the classical
//! queue order, whereas for [`ParSync`] only the set of emitted nodes and
//! their distances are determined, as workers interleave arbitrarily.
//!
//! Since [`EventPred`] contains the predecessor of the visited node, all
//! post-initialization visit events can be interpreted as arc events. The
//! only exception is the [`Unknown`](EventPred::Unknown) event at the roots,
//! whose predecessor is the root itself.

mod seq;
pub use seq::*;

mod par_sync;
pub use par_sync::*;

/// Types of callback events generated during breadth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// This event should be used to set up state at the start of the visit.
    ///
    /// Note that this event will not happen if the visit is empty, that
    /// is, all of the roots are already visited or filtered.
    Init {},
    /// The node is being expanded: it has been discovered through a new
    /// tree arc, unless all node fields are equal to the root.
    ///
    /// This event happens exactly once for each node reachable from the roots
    /// (and not filtered).
    Unknown {
        /// The current node.
        node: usize,
        /// The predecessor of [node](`EventPred::Unknown::node`).
        pred: usize,
        /// The distance of the current node from the roots.
        distance: usize,
    },
    /// The node has been discovered before: we are traversing a non-tree arc.
    ///
    /// Note however that in parallel contexts it might happen that callback
    /// with event [`Unknown`](`EventPred::Unknown`) has not been called yet by
    /// the worker who will expand the node.
    Known {
        /// The current node.
        node: usize,
        /// The predecessor of [node](`EventPred::Known::node`).
        pred: usize,
    },
    /// The number of nodes at a given distance is known.
    ///
    /// This event happens once for each distance, as soon as the whole
    /// frontier at that distance has been discovered; in parallel visits it
    /// might interleave with the [`Unknown`](`EventPred::Unknown`) events of
    /// the nodes at that distance.
    FrontierSize {
        /// The distance of the nodes in the frontier.
        distance: usize,
        /// The number of nodes in the frontier.
        nodes: usize,
    },
    /// The visit has been completed.
    ///
    /// Note that this event will not happen if the visit is empty (that is, if
    /// the roots have already been visited) or if the visit is stopped by a
    /// callback returning an error.
    Done {},
}

/// Filter arguments for breadth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The current node.
    pub node: usize,
    /// The predecessor of [node](`Self::node`).
    pub pred: usize,
    /// The distance of the current node from the roots.
    pub distance: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
