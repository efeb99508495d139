/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::visits::{
    Parallel,
    breadth_first::{EventPred, FilterArgsPred},
};
use crossbeam_utils::CachePadded;
use parbfs::traits::RandomAccessGraph;
use rayon::ThreadPool;
use std::{
    any::Any,
    collections::VecDeque,
    ops::ControlFlow::{self, Break, Continue},
    panic::{AssertUnwindSafe, catch_unwind, resume_unwind},
    sync::{
        Barrier, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};
use sux::bits::AtomicBitVec;

/// Level-synchronous parallel breadth-first visits sharing a single frontier.
///
/// Every thread of the [`ThreadPool`] passed to the visit becomes a worker,
/// and the visit proceeds in rounds, one for each distance from the roots:
///
/// 1. *Claim*: workers repeatedly take nodes from the shared frontier, a
///    deque protected by a mutex. A worker finding the frontier empty is done
///    with the round, as no node is added to the frontier while a round is in
///    progress.
/// 2. *Expand*: for each claimed node, the worker emits it and scans its
///    successors. A successor is claimed by atomically swapping its bit in
///    the visited set: only the worker observing the transition from false to
///    true appends the successor to its private buffer, so no node is
///    enqueued twice.
/// 3. *Barrier*: all workers wait for each other, so the merge starts only
///    when all nodes at the current distance have been expanded.
/// 4. *Merge*: each worker moves its buffer into the shared frontier, and a
///    second barrier guarantees that the frontier is complete before the next
///    round starts.
///
/// Before the first barrier every worker adds the number of nodes it claimed
/// to a per-round counter; after the barrier all workers read the same total,
/// and if it is zero the next frontier would be empty, so all workers leave
/// the visit together. Counters alternate between even and odd rounds, and
/// the counter of the next round is reset at the first barrier of the
/// current one, when nobody else can be touching it.
///
/// A callback returning [`Break`] stops the visit: workers stop claiming
/// nodes and leave after the first barrier, and the first break value is
/// returned.
///
/// The claim granularity is the number of nodes a worker takes from the
/// frontier for each acquisition of the mutex. A granularity of one makes
/// workers share the frontier as evenly as possible; larger values reduce
/// contention on the mutex.
///
/// # Panics
///
/// If a worker panics (for example, because a callback or filter panics, or
/// because the graph contains a successor that is not a node), the visit is
/// stopped as in the case of a [`Break`], and once all workers have left the
/// first panic is resumed on the calling thread.
///
/// Every thread of the pool must be able to take part in the visit, so the
/// pool must not be busy with other blocking jobs.
///
/// # Examples
///
/// Let's compute the distances from 0. We will be using a
/// [`SyncSlice`](sync_cell_slice::SyncSlice) from the [`sync_cell_slice`] crate
/// to store the distance of each node.
///
/// ```
/// use parbfs_algo::visits::Parallel;
/// use parbfs_algo::visits::breadth_first::{*, self};
/// use parbfs_algo::thread_pool;
/// use parbfs::graphs::vec_graph::VecGraph;
/// use std::ops::ControlFlow::Continue;
/// use sync_cell_slice::SyncSlice;
/// use no_break::NoBreak;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = breadth_first::ParSync::new(&graph);
/// let mut d = [0_usize; 4];
/// let d_sync = d.as_sync_slice();
/// visit.par_visit(
///     [0],
///     |event| {
///         // Set distance from 0
///         if let EventPred::Unknown { node, distance, ..} = event {
///             // There will be exactly one set for each node
///             unsafe { d_sync[node].set(distance) };
///         }
///         Continue(())
///     },
///    &thread_pool![4],
/// ).continue_value_no_break();
///
/// assert_eq!(d, [0, 1, 1, 2]);
/// ```
pub struct ParSync<G: RandomAccessGraph> {
    graph: G,
    granularity: usize,
    visited: AtomicBitVec,
}

impl<G: RandomAccessGraph> ParSync<G> {
    /// Creates a parallel breadth-first visit in which workers claim one node
    /// at a time.
    ///
    /// # Arguments
    ///
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        Self::with_granularity(graph, 1)
    }

    /// Creates a parallel breadth-first visit with a given claim granularity.
    ///
    /// # Arguments
    ///
    /// * `graph`: the graph to visit.
    ///
    /// * `granularity`: the maximum number of nodes claimed from the frontier
    ///   at once.
    ///
    /// # Panics
    ///
    /// This method will panic if `granularity` is zero.
    pub fn with_granularity(graph: G, granularity: usize) -> Self {
        assert!(granularity > 0, "The claim granularity must be positive");
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            granularity,
            visited: AtomicBitVec::new(num_nodes),
        }
    }
}

/// The state shared by the workers of a visit.
struct Shared<E> {
    /// The frontier, containing pairs given by a node and its predecessor.
    frontier: Mutex<VecDeque<(usize, usize)>>,
    barrier: Barrier,
    /// Nodes claimed during a round, indexed by the parity of the round.
    discovered: [CachePadded<AtomicUsize>; 2],
    stopped: CachePadded<AtomicBool>,
    /// The first break value returned by a callback.
    broken: Mutex<Option<E>>,
    /// The payload of the first panic of a worker.
    panicked: Mutex<Option<Box<dyn Any + Send>>>,
}

impl<E> Shared<E> {
    fn new(frontier: VecDeque<(usize, usize)>, num_workers: usize) -> Self {
        Self {
            frontier: Mutex::new(frontier),
            barrier: Barrier::new(num_workers),
            discovered: [
                CachePadded::new(AtomicUsize::new(0)),
                CachePadded::new(AtomicUsize::new(0)),
            ],
            stopped: CachePadded::new(AtomicBool::new(false)),
            broken: Mutex::new(None),
            panicked: Mutex::new(None),
        }
    }

    fn frontier(&self) -> MutexGuard<'_, VecDeque<(usize, usize)>> {
        self.frontier.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves up to `granularity` nodes from the frontier to `claimed`,
    /// returning false if the frontier was empty.
    fn claim(&self, granularity: usize, claimed: &mut Vec<(usize, usize)>) -> bool {
        let mut frontier = self.frontier();
        let len = granularity.min(frontier.len());
        claimed.extend(frontier.drain(..len));
        len != 0
    }

    fn stop(&self, err: E) {
        let mut broken = self.broken.lock().unwrap_or_else(PoisonError::into_inner);
        if broken.is_none() {
            *broken = Some(err);
        }
        self.stopped.store(true, Ordering::Relaxed);
    }

    fn panic(&self, payload: Box<dyn Any + Send>) {
        let mut panicked = self.panicked.lock().unwrap_or_else(PoisonError::into_inner);
        if panicked.is_none() {
            *panicked = Some(payload);
        }
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Records the outcome of a step run by a worker, stopping the visit on
    /// a break or a panic.
    fn record(&self, outcome: std::thread::Result<ControlFlow<E, ()>>) {
        match outcome {
            Ok(Continue(())) => {}
            Ok(Break(err)) => self.stop(err),
            Err(payload) => self.panic(payload),
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Returns the first break value, resuming the first panic of a worker,
    /// if any.
    fn into_break(self) -> Option<E> {
        if let Some(payload) = self
            .panicked
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
        {
            resume_unwind(payload);
        }
        self.broken
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G: RandomAccessGraph + Sync> ParSync<G> {
    /// The loop run by each worker.
    fn work<T, E, C, F>(&self, shared: &Shared<E>, mut init: T, callback: &C, filter: &F)
    where
        C: Fn(&mut T, EventPred) -> ControlFlow<E, ()>,
        F: Fn(&mut T, FilterArgsPred) -> bool,
    {
        let mut claimed = Vec::with_capacity(self.granularity);
        // Nodes claimed by this worker in the current round
        let mut local = Vec::new();
        let mut distance = 0;

        loop {
            let parity = distance % 2;
            // A panicking worker must still reach the barrier
            shared.record(catch_unwind(AssertUnwindSafe(|| {
                self.expand(
                    shared,
                    &mut init,
                    callback,
                    filter,
                    distance,
                    &mut claimed,
                    &mut local,
                )
            })));
            shared.discovered[parity].fetch_add(local.len(), Ordering::Relaxed);

            // All nodes at this distance have been expanded
            if shared.barrier.wait().is_leader() {
                shared.discovered[1 - parity].store(0, Ordering::Relaxed);
            }

            // Neither value can change until the next barrier
            let nodes = shared.discovered[parity].load(Ordering::Relaxed);
            if nodes == 0 || shared.is_stopped() {
                break;
            }

            shared.frontier().extend(local.drain(..));
            distance += 1;

            // The frontier now contains exactly the nodes at this distance
            if shared.barrier.wait().is_leader() {
                log::debug!("{} nodes at distance {}", nodes, distance);
                shared.record(catch_unwind(AssertUnwindSafe(|| {
                    callback(&mut init, EventPred::FrontierSize { distance, nodes })
                })));
            }
        }
    }

    /// Claims and expands nodes until the frontier is empty.
    #[allow(clippy::too_many_arguments)]
    fn expand<T, E, C, F>(
        &self,
        shared: &Shared<E>,
        init: &mut T,
        callback: &C,
        filter: &F,
        distance: usize,
        claimed: &mut Vec<(usize, usize)>,
        local: &mut Vec<(usize, usize)>,
    ) -> ControlFlow<E, ()>
    where
        C: Fn(&mut T, EventPred) -> ControlFlow<E, ()>,
        F: Fn(&mut T, FilterArgsPred) -> bool,
    {
        while !shared.is_stopped() && shared.claim(self.granularity, claimed) {
            for (node, pred) in claimed.drain(..) {
                callback(
                    init,
                    EventPred::Unknown {
                        node,
                        pred,
                        distance,
                    },
                )?;

                for succ in self.graph.successors(node) {
                    if self.visited.get(succ, Ordering::Relaxed) {
                        callback(init, EventPred::Known { node: succ, pred: node })?;
                    } else if filter(
                        init,
                        FilterArgsPred {
                            node: succ,
                            pred: node,
                            distance: distance + 1,
                        },
                    ) {
                        if !self.visited.swap(succ, true, Ordering::Relaxed) {
                            local.push((succ, node));
                        } else {
                            // Another worker claimed it after our check
                            callback(init, EventPred::Known { node: succ, pred: node })?;
                        }
                    }
                }
            }
        }

        Continue(())
    }
}

impl<G: RandomAccessGraph + Sync> Parallel<EventPred> for ParSync<G> {
    fn par_visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T: Clone + Send + Sync,
        E: Send,
        C: Fn(&mut T, EventPred) -> ControlFlow<E, ()> + Sync,
        F: Fn(&mut T, FilterArgsPred) -> bool + Sync,
    >(
        &mut self,
        roots: R,
        mut init: T,
        callback: C,
        filter: F,
        thread_pool: &ThreadPool,
    ) -> ControlFlow<E, ()> {
        let mut frontier = VecDeque::new();

        for root in roots {
            if self.visited.get(root, Ordering::Relaxed)
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
            if frontier.is_empty() {
                callback(&mut init, EventPred::Init {})?;
            }

            self.visited.set(root, true, Ordering::Relaxed);
            frontier.push_back((root, root));
        }

        if frontier.is_empty() {
            return Continue(());
        }

        callback(
            &mut init,
            EventPred::FrontierSize {
                distance: 0,
                nodes: frontier.len(),
            },
        )?;

        let shared = Shared::new(frontier, thread_pool.current_num_threads());
        let visit = &*self;
        thread_pool.broadcast(|_| visit.work(&shared, init.clone(), &callback, &filter));

        if let Some(err) = shared.into_break() {
            return Break(err);
        }

        callback(&mut init, EventPred::Done {})
    }

    fn reset(&mut self) {
        self.visited.fill(false, Ordering::Relaxed);
    }
}
