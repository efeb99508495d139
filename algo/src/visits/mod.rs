/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Implementations of [sequential](Sequential) and [parallel](Parallel) visits
//! depend on a type parameter `A` implementing the trait [`Event`]; they
//! provide visit methods accepting a callback function with argument `A` and
//! returning a `ControlFlow<E, ()>`, where `E` is a type parameter of the visit
//! method: for example, `E` might be [`Interrupted`] when the visit can be
//! stopped from the outside, or [`Infallible`](std::convert::Infallible) if the
//! visit always runs to completion.
//!
//! If a callback returns a [`Break`](ControlFlow::Break), the visit will be
//! interrupted, and the [`Break`](ControlFlow::Break) value will be the return
//! value of the visit method; for uninterruptible visits we suggest to use the
//! [`no-break`](https://crates.io/crates/no-break) crate and its
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break)
//! method on the result to let type inference run smoothly.
//!
//! Sequential visits return to the caller as soon as a callback breaks.
//! Parallel visits stop handing out work, but workers still complete the
//! expansion of the node they are processing and meet at the next
//! synchronization point before returning. If several callbacks break, the
//! value returned is the first one recorded.
//!
//! The signature of callbacks reflects the difference between the two kinds of
//! visits ([`FnMut`] for the sequential case vs. [`Fn`] + [`Sync`] for the
//! parallel case).
//!
//! Additionally, implementations accept a filter function accepting an
//! [`Event::FilterArgs`] that will be called when a new node is discovered. If
//! the filter returns false, the node will be ignored, that is, not even marked
//! as known. Note that in case of parallel visits the filter might be called
//! multiple times on the same node (and with a different predecessor) due to
//! race conditions.
//!
//! All visits have also methods accepting an `init` item similarly to the
//! [Rayon](rayon) [`map_with`](rayon::iter::ParallelIterator::map_with) method.
//! For parallel visits, the item will be cloned once per worker.
//!
//! Visits must provide a `reset` method that makes it possible to reuse the
//! visit. Without a reset, nodes visited by a previous call are considered
//! known, so a sequence of visits from different roots enumerates the
//! connected components of an undirected graph.

pub mod breadth_first;

use std::ops::ControlFlow;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// The visit was interrupted.
#[error("The visit was interrupted")]
pub struct Interrupted;

/// Types usable as arguments for the callbacks in visits.
///
/// Arguments are usually enums in which variants represent visit events.
/// Each variant then contains additional data related to the specific event.
///
/// The associated type [`Event::FilterArgs`] is the type of the arguments
/// passed to the filter associated with the visit.
pub trait Event {
    /// The type passed as input to the filter.
    type FilterArgs;
}

/// A convenience type alias for the filter arguments of an event.
///
/// It is useful to write match patterns using destructuring syntax.
pub type FilterArgs<A> = <A as Event>::FilterArgs;

/// A sequential visit.
///
/// Implementation of this trait must provide the
/// [`visit_filtered_with`](Sequential::visit_filtered_with) method, which
/// should perform a visit of a graph starting from a given set of nodes. For
/// a [breadth-first visit](breadth_first) the set of nodes is the initial
/// queue.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified nodes with an initialization value
    /// and a filter function.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `init`: a value the will be passed to the callback function.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function.
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified nodes with a filter function.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered_with(roots, (), |(), a| callback(a), |(), a| filter(a))
    }

    /// Visits the graph from the specified nodes with an initialization value.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    fn visit_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered_with(roots, init, callback, |_, _| true)
    }

    /// Visits the graph from the specified nodes.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}

/// A parallel visit.
///
/// Implementation of this trait must provide the
/// [`par_visit_filtered_with`](Parallel::par_visit_filtered_with) method, which
/// should perform a parallel visit of a graph starting from a given set of
/// nodes using the threads of the provided [`ThreadPool`](rayon::ThreadPool).
pub trait Parallel<A: Event> {
    /// Visits the graph from the specified nodes with an initialization value
    /// and a filter function.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `init`: a value the will be cloned and passed to the callback
    ///   function.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function.
    ///
    /// * `thread_pool`: The thread pool to use for parallel computation.
    fn par_visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T: Clone + Send + Sync,
        E: Send,
        C: Fn(&mut T, A) -> ControlFlow<E, ()> + Sync,
        F: Fn(&mut T, A::FilterArgs) -> bool + Sync,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
        filter: F,
        thread_pool: &rayon::ThreadPool,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified nodes with a filter function.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    fn par_visit_filtered<
        R: IntoIterator<Item = usize>,
        E: Send,
        C: Fn(A) -> ControlFlow<E, ()> + Sync,
        F: Fn(A::FilterArgs) -> bool + Sync,
    >(
        &mut self,
        roots: R,
        callback: C,
        filter: F,
        thread_pool: &rayon::ThreadPool,
    ) -> ControlFlow<E, ()> {
        self.par_visit_filtered_with(
            roots,
            (),
            |(), a| callback(a),
            |(), a| filter(a),
            thread_pool,
        )
    }

    /// Visits the graph from the specified nodes with an initialization value.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    fn par_visit_with<
        R: IntoIterator<Item = usize>,
        T: Clone + Send + Sync,
        E: Send,
        C: Fn(&mut T, A) -> ControlFlow<E, ()> + Sync,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
        thread_pool: &rayon::ThreadPool,
    ) -> ControlFlow<E, ()> {
        self.par_visit_filtered_with(roots, init, callback, |_, _| true, thread_pool)
    }

    /// Visits the graph from the specified nodes.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    fn par_visit<R: IntoIterator<Item = usize>, E: Send, C: Fn(A) -> ControlFlow<E, ()> + Sync>(
        &mut self,
        roots: R,
        callback: C,
        thread_pool: &rayon::ThreadPool,
    ) -> ControlFlow<E, ()> {
        self.par_visit_filtered(roots, callback, |_| true, thread_pool)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
