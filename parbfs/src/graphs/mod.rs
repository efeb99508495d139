/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of graphs.

pub mod random;
pub mod vec_graph;

pub mod prelude {
    pub use super::random::UniformDegree;
    pub use super::vec_graph::VecGraph;
}
