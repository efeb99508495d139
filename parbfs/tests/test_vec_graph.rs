/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use parbfs::prelude::*;
use std::rc::Rc;

#[test]
fn test_from_arcs() -> Result<()> {
    let g = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
    assert_eq!(g.num_nodes(), 4);
    assert_eq!(g.num_arcs(), 4);
    assert_eq!(g.outdegree(1), 2);
    assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![2, 3]);
    assert!(g.has_arc(2, 0));
    assert!(!g.has_arc(0, 2));
    assert!(!g.is_symmetric());
    Ok(())
}

#[test]
fn test_from_edges() -> Result<()> {
    let g = VecGraph::from_edges([(0, 1), (1, 2), (4, 3)]);
    assert_eq!(g.num_nodes(), 5);
    assert_eq!(g.num_arcs(), 6);
    assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(g.successors(3).collect::<Vec<_>>(), vec![4]);
    assert!(g.is_symmetric());
    Ok(())
}

#[test]
fn test_successors_keep_insertion_order() -> Result<()> {
    let g = VecGraph::from_edges([(0, 3), (0, 1), (0, 3), (0, 2)]);
    assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![3, 1, 3, 2]);
    assert_eq!(g.successors(3).collect::<Vec<_>>(), vec![0, 0]);
    assert!(g.is_symmetric());
    Ok(())
}

#[test]
fn test_multiplicity_breaks_symmetry() -> Result<()> {
    let mut g = VecGraph::from_edges([(0, 1)]);
    g.add_arc(0, 1);
    assert!(!g.is_symmetric());
    g.add_arc(1, 0);
    assert!(g.is_symmetric());
    Ok(())
}

#[test]
fn test_empty_and_isolated() -> Result<()> {
    let g = VecGraph::new();
    assert_eq!(g.num_nodes(), 0);
    assert!(g.is_symmetric());

    let mut g = VecGraph::empty(1);
    assert_eq!(g.num_nodes(), 1);
    assert_eq!(g.outdegree(0), 0);
    assert!(!g.add_node(0));
    assert!(g.add_node(3));
    assert_eq!(g.num_nodes(), 4);
    Ok(())
}

#[test]
fn test_from_lists() -> Result<()> {
    let g = VecGraph::from(vec![vec![1, 2], vec![0], vec![0]]);
    assert_eq!(g.num_arcs(), 4);
    assert_eq!(g, VecGraph::from_edges([(0, 1), (0, 2)]));
    Ok(())
}

#[test]
#[should_panic(expected = "Node 5 does not exist (the graph has 2 nodes)")]
fn test_from_lists_missing_node() {
    let _ = VecGraph::from(vec![vec![1], vec![0, 5]]);
}

/// A single node whose only successor is not a node.
struct Dangling;

impl RandomAccessGraph for Dangling {
    type Successors<'succ> = std::iter::Once<usize>;

    fn num_nodes(&self) -> usize {
        1
    }

    fn num_arcs(&self) -> u64 {
        1
    }

    fn successors(&self, _node: usize) -> Self::Successors<'_> {
        std::iter::once(5)
    }

    fn outdegree(&self, _node: usize) -> usize {
        1
    }
}

#[test]
fn test_out_of_range_successor_is_not_symmetric() -> Result<()> {
    assert!(!is_symmetric(&Dangling));
    Ok(())
}

#[test]
fn test_references() -> Result<()> {
    fn count<G: RandomAccessGraph>(graph: G) -> usize {
        (0..graph.num_nodes())
            .map(|node| graph.successors(node).into_iter().count())
            .sum()
    }
    let g = VecGraph::from_edges([(0, 1), (1, 2)]);
    assert_eq!(count(&g), 4);
    assert_eq!(count(Rc::new(g.clone())), 4);
    assert_eq!(count(g), 4);
    Ok(())
}
