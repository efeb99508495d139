/*
 * SPDX-FileCopyrightText: 2026 The parbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use parbfs::prelude::*;

#[test]
fn test_deterministic() -> Result<()> {
    let g0 = UniformDegree::new(1000, 10, 42).build();
    let g1 = UniformDegree::new(1000, 10, 42).build();
    assert_eq!(g0, g1);
    let g2 = UniformDegree::new(1000, 10, 43).build();
    assert_ne!(g0, g2);
    Ok(())
}

#[test]
fn test_symmetric() -> Result<()> {
    for seed in 0..5 {
        let g = UniformDegree::new(200, 4, seed).build();
        assert!(g.is_symmetric());
    }
    Ok(())
}

#[test]
fn test_arc_count() -> Result<()> {
    let n = 1000;
    let edges_per_node = 10;
    let g: VecGraph = UniformDegree::new(n, edges_per_node, 0).into();
    // Each draw adds two arcs unless it hits the source node
    let max_arcs = (2 * n * edges_per_node) as u64;
    assert!(g.num_arcs() <= max_arcs);
    assert_eq!(g.num_arcs() % 2, 0);
    // About one draw in n is discarded
    assert!(g.num_arcs() > max_arcs * 9 / 10);
    Ok(())
}

#[test]
fn test_empty() -> Result<()> {
    let g = UniformDegree::new(0, 10, 0).build();
    assert_eq!(g.num_nodes(), 0);
    let g = UniformDegree::new(10, 0, 0).build();
    assert_eq!(g.num_nodes(), 10);
    assert_eq!(g.num_arcs(), 0);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<()> {
    let g = UniformDegree::new(20, 3, 7).build();
    let json = serde_json::to_string(&g)?;
    let h: VecGraph = serde_json::from_str(&json)?;
    assert_eq!(g, h);
    Ok(())
}
