/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use parbfs::prelude::*;

#[test]
fn test_empty_graph() {
    let graph = DiGraph::new(10);
    assert_eq!(graph.num_nodes(), 10);
    assert_eq!(graph.num_arcs(), 0);
    for u in 0..10 {
        assert_eq!(graph.outdegree(u), 0);
        assert!(graph.successors(u).is_empty());
    }
}

#[test]
fn test_duplicate_arc_counted_once() -> Result<()> {
    let mut graph = DiGraph::new(4);
    assert!(graph.add_arc(0, 1)?);
    assert!(!graph.add_arc(0, 1)?);
    assert_eq!(graph.num_arcs(), 1);
    assert_eq!(graph.successors(0), &[1]);
    Ok(())
}

#[test]
fn test_self_loop_rejected() -> Result<()> {
    let mut graph = DiGraph::new(4);
    assert!(!graph.add_arc(2, 2)?);
    assert_eq!(graph.num_arcs(), 0);
    assert_eq!(graph.outdegree(2), 0);
    Ok(())
}

#[test]
fn test_out_of_range_arc() {
    let mut graph = DiGraph::new(4);
    assert!(graph.add_arc(0, 4).is_err());
    assert!(graph.add_arc(4, 0).is_err());
    assert_eq!(graph.num_arcs(), 0);
}

#[test]
fn test_successors_in_insertion_order() -> Result<()> {
    let mut graph = DiGraph::new(10);
    for v in [7, 3, 9, 1, 4] {
        graph.add_arc(0, v)?;
    }
    assert_eq!(graph.successors(0), &[7, 3, 9, 1, 4]);
    Ok(())
}

#[test]
fn test_arc_count_matches_outdegrees() -> Result<()> {
    let mut graph = DiGraph::new(20);
    for u in 0..20 {
        for v in 0..20 {
            graph.add_arc(u, v)?;
            // Duplicates must not be counted.
            graph.add_arc(u, v)?;
        }
    }
    let total = (0..20).map(|u| graph.outdegree(u) as u64).sum::<u64>();
    assert_eq!(graph.num_arcs(), total);
    assert_eq!(graph.num_arcs(), 20 * 19);
    Ok(())
}
