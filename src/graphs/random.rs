/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::DiGraph;
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates a random directed graph with exactly `num_nodes` nodes and
/// `num_arcs` arcs, without duplicate arcs or self-loops.
///
/// The nodes are first chained along a random permutation, so the graph
/// always contains a Hamiltonian path (and a Hamiltonian cycle as soon as
/// `num_arcs >= num_nodes`); then every node is topped up to the average
/// outdegree, and the remaining arcs are sampled uniformly. The construction
/// is deterministic given the state of `rng`.
///
/// # Panics
///
/// If `num_nodes < 2` or `num_arcs` is not in
/// `[num_nodes - 1 .. num_nodes * (num_nodes - 1)]`.
pub fn random_digraph(rng: &mut SmallRng, num_nodes: usize, num_arcs: u64) -> Result<DiGraph> {
    assert!(num_nodes > 1, "The graph must have at least two nodes");
    assert!(
        num_arcs >= (num_nodes - 1) as u64,
        "Too few arcs to chain all nodes"
    );
    assert!(
        num_arcs <= num_nodes as u64 * (num_nodes - 1) as u64,
        "Too many arcs for a simple directed graph"
    );

    let mut graph = DiGraph::new(num_nodes);

    let mut perm = (0..num_nodes).collect::<Vec<_>>();
    perm.shuffle(rng);
    for window in perm.windows(2) {
        graph.add_arc(window[0], window[1])?;
    }
    if num_arcs >= num_nodes as u64 {
        graph.add_arc(perm[num_nodes - 1], perm[0])?;
    }

    // Top up every node to the average outdegree so the arcs are not
    // concentrated by the rejection sampling below.
    let want_out = (num_arcs / num_nodes as u64) as usize;
    let want_out = want_out.min(num_nodes - 1);
    for u in 0..num_nodes {
        while graph.outdegree(u) < want_out {
            graph.add_arc(u, rng.random_range(0..num_nodes))?;
        }
    }

    while graph.num_arcs() < num_arcs {
        graph.add_arc(
            rng.random_range(0..num_nodes),
            rng.random_range(0..num_nodes),
        )?;
    }

    debug_assert_eq!(graph.num_arcs(), num_arcs);
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_exact_arc_count() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(0);
        let graph = random_digraph(&mut rng, 100, 500)?;
        assert_eq!(graph.num_nodes(), 100);
        assert_eq!(graph.num_arcs(), 500);
        let total = (0..100).map(|u| graph.outdegree(u) as u64).sum::<u64>();
        assert_eq!(total, 500);
        Ok(())
    }

    #[test]
    fn test_no_self_loops() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(1);
        let graph = random_digraph(&mut rng, 50, 400)?;
        for u in 0..50 {
            assert!(!graph.successors(u).contains(&u));
        }
        Ok(())
    }
}
