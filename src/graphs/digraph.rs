/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::succ_vec::SuccVec;
use anyhow::{ensure, Result};

/// A mutable directed graph with a fixed number of nodes, stored as one
/// [`SuccVec`] per node.
///
/// Arcs are inserted with [`add_arc`](DiGraph::add_arc), which rejects
/// duplicates and self-loops, so successor lists are duplicate-free and the
/// arc counter always equals the sum of the outdegrees. After construction
/// the graph is meant to be read-only: a `&DiGraph` can be shared freely
/// across threads during a visit.
#[derive(Debug)]
pub struct DiGraph {
    /// For each node, its list of successors.
    succ: Box<[SuccVec]>,
    /// The number of arcs in the graph.
    num_arcs: u64,
}

impl DiGraph {
    /// Creates a new graph with `num_nodes` nodes and no arcs.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            succ: (0..num_nodes).map(|_| SuccVec::new()).collect(),
            num_arcs: 0,
        }
    }

    /// Returns the number of nodes in the graph.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of arcs in the graph.
    #[inline(always)]
    pub fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    /// Returns the outdegree of a node.
    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    /// Returns the successors of a node, in insertion order.
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &[usize] {
        self.succ[node].as_slice()
    }

    /// Adds the arc `(u, v)` if it is not already present, returning whether
    /// the graph changed.
    ///
    /// Self-loops are rejected as a no-op returning `Ok(false)`; duplicates
    /// are detected by a linear scan of the successors of `u`, so insertion
    /// is O(outdegree).
    ///
    /// # Errors
    ///
    /// If `u` or `v` is not smaller than the number of nodes.
    pub fn add_arc(&mut self, u: usize, v: usize) -> Result<bool> {
        let num_nodes = self.num_nodes();
        ensure!(
            u < num_nodes && v < num_nodes,
            "Invalid arc ({}, {}): the graph has {} nodes",
            u,
            v,
            num_nodes
        );
        if u == v {
            return Ok(false);
        }
        let succ = &mut self.succ[u];
        if succ.as_slice().contains(&v) {
            return Ok(false);
        }
        succ.push(v);
        self.num_arcs += 1;
        Ok(true)
    }
}
