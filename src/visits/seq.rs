/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{reset_depths, UNVISITED};
use crate::graphs::DiGraph;
use std::collections::VecDeque;

/// A sequential breadth-first visit computing shortest-hop distances.
///
/// On return, `depths[v]` is the minimal number of arcs from `root` to `v`,
/// or [`UNVISITED`] if `v` is unreachable. The visit is deterministic and
/// runs in O(nodes + arcs) time.
///
/// # Panics
///
/// If `depths.len() != graph.num_nodes()` or `root` is out of range.
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let mut graph = DiGraph::new(4);
/// graph.add_arc(0, 1)?;
/// graph.add_arc(1, 2)?;
/// let mut depths = vec![0; 4];
/// bfs(&graph, 0, &mut depths);
/// assert_eq!(depths, vec![0, 1, 2, UNVISITED]);
/// # Ok(())
/// # }
/// ```
pub fn bfs(graph: &DiGraph, root: usize, depths: &mut [isize]) {
    assert_eq!(
        depths.len(),
        graph.num_nodes(),
        "The distance buffer must have one slot per node"
    );
    assert!(root < graph.num_nodes(), "Root node {} out of range", root);
    reset_depths(depths, root);

    let mut queue = VecDeque::new();
    queue.push_back(root);
    while let Some(node) = queue.pop_front() {
        let next = depths[node] + 1;
        for &succ in graph.successors(node) {
            if depths[succ] == UNVISITED {
                depths[succ] = next;
                queue.push_back(succ);
            }
        }
    }
}
