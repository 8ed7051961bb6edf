/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits computing shortest-hop distances.
//!
//! Both visits fill a caller-provided distance buffer with the minimal number
//! of arcs from a root node, leaving [`UNVISITED`] in the slots of
//! unreachable nodes. [`bfs`] is the classic single-threaded queue-based
//! visit; [`parallel_bfs`] is a label-correcting relaxation run by a pool of
//! worker threads, whose final buffer is identical to the sequential one for
//! every number of threads.
//!
//! Mismatched buffer lengths and out-of-range roots are programmer errors
//! and panic; there is no recoverable error path.

mod par;
mod seq;

pub use par::parallel_bfs;
pub use seq::bfs;

/// The distance recorded for nodes not (yet) reached by a visit.
pub const UNVISITED: isize = -1;

/// Resets a distance buffer so that only `root` is visited, at distance 0.
pub(crate) fn reset_depths(depths: &mut [isize], root: usize) {
    depths.fill(UNVISITED);
    depths[root] = 0;
}
