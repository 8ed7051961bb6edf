/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph containers.
//!
//! [`DiGraph`] is a mutable directed graph with one successor list per node;
//! successor lists are [`SuccVec`]s, which store a few elements inline before
//! spilling to the heap. [`random`] provides the random-graph producer used by
//! the benchmark harness.

pub mod digraph;
pub mod random;
pub mod succ_vec;

pub use digraph::DiGraph;
pub use succ_vec::SuccVec;

/// Prelude module to import everything about graphs.
pub mod prelude {
    pub use super::digraph::DiGraph;
    pub use super::random::random_digraph;
    pub use super::succ_vec::SuccVec;
}
