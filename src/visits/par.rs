/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{reset_depths, UNVISITED};
use crate::graphs::DiGraph;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicIsize, Ordering};
use std::sync::{Condvar, Mutex};
use std::thread;

/// Number of node ids a [`Block`] can hold.
///
/// Large enough that workers touch the queue lock rarely, small enough that
/// freshly discovered nodes are published promptly.
const BLOCK_CAPACITY: usize = 256;

/// A bounded batch of discovered nodes, moved as a unit through the
/// [`BlockQueue`].
///
/// A block has exactly one owner at any instant (a worker filling it, the
/// queue, or a worker draining it), so its contents need no synchronization.
/// The number of valid entries is tracked explicitly rather than with a
/// sentinel value.
struct Block {
    len: usize,
    verts: [usize; BLOCK_CAPACITY],
}

impl Block {
    fn new() -> Box<Self> {
        Box::new(Block {
            len: 0,
            verts: [0; BLOCK_CAPACITY],
        })
    }

    fn singleton(node: usize) -> Box<Self> {
        let mut block = Self::new();
        block.push(node);
        block
    }

    #[inline(always)]
    fn push(&mut self, node: usize) {
        debug_assert!(self.len < BLOCK_CAPACITY);
        self.verts[self.len] = node;
        self.len += 1;
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.len == BLOCK_CAPACITY
    }

    #[inline(always)]
    fn as_slice(&self) -> &[usize] {
        &self.verts[..self.len]
    }
}

/// State protected by the queue mutex.
struct State {
    blocks: VecDeque<Box<Block>>,
    /// Number of workers not currently processing a block.
    idle: usize,
    done: bool,
}

/// A FIFO queue of blocks with idle-counting quiescence detection.
///
/// Workers produce new blocks only while processing one, so once all of them
/// are idle at the same time on an empty queue no further work can appear:
/// [`pop`](BlockQueue::pop) detects that fixed point, marks the visit done
/// and wakes every waiter.
struct BlockQueue {
    state: Mutex<State>,
    more: Condvar,
    num_workers: usize,
}

impl BlockQueue {
    fn new(num_workers: usize, initial: Box<Block>) -> Self {
        let mut blocks = VecDeque::new();
        blocks.push_back(initial);
        Self {
            state: Mutex::new(State {
                blocks,
                idle: 0,
                done: false,
            }),
            more: Condvar::new(),
            num_workers,
        }
    }

    /// Pops the next block, blocking while the queue is empty; returns `None`
    /// exactly once per worker, when the visit has quiesced.
    fn pop(&self) -> Option<Box<Block>> {
        let mut state = self.state.lock().unwrap();
        state.idle += 1;
        if state.idle == self.num_workers && state.blocks.is_empty() {
            state.done = true;
            self.more.notify_all();
            return None;
        }
        while state.blocks.is_empty() && !state.done {
            state = self.more.wait(state).unwrap();
        }
        if state.done {
            debug_assert!(state.blocks.is_empty());
            return None;
        }
        state.idle -= 1;
        state.blocks.pop_front()
    }

    fn push(&self, block: Box<Block>) {
        let mut state = self.state.lock().unwrap();
        state.blocks.push_back(block);
        self.more.notify_one();
    }
}

/// Shared state of a parallel visit; immutable after construction, shared by
/// reference among the workers.
struct ParBfs<'a> {
    graph: &'a DiGraph,
    depths: &'a [AtomicIsize],
    queue: BlockQueue,
}

impl ParBfs<'_> {
    fn worker(&self) {
        let mut out: Option<Box<Block>> = None;
        while let Some(block) = self.queue.pop() {
            for &src in block.as_slice() {
                self.relax_successors(src, &mut out);
            }
            // Publish any partial block before possibly going idle, or
            // quiescence detection would miss the work it holds.
            if let Some(block) = out.take() {
                self.queue.push(block);
            }
        }
    }

    /// Offers `candidate = depths[src] + 1` to every successor of `src`.
    ///
    /// The distance of `src` is re-read here, at drain time, rather than
    /// carried inside the block: a block entry only means "this node's
    /// distance improved at some point", so stale distances are never
    /// propagated.
    fn relax_successors(&self, src: usize, out: &mut Option<Box<Block>>) {
        let candidate = self.depths[src].load(Ordering::SeqCst) + 1;
        for &dst in self.graph.successors(src) {
            let mut dst_depth = self.depths[dst].load(Ordering::SeqCst);
            if dst_depth != UNVISITED && dst_depth <= candidate {
                continue;
            }
            loop {
                match self.depths[dst].compare_exchange_weak(
                    dst_depth,
                    candidate,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(_) => {
                        // We claimed dst at this distance; it is now our job
                        // to (re)enqueue it.
                        self.discovered(dst, out);
                        break;
                    }
                    Err(observed) => {
                        // Another thread wrote first. Distances only
                        // decrease, so once observed <= candidate no further
                        // improvement from here is possible.
                        if observed != UNVISITED && observed <= candidate {
                            break;
                        }
                        dst_depth = observed;
                    }
                }
            }
        }
    }

    #[inline(always)]
    fn discovered(&self, node: usize, out: &mut Option<Box<Block>>) {
        let block = out.get_or_insert_with(Block::new);
        block.push(node);
        if block.is_full() {
            if let Some(full) = out.take() {
                self.queue.push(full);
            }
        }
    }
}

/// A parallel breadth-first visit computing shortest-hop distances with
/// `num_threads` worker threads.
///
/// The visit is label-correcting: a node's distance may be written several
/// times before convergence, always through a compare-and-swap that strictly
/// improves it, and nodes may be processed out of breadth-first order.
/// Distances are bounded below and only ever decrease, so the visit
/// terminates, and on return `depths` is identical to the buffer produced by
/// [`bfs`](super::bfs) on the same graph and root, for every `num_threads`.
///
/// The worker threads are spawned on each call and joined before it returns.
///
/// # Panics
///
/// If `num_threads == 0`, `depths.len() != graph.num_nodes()`, or `root` is
/// out of range.
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
/// graph.add_arc(2, 3)?;
/// let mut depths = vec![0; 4];
/// parallel_bfs(4, &graph, 0, &mut depths);
/// assert_eq!(depths, vec![0, 1, 2, 3]);
/// # Ok(())
/// # }
/// ```
pub fn parallel_bfs(num_threads: usize, graph: &DiGraph, root: usize, depths: &mut [isize]) {
    assert!(num_threads > 0, "At least one worker thread is required");
    assert_eq!(
        depths.len(),
        graph.num_nodes(),
        "The distance buffer must have one slot per node"
    );
    assert!(root < graph.num_nodes(), "Root node {} out of range", root);
    reset_depths(depths, root);

    let depths: *mut [isize] = depths;
    // SAFETY: AtomicIsize has the same in-memory representation as isize,
    // and we hold the only reference to the buffer, so for the duration of
    // the visit all accesses go through the atomic view.
    let depths: &[AtomicIsize] = unsafe { &*(depths as *const [AtomicIsize]) };

    let visit = ParBfs {
        graph,
        depths,
        queue: BlockQueue::new(num_threads, Block::singleton(root)),
    };

    thread::scope(|scope| {
        for _ in 0..num_threads {
            scope.spawn(|| visit.worker());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_capacity_overflow() {
        // More discoveries than fit in one block: every node must still be
        // expanded, i.e., blocks must be flushed and re-filled correctly.
        let n = 4 * BLOCK_CAPACITY;
        let mut graph = DiGraph::new(n + 1);
        for v in 1..=n {
            graph.add_arc(0, v).unwrap();
        }
        let mut depths = vec![0; n + 1];
        parallel_bfs(3, &graph, 0, &mut depths);
        assert_eq!(depths[0], 0);
        for v in 1..=n {
            assert_eq!(depths[v], 1);
        }
    }
}
