/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt;
use core::mem::size_of;

/// Number of successors stored inline before spilling to the heap.
///
/// Chosen so that the inline buffer occupies exactly the footprint of a
/// `Vec<usize>`; the length and the discriminant fit in the enum's extra
/// word.
pub const INLINE_CAP: usize = size_of::<Vec<usize>>() / size_of::<usize>();

/// An append-only successor list with small-vector optimization.
///
/// A `SuccVec` stores up to [`INLINE_CAP`] node ids inline, without heap
/// allocation; the first push beyond that moves all elements into a `Vec`,
/// and the container never reverts to the inline representation. Elements
/// are kept in insertion order and cannot be removed.
///
/// The original formulation packed the representation discriminant into an
/// alignment-guaranteed zero bit of the heap pointer; here the discriminant
/// is an explicit enum tag, trading one word per node for a fully safe
/// implementation.
///
/// `SuccVec` is deliberately not `Clone`: each node slot of a
/// [`DiGraph`](crate::graphs::DiGraph) owns exactly one instance, and the
/// slots are never copied or relocated after construction.
pub struct SuccVec(Repr);

enum Repr {
    Inline { len: u8, buf: [usize; INLINE_CAP] },
    Heap(Vec<usize>),
}

impl SuccVec {
    /// Creates a new empty successor list in the inline representation.
    pub const fn new() -> Self {
        SuccVec(Repr::Inline {
            len: 0,
            buf: [0; INLINE_CAP],
        })
    }

    /// Returns the number of successors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        match &self.0 {
            Repr::Inline { len, .. } => *len as usize,
            Repr::Heap(vec) => vec.len(),
        }
    }

    /// Returns true if the list contains no successors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a node id, spilling to the heap if the inline capacity is
    /// exceeded.
    ///
    /// Amortized O(1).
    pub fn push(&mut self, node: usize) {
        match &mut self.0 {
            Repr::Inline { len, buf } => {
                if (*len as usize) < INLINE_CAP {
                    buf[*len as usize] = node;
                    *len += 1;
                } else {
                    let mut vec = Vec::with_capacity(INLINE_CAP + 1);
                    vec.extend_from_slice(&buf[..]);
                    vec.push(node);
                    self.0 = Repr::Heap(vec);
                }
            }
            Repr::Heap(vec) => vec.push(node),
        }
    }

    /// Returns the successors as a slice, in insertion order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[usize] {
        match &self.0 {
            Repr::Inline { len, buf } => &buf[..*len as usize],
            Repr::Heap(vec) => vec,
        }
    }

    /// Returns an iterator over the successors, in insertion order.
    #[inline(always)]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, usize>> {
        self.as_slice().iter().copied()
    }

    /// Returns true if the list has spilled to the heap.
    #[inline(always)]
    pub fn is_spilled(&self) -> bool {
        matches!(self.0, Repr::Heap(_))
    }
}

impl Default for SuccVec {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SuccVec {
    type Item = usize;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, usize>>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for SuccVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_then_spill() {
        let mut succ = SuccVec::new();
        assert!(succ.is_empty());
        for i in 0..INLINE_CAP {
            succ.push(i * 10);
            assert!(!succ.is_spilled());
        }
        assert_eq!(succ.len(), INLINE_CAP);

        succ.push(INLINE_CAP * 10);
        assert!(succ.is_spilled());
        assert_eq!(succ.len(), INLINE_CAP + 1);
    }

    #[test]
    fn test_order_preserved_across_spill() {
        let mut succ = SuccVec::new();
        for i in 0..100 {
            succ.push(99 - i);
        }
        assert_eq!(succ.len(), 100);
        let elements = succ.iter().collect::<Vec<_>>();
        assert_eq!(elements, (0..100).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_inline_cap_nonzero() {
        // The inline optimization is pointless otherwise.
        assert!(INLINE_CAP >= 1);
    }
}
