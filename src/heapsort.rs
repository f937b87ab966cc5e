//! Heap sort, the depth-exhaustion fallback.

use crate::compare::Comparer;
use crate::tandem::{swap, Tandem};

/// Sorts the inclusive range `lo..=hi` with an in-place max-heap.
///
/// Engaged when the partition depth budget runs out; O(n log n) whatever
/// the input looks like, and every index stays inside the heap range by
/// construction, so a lying comparator can skew the order but nothing else.
#[inline(never)]
pub(crate) fn heapsort<K, S, C>(
    keys: &mut [K],
    tandem: &mut S,
    comparer: &mut C,
    lo: usize,
    hi: usize,
) where
    S: Tandem,
    C: Comparer<K>,
{
    let len = hi - lo + 1;

    // Heapify from the last parent down to the root.
    for node in (0..len / 2).rev() {
        sift_down(keys, tandem, comparer, lo, node, len);
    }

    // Pop the maximum into the tail until one element remains.
    for end in (1..len).rev() {
        swap(keys, tandem, lo, lo + end);
        sift_down(keys, tandem, comparer, lo, 0, end);
    }
}

/// Restores the max-heap property for `node` within the first `len` slots
/// of the heap based at `lo`.
fn sift_down<K, S, C>(
    keys: &mut [K],
    tandem: &mut S,
    comparer: &mut C,
    lo: usize,
    mut node: usize,
    len: usize,
) where
    S: Tandem,
    C: Comparer<K>,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Descend toward the greater of the two children.
        if child + 1 < len
            && comparer
                .compare(&keys[lo + child], &keys[lo + child + 1])
                .is_lt()
        {
            child += 1;
        }

        if comparer.compare(&keys[lo + node], &keys[lo + child]).is_ge() {
            break;
        }

        swap(keys, tandem, lo + node, lo + child);
        node = child;
    }
}
