//! Small-range sorting: fixed networks for two and three elements, and the
//! insertion sort used for everything else up to the threshold.

use crate::compare::Comparer;
use crate::tandem::{swap, swap_if_greater, Tandem};

/// Sub-ranges at or below this length are sorted directly, without
/// partitioning.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 16;

/// Orders the two keys at `a` and `b`.
#[inline(always)]
pub(crate) fn sort2<K, S, C>(keys: &mut [K], tandem: &mut S, comparer: &mut C, a: usize, b: usize)
where
    S: Tandem,
    C: Comparer<K>,
{
    swap_if_greater(keys, tandem, comparer, a, b);
}

/// Orders the three keys at `a`, `b`, and `c` with the fixed
/// three-comparison network. Doubles as median-of-three: the median of the
/// inputs always ends up at `b`.
#[inline(always)]
pub(crate) fn sort3<K, S, C>(
    keys: &mut [K],
    tandem: &mut S,
    comparer: &mut C,
    a: usize,
    b: usize,
    c: usize,
) where
    S: Tandem,
    C: Comparer<K>,
{
    swap_if_greater(keys, tandem, comparer, a, b);
    swap_if_greater(keys, tandem, comparer, a, c);
    swap_if_greater(keys, tandem, comparer, b, c);
}

/// Insertion sort over the inclusive range `lo..=hi`.
///
/// Each element walks down into the sorted prefix one adjacent swap at a
/// time, so paired values travel with their keys through the same swap
/// primitive. No comparator-consistency checking here; whole inputs small
/// enough to be sorted by this alone are re-checked by the entry layer.
pub(crate) fn insertion_sort<K, S, C>(
    keys: &mut [K],
    tandem: &mut S,
    comparer: &mut C,
    lo: usize,
    hi: usize,
) where
    S: Tandem,
    C: Comparer<K>,
{
    for i in (lo + 1)..=hi {
        let mut j = i;
        while j > lo && comparer.compare(&keys[j], &keys[j - 1]).is_lt() {
            swap(keys, tandem, j, j - 1);
            j -= 1;
        }
    }
}
