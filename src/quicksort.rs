//! The introspective-sort driver: quicksort partitioning on a depth budget,
//! heap sort when the budget runs out, small sorts below the threshold.

use crate::compare::Comparer;
use crate::errors::SortError;
use crate::heapsort::heapsort;
use crate::smallsort::{insertion_sort, sort2, sort3, SMALL_SORT_THRESHOLD};
use crate::tandem::{swap, Tandem};

/// Sorts the inclusive range `lo..=hi`.
///
/// `limit` is the remaining partition budget; every partition step spends
/// one, and a sub-range that arrives here with zero left is heap-sorted
/// instead. The loop iterates on the smaller side of each partition and
/// recurses into the larger one, and since every level of recursion has
/// spent a budget step, the stack stays at O(log n).
pub(crate) fn quicksort<K, S, C>(
    keys: &mut [K],
    tandem: &mut S,
    comparer: &mut C,
    mut lo: usize,
    mut hi: usize,
    mut limit: u32,
) -> Result<(), SortError>
where
    S: Tandem,
    C: Comparer<K>,
{
    while lo < hi {
        let size = hi - lo + 1;

        if size <= SMALL_SORT_THRESHOLD {
            match size {
                2 => sort2(keys, tandem, comparer, lo, hi),
                3 => sort3(keys, tandem, comparer, lo, lo + 1, hi),
                _ => insertion_sort(keys, tandem, comparer, lo, hi),
            }
            return Ok(());
        }

        if limit == 0 {
            heapsort(keys, tandem, comparer, lo, hi);
            return Ok(());
        }
        limit -= 1;

        let p = partition(keys, tandem, comparer, lo, hi)?;

        // Recurse into the larger side, keep looping on the smaller one.
        if p - lo > hi - p {
            quicksort(keys, tandem, comparer, lo, p - 1, limit)?;
            lo = p + 1;
        } else {
            quicksort(keys, tandem, comparer, p + 1, hi, limit)?;
            hi = p - 1;
        }
    }

    Ok(())
}

/// Median-of-three partition of the inclusive range `lo..=hi` (length > 3).
///
/// On success the pivot rests at the returned index `p`, with
/// `lo + 1 <= p <= hi - 1`: keys left of `p` compared at most equal to the
/// pivot, keys right of it at least equal. Equal keys may cross the pivot,
/// which is where the non-stability comes from.
///
/// A scan that runs into its boundary while still being told to continue
/// (left scan reaching the pivot slot on "less", right scan reaching `lo`
/// on "greater") has been fed an order that contradicts the median network
/// that just ran, so the sort aborts instead of scanning out of range. The
/// two checks are independent: either scan detects the violation on its
/// own.
fn partition<K, S, C>(
    keys: &mut [K],
    tandem: &mut S,
    comparer: &mut C,
    lo: usize,
    hi: usize,
) -> Result<usize, SortError>
where
    S: Tandem,
    C: Comparer<K>,
{
    // Median-of-three. The network leaves keys[lo] <= pivot <= keys[hi],
    // so the range ends double as scan sentinels.
    let mid = lo + (hi - lo) / 2;
    sort3(keys, tandem, comparer, lo, mid, hi);

    // Park the pivot just before the end; keys[hi] already holds a key
    // that belongs right of it.
    let pivot = hi - 1;
    swap(keys, tandem, mid, pivot);

    let mut left = lo;
    let mut right = pivot;

    while left < right {
        left += 1;
        while comparer.compare(&keys[left], &keys[pivot]).is_lt() {
            if left == pivot {
                return Err(SortError::bad_comparer::<K>());
            }
            left += 1;
        }

        right -= 1;
        while comparer.compare(&keys[right], &keys[pivot]).is_gt() {
            if right == lo {
                return Err(SortError::bad_comparer::<K>());
            }
            right -= 1;
        }

        if left >= right {
            break;
        }

        swap(keys, tandem, left, right);
    }

    // Move the pivot into its resting slot.
    swap(keys, tandem, left, pivot);

    Ok(left)
}
