//! Unstable in-place introspective sort for slices, with optional lock-step
//! sorting of a parallel values slice.
//!
//! The engine is a classic introsort: median-of-three quicksort that spends
//! a fixed depth budget of `2 * floor(log2(n)) + 1` partition steps, falls
//! back to heap sort for any sub-range that exhausts it, and finishes
//! ranges of up to 16 elements with a sorting network or insertion sort.
//! Worst case is *O*(*n* \* log(*n*)) comparisons and *O*(log *n*) stack,
//! with no allocation, for any input.
//!
//! Every entry point returns a [`Result`]: a comparison strategy that
//! contradicts itself is detected and reported as
//! [`SortError::BadComparer`] instead of panicking, hanging, or scanning
//! out of range, and on any error the slices still hold a permutation of
//! their input. The sort is not stable; equal keys, and the values paired
//! with them, may be reordered.
//!
//! # Examples
//!
//! ```
//! let mut v = [-5, 4, 1, -3, 2];
//! tandemsort::sort(&mut v).unwrap();
//! assert_eq!(v, [-5, -3, 1, 2, 4]);
//! ```
//!
//! Sorting a values slice in tandem with its keys:
//!
//! ```
//! let mut keys = [6, 4, 5, 2, 1];
//! let mut values = ["f", "d", "e", "b", "a"];
//! tandemsort::sort_pairs(&mut keys, &mut values).unwrap();
//! assert_eq!(keys, [1, 2, 4, 5, 6]);
//! assert_eq!(values, ["a", "b", "d", "e", "f"]);
//! ```

#![forbid(unsafe_code)]

use core::cmp::Ordering;

mod compare;
mod errors;
mod heapsort;
pub mod patterns;
mod quicksort;
mod smallsort;
mod tandem;

pub use crate::compare::{Comparer, FnComparer, Natural, NoneFirst};
pub use crate::errors::SortError;

use crate::compare::PartialNatural;
use crate::smallsort::SMALL_SORT_THRESHOLD;
use crate::tandem::{KeysOnly, PairedValues, Tandem};

/// Sorts the slice in the keys' natural order.
///
/// In-place, *O*(*n* \* log(*n*)) worst-case, not stable: equal elements
/// may be reordered.
///
/// # Errors
///
/// A broken `Ord` implementation is reported as
/// [`SortError::BadComparer`]; for well-behaved keys this entry point
/// never fails.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
/// tandemsort::sort(&mut v).unwrap();
/// assert_eq!(v, [-5, -3, 1, 2, 4]);
/// ```
#[inline(always)]
pub fn sort<K: Ord>(keys: &mut [K]) -> Result<(), SortError> {
    unstable_sort(keys, &mut KeysOnly, &mut Natural)
}

/// Sorts the slice with a comparator function.
///
/// The comparator must define a total order for the elements in the slice:
/// exactly one of `a < b`, `a == b`, `a > b` is true for every pair, and
/// all three relations are transitive. For example, while [`f64`] doesn't
/// implement [`Ord`] because `NaN != NaN`, `partial_cmp` works as a sort
/// function when the slice is known to hold no `NaN`:
///
/// ```
/// let mut floats = [5f64, 4.0, 1.0, 3.0, 2.0];
/// tandemsort::sort_by(&mut floats, |a, b| a.partial_cmp(b).unwrap()).unwrap();
/// assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
///
/// # Errors
///
/// [`SortError::BadComparer`] if the comparator is caught contradicting
/// itself; the slice then holds some permutation of its input.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// tandemsort::sort_by(&mut v, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(v, [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// tandemsort::sort_by(&mut v, |a, b| b.cmp(a)).unwrap();
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// ```
#[inline(always)]
pub fn sort_by<K, F>(keys: &mut [K], compare: F) -> Result<(), SortError>
where
    F: FnMut(&K, &K) -> Ordering,
{
    unstable_sort(keys, &mut KeysOnly, &mut FnComparer(compare))
}

/// Sorts the slice with a comparator object; `None` means natural order.
///
/// The `K: Ord` bound backs the `None` fallback, which is why it applies
/// even when a comparator is supplied; for key types without a natural
/// order use [`sort_by`] with a closure instead.
///
/// # Errors
///
/// [`SortError::BadComparer`] if the comparator is caught contradicting
/// itself.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use tandemsort::{Comparer, Natural};
///
/// struct Reverse;
///
/// impl Comparer<i32> for Reverse {
///     fn compare(&mut self, a: &i32, b: &i32) -> Ordering {
///         b.cmp(a)
///     }
/// }
///
/// let mut v = [1, 3, 2];
/// tandemsort::sort_by_comparer(&mut v, Some(Reverse)).unwrap();
/// assert_eq!(v, [3, 2, 1]);
///
/// tandemsort::sort_by_comparer(&mut v, None::<Natural>).unwrap();
/// assert_eq!(v, [1, 2, 3]);
/// ```
#[inline(always)]
pub fn sort_by_comparer<K, C>(keys: &mut [K], comparer: Option<C>) -> Result<(), SortError>
where
    K: Ord,
    C: Comparer<K>,
{
    match comparer {
        Some(mut comparer) => unstable_sort(keys, &mut KeysOnly, &mut comparer),
        None => unstable_sort(keys, &mut KeysOnly, &mut Natural),
    }
}

/// Sorts `keys` in natural order while keeping `values` index-paired.
///
/// Every exchange of two keys is mirrored on the values slice, so the
/// value at position `i` stays attached to the key at position `i`. Equal
/// keys may be reordered, and their values with them.
///
/// # Errors
///
/// [`SortError::LengthMismatch`] if the slices differ in length; nothing
/// is mutated in that case.
///
/// # Examples
///
/// ```
/// let mut keys = [6, 4, 5, 2, 1];
/// let mut values = [10, 20, 30, 40, 50];
/// tandemsort::sort_pairs(&mut keys, &mut values).unwrap();
/// assert_eq!(keys, [1, 2, 4, 5, 6]);
/// assert_eq!(values, [50, 40, 20, 30, 10]);
/// ```
#[inline(always)]
pub fn sort_pairs<K: Ord, V>(keys: &mut [K], values: &mut [V]) -> Result<(), SortError> {
    check_lengths(keys, values)?;
    unstable_sort(keys, &mut PairedValues(values), &mut Natural)
}

/// Sorts `keys` with a comparator function while keeping `values`
/// index-paired.
///
/// # Errors
///
/// [`SortError::LengthMismatch`] if the slices differ in length;
/// [`SortError::BadComparer`] if the comparator is caught contradicting
/// itself (the pairing is intact even then).
#[inline(always)]
pub fn sort_pairs_by<K, V, F>(
    keys: &mut [K],
    values: &mut [V],
    compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&K, &K) -> Ordering,
{
    check_lengths(keys, values)?;
    unstable_sort(keys, &mut PairedValues(values), &mut FnComparer(compare))
}

/// Sorts `keys` with a comparator object while keeping `values`
/// index-paired; `None` means natural order.
///
/// # Errors
///
/// [`SortError::LengthMismatch`] if the slices differ in length;
/// [`SortError::BadComparer`] if the comparator is caught contradicting
/// itself.
#[inline(always)]
pub fn sort_pairs_by_comparer<K, V, C>(
    keys: &mut [K],
    values: &mut [V],
    comparer: Option<C>,
) -> Result<(), SortError>
where
    K: Ord,
    C: Comparer<K>,
{
    check_lengths(keys, values)?;
    match comparer {
        Some(mut comparer) => unstable_sort(keys, &mut PairedValues(values), &mut comparer),
        None => unstable_sort(keys, &mut PairedValues(values), &mut Natural),
    }
}

/// Sorts the slice by the keys' intrinsic partial order.
///
/// Useful for floats and other `PartialOrd` types. If every comparison
/// observed during the sort decides, the result is fully sorted; the first
/// undecided comparison (for floats, a `NaN`) poisons the call instead of
/// silently mis-ordering.
///
/// # Errors
///
/// [`SortError::Uncomparable`] if any observed pair of keys had no
/// ordering; the slice then holds some permutation of its input.
///
/// # Examples
///
/// ```
/// let mut v = [5.0f64, 1.5, 3.0];
/// tandemsort::sort_partial(&mut v).unwrap();
/// assert_eq!(v, [1.5, 3.0, 5.0]);
///
/// let mut poisoned = [1.0, f64::NAN];
/// assert!(tandemsort::sort_partial(&mut poisoned).is_err());
/// ```
pub fn sort_partial<K: PartialOrd>(keys: &mut [K]) -> Result<(), SortError> {
    let mut comparer = PartialNatural::new();
    let result = unstable_sort(keys, &mut KeysOnly, &mut comparer);
    finish_partial::<K>(&comparer, result)
}

/// Sorts `keys` by their intrinsic partial order while keeping `values`
/// index-paired.
///
/// # Errors
///
/// [`SortError::LengthMismatch`] if the slices differ in length;
/// [`SortError::Uncomparable`] if any observed pair of keys had no
/// ordering (the pairing is intact even then).
pub fn sort_pairs_partial<K, V>(keys: &mut [K], values: &mut [V]) -> Result<(), SortError>
where
    K: PartialOrd,
{
    check_lengths(keys, values)?;
    let mut comparer = PartialNatural::new();
    let result = unstable_sort(keys, &mut PairedValues(values), &mut comparer);
    finish_partial::<K>(&comparer, result)
}

// --- IMPL ---

fn check_lengths<K, V>(keys: &[K], values: &[V]) -> Result<(), SortError> {
    if keys.len() != values.len() {
        return Err(SortError::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }

    Ok(())
}

/// An undecided comparison poisons the whole call, whatever the engine
/// itself reported.
fn finish_partial<K>(
    comparer: &PartialNatural,
    result: Result<(), SortError>,
) -> Result<(), SortError> {
    if comparer.undecided {
        return Err(SortError::uncomparable::<K>());
    }

    result
}

/// Number of partition steps before a sub-range falls back to heap sort.
fn partition_budget(len: usize) -> u32 {
    2 * len.ilog2() + 1
}

fn unstable_sort<K, S, C>(
    keys: &mut [K],
    tandem: &mut S,
    comparer: &mut C,
) -> Result<(), SortError>
where
    S: Tandem,
    C: Comparer<K>,
{
    let len = keys.len();
    if len < 2 {
        return Ok(());
    }

    crate::quicksort::quicksort(keys, tandem, comparer, 0, len - 1, partition_budget(len))?;

    // A whole input at or below the threshold is resolved by the small
    // sorts alone, so no partition scan ever vetted the comparator.
    // Re-walk the result once so a contradicting order is still reported.
    // A genuine total order cannot fail this walk: the small sort just
    // established the order being checked, under the same comparator.
    if len <= SMALL_SORT_THRESHOLD {
        for i in 0..len - 1 {
            if comparer.compare(&keys[i], &keys[i + 1]).is_gt() {
                return Err(SortError::bad_comparer::<K>());
            }
        }
    }

    Ok(())
}

#[test]
fn budget_by_len() {
    assert_eq!(partition_budget(2), 3);
    assert_eq!(partition_budget(16), 9);
    assert_eq!(partition_budget(17), 9);
    assert_eq!(partition_budget(1024), 21);
    assert_eq!(partition_budget(1_000_000), 39);
}
