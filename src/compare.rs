//! Comparison strategies over sort keys.
//!
//! The engine is generic over a [`Comparer`], so the natural-order path,
//! comparator objects, and plain closures all monomorphize to direct calls.

use core::cmp::Ordering;

/// A comparison strategy for keys of type `K`.
///
/// The order must be total for the sort's correctness guarantees to hold:
/// exactly one of `a < b`, `a == b`, `a > b` is true for every pair, and
/// all three relations are transitive. An order that contradicts itself is
/// detected by the engine and reported as
/// [`SortError::BadComparer`](crate::SortError::BadComparer) rather than
/// being allowed to scan out of range.
///
/// `compare` takes `&mut self` so comparators may carry small state, for
/// example a comparison counter.
pub trait Comparer<K> {
    fn compare(&mut self, a: &K, b: &K) -> Ordering;
}

/// The keys' intrinsic order.
#[derive(Copy, Clone, Debug, Default)]
pub struct Natural;

impl<K: Ord> Comparer<K> for Natural {
    #[inline(always)]
    fn compare(&mut self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Adapter making any ordering closure usable as a [`Comparer`].
///
/// The `sort_by` entry points wrap their argument in this internally; it is
/// public so closures can also be combined with comparator adapters such as
/// [`NoneFirst`].
#[derive(Copy, Clone, Default)]
pub struct FnComparer<F>(pub F);

impl<K, F> Comparer<K> for FnComparer<F>
where
    F: FnMut(&K, &K) -> Ordering,
{
    #[inline(always)]
    fn compare(&mut self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

/// Comparator adapter over optional keys: absent keys sort before every
/// present key, and the inner comparator is never consulted for them.
///
/// ```
/// use tandemsort::{Natural, NoneFirst};
///
/// let mut v = [Some(3), None, Some(1), None, Some(2)];
/// tandemsort::sort_by_comparer(&mut v, Some(NoneFirst(Natural))).unwrap();
/// assert_eq!(v, [None, None, Some(1), Some(2), Some(3)]);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct NoneFirst<C>(pub C);

impl<K, C> Comparer<Option<K>> for NoneFirst<C>
where
    C: Comparer<K>,
{
    fn compare(&mut self, a: &Option<K>, b: &Option<K>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.0.compare(a, b),
        }
    }
}

/// Intrinsic partial order with a poison flag, backing the `sort_partial*`
/// entry points.
///
/// An undecided comparison is remembered and answered as `Greater`, which
/// the engine either tolerates or reports as a contract violation; the
/// entry point then maps the whole call to `Uncomparable` because of the
/// flag.
pub(crate) struct PartialNatural {
    pub(crate) undecided: bool,
}

impl PartialNatural {
    pub(crate) fn new() -> Self {
        Self { undecided: false }
    }
}

impl<K: PartialOrd> Comparer<K> for PartialNatural {
    #[inline(always)]
    fn compare(&mut self, a: &K, b: &K) -> Ordering {
        match a.partial_cmp(b) {
            Some(ordering) => ordering,
            None => {
                self.undecided = true;
                Ordering::Greater
            }
        }
    }
}
