//! The swap primitive: every key exchange is mirrored on the paired values.

use core::cmp::Ordering;

use crate::compare::Comparer;

/// Mirror side of the swap primitive.
///
/// The engine swaps keys through `slice::swap` and reports every exchange
/// here, keeping an optional values slice index-paired with its keys. The
/// keys-only mirror is a unit type, so that path monomorphizes to plain key
/// swaps.
pub(crate) trait Tandem {
    fn swap(&mut self, a: usize, b: usize);
}

/// No values slice; key swaps have nothing to mirror.
pub(crate) struct KeysOnly;

impl Tandem for KeysOnly {
    #[inline(always)]
    fn swap(&mut self, _a: usize, _b: usize) {}
}

/// A parallel values slice mirroring every key swap.
pub(crate) struct PairedValues<'a, V>(pub &'a mut [V]);

impl<V> Tandem for PairedValues<'_, V> {
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

/// Exchanges the keys at `a` and `b` together with their paired values.
#[inline(always)]
pub(crate) fn swap<K, S: Tandem>(keys: &mut [K], tandem: &mut S, a: usize, b: usize) {
    keys.swap(a, b);
    tandem.swap(a, b);
}

/// Compare-and-swap: leaves the keys at `a` and `b` in order.
#[inline(always)]
pub(crate) fn swap_if_greater<K, S, C>(
    keys: &mut [K],
    tandem: &mut S,
    comparer: &mut C,
    a: usize,
    b: usize,
) where
    S: Tandem,
    C: Comparer<K>,
{
    if comparer.compare(&keys[a], &keys[b]) == Ordering::Greater {
        swap(keys, tandem, a, b);
    }
}
