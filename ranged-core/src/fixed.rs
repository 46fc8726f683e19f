//! Zero-sized compile-time integer constants.

use crate::policy::OverflowPolicy;
use crate::{Ranged, RangedInteger, Unchecked};

/// A compile-time integer constant.
///
/// This is the degenerate `MIN == MAX` ranged integer: the value is implied
/// by the type, so no storage is needed at all.
///
/// ```
/// use ranged_core::{Fixed, Ranged};
///
/// assert_eq!(core::mem::size_of::<Fixed<5>>(), 0);
/// let five: Ranged<0, 9> = Fixed::<5>.into();
/// assert_eq!(five, 5);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Fixed<const V: i64>;

impl<const V: i64> Fixed<V> {
    /// The constant's value.
    pub const VALUE: i64 = V;

    /// The constant's value.
    #[must_use]
    #[inline]
    pub const fn get(self) -> i64 {
        V
    }

    /// The single-valued ranged integer holding this constant.
    ///
    /// The result carries the [`Unchecked`](crate::Unchecked) policy: its
    /// range can never be violated, so no narrowing ever runs.
    #[must_use]
    #[inline]
    pub const fn to_ranged(self) -> Ranged<V, V, Unchecked> {
        // SAFETY: V is trivially within [V, V].
        unsafe { Ranged::new_unchecked(V) }
    }
}

impl<const V: i64> RangedInteger for Fixed<V> {
    const MIN_VALUE: i64 = V;
    const MAX_VALUE: i64 = V;

    #[inline]
    fn from_wide_checked(value: i64) -> Option<Self> {
        if value == V {
            Some(Fixed)
        } else {
            None
        }
    }

    #[inline]
    fn to_wide(self) -> i64 {
        V
    }
}

impl<const V: i64, const MIN: i64, const MAX: i64, P: OverflowPolicy> From<Fixed<V>>
    for Ranged<MIN, MAX, P>
{
    #[inline]
    fn from(_value: Fixed<V>) -> Self {
        const {
            assert!(MIN <= V && V <= MAX, "constant lies outside the target range");
        }
        // SAFETY: the assertion above proves V is in [MIN, MAX].
        unsafe { Ranged::new_unchecked(V) }
    }
}

impl<const V: i64> From<Fixed<V>> for i64 {
    #[inline]
    fn from(_value: Fixed<V>) -> i64 {
        V
    }
}
