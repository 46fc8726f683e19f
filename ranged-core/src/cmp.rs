//! Comparisons between ranged integers of arbitrary bounds, and against
//! plain integers.
//!
//! Equality and ordering are defined by the stored value alone: two ranged
//! integers with disjoint ranges can still be compared (and are simply never
//! equal). `Hash` hashes the stored value, so mixed-bounds equality and
//! hashing stay consistent.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::policy::OverflowPolicy;
use crate::{Fixed, Ranged};

impl<
        const AMIN: i64,
        const AMAX: i64,
        P: OverflowPolicy,
        const BMIN: i64,
        const BMAX: i64,
        Q: OverflowPolicy,
    > PartialEq<Ranged<BMIN, BMAX, Q>> for Ranged<AMIN, AMAX, P>
{
    #[inline]
    fn eq(&self, other: &Ranged<BMIN, BMAX, Q>) -> bool {
        self.get() == other.get()
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Eq for Ranged<MIN, MAX, P> {}

impl<
        const AMIN: i64,
        const AMAX: i64,
        P: OverflowPolicy,
        const BMIN: i64,
        const BMAX: i64,
        Q: OverflowPolicy,
    > PartialOrd<Ranged<BMIN, BMAX, Q>> for Ranged<AMIN, AMAX, P>
{
    #[inline]
    fn partial_cmp(&self, other: &Ranged<BMIN, BMAX, Q>) -> Option<Ordering> {
        Some(self.get().cmp(&other.get()))
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Ord for Ranged<MIN, MAX, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Hash for Ranged<MIN, MAX, P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> PartialEq<i64> for Ranged<MIN, MAX, P> {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.get() == *other
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> PartialEq<Ranged<MIN, MAX, P>> for i64 {
    #[inline]
    fn eq(&self, other: &Ranged<MIN, MAX, P>) -> bool {
        *self == other.get()
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> PartialOrd<i64> for Ranged<MIN, MAX, P> {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.get().cmp(other))
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> PartialOrd<Ranged<MIN, MAX, P>> for i64 {
    #[inline]
    fn partial_cmp(&self, other: &Ranged<MIN, MAX, P>) -> Option<Ordering> {
        Some(self.cmp(&other.get()))
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy, const V: i64> PartialEq<Fixed<V>>
    for Ranged<MIN, MAX, P>
{
    #[inline]
    fn eq(&self, _other: &Fixed<V>) -> bool {
        self.get() == V
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy, const V: i64>
    PartialEq<Ranged<MIN, MAX, P>> for Fixed<V>
{
    #[inline]
    fn eq(&self, other: &Ranged<MIN, MAX, P>) -> bool {
        V == other.get()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Fixed, Ranged, Saturating};

    #[test]
    fn cross_range_comparisons() {
        let a: Ranged<1, 5> = Ranged::new(3);
        let b: Ranged<3, 10> = Ranged::new(3);
        let c: Ranged<-100, -1> = Ranged::new(-4);
        assert_eq!(a, b);
        assert!(c < a);
        assert!(a > c);
        // Disjoint ranges still compare, they are just never equal.
        assert_ne!(a, c);
    }

    #[test]
    fn policy_does_not_affect_equality() {
        let strict: Ranged<0, 9> = Ranged::new(4);
        let saturating: Ranged<0, 9, Saturating> = Ranged::new(4);
        assert_eq!(strict, saturating);
    }

    #[test]
    fn mixed_comparisons() {
        let a: Ranged<1, 5> = Ranged::new(3);
        assert_eq!(a, 3);
        assert_eq!(3, a);
        assert!(a < 4);
        assert!(2 < a);
        assert_eq!(a, Fixed::<3>);
        assert_ne!(Fixed::<4>, a);
    }
}
