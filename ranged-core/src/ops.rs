//! Arithmetic on ranged integers.
//!
//! Two families live here:
//!
//! - **Widening operations** (`widening_add` and friends): `const fn`s whose
//!   result type is named by the caller. A `const` block evaluates the
//!   corresponding derivation from the [`bounds`](crate::bounds) module and
//!   asserts that the declared result bounds contain the derived ones, so an
//!   unsound result type is a compile error. The runtime value is computed in
//!   the meta domain (`i128`) and stored without further checks.
//! - **Compound assignment** (`+=`, `-=`, ...): the left operand's bounds
//!   cannot grow, so the nominal result is narrowed back through the left
//!   operand's [`OverflowPolicy`](crate::OverflowPolicy).

use crate::bounds::{self, Bounds};
use crate::policy::OverflowPolicy;
use crate::{Fixed, Ranged};

macro_rules! widening_binary_op {
    (
        $(#[$doc:meta])*
        fn $method:ident, derive = $derive:path, compute = |$lhs:ident, $rhs:ident| $compute:expr
    ) => {
        impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Ranged<MIN, MAX, P> {
            $(#[$doc])*
            ///
            /// The result bounds `[RMIN, RMAX]` are usually inferred from the
            /// binding's type annotation; declaring bounds that do not contain
            /// the derived bounds fails to compile.
            #[must_use]
            pub const fn $method<
                const BMIN: i64,
                const BMAX: i64,
                const RMIN: i64,
                const RMAX: i64,
                Q: OverflowPolicy,
            >(
                self,
                rhs: Ranged<BMIN, BMAX, Q>,
            ) -> Ranged<RMIN, RMAX, P> {
                const {
                    let derived = $derive(Bounds::of(MIN, MAX), Bounds::of(BMIN, BMAX));
                    assert!(
                        Bounds::of(RMIN, RMAX).encloses(derived),
                        "declared result bounds do not contain the derived bounds"
                    );
                }
                let $lhs = self.get() as i128;
                let $rhs = rhs.get() as i128;
                let wide: i128 = $compute;
                // In the derived bounds, which the const block proved fit the
                // declared result type (and therefore i64).
                #[allow(clippy::cast_possible_truncation)]
                let value = wide as i64;
                // SAFETY: `wide` lies within the derived bounds, which are
                // contained in [RMIN, RMAX].
                unsafe { Ranged::new_unchecked(value) }
            }
        }
    };
}

macro_rules! widening_unary_op {
    (
        $(#[$doc:meta])*
        fn $method:ident, derive = $derive:path, compute = |$operand:ident| $compute:expr
    ) => {
        impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Ranged<MIN, MAX, P> {
            $(#[$doc])*
            ///
            /// The result bounds `[RMIN, RMAX]` are usually inferred from the
            /// binding's type annotation; declaring bounds that do not contain
            /// the derived bounds fails to compile.
            #[must_use]
            pub const fn $method<const RMIN: i64, const RMAX: i64>(self) -> Ranged<RMIN, RMAX, P> {
                const {
                    let derived = $derive(Bounds::of(MIN, MAX));
                    assert!(
                        Bounds::of(RMIN, RMAX).encloses(derived),
                        "declared result bounds do not contain the derived bounds"
                    );
                }
                let $operand = self.get() as i128;
                let wide: i128 = $compute;
                // In the derived bounds, which the const block proved fit the
                // declared result type (and therefore i64).
                #[allow(clippy::cast_possible_truncation)]
                let value = wide as i64;
                // SAFETY: `wide` lies within the derived bounds, which are
                // contained in [RMIN, RMAX].
                unsafe { Ranged::new_unchecked(value) }
            }
        }
    };
}

widening_binary_op! {
    /// Add, producing a result type wide enough for every operand pair.
    fn widening_add, derive = bounds::add, compute = |lhs, rhs| lhs + rhs
}
widening_binary_op! {
    /// Subtract, producing a result type wide enough for every operand pair.
    fn widening_sub, derive = bounds::sub, compute = |lhs, rhs| lhs - rhs
}
widening_binary_op! {
    /// Multiply, producing a result type wide enough for every operand pair.
    fn widening_mul, derive = bounds::mul, compute = |lhs, rhs| lhs * rhs
}
widening_binary_op! {
    /// Divide, truncating toward zero.
    ///
    /// The divisor's range must statically exclude zero; a divisor range
    /// containing zero fails to compile. There is no operator for dividing by
    /// a possibly-zero range.
    fn widening_div, derive = bounds::div, compute = |lhs, rhs| lhs / rhs
}
widening_binary_op! {
    /// Remainder with truncated-division semantics (the sign follows the
    /// dividend).
    ///
    /// Like [`Ranged::widening_div`], the divisor's range must statically
    /// exclude zero.
    fn widening_rem, derive = bounds::rem, compute = |lhs, rhs| lhs % rhs
}
widening_binary_op! {
    /// Shift left. The shift range must lie statically within `[0, 63]`.
    fn widening_shl, derive = bounds::shl, compute = |lhs, rhs| lhs << rhs
}
widening_binary_op! {
    /// Shift right (arithmetic). The shift range must lie statically within
    /// `[0, 63]`.
    fn widening_shr, derive = bounds::shr, compute = |lhs, rhs| lhs >> rhs
}
widening_binary_op! {
    /// The smaller of two ranged integers.
    fn widening_min, derive = bounds::minimum, compute = |lhs, rhs| if lhs < rhs { lhs } else { rhs }
}
widening_binary_op! {
    /// The larger of two ranged integers.
    fn widening_max, derive = bounds::maximum, compute = |lhs, rhs| if lhs > rhs { lhs } else { rhs }
}

widening_unary_op! {
    /// Negate. The result bounds are the negated operand bounds, so negating
    /// the most negative value of a type widens instead of wrapping.
    fn widening_neg, derive = bounds::neg, compute = |value| -value
}
widening_unary_op! {
    /// Absolute value.
    fn widening_abs, derive = bounds::abs, compute = |value| if value < 0 { -value } else { value }
}

macro_rules! compound_assignment {
    (
        impl $trait:ident, fn $method:ident, |$lhs:ident, $rhs:ident| $compute:expr,
        guard = |$gmin:ident, $gmax:ident| $guard:expr
        $(, prim = $prim:ty)?
    ) => {
        impl<
            const MIN: i64,
            const MAX: i64,
            P: OverflowPolicy,
            const BMIN: i64,
            const BMAX: i64,
            Q: OverflowPolicy,
        > core::ops::$trait<Ranged<BMIN, BMAX, Q>> for Ranged<MIN, MAX, P>
        {
            #[inline]
            #[track_caller]
            fn $method(&mut self, rhs: Ranged<BMIN, BMAX, Q>) {
                const {
                    let $gmin = BMIN;
                    let $gmax = BMAX;
                    assert!($guard, "operand range not valid for this operator");
                }
                let $lhs = self.get() as i128;
                let $rhs = rhs.get() as i128;
                *self = Ranged::narrowed_wide($compute);
            }
        }

        impl<const MIN: i64, const MAX: i64, P: OverflowPolicy, const V: i64>
            core::ops::$trait<Fixed<V>> for Ranged<MIN, MAX, P>
        {
            #[inline]
            #[track_caller]
            fn $method(&mut self, _rhs: Fixed<V>) {
                const {
                    let $gmin = V;
                    let $gmax = V;
                    assert!($guard, "operand not valid for this operator");
                }
                let $lhs = self.get() as i128;
                let $rhs = V as i128;
                *self = Ranged::narrowed_wide($compute);
            }
        }

        $(
            impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> core::ops::$trait<$prim>
                for Ranged<MIN, MAX, P>
            {
                #[inline]
                #[track_caller]
                fn $method(&mut self, rhs: $prim) {
                    let $lhs = self.get() as i128;
                    let $rhs = rhs as i128;
                    *self = Ranged::narrowed_wide($compute);
                }
            }
        )?
    };
}

compound_assignment! {
    impl AddAssign, fn add_assign, |lhs, rhs| lhs + rhs,
    guard = |_min, _max| true, prim = i64
}
compound_assignment! {
    impl SubAssign, fn sub_assign, |lhs, rhs| lhs - rhs,
    guard = |_min, _max| true, prim = i64
}
compound_assignment! {
    impl MulAssign, fn mul_assign, |lhs, rhs| lhs * rhs,
    guard = |_min, _max| true, prim = i64
}
compound_assignment! {
    impl DivAssign, fn div_assign, |lhs, rhs| lhs / rhs,
    guard = |min, max| min > 0 || max < 0
}
compound_assignment! {
    impl RemAssign, fn rem_assign, |lhs, rhs| lhs % rhs,
    guard = |min, max| min > 0 || max < 0
}
compound_assignment! {
    impl ShlAssign, fn shl_assign, |lhs, rhs| lhs << rhs,
    guard = |min, max| 0 <= min && max <= 63
}
compound_assignment! {
    impl ShrAssign, fn shr_assign, |lhs, rhs| lhs >> rhs,
    guard = |min, max| 0 <= min && max <= 63
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Ranged<MIN, MAX, P> {
    /// Narrow a meta-domain value through the overflow policy.
    #[inline]
    #[track_caller]
    fn narrowed_wide(value: i128) -> Self {
        let narrowed = P::assignment(value, MIN, MAX);
        // SAFETY: every policy returns a value in [MIN, MAX] (or diverges).
        unsafe { Self::new_unchecked(narrowed) }
    }
}
