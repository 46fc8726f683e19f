//! Declarative newtype macros.
//!
//! [`ranged_newtype!`] is the no-proc-macro counterpart of `ranged_type!`:
//! the caller names the storage representation explicitly, and compile-time
//! assertions verify it really contains the range. Prefer `ranged_type!`
//! (feature `derive`) when pulling in the proc macro is acceptable.

/// Define a newtype over an explicitly chosen storage representation.
///
/// ```
/// use ranged::{ranged_newtype, Ranged, RangedInteger, Tombstone};
///
/// ranged_newtype! {
///     /// A percentage.
///     pub struct Percent(u8): 0..=100;
/// }
///
/// assert_eq!(core::mem::size_of::<Percent>(), 1);
/// let p = Percent::new(42);
/// let wide: Ranged<0, 100> = p.widen();
/// assert_eq!(wide, 42);
/// assert_eq!(Percent::SPARE_REPRESENTATIONS, 1);
/// ```
///
/// A representation that cannot hold the range fails to compile. Unlike
/// `ranged_type!`, a single-valued range still stores its value.
#[macro_export]
macro_rules! ranged_newtype {
    (
        $(#[$ty_attr:meta])*
        $vis:vis struct $name:ident($repr:ty): $min:literal ..= $max:literal;
    ) => {
        $(#[$ty_attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[repr(transparent)]
        $vis struct $name($repr);

        const _: () = {
            let min: i64 = $min;
            let max: i64 = $max;
            assert!(min <= max, "Maximum cannot be less than minimum");
            assert!(
                (<$repr>::MIN as i128) <= (min as i128) && ((max as i128) <= (<$repr>::MAX as i128)),
                "representation cannot hold the range"
            );
        };

        #[automatically_derived]
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        #[allow(clippy::cast_sign_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
        impl $name {
            /// The smallest value this type can contain.
            pub const MIN_VALUE: i64 = $min;
            /// The largest value this type can contain.
            pub const MAX_VALUE: i64 = $max;

            /// The smallest value of this type.
            pub const MIN: Self = Self(Self::MIN_VALUE as $repr);
            /// The largest value of this type.
            pub const MAX: Self = Self(Self::MAX_VALUE as $repr);

            /// Create a value, returning `None` if it is out of range.
            #[must_use]
            pub const fn new_checked(value: $repr) -> Option<Self> {
                if (value as i128) >= (Self::MIN_VALUE as i128)
                    && (value as i128) <= (Self::MAX_VALUE as i128)
                {
                    Some(Self(value))
                } else {
                    None
                }
            }

            /// Create a value, panicking if it is out of range.
            #[must_use]
            #[track_caller]
            pub const fn new(value: $repr) -> Self {
                match Self::new_checked(value) {
                    Some(this) => this,
                    None => panic!("value out of range"),
                }
            }

            /// Create a value without checking the range.
            ///
            /// # Safety
            /// The value must lie within the declared range.
            #[must_use]
            pub const unsafe fn new_unchecked(value: $repr) -> Self {
                debug_assert!(
                    (value as i128) >= (Self::MIN_VALUE as i128)
                        && (value as i128) <= (Self::MAX_VALUE as i128)
                );
                Self(value)
            }

            /// The stored value.
            #[must_use]
            pub const fn get(self) -> $repr {
                self.0
            }

            /// Convert into the fast (i64-stored) ranged integer with the
            /// same bounds.
            #[must_use]
            pub const fn widen(self) -> $crate::Ranged<{ $min }, { $max }> {
                // SAFETY: the stored value respects the range invariant.
                unsafe { $crate::Ranged::new_unchecked(self.0 as i64) }
            }

            /// Convert back from the fast ranged integer with the same
            /// bounds.
            #[must_use]
            pub const fn from_ranged<P: $crate::OverflowPolicy>(
                value: $crate::Ranged<{ $min }, { $max }, P>,
            ) -> Self {
                Self(value.get() as $repr)
            }
        }

        #[automatically_derived]
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        #[allow(clippy::cast_sign_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
        impl $crate::RangedInteger for $name {
            const MIN_VALUE: i64 = $min;
            const MAX_VALUE: i64 = $max;

            #[inline]
            fn from_wide_checked(value: i64) -> Option<Self> {
                if value >= $min && value <= $max {
                    Some(Self(value as $repr))
                } else {
                    None
                }
            }

            #[inline]
            fn to_wide(self) -> i64 {
                self.0 as i64
            }
        }

        // SAFETY: the spare patterns are storage values just outside the
        // declared range, which are never logical values and carry no
        // resources.
        #[automatically_derived]
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        #[allow(clippy::cast_sign_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
        unsafe impl $crate::Tombstone for $name {
            const SPARE_REPRESENTATIONS: u32 =
                ((<$repr>::MIN as i128) < ($name::MIN_VALUE as i128)) as u32
                    + ((($name::MAX_VALUE as i128) < (<$repr>::MAX as i128)) as u32);

            fn make_spare(index: u32) -> Self {
                const HAS_LOW: bool = (<$repr>::MIN as i128) < ($name::MIN_VALUE as i128);
                const HAS_HIGH: bool = ($name::MAX_VALUE as i128) < (<$repr>::MAX as i128);
                let value: i128 = match (HAS_LOW, index) {
                    (true, 0) => ($name::MIN_VALUE as i128) - 1,
                    (true, 1) | (false, 0) => {
                        assert!(HAS_HIGH, "no spare representation with that index");
                        ($name::MAX_VALUE as i128) + 1
                    }
                    _ => panic!("no spare representation with that index"),
                };
                Self(value as $repr)
            }

            fn spare_index(&self) -> Option<u32> {
                let value = self.0 as i128;
                if value < (Self::MIN_VALUE as i128) {
                    Some(0)
                } else if value > (Self::MAX_VALUE as i128) {
                    Some(<Self as $crate::Tombstone>::SPARE_REPRESENTATIONS - 1)
                } else {
                    None
                }
            }
        }

        #[automatically_derived]
        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
