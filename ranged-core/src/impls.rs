//! Implementations of [`RangedInteger`] for foreign types, and the
//! feature-gated integrations with `num-traits` and `bytemuck`.

use crate::RangedInteger;

macro_rules! impl_prim_ranged {
    ($($target:ident),*) => {$(
        impl RangedInteger for $target {
            const MIN_VALUE: i64 = $target::MIN as i64;
            const MAX_VALUE: i64 = $target::MAX as i64;

            #[inline]
            fn from_wide_checked(value: i64) -> Option<Self> {
                $target::try_from(value).ok()
            }

            #[inline]
            fn to_wide(self) -> i64 {
                self as i64
            }
        }
    )*};
}
// Types whose full range fits the i64 bounds domain. u64, u128 and usize are
// deliberately absent: their maxima exceed the domain.
impl_prim_ranged!(u8, u16, u32, i8, i16, i32, i64);

macro_rules! impl_nonzero_ranged {
    ($($target:ident => $int:ident, min = $min:expr),* $(,)?) => {$(
        impl RangedInteger for core::num::$target {
            const MIN_VALUE: i64 = $min;
            const MAX_VALUE: i64 = $int::MAX as i64;

            #[inline]
            fn from_wide_checked(value: i64) -> Option<Self> {
                match $int::try_from(value) {
                    Ok(value) => core::num::$target::new(value),
                    Err(_) => None,
                }
            }

            #[inline]
            fn to_wide(self) -> i64 {
                self.get() as i64
            }
        }
    )*};
}
// The signed envelopes include zero even though it is not a valid value:
// envelope containment is all the trait promises. NonZeroU64 and larger
// exceed the bounds domain.
impl_nonzero_ranged!(
    NonZeroU8 => u8, min = 1,
    NonZeroU16 => u16, min = 1,
    NonZeroU32 => u32, min = 1,
    NonZeroI8 => i8, min = i8::MIN as i64,
    NonZeroI16 => i16, min = i16::MIN as i64,
    NonZeroI32 => i32, min = i32::MIN as i64,
    NonZeroI64 => i64, min = i64::MIN,
);

#[cfg(feature = "nonmax")]
macro_rules! impl_nonmax_ranged {
    ($($target:ident => $int:ident),* $(,)?) => {$(
        impl RangedInteger for nonmax::$target {
            const MIN_VALUE: i64 = $int::MIN as i64;
            const MAX_VALUE: i64 = $int::MAX as i64 - 1;

            #[inline]
            fn from_wide_checked(value: i64) -> Option<Self> {
                match $int::try_from(value) {
                    Ok(value) => nonmax::$target::new(value),
                    Err(_) => None,
                }
            }

            #[inline]
            fn to_wide(self) -> i64 {
                self.get() as i64
            }
        }
    )*};
}
#[cfg(feature = "nonmax")]
impl_nonmax_ranged!(
    NonMaxU8 => u8,
    NonMaxU16 => u16,
    NonMaxU32 => u32,
    NonMaxI8 => i8,
    NonMaxI16 => i16,
    NonMaxI32 => i32,
    NonMaxI64 => i64,
);

#[cfg(feature = "num-traits")]
impl<const MIN: i64, const MAX: i64, P: crate::OverflowPolicy> num_traits::Bounded
    for crate::Ranged<MIN, MAX, P>
{
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

// SAFETY: Ranged is repr(transparent) over i64 (the policy marker is a
// 1-aligned ZST), so it has no padding or uninitialized bytes.
#[cfg(feature = "bytemuck")]
unsafe impl<const MIN: i64, const MAX: i64, P: crate::OverflowPolicy> bytemuck::NoUninit
    for crate::Ranged<MIN, MAX, P>
{
}

// SAFETY: any i64 is a valid *bit pattern* for the storage; the range
// invariant is exactly what is_valid_bit_pattern enforces before a checked
// transmute is allowed to produce a Ranged value.
#[cfg(feature = "bytemuck")]
unsafe impl<const MIN: i64, const MAX: i64, P: crate::OverflowPolicy> bytemuck::CheckedBitPattern
    for crate::Ranged<MIN, MAX, P>
{
    type Bits = i64;

    #[inline]
    fn is_valid_bit_pattern(bits: &i64) -> bool {
        Self::in_range(*bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ranged;

    #[test]
    fn primitive_round_trips() {
        assert_eq!(u8::from_wide_checked(255), Some(255u8));
        assert_eq!(u8::from_wide_checked(256), None);
        assert_eq!(i8::from_wide_checked(-128), Some(-128i8));
        assert_eq!(i8::from_wide_checked(-129), None);
        assert_eq!(200u8.to_wide(), 200);
        assert_eq!((-3i32).to_wide(), -3);
    }

    #[test]
    fn nonzero_excludes_zero_only() {
        use core::num::NonZeroU8;
        assert_eq!(NonZeroU8::from_wide_checked(0), None);
        assert_eq!(NonZeroU8::from_wide_checked(1), NonZeroU8::new(1));
        assert_eq!(NonZeroU8::from_wide_checked(256), None);
    }

    #[test]
    fn ranged_from_primitive_types() {
        let value: Ranged<0, 255> = Ranged::from_integer(200u8);
        assert_eq!(value, 200);
        let value: Ranged<-128, 1000> = Ranged::from_integer(-5i8);
        assert_eq!(value, -5);
    }
}
