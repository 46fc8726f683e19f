//! Selection of the smallest primitive representation for a bound pair.
//!
//! [`Ranged`](crate::Ranged) itself always stores an `i64` (the "fast"
//! representation), trading memory for uniform const-evaluable arithmetic.
//! The macro layers (`ranged::ranged_newtype!` and the `ranged_type!` proc
//! macro) emit "least" newtypes whose storage is the type chosen here; this
//! module is the canonical, tested form of that mapping.

/// The primitive integer types a ranged newtype can be stored in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[allow(missing_docs)] // the variants are the primitive type names
pub enum Repr {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl Repr {
    /// The size of the representation in bytes.
    #[must_use]
    pub const fn size_bytes(self) -> usize {
        match self {
            Repr::U8 | Repr::I8 => 1,
            Repr::U16 | Repr::I16 => 2,
            Repr::U32 | Repr::I32 => 4,
            Repr::U64 | Repr::I64 => 8,
        }
    }

    /// Whether the representation is a signed type.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Repr::I8 | Repr::I16 | Repr::I32 | Repr::I64)
    }

    /// The unqualified name of the primitive type, as written in source.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Repr::U8 => "u8",
            Repr::U16 => "u16",
            Repr::U32 => "u32",
            Repr::U64 => "u64",
            Repr::I8 => "i8",
            Repr::I16 => "i16",
            Repr::I32 => "i32",
            Repr::I64 => "i64",
        }
    }
}

/// Choose the smallest primitive able to represent every value in
/// `[min, max]`: the smallest unsigned type when the range is non-negative,
/// otherwise the smallest signed type.
///
/// # Panics
/// Panics if `min > max`.
#[must_use]
pub const fn select(min: i64, max: i64) -> Repr {
    assert!(min <= max, "Maximum cannot be less than minimum");
    if min >= 0 {
        if max <= u8::MAX as i64 {
            Repr::U8
        } else if max <= u16::MAX as i64 {
            Repr::U16
        } else if max <= u32::MAX as i64 {
            Repr::U32
        } else {
            Repr::U64
        }
    } else if min >= i8::MIN as i64 && max <= i8::MAX as i64 {
        Repr::I8
    } else if min >= i16::MIN as i64 && max <= i16::MAX as i64 {
        Repr::I16
    } else if min >= i32::MIN as i64 && max <= i32::MAX as i64 {
        Repr::I32
    } else {
        Repr::I64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_unsigned_for_non_negative() {
        assert_eq!(select(0, 1), Repr::U8);
        assert_eq!(select(1, 100), Repr::U8);
        assert_eq!(select(0, 255), Repr::U8);
        assert_eq!(select(0, 256), Repr::U16);
        assert_eq!(select(200, 70_000), Repr::U32);
        assert_eq!(select(0, i64::MAX), Repr::U64);
    }

    #[test]
    fn smallest_signed_for_negative() {
        assert_eq!(select(-1, 1), Repr::I8);
        assert_eq!(select(-128, 127), Repr::I8);
        assert_eq!(select(-129, 0), Repr::I16);
        assert_eq!(select(-1, 128), Repr::I16);
        assert_eq!(select(-1, 40_000), Repr::I32);
        assert_eq!(select(i64::MIN, 0), Repr::I64);
    }

    #[test]
    fn degenerate_single_value() {
        assert_eq!(select(7, 7), Repr::U8);
        assert_eq!(select(-7, -7), Repr::I8);
    }
}
