//! Integers that carry their range in their type.
//!
//! [`Ranged<MIN, MAX, P>`](Ranged) stores one value known to lie in
//! `[MIN, MAX]`. Arithmetic does not silently wrap or saturate: the
//! *widening* operations ([`Ranged::widening_add`] and friends) produce a
//! value of a caller-named result type whose bounds are verified at compile
//! time against the derivation in the [`bounds`] module, while compound
//! assignment narrows back into the left operand's range through its
//! [`OverflowPolicy`].
//!
//! This crate contains all the same types that the `ranged` crate does, but
//! has no dependency on `ranged_derive`. It may be convenient to rename the
//! `ranged_core` dependency to `ranged` using [dependency renaming]:
//! ```toml
//! ranged = { version = "0.2", package = "ranged-core" }
//! ```
//!
//! ```
//! use ranged_core::Ranged;
//!
//! let level: Ranged<1, 10> = Ranged::new(9);
//! let delta: Ranged<-3, 11> = Ranged::new(4);
//! let sum: Ranged<-2, 21> = level.widening_add(delta);
//! assert_eq!(sum, 13);
//! ```
//!
//! [dependency renaming]: https://doc.rust-lang.org/cargo/reference/specifying-dependencies.html#renaming-dependencies-in-cargotoml
#![no_std]

use core::marker::PhantomData;

pub mod bounds;
mod cmp;
mod error;
mod fixed;
mod fmt;
mod impls;
mod iter;
mod ops;
pub mod policy;
pub mod repr;
#[cfg(feature = "serde")]
mod serde;
pub mod tombstone;

pub use error::{ParseError, RangeError};
pub use fixed::Fixed;
pub use iter::RangedValues;
pub use policy::{OverflowPolicy, Saturating, Strict, Unchecked, Wrapping};
pub use tombstone::Tombstone;

use bounds::Bounds;

/// An integer which can be described by an `i64` value and a static
/// `[MIN_VALUE, MAX_VALUE]` envelope.
///
/// This is the uniform conversion surface shared by [`Ranged`], [`Fixed`],
/// the newtypes emitted by the macro layers, the primitive integers that fit
/// the bounds domain, and the `NonZero` family. Not every value of the
/// envelope needs to be valid (`NonZero` excludes zero), but every valid
/// value must round-trip through [`RangedInteger::to_wide`].
pub trait RangedInteger: Copy + Eq + core::fmt::Debug + Send + Sync + 'static {
    /// The smallest `i64` this type may convert to.
    const MIN_VALUE: i64;
    /// The largest `i64` this type may convert to.
    const MAX_VALUE: i64;

    /// Create a value from the underlying integer,
    /// returning `None` if the value is invalid.
    fn from_wide_checked(value: i64) -> Option<Self>;

    /// Convert this value into the underlying integer.
    ///
    /// This can never fail: every valid instance corresponds to an `i64`.
    fn to_wide(self) -> i64;

    /// Create a value from the underlying integer,
    /// panicking if the value is invalid.
    #[inline]
    #[track_caller]
    fn from_wide(value: i64) -> Self {
        match Self::from_wide_checked(value) {
            Some(success) => success,
            None => error::invalid_value(value, Self::MIN_VALUE, Self::MAX_VALUE),
        }
    }

    /// Create a value from the underlying integer without checking validity.
    ///
    /// # Safety
    /// The value must be valid for this type. The default implementation
    /// simply delegates to [`RangedInteger::from_wide`] and is always safe;
    /// implementations that skip the check may produce values violating
    /// their own invariants if the caller lies.
    #[inline]
    unsafe fn from_wide_unchecked(value: i64) -> Self {
        Self::from_wide(value)
    }
}

/// An integer statically known to lie in `[MIN, MAX]`.
///
/// The stored representation is always an `i64` (the "fast" representation);
/// the macro layers of the `ranged` crate provide "least" newtypes stored in
/// the smallest primitive per [`repr::select`]. `P` decides what happens when
/// a value must be narrowed into `[MIN, MAX]` without a static proof, and
/// occupies no storage.
///
/// The range invariant holds at every observation point. The only ways to
/// break it are [`Ranged::new_unchecked`] (which is `unsafe` and
/// debug-asserted) and the [`Tombstone`] spare patterns, which are never
/// exposed as live values.
#[repr(transparent)]
pub struct Ranged<const MIN: i64, const MAX: i64, P: OverflowPolicy = Strict> {
    value: i64,
    // fn() -> P keeps the marker Send + Sync regardless of P.
    policy: PhantomData<fn() -> P>,
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Copy for Ranged<MIN, MAX, P> {}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Clone for Ranged<MIN, MAX, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Ranged<MIN, MAX, P> {
    /// The smallest value this ranged integer can contain.
    pub const MIN_VALUE: i64 = MIN;
    /// The largest value this ranged integer can contain.
    pub const MAX_VALUE: i64 = MAX;

    /// The smallest value of the ranged integer.
    pub const MIN: Self = {
        assert!(MIN <= MAX, "Maximum cannot be less than minimum");
        Self {
            value: MIN,
            policy: PhantomData,
        }
    };
    /// The largest value of the ranged integer.
    pub const MAX: Self = {
        assert!(MIN <= MAX, "Maximum cannot be less than minimum");
        Self {
            value: MAX,
            policy: PhantomData,
        }
    };

    /// The static bounds of this type, in the form the [`bounds`] module
    /// derives with.
    #[must_use]
    pub const fn bounds() -> Bounds {
        Bounds::of(MIN, MAX)
    }

    /// Whether `value` lies in `[MIN, MAX]`.
    #[must_use]
    #[inline]
    pub const fn in_range(value: i64) -> bool {
        MIN <= value && value <= MAX
    }

    /// Create a ranged integer, panicking if the value is out of range.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn new(value: i64) -> Self {
        match Self::new_checked(value) {
            Some(this) => this,
            None => error::invalid_value(value, MIN, MAX),
        }
    }

    /// Create a ranged integer, returning `None` if the value is out of range.
    #[must_use]
    #[inline]
    pub const fn new_checked(value: i64) -> Option<Self> {
        const {
            assert!(MIN <= MAX, "Maximum cannot be less than minimum");
        }
        if Self::in_range(value) {
            Some(Self {
                value,
                policy: PhantomData,
            })
        } else {
            None
        }
    }

    /// Create a ranged integer without checking the value.
    ///
    /// # Safety
    /// The value must lie in `[MIN, MAX]`. An out-of-range value breaks the
    /// library invariant every consumer of this type relies on (including
    /// the tombstone machinery), though it cannot by itself cause memory
    /// unsafety.
    #[must_use]
    #[inline]
    pub const unsafe fn new_unchecked(value: i64) -> Self {
        const {
            assert!(MIN <= MAX, "Maximum cannot be less than minimum");
        }
        debug_assert!(MIN <= value && value <= MAX);
        Self {
            value,
            policy: PhantomData,
        }
    }

    /// Create a ranged integer from any [`RangedInteger`] whose envelope is
    /// statically contained in `[MIN, MAX]`.
    ///
    /// The containment proof happens at compile time; a type that does not
    /// fit fails to build. This is the implicit-conversion counterpart of
    /// [`Ranged::narrowed`].
    #[must_use]
    #[inline]
    pub fn from_integer<T: RangedInteger>(value: T) -> Self {
        const {
            assert!(
                MIN <= T::MIN_VALUE && T::MAX_VALUE <= MAX,
                "source type does not statically fit in the target range"
            );
        }
        // SAFETY: the containment assertion above proves every value of T
        // lies in [MIN, MAX].
        unsafe { Self::new_unchecked(value.to_wide()) }
    }

    /// Narrow an arbitrary value into range through the overflow policy `P`.
    #[must_use]
    #[inline]
    pub fn narrowed(value: i64) -> Self {
        let narrowed = P::assignment(value as i128, MIN, MAX);
        // SAFETY: every policy returns a value in [MIN, MAX] (or diverges).
        unsafe { Self::new_unchecked(narrowed) }
    }

    /// The stored value.
    #[must_use]
    #[inline]
    pub const fn get(self) -> i64 {
        self.value
    }

    /// Convert to a wider (or equal) range without any runtime work.
    ///
    /// Containment is checked at compile time.
    #[must_use]
    #[inline]
    pub const fn widen<const NMIN: i64, const NMAX: i64>(self) -> Ranged<NMIN, NMAX, P> {
        const {
            assert!(
                NMIN <= MIN && MAX <= NMAX,
                "widen requires the target range to contain the source range"
            );
        }
        // SAFETY: [MIN, MAX] is contained in [NMIN, NMAX].
        unsafe { Ranged::new_unchecked(self.value) }
    }

    /// Convert to a narrower range, returning `None` if the current value
    /// does not fit.
    #[must_use]
    #[inline]
    pub const fn narrow_checked<const NMIN: i64, const NMAX: i64>(
        self,
    ) -> Option<Ranged<NMIN, NMAX, P>> {
        Ranged::new_checked(self.value)
    }

    /// Convert to a narrower range through the overflow policy `P`.
    #[must_use]
    #[inline]
    pub fn narrow<const NMIN: i64, const NMAX: i64>(self) -> Ranged<NMIN, NMAX, P> {
        Ranged::narrowed(self.value)
    }

    /// Iterate every value of the range in ascending order.
    #[must_use]
    pub const fn values() -> RangedValues<MIN, MAX, P> {
        RangedValues::new()
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> RangedInteger for Ranged<MIN, MAX, P> {
    const MIN_VALUE: i64 = MIN;
    const MAX_VALUE: i64 = MAX;

    #[inline]
    fn from_wide_checked(value: i64) -> Option<Self> {
        Self::new_checked(value)
    }

    #[inline]
    unsafe fn from_wide_unchecked(value: i64) -> Self {
        // SAFETY: guaranteed by the caller.
        unsafe { Self::new_unchecked(value) }
    }

    #[inline]
    fn to_wide(self) -> i64 {
        self.value
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> TryFrom<i64> for Ranged<MIN, MAX, P> {
    type Error = RangeError;

    #[inline]
    fn try_from(value: i64) -> Result<Self, RangeError> {
        Self::new_checked(value).ok_or(RangeError {
            value,
            min: MIN,
            max: MAX,
        })
    }
}

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> From<Ranged<MIN, MAX, P>> for i64 {
    #[inline]
    fn from(value: Ranged<MIN, MAX, P>) -> i64 {
        value.get()
    }
}

pub(crate) mod private {
    //! Crate-internal constructors that bypass the range invariant.

    use super::{OverflowPolicy, PhantomData, Ranged};

    /// Build a `Ranged` holding a tombstone (out-of-range) bit pattern.
    ///
    /// Only the tombstone module may create such values, and they are never
    /// observable through the safe API of a live optional.
    pub(crate) const fn spare_pattern<const MIN: i64, const MAX: i64, P: OverflowPolicy>(
        value: i64,
    ) -> Ranged<MIN, MAX, P> {
        Ranged {
            value,
            policy: PhantomData,
        }
    }
}
