//! The tombstone protocol: spare bit patterns of a type's storage, reusable
//! to encode absence at zero storage cost.
//!
//! A `Ranged<1, 10>` stores an `i64`, but only eleven bit patterns of that
//! storage are logical values. The patterns just outside the range can be
//! claimed by a container — an optional that stores "empty" as the pattern
//! `0`, a variant that parks its discriminant there — without widening the
//! type. The `niched` crate is the primary consumer.

use crate::policy::OverflowPolicy;
use crate::{private, Ranged};

/// A type with spare bit patterns beyond its logical value set.
///
/// The laws, checked by the test suite:
/// - `spare_index(make_spare(i)) == Some(i)` for every `i` in
///   `0..SPARE_REPRESENTATIONS`;
/// - `spare_index(v) == None` for every logical value `v`;
/// - dropping a value in a spare state is a no-op (spare states carry no
///   resources).
///
/// # Safety
/// Unsafe code is entitled to rely on the laws above. In particular, a tagged
/// union may decide whether a payload is live from `spare_index`, so a lying
/// implementation can cause reads of uninitialized storage.
pub unsafe trait Tombstone: Sized {
    /// How many spare bit patterns exist.
    ///
    /// For a ranged integer this follows the range slack against its storage:
    /// one pattern below the range (when the storage minimum is below `MIN`)
    /// and one above (when the storage maximum is above `MAX`).
    const SPARE_REPRESENTATIONS: u32;

    /// Construct the `index`-th spare pattern.
    ///
    /// # Panics
    /// Panics if `index >= SPARE_REPRESENTATIONS`.
    #[must_use]
    fn make_spare(index: u32) -> Self;

    /// Which spare pattern this value currently is, or `None` for a logical
    /// value.
    #[must_use]
    fn spare_index(&self) -> Option<u32>;
}

// SAFETY: spare patterns are the storage values MIN - 1 and MAX + 1, which
// are never logical values and carry no resources (the storage is a plain
// integer).
unsafe impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Tombstone for Ranged<MIN, MAX, P> {
    const SPARE_REPRESENTATIONS: u32 = (MIN > i64::MIN) as u32 + (MAX < i64::MAX) as u32;

    fn make_spare(index: u32) -> Self {
        let has_low = MIN > i64::MIN;
        let value = match (has_low, index) {
            (true, 0) => MIN - 1,
            (true, 1) | (false, 0) => {
                assert!(MAX < i64::MAX, "no spare representation with that index");
                MAX + 1
            }
            _ => panic!("no spare representation with that index"),
        };
        private::spare_pattern(value)
    }

    fn spare_index(&self) -> Option<u32> {
        let value = self.get();
        if value < MIN {
            Some(0)
        } else if value > MAX {
            Some(Self::SPARE_REPRESENTATIONS - 1)
        } else {
            None
        }
    }
}
