//! Range-checked serde support.
//!
//! A ranged integer serializes as its underlying `i64`; deserialization
//! re-checks the range so untrusted input can never smuggle an out-of-range
//! value past the invariant.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RangeError;
use crate::policy::OverflowPolicy;
use crate::Ranged;

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> Serialize for Ranged<MIN, MAX, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, const MIN: i64, const MAX: i64, P: OverflowPolicy> Deserialize<'de>
    for Ranged<MIN, MAX, P>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::new_checked(value).ok_or_else(|| {
            D::Error::custom(RangeError {
                value,
                min: MIN,
                max: MAX,
            })
        })
    }
}
