//! Formatting and parsing for ranged integers.

use core::fmt::{self, Formatter};
use core::str::FromStr;

use crate::error::{ParseError, RangeError};
use crate::policy::OverflowPolicy;
use crate::Ranged;

macro_rules! impl_fmt_traits {
    ($($trait:ident),*) => {$(
        impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> fmt::$trait
            for Ranged<MIN, MAX, P>
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                fmt::$trait::fmt(&self.get(), f)
            }
        }
    )*};
}

impl_fmt_traits!(Display, Debug, Binary, Octal, LowerHex, UpperHex);

impl<const MIN: i64, const MAX: i64, P: OverflowPolicy> FromStr for Ranged<MIN, MAX, P> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let value = i64::from_str(s).map_err(ParseError::Syntax)?;
        Self::new_checked(value).ok_or(ParseError::Range(RangeError {
            value,
            min: MIN,
            max: MAX,
        }))
    }
}
