//! Statically range-checked integers.
//!
//! This crate re-exports everything in `ranged-core` and adds the macro
//! layers: the declarative [`ranged_newtype!`] macro, and (behind the
//! `derive` feature) the [`ranged_type!`] procedural macro that computes the
//! smallest storage representation for you.
//!
//! ```
//! use ranged::Ranged;
//!
//! let held: Ranged<0, 54> = Ranged::new(33);
//! let gained: Ranged<1, 6> = Ranged::new(4);
//! let total: Ranged<1, 60> = held.widening_add(gained);
//! assert_eq!(total, 37);
//! ```
#![no_std]

pub use ranged_core::*;

#[cfg(feature = "derive")]
pub use ranged_derive::ranged_type;

mod macros;
