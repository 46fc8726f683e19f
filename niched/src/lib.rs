//! Sum and product types that exploit spare representations.
//!
//! Built on the [`Tombstone`](ranged::Tombstone) protocol of `ranged-core`:
//!
//! - [`Variant2`]/[`Variant3`] — tagged unions with a ranged discriminant
//!   whose unused patterns are themselves spare representations;
//! - [`Optional`] — zero-or-one values, storing emptiness in a spare pattern
//!   whenever the element type has one (so `Optional<Ranged<1, 10>>` is
//!   exactly the size of `Ranged<1, 10>`), with an explicit-discriminant
//!   fallback otherwise;
//! - [`Tuple2`]/[`Tuple3`] — thin named structural products.
#![no_std]

mod optional;
mod tuple;
mod variant;

pub use optional::{NicheSlot, Nothing, Optional, RawSlot, Slot, TaggedSlot};
pub use tuple::{Tuple2, Tuple3};
pub use variant::{Alt2, Alt3, Variant2, Variant3};
