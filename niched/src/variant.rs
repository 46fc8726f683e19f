//! Fixed-arity tagged unions with a ranged discriminant.
//!
//! A variant is a manually managed union of alternative slots plus a raw
//! discriminant byte. Exactly one alternative is live at a time; switching
//! alternatives constructs the replacement value *before* destroying the old
//! one, so a panicking constructor leaves the variant in its previous state.
//!
//! Discriminant values above the alternative count are spare patterns in the
//! sense of [`Tombstone`], which is how `Optional<Variant2<..>>` costs no
//! extra storage.

use core::fmt;
use core::mem::ManuallyDrop;

use ranged::{Ranged, Tombstone};

/// Panic for access to a variant whose discriminant holds a spare pattern.
#[inline(never)]
#[cold]
fn tombstone_state() -> ! {
    panic!("variant accessed while holding a tombstone pattern")
}

macro_rules! define_variant {
    (
        $(#[$type_doc:meta])*
        $name:ident, $union_name:ident, $view:ident, count = $count:literal, max_index = $max_index:literal;
        $(
            ($idx:literal, $type_param:ident, $view_variant:ident, $field:ident,
             $new:ident, $new_with:ident, $as_ref:ident, $as_mut:ident,
             $unchecked_ref:ident, $unchecked_mut:ident, $emplace:ident)
        ),+ $(,)?
    ) => {
        union $union_name<$($type_param),+> {
            $($field: ManuallyDrop<$type_param>,)+
            // Storage for tombstone states: no alternative is live.
            uninit: (),
        }

        /// A borrowed or owned view of a variant's single live alternative.
        ///
        /// Matching on the view is the visit dispatcher: every arm gets the
        /// alternative's real type.
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        pub enum $view<$($type_param),+> {
            $(
                #[allow(missing_docs)] // the variant name mirrors the accessor names
                $view_variant($type_param),
            )+
        }

        $(#[$type_doc])*
        pub struct $name<$($type_param),+> {
            /// Logical values are `0..count`; anything above is a spare
            /// pattern and means no alternative is live.
            index: u8,
            data: $union_name<$($type_param),+>,
        }

        impl<$($type_param),+> $name<$($type_param),+> {
            $(
                /// Construct with this alternative active.
                pub fn $new(value: $type_param) -> Self {
                    Self {
                        index: $idx,
                        data: $union_name { $field: ManuallyDrop::new(value) },
                    }
                }

                /// Construct with this alternative active, from a
                /// zero-argument constructor function.
                pub fn $new_with(construct: impl FnOnce() -> $type_param) -> Self {
                    Self::$new(construct())
                }

                /// Borrow this alternative, or `None` if it is not the
                /// active one.
                #[must_use]
                pub fn $as_ref(&self) -> Option<&$type_param> {
                    if self.index == $idx {
                        // SAFETY: the discriminant says this field is live.
                        Some(unsafe { &self.data.$field })
                    } else {
                        None
                    }
                }

                /// Mutably borrow this alternative, or `None` if it is not
                /// the active one.
                #[must_use]
                pub fn $as_mut(&mut self) -> Option<&mut $type_param> {
                    if self.index == $idx {
                        // SAFETY: the discriminant says this field is live.
                        Some(unsafe { &mut self.data.$field })
                    } else {
                        None
                    }
                }

                /// Borrow this alternative without checking the discriminant.
                ///
                /// # Safety
                /// This alternative must be the active one; the caller is
                /// expected to have checked [`index`](Self::index) first.
                #[must_use]
                pub unsafe fn $unchecked_ref(&self) -> &$type_param {
                    debug_assert!(self.index == $idx);
                    // SAFETY: guaranteed by the caller.
                    unsafe { &self.data.$field }
                }

                /// Mutably borrow this alternative without checking the
                /// discriminant.
                ///
                /// # Safety
                /// This alternative must be the active one.
                #[must_use]
                pub unsafe fn $unchecked_mut(&mut self) -> &mut $type_param {
                    debug_assert!(self.index == $idx);
                    // SAFETY: guaranteed by the caller.
                    unsafe { &mut self.data.$field }
                }

                /// Make this alternative the active one, constructing its
                /// value from a zero-argument function.
                ///
                /// The replacement is fully constructed before the old
                /// alternative is destroyed: if `construct` panics, the
                /// variant still holds its previous value.
                pub fn $emplace(&mut self, construct: impl FnOnce() -> $type_param) -> &mut $type_param {
                    let value = construct();
                    self.clear_active();
                    self.data = $union_name { $field: ManuallyDrop::new(value) };
                    self.index = $idx;
                    // SAFETY: just stored under this discriminant.
                    unsafe { &mut self.data.$field }
                }
            )+

            /// The active alternative's index.
            ///
            /// # Panics
            /// Panics if the variant holds a tombstone pattern; that state is
            /// only reachable through the [`Tombstone`] protocol and never
            /// observed through a live optional.
            #[must_use]
            pub fn index(&self) -> Ranged<0, $max_index> {
                if self.index > $max_index {
                    tombstone_state();
                }
                Ranged::new(self.index as i64)
            }

            /// View the active alternative by reference.
            #[must_use]
            pub fn view(&self) -> $view<$(&$type_param),+> {
                match self.index {
                    $(
                        // SAFETY: the discriminant says this field is live.
                        $idx => $view::$view_variant(unsafe { &self.data.$field }),
                    )+
                    _ => tombstone_state(),
                }
            }

            /// View the active alternative by mutable reference.
            #[must_use]
            pub fn view_mut(&mut self) -> $view<$(&mut $type_param),+> {
                match self.index {
                    $(
                        // SAFETY: the discriminant says this field is live.
                        $idx => $view::$view_variant(unsafe { &mut self.data.$field }),
                    )+
                    _ => tombstone_state(),
                }
            }

            /// Consume the variant, returning the active alternative.
            #[must_use]
            pub fn into_view(self) -> $view<$($type_param),+> {
                let mut this = ManuallyDrop::new(self);
                match this.index {
                    $(
                        $idx => {
                            // SAFETY: the discriminant says this field is live.
                            let slot = unsafe { &mut this.data.$field };
                            // SAFETY: ownership moves out exactly once; the
                            // original's Drop is suppressed by ManuallyDrop.
                            $view::$view_variant(unsafe { ManuallyDrop::take(slot) })
                        }
                    )+
                    _ => tombstone_state(),
                }
            }

            /// Destroy the active alternative, if any, leaving the
            /// discriminant stale. Callers must store a new alternative (or
            /// a spare pattern) before the value is observed again.
            fn clear_active(&mut self) {
                match self.index {
                    $(
                        $idx => {
                            // SAFETY: the discriminant says this field is
                            // live, and it is not used again afterwards.
                            unsafe { ManuallyDrop::drop(&mut self.data.$field) }
                        }
                    )+
                    // Tombstone state: nothing is live.
                    _ => {}
                }
            }
        }

        impl<$($type_param),+> Drop for $name<$($type_param),+> {
            fn drop(&mut self) {
                self.clear_active();
            }
        }

        impl<$($type_param: Clone),+> Clone for $name<$($type_param),+> {
            fn clone(&self) -> Self {
                match self.index {
                    $(
                        $idx => {
                            // SAFETY: the discriminant says this field is live.
                            let value = unsafe { &self.data.$field };
                            Self::$new($type_param::clone(value))
                        }
                    )+
                    // Spare states carry no payload; reproduce the pattern.
                    other => Self {
                        index: other,
                        data: $union_name { uninit: () },
                    },
                }
            }
        }

        impl<$($type_param: PartialEq),+> PartialEq for $name<$($type_param),+> {
            fn eq(&self, other: &Self) -> bool {
                if self.index != other.index {
                    return false;
                }
                match self.index {
                    $(
                        $idx => {
                            // SAFETY: both discriminants say this field is live.
                            let lhs = unsafe { &self.data.$field };
                            // SAFETY: as above, for the right-hand side.
                            let rhs = unsafe { &other.data.$field };
                            lhs == rhs
                        }
                    )+
                    // Matching spare patterns compare equal.
                    _ => true,
                }
            }
        }

        impl<$($type_param: Eq),+> Eq for $name<$($type_param),+> {}

        impl<$($type_param: fmt::Debug),+> fmt::Debug for $name<$($type_param),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.index {
                    $(
                        $idx => {
                            // SAFETY: the discriminant says this field is live.
                            let value: &$type_param = unsafe { &self.data.$field };
                            f.debug_tuple(stringify!($name)).field(value).finish()
                        }
                    )+
                    _ => f.write_str(concat!(stringify!($name), "(<spare>)")),
                }
            }
        }

        // SAFETY: spare patterns are discriminants >= the alternative count
        // with no live payload; they never alias a logical state, and
        // clear_active treats them as empty, so dropping one is a no-op.
        unsafe impl<$($type_param),+> Tombstone for $name<$($type_param),+> {
            // The discriminant's logical range is [0, count - 1] inside a u8:
            // no slack below, one reserved pattern above.
            const SPARE_REPRESENTATIONS: u32 = 1;

            fn make_spare(index: u32) -> Self {
                assert!(index == 0, "no spare representation with that index");
                Self {
                    index: $count,
                    data: $union_name { uninit: () },
                }
            }

            fn spare_index(&self) -> Option<u32> {
                if self.index >= $count {
                    Some(0)
                } else {
                    None
                }
            }
        }
    };
}

define_variant! {
    /// A tagged union of two alternatives.
    ///
    /// ```
    /// use niched::{Alt2, Variant2};
    ///
    /// let mut v: Variant2<bool, i32> = Variant2::new_second(5);
    /// assert_eq!(v.index(), 1);
    /// assert_eq!(v.as_second(), Some(&5));
    /// v.emplace_first(|| true);
    /// assert_eq!(v.index(), 0);
    /// match v.view() {
    ///     Alt2::First(flag) => assert!(*flag),
    ///     Alt2::Second(_) => unreachable!(),
    /// }
    /// ```
    Variant2, Union2, Alt2, count = 2, max_index = 1;
    (0, A, First, a, new_first, new_first_with, as_first, as_first_mut,
     first_unchecked, first_unchecked_mut, emplace_first),
    (1, B, Second, b, new_second, new_second_with, as_second, as_second_mut,
     second_unchecked, second_unchecked_mut, emplace_second),
}

define_variant! {
    /// A tagged union of three alternatives.
    Variant3, Union3, Alt3, count = 3, max_index = 2;
    (0, A, First, a, new_first, new_first_with, as_first, as_first_mut,
     first_unchecked, first_unchecked_mut, emplace_first),
    (1, B, Second, b, new_second, new_second_with, as_second, as_second_mut,
     second_unchecked, second_unchecked_mut, emplace_second),
    (2, C, Third, c, new_third, new_third_with, as_third, as_third_mut,
     third_unchecked, third_unchecked_mut, emplace_third),
}
