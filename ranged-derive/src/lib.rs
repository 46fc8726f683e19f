//! Implements the [`ranged_type!`] macro.
//!
//! Generally, you want to use the re-export from the `ranged` crate, which
//! requires explicitly enabling the `derive` feature. The emitted code refers
//! to items by `ranged::` paths, so the invoking crate must depend on the
//! `ranged` facade crate (or rename `ranged-core` to `ranged`).
#![allow(clippy::missing_panics_doc, clippy::missing_errors_doc)]

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, RangeLimits, Token, Visibility};

/// Define a newtype over the smallest primitive able to hold a range.
///
/// ```ignore
/// ranged_type! {
///     /// A percentage.
///     pub struct Percent: 0..=100;
/// }
/// ```
///
/// The macro computes the "least" storage representation for the bound pair
/// (here `u8`), emits a `#[repr(transparent)]` newtype over it together with
/// `RangedInteger` and `Tombstone` implementations, and conversions to and
/// from `ranged::Ranged<MIN, MAX>`. A single-valued range (`MIN == MAX`)
/// emits a zero-sized unit struct instead.
#[proc_macro]
pub fn ranged_type(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let parsed = syn::parse_macro_input!(input as RangedTypeInput);
    expand(&parsed)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct RangedTypeInput {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: syn::Ident,
    min: i64,
    max: i64,
    range_span: proc_macro2::Span,
}

impl Parse for RangedTypeInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: syn::Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let range_expr: Expr = input.parse()?;
        input.parse::<Token![;]>()?;

        let range_span = range_expr.span();
        let Expr::Range(range) = range_expr else {
            return Err(syn::Error::new(
                range_span,
                "expected an inclusive range like `0..=100`",
            ));
        };
        if !matches!(range.limits, RangeLimits::Closed(_)) {
            return Err(syn::Error::new(
                range_span,
                "expected an inclusive range like `0..=100`",
            ));
        }
        let min = eval_bound(range.start.as_deref(), range_span)?;
        let max = eval_bound(range.end.as_deref(), range_span)?;
        if min > max {
            return Err(syn::Error::new(
                range_span,
                "minimum must not be greater than maximum",
            ));
        }
        Ok(RangedTypeInput {
            attrs,
            vis,
            name,
            min,
            max,
            range_span,
        })
    }
}

/// Evaluate a range endpoint: an integer literal, possibly negated.
fn eval_bound(expr: Option<&Expr>, span: proc_macro2::Span) -> syn::Result<i64> {
    let expr = expr.ok_or_else(|| syn::Error::new(span, "both range endpoints are required"))?;
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse::<i64>(),
        Expr::Unary(ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => match &**expr {
            Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) => {
                // Parse through i128 so -i64::MIN's magnitude is representable.
                let magnitude = lit.base10_parse::<i128>()?;
                i64::try_from(-magnitude)
                    .map_err(|_| syn::Error::new(expr.span(), "bound does not fit in i64"))
            }
            other => Err(syn::Error::new(
                other.span(),
                "range endpoints must be integer literals",
            )),
        },
        other => Err(syn::Error::new(
            other.span(),
            "range endpoints must be integer literals",
        )),
    }
}

/// The representation selection, mirrored from `ranged_core::repr::select`
/// (macro expansion cannot call into the target crate, so the arithmetic is
/// duplicated here and cross-checked by the emitted size assertions).
fn select_repr(min: i64, max: i64) -> (&'static str, i128, i128) {
    if min >= 0 {
        if max <= i64::from(u8::MAX) {
            ("u8", 0, u8::MAX as i128)
        } else if max <= i64::from(u16::MAX) {
            ("u16", 0, u16::MAX as i128)
        } else if max <= i64::from(u32::MAX) {
            ("u32", 0, u32::MAX as i128)
        } else {
            ("u64", 0, u64::MAX as i128)
        }
    } else if min >= i64::from(i8::MIN) && max <= i64::from(i8::MAX) {
        ("i8", i8::MIN as i128, i8::MAX as i128)
    } else if min >= i64::from(i16::MIN) && max <= i64::from(i16::MAX) {
        ("i16", i16::MIN as i128, i16::MAX as i128)
    } else if min >= i64::from(i32::MIN) && max <= i64::from(i32::MAX) {
        ("i32", i32::MIN as i128, i32::MAX as i128)
    } else {
        ("i64", i64::MIN as i128, i64::MAX as i128)
    }
}

fn expand(input: &RangedTypeInput) -> syn::Result<TokenStream> {
    if input.min == input.max {
        return Ok(expand_unit(input));
    }
    Ok(expand_newtype(input))
}

/// A single-valued range needs no storage at all.
fn expand_unit(input: &RangedTypeInput) -> TokenStream {
    let RangedTypeInput {
        attrs,
        vis,
        name,
        min,
        ..
    } = input;
    let value = *min;
    let doc_value = format!("The only value of `{name}`: `{value}`.");
    quote! {
        #(#attrs)*
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #vis struct #name;

        #[automatically_derived]
        impl #name {
            #[doc = #doc_value]
            pub const VALUE: i64 = #value;

            /// The constant's value.
            #[must_use]
            pub const fn get(self) -> i64 {
                Self::VALUE
            }

            /// The single-valued ranged integer holding this constant.
            #[must_use]
            pub const fn widen(self) -> ranged::Ranged<{ #value }, { #value }> {
                // SAFETY: the value is trivially within its own range.
                unsafe { ranged::Ranged::new_unchecked(Self::VALUE) }
            }
        }

        #[automatically_derived]
        impl ranged::RangedInteger for #name {
            const MIN_VALUE: i64 = #value;
            const MAX_VALUE: i64 = #value;

            #[inline]
            fn from_wide_checked(value: i64) -> Option<Self> {
                if value == Self::VALUE {
                    Some(#name)
                } else {
                    None
                }
            }

            #[inline]
            fn to_wide(self) -> i64 {
                Self::VALUE
            }
        }

        #[automatically_derived]
        impl core::fmt::Display for #name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&Self::VALUE, f)
            }
        }
    }
}

fn expand_newtype(input: &RangedTypeInput) -> TokenStream {
    let RangedTypeInput {
        attrs,
        vis,
        name,
        min,
        max,
        range_span,
    } = input;
    let (min, max) = (*min, *max);
    let (repr_name, repr_min, repr_max) = select_repr(min, max);
    let repr = format_ident!("{}", repr_name, span = *range_span);

    let spare_low = repr_min < i128::from(min);
    let spare_high = i128::from(max) < repr_max;
    let spare_count = u32::from(spare_low) + u32::from(spare_high);

    let doc_struct_range = format!("Values lie in `{min}..={max}`, stored as `{repr_name}`.");
    let doc_new = format!("Create a `{name}`, panicking if the value is outside `{min}..={max}`.");
    let doc_new_checked =
        format!("Create a `{name}`, returning `None` if the value is outside `{min}..={max}`.");

    let make_spare_arms = {
        let mut arms = TokenStream::new();
        if spare_low {
            let low = min - 1;
            arms.extend(quote! { 0 => #low as #repr, });
        }
        if spare_high {
            let high_index = u32::from(spare_low);
            let high = max + 1;
            arms.extend(quote! { #high_index => #high as #repr, });
        }
        arms
    };
    let spare_index_body = {
        let low_arm = if spare_low {
            quote! {
                if (self.0 as i64) < #min {
                    return Some(0);
                }
            }
        } else {
            TokenStream::new()
        };
        let high_arm = if spare_high {
            let high_index = u32::from(spare_low);
            quote! {
                if (self.0 as i64) > #max {
                    return Some(#high_index);
                }
            }
        } else {
            TokenStream::new()
        };
        quote! {
            #low_arm
            #high_arm
            None
        }
    };

    quote! {
        #(#attrs)*
        #[doc = #doc_struct_range]
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[repr(transparent)]
        #vis struct #name(#repr);

        #[automatically_derived]
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        #[allow(clippy::cast_sign_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
        impl #name {
            /// The smallest value this type can contain.
            pub const MIN_VALUE: i64 = #min;
            /// The largest value this type can contain.
            pub const MAX_VALUE: i64 = #max;

            /// The smallest value of this type.
            pub const MIN: Self = Self(#min as #repr);
            /// The largest value of this type.
            pub const MAX: Self = Self(#max as #repr);

            #[doc = #doc_new_checked]
            #[must_use]
            pub const fn new_checked(value: #repr) -> Option<Self> {
                if (value as i64) >= #min && (value as i64) <= #max {
                    Some(Self(value))
                } else {
                    None
                }
            }

            #[doc = #doc_new]
            #[must_use]
            #[track_caller]
            pub const fn new(value: #repr) -> Self {
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
            pub const unsafe fn new_unchecked(value: #repr) -> Self {
                debug_assert!((value as i64) >= #min && (value as i64) <= #max);
                Self(value)
            }

            /// The stored value.
            #[must_use]
            pub const fn get(self) -> #repr {
                self.0
            }

            /// Convert into the fast (i64-stored) ranged integer with the
            /// same bounds.
            #[must_use]
            pub const fn widen(self) -> ranged::Ranged<{ #min }, { #max }> {
                // SAFETY: the stored value respects the range invariant.
                unsafe { ranged::Ranged::new_unchecked(self.0 as i64) }
            }

            /// Convert back from the fast ranged integer with the same
            /// bounds.
            #[must_use]
            pub const fn from_ranged<P: ranged::OverflowPolicy>(
                value: ranged::Ranged<{ #min }, { #max }, P>,
            ) -> Self {
                Self(value.get() as #repr)
            }
        }

        #[automatically_derived]
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        #[allow(clippy::cast_sign_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
        impl ranged::RangedInteger for #name {
            const MIN_VALUE: i64 = #min;
            const MAX_VALUE: i64 = #max;

            #[inline]
            fn from_wide_checked(value: i64) -> Option<Self> {
                if value >= #min && value <= #max {
                    Some(Self(value as #repr))
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
        unsafe impl ranged::Tombstone for #name {
            const SPARE_REPRESENTATIONS: u32 = #spare_count;

            fn make_spare(index: u32) -> Self {
                let value = match index {
                    #make_spare_arms
                    _ => panic!("no spare representation with that index"),
                };
                Self(value)
            }

            fn spare_index(&self) -> Option<u32> {
                #spare_index_body
            }
        }

        #[automatically_derived]
        impl core::fmt::Display for #name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }
    }
}
