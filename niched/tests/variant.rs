//! The variant contract: discriminants, emplace, views, equality.

use niched::{Alt2, Alt3, Nothing, Variant2, Variant3};

#[test]
fn construction_sets_the_discriminant() {
    let v: Variant2<Nothing, i32> = Variant2::new_second(5);
    assert_eq!(v.index(), 1);
    assert_eq!(v.as_second(), Some(&5));
    assert_eq!(v.as_first(), None);
}

#[test]
fn emplace_switches_the_active_alternative() {
    let mut v: Variant2<Nothing, i32> = Variant2::new_second(5);
    v.emplace_first(|| Nothing);
    assert_eq!(v.index(), 0);
    assert_eq!(v.as_first(), Some(&Nothing));
    assert_eq!(v.as_second(), None);
}

#[test]
fn emplace_is_strongly_exception_safe() {
    extern crate std;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    let mut v: Variant2<u8, i32> = Variant2::new_first(42);
    let result = catch_unwind(AssertUnwindSafe(|| {
        v.emplace_second(|| panic!("constructor failed"));
    }));
    assert!(result.is_err());
    // The old alternative survived the failed emplace.
    assert_eq!(v.index(), 0);
    assert_eq!(v.as_first(), Some(&42));
}

#[test]
fn lazy_constructors() {
    let v: Variant3<u8, u16, u32> = Variant3::new_second_with(|| 700);
    assert_eq!(v.index(), 1);
    assert_eq!(v.as_second(), Some(&700));
}

#[test]
fn views_visit_the_active_alternative() {
    let mut v: Variant3<u8, u16, u32> = Variant3::new_third(9);
    let doubled = match v.view() {
        Alt3::First(x) => u32::from(*x) * 2,
        Alt3::Second(x) => u32::from(*x) * 2,
        Alt3::Third(x) => *x * 2,
    };
    assert_eq!(doubled, 18);

    if let Alt3::Third(x) = v.view_mut() {
        *x = 11;
    }
    assert_eq!(v.as_third(), Some(&11));
}

#[test]
fn equality_is_index_then_value() {
    let a: Variant2<u8, u8> = Variant2::new_first(7);
    let b: Variant2<u8, u8> = Variant2::new_second(7);
    assert_ne!(a, b);
    assert_eq!(a, Variant2::new_first(7));
    assert_ne!(a, Variant2::new_first(8));
}

#[test]
fn copy_and_mutate_through_unchecked_access() {
    let mut v: Variant2<u8, u16> = Variant2::new_first(1);
    assert_eq!(v.index(), 0);
    // SAFETY: the discriminant was just checked to be the first alternative.
    unsafe {
        *v.first_unchecked_mut() = 3;
    }
    assert_eq!(v.as_first(), Some(&3));
}

#[test]
fn into_view_consumes() {
    let v: Variant2<Nothing, i32> = Variant2::new_second(5);
    match v.into_view() {
        Alt2::Second(value) => assert_eq!(value, 5),
        Alt2::First(Nothing) => unreachable!(),
    }
}
