//! End-to-end checks of the widening arithmetic contract on the public API.

use itertools::iproduct;
use ranged_core::{Fixed, Ranged, RangedInteger};

#[test]
fn addition_scenario() {
    let a: Ranged<1, 10> = Ranged::new(9);
    let b: Ranged<-3, 11> = Ranged::new(4);
    let sum: Ranged<-2, 21> = a.widening_add(b);
    assert_eq!(sum, 13);
}

#[test]
fn multiplication_scenario() {
    let a: Ranged<1, 10> = Ranged::new(9);
    let b: Ranged<-3, 11> = Ranged::new(4);
    let product: Ranged<-30, 110> = a.widening_mul(b);
    assert_eq!(product, 36);
}

#[test]
fn remainder_scenario() {
    // Truncated-division semantics: the sign follows the dividend.
    let a: Ranged<17, 23> = Ranged::new(20);
    let b: Ranged<-54, -6> = Ranged::new(-33);
    let remainder: Ranged<0, 23> = a.widening_rem(b);
    assert_eq!(remainder, 20);

    let a: Ranged<-54, -6> = Ranged::new(-33);
    let b: Ranged<17, 23> = Ranged::new(20);
    let remainder: Ranged<-22, 0> = a.widening_rem(b);
    assert_eq!(remainder, -13);
}

#[test]
fn division_keeps_sign_rules() {
    let a: Ranged<7, 100> = Ranged::new(9);
    let b: Ranged<3, 5> = Ranged::new(4);
    let quotient: Ranged<1, 33> = a.widening_div(b);
    assert_eq!(quotient, 2);

    let a: Ranged<7, 100> = Ranged::new(9);
    let b: Ranged<-8, -2> = Ranged::new(-4);
    let quotient: Ranged<-50, 0> = a.widening_div(b);
    assert_eq!(quotient, -2);
}

#[test]
fn negating_the_most_negative_i32_is_exact() {
    const MINIMUM: i64 = i32::MIN as i64;
    let value = Fixed::<MINIMUM>.to_ranged();
    let negated: Ranged<{ -MINIMUM }, { -MINIMUM }> = value.widening_neg();
    assert_eq!(negated, 2_147_483_648);
}

#[test]
fn every_value_pair_lands_in_the_result_range() {
    type Sum = Ranged<-2, 21>;
    for (a, b) in iproduct!(Ranged::<1, 10>::values(), Ranged::<-3, 11>::values()) {
        let sum: Sum = a.widening_add(b);
        assert!(Sum::in_range(sum.get()));
        assert_eq!(sum.get(), a.get() + b.get());
    }
}

#[test]
fn round_trip_through_a_wider_range() {
    for value in Ranged::<-3, 7>::values() {
        let widened: Ranged<-100, 100> = value.widen();
        let back: Ranged<-3, 7> = widened.narrow_checked().unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn conversion_from_smaller_integers() {
    let from_u8: Ranged<0, 300> = Ranged::from_integer(255u8);
    assert_eq!(from_u8, 255);
    let from_fixed: Ranged<0, 300> = Fixed::<17>.into();
    assert_eq!(from_fixed, 17);
    assert_eq!(Ranged::<0, 300>::MIN_VALUE, 0);
    assert_eq!(<Ranged<0, 300> as RangedInteger>::MAX_VALUE, 300);
}

#[test]
fn try_from_reports_the_range() {
    let err = Ranged::<1, 10>::try_from(11).unwrap_err();
    assert_eq!((err.value, err.min, err.max), (11, 1, 10));
    assert!(Ranged::<1, 10>::try_from(10).is_ok());
}

#[test]
fn chained_widening_stays_exact() {
    let a: Ranged<0, 9> = Ranged::new(7);
    let b: Ranged<0, 9> = Ranged::new(9);
    let sum: Ranged<0, 18> = a.widening_add(b);
    let scaled: Ranged<0, 54> = sum.widening_mul(Fixed::<3>.to_ranged());
    let total: Ranged<-54, 54> = scaled.widening_neg();
    assert_eq!(total, -48);
}
