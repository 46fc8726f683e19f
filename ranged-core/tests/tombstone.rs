//! The tombstone laws, exercised through the public API.

use ranged_core::{Ranged, Tombstone};

#[test]
fn spare_count_follows_range_slack() {
    assert_eq!(Ranged::<0, 4>::SPARE_REPRESENTATIONS, 1);
    assert_eq!(Ranged::<2, 5>::SPARE_REPRESENTATIONS, 2);
    assert_eq!(Ranged::<{ i64::MIN }, 5>::SPARE_REPRESENTATIONS, 1);
    assert_eq!(Ranged::<{ i64::MIN }, { i64::MAX }>::SPARE_REPRESENTATIONS, 0);
}

#[test]
fn spare_patterns_sit_just_outside_the_range() {
    // Index 0 is MIN - 1 when the low side has slack, the remaining index is
    // MAX + 1.
    assert_eq!(Ranged::<2, 5>::make_spare(0).get(), 1);
    assert_eq!(Ranged::<2, 5>::make_spare(1).get(), 6);
    assert_eq!(Ranged::<0, 4>::make_spare(0).get(), 5);
}

#[test]
fn round_trip_law() {
    fn check<T: Tombstone>() {
        for index in 0..T::SPARE_REPRESENTATIONS {
            assert_eq!(T::make_spare(index).spare_index(), Some(index));
        }
    }
    check::<Ranged<0, 4>>();
    check::<Ranged<2, 5>>();
    check::<Ranged<-128, -5>>();
    check::<Ranged<{ i64::MIN }, 5>>();
}

#[test]
fn logical_values_report_no_spare_index() {
    for value in Ranged::<-8, 8>::values() {
        assert_eq!(value.spare_index(), None);
    }
}
