//! Expansion checks for `ranged_type!`.

use ranged_derive::ranged_type;

ranged_type! {
    /// A percentage.
    pub struct Percent: 0..=100;
}

ranged_type! {
    /// Offsets either side of a cursor.
    pub struct Offset: -3..=11;
}

ranged_type! {
    /// A type needing two storage bytes.
    pub struct Port: 0..=65_535;
}

ranged_type! {
    /// A fully negative range.
    pub struct Depth: -128..=-5;
}

ranged_type! {
    /// A single-valued range: no storage at all.
    pub struct Origin: 7..=7;
}

#[test]
fn smallest_storage_is_selected() {
    // The selection mirrors ranged::repr::select; cross-check both.
    use ranged::repr::{select, Repr};
    assert_eq!(core::mem::size_of::<Percent>(), 1);
    assert_eq!(select(0, 100), Repr::U8);
    assert_eq!(core::mem::size_of::<Offset>(), 1);
    assert_eq!(select(-3, 11), Repr::I8);
    assert_eq!(core::mem::size_of::<Port>(), 2);
    assert_eq!(select(0, 65_535), Repr::U16);
    assert_eq!(core::mem::size_of::<Depth>(), 1);
    assert_eq!(select(-128, -5), Repr::I8);
    assert_eq!(core::mem::size_of::<Origin>(), 0);
}

#[test]
fn construction_and_access() {
    let percent = Percent::new(42);
    assert_eq!(percent.get(), 42);
    assert_eq!(Percent::new_checked(101), None);
    assert_eq!(Percent::MIN.get(), 0);
    assert_eq!(Percent::MAX.get(), 100);

    let offset = Offset::new(-3);
    assert_eq!(offset.get(), -3);
    assert_eq!(Offset::new_checked(12), None);
}

#[test]
#[should_panic(expected = "value out of range")]
fn construction_panics_out_of_range() {
    let _ = Depth::new(-4);
}

#[test]
fn widening_round_trip() {
    let depth = Depth::new(-30);
    let wide: ranged::Ranged<-128, -5> = depth.widen();
    assert_eq!(wide, -30);
    assert_eq!(Depth::from_ranged(wide), depth);
}

#[test]
fn ranged_integer_envelope() {
    use ranged::RangedInteger;
    assert_eq!(Port::MIN_VALUE, 0);
    assert_eq!(Port::MAX_VALUE, 65_535);
    assert_eq!(Port::from_wide_checked(70_000), None);
    assert_eq!(Port::from_wide_checked(8080).map(Port::get), Some(8080));
    assert_eq!(Port::new(8080).to_wide(), 8080);
}

#[test]
fn tombstone_spares_follow_the_storage_slack() {
    use ranged::Tombstone;

    // 0..=100 in a u8: no slack below, plenty above (one pattern exposed).
    assert_eq!(Percent::SPARE_REPRESENTATIONS, 1);
    assert_eq!(Percent::make_spare(0).spare_index(), Some(0));

    // -3..=11 in an i8: slack on both sides.
    assert_eq!(Offset::SPARE_REPRESENTATIONS, 2);
    assert_eq!(Offset::make_spare(0).spare_index(), Some(0));
    assert_eq!(Offset::make_spare(1).spare_index(), Some(1));
    assert_eq!(Offset::new(-3).spare_index(), None);
    assert_eq!(Offset::new(11).spare_index(), None);

    // -128..=-5 in an i8: the low end is the storage minimum.
    assert_eq!(Depth::SPARE_REPRESENTATIONS, 1);
    assert_eq!(Depth::make_spare(0).spare_index(), Some(0));
}

#[test]
fn unit_type_for_single_valued_range() {
    use ranged::RangedInteger;
    let origin = Origin;
    assert_eq!(origin.get(), 7);
    assert_eq!(origin.widen(), 7);
    assert_eq!(Origin::from_wide_checked(7), Some(Origin));
    assert_eq!(Origin::from_wide_checked(8), None);
}

#[test]
fn display_forwards_to_the_value() {
    assert_eq!(Percent::new(42).to_string(), "42");
    assert_eq!(Origin.to_string(), "7");
}
