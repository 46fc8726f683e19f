#![cfg(feature = "serde")]
//! Range-checked serialization, in the style serde_test expects.

use ranged_core::Ranged;
use serde_test::{assert_de_tokens_error, assert_tokens, Token};

#[test]
fn round_trip_as_the_underlying_integer() {
    let value: Ranged<-5, 100> = Ranged::new(42);
    assert_tokens(&value, &[Token::I64(42)]);
}

#[test]
fn deserialization_rejects_out_of_range() {
    assert_de_tokens_error::<Ranged<1, 10>>(
        &[Token::I64(11)],
        "got a value of 11 but expected a value in the range [1, 10]",
    );
}
