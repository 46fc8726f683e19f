//! Small structural product types.
//!
//! Rust's native tuples already provide compile-time-indexed access (`.0`,
//! `.1`), so these types stay deliberately thin: named structural products
//! with lazy piecewise construction, used where a map or sort key wants a
//! nominal type rather than an anonymous one.

/// A structural pair. Fields are accessed positionally (`.0`, `.1`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tuple2<A, B>(pub A, pub B);

impl<A, B> Tuple2<A, B> {
    /// Construct each element from its own zero-argument function, in order.
    pub fn piecewise(first: impl FnOnce() -> A, second: impl FnOnce() -> B) -> Self {
        let a = first();
        let b = second();
        Tuple2(a, b)
    }
}

impl<A, B> From<(A, B)> for Tuple2<A, B> {
    fn from((a, b): (A, B)) -> Self {
        Tuple2(a, b)
    }
}

impl<A, B> From<Tuple2<A, B>> for (A, B) {
    fn from(tuple: Tuple2<A, B>) -> Self {
        (tuple.0, tuple.1)
    }
}

/// A structural triple. Fields are accessed positionally.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tuple3<A, B, C>(pub A, pub B, pub C);

impl<A, B, C> Tuple3<A, B, C> {
    /// Construct each element from its own zero-argument function, in order.
    pub fn piecewise(
        first: impl FnOnce() -> A,
        second: impl FnOnce() -> B,
        third: impl FnOnce() -> C,
    ) -> Self {
        let a = first();
        let b = second();
        let c = third();
        Tuple3(a, b, c)
    }
}

impl<A, B, C> From<(A, B, C)> for Tuple3<A, B, C> {
    fn from((a, b, c): (A, B, C)) -> Self {
        Tuple3(a, b, c)
    }
}

impl<A, B, C> From<Tuple3<A, B, C>> for (A, B, C) {
    fn from(tuple: Tuple3<A, B, C>) -> Self {
        (tuple.0, tuple.1, tuple.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_ordering() {
        let a = Tuple2(1u8, "b");
        let b = Tuple2(1u8, "c");
        assert!(a < b);
        assert_eq!(a, Tuple2(1u8, "b"));
    }

    #[test]
    fn piecewise_runs_in_order() {
        use core::cell::Cell;
        let order = Cell::new(0);
        let tuple = Tuple3::piecewise(
            || {
                assert_eq!(order.replace(1), 0);
                1u8
            },
            || {
                assert_eq!(order.replace(2), 1);
                2u16
            },
            || {
                assert_eq!(order.replace(3), 2);
                3u32
            },
        );
        assert_eq!(tuple, Tuple3(1, 2, 3));
    }

    #[test]
    fn converts_to_native_tuples() {
        let tuple: Tuple2<u8, bool> = (3, true).into();
        assert_eq!(<(u8, bool)>::from(tuple), (3, true));
    }
}
