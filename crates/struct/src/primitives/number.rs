//! Numeric structs

crate::primitive! {
    /// Accepts any JSON number as `f64`.
    ///
    /// Integers beyond 2^53 lose precision in the conversion, e.g.
    /// `u64::MAX` comes back as `1.8446744073709552e19`. Use
    /// [`integer`](crate::primitives::integer) when exact integers matter.
    pub Number -> f64, "number";
    accept(value) { value.as_f64() }
    fn number();
}

crate::primitive! {
    /// Accepts JSON numbers that are exactly representable as `i64`.
    ///
    /// `1.0` is rejected; use [`as_integer`](crate::primitives::as_integer)
    /// to accept integral floats.
    pub Integer -> i64, "integer";
    accept(value) { value.as_i64() }
    fn integer();
}
