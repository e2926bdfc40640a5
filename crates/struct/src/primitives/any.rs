//! Pass-through struct

crate::primitive! {
    /// Accepts any present value and returns a deep copy of it.
    ///
    /// Absent input is rejected; wrap in `optional` to allow it.
    pub AnyValue -> serde_json::Value, "any value";
    accept(value) { Some(value.clone()) }
    fn any();
}
