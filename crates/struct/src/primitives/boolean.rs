//! Boolean structs

crate::primitive! {
    /// Accepts JSON booleans.
    pub Boolean -> bool, "boolean";
    accept(value) { value.as_bool() }
    fn boolean();
}
