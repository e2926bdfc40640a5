//! Macros for declaring structs with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`primitive!`]: a unit leaf struct (type + `Struct` impl + factory fn)
//! - [`shape!`]: an object [`Shape`](crate::combinators::Shape) literal
//! - [`record_struct!`]: a Rust record type together with the struct that
//!   validates JSON objects into it
//!
//! # Examples
//!
//! ```
//! use ferrule_struct::prelude::*;
//! use serde_json::json;
//!
//! let user = object(shape! {
//!     "name" => string(),
//!     "age" => optional(integer()),
//! });
//!
//! let output = user.validate(&json!({"name": "Ada", "extra": 1})).unwrap();
//! assert_eq!(serde_json::Value::Object(output), json!({"name": "Ada"}));
//! ```

// ============================================================================
// PRIMITIVE MACRO
// ============================================================================

/// Creates a unit leaf struct: struct definition, `Struct` implementation
/// and factory function.
///
/// `accept(value)` receives the present input as `&Value` and returns
/// `Some(output)` to accept it. Absent input and `None` both produce a
/// `type_mismatch` error naming the expected kind.
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied.
///
/// ```
/// use ferrule_struct::primitive;
/// use ferrule_struct::foundation::Struct;
/// use serde_json::json;
///
/// primitive! {
///     /// Accepts non-empty strings.
///     pub NonEmpty -> String, "non-empty string";
///     accept(value) { value.as_str().filter(|s| !s.is_empty()).map(str::to_owned) }
///     fn non_empty();
/// }
///
/// assert!(non_empty().validate(&json!("x")).is_ok());
/// assert_eq!(
///     non_empty().validate(&json!("")).unwrap_err().message,
///     "expected non-empty string, found string"
/// );
/// ```
#[macro_export]
macro_rules! primitive {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident -> $output:ty, $expected:literal;
        accept($value:ident) $accept:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Struct for $name {
            type Output = $output;

            fn check(
                &self,
                input: ::core::option::Option<&$crate::__private::serde_json::Value>,
            ) -> $crate::foundation::StructResult<$output> {
                let accept = |$value: &$crate::__private::serde_json::Value|
                 -> ::core::option::Option<$output> { $accept };
                match input.and_then(accept) {
                    ::core::option::Option::Some(output) => ::core::result::Result::Ok(output),
                    ::core::option::Option::None => ::core::result::Result::Err(
                        $crate::foundation::StructError::type_mismatch($expected, input),
                    ),
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

// ============================================================================
// SHAPE MACRO
// ============================================================================

/// Builds a [`Shape`](crate::combinators::Shape) from `key => struct` pairs,
/// in declaration order.
///
/// ```
/// use ferrule_struct::prelude::*;
///
/// let point = shape! { "x" => number(), "y" => number() };
/// assert_eq!(point.keys().collect::<Vec<_>>(), ["x", "y"]);
/// ```
#[macro_export]
macro_rules! shape {
    () => {
        $crate::combinators::Shape::new()
    };
    ($($key:expr => $field:expr),+ $(,)?) => {
        $crate::combinators::Shape::new()$(.field($key, $field))+
    };
}

// ============================================================================
// RECORD STRUCT MACRO
// ============================================================================

/// Declares a record type whose fields are filled from a JSON object.
///
/// Each field names its Rust type and the struct that produces it. The macro
/// generates the record (all fields `pub`) and `schema()`, returning the
/// struct that validates objects into it. Validation follows `object`:
/// fields are checked in declaration order, the first failure is returned
/// with the field key in its path, undeclared keys are ignored.
///
/// ```
/// use ferrule_struct::prelude::*;
/// use serde_json::json;
///
/// record_struct! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Server {
///         host: String = string(),
///         port: i64 = integer(),
///         tls: Option<bool> = optional(boolean()),
///     }
/// }
///
/// let server = Server::schema()
///     .validate(&json!({"host": "localhost", "port": 8080}))
///     .unwrap();
/// assert_eq!(server, Server { host: "localhost".into(), port: 8080, tls: None });
///
/// let error = Server::schema().validate(&json!({"host": "h"})).unwrap_err();
/// assert_eq!(error.path_string(), "$.port");
/// ```
#[macro_export]
macro_rules! record_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $fty:ty = $fstruct:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $fty,
            )+
        }

        impl $name {
            /// Returns the struct that validates JSON objects into this record.
            #[allow(dead_code)]
            $vis fn schema() -> impl $crate::foundation::Struct<Output = Self> + Send + Sync {
                let ($($field,)+) = ($($fstruct,)+);
                $crate::foundation::from_fn(
                    move |input: ::core::option::Option<&$crate::__private::serde_json::Value>| {
                        let object = $crate::combinators::object::expect_object(input)?;
                        ::core::result::Result::Ok(Self {
                            $(
                                $field: $crate::combinators::object::check_field(
                                    &$field,
                                    object,
                                    stringify!($field),
                                )?,
                            )+
                        })
                    },
                )
            }
        }
    };
}
