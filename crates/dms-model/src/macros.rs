//! Declarative generators for shapes and enum value sets.
//!
//! Every shape in this crate has the same mechanics: all fields optional,
//! PascalCase on the wire, structural equality and hashing, and one fluent
//! setter per field. Every enum value set is a closed table of wire
//! literals with a strict reverse lookup. Both are produced here so the
//! per-module files only carry names, types and documentation.

/// Defines one or more wire shapes.
///
/// ```ignore
/// shape! {
///     /// A key/value tag.
///     Tag {
///         /// Tag key.
///         key: String,
///         /// Tag value.
///         value: String,
///     }
/// }
/// ```
///
/// Each `field: T` becomes `pub field: Option<T>` and a fluent
/// `fn field(self, impl Into<T>) -> Self`. For `Vec<T>` fields the setter
/// accepts anything convertible into a fresh `Vec` (arrays, slices of
/// `Clone` items, vectors), so the stored list never aliases the caller's.
macro_rules! shape {
    ($(
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                #[doc = concat!("Sets `", stringify!($field), "` and returns the updated shape.")]
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    )*};
}

/// Defines one or more closed enum value sets keyed by their wire literal.
///
/// ```ignore
/// enum_values! {
///     /// SSL mode for an endpoint connection.
///     DmsSslModeValue {
///         None => "none",
///         Require => "require",
///     }
/// }
/// ```
macro_rules! enum_values {
    ($(
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $literal:literal
            ),+ $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value of the set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire literal for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }

            /// Every wire literal of the set, in declaration order.
            pub fn values() -> &'static [&'static str] {
                &[$($literal),+]
            }

            /// Strict, case-sensitive reverse lookup.
            ///
            /// Fails with [`ModelError::EmptyValue`](crate::ModelError::EmptyValue)
            /// on empty input and
            /// [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
            /// on anything outside the table.
            pub fn from_value(value: &str) -> $crate::Result<Self> {
                match value {
                    "" => Err($crate::ModelError::EmptyValue {
                        type_name: stringify!($name),
                    }),
                    $($literal => Ok(Self::$variant),)+
                    other => Err($crate::ModelError::InvalidValue {
                        type_name: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ModelError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_value(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::ModelError;

            fn try_from(s: &str) -> ::std::result::Result<Self, Self::Error> {
                Self::from_value(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_value(&raw).map_err(::serde::de::Error::custom)
            }
        }
    )*};
}
