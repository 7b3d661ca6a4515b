/*
[INPUT]:  Shape and enum declarations written with `shape!` / `wire_enum!`
[OUTPUT]: Structs and enums carrying the uniform value contract
[POS]:    Data layer - code generation shared by every API shape
[UPDATE]: When the accessor, rendering, or serde conventions change
*/

//! The value contract shared by every Comprehend shape.
//!
//! A shape is a struct whose members are all optional. Reading a member is a
//! plain field access, writing one is an assignment (`None` clears it), and
//! each member also has a chaining method of the same name that takes
//! `impl Into<T>`. For list members the chaining method appends, creating the
//! list first when it is absent. Equality and hashing are derived, and
//! `Display` renders the present members as `{Name: value, ...}`.
//!
//! Enumerations keep the documented values as variants and carry anything
//! else in `Unknown`, so values the service adds later still round-trip.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::types::{Blob, Double};

/// A value that can sit in a shape member.
pub trait Member {
    /// Writes the value the way it appears inside a shape's `Display` output.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Stores `value` into `slot`. Scalars and nested shapes replace.
    fn merge(slot: &mut Option<Self>, value: Self)
    where
        Self: Sized,
    {
        *slot = Some(value);
    }
}

macro_rules! display_member {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Member for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

display_member!(String, bool, i32, i64, Double);

/// Timestamps travel as epoch seconds with millisecond precision. The
/// chaining method truncates to milliseconds; values assigned directly keep
/// finer digits in memory but are written and rendered at millisecond
/// precision.
impl Member for DateTime<Utc> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.trunc_subsecs(3);
        f.write_str(&millis.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn merge(slot: &mut Option<Self>, value: Self) {
        *slot = Some(value.trunc_subsecs(3));
    }
}

impl Member for Blob {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64.encode(self.as_bytes()))
    }
}

impl<T: Member> Member for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }

    fn merge(slot: &mut Option<Self>, value: Self) {
        slot.get_or_insert_with(Vec::new).extend(value);
    }
}

/// Writes `{Name: value, ...}` for the present members of a shape.
pub struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub fn begin(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    /// Writes one member when it is present; absent members leave no trace.
    pub fn field<T: Member>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_str(", ")?;
        }
        self.empty = false;
        write_wire_name(self.f, name)?;
        self.f.write_str(": ")?;
        value.render(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// Converts a Rust member name (`submit_time_after`, `r#type`) to the
/// PascalCase name used on the wire (`SubmitTimeAfter`, `Type`).
pub fn wire_name(member: &str) -> String {
    let member = member.strip_prefix("r#").unwrap_or(member);
    member
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn write_wire_name(f: &mut fmt::Formatter<'_>, member: &str) -> fmt::Result {
    f.write_str(&wire_name(member))
}

/// Declares a shape: every listed member becomes a public `Option<T>` field
/// with a chaining method of the same name.
///
/// Member attributes (docs, `#[serde(with = ...)]`) are passed through.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty
            ),* $(,)?
        }
    ) => {
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
                #[doc = concat!("Sets `", stringify!($field), "` and returns the shape for chaining.")]
                #[must_use]
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    <$ty as $crate::contract::Member>::merge(&mut self.$field, value.into());
                    self
                }
            )*
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut fields = $crate::contract::FieldWriter::begin(f)?;
                $( fields.field(stringify!($field), &self.$field)?; )*
                fields.finish()
            }
        }

        impl $crate::contract::Member for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Declares a string-backed enumeration with an `Unknown` catch-all.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        ///
        /// Equality, ordering and hashing go by wire value, so an `Unknown`
        /// holding a documented value equals the named variant.
        #[derive(Debug, Clone)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value outside the documented set, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Documented wire values, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),*];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)*
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }

            fn known(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::known(value).unwrap_or_else(|| Self::Unknown(value.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::known(&value).unwrap_or(Self::Unknown(value))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }

        impl $crate::contract::Member for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use shape;
pub(crate) use wire_enum;
