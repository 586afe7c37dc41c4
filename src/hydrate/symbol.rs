//! Closed symbol sets for enum fields.
//!
//! Enum fields accept exactly the strings in their symbol table; matching is
//! case-sensitive and a miss aborts hydration of the enclosing record.

use crate::hydrate::error::{HydrationError, HydrationResult};

/// An enum whose wire form is one of a fixed set of strings.
pub trait Symbol: Sized + Copy + 'static {
    /// Every `(wire string, variant)` pair, in declaration order.
    const SYMBOLS: &'static [(&'static str, Self)];

    /// The wire string for this variant.
    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive lookup.
    fn from_symbol(raw: &str) -> Option<Self> {
        Self::SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == raw)
            .map(|(_, variant)| *variant)
    }

    /// Comma-separated list of accepted strings, for error messages.
    fn expected() -> String {
        Self::SYMBOLS
            .iter()
            .map(|(symbol, _)| *symbol)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Coerce `raw`, reporting `field` on failure.
    fn coerce(field: &str, raw: &str) -> HydrationResult<Self> {
        Self::from_symbol(raw).ok_or_else(|| HydrationError::MalformedEnum {
            field: field.to_string(),
            value: raw.to_string(),
            expected: Self::expected(),
        })
    }
}

/// Declare a [`Symbol`] enum together with its wire table.
///
/// Also implements `Display`, `FromStr` and `Serialize` so a hydrated value
/// writes back the exact string it was read from.
macro_rules! symbols {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $symbol:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::hydrate::Symbol for $name {
            const SYMBOLS: &'static [(&'static str, Self)] = &[
                $( ($symbol, Self::$variant), )+
            ];

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $symbol, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::hydrate::Symbol::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::hydrate::HydrationError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <Self as $crate::hydrate::Symbol>::coerce(stringify!($name), raw)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::hydrate::Symbol::as_str(*self))
            }
        }
    };
}

pub(crate) use symbols;
