// crates/flag-reflect/src/macros.rs
// ============================================================================
// Module: Flag Declaration Macro
// Description: Single-declaration registration of a reflected flag type.
// Purpose: Generate the flag newtype, its constants, operators, display,
//          parsing, serde impls, and the lazily built registry in one block.
// Dependencies: crate::reflect, crate::registry, crate::serde_support, once_cell
// ============================================================================

//! ## Overview
//! Rust has no compile-time extraction of enum names from type signatures,
//! so registration is explicit: [`flag_enum!`](crate::flag_enum) is the one
//! declaration site that names each flag next to its bit value. The macro
//! expands to a `Copy` newtype over the carrier with associated flag
//! constants, unvalidated bitwise operators, composite `Display`,
//! `FromStr`, serde string impls, and a [`FlagEnum`](crate::FlagEnum) impl
//! whose registry is built once on first use.

/// Declares a reflected flag type and registers its flags.
///
/// The body lists `Name = bits` pairs in declaration order; that order is
/// the canonical iteration and decomposition order. Each bit value must be
/// a single set bit or zero, and names and values must be unique — invalid
/// declarations panic on first registry use, since they are errors in the
/// declaration itself rather than runtime input.
///
/// ```
/// use flag_reflect::enum_cast;
/// use flag_reflect::enum_name;
/// use flag_reflect::flag_enum;
///
/// flag_enum! {
///     /// Capabilities of an animal.
///     pub struct AnimalFlags: u64 {
///         HasClaws = 1 << 10,
///         CanFly = 1 << 20,
///     }
/// }
///
/// let both = AnimalFlags::HasClaws | AnimalFlags::CanFly;
/// assert_eq!(both.to_string(), "HasClaws|CanFly");
/// assert_eq!(enum_name(AnimalFlags::CanFly), Some("CanFly"));
/// assert_eq!(enum_cast::<AnimalFlags, _>("HasClaws"), Some(AnimalFlags::HasClaws));
/// ```
#[macro_export]
macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $carrier:ty {
            $(
                $(#[$flag_meta:meta])*
                $flag:ident = $bits:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name($carrier);

        #[allow(
            non_upper_case_globals,
            dead_code,
            reason = "flag constants mirror their reflected names and may be read only through reflection"
        )]
        impl $name {
            $(
                $(#[$flag_meta])*
                $vis const $flag: Self = Self($bits);
            )+

            /// Returns the flag value with no bits set.
            #[must_use]
            $vis const fn empty() -> Self {
                Self(0)
            }

            /// Returns the raw carrier bits.
            #[must_use]
            $vis const fn bits(self) -> $carrier {
                self.0
            }

            /// Reinterprets raw carrier bits without validation.
            #[must_use]
            $vis const fn from_bits_retain(bits: $carrier) -> Self {
                Self(bits)
            }
        }

        impl $crate::FlagEnum for $name {
            type Bits = $carrier;

            fn registry() -> &'static $crate::FlagRegistry<$carrier> {
                /// Registry built once from the declared flag list.
                static REGISTRY: $crate::__rt::Lazy<$crate::FlagRegistry<$carrier>> =
                    $crate::__rt::Lazy::new(|| {
                        $crate::__rt::build_registry(
                            ::std::any::type_name::<$name>(),
                            &[$((stringify!($flag), $bits)),+],
                        )
                    });
                &REGISTRY
            }

            fn from_bits(bits: $carrier) -> Self {
                Self(bits)
            }

            fn bits(self) -> $carrier {
                self.0
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::std::ops::BitXor for $name {
            type Output = Self;

            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        impl ::std::ops::Not for $name {
            type Output = Self;

            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl ::std::ops::BitXorAssign for $name {
            fn bitxor_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0;
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str(&<Self as $crate::FlagEnum>::registry().format(self.0))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ParseFlagsError;

            fn from_str(input: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::FlagEnum>::registry().parse(input).map(Self)
            }
        }

        impl $crate::__rt::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__rt::serde::Serializer,
            {
                $crate::serde_support::serialize_flags(*self, serializer)
            }
        }

        impl<'de> $crate::__rt::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__rt::serde::Deserializer<'de>,
            {
                $crate::serde_support::deserialize_flags(deserializer)
            }
        }
    };
}
