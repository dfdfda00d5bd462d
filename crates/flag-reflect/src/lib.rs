// crates/flag-reflect/src/lib.rs
// ============================================================================
// Module: Flag Reflect
// Description: Runtime reflection over bit-flag types.
// Purpose: Name/value lookup, validated casts, ordered enumeration, and
//          composite display for explicitly registered flag types.
// Dependencies: once_cell, serde, smallvec, thiserror
// ============================================================================

//! ## Overview
//! Flag Reflect provides runtime reflection over bit-flag types: converting
//! flag values to names and back, validated construction from integers and
//! from `|`-delimited name strings, enumeration of declared flags in
//! declaration order, and composite stringification of combined values.
//!
//! Flags are registered explicitly — Rust has no compile-time name
//! extraction from type signatures — either through
//! [`RegistryBuilder`] or, for the common case, the [`flag_enum!`] macro,
//! which declares the flag type and its registry in one block:
//!
//! ```
//! use flag_reflect::enum_cast;
//! use flag_reflect::enum_count;
//! use flag_reflect::enum_integer;
//! use flag_reflect::flag_enum;
//!
//! flag_enum! {
//!     /// Capabilities of an animal.
//!     pub struct AnimalFlags: u64 {
//!         HasClaws = 1 << 10,
//!         CanFly = 1 << 20,
//!         EatsFish = 1 << 30,
//!         Endangered = 1 << 40,
//!     }
//! }
//!
//! let fish_and_fly = enum_cast::<AnimalFlags, _>("EatsFish|CanFly");
//! assert_eq!(fish_and_fly.map(enum_integer), Some(1_074_790_400));
//! assert_eq!(enum_count::<AnimalFlags>(), 4);
//! ```
//!
//! Registries are immutable after one-time initialization and shareable
//! across threads without synchronization. Lookup misses surface as `None`;
//! bitwise composition never validates, validation lives only at the
//! [`enum_cast`]/[`enum_name`] boundaries.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod bits;
pub mod error;
mod macros;
pub mod registry;
pub mod reflect;
pub mod serde_support;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::bits::FlagBits;
pub use crate::error::ParseFlagsError;
pub use crate::error::RegistryError;
pub use crate::reflect::FlagEnum;
pub use crate::reflect::FlagSource;
pub use crate::reflect::enum_cast;
pub use crate::reflect::enum_count;
pub use crate::reflect::enum_entries;
pub use crate::reflect::enum_integer;
pub use crate::reflect::enum_name;
pub use crate::reflect::enum_names;
pub use crate::reflect::enum_value;
pub use crate::reflect::enum_values;
pub use crate::registry::FlagDefinition;
pub use crate::registry::FlagRegistry;
pub use crate::registry::RegistryBuilder;

// ============================================================================
// SECTION: Macro Runtime
// ============================================================================

/// Support items referenced by [`flag_enum!`] expansions; not public API.
#[doc(hidden)]
pub mod __rt {
    pub use once_cell::sync::Lazy;
    pub use serde;

    use crate::bits::FlagBits;
    use crate::registry::FlagRegistry;

    /// Builds the registry for a macro-declared flag type.
    ///
    /// # Panics
    /// Panics when the declared flag list is invalid (duplicate names or
    /// bits, multi-bit values, or an empty list). Invalid declarations are
    /// programmer errors in the `flag_enum!` block, surfaced on first
    /// registry use rather than deferred to every lookup.
    #[allow(
        clippy::panic,
        reason = "invalid flag declarations are unrecoverable programmer errors"
    )]
    #[must_use]
    pub fn build_registry<B: FlagBits>(
        type_name: &str,
        entries: &[(&str, B)],
    ) -> FlagRegistry<B> {
        let mut builder = FlagRegistry::builder();
        for (name, bits) in entries {
            builder = builder.flag(*name, *bits);
        }
        match builder.build() {
            Ok(registry) => registry,
            Err(err) => panic!("invalid flag declaration for `{type_name}`: {err}"),
        }
    }
}
