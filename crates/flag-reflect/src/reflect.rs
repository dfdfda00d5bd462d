// crates/flag-reflect/src/reflect.rs
// ============================================================================
// Module: Flag Reflection Queries
// Description: Typed query surface over per-type flag registries.
// Purpose: Bind flag types to their registries and expose the name/value,
//          cast, and enumeration operations.
// Dependencies: crate::bits, crate::registry
// ============================================================================

//! ## Overview
//! [`FlagEnum`] ties a concrete flag type to its process-wide
//! [`FlagRegistry`]. The free functions in this module are the reflection
//! surface: ordered enumeration (`enum_names`, `enum_values`,
//! `enum_entries`, `enum_count`, `enum_value`), exact name lookup
//! (`enum_name`), the identity integer cast (`enum_integer`), and validated
//! construction from strings or integers (`enum_cast`).
//!
//! Every fallible lookup returns `None` on a miss; callers check before
//! use. Nothing here panics on malformed input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::bits::FlagBits;
use crate::registry::FlagRegistry;

// ============================================================================
// SECTION: Flag Enum Trait
// ============================================================================

/// A flag type backed by a process-wide registry of declared flags.
///
/// Implemented by the [`flag_enum!`](crate::flag_enum) macro; manual impls
/// only need to surface an immutable registry and the two unvalidated
/// carrier conversions.
///
/// # Invariants
/// - `registry()` returns the same immutable registry on every call.
/// - `from_bits`/`bits` are identity conversions; they never validate.
pub trait FlagEnum: Copy + Sized + 'static {
    /// Unsigned carrier holding the flag bits.
    type Bits: FlagBits;

    /// Returns the registry of declared flags for this type.
    fn registry() -> &'static FlagRegistry<Self::Bits>;

    /// Reinterprets raw carrier bits as a flag value without validation.
    fn from_bits(bits: Self::Bits) -> Self;

    /// Returns the raw carrier bits.
    fn bits(self) -> Self::Bits;
}

// ============================================================================
// SECTION: Cast Sources
// ============================================================================

/// Input accepted by [`enum_cast`]: a flag-name string or a carrier integer.
///
/// String casts resolve `|`-delimited declared names; integer casts accept
/// any bit pattern covered by the union of declared flags.
pub trait FlagSource<E: FlagEnum> {
    /// Casts the source into a flag value, or `None` on a lookup miss.
    fn cast(self) -> Option<E>;
}

impl<'input, E: FlagEnum> FlagSource<E> for &'input str {
    fn cast(self) -> Option<E> {
        E::registry().cast_str(self).map(E::from_bits)
    }
}

/// Implements the integer cast source for each carrier primitive.
macro_rules! impl_flag_source {
    ($($carrier:ty),+ $(,)?) => {
        $(
            impl<E: FlagEnum<Bits = $carrier>> FlagSource<E> for $carrier {
                fn cast(self) -> Option<E> {
                    E::registry().cast_bits(self).map(E::from_bits)
                }
            }
        )+
    };
}

impl_flag_source!(u8, u16, u32, u64, u128);

// ============================================================================
// SECTION: Query Functions
// ============================================================================

/// Returns the declared name whose bits exactly equal `value`.
///
/// Composite values have no single name; render them through the flag
/// type's `Display` impl instead. A zero value matches only a declared
/// zero-valued entry.
#[must_use]
pub fn enum_name<E: FlagEnum>(value: E) -> Option<&'static str> {
    E::registry().name_of(value.bits())
}

/// Returns the declared flag names in declaration order.
pub fn enum_names<E: FlagEnum>() -> impl Iterator<Item = &'static str> {
    E::registry().names()
}

/// Returns the declared flag values in declaration order.
pub fn enum_values<E: FlagEnum>() -> impl Iterator<Item = E> {
    E::registry().values().map(E::from_bits)
}

/// Returns the declared `(value, name)` pairs in declaration order.
pub fn enum_entries<E: FlagEnum>() -> impl Iterator<Item = (E, &'static str)> {
    E::registry().entries().iter().map(|entry| (E::from_bits(entry.bits()), entry.name()))
}

/// Returns the number of declared flags.
#[must_use]
pub fn enum_count<E: FlagEnum>() -> usize {
    E::registry().count()
}

/// Returns the carrier representation of a flag value (identity cast).
#[must_use]
pub fn enum_integer<E: FlagEnum>(value: E) -> E::Bits {
    value.bits()
}

/// Returns the declared flag value at a zero-based declaration position.
#[must_use]
pub fn enum_value<E: FlagEnum>(index: usize) -> Option<E> {
    E::registry().value_at(index).map(E::from_bits)
}

/// Casts a flag-name string or a carrier integer into a flag value.
///
/// String sources resolve `|`-delimited declared names and fail if any
/// segment is unknown. Integer sources succeed iff every set bit is covered
/// by the union of declared flags. Both return `None` on a miss.
#[must_use]
pub fn enum_cast<E: FlagEnum, S: FlagSource<E>>(source: S) -> Option<E> {
    source.cast()
}
