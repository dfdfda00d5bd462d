// crates/flag-reflect/src/serde_support.rs
// ============================================================================
// Module: Flag Serde Support
// Description: Serialization of flag values through their composite name form.
// Purpose: Serialize flags as `|`-joined declared names and deserialize them
//          through the validated string cast.
// Dependencies: crate::reflect, serde
// ============================================================================

//! ## Overview
//! Flag values serialize as their composite string form
//! (`"HasClaws|EatsFish"`) and deserialize through the validated string
//! cast, so unknown names fail deserialization with the offending segment.
//! This is a convenience surface for human-readable formats, not a wire
//! contract: values with bits outside the declared union serialize through
//! the decimal display fallback and will not deserialize back.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Deserializer;
use serde::Serializer;
use serde::de::Error as DeError;

use crate::reflect::FlagEnum;

// ============================================================================
// SECTION: Serde Entry Points
// ============================================================================

/// Serializes a flag value as its `|`-joined composite name form.
///
/// # Errors
/// Returns the serializer's error unchanged.
pub fn serialize_flags<E, S>(value: E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: FlagEnum,
    S: Serializer,
{
    serializer.serialize_str(&E::registry().format(value.bits()))
}

/// Deserializes a flag value from its `|`-joined composite name form.
///
/// # Errors
/// Returns a deserializer error carrying the parse failure when any segment
/// names no declared flag.
pub fn deserialize_flags<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: FlagEnum,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    E::registry().parse(&raw).map(E::from_bits).map_err(DeError::custom)
}
