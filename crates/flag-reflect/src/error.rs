// crates/flag-reflect/src/error.rs
// ============================================================================
// Module: Flag Reflect Errors
// Description: Structured errors for registry construction and flag-string parsing.
// Purpose: Separate definition-time failures from recoverable lookup misses.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Two failure surfaces exist. [`RegistryError`] reports invalid flag
//! declarations at registry build time; these are programmer errors in the
//! declaration site. [`ParseFlagsError`] reports misses while parsing a
//! `|`-delimited flag string; these are expected, recoverable input errors.
//! Every other lookup operation reports a miss as `None` rather than an
//! error value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Registry Construction Errors
// ============================================================================

/// Errors raised while building a [`FlagRegistry`](crate::FlagRegistry).
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Bit values are reported in their decimal carrier form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A flag name was declared more than once.
    #[error("duplicate flag name `{name}`")]
    DuplicateName {
        /// The name that was declared twice.
        name: String,
    },
    /// A bit value was declared under more than one name.
    #[error("flag `{name}` reuses bit value {bits}")]
    DuplicateBits {
        /// The later of the two colliding declarations.
        name: String,
        /// The colliding bit value in decimal carrier form.
        bits: String,
    },
    /// A flag declared more than one set bit.
    #[error("flag `{name}` sets {count} bits; a flag declares a single bit or zero")]
    MultipleBits {
        /// The offending declaration.
        name: String,
        /// The number of bits the declaration set.
        count: u32,
    },
    /// The registry declared no flags at all.
    #[error("flag registry declares no flags")]
    Empty,
}

// ============================================================================
// SECTION: Flag String Parse Errors
// ============================================================================

/// Errors raised while parsing a `|`-delimited flag string.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `segment` indexes are zero-based positions between `|` delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFlagsError {
    /// The input was empty or contained only whitespace.
    #[error("flag string is empty")]
    Empty,
    /// A delimited segment contained no name.
    #[error("empty flag name in segment {segment}")]
    EmptySegment {
        /// Zero-based segment position.
        segment: usize,
    },
    /// A segment did not match any declared flag name.
    #[error("unknown flag name `{name}`")]
    UnknownName {
        /// The unmatched segment text.
        name: String,
    },
}
