// crates/flag-reflect/src/registry.rs
// ============================================================================
// Module: Flag Registry
// Description: Immutable per-type tables of declared flag names and bit values.
// Purpose: Provide ordered name/value lookup, validated casts, and composite
//          formatting for one flag type.
// Dependencies: crate::bits, crate::error, smallvec
// ============================================================================

//! ## Overview
//! A [`FlagRegistry`] holds the declared `(name, bits)` pairs of one flag
//! type in declaration order. Registries are built once through
//! [`RegistryBuilder`] (directly, or via the
//! [`flag_enum!`](crate::flag_enum) macro), validated at build time, and
//! never mutated afterwards. Every reflective query — name lookup, string
//! and integer casts, indexed access, composite formatting — reads the same
//! immutable table, so registries are shareable across threads without
//! synchronization.
//!
//! Validation lives only at the cast boundaries. The registry accepts any
//! bit pattern for formatting; it simply names the declared subset it finds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use smallvec::SmallVec;

use crate::bits::FlagBits;
use crate::error::ParseFlagsError;
use crate::error::RegistryError;

// ============================================================================
// SECTION: Flag Definition
// ============================================================================

/// One declared flag: a name bound to a single-bit (or zero) carrier value.
///
/// # Invariants
/// - `bits` has at most one set bit.
/// - Within a registry, names and bit values are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDefinition<B: FlagBits> {
    /// Declared flag name.
    name: String,
    /// Declared bit value; a single set bit or zero.
    bits: B,
}

impl<B: FlagBits> FlagDefinition<B> {
    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared bit value.
    #[must_use]
    pub const fn bits(&self) -> B {
        self.bits
    }
}

// ============================================================================
// SECTION: Registry Builder
// ============================================================================

/// Builder collecting flag declarations for validation.
///
/// Declaration order is preserved and becomes the canonical iteration and
/// decomposition order of the built registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder<B: FlagBits> {
    /// Declarations in the order they were added.
    entries: Vec<FlagDefinition<B>>,
}

impl<B: FlagBits> RegistryBuilder<B> {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a flag declaration.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, bits: B) -> Self {
        self.entries.push(FlagDefinition {
            name: name.into(),
            bits,
        });
        self
    }

    /// Validates the declarations and builds the registry.
    ///
    /// # Errors
    /// Returns [`RegistryError`] when a name or bit value is declared twice,
    /// when a declaration sets more than one bit, or when no flags were
    /// declared at all.
    pub fn build(self) -> Result<FlagRegistry<B>, RegistryError> {
        if self.entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut union = B::ZERO;
        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.bits.is_zero() && !entry.bits.is_single_bit() {
                return Err(RegistryError::MultipleBits {
                    name: entry.name.clone(),
                    count: entry.bits.count_ones(),
                });
            }
            for earlier in &self.entries[.. index] {
                if earlier.name == entry.name {
                    return Err(RegistryError::DuplicateName {
                        name: entry.name.clone(),
                    });
                }
                if earlier.bits == entry.bits {
                    return Err(RegistryError::DuplicateBits {
                        name: entry.name.clone(),
                        bits: entry.bits.to_string(),
                    });
                }
            }
            union = union | entry.bits;
        }

        Ok(FlagRegistry {
            entries: self.entries,
            union,
        })
    }
}

// ============================================================================
// SECTION: Flag Registry
// ============================================================================

/// Immutable table of the declared flags of one flag type.
///
/// # Invariants
/// - Entries keep declaration order; iteration and decomposition follow it.
/// - Names and bit values are unique; at most one entry is zero-valued.
/// - Never mutated after [`RegistryBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagRegistry<B: FlagBits> {
    /// Declared flags in declaration order.
    entries: Vec<FlagDefinition<B>>,
    /// Bitwise OR of every declared bit value.
    union: B,
}

impl<B: FlagBits> FlagRegistry<B> {
    /// Returns a builder for a new registry.
    #[must_use]
    pub const fn builder() -> RegistryBuilder<B> {
        RegistryBuilder::new()
    }

    /// Returns the declared flags in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[FlagDefinition<B>] {
        &self.entries
    }

    /// Returns the declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FlagDefinition::name)
    }

    /// Returns the declared bit values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = B> + '_ {
        self.entries.iter().map(FlagDefinition::bits)
    }

    /// Returns the number of declared flags.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the bitwise OR of every declared bit value.
    #[must_use]
    pub const fn union(&self) -> B {
        self.union
    }

    /// Returns the name whose declared bits exactly equal `bits`.
    ///
    /// Composite values are not named here; see [`Self::format`]. A zero
    /// input matches only a declared zero-valued entry.
    #[must_use]
    pub fn name_of(&self, bits: B) -> Option<&str> {
        self.entries.iter().find(|entry| entry.bits == bits).map(FlagDefinition::name)
    }

    /// Returns the declared bit value for an exact name match.
    #[must_use]
    pub fn bits_of(&self, name: &str) -> Option<B> {
        self.entries.iter().find(|entry| entry.name == name).map(FlagDefinition::bits)
    }

    /// Returns the declared bit value at a zero-based declaration position.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<B> {
        self.entries.get(index).map(FlagDefinition::bits)
    }

    /// Validates that every set bit of `bits` is covered by declared flags.
    ///
    /// Returns the value unchanged on success. The zero value is always
    /// covered. This is the integer-cast boundary; bitwise operators never
    /// validate.
    #[must_use]
    pub fn cast_bits(&self, bits: B) -> Option<B> {
        self.union.covers(bits).then_some(bits)
    }

    /// Parses a `|`-delimited flag string into the OR of the named bits.
    ///
    /// Segment names are matched case-sensitively after trimming ASCII
    /// whitespace. The whole cast fails if any segment is empty or names no
    /// declared flag.
    ///
    /// # Errors
    /// Returns [`ParseFlagsError`] identifying the first offending segment.
    pub fn parse(&self, input: &str) -> Result<B, ParseFlagsError> {
        if input.trim_ascii().is_empty() {
            return Err(ParseFlagsError::Empty);
        }

        let mut combined = B::ZERO;
        for (segment, token) in input.split('|').enumerate() {
            let token = token.trim_ascii();
            if token.is_empty() {
                return Err(ParseFlagsError::EmptySegment {
                    segment,
                });
            }
            let bits = self.bits_of(token).ok_or_else(|| ParseFlagsError::UnknownName {
                name: token.to_string(),
            })?;
            combined = combined | bits;
        }
        Ok(combined)
    }

    /// Parses a `|`-delimited flag string, collapsing the miss detail.
    ///
    /// This is the string-cast boundary used by
    /// [`enum_cast`](crate::enum_cast); [`Self::parse`] keeps the offending
    /// segment for diagnostics.
    #[must_use]
    pub fn cast_str(&self, input: &str) -> Option<B> {
        self.parse(input).ok()
    }

    /// Returns the declared flags whose bits are all set in `bits`.
    ///
    /// Nonzero entries are selected by coverage in declaration order. A
    /// declared zero-valued entry is selected only when `bits` is exactly
    /// zero, since zero is trivially covered by every value.
    pub fn decompose(&self, bits: B) -> SmallVec<[&FlagDefinition<B>; 8]> {
        self.entries
            .iter()
            .filter(|entry| {
                if entry.bits.is_zero() { bits.is_zero() } else { bits.covers(entry.bits) }
            })
            .collect()
    }

    /// Formats a bit pattern as a `|`-joined list of declared flag names.
    ///
    /// Decomposition follows declaration order. When no declared flag
    /// matches, the carrier is rendered in decimal as a fallback; set bits
    /// outside the declared union never suppress the named portion.
    #[must_use]
    pub fn format(&self, bits: B) -> String {
        let parts = self.decompose(bits);
        if parts.is_empty() {
            return bits.to_string();
        }

        let mut rendered = String::new();
        for (index, part) in parts.iter().enumerate() {
            if index > 0 {
                rendered.push('|');
            }
            rendered.push_str(part.name());
        }
        rendered
    }
}
