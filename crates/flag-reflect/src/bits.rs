// crates/flag-reflect/src/bits.rs
// ============================================================================
// Module: Flag Bit Carriers
// Description: Sealed abstraction over the unsigned primitives that carry flag bits.
// Purpose: Let registries and flag types stay generic over carrier width.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Flag registries are generic over the unsigned integer that carries the
//! declared bits. [`FlagBits`] seals that abstraction to the primitive
//! unsigned types (`u8` through `u128`); wider carriers change nothing about
//! the declared-flag count or the reflection contract.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::BitXor;
use std::ops::Not;

// ============================================================================
// SECTION: Sealing
// ============================================================================

/// Private sealing module; only carrier primitives implement [`FlagBits`].
mod sealed {
    /// Marker trait restricting [`super::FlagBits`] to in-crate impls.
    pub trait Sealed {}
}

// ============================================================================
// SECTION: Carrier Trait
// ============================================================================

/// Unsigned primitive carrying the bits of a flag value.
///
/// # Invariants
/// - Implemented only for `u8`, `u16`, `u32`, `u64`, and `u128` (sealed).
/// - All operations are pure; no carrier operation validates against a registry.
pub trait FlagBits:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The all-clear carrier value.
    const ZERO: Self;

    /// Returns the number of set bits.
    fn count_ones(self) -> u32;

    /// Returns whether no bits are set.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns whether exactly one bit is set.
    fn is_single_bit(self) -> bool {
        self.count_ones() == 1
    }

    /// Returns whether every set bit of `other` is also set in `self`.
    fn covers(self, other: Self) -> bool {
        self & other == other
    }
}

/// Implements [`FlagBits`] for an unsigned primitive carrier.
macro_rules! impl_flag_bits {
    ($($carrier:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $carrier {}

            impl FlagBits for $carrier {
                const ZERO: Self = 0;

                fn count_ones(self) -> u32 {
                    <$carrier>::count_ones(self)
                }
            }
        )+
    };
}

impl_flag_bits!(u8, u16, u32, u64, u128);
