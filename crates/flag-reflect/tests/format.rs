// crates/flag-reflect/tests/format.rs
// ============================================================================
// Module: Flag Formatting and Serde Tests
// Description: Coverage for composite display, fallbacks, and serde forms.
// Purpose: Validate zero-entry naming, decimal fallbacks, and the string
//          serialization round trip.
// Dependencies: flag_reflect, serde_json
// ============================================================================
//! ## Overview
//! Integration tests for composite stringification policy and the serde
//! convenience surface, including a fixture with a designated zero entry.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use flag_reflect::FlagEnum;
use flag_reflect::flag_enum;
use serde_json::json;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

flag_enum! {
    /// Cache entry states with a designated zero entry.
    pub struct StatusFlags: u8 {
        /// No status recorded.
        None = 0,
        /// Entry is ready to serve.
        Ready = 1,
        /// Entry is past its refresh window.
        Stale = 1 << 1,
        /// Entry is pinned against eviction.
        Pinned = 1 << 2,
    }
}

flag_enum! {
    /// Transfer options without a zero entry.
    pub struct TransferFlags: u16 {
        /// Compress the payload.
        Compress = 1,
        /// Encrypt the payload.
        Encrypt = 1 << 1,
    }
}

// ============================================================================
// SECTION: Composite Display
// ============================================================================

/// Tests that a declared zero entry names the empty value.
#[test]
fn display_names_zero_through_zero_entry() -> TestResult {
    ensure(
        StatusFlags::empty().to_string() == "None",
        "Expected the zero entry to name the empty value",
    )?;
    ensure(
        TransferFlags::empty().to_string() == "0",
        "Expected decimal fallback for zero without a zero entry",
    )?;
    Ok(())
}

/// Tests decomposition order and the zero entry's exclusion from composites.
#[test]
fn display_joins_composites_in_declaration_order() -> TestResult {
    let composite = StatusFlags::Pinned | StatusFlags::Ready;
    ensure(
        composite.to_string() == "Ready|Pinned",
        "Expected declaration-order decomposition without the zero entry",
    )?;
    ensure(
        StatusFlags::Stale.to_string() == "Stale",
        "Expected a single flag to display as its name",
    )?;
    Ok(())
}

/// Tests fallback behavior for bits outside the declared union.
#[test]
fn display_falls_back_for_undeclared_bits() -> TestResult {
    ensure(
        StatusFlags::from_bits_retain(1 << 7).to_string() == "128",
        "Expected decimal fallback when no declared flag matches",
    )?;
    ensure(
        StatusFlags::from_bits_retain((1 << 7) | 1).to_string() == "Ready",
        "Expected undeclared bits not to suppress the named portion",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Serde Forms
// ============================================================================

/// Tests serialization to the composite string form.
#[test]
fn serde_serializes_composite_names() -> TestResult {
    let composite = StatusFlags::Ready | StatusFlags::Stale;
    ensure(
        serde_json::to_value(composite)? == json!("Ready|Stale"),
        "Expected the composite string form on the wire",
    )?;
    ensure(
        serde_json::to_value(StatusFlags::empty())? == json!("None"),
        "Expected the zero entry name for the empty value",
    )?;
    Ok(())
}

/// Tests the deserialization round trip and miss reporting.
#[test]
fn serde_round_trips_through_validated_parse() -> TestResult {
    let composite = StatusFlags::Ready | StatusFlags::Pinned;
    let round_tripped: StatusFlags = serde_json::from_value(serde_json::to_value(composite)?)?;
    ensure(round_tripped == composite, "Expected the composite value to round-trip")?;

    let zero: StatusFlags = serde_json::from_value(json!("None"))?;
    ensure(zero == StatusFlags::empty(), "Expected the zero entry to round-trip")?;

    let miss = serde_json::from_value::<StatusFlags>(json!("Ready|Evicted"));
    ensure(miss.is_err(), "Expected an undeclared name to fail deserialization")?;
    ensure(
        miss.is_err_and(|err| err.to_string().contains("Evicted")),
        "Expected the error to carry the offending segment",
    )?;
    Ok(())
}

/// Tests that the registry behind a fixture stays shared and immutable.
#[test]
fn registry_is_shared_per_type() -> TestResult {
    let first = std::ptr::from_ref(StatusFlags::registry());
    let second = std::ptr::from_ref(StatusFlags::registry());
    ensure(first == second, "Expected one registry instance per flag type")?;
    ensure(StatusFlags::registry().union() == 0b111, "Expected the union of declared bits")?;
    Ok(())
}
