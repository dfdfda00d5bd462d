// crates/flag-reflect/tests/proptest_flags.rs
// ============================================================================
// Module: Flag Reflection Property-Based Tests
// Description: Property tests for cast, naming, and formatting invariants.
// Purpose: Detect boundary violations across wide input ranges.
// ============================================================================

//! Property-based tests for flag reflection invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use flag_reflect::FlagEnum;
use flag_reflect::enum_cast;
use flag_reflect::enum_entries;
use flag_reflect::enum_integer;
use flag_reflect::enum_name;
use flag_reflect::flag_enum;
use proptest::prelude::*;

flag_enum! {
    /// Animal capabilities from the original reflection scenario.
    pub struct AnimalFlags: u64 {
        /// The animal has claws.
        HasClaws = 1 << 10,
        /// The animal can fly.
        CanFly = 1 << 20,
        /// The animal eats fish.
        EatsFish = 1 << 30,
        /// The animal is endangered.
        Endangered = 1 << 40,
    }
}

/// Builds the declared entries selected by a membership mask.
fn selected_entries(mask: &[bool]) -> Vec<(AnimalFlags, &'static str)> {
    enum_entries::<AnimalFlags>()
        .zip(mask.iter().copied())
        .filter_map(|(entry, selected)| selected.then_some(entry))
        .collect()
}

proptest! {
    #[test]
    fn subset_name_strings_cast_to_their_union(mask in prop::collection::vec(any::<bool>(), 4)) {
        let selected = selected_entries(&mask);
        prop_assume!(!selected.is_empty());

        let joined =
            selected.iter().map(|(_, name)| *name).collect::<Vec<&str>>().join("|");
        let expected = selected
            .iter()
            .fold(0_u64, |bits, (value, _)| bits | enum_integer(*value));

        let cast = enum_cast::<AnimalFlags, _>(joined.as_str());
        prop_assert_eq!(cast.map(enum_integer), Some(expected));
    }

    #[test]
    fn unknown_segment_fails_the_whole_cast(
        mask in prop::collection::vec(any::<bool>(), 4),
        intruder in "[a-z]{1,8}",
    ) {
        prop_assume!(enum_entries::<AnimalFlags>().all(|(_, name)| name != intruder));

        let mut segments: Vec<&str> =
            selected_entries(&mask).iter().map(|(_, name)| *name).collect();
        segments.push(intruder.as_str());
        let joined = segments.join("|");

        prop_assert_eq!(enum_cast::<AnimalFlags, _>(joined.as_str()), None);
    }

    #[test]
    fn integer_cast_succeeds_iff_union_covers(bits in any::<u64>()) {
        let union = AnimalFlags::registry().union();
        let covered = bits & !union == 0;
        prop_assert_eq!(enum_cast::<AnimalFlags, _>(bits).is_some(), covered);
    }

    #[test]
    fn covered_nonzero_values_round_trip_through_display(mask in prop::collection::vec(any::<bool>(), 4)) {
        let selected = selected_entries(&mask);
        prop_assume!(!selected.is_empty());

        let value = selected
            .iter()
            .fold(AnimalFlags::empty(), |acc, (entry, _)| acc | *entry);
        let rendered = value.to_string();

        prop_assert_eq!(enum_cast::<AnimalFlags, _>(rendered.as_str()), Some(value));
    }

    #[test]
    fn single_declared_flags_name_and_cast_consistently(index in 0_usize .. 4) {
        let entries: Vec<(AnimalFlags, &'static str)> = enum_entries::<AnimalFlags>().collect();
        let (value, name) = entries[index];
        prop_assert_eq!(enum_name(value), Some(name));
        prop_assert_eq!(enum_cast::<AnimalFlags, _>(name), Some(value));
    }
}
