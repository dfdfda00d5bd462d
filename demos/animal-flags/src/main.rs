// demos/animal-flags/src/main.rs
// ============================================================================
// Module: Animal Flags Demo
// Description: End-to-end tour of the flag reflection surface.
// Purpose: Demonstrate name lookup, casts, enumeration, operators, and
//          composite display over a sample flag type.
// Dependencies: flag-reflect
// ============================================================================

//! ## Overview
//! Declares the `AnimalFlags` sample type and exercises every reflection
//! operation, printing one labeled line per query. The printed output is
//! illustrative only; the library contract lives in the crate tests.

use std::io::Write;

use flag_reflect::enum_cast;
use flag_reflect::enum_count;
use flag_reflect::enum_entries;
use flag_reflect::enum_integer;
use flag_reflect::enum_name;
use flag_reflect::enum_names;
use flag_reflect::enum_value;
use flag_reflect::enum_values;
use flag_reflect::flag_enum;

flag_enum! {
    /// Capabilities of an animal.
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Flag value to string name.
    let endangered = AnimalFlags::Endangered;
    write_line(enum_name(endangered).unwrap_or_default())?;

    // String name sequence.
    let names: Vec<&str> = enum_names::<AnimalFlags>().collect();
    write_line(&format!("AnimalFlags names: {}", names.join(" ")))?;

    // String name to flag value.
    if let Some(fish_and_fly) = enum_cast::<AnimalFlags, _>("EatsFish|CanFly") {
        write_line(&format!("{} = {}", fish_and_fly, enum_integer(fish_and_fly)))?;
    }

    // Integer value to flag value.
    if let Some(claws_and_fish) = enum_cast::<AnimalFlags, _>(1_073_742_848_u64) {
        write_line(&format!("{} = {}", claws_and_fish, enum_integer(claws_and_fish)))?;
    }

    // Flag value to integer value.
    write_line(&format!("HasClaws = {}", enum_integer(AnimalFlags::HasClaws)))?;

    // Number of declared flags.
    write_line(&format!("AnimalFlags enum size: {}", enum_count::<AnimalFlags>()))?;

    // Indexed access to declared values.
    if let Some(first) = enum_value::<AnimalFlags>(0) {
        write_line(&format!("AnimalFlags[0] = {first}"))?;
    }

    // Declared value sequence, rendered through composite display.
    let values: Vec<String> =
        enum_values::<AnimalFlags>().map(|value| value.to_string()).collect();
    write_line(&format!("AnimalFlags values: {}", values.join(" ")))?;

    // Bitwise composition; validation only happens at the cast boundaries.
    let mut composite = AnimalFlags::HasClaws | AnimalFlags::CanFly;
    composite |= AnimalFlags::EatsFish;
    composite &= !AnimalFlags::EatsFish;
    write_line(&composite.to_string())?;

    // Declared (value, name) pair sequence.
    let entries: Vec<String> = enum_entries::<AnimalFlags>()
        .map(|(value, name)| format!("{name} = {}", enum_integer(value)))
        .collect();
    write_line(&format!("AnimalFlags entries: {}", entries.join(" ")))?;

    Ok(())
}

/// Writes one line to stdout.
fn write_line(value: &str) -> Result<(), std::io::Error> {
    let mut out = std::io::stdout();
    writeln!(out, "{value}")?;
    Ok(())
}
