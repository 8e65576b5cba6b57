// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content-driven layout rules shared by the generators: name compaction,
// discrete font stepping, truncation and the manufacturer placeholder.

/// Long warehouse names that have a fixed short form on labels.
const WAREHOUSE_SHORT_NAMES: &[(&str, &str)] = &[
    ("Incoming Goods", "Incoming"),
    ("All Warehouses", "All WH"),
    ("Kommissionierlager", "Picking"),
    ("Picking Warehouse", "Picking"),
];

/// Placeholder printed when no manufacturer data was supplied at all.
pub const NO_MANUFACTURER: &str = "None";

/// Short form of a warehouse name, or the name itself.
///
/// Idempotent: no short form is itself a key of the table.
pub fn compact_warehouse(name: &str) -> &str {
    WAREHOUSE_SHORT_NAMES
        .iter()
        .find(|(long, _)| *long == name)
        .map_or(name, |(_, short)| *short)
}

/// Cut `text` to at most `max_chars` characters.
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Position and size of a line of text that shrinks when it runs long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub y: u32,
    pub font: u32,
    /// Whether the smaller variant was chosen.
    pub stepped: bool,
}

/// Pick the regular slot, or the stepped one when `text` is longer than
/// `max_regular` characters.
pub fn step_font(text: &str, max_regular: usize, regular: (u32, u32), stepped: (u32, u32)) -> Slot {
    if text.chars().count() > max_regular {
        Slot {
            y: stepped.0,
            font: stepped.1,
            stepped: true,
        }
    } else {
        Slot {
            y: regular.0,
            font: regular.1,
            stepped: false,
        }
    }
}

/// Manufacturer block after the placeholder rule: when the manufacturer and
/// both part lines are blank, the manufacturer reads [`NO_MANUFACTURER`]
/// and the part lines stay blank.
pub fn manufacturer_block<'a>(
    manufacturer: &'a str,
    part_line1: &'a str,
    part_line2: &'a str,
) -> (&'a str, &'a str, &'a str) {
    let (m, p1, p2) = (manufacturer.trim(), part_line1.trim(), part_line2.trim());
    if m.is_empty() && p1.is_empty() && p2.is_empty() {
        (NO_MANUFACTURER, "", "")
    } else {
        (m, p1, p2)
    }
}
