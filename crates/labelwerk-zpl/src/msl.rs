// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Moisture Sensitivity Level (J-STD-033) handling.
//
// Maps a level code to the floor life printed on the label and picks the
// badge box width from the code length.

use labelwerk_core::error::{LabelwerkError, Result};

/// Level code -> floor life after the dry pack is opened.
const MOUNTING_TIMES: &[(&str, &str)] = &[
    ("1", "Unlimited"),
    ("2", "1 Year"),
    ("2A", "4 Weeks"),
    ("3", "168 Hours"),
    ("4", "72 Hours"),
    ("5", "48 Hours"),
    ("5A", "24 Hours"),
    ("6", "Time on Label"),
];

/// Canonical level code: trimmed, any leading `MSL` prefix removed,
/// upper-cased (`"MSL 2a"` -> `"2A"`).
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_prefix = match trimmed.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("MSL") => trimmed[3..].trim_start(),
        _ => trimmed,
    };
    without_prefix.to_ascii_uppercase()
}

/// Floor life for a level code.  Unknown codes are a client error, never a
/// blank field.
pub fn mounting_time(raw: &str) -> Result<&'static str> {
    let code = normalize(raw);
    MOUNTING_TIMES
        .iter()
        .find(|(level, _)| *level == code)
        .map(|(_, time)| *time)
        .ok_or(LabelwerkError::UnknownMsl(raw.trim().to_owned()))
}

/// Badge width variant.  Two-character codes (`2A`, `5A`) need the wider
/// box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MslBox {
    Narrow,
    Wide,
}

impl MslBox {
    pub fn for_code(code: &str) -> Self {
        if code.chars().count() >= 2 {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

/// A level code that resolved through the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MslLevel {
    pub code: String,
    pub mounting_time: &'static str,
    pub badge: MslBox,
}

impl MslLevel {
    pub fn resolve(raw: &str) -> Result<Self> {
        let mounting_time = mounting_time(raw)?;
        let code = normalize(raw);
        let badge = MslBox::for_code(&code);
        Ok(Self {
            code,
            mounting_time,
            badge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [&str; 8] = ["1", "2", "2A", "3", "4", "5", "5A", "6"];

    #[test]
    fn every_level_resolves() {
        for level in LEVELS {
            assert!(mounting_time(level).is_ok(), "{level}");
        }
        assert_eq!(mounting_time("3").unwrap(), "168 Hours");
        assert_eq!(mounting_time("5A").unwrap(), "24 Hours");
    }

    #[test]
    fn prefix_and_case_are_normalized() {
        assert_eq!(normalize("MSL 3"), "3");
        assert_eq!(normalize(" msl2a "), "2A");
        assert_eq!(mounting_time("MSL 2A").unwrap(), "4 Weeks");
    }

    #[test]
    fn unknown_levels_are_errors() {
        for bad in ["", "7", "2B", "MSL", "none"] {
            assert!(
                matches!(mounting_time(bad), Err(LabelwerkError::UnknownMsl(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn badge_width_follows_code_length() {
        for level in LEVELS {
            let resolved = MslLevel::resolve(level).unwrap();
            let expected = if level.len() == 2 { MslBox::Wide } else { MslBox::Narrow };
            assert_eq!(resolved.badge, expected, "{level}");
        }
    }
}
