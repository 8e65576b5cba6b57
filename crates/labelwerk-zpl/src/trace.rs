// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Traceability rules: work-order serial shape and the public form of
// assembly descriptions.

use std::sync::LazyLock;

use regex::Regex;

use labelwerk_core::error::{LabelwerkError, Result};

/// Five digits, a dash, eleven digits.  ASCII digits only.
static WO_SERIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}-[0-9]{11}$").expect("static serial pattern is valid")
});

/// Internal product codenames and the abbreviation allowed on labels.
static CODENAMES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [("Fortlox", "FLX")]
        .into_iter()
        .map(|(name, abbrev)| {
            let pattern = format!("(?i){}", regex::escape(name));
            (Regex::new(&pattern).expect("escaped codename is valid"), abbrev)
        })
        .collect()
});

/// Check a work-order serial number (already trimmed).
pub fn validate_wo_serial(field: &str, value: &str) -> Result<()> {
    if WO_SERIAL.is_match(value) {
        Ok(())
    } else {
        Err(LabelwerkError::InvalidSerialNumber {
            field: field.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// Public form of an assembly description: codenames replaced by their
/// abbreviation, upper-cased, dashes turned into spaces.
pub fn public_description(description: &str) -> String {
    let mut text = description.trim().to_owned();
    for (pattern, abbrev) in CODENAMES.iter() {
        text = pattern.replace_all(&text, *abbrev).into_owned();
    }
    text.to_uppercase().replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_serial() {
        assert!(validate_wo_serial("wo_serial_number", "12345-12345678901").is_ok());
    }

    #[test]
    fn rejects_malformed_serials() {
        for bad in [
            "1234-12345678901",
            "12345-1234567890",
            "12345_12345678901",
            "123456-1234567890",
            "12345-123456789012",
            "abcde-12345678901",
            "",
        ] {
            let err = validate_wo_serial("wo_serial_number", bad).unwrap_err();
            assert!(
                matches!(err, LabelwerkError::InvalidSerialNumber { ref field, .. } if field == "wo_serial_number"),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits match \d in Unicode mode but not the label shape.
        assert!(validate_wo_serial("wo_serial_number", "١٢٣٤٥-12345678901").is_err());
    }

    #[test]
    fn description_hides_codename() {
        assert_eq!(public_description("Fortlox-Main board"), "FLX MAIN BOARD");
        assert_eq!(public_description("  fortlox gateway-inv "), "FLX GATEWAY INV");
    }

    #[test]
    fn description_without_codename_is_still_normalized() {
        assert_eq!(public_description("lcd-assembly 7in"), "LCD ASSEMBLY 7IN");
    }
}
