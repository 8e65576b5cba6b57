// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Structural request validation: presence of required keys only.  Format
// checks (serial shape, MSL code) belong to the generators.

use crate::error::{LabelwerkError, Result};
use crate::fields::JobFields;
use crate::types::LabelKind;

/// Required field names for `kind` that are absent from `fields`, in the
/// kind's declared order.  An empty string value is not "absent".
pub fn missing_fields(kind: LabelKind, fields: &JobFields) -> Vec<&'static str> {
    kind.required_fields()
        .iter()
        .copied()
        .filter(|name| !fields.contains(name))
        .collect()
}

/// `Ok(())` when every required field is present, otherwise
/// `LabelwerkError::MissingFields` naming all of them.
pub fn validate(kind: LabelKind, fields: &JobFields) -> Result<()> {
    let missing = missing_fields(kind, fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LabelwerkError::MissingFields(
            missing.into_iter().map(String::from).collect(),
        ))
    }
}
