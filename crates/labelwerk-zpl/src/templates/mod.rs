// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One generator per label kind.  Generators are pure: same request, same
// bytes.

pub mod dry;
pub mod msl_sticker;
pub mod special;
pub mod standard;
pub mod svt;
pub mod tracescan;

use tracing::debug;

use labelwerk_core::error::Result;
use labelwerk_core::labels::Label;

use crate::program::LabelProgram;

/// Render the printer program for a validated label.
///
/// Fails only on content rules the generator enforces itself (unknown MSL
/// level, malformed work-order serial); presence was settled upstream.
pub fn render(label: &Label) -> Result<LabelProgram> {
    let program = match label {
        Label::Standard(l) => standard::render(l)?,
        Label::MslSticker(l) => msl_sticker::render(l)?,
        Label::SpecialInstructions(l) => special::render(l),
        Label::Dry => dry::render(),
        Label::Tracescan(l) => tracescan::render(l)?,
        Label::SvtFortloxOk(l) => svt::render_ok(l),
        Label::SvtFortloxNok(l) => svt::render_nok(l),
    };
    debug!(kind = %label.kind(), bytes = program.len(), "label rendered");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelwerk_core::fields::JobFields;
    use labelwerk_core::labels::LabelRequest;
    use labelwerk_core::types::LabelKind;

    fn fields_for(kind: LabelKind) -> JobFields {
        let mut fields = JobFields::new();
        for name in kind.required_fields() {
            let value = match *name {
                "msl" => "MSL 3",
                "wo_serial_number" => "12345-12345678901",
                _ => "x",
            };
            fields.insert(*name, value);
        }
        fields
    }

    #[test]
    fn every_kind_renders_a_framed_program() {
        for kind in LabelKind::ALL {
            let request = LabelRequest::from_fields(kind, &fields_for(kind)).unwrap();
            let program = render(&request.label).unwrap();
            assert!(program.as_str().starts_with("^XA\n"), "{kind}");
            assert!(program.as_str().ends_with("^XZ\n"), "{kind}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        for kind in LabelKind::ALL {
            let request = LabelRequest::from_fields(kind, &fields_for(kind)).unwrap();
            assert_eq!(render(&request.label).unwrap(), render(&request.label).unwrap());
        }
    }

    #[test]
    fn printer_id_is_not_rendered() {
        let mut fields = fields_for(LabelKind::SvtFortloxOk);
        fields.insert("printer_id", "prt-K-SVT-00028");
        let request = LabelRequest::from_fields(LabelKind::SvtFortloxOk, &fields).unwrap();
        let text = render(&request.label).unwrap().into_text();
        assert!(!text.contains("prt-K-SVT-00028"));
    }
}
