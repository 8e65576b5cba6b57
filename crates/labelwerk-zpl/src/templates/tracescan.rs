// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Work-order traceability label.
//
// Header row with hardware/software versions and the standard indicator,
// the work-order serial as Code 128 plus text, then one row per
// sub-assembly.  The serial shape is checked before anything is rendered.

use labelwerk_core::error::Result;
use labelwerk_core::labels::{Assembly, TracescanLabel};

use crate::builder::ZplBuilder;
use crate::layout::truncate;
use crate::program::LabelProgram;
use crate::trace::{public_description, validate_wo_serial};

const DESCRIPTION_MAX: usize = 28;
const FIRST_ROW_Y: u32 = 200;
const ROW_PITCH: u32 = 50;

pub fn render(label: &TracescanLabel) -> Result<LabelProgram> {
    validate_wo_serial("wo_serial_number", &label.wo_serial_number)?;

    let mut b = ZplBuilder::new();
    b.font(20)
        .text(20, 20, "HW")
        .text(200, 20, "SW")
        .text(380, 20, "Std")
        .font(30)
        .text(20, 42, &label.hw_version)
        .text(200, 42, &label.sw_version)
        .text(380, 42, &label.standard_indicator)
        .code128(20, 85, 60, &label.wo_serial_number)
        .font(25)
        .text(20, 152, &format!("WO S/N {}", label.wo_serial_number))
        .rule(20, 185, 560);

    let rows: [(&str, &Assembly); 4] = [
        ("GINV", &label.ginv),
        ("IOCA", &label.ioca),
        ("MCUA", &label.mcua),
        ("LCDA", &label.lcda),
    ];
    for ((tag, assembly), y) in rows.iter().zip((FIRST_ROW_Y..).step_by(ROW_PITCH as usize)) {
        let description = public_description(&assembly.description);
        b.font(20)
            .text(20, y, tag)
            .font(22)
            .text(90, y, truncate(&description, DESCRIPTION_MAX))
            .text(90, y + 24, &format!("S/N {}", assembly.serial));
    }

    Ok(b.finish())
}
