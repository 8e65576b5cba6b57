// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Special handling instructions: a title and twelve fixed lines.

use labelwerk_core::labels::SpecialInstructions;

use crate::builder::ZplBuilder;
use crate::layout::truncate;
use crate::program::LabelProgram;

const LINE_MAX: usize = 48;
const FIRST_LINE_Y: u32 = 65;
const LINE_PITCH: u32 = 28;

pub fn render(label: &SpecialInstructions) -> LabelProgram {
    let mut b = ZplBuilder::new();
    b.font(30)
        .text(20, 15, "Special Instructions")
        .rule(20, 50, 560)
        .font(22);

    // Blank lines are still placed so the layout never shifts.
    for (line, y) in label
        .lines
        .iter()
        .zip((FIRST_LINE_Y..).step_by(LINE_PITCH as usize))
    {
        b.text(20, y, truncate(line, LINE_MAX));
    }

    b.finish()
}
