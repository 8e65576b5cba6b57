// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// "DRY" storage badge.  No variable content.

use crate::builder::ZplBuilder;
use crate::program::LabelProgram;

pub fn render() -> LabelProgram {
    let mut b = ZplBuilder::new();
    b.filled(20, 20, 400, 160)
        .font(120)
        .text_reversed(95, 40, "DRY")
        .font(25)
        .text(20, 200, "Keep in dry storage");
    b.finish()
}
