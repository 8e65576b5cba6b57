// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MSL sticker, 60x30mm: level badge on the left, floor life and the moment
// the dry pack was opened on the right.

use labelwerk_core::error::Result;
use labelwerk_core::labels::MslSticker;

use crate::builder::ZplBuilder;
use crate::msl::{MslBox, MslLevel};
use crate::program::LabelProgram;

fn badge_width(badge: MslBox) -> u32 {
    match badge {
        MslBox::Narrow => 110,
        MslBox::Wide => 140,
    }
}

pub fn render(label: &MslSticker) -> Result<LabelProgram> {
    let msl = MslLevel::resolve(&label.msl)?;
    let opened = format!("{} {}", label.date, label.time);

    let mut b = ZplBuilder::new();
    b.page(480, 240)
        .font(30)
        .text(20, 20, "MSL")
        .outline(20, 55, badge_width(msl.badge), 80, 5)
        .font(60)
        .text(40, 68, &msl.code)
        .font(20)
        .text(180, 20, "Mounting Time")
        .font(35)
        .text(180, 45, msl.mounting_time)
        .font(20)
        .text(180, 100, "Opened")
        .font(30)
        .text(180, 125, opened.trim());

    Ok(b.finish())
}
