// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Incoming-goods batch label.
//
// Left column: batch (with QR on the right), item code, description,
// manufacturer block.  Right column: warehouse, parent warehouse and the MSL
// badge.  Bottom row: quantity, date, user.

use labelwerk_core::error::Result;
use labelwerk_core::labels::StandardLabel;

use crate::builder::ZplBuilder;
use crate::layout::{compact_warehouse, manufacturer_block, step_font, truncate};
use crate::msl::{MslBox, MslLevel};
use crate::program::LabelProgram;

const ITEM_CODE_MAX: usize = 20;
const DESCRIPTION_MAX: usize = 38;
const MANUFACTURER_MAX: usize = 22;
const PART_MAX: usize = 28;

/// Warehouse names up to this many characters use the large font.
const WAREHOUSE_REGULAR_MAX: usize = 7;
/// Parent-warehouse names up to this many characters use the regular font.
const PARENT_REGULAR_MAX: usize = 9;

const MSL_BOX_X: u32 = 280;
const MSL_BOX_HEIGHT: u32 = 68;
const MSL_BOX_TOP: u32 = 285;
/// The badge drops this far when the parent line was stepped down.
const MSL_BOX_STEPPED_SHIFT: u32 = 5;
/// MSL text sits this far below the top of the badge.
const MSL_TEXT_OFFSET: u32 = 20;
/// Mounting time goes just under the badge, clear of the MSL text.
const MOUNTING_TIME_OFFSET: u32 = MSL_BOX_HEIGHT + 2;

fn msl_box_width(badge: MslBox) -> u32 {
    match badge {
        MslBox::Narrow => 130,
        MslBox::Wide => 160,
    }
}

pub fn render(label: &StandardLabel) -> Result<LabelProgram> {
    let msl = MslLevel::resolve(&label.msl)?;

    let warehouse = compact_warehouse(&label.warehouse);
    let parent = compact_warehouse(&label.parent_warehouse);
    let warehouse_slot = step_font(warehouse, WAREHOUSE_REGULAR_MAX, (205, 40), (212, 25));
    let parent_slot = step_font(parent, PARENT_REGULAR_MAX, (245, 30), (250, 20));

    let (manufacturer, part1, part2) = manufacturer_block(
        &label.manufacturer,
        &label.manufacturer_part_line1,
        &label.manufacturer_part_line2,
    );

    let box_top = if parent_slot.stepped {
        MSL_BOX_TOP + MSL_BOX_STEPPED_SHIFT
    } else {
        MSL_BOX_TOP
    };

    let mut b = ZplBuilder::new();
    b.qr(280, 10, &label.batch)
        // Batch
        .font(20)
        .text(20, 20, "Batch")
        .font(70)
        .text(20, 45, &label.batch)
        // Item code
        .font(20)
        .text(20, 115, "Item Code")
        .font(40)
        .text(20, 140, truncate(&label.item_code, ITEM_CODE_MAX))
        // Description
        .font(20)
        .text(20, 190, "Description")
        .text(20, 215, truncate(&label.description_line1, DESCRIPTION_MAX))
        .text(20, 235, truncate(&label.description_line2, DESCRIPTION_MAX))
        // Manufacturer
        .text(20, 270, "Manufacturer")
        .font(30)
        .text(20, 295, truncate(manufacturer, MANUFACTURER_MAX))
        .font(30)
        .text(20, 325, truncate(part1, PART_MAX))
        .font(15)
        .text(20, 355, truncate(part2, PART_MAX))
        // Warehouse
        .text(280, 180, "Incoming")
        .font(warehouse_slot.font)
        .text(280, warehouse_slot.y, warehouse)
        .font(parent_slot.font)
        .text(280, parent_slot.y, parent)
        // MSL badge
        .font(40)
        .outline(MSL_BOX_X, box_top, msl_box_width(msl.badge), MSL_BOX_HEIGHT, 5)
        .text(295, box_top + MSL_TEXT_OFFSET, &format!("MSL {}", msl.code))
        .font(15)
        .text(285, box_top + MOUNTING_TIME_OFFSET, msl.mounting_time)
        // Quantity / date / user
        .font(20)
        .text(20, 370, "Qty")
        .text(20, 395, &label.qty)
        .text(90, 370, "Date")
        .text(90, 395, &label.date)
        .text(210, 370, "User")
        .text(210, 395, &label.user);

    Ok(b.finish())
}
