// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed per-kind label inputs.
//
// A `LabelRequest` can only be obtained through `LabelRequest::from_fields`,
// which validates presence first, so every generator downstream sees a
// request that already passed validation for its kind.  Values are trimmed
// on extraction; `null` becomes the empty string.

use serde::Serialize;

use crate::error::Result;
use crate::fields::JobFields;
use crate::types::LabelKind;
use crate::validation;

/// Incoming-goods batch label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardLabel {
    pub batch: String,
    pub item_code: String,
    pub description_line1: String,
    pub description_line2: String,
    pub manufacturer: String,
    pub manufacturer_part_line1: String,
    pub manufacturer_part_line2: String,
    pub warehouse: String,
    pub parent_warehouse: String,
    pub msl: String,
    pub qty: String,
    pub date: String,
    pub user: String,
}

/// Moisture-sensitivity sticker applied when a dry pack is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MslSticker {
    pub msl: String,
    pub date: String,
    pub time: String,
}

/// Twelve free-text lines of handling instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialInstructions {
    pub lines: [String; 12],
}

/// Work-order traceability label for an assembled unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TracescanLabel {
    pub hw_version: String,
    pub sw_version: String,
    pub standard_indicator: String,
    pub wo_serial_number: String,
    pub ginv: Assembly,
    pub ioca: Assembly,
    pub mcua: Assembly,
    pub lcda: Assembly,
}

/// One sub-assembly row on a Tracescan label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assembly {
    pub description: String,
    pub serial: String,
}

/// End-of-line test result label (pass).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvtOkLabel {
    pub sv_article_no: String,
    pub serial_no: String,
    pub fw_version: String,
    pub run_date: String,
}

/// End-of-line test result label (fail), printed on removable stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvtNokLabel {
    pub sv_article_no: String,
    pub serial_no: String,
    pub fw_version: String,
    pub run_date: String,
    pub failure_reason: String,
}

/// A validated print request, one variant per label kind.
///
/// `printer_id` is carried beside the label content: it addresses the job
/// and never reaches a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRequest {
    pub printer_id: String,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Standard(StandardLabel),
    MslSticker(MslSticker),
    SpecialInstructions(SpecialInstructions),
    Dry,
    Tracescan(TracescanLabel),
    SvtFortloxOk(SvtOkLabel),
    SvtFortloxNok(SvtNokLabel),
}

impl Label {
    pub fn kind(&self) -> LabelKind {
        match self {
            Self::Standard(_) => LabelKind::Standard,
            Self::MslSticker(_) => LabelKind::MslSticker,
            Self::SpecialInstructions(_) => LabelKind::SpecialInstructions,
            Self::Dry => LabelKind::Dry,
            Self::Tracescan(_) => LabelKind::Tracescan,
            Self::SvtFortloxOk(_) => LabelKind::SvtFortloxOk,
            Self::SvtFortloxNok(_) => LabelKind::SvtFortloxNok,
        }
    }
}

impl LabelRequest {
    /// Validate `fields` for `kind` and extract the typed request.
    pub fn from_fields(kind: LabelKind, fields: &JobFields) -> Result<Self> {
        validation::validate(kind, fields)?;

        let t = |key: &str| fields.text(key);
        let label = match kind {
            LabelKind::Standard => Label::Standard(StandardLabel {
                batch: t("batch"),
                item_code: t("item_code"),
                description_line1: t("description_line1"),
                description_line2: t("description_line2"),
                manufacturer: t("manufacturer"),
                manufacturer_part_line1: t("manufacturer_part_line1"),
                manufacturer_part_line2: t("manufacturer_part_line2"),
                warehouse: t("warehouse"),
                parent_warehouse: t("parent_warehouse"),
                msl: t("msl"),
                qty: t("qty"),
                date: t("date"),
                user: t("user"),
            }),
            LabelKind::MslSticker => Label::MslSticker(MslSticker {
                msl: t("msl"),
                date: t("date"),
                time: t("time"),
            }),
            LabelKind::SpecialInstructions => Label::SpecialInstructions(SpecialInstructions {
                lines: std::array::from_fn(|i| t(&format!("line_{}", i + 1))),
            }),
            LabelKind::Dry => Label::Dry,
            LabelKind::Tracescan => Label::Tracescan(TracescanLabel {
                hw_version: t("hw_version"),
                sw_version: t("sw_version"),
                standard_indicator: t("standard_indicator"),
                wo_serial_number: t("wo_serial_number"),
                ginv: assembly(fields, "ginv"),
                ioca: assembly(fields, "ioca"),
                mcua: assembly(fields, "mcua"),
                lcda: assembly(fields, "lcda"),
            }),
            LabelKind::SvtFortloxOk => Label::SvtFortloxOk(SvtOkLabel {
                sv_article_no: t("sv_article_no"),
                serial_no: t("serial_no"),
                fw_version: t("fw_version"),
                run_date: t("run_date"),
            }),
            LabelKind::SvtFortloxNok => Label::SvtFortloxNok(SvtNokLabel {
                sv_article_no: t("sv_article_no"),
                serial_no: t("serial_no"),
                fw_version: t("fw_version"),
                run_date: t("run_date"),
                failure_reason: t("failure_reason"),
            }),
        };

        Ok(Self {
            printer_id: t("printer_id"),
            label,
        })
    }

    pub fn kind(&self) -> LabelKind {
        self.label.kind()
    }
}

fn assembly(fields: &JobFields, prefix: &str) -> Assembly {
    Assembly {
        description: fields.text(&format!("{prefix}_description")),
        serial: fields.text(&format!("{prefix}_serial")),
    }
}
