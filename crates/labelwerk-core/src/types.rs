// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Labelwerk gateway.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default raw TCP port for networked label printers.
pub const DEFAULT_PRINTER_PORT: u16 = 9100;

/// Identifier for a single dispatch, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A network-addressable printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterRecord {
    pub id: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PRINTER_PORT
}

impl PrinterRecord {
    pub fn new(id: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            id: id.into(),
            host: host.into(),
            port,
        }
    }

    /// `host:port`, as handed to the socket layer.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Address half of a record as exposed by `GET /printers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterAddress {
    pub host: String,
    pub port: u16,
}

impl From<&PrinterRecord> for PrinterAddress {
    fn from(record: &PrinterRecord) -> Self {
        Self {
            host: record.host.clone(),
            port: record.port,
        }
    }
}

/// The supported label layouts.  Closed set: each kind owns its schema and
/// its generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKind {
    Standard,
    MslSticker,
    SpecialInstructions,
    Dry,
    Tracescan,
    SvtFortloxOk,
    SvtFortloxNok,
}

impl LabelKind {
    pub const ALL: [LabelKind; 7] = [
        LabelKind::Standard,
        LabelKind::MslSticker,
        LabelKind::SpecialInstructions,
        LabelKind::Dry,
        LabelKind::Tracescan,
        LabelKind::SvtFortloxOk,
        LabelKind::SvtFortloxNok,
    ];

    /// Human-readable name used in logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::MslSticker => "MSL-Sticker",
            Self::SpecialInstructions => "SpecialInstructions",
            Self::Dry => "Dry",
            Self::Tracescan => "Tracescan",
            Self::SvtFortloxOk => "SVT-Fortlox-OK",
            Self::SvtFortloxNok => "SVT-Fortlox-NOK",
        }
    }

    /// Ordered set of keys a request of this kind must carry.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Standard => &[
                "printer_id",
                "batch",
                "item_code",
                "description_line1",
                "description_line2",
                "manufacturer",
                "manufacturer_part_line1",
                "manufacturer_part_line2",
                "warehouse",
                "parent_warehouse",
                "msl",
                "qty",
                "date",
                "user",
            ],
            Self::MslSticker => &["printer_id", "msl", "date", "time"],
            Self::SpecialInstructions => &[
                "printer_id",
                "line_1",
                "line_2",
                "line_3",
                "line_4",
                "line_5",
                "line_6",
                "line_7",
                "line_8",
                "line_9",
                "line_10",
                "line_11",
                "line_12",
            ],
            Self::Dry => &["printer_id"],
            Self::Tracescan => &[
                "printer_id",
                "hw_version",
                "sw_version",
                "standard_indicator",
                "wo_serial_number",
                "ginv_description",
                "ginv_serial",
                "ioca_description",
                "ioca_serial",
                "mcua_description",
                "mcua_serial",
                "lcda_description",
                "lcda_serial",
            ],
            Self::SvtFortloxOk => &[
                "printer_id",
                "sv_article_no",
                "serial_no",
                "fw_version",
                "run_date",
            ],
            Self::SvtFortloxNok => &[
                "printer_id",
                "sv_article_no",
                "serial_no",
                "fw_version",
                "run_date",
                "failure_reason",
            ],
        }
    }
}

impl std::fmt::Display for LabelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Reachability of a printer as reported by `GET /printers/status`.
///
/// `Offline` means a connection was attempted and failed (refused, timed
/// out, unreachable).  `Error` means no attempt could be made at all, e.g.
/// the configured host does not resolve to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterState {
    Online,
    Offline,
    Error,
}
