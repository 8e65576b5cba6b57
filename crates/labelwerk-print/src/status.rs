// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Directory-wide reachability report.
//
// Printers are probed one after another, so the worst case is the sum of
// the probe timeouts.  A failing probe only affects its own entry.

use serde::Serialize;
use tracing::{info, instrument};

use labelwerk_core::types::{PrinterRecord, PrinterState};

use crate::transport::LabelTransport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrinterStatus {
    pub id: String,
    pub state: PrinterState,
}

/// Probe every printer in `printers`, in order.
#[instrument(skip_all, fields(printers = printers.len()))]
pub async fn probe_all<T: LabelTransport>(
    transport: &T,
    printers: &[PrinterRecord],
) -> Vec<PrinterStatus> {
    let mut report = Vec::with_capacity(printers.len());
    for printer in printers {
        let state = transport.probe(printer).await;
        report.push(PrinterStatus {
            id: printer.id.clone(),
            state,
        });
    }

    let online = report
        .iter()
        .filter(|s| s.state == PrinterState::Online)
        .count();
    info!(online, total = report.len(), "printer status probed");
    report
}
