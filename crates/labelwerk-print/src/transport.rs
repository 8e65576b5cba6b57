// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The seam between dispatch and the network.

use std::future::Future;
use std::time::Duration;

use labelwerk_core::config::TransportConfig;
use labelwerk_core::error::TransportError;
use labelwerk_core::types::{PrinterRecord, PrinterState};
use labelwerk_zpl::LabelProgram;

use crate::raw_client;

/// Delivers label programs to printers and checks whether they answer.
pub trait LabelTransport: Send + Sync + 'static {
    /// Hand the whole program to `printer`.  Fire and forget.
    fn send(
        &self,
        printer: &PrinterRecord,
        program: &LabelProgram,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Reachability check, independent of any job.
    fn probe(&self, printer: &PrinterRecord) -> impl Future<Output = PrinterState> + Send;
}

/// JetDirect-style raw TCP, one connection per job.
#[derive(Debug, Clone, Copy)]
pub struct RawTcpTransport {
    send_timeout: Duration,
    probe_timeout: Duration,
}

impl RawTcpTransport {
    pub fn new(send_timeout: Duration, probe_timeout: Duration) -> Self {
        Self {
            send_timeout,
            probe_timeout,
        }
    }

    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(config.send_timeout(), config.probe_timeout())
    }
}

impl LabelTransport for RawTcpTransport {
    async fn send(&self, printer: &PrinterRecord, program: &LabelProgram) -> Result<(), TransportError> {
        raw_client::send_raw(&printer.socket_addr(), program.as_bytes(), self.send_timeout).await
    }

    async fn probe(&self, printer: &PrinterRecord) -> PrinterState {
        raw_client::probe(&printer.socket_addr(), self.probe_timeout).await
    }
}
