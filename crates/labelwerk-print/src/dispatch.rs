// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Print job dispatch.
//
// validate -> resolve printer -> render -> send, in that order, each step
// short-circuiting the rest.  Nothing is queued or retried: the caller
// learns the outcome of the one attempt.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use labelwerk_core::error::Result;
use labelwerk_core::fields::JobFields;
use labelwerk_core::labels::LabelRequest;
use labelwerk_core::types::{JobId, LabelKind, PrinterRecord};

use crate::directory::PrinterRepository;
use crate::status::{PrinterStatus, probe_all};
use crate::transport::LabelTransport;

/// What was sent where.
#[derive(Debug, Clone, Serialize)]
pub struct JobReceipt {
    pub job_id: JobId,
    pub kind: LabelKind,
    pub printer_id: String,
    pub bytes: usize,
    pub sha256: String,
}

/// Composes the directory, the label generators and a transport.
pub struct Dispatcher<T> {
    directory: Arc<dyn PrinterRepository>,
    transport: T,
}

impl<T: LabelTransport> Dispatcher<T> {
    pub fn new(directory: Arc<dyn PrinterRepository>, transport: T) -> Self {
        Self {
            directory,
            transport,
        }
    }

    pub fn directory(&self) -> &Arc<dyn PrinterRepository> {
        &self.directory
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Print one label of `kind` from the raw request `fields`.
    #[instrument(skip(self, fields), fields(job_id = tracing::field::Empty))]
    pub async fn dispatch(&self, kind: LabelKind, fields: &JobFields) -> Result<JobReceipt> {
        let job_id = JobId::new();
        tracing::Span::current().record("job_id", tracing::field::display(job_id));

        let request = LabelRequest::from_fields(kind, fields).inspect_err(|e| {
            warn!(error = %e, "rejected print request");
        })?;
        let printer = self.directory.resolve(&request.printer_id).inspect_err(|e| {
            warn!(error = %e, "rejected print request");
        })?;
        let program = labelwerk_zpl::render(&request.label).inspect_err(|e| {
            warn!(error = %e, printer = %printer.id, "label could not be rendered");
        })?;

        let sha256 = program.sha256_hex();
        info!(
            printer = %printer.id,
            addr = %printer.socket_addr(),
            bytes = program.len(),
            sha256 = %sha256,
            "sending label"
        );

        self.transport
            .send(&printer, &program)
            .await
            .inspect_err(|e| warn!(error = %e, printer = %printer.id, "label send failed"))?;

        info!(printer = %printer.id, "label sent");
        Ok(JobReceipt {
            job_id,
            kind,
            printer_id: printer.id,
            bytes: program.len(),
            sha256,
        })
    }

    /// Reachability of every printer in the directory, ordered by id.
    pub async fn status(&self) -> Vec<PrinterStatus> {
        let printers: Vec<PrinterRecord> = self.directory.all();
        probe_all(&self.transport, &printers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use labelwerk_core::error::{LabelwerkError, TransportError};
    use labelwerk_core::types::PrinterState;
    use labelwerk_zpl::LabelProgram;

    use crate::directory::InMemoryDirectory;

    /// Records every send instead of touching the network.
    #[derive(Default)]
    struct Recording {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl Recording {
        fn sends(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl LabelTransport for Recording {
        async fn send(&self, printer: &PrinterRecord, program: &LabelProgram) -> std::result::Result<(), TransportError> {
            if self.fail {
                return Err(TransportError::Refused {
                    addr: printer.socket_addr(),
                    cause: "Connection refused (os error 111)".into(),
                });
            }
            self.sent
                .lock()
                .unwrap()
                .push((printer.socket_addr(), program.as_str().to_owned()));
            Ok(())
        }

        async fn probe(&self, _: &PrinterRecord) -> PrinterState {
            PrinterState::Online
        }
    }

    fn dispatcher(transport: Recording) -> Dispatcher<Recording> {
        let directory = InMemoryDirectory::new(vec![PrinterRecord::new(
            "prt-batch-TWR1",
            "10.1.0.48",
            9100,
        )]);
        Dispatcher::new(Arc::new(directory), transport)
    }

    fn dry(printer_id: &str) -> JobFields {
        JobFields::new().with("printer_id", printer_id)
    }

    #[tokio::test]
    async fn dry_label_reaches_resolved_address() {
        let d = dispatcher(Recording::default());
        let receipt = d.dispatch(LabelKind::Dry, &dry("prt-batch-TWR1")).await.unwrap();

        let sends = d.transport().sends();
        assert_eq!(sends.len(), 1);
        assert_eq!(sends[0].0, "10.1.0.48:9100");
        assert!(sends[0].1.starts_with("^XA"));
        assert_eq!(receipt.printer_id, "prt-batch-TWR1");
        assert_eq!(receipt.bytes, sends[0].1.len());
        assert_eq!(receipt.sha256.len(), 64);
    }

    #[tokio::test]
    async fn unknown_printer_sends_nothing() {
        let d = dispatcher(Recording::default());
        let err = d.dispatch(LabelKind::Dry, &dry("prt-nope")).await.unwrap_err();
        assert!(matches!(err, LabelwerkError::PrinterNotFound(_)));
        assert!(d.transport().sends().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_reported_before_lookup() {
        let d = dispatcher(Recording::default());
        let fields = JobFields::new().with("printer_id", "prt-nope").with("msl", "3");
        let err = d.dispatch(LabelKind::MslSticker, &fields).await.unwrap_err();
        assert!(matches!(err, LabelwerkError::MissingFields(ref f) if f == &["date", "time"]));
        assert!(d.transport().sends().is_empty());
    }

    #[tokio::test]
    async fn bad_serial_is_rejected_without_send() {
        let d = dispatcher(Recording::default());
        let mut fields = JobFields::new();
        for name in LabelKind::Tracescan.required_fields() {
            fields.insert(name, "x");
        }
        fields.insert("printer_id", "prt-batch-TWR1");
        fields.insert("wo_serial_number", "1234-12345678901");

        let err = d.dispatch(LabelKind::Tracescan, &fields).await.unwrap_err();
        assert!(matches!(err, LabelwerkError::InvalidSerialNumber { .. }));
        assert!(d.transport().sends().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_transport_error() {
        let d = dispatcher(Recording {
            fail: true,
            ..Default::default()
        });
        let err = d.dispatch(LabelKind::Dry, &dry("prt-batch-TWR1")).await.unwrap_err();
        assert_eq!(err.kind(), labelwerk_core::error::ErrorKind::Transport);
        assert!(err.to_string().contains("10.1.0.48:9100"));
    }

    #[tokio::test]
    async fn status_covers_whole_directory() {
        let d = dispatcher(Recording::default());
        let report = d.status().await;
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].state, PrinterState::Online);
    }
}
