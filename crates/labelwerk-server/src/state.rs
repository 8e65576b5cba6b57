// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared state handed to every request handler.

use std::sync::Arc;

use labelwerk_core::config::GatewayConfig;
use labelwerk_core::error::Result;
use labelwerk_print::{
    Dispatcher, HttpInventory, InMemoryDirectory, LabelTransport, PrinterRepository,
    RawTcpTransport,
};

/// Everything a handler needs: the dispatcher (directory + transport), the
/// optional ERP inventory and the expected credential.
pub struct AppState<T> {
    pub dispatcher: Dispatcher<T>,
    pub inventory: Option<HttpInventory>,
    pub api_key: Arc<str>,
}

impl<T: LabelTransport> AppState<T> {
    pub fn new(
        directory: Arc<dyn PrinterRepository>,
        transport: T,
        inventory: Option<HttpInventory>,
        api_key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(directory, transport),
            inventory,
            api_key: api_key.into(),
        }
    }

    pub fn directory(&self) -> &Arc<dyn PrinterRepository> {
        self.dispatcher.directory()
    }
}

impl AppState<RawTcpTransport> {
    /// Production wiring from a validated configuration: static table first,
    /// raw TCP transport, ERP inventory when configured.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let directory = Arc::new(InMemoryDirectory::new(config.printer_table()));
        let inventory = config
            .inventory
            .as_ref()
            .map(HttpInventory::new)
            .transpose()?;
        Ok(Self::new(
            directory,
            RawTcpTransport::from_config(&config.transport),
            inventory,
            config.auth.api_key.as_str(),
        ))
    }
}
