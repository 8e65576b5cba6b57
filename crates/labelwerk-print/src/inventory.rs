// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// External printer inventory.
//
// The ERP exposes printers as a REST resource:
//
//   GET <url>   Authorization: token <key:secret>
//   {"data": [{"name": "prt-batch-TWR1", "ip_address": "10.1.0.48", "port": 9100}, ...]}
//
// A refresh that fails for any reason, or that yields no usable records,
// leaves the directory as it was.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use labelwerk_core::config::InventoryConfig;
use labelwerk_core::error::{LabelwerkError, Result};
use labelwerk_core::types::{DEFAULT_PRINTER_PORT, PrinterRecord};

use crate::directory::PrinterRepository;

/// Anything that can produce a full printer table.
pub trait InventorySource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Vec<PrinterRecord>>> + Send;
}

/// Inventory held by the ERP, fetched over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl HttpInventory {
    pub fn new(config: &InventoryConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LabelwerkError::Inventory(format!("building HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: config.url.clone(),
            token: config.token.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl InventorySource for HttpInventory {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<PrinterRecord>> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::AUTHORIZATION, format!("token {}", self.token))
            .send()
            .await
            .map_err(|e| LabelwerkError::Inventory(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LabelwerkError::Inventory(format!("server answered {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LabelwerkError::Inventory(format!("malformed response: {e}")))?;
        parse_records(&body)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Vec<Value>,
}

/// Extract printer records from an inventory response body.
///
/// Entries without a name or address are skipped.  A missing or unparsable
/// port falls back to 9100.
pub fn parse_records(body: &Value) -> Result<Vec<PrinterRecord>> {
    let envelope = Envelope::deserialize(body)
        .map_err(|e| LabelwerkError::Inventory(format!("unexpected response shape: {e}")))?;

    let mut records = Vec::with_capacity(envelope.data.len());
    for entry in &envelope.data {
        let name = non_blank(entry.get("name"));
        let host = non_blank(entry.get("ip_address"));
        let (Some(name), Some(host)) = (name, host) else {
            debug!(entry = %entry, "skipping inventory entry without name or address");
            continue;
        };
        records.push(PrinterRecord::new(name, host, port_of(entry.get("port"))));
    }
    Ok(records)
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn port_of(value: Option<&Value>) -> u16 {
    let port: Option<u16> = match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    port.filter(|p| *p != 0).unwrap_or(DEFAULT_PRINTER_PORT)
}

/// Result of one refresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    /// Whether the directory was replaced.
    pub updated: bool,
    /// Directory size after the attempt.
    pub count: usize,
}

/// Fetch from `source` and, if it produced anything, replace the directory.
///
/// Never fails: fetch errors are logged and reported as "not updated".
pub async fn refresh<S: InventorySource>(
    source: &S,
    directory: &dyn PrinterRepository,
) -> RefreshOutcome {
    let updated = match source.fetch().await {
        Ok(records) => {
            let fetched = records.len();
            let updated = directory.replace_all(records);
            if updated {
                info!(fetched, "printer inventory applied");
            }
            updated
        }
        Err(e) => {
            warn!(error = %e, "printer inventory refresh failed, keeping current directory");
            false
        }
    };
    RefreshOutcome {
        updated,
        count: directory.len(),
    }
}
