// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Gateway configuration.
//
// Sources, later ones winning: built-in defaults, an optional TOML file,
// then environment variables (`APIKEY`, `LABELWERK_LISTEN`, `INVENTORY_URL`,
// `INVENTORY_TOKEN`).

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LabelwerkError, Result};
use crate::types::{DEFAULT_PRINTER_PORT, PrinterRecord};

/// Complete gateway settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub transport: TransportConfig,
    /// External printer inventory.  `None` keeps the static table only.
    pub inventory: Option<InventoryConfig>,
    /// Static printer table.  Empty means "use the built-in table".
    pub printers: Vec<PrinterRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP API binds to.
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:5500".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared credential expected in the `apikey` header.
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Upper bound for connecting to a printer and writing a label.
    pub send_timeout_secs: u64,
    /// Connect timeout for the reachability probe.
    pub probe_timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            send_timeout_secs: 10,
            probe_timeout_secs: 5,
        }
    }
}

impl TransportConfig {
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Printer resource endpoint of the ERP.
    pub url: String,
    /// `key:secret` API token, sent as `Authorization: token <token>`.
    pub token: String,
    #[serde(default = "default_inventory_timeout")]
    pub timeout_secs: u64,
}

fn default_inventory_timeout() -> u64 {
    10
}

impl GatewayConfig {
    /// Load from a TOML file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LabelwerkError::Config(format!("read {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml(&contents)
            .map_err(|e| LabelwerkError::Config(format!("{}: {e}", path.display())))?;
        config.apply_env(|key| std::env::var(key).ok());
        info!(path = %path.display(), printers = config.printer_table().len(), "configuration loaded");
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a file.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        debug!("configuration taken from defaults and environment");
        config
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Overlay environment values.  `lookup` is injected so tests do not
    /// have to mutate the process environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("APIKEY") {
            self.auth.api_key = key;
        }
        if let Some(listen) = lookup("LABELWERK_LISTEN") {
            self.server.listen = listen;
        }
        match (lookup("INVENTORY_URL"), lookup("INVENTORY_TOKEN")) {
            (Some(url), Some(token)) => {
                self.inventory = Some(InventoryConfig {
                    url,
                    token,
                    timeout_secs: self
                        .inventory
                        .as_ref()
                        .map_or_else(default_inventory_timeout, |i| i.timeout_secs),
                });
            }
            (Some(url), None) => {
                if let Some(inv) = self.inventory.as_mut() {
                    inv.url = url;
                }
            }
            (None, Some(token)) => {
                if let Some(inv) = self.inventory.as_mut() {
                    inv.token = token;
                }
            }
            (None, None) => {}
        }
    }

    /// Reject settings the gateway cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.auth.api_key.trim().is_empty() {
            return Err(LabelwerkError::Config(
                "no API key configured (set auth.api_key or APIKEY)".into(),
            ));
        }
        if self.transport.send_timeout_secs == 0 || self.transport.probe_timeout_secs == 0 {
            return Err(LabelwerkError::Config("transport timeouts must be non-zero".into()));
        }
        Ok(())
    }

    /// The static table to seed the directory with.
    pub fn printer_table(&self) -> Vec<PrinterRecord> {
        if self.printers.is_empty() {
            builtin_printers()
        } else {
            self.printers.clone()
        }
    }
}

/// Printers installed on the shop floor, used when no table is configured.
pub fn builtin_printers() -> Vec<PrinterRecord> {
    [
        ("prt-batch-TWR1", "10.1.0.48"),
        ("prt-batch-TWR2", "10.1.0.49"),
        ("prt-batch-WE1", "10.1.0.25"),
        ("prt-batch-WE2", "10.1.0.26"),
        ("prt-batch-WE3", "10.1.0.27"),
        ("prt-batch-WE4", "10.1.0.28"),
        ("prt-label-CDS", "10.1.0.53"),
        // SVT pass label, 60x30mm
        ("prt-K-SVT-00028", "10.1.0.56"),
        // SVT fail label, 51x25mm removable
        ("prt-K-SVT-00029", "10.1.0.57"),
        ("prt-batch-RO1", "192.168.120.9"),
    ]
    .into_iter()
    .map(|(id, host)| PrinterRecord::new(id, host, DEFAULT_PRINTER_PORT))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.listen, "0.0.0.0:5500");
        assert_eq!(config.transport.probe_timeout(), Duration::from_secs(5));
        assert!(config.inventory.is_none());
        assert_eq!(config.printer_table().len(), 10);
    }

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(GatewayConfig::default().validate().is_err());

        let mut config = GatewayConfig::default();
        config.auth.api_key = "s3cret".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_overrides_sections() {
        let config = GatewayConfig::from_toml(
            r#"
            [auth]
            api_key = "abc"

            [transport]
            send_timeout_secs = 3

            [[printers]]
            id = "prt-test"
            host = "127.0.0.1"
            port = 9101
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.api_key, "abc");
        assert_eq!(config.transport.send_timeout_secs, 3);
        assert_eq!(config.transport.probe_timeout_secs, 5);
        assert_eq!(config.printer_table(), vec![PrinterRecord::new("prt-test", "127.0.0.1", 9101)]);
    }

    #[test]
    fn env_overrides_file() {
        let env: HashMap<&str, &str> = [
            ("APIKEY", "from-env"),
            ("INVENTORY_URL", "https://erp.local/api/resource/Printer"),
            ("INVENTORY_TOKEN", "k:s"),
        ]
        .into_iter()
        .collect();

        let mut config = GatewayConfig::default();
        config.auth.api_key = "from-file".into();
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.auth.api_key, "from-env");
        let inventory = config.inventory.unwrap();
        assert_eq!(inventory.token, "k:s");
        assert_eq!(inventory.timeout_secs, 10);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nlisten = \"127.0.0.1:8080\"").unwrap();

        let config = GatewayConfig::load(file.path()).unwrap();
        assert_eq!(config.server.listen, "127.0.0.1:8080");
    }

    #[test]
    fn load_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nlisten = ").unwrap();

        let err = GatewayConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LabelwerkError::Config(_)));
    }
}
