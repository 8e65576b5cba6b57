// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Labelwerk.
//
// Every failure a request can hit falls into one of five kinds (see
// `ErrorKind`).  The HTTP layer maps kinds to status codes and never looks
// at message text.

use thiserror::Error;

/// Failure while handing a label program to a printer.
///
/// The kinds are kept apart so callers can report a dead printer differently
/// from a network that cannot route to it.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection to {addr} timed out after {timeout_secs}s")]
    ConnectTimeout { addr: String, timeout_secs: u64 },

    #[error("connection to {addr} refused: {cause}")]
    Refused { addr: String, cause: String },

    #[error("printer {addr} unreachable: {cause}")]
    Unreachable { addr: String, cause: String },

    #[error("sending to {addr} timed out after {timeout_secs}s")]
    SendTimeout { addr: String, timeout_secs: u64 },

    #[error("socket error talking to {addr}: {source}")]
    Io {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

impl TransportError {
    /// Classify a failed `connect()` by its OS error kind.
    ///
    /// `ConnectTimeout` is reserved for the configured deadline; an OS-level
    /// timeout keeps its cause as `Io`.
    pub fn from_connect(addr: &str, err: std::io::Error) -> Self {
        use std::io::ErrorKind as Io;

        match err.kind() {
            Io::ConnectionRefused => Self::Refused {
                addr: addr.to_owned(),
                cause: err.to_string(),
            },
            Io::HostUnreachable
            | Io::NetworkUnreachable
            | Io::AddrNotAvailable
            | Io::NotFound => Self::Unreachable {
                addr: addr.to_owned(),
                cause: err.to_string(),
            },
            _ => Self::Io {
                addr: addr.to_owned(),
                source: err,
            },
        }
    }
}

/// Top-level error type for all Labelwerk operations.
#[derive(Debug, Error)]
pub enum LabelwerkError {
    // -- Client input --
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("invalid serial number in {field}: {value:?} (expected 5 digits, dash, 11 digits)")]
    InvalidSerialNumber { field: String, value: String },

    #[error("unrecognized MSL level: {0:?}")]
    UnknownMsl(String),

    // -- Lookup --
    #[error("printer not found: {0}")]
    PrinterNotFound(String),

    // -- Transport --
    #[error(transparent)]
    Transport(#[from] TransportError),

    // -- Credential --
    #[error("API key is missing")]
    MissingCredential,

    #[error("Invalid API key")]
    InvalidCredential,

    // -- Infrastructure --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("inventory refresh failed: {0}")]
    Inventory(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The caller-facing class of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is wrong; resubmitting it unchanged will fail again.
    ClientInput,
    /// The request names a printer the directory does not know.
    NotFound,
    /// The printer could not be reached or the bytes could not be written.
    Transport,
    /// Credential absent or wrong.
    Auth,
    /// Anything else.
    Internal,
}

impl LabelwerkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFields(_) | Self::InvalidSerialNumber { .. } | Self::UnknownMsl(_) => {
                ErrorKind::ClientInput
            }
            Self::PrinterNotFound(_) => ErrorKind::NotFound,
            Self::Transport(_) => ErrorKind::Transport,
            Self::MissingCredential | Self::InvalidCredential => ErrorKind::Auth,
            Self::Config(_) | Self::Inventory(_) | Self::Io(_) | Self::Serialization(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Names of the request fields this error is about, if any.
    pub fn offending_fields(&self) -> Vec<String> {
        match self {
            Self::MissingFields(fields) => fields.clone(),
            Self::InvalidSerialNumber { field, .. } => vec![field.clone()],
            Self::UnknownMsl(_) => vec!["msl".to_owned()],
            _ => Vec::new(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LabelwerkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_input_errors_are_classified() {
        let missing = LabelwerkError::MissingFields(vec!["batch".into()]);
        assert_eq!(missing.kind(), ErrorKind::ClientInput);
        assert_eq!(missing.offending_fields(), vec!["batch".to_owned()]);

        let msl = LabelwerkError::UnknownMsl("7".into());
        assert_eq!(msl.kind(), ErrorKind::ClientInput);
        assert_eq!(msl.offending_fields(), vec!["msl".to_owned()]);
    }

    #[test]
    fn refused_connect_is_its_own_kind() {
        let io = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        let err = TransportError::from_connect("10.1.0.48:9100", io);
        assert!(matches!(err, TransportError::Refused { .. }));
        assert_eq!(LabelwerkError::from(err).kind(), ErrorKind::Transport);
    }

    #[test]
    fn unexpected_connect_failure_keeps_source() {
        let io = std::io::Error::other("boom");
        let err = TransportError::from_connect("10.1.0.48:9100", io);
        assert!(matches!(err, TransportError::Io { .. }));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn os_connect_timeout_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "connection timed out (os error 110)");
        let err = TransportError::from_connect("10.1.0.48:9100", io);
        assert!(matches!(err, TransportError::Io { .. }));
        let message = err.to_string();
        assert!(message.contains("os error 110"));
        assert!(!message.contains("after 0s"));
    }

    #[test]
    fn missing_fields_message_lists_names() {
        let err = LabelwerkError::MissingFields(vec!["msl".into(), "date".into()]);
        assert_eq!(err.to_string(), "missing required fields: msl, date");
    }

    #[test]
    fn credential_errors_are_auth() {
        assert_eq!(LabelwerkError::MissingCredential.kind(), ErrorKind::Auth);
        assert_eq!(LabelwerkError::InvalidCredential.kind(), ErrorKind::Auth);
    }
}
