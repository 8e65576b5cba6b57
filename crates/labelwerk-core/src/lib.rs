// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Labelwerk — core types, request validation, error taxonomy and
// configuration shared across all crates.

pub mod config;
pub mod error;
pub mod fields;
pub mod labels;
pub mod types;
pub mod validation;

pub use config::GatewayConfig;
pub use error::{ErrorKind, LabelwerkError, TransportError};
pub use fields::JobFields;
pub use labels::{Label, LabelRequest};
pub use types::*;
