// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Labelwerk Print — printer directory, ERP inventory refresh, raw TCP
// transport and job dispatch.  This crate bridges between the label
// generators in `labelwerk-zpl` and the printers on the shop floor.

pub mod directory;
pub mod dispatch;
pub mod inventory;
pub mod raw_client;
pub mod status;
pub mod transport;

pub use directory::{InMemoryDirectory, PrinterRepository};
pub use dispatch::{Dispatcher, JobReceipt};
pub use inventory::{HttpInventory, InventorySource, RefreshOutcome};
pub use status::PrinterStatus;
pub use transport::{LabelTransport, RawTcpTransport};
