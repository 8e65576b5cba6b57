// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// labelwerk-zpl — ZPL II program generation for the Labelwerk gateway.
//
// Provides a line-oriented ZPL builder, the shared layout rules (warehouse
// compaction, font stepping, truncation), the MSL mounting-time table, the
// traceability rules, and one generator per label kind.

pub mod builder;
pub mod layout;
pub mod msl;
pub mod program;
pub mod templates;
pub mod trace;

// Re-export the entry points so callers can use `labelwerk_zpl::render` etc.
pub use builder::ZplBuilder;
pub use program::LabelProgram;
pub use templates::render;
