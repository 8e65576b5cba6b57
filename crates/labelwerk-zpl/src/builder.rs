// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ZPL II command builder.
//
// One directive per line.  Every program opens with `^XA` and is closed by
// `finish()` with `^XZ`.  Field data is placed verbatim: callers sanitize
// and truncate before handing text in.

use crate::program::LabelProgram;

/// Fluent builder for a single ZPL label program.
pub struct ZplBuilder {
    buf: String,
}

impl Default for ZplBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZplBuilder {
    pub fn new() -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str("^XA\n");
        Self { buf }
    }

    fn directive(&mut self, line: &str) -> &mut Self {
        self.buf.push_str(line);
        self.buf.push('\n');
        self
    }

    // -- Page --

    /// Print width and label length in dots (`^PW`, `^LL`).
    pub fn page(&mut self, width: u32, length: u32) -> &mut Self {
        self.directive(&format!("^PW{width}"));
        self.directive(&format!("^LL{length}"))
    }

    // -- Text --

    /// Select the scalable font at `height` dots (`^CF0`).
    pub fn font(&mut self, height: u32) -> &mut Self {
        self.directive(&format!("^CF0,{height}"))
    }

    /// Place a text field with its top-left corner at (`x`, `y`).
    pub fn text(&mut self, x: u32, y: u32, text: &str) -> &mut Self {
        self.directive(&format!("^FO{x},{y}^FD{text}^FS"))
    }

    /// Text printed white-on-black over a filled box (`^FR`).
    pub fn text_reversed(&mut self, x: u32, y: u32, text: &str) -> &mut Self {
        self.directive(&format!("^FO{x},{y}^FR^FD{text}^FS"))
    }

    // -- Graphics --

    /// Outline box (`^GB`) with black border `thickness` dots wide.
    pub fn outline(&mut self, x: u32, y: u32, width: u32, height: u32, thickness: u32) -> &mut Self {
        self.directive(&format!("^FO{x},{y}^GB{width},{height},{thickness},B,0^FS"))
    }

    /// Solid black box.
    pub fn filled(&mut self, x: u32, y: u32, width: u32, height: u32) -> &mut Self {
        let thickness = width.min(height);
        self.directive(&format!("^FO{x},{y}^GB{width},{height},{thickness}^FS"))
    }

    /// Horizontal rule.
    pub fn rule(&mut self, x: u32, y: u32, width: u32) -> &mut Self {
        self.directive(&format!("^FO{x},{y}^GB{width},2,2^FS"))
    }

    // -- Barcodes --

    /// QR code (model 2, magnification 6, high error correction) carrying
    /// `data` in manual alphanumeric mode.
    pub fn qr(&mut self, x: u32, y: u32, data: &str) -> &mut Self {
        self.directive(&format!("^FO{x},{y}^BQN,2,6,H^FDMM,A{data}^FS"))
    }

    /// Code 128 barcode `height` dots tall, no human-readable line.
    pub fn code128(&mut self, x: u32, y: u32, height: u32, data: &str) -> &mut Self {
        self.directive(&format!("^FO{x},{y}^BY2^BCN,{height},N,N,N^FD{data}^FS"))
    }

    /// Close the program.
    pub fn finish(mut self) -> LabelProgram {
        self.buf.push_str("^XZ\n");
        LabelProgram::new(self.buf)
    }
}
