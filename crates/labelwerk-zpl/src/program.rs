// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rendered label program.

use sha2::{Digest, Sha256};

/// ZPL text ready to be sent to a printer.  Produced once per request and
/// consumed by the transport; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelProgram {
    text: String,
}

impl LabelProgram {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// UTF-8 wire payload.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Lowercase hex SHA-256 of the payload, for log correlation.
    pub fn sha256_hex(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl std::fmt::Display for LabelProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_sha256_of_payload() {
        // SHA-256("hello"), verified against coreutils sha256sum.
        let program = LabelProgram::new("hello".into());
        assert_eq!(
            program.sha256_hex(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn bytes_are_utf8() {
        let program = LabelProgram::new("^FDMüller^FS".into());
        assert_eq!(program.as_bytes(), "^FDMüller^FS".as_bytes());
        assert_eq!(program.len(), 13);
    }
}
