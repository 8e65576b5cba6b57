// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer directory: printer id -> network address.
//
// The mapping is held behind an `Arc` so readers take a cheap snapshot and
// never observe a half-applied refresh.  `replace_all` swaps the whole
// mapping in one step, and refuses to swap in an empty one.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use labelwerk_core::error::{LabelwerkError, Result};
use labelwerk_core::types::PrinterRecord;

type Mapping = HashMap<String, PrinterRecord>;

/// Lookup and wholesale replacement of the printer mapping.
pub trait PrinterRepository: Send + Sync {
    /// The record for `id`, if known.
    fn get(&self, id: &str) -> Option<PrinterRecord>;

    /// Every record, ordered by id.
    fn all(&self) -> Vec<PrinterRecord>;

    /// Replace the entire mapping with `records`.
    ///
    /// An empty `records` leaves the current mapping untouched and returns
    /// `false`.  Otherwise the new mapping is installed atomically and
    /// `true` is returned.
    fn replace_all(&self, records: Vec<PrinterRecord>) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like [`get`](Self::get), but an unknown id is a `PrinterNotFound`.
    fn resolve(&self, id: &str) -> Result<PrinterRecord> {
        self.get(id)
            .ok_or_else(|| LabelwerkError::PrinterNotFound(id.to_owned()))
    }
}

/// In-process directory.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    mapping: RwLock<Arc<Mapping>>,
}

impl InMemoryDirectory {
    pub fn new(records: Vec<PrinterRecord>) -> Self {
        Self {
            mapping: RwLock::new(Arc::new(index(records))),
        }
    }

    /// A consistent view of the mapping at this instant.
    pub fn snapshot(&self) -> Arc<Mapping> {
        let guard = self.mapping.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }
}

impl PrinterRepository for InMemoryDirectory {
    fn get(&self, id: &str) -> Option<PrinterRecord> {
        self.snapshot().get(id).cloned()
    }

    fn all(&self) -> Vec<PrinterRecord> {
        let mut records: Vec<_> = self.snapshot().values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    fn replace_all(&self, records: Vec<PrinterRecord>) -> bool {
        if records.is_empty() {
            warn!(
                current = self.len(),
                "refusing to replace printer directory with an empty set"
            );
            return false;
        }

        let next = Arc::new(index(records));
        let count = next.len();
        let mut guard = self.mapping.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
        drop(guard);

        info!(count, "printer directory replaced");
        true
    }

    fn len(&self) -> usize {
        self.snapshot().len()
    }
}

/// Later duplicates of an id win.
fn index(records: Vec<PrinterRecord>) -> Mapping {
    records.into_iter().map(|r| (r.id.clone(), r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, host: &str) -> PrinterRecord {
        PrinterRecord::new(id, host, 9100)
    }

    fn seeded() -> InMemoryDirectory {
        InMemoryDirectory::new(vec![
            rec("prt-batch-TWR1", "10.1.0.48"),
            rec("prt-batch-TWR2", "10.1.0.49"),
        ])
    }

    #[test]
    fn get_known_and_unknown() {
        let dir = seeded();
        assert_eq!(dir.get("prt-batch-TWR1").unwrap().host, "10.1.0.48");
        assert!(dir.get("prt-nope").is_none());
    }

    #[test]
    fn resolve_unknown_is_not_found() {
        let dir = seeded();
        assert!(matches!(
            dir.resolve("prt-nope"),
            Err(LabelwerkError::PrinterNotFound(id)) if id == "prt-nope"
        ));
    }

    #[test]
    fn all_is_sorted_by_id() {
        let dir = InMemoryDirectory::new(vec![rec("b", "h2"), rec("a", "h1"), rec("c", "h3")]);
        let ids: Vec<_> = dir.all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn empty_replace_keeps_previous_mapping() {
        let dir = seeded();
        assert!(!dir.replace_all(Vec::new()));
        assert_eq!(dir.len(), 2);
        assert!(dir.get("prt-batch-TWR2").is_some());
    }

    #[test]
    fn replace_installs_exactly_the_new_records() {
        let dir = seeded();
        assert!(dir.replace_all(vec![
            rec("prt-a", "10.9.0.1"),
            rec("prt-b", "10.9.0.2"),
            rec("prt-c", "10.9.0.3"),
        ]));
        assert_eq!(dir.len(), 3);
        assert!(dir.get("prt-batch-TWR1").is_none());
        assert_eq!(dir.get("prt-c").unwrap().host, "10.9.0.3");
    }

    #[test]
    fn snapshot_is_unaffected_by_later_replace() {
        let dir = seeded();
        let before = dir.snapshot();
        dir.replace_all(vec![rec("prt-new", "10.9.9.9")]);
        assert_eq!(before.len(), 2);
        assert!(before.contains_key("prt-batch-TWR1"));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn concurrent_readers_see_whole_tables() {
        let dir = Arc::new(seeded());
        let writer = {
            let dir = Arc::clone(&dir);
            std::thread::spawn(move || {
                for i in 0..200 {
                    let records = (0..5).map(|n| rec(&format!("gen{i}-{n}"), "10.0.0.1")).collect();
                    dir.replace_all(records);
                }
            })
        };
        for _ in 0..200 {
            let len = dir.snapshot().len();
            assert!(len == 2 || len == 5, "observed partial table of {len}");
        }
        writer.join().unwrap();
    }
}
