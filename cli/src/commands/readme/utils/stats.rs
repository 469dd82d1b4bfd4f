//! # codetidy File Statistics
//!
//! File: cli/src/commands/readme/utils/stats.rs
//!
//! Counts ingested files per display label. Keys are display labels, not raw
//! extensions, so `a.ts` and `b.TS` land in the same bucket while `x.h` and
//! `notes.txt` both count as "Plain text".
//!
use crate::common::source::ingest::FileRecord;
use crate::common::source::language;
use serde::Serialize;

/// Number of files sharing one display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: &'static str,
    pub count: usize,
}

/// Per-label counts, in the order each label is first seen.
pub fn compute_stats(files: &[FileRecord]) -> Vec<LabelCount> {
    let mut stats: Vec<LabelCount> = Vec::new();
    for file in files {
        let label = language::classify(&file.name);
        match stats.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.count += 1,
            None => stats.push(LabelCount { label, count: 1 }),
        }
    }
    stats
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            path: name.to_string(),
            content: String::new(),
            formatted: None,
        }
    }

    #[test]
    fn test_counts_by_label_in_first_seen_order() {
        let stats = compute_stats(&[
            record("a.py"),
            record("index.ts"),
            record("b.py"),
            record("util.h"),
            record("notes.txt"),
            record("c.TS"),
        ]);
        assert_eq!(
            stats,
            vec![
                LabelCount { label: "Python", count: 2 },
                LabelCount { label: "TypeScript", count: 2 },
                LabelCount { label: "Plain text", count: 2 },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_stats(&[]).is_empty());
    }
}
