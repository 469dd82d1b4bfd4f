//! # codetidy Main File Locator
//!
//! File: cli/src/commands/readme/utils/main_file.rs
//!
//! Picks the project's conventional entry point. Candidates are tried in a
//! fixed priority order and the first one matched by any file (compared on
//! the lowercased base name) wins, regardless of where that file sits in the
//! input list.
//!
use crate::common::source::ingest::FileRecord;

/// Entry-point names, highest priority first.
pub const MAIN_FILE_PRIORITY: [&str; 7] = [
    "index.ts",
    "index.js",
    "main.py",
    "app.py",
    "server.js",
    "app.js",
    "index.html",
];

/// Returns the highest-priority entry point, or `None` if nothing matches.
pub fn find_main_file(files: &[FileRecord]) -> Option<&FileRecord> {
    MAIN_FILE_PRIORITY.iter().find_map(|pattern| {
        files
            .iter()
            .find(|file| file.name.to_lowercase() == *pattern)
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str) -> FileRecord {
        FileRecord {
            name: path.rsplit('/').next().unwrap().to_string(),
            path: path.to_string(),
            content: String::new(),
            formatted: None,
        }
    }

    #[test]
    fn test_priority_beats_list_order() {
        let files = [record("app.py"), record("main.py")];
        assert_eq!(find_main_file(&files).map(|f| f.name.as_str()), Some("main.py"));

        let reversed = [record("main.py"), record("app.py")];
        assert_eq!(find_main_file(&reversed).map(|f| f.name.as_str()), Some("main.py"));
    }

    #[test]
    fn test_name_comparison_is_case_insensitive() {
        let files = [record("public/Index.HTML"), record("src/Server.js")];
        assert_eq!(
            find_main_file(&files).map(|f| f.path.as_str()),
            Some("src/Server.js")
        );
    }

    #[test]
    fn test_first_file_with_matching_name_wins() {
        let files = [record("packages/a/index.js"), record("index.js")];
        assert_eq!(
            find_main_file(&files).map(|f| f.path.as_str()),
            Some("packages/a/index.js")
        );
    }

    #[test]
    fn test_no_match() {
        assert!(find_main_file(&[record("lib.rs"), record("mainfile.py")]).is_none());
        assert!(find_main_file(&[]).is_none());
    }
}
