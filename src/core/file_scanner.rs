//! Source file discovery.
//!
//! The source root is walked once. Ignored directories are pruned before
//! they are entered, and a file is kept when it has a JS/TS extension, an
//! include covers it and it is not a test file (unless test files are
//! wanted).

use std::{collections::BTreeSet, path::Path, sync::LazyLock};

use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::SourceFilter;

/// Extensions of the files swc is asked to parse.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// `*.test.*`, `*.spec.*` and anything below a `__tests__` directory.
static TEST_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[/\\])__tests__[/\\]|\.(?:test|spec)\.[cm]?[jt]sx?$").unwrap()
});

/// Result of scanning files.
pub struct ScanResult {
    /// Source files, sorted by path.
    pub files: BTreeSet<String>,
    /// Entries that could not be read.
    pub skipped_count: usize,
}

pub fn scan_files(base_dir: &Path, filter: &SourceFilter) -> ScanResult {
    let relative = |path: &Path| path.strip_prefix(base_dir).unwrap_or(path).to_path_buf();

    let mut result = ScanResult {
        files: BTreeSet::new(),
        skipped_count: 0,
    };

    let entries = WalkDir::new(base_dir)
        .into_iter()
        .filter_entry(|entry| !filter.is_ignored(&relative(entry.path())));

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                result.skipped_count += 1;
                debug!(error = %e, "cannot access path");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_source_file(path) {
            continue;
        }
        if filter.ignore_test_files() && is_test_file(path) {
            continue;
        }
        if !filter.is_included(&relative(path)) {
            continue;
        }

        result.files.insert(path.to_string_lossy().into_owned());
    }

    if result.skipped_count > 0 {
        warn!(
            skipped = result.skipped_count,
            root = %base_dir.display(),
            "paths skipped due to access errors"
        );
    }

    result
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

pub fn is_test_file(path: &Path) -> bool {
    TEST_FILE_REGEX.is_match(&path.to_string_lossy())
}
