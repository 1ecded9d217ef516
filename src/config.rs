//! `.jsdoctreerc.json` loading.
//!
//! The file is searched upwards from the project root and the search stops
//! at the first directory holding `.git`. Missing keys fall back to
//! [`Config::default`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".jsdoctreerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Paths or globs, relative to the source root, left out of the scan.
    pub ignores: Vec<String>,
    /// Paths or globs, relative to the source root, limiting the scan.
    /// Empty means the whole source root.
    pub includes: Vec<String>,
    /// Accepted prefixes for members declared outside of any documented scope.
    pub scope_prefixes: Vec<String>,
    pub source_root: String,
    /// Skip `*.test.*`, `*.spec.*` and `__tests__/`.
    pub ignore_test_files: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: vec!["**/node_modules/**".into(), "**/*.min.js".into()],
            includes: Vec::new(),
            scope_prefixes: vec!["Highcharts.".into(), "global.".into(), "globals.".into()],
            source_root: "./".into(),
            ignore_test_files: true,
        }
    }
}

impl Config {
    /// Checks every value and compiles `includes` and `ignores` into the
    /// filter the scanner runs with.
    pub fn validate(&self) -> Result<SourceFilter> {
        if self.scope_prefixes.iter().any(|p| p.trim().is_empty()) {
            bail!("Empty entry in 'scopePrefixes'");
        }

        Ok(SourceFilter {
            includes: PathRule::parse_all(&self.includes, "includes")?,
            ignores: PathRule::parse_all(&self.ignores, "ignores")?,
            ignore_test_files: self.ignore_test_files,
        })
    }
}

/// A config entry compiled for matching.
#[derive(Debug)]
enum PathRule {
    /// An entry with `*` or `?`.
    Glob(Pattern),
    /// Any other entry; matches the path and everything below it.
    Literal(PathBuf),
}

impl PathRule {
    fn parse_all(entries: &[String], key: &str) -> Result<Vec<Self>> {
        entries
            .iter()
            .map(|entry| {
                if entry.contains(['*', '?']) {
                    Pattern::new(entry).map(PathRule::Glob).with_context(|| {
                        format!("Invalid glob pattern in '{}': \"{}\"", key, entry)
                    })
                } else {
                    Ok(PathRule::Literal(PathBuf::from(entry)))
                }
            })
            .collect()
    }

    fn matches(&self, relative: &Path) -> bool {
        match self {
            PathRule::Glob(pattern) => pattern.matches_path(relative),
            PathRule::Literal(prefix) => relative.starts_with(prefix),
        }
    }
}

/// Compiled `includes`/`ignores`, matched against paths relative to the
/// source root.
#[derive(Debug)]
pub struct SourceFilter {
    includes: Vec<PathRule>,
    ignores: Vec<PathRule>,
    ignore_test_files: bool,
}

impl SourceFilter {
    pub fn is_ignored(&self, relative: &Path) -> bool {
        self.ignores.iter().any(|rule| rule.matches(relative))
    }

    /// True if an include covers the path or one of its parent directories.
    pub fn is_included(&self, relative: &Path) -> bool {
        self.includes.is_empty()
            || relative
                .ancestors()
                .any(|path| self.includes.iter().any(|rule| rule.matches(path)))
    }

    pub fn ignore_test_files(&self) -> bool {
        self.ignore_test_files
    }
}

pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    pub filter: SourceFilter,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let (config, from_file) = match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            (config, true)
        }
        None => (Config::default(), false),
    };

    let filter = config.validate()?;
    Ok(ConfigLoadResult {
        config,
        filter,
        from_file,
    })
}
