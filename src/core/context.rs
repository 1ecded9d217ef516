use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use swc_common::SourceMap;
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, SourceFilter, load_config},
    core::{
        file_scanner::scan_files,
        parsers::js::{ParsedSource, parse_source},
        tree::DocTree,
        visitor::{DocletVisit, SourceUnit, VisitorSession},
        walker::walk,
    },
    issues::{Issue, IssueCollector, ParseErrorIssue, Rule},
    rules::check_doclet,
};

/// The doclet tree of one source file.
pub struct FileDocs {
    pub tree: DocTree,
    pub source: SourceUnit,
}

/// Doclet trees of all parsed files, indexed by file path.
pub type AllFileDocs = BTreeMap<String, FileDocs>;

/// Output of a traversal over all files.
pub struct Traversal {
    pub docs: AllFileDocs,
    /// Rule issues and parse errors, in no particular order.
    pub issues: Vec<Issue>,
}

/// Files to traverse and the configuration to traverse them with.
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--source-root`)
/// 2. `.jsdoctreerc.json` config file
/// 3. Built-in defaults
pub struct DocContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// All source files to traverse, sorted.
    pub files: BTreeSet<String>,
}

impl DocContext {
    /// Loads the configuration and scans the source root for files.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let (config, filter, root_dir) = Self::load(common_args)?;

        let base_dir = if root_dir == Path::new(".") {
            PathBuf::from(&config.source_root)
        } else {
            root_dir.join(&config.source_root)
        };

        let scan_result = scan_files(&base_dir, &filter);
        debug!(files = scan_result.files.len(), root = %base_dir.display(), "scan finished");

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
        })
    }

    /// Loads the configuration but traverses exactly `files`.
    pub fn with_files(common_args: &CommonArgs, files: &[PathBuf]) -> Result<Self> {
        let (config, _, root_dir) = Self::load(common_args)?;

        let files = files
            .iter()
            .map(|file| {
                file.to_str()
                    .map(String::from)
                    .with_context(|| anyhow!("Invalid path: {:?}", file))
            })
            .collect::<Result<BTreeSet<_>>>()?;

        Ok(Self {
            config,
            root_dir,
            files,
        })
    }

    fn load(common_args: &CommonArgs) -> Result<(Config, SourceFilter, PathBuf)> {
        // CLI --source-root decides where the config file is searched.
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            debug!("no config file found, using default configuration");
        }

        Ok((config_result.config, config_result.filter, root_dir))
    }

    /// Reads, parses and walks every file in parallel, running `rules` on
    /// each doclet as it is attached.
    ///
    /// Files that cannot be read or parsed are reported as parse errors and
    /// left out of the result.
    pub fn traverse(&self, rules: &[Rule]) -> Traversal {
        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| {
                let result = fs::read_to_string(file_path)
                    .with_context(|| format!("Failed to read file: {}", file_path))
                    .and_then(|code| {
                        // Each file gets its own SourceMap
                        let source_map = Arc::new(SourceMap::default());
                        parse_source(code, file_path, source_map)
                    })
                    .and_then(|parsed| self.traverse_file(parsed, rules));
                (file_path.clone(), result)
            })
            .collect();

        let mut docs = AllFileDocs::new();
        let mut issues = Vec::new();

        for (file_path, result) in results {
            match result {
                Ok((file_docs, file_issues)) => {
                    issues.extend(file_issues);
                    docs.insert(file_path, file_docs);
                }
                Err(e) => {
                    debug!(file = %file_path, error = %e, "skipping file");
                    issues.push(Issue::ParseError(ParseErrorIssue {
                        file_path,
                        error: e.to_string(),
                    }));
                }
            }
        }

        Traversal { docs, issues }
    }

    fn traverse_file(&self, parsed: ParsedSource, rules: &[Rule]) -> Result<(FileDocs, Vec<Issue>)> {
        let mut collector = IssueCollector::default();

        let tree = {
            let mut session = VisitorSession::builder()
                .source(parsed.unit.clone())
                .listener(|visit: DocletVisit<'_>| {
                    check_doclet(visit, rules, &self.config, &mut collector)
                })
                .build()?;
            walk(&parsed, &mut session);
            session.finish()
        };

        debug!(
            file = parsed.unit.path(),
            nodes = tree.len(),
            issues = collector.issues().len(),
            "file traversed"
        );

        let file_docs = FileDocs {
            tree,
            source: parsed.unit,
        };
        Ok((file_docs, collector.into_issues()))
    }
}
