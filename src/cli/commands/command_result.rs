use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Dump(DumpSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct DumpSummary {
    /// Rendered trees, ready to print.
    pub output: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running jsdoctree commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, a failure exit status is returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the command, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were traversed.
    pub source_files_checked: usize,
}
