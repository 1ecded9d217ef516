use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{core::DocContext, issues::Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    MemberFullname,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::MemberFullname]
    }
}

impl From<CheckRule> for Rule {
    fn from(rule: CheckRule) -> Self {
        match rule {
            CheckRule::MemberFullname => Rule::MemberFullname,
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = DocContext::new(&cmd.common)?;

    let checks = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };
    let rules: Vec<Rule> = checks.into_iter().map(Rule::from).collect();

    // Parse errors are always part of the result.
    let traversal = ctx.traverse(&rules);

    Ok(finish(
        CommandSummary::Check,
        traversal.issues,
        ctx.files.len(),
        true,
    ))
}
