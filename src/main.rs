mod app;
mod cli;
mod delete;
mod git;
mod prompt;
#[cfg(test)]
mod testsupport;
mod tui;
mod ui;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::delete::{DeleteOutcome, delete_branches, force_delete_branches};
use crate::git::Git;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        println!("Uh oh: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let git = Git::new(cli.repo);
    let branches = git.deletable_branches()?;

    if cli.list_only {
        print_branch_listing(&branches);
        return Ok(());
    }

    let accessible = cli.accessible || prompt::accessible_mode_from_env();

    let selected = prompt::multi_select(
        "What branches do you want to delete?",
        &branches,
        accessible,
    )?;

    let confirmed = prompt::confirm(
        "Are you sure you want to delete the selected branches?",
        &selected,
        accessible,
    )?;
    if !confirmed {
        println!("Aborted - no branches deleted.");
        return Ok(());
    }

    match delete_branches(&git, &selected, cli.dry_run) {
        DeleteOutcome::Completed { deleted } => {
            summarize(&deleted, cli.dry_run);
        }
        DeleteOutcome::Blocked {
            deleted,
            remaining,
            reason,
        } => {
            if !deleted.is_empty() {
                summarize(&deleted, false);
            }

            let mut details = vec![reason];
            details.extend(remaining.iter().cloned());
            let forced = prompt::confirm(
                "It appears that normal deletion didn't work. Do you want to force delete the branches?",
                &details,
                accessible,
            )?;

            if !forced {
                println!("Left {} branch(es) in place.", remaining.len());
                return Ok(());
            }

            let deleted = force_delete_branches(&git, &remaining)?;
            summarize(&deleted, false);
        }
    }

    Ok(())
}

fn print_branch_listing(branches: &[String]) {
    println!("Deletable branches:");
    for name in branches {
        println!("  {name}");
    }
}

fn summarize(deleted: &[String], dry_run: bool) {
    if deleted.is_empty() {
        println!("No branches selected - nothing to do.");
        return;
    }

    if dry_run {
        println!("Dry run - branches that would be deleted:");
    } else {
        println!("Deleted branches:");
    }
    for name in deleted {
        println!("  {name}");
    }
}
