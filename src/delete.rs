use anyhow::Result;

use crate::git::Git;

/// Outcome of a safe-deletion pass over the selected branches.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// Every selected branch was deleted (or would have been, on a dry run).
    Completed { deleted: Vec<String> },
    /// Safe deletion stopped at the first failure. `remaining` holds the
    /// branch that failed followed by the branches that were never
    /// attempted; `deleted` holds the branches removed before the failure.
    Blocked {
        deleted: Vec<String>,
        remaining: Vec<String>,
        reason: String,
    },
}

/// Delete branches one at a time with `git branch -d`, stopping at the first
/// failure so the unresolved remainder can be offered to forced deletion.
pub fn delete_branches(git: &Git, branches: &[String], dry_run: bool) -> DeleteOutcome {
    if dry_run {
        return DeleteOutcome::Completed {
            deleted: branches.to_vec(),
        };
    }

    let mut deleted = Vec::with_capacity(branches.len());
    for (idx, branch) in branches.iter().enumerate() {
        match git.delete_branch(branch) {
            Ok(()) => deleted.push(branch.clone()),
            Err(err) => {
                return DeleteOutcome::Blocked {
                    deleted,
                    remaining: branches[idx..].to_vec(),
                    reason: format!("{err:#}"),
                };
            }
        }
    }

    DeleteOutcome::Completed { deleted }
}

/// Force-delete with `git branch -D`. Unlike the safe pass, any failure here
/// is propagated; there is no further fallback.
pub fn force_delete_branches(git: &Git, branches: &[String]) -> Result<Vec<String>> {
    let mut deleted = Vec::with_capacity(branches.len());
    for branch in branches {
        git.force_delete_branch(branch)?;
        deleted.push(branch.clone());
    }
    Ok(deleted)
}
