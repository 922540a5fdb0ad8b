use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Thin wrapper over the `git` command-line client. Every operation spawns
/// one `git` process and waits for it to finish; only the exit status and
/// the captured output are inspected.
pub struct Git {
    repo: Option<PathBuf>,
}

impl Git {
    pub fn new(repo: Option<PathBuf>) -> Self {
        Self { repo }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.repo {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Local branches that are candidates for deletion: everything
    /// `git branch` reports except the currently checked-out branch.
    ///
    /// Fails if git cannot be invoked, if the directory is not a repository,
    /// or if no candidates remain after filtering.
    pub fn deletable_branches(&self) -> Result<Vec<String>> {
        let output = self
            .command()
            .arg("branch")
            .output()
            .context("Failed to run `git branch`; is git installed?")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("`git branch` failed: {}", stderr.trim());
        }

        let stdout =
            String::from_utf8(output.stdout).context("`git branch` output was not valid UTF-8")?;

        let branches = parse_branch_listing(&stdout);
        if branches.is_empty() {
            bail!("there are no branches I could delete here");
        }

        Ok(branches)
    }

    /// `git branch -d <name>`; refuses branches with unmerged work.
    pub fn delete_branch(&self, name: &str) -> Result<()> {
        self.branch_op(&["branch", "-d", name])
    }

    /// `git branch -D <name>`; deletes unconditionally.
    pub fn force_delete_branch(&self, name: &str) -> Result<()> {
        self.branch_op(&["branch", "-D", name])
    }

    fn branch_op(&self, args: &[&str]) -> Result<()> {
        let output = self
            .command()
            .args(args)
            .output()
            .with_context(|| format!("Failed to run `git {}`", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("`git {}` failed: {}", args.join(" "), stderr.trim());
        }

        Ok(())
    }
}

/// Parse `git branch` output: one branch per line, the current branch
/// prefixed with `*`. Empty lines and the current branch are dropped,
/// everything else is trimmed and kept.
pub fn parse_branch_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('*'))
        .map(|line| line.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{create_branch, create_unmerged_branch, init_repo};

    #[test]
    fn listing_skips_current_branch_and_blank_lines() {
        let output = "* main\n  feature-a\n  feature-b\n\n";
        assert_eq!(
            parse_branch_listing(output),
            vec!["feature-a".to_string(), "feature-b".to_string()]
        );
    }

    #[test]
    fn listing_trims_whitespace() {
        let output = "  spaced-branch  \n* current\n";
        assert_eq!(parse_branch_listing(output), vec!["spaced-branch"]);
    }

    #[test]
    fn listing_of_only_current_branch_is_empty() {
        assert!(parse_branch_listing("* main\n").is_empty());
        assert!(parse_branch_listing("").is_empty());
    }

    #[test]
    fn whitespace_only_lines_are_dropped() {
        assert!(parse_branch_listing("   \n* main\n").is_empty());
    }

    #[test]
    fn deletable_branches_excludes_checked_out_branch() {
        let repo = init_repo();
        create_branch(repo.path(), "feature-a");
        create_branch(repo.path(), "feature-b");

        let git = Git::new(Some(repo.path().to_path_buf()));
        let branches = git.deletable_branches().unwrap();

        assert_eq!(branches, vec!["feature-a", "feature-b"]);
    }

    #[test]
    fn deletable_branches_fails_when_only_current_exists() {
        let repo = init_repo();
        let git = Git::new(Some(repo.path().to_path_buf()));

        let err = git.deletable_branches().unwrap_err();
        assert!(err.to_string().contains("no branches"));
    }

    #[test]
    fn deletable_branches_fails_outside_a_repository() {
        let dir = tempfile::tempdir().unwrap();
        let git = Git::new(Some(dir.path().to_path_buf()));

        assert!(git.deletable_branches().is_err());
    }

    #[test]
    fn safe_delete_removes_merged_branch() {
        let repo = init_repo();
        create_branch(repo.path(), "merged");

        let git = Git::new(Some(repo.path().to_path_buf()));
        git.delete_branch("merged").unwrap();

        assert!(git.deletable_branches().is_err());
    }

    #[test]
    fn safe_delete_refuses_unmerged_branch() {
        let repo = init_repo();
        create_unmerged_branch(repo.path(), "wip");

        let git = Git::new(Some(repo.path().to_path_buf()));
        assert!(git.delete_branch("wip").is_err());
        assert_eq!(git.deletable_branches().unwrap(), vec!["wip"]);
    }

    #[test]
    fn force_delete_removes_unmerged_branch() {
        let repo = init_repo();
        create_unmerged_branch(repo.path(), "wip");

        let git = Git::new(Some(repo.path().to_path_buf()));
        git.force_delete_branch("wip").unwrap();

        assert!(git.deletable_branches().is_err());
    }

    #[test]
    fn force_delete_of_missing_branch_fails() {
        let repo = init_repo();
        let git = Git::new(Some(repo.path().to_path_buf()));

        assert!(git.force_delete_branch("does-not-exist").is_err());
    }
}
