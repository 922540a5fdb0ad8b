//! Helpers for tests that drive the real git CLI against throwaway
//! repositories in temporary directories.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// New repository with one commit, current branch renamed to `main`.
pub fn init_repo() -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    let path = dir.path();

    git(path, &["init"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    commit(path, "initial");
    git(path, &["branch", "-M", "main"]);

    dir
}

pub fn commit(dir: &Path, message: &str) {
    git(dir, &["commit", "--allow-empty", "-m", message]);
}

/// Branch at the current tip; safe delete will accept it.
pub fn create_branch(dir: &Path, name: &str) {
    git(dir, &["branch", name]);
}

/// Branch with a commit not reachable from `main`; safe delete will refuse it.
pub fn create_unmerged_branch(dir: &Path, name: &str) {
    git(dir, &["checkout", "-b", name]);
    commit(dir, &format!("work on {name}"));
    git(dir, &["checkout", "main"]);
}

pub fn branch_exists(dir: &Path, name: &str) -> bool {
    Command::new("git")
        .args(["rev-parse", "--verify", &format!("refs/heads/{name}")])
        .current_dir(dir)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
