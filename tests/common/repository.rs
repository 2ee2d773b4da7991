//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories in known states.

#![allow(dead_code)]

use igitt::core::error::{IgittError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        return Err(IgittError::git_command_failed(
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Sets up a fresh git repository for testing
///
/// HEAD points at `main` regardless of the machine's `init.defaultBranch`,
/// and user config is set so commits never prompt.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

pub fn git_branch(repo_path: &Path, name: &str) -> Result<()> {
    git(repo_path, &["branch", name])?;
    Ok(())
}

/// Subject lines of every commit on HEAD, newest first
pub fn commit_subjects(repo_path: &Path) -> Result<Vec<String>> {
    let log = git(repo_path, &["log", "--format=%s"])?;
    Ok(log.lines().map(String::from).collect())
}

/// Porcelain status lines of the repository
pub fn porcelain_status(repo_path: &Path) -> Result<Vec<String>> {
    let status = git(repo_path, &["status", "--porcelain"])?;
    Ok(status.lines().map(String::from).collect())
}

/// Creates a GitRepo from a TestRepo for use with git2-based operations
pub fn create_git_repo(test_repo: &TestRepo) -> Result<igitt::core::git::GitRepo> {
    igitt::core::git::GitRepo::open(&test_repo.path)
}
