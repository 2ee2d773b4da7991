//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use igitt::core::error::Result;

/// Scenario: one file of each common state
///
/// - `staged.txt`: new file in the index
/// - `initial.txt`: committed, then modified in the work tree
/// - `untracked.txt`: never added
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "initial.txt", "changed content\n")?;
    create_file(&repo.path, "staged.txt", "staged\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "untracked.txt", "untracked\n")?;

    Ok(repo)
}

/// Scenario: committed history with branches `main` (current), `develop` and `old`
pub fn create_branching_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    git_branch(&repo.path, "develop")?;
    git_branch(&repo.path, "old")?;
    Ok(repo)
}
