//! Repository facts read through `git2`.
//!
//! The interactive session needs three things from the repository before it
//! can show a menu: whether the working directory is inside one, the branch
//! that is checked out and the list of local branches. Everything that
//! changes the repository goes through the `git` executable instead (see
//! [`crate::core::executor`]).

use crate::core::error::{IgittError, Result};
use git2::{BranchType, ErrorCode, Repository};
use std::path::{Path, PathBuf};

const HEADS_PREFIX: &str = "refs/heads/";

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|err| match err.code() {
            ErrorCode::NotFound => IgittError::NotInGitRepo,
            _ => IgittError::GitRepo(err),
        })?;
        Ok(GitRepo { repo })
    }

    pub fn workdir(&self) -> Option<PathBuf> {
        self.repo.workdir().map(Path::to_path_buf)
    }

    /// Name of the checked-out branch
    ///
    /// Returns the branch HEAD points at even before the first commit, and
    /// `None` when HEAD is detached.
    pub fn current_branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(String::from)),
            Ok(_) => Ok(None),
            Err(err) if err.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix(HEADS_PREFIX))
                    .map(String::from))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Local branch names, sorted
    pub fn local_branches(&self) -> Result<Vec<String>> {
        let mut branches = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                branches.push(name.to_string());
            }
        }
        branches.sort();
        Ok(branches)
    }
}

/// Whether `path` is inside a git working tree
pub fn is_inside_repository<P: AsRef<Path>>(path: P) -> bool {
    Repository::discover(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn setup_test_repo() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path();
        git(path, &["init"]);
        git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(path, &["config", "user.name", "Test User"]);
        git(path, &["config", "user.email", "test@example.com"]);
        temp_dir
    }

    fn commit_file(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "content\n").unwrap();
        git(dir, &["add", name]);
        git(dir, &["commit", "-m", "add file"]);
    }

    #[test]
    fn test_open_non_git_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = GitRepo::open(temp_dir.path());
        assert!(matches!(result, Err(IgittError::NotInGitRepo)));
        assert!(!is_inside_repository(temp_dir.path()));
    }

    #[test]
    fn test_open_from_subdirectory() {
        let temp_dir = setup_test_repo();
        let nested = temp_dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        assert!(GitRepo::open(&nested).is_ok());
        assert!(is_inside_repository(&nested));
    }

    #[test]
    fn test_current_branch_before_first_commit() {
        let temp_dir = setup_test_repo();
        let repo = GitRepo::open(temp_dir.path()).unwrap();

        assert_eq!(repo.current_branch().unwrap().as_deref(), Some("main"));
        assert!(repo.local_branches().unwrap().is_empty());
    }

    #[test]
    fn test_local_branches_are_sorted() {
        let temp_dir = setup_test_repo();
        commit_file(temp_dir.path(), "a.txt");
        git(temp_dir.path(), &["branch", "zeta"]);
        git(temp_dir.path(), &["branch", "alpha"]);

        let repo = GitRepo::open(temp_dir.path()).unwrap();
        assert_eq!(
            repo.local_branches().unwrap(),
            vec!["alpha", "main", "zeta"]
        );
    }

    #[test]
    fn test_current_branch_follows_checkout() {
        let temp_dir = setup_test_repo();
        commit_file(temp_dir.path(), "a.txt");
        git(temp_dir.path(), &["checkout", "-b", "feature/x"]);

        let repo = GitRepo::open(temp_dir.path()).unwrap();
        assert_eq!(repo.current_branch().unwrap().as_deref(), Some("feature/x"));
    }

    #[test]
    fn test_detached_head_has_no_current_branch() {
        let temp_dir = setup_test_repo();
        commit_file(temp_dir.path(), "a.txt");
        git(temp_dir.path(), &["checkout", "--detach"]);

        let repo = GitRepo::open(temp_dir.path()).unwrap();
        assert_eq!(repo.current_branch().unwrap(), None);
    }
}
