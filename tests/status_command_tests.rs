use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

mod common;
use common::{assertions, fixtures::*, repository::*};

fn igitt() -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("igitt")?;
    cmd.env("NO_COLOR", "1");
    Ok(cmd)
}

#[cfg(test)]
mod status_command_tests {
    use super::*;

    #[test]
    fn test_status_clean_repo_is_up_to_date() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        igitt()?
            .arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(assertions::up_to_date())
            .stdout(assertions::has_changes_header().not());

        Ok(())
    }

    #[test]
    fn test_status_shows_untracked_file() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_file(&repo.path, "newfile.txt", "new content")?;

        igitt()?
            .arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(assertions::has_changes_header())
            .stdout(assertions::has_status_line("Untracked", "newfile.txt"));

        Ok(())
    }

    #[test]
    fn test_status_shows_modified_file() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        create_file(&repo.path, "initial.txt", "modified content")?;

        igitt()?
            .arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(assertions::has_status_line(
                "Modified (unstaged)",
                "initial.txt",
            ));

        Ok(())
    }

    #[test]
    fn test_status_sorts_by_title() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        let output = igitt()?
            .arg("s")
            .current_dir(&repo.path)
            .output()?;
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout)?;
        let modified = stdout.find("Modified (unstaged)").unwrap();
        let staged = stdout.find("New (staged)").unwrap();
        let untracked = stdout.find("Untracked").unwrap();
        assert!(modified < staged);
        assert!(staged < untracked);

        Ok(())
    }

    #[test]
    fn test_status_aligns_paths() -> anyhow::Result<()> {
        let repo = create_mixed_status_repo()?;

        let output = igitt()?.arg("status").current_dir(&repo.path).output()?;
        let stdout = String::from_utf8(output.stdout)?;

        let columns: Vec<usize> = ["initial.txt", "staged.txt", "untracked.txt"]
            .iter()
            .map(|path| {
                let line = stdout.lines().find(|line| line.ends_with(path)).unwrap();
                line.len() - path.len()
            })
            .collect();
        assert!(columns.windows(2).all(|pair| pair[0] == pair[1]));
        // Longest title "Modified (unstaged)" plus a four-column gap
        assert_eq!(columns[0], "Modified (unstaged)".len() + 4);

        Ok(())
    }

    #[test]
    fn test_status_outside_repository_fails() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;

        igitt()?
            .arg("status")
            .current_dir(temp_dir.path())
            .assert()
            .failure()
            .stdout(assertions::not_in_git_repo());

        Ok(())
    }

    #[test]
    fn test_status_from_subdirectory() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_file(&repo.path, "top.txt", "top")?;
        let nested = repo.path.join("nested");
        std::fs::create_dir(&nested)?;

        igitt()?
            .arg("status")
            .current_dir(&nested)
            .assert()
            .success()
            .stdout(predicate::str::contains("top.txt"));

        Ok(())
    }
}
