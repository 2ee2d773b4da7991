//! Runs resolved invocations through the `git` executable.
//!
//! Calls are blocking and sequential. Output is captured so a failing call
//! can be reported through [`IgittError::GitCommandFailed`].

use crate::core::{
    dispatch::Invocation,
    error::{IgittError, Result},
    output::{create_spinner, print_status_report, print_success},
    status_classifier::{classify, ClassifiedReport},
};
use std::path::Path;
use std::process::Command;

/// Run `git <args>` in `dir`, returning stdout
///
/// # Errors
/// * `Io` - git could not be started
/// * `GitCommandFailed` - git exited with a non-zero status
pub fn run_git(args: &[String], dir: &Path) -> Result<String> {
    log::debug!("Running git {} in {}", args.join(" "), dir.display());

    let output = Command::new("git").args(args).current_dir(dir).output()?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        log::debug!("git {} exited with {}", args.join(" "), output.status);
        return Err(IgittError::git_command_failed(args.join(" "), message));
    }

    Ok(stdout)
}

/// Classified `git status --porcelain` for the repository at `dir`
pub fn fetch_status(dir: &Path) -> Result<ClassifiedReport> {
    let raw = run_git(&Invocation::Status.git_args(), dir)?;
    classify(&raw)
}

/// Execute `invocation` in the current directory
pub fn execute(invocation: &Invocation) -> Result<()> {
    let dir = std::env::current_dir()?;
    execute_in(invocation, &dir)
}

pub fn execute_in(invocation: &Invocation, dir: &Path) -> Result<()> {
    if let Invocation::Status = invocation {
        let report = fetch_status(dir)?;
        print_status_report(&report);
        return Ok(());
    }

    let spinner = create_spinner(&invocation.progress_message());
    let result = run_git(&invocation.git_args(), dir);
    spinner.finish_and_clear();

    let output = result?;
    print_success(&completion_message(invocation));
    if !output.trim().is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}

fn completion_message(invocation: &Invocation) -> String {
    match invocation {
        Invocation::Clone { repo_url } => format!("Cloned {repo_url}"),
        Invocation::Init => "Initialized repository".to_string(),
        Invocation::Status => "Status fetched".to_string(),
        Invocation::Add { .. } => "Changes added".to_string(),
        Invocation::Commit { .. } => "Changes committed".to_string(),
        Invocation::Push => "Pushed to remote repository".to_string(),
        Invocation::Pull => "Pulled from remote repository".to_string(),
        Invocation::CreateBranch { name } => format!("Created and checked out branch {name}"),
        Invocation::CheckoutBranch { name } => format!("Checked out branch {name}"),
        Invocation::DeleteBranch { name } => format!("Deleted branch {name}"),
    }
}
