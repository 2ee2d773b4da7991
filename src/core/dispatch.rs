//! Turns a finished [`FlowState`] into one git invocation.
//!
//! Every guard the flow controller applies is checked again here, so callers
//! that fill a `FlowState` by hand (the direct subcommands) get the same
//! rules. Contradictions resolve to [`Resolution::NoOp`] with a message for
//! the user instead of an error.

use crate::core::{
    catalog::OperationId,
    flow::{BranchAction, BranchChoice, FlowState},
    validation::{validate_branch_name, validate_commit_message, validate_repo_url},
};
use std::fmt;

/// Stage everything when `add` gets no arguments
const ADD_EVERYTHING: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Clone { repo_url: String },
    Init,
    Status,
    Add { pathspecs: Vec<String> },
    Commit { message: String },
    Push,
    Pull,
    CreateBranch { name: String },
    CheckoutBranch { name: String },
    DeleteBranch { name: String },
}

impl Invocation {
    pub fn operation_id(&self) -> OperationId {
        match self {
            Invocation::Clone { .. } => OperationId::Clone,
            Invocation::Init => OperationId::Init,
            Invocation::Status => OperationId::Status,
            Invocation::Add { .. } => OperationId::Add,
            Invocation::Commit { .. } => OperationId::Commit,
            Invocation::Push => OperationId::Push,
            Invocation::Pull => OperationId::Pull,
            Invocation::CreateBranch { .. }
            | Invocation::CheckoutBranch { .. }
            | Invocation::DeleteBranch { .. } => OperationId::Branches,
        }
    }

    /// Arguments passed to `git`, without the program name
    pub fn git_args(&self) -> Vec<String> {
        let args: Vec<&str> = match self {
            Invocation::Clone { repo_url } => vec!["clone", "--", repo_url],
            Invocation::Init => vec!["init"],
            Invocation::Status => vec!["status", "--porcelain"],
            Invocation::Add { pathspecs } => {
                let mut args = vec!["add"];
                args.extend(pathspecs.iter().map(String::as_str));
                args
            }
            Invocation::Commit { message } => vec!["commit", "-m", message],
            Invocation::Push => vec!["-c", "push.autoSetupRemote=true", "push"],
            Invocation::Pull => vec!["pull"],
            Invocation::CreateBranch { name } => vec!["checkout", "-b", name],
            Invocation::CheckoutBranch { name } => vec!["checkout", name],
            Invocation::DeleteBranch { name } => vec!["branch", "-d", name],
        };
        args.into_iter().map(String::from).collect()
    }

    /// Message shown next to the spinner while git runs
    pub fn progress_message(&self) -> String {
        match self {
            Invocation::Clone { repo_url } => format!("Cloning repository from {repo_url}"),
            Invocation::Init => "Initializing repository".to_string(),
            Invocation::Status => "Fetching status".to_string(),
            Invocation::Add { .. } => "Adding changes".to_string(),
            Invocation::Commit { .. } => "Committing changes".to_string(),
            Invocation::Push => "Pushing to remote repository".to_string(),
            Invocation::Pull => "Pulling from remote repository".to_string(),
            Invocation::CreateBranch { name } => format!("Creating branch {name}"),
            Invocation::CheckoutBranch { name } => format!("Checking out branch {name}"),
            Invocation::DeleteBranch { name } => format!("Deleting branch {name}"),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.git_args().join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Invoke(Invocation),
    NoOp { reason: String },
}

impl Resolution {
    fn no_op(reason: impl Into<String>) -> Self {
        Resolution::NoOp {
            reason: reason.into(),
        }
    }
}

/// Map a completed flow to the git call it asks for
pub fn resolve(state: &FlowState) -> Resolution {
    if state.cancelled {
        return Resolution::no_op("Cancelled.");
    }

    let Some(operation) = state.selected_operation else {
        return Resolution::no_op("No operation selected.");
    };

    let resolution = match operation {
        OperationId::Clone => resolve_clone(state),
        OperationId::Init => Resolution::Invoke(Invocation::Init),
        OperationId::Status => Resolution::Invoke(Invocation::Status),
        OperationId::Add => Resolution::Invoke(Invocation::Add {
            pathspecs: split_add_arguments(state.add_arguments.as_deref().unwrap_or_default()),
        }),
        OperationId::Commit => resolve_commit(state),
        OperationId::Push => Resolution::Invoke(Invocation::Push),
        OperationId::Pull => Resolution::Invoke(Invocation::Pull),
        OperationId::Branches => resolve_branches(state),
    };

    log::debug!("Resolved {operation} to {resolution:?}");
    resolution
}

fn resolve_clone(state: &FlowState) -> Resolution {
    let url = state.repo_url.as_deref().unwrap_or_default().trim();
    match validate_repo_url(url) {
        Ok(()) => Resolution::Invoke(Invocation::Clone {
            repo_url: url.to_string(),
        }),
        Err(err) => Resolution::no_op(err.to_string()),
    }
}

fn resolve_commit(state: &FlowState) -> Resolution {
    let message = state.commit_message.as_deref().unwrap_or_default();
    match validate_commit_message(message) {
        Ok(()) => Resolution::Invoke(Invocation::Commit {
            message: message.to_string(),
        }),
        Err(err) => Resolution::no_op(err.to_string()),
    }
}

fn resolve_branches(state: &FlowState) -> Resolution {
    let name = match (&state.selected_branch, &state.new_branch_name) {
        // A catalog may open the branches flow directly at the name prompt
        (None, Some(name)) => return resolve_new_branch(name),
        (None, None) => return Resolution::no_op("No branch selected."),
        (Some(BranchChoice::CreateNew), name) => {
            return resolve_new_branch(name.as_deref().unwrap_or_default())
        }
        (Some(BranchChoice::Existing(name)), _) => name.clone(),
    };

    let is_current = state.is_selected_branch_current();
    match state.branch_action {
        None => Resolution::no_op("No branch action selected."),
        Some(BranchAction::Checkout) if is_current => {
            Resolution::no_op(format!("Already on '{name}'."))
        }
        Some(BranchAction::Checkout) => Resolution::Invoke(Invocation::CheckoutBranch { name }),
        Some(BranchAction::Delete) if is_current => Resolution::no_op(format!(
            "Cannot delete '{name}' because it is the current branch. Check out another branch first."
        )),
        Some(BranchAction::Delete) => match state.delete_confirmed {
            Some(true) => Resolution::Invoke(Invocation::DeleteBranch { name }),
            _ => Resolution::no_op(format!("Deletion of '{name}' was not confirmed.")),
        },
    }
}

fn resolve_new_branch(name: &str) -> Resolution {
    match validate_branch_name(name) {
        Ok(()) => Resolution::Invoke(Invocation::CreateBranch {
            name: name.to_string(),
        }),
        Err(err) => Resolution::no_op(err.to_string()),
    }
}

fn split_add_arguments(arguments: &str) -> Vec<String> {
    let pathspecs: Vec<String> = arguments.split_whitespace().map(String::from).collect();
    if pathspecs.is_empty() {
        vec![ADD_EVERYTHING.to_string()]
    } else {
        pathspecs
    }
}
