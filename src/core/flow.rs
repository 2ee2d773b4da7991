//! Interactive flow controller.
//!
//! The controller is a small state machine over the closed set of
//! [`StepId`]s. It never owns the session state: the caller holds a
//! [`FlowState`] and passes it in, [`FlowController::advance`] reads it to
//! decide which prompt comes next, and [`FlowController::submit`] validates an
//! answer and records it.
//!
//! # Transitions
//! - nothing selected → `select-operation`
//! - operation without a follow-up step → done
//! - `choose-branch` → `enter-new-branch-name` (create new) or
//!   `choose-branch-action` (existing branch)
//! - `choose-branch-action` → done (check out, or delete of the current
//!   branch, which dispatch rejects) or `confirm-delete`
//! - `confirm-delete` → done (confirmed) or cancelled (declined)
//! - single-field prompts → done once answered
//!
//! `advance` depends only on the state and the catalog, so calling it twice
//! with the same inputs gives the same transition.

use crate::core::{
    catalog::{CommandCatalog, OperationId, StepId},
    error::{IgittError, Result},
    validation::{validate_branch_name, validate_commit_message, validate_repo_url},
};
use std::fmt;

/// Answer to the `choose-branch` prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchChoice {
    /// The synthetic "create new branch" entry
    CreateNew,
    Existing(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchAction {
    Checkout,
    Delete,
}

impl BranchAction {
    pub const ALL: [BranchAction; 2] = [BranchAction::Checkout, BranchAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            BranchAction::Checkout => "Check out",
            BranchAction::Delete => "Delete",
        }
    }
}

/// Values collected during one interactive session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowState {
    pub selected_operation: Option<OperationId>,
    pub repo_url: Option<String>,
    pub add_arguments: Option<String>,
    pub commit_message: Option<String>,
    pub selected_branch: Option<BranchChoice>,
    pub branch_action: Option<BranchAction>,
    pub new_branch_name: Option<String>,
    pub delete_confirmed: Option<bool>,
    /// Branch checked out when the session started
    pub current_branch: Option<String>,
    pub cancelled: bool,
}

impl FlowState {
    pub fn new(current_branch: Option<String>) -> Self {
        Self {
            current_branch,
            ..Self::default()
        }
    }

    /// State for a single operation, as used by the direct subcommands
    pub fn for_operation(operation: OperationId) -> Self {
        Self {
            selected_operation: Some(operation),
            ..Self::default()
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn selected_branch_name(&self) -> Option<&str> {
        match &self.selected_branch {
            Some(BranchChoice::Existing(name)) => Some(name),
            _ => None,
        }
    }

    pub fn is_selected_branch_current(&self) -> bool {
        match (self.selected_branch_name(), self.current_branch.as_deref()) {
            (Some(selected), Some(current)) => selected == current,
            _ => false,
        }
    }
}

/// What the session should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Prompt(StepId),
    Done,
    Cancelled,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Prompt(step) => write!(f, "{step}"),
            Transition::Done => f.write_str("done"),
            Transition::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// A user's answer to one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Operation(OperationId),
    RepoUrl(String),
    AddArguments(String),
    CommitMessage(String),
    Branch(BranchChoice),
    BranchAction(BranchAction),
    NewBranchName(String),
    DeleteConfirmation(bool),
    /// Abort signal from the form layer, valid at any prompt
    Cancel,
}

impl Answer {
    /// The prompt this answer belongs to; `None` for [`Answer::Cancel`]
    pub fn step(&self) -> Option<StepId> {
        match self {
            Answer::Operation(_) => Some(StepId::SelectOperation),
            Answer::RepoUrl(_) => Some(StepId::EnterRepoUrl),
            Answer::AddArguments(_) => Some(StepId::EnterAddArguments),
            Answer::CommitMessage(_) => Some(StepId::EnterCommitMessage),
            Answer::Branch(_) => Some(StepId::ChooseBranch),
            Answer::BranchAction(_) => Some(StepId::ChooseBranchAction),
            Answer::NewBranchName(_) => Some(StepId::EnterNewBranchName),
            Answer::DeleteConfirmation(_) => Some(StepId::ConfirmDelete),
            Answer::Cancel => None,
        }
    }
}

pub struct FlowController<'a> {
    catalog: &'a CommandCatalog,
}

impl<'a> FlowController<'a> {
    pub fn new(catalog: &'a CommandCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a CommandCatalog {
        self.catalog
    }

    /// Compute the next prompt for `state`
    ///
    /// # Errors
    /// * `UnknownOperation` - The selected operation is not in the catalog
    pub fn advance(&self, state: &FlowState) -> Result<Transition> {
        if state.cancelled {
            return Ok(Transition::Cancelled);
        }

        let Some(operation_id) = state.selected_operation else {
            return Ok(Transition::Prompt(StepId::SelectOperation));
        };

        let operation = self
            .catalog
            .get(operation_id)
            .ok_or_else(|| IgittError::unknown_operation(operation_id.as_str()))?;

        let Some(mut step) = operation.next_step else {
            return Ok(Transition::Done);
        };

        loop {
            step = match step {
                StepId::SelectOperation => {
                    return Err(IgittError::illegal_transition(
                        operation_id.as_str(),
                        step.as_str(),
                    ));
                }
                StepId::EnterRepoUrl => return Ok(prompt_until_answered(&state.repo_url, step)),
                StepId::EnterCommitMessage => {
                    return Ok(prompt_until_answered(&state.commit_message, step));
                }
                StepId::EnterAddArguments => {
                    return Ok(prompt_until_answered(&state.add_arguments, step));
                }
                StepId::EnterNewBranchName => {
                    return Ok(prompt_until_answered(&state.new_branch_name, step));
                }
                StepId::ChooseBranch => match &state.selected_branch {
                    None => return Ok(Transition::Prompt(step)),
                    Some(BranchChoice::CreateNew) => StepId::EnterNewBranchName,
                    Some(BranchChoice::Existing(_)) => StepId::ChooseBranchAction,
                },
                StepId::ChooseBranchAction => match state.branch_action {
                    None => return Ok(Transition::Prompt(step)),
                    Some(BranchAction::Checkout) => return Ok(Transition::Done),
                    // Dispatch reports why the current branch cannot be deleted
                    Some(BranchAction::Delete) if state.is_selected_branch_current() => {
                        return Ok(Transition::Done);
                    }
                    Some(BranchAction::Delete) => StepId::ConfirmDelete,
                },
                StepId::ConfirmDelete => {
                    return Ok(match state.delete_confirmed {
                        None => Transition::Prompt(step),
                        Some(true) => Transition::Done,
                        Some(false) => Transition::Cancelled,
                    });
                }
            };
        }
    }

    /// Validate `answer` and record it in `state`
    ///
    /// On a validation failure the state is left untouched so the same prompt
    /// can be shown again.
    ///
    /// # Errors
    /// * `Validation` - The value breaks an input rule (recoverable)
    /// * `UnexpectedAnswer` - The answer is for a prompt that is not current
    /// * `UnknownOperation` - The chosen operation is not in the catalog
    pub fn submit(&self, state: &mut FlowState, answer: Answer) -> Result<()> {
        let Some(received) = answer.step() else {
            log::debug!("Flow cancelled by user");
            state.cancel();
            return Ok(());
        };

        let transition = self.advance(state)?;
        if transition != Transition::Prompt(received) {
            return Err(IgittError::unexpected_answer(
                transition.to_string(),
                received.as_str(),
            ));
        }

        log::debug!("Recording answer for {received}");
        match answer {
            Answer::Operation(id) => {
                if self.catalog.get(id).is_none() {
                    return Err(IgittError::unknown_operation(id.as_str()));
                }
                state.selected_operation = Some(id);
            }
            Answer::RepoUrl(url) => {
                validate_repo_url(&url)?;
                state.repo_url = Some(url);
            }
            Answer::AddArguments(arguments) => state.add_arguments = Some(arguments),
            Answer::CommitMessage(message) => {
                validate_commit_message(&message)?;
                state.commit_message = Some(message);
            }
            Answer::Branch(choice) => state.selected_branch = Some(choice),
            Answer::BranchAction(action) => state.branch_action = Some(action),
            Answer::NewBranchName(name) => {
                validate_branch_name(&name)?;
                state.new_branch_name = Some(name);
            }
            Answer::DeleteConfirmation(confirmed) => state.delete_confirmed = Some(confirmed),
            Answer::Cancel => state.cancel(),
        }

        Ok(())
    }
}

fn prompt_until_answered<T>(value: &Option<T>, step: StepId) -> Transition {
    match value {
        Some(_) => Transition::Done,
        None => Transition::Prompt(step),
    }
}

/// Free-function form of [`FlowController::advance`]
pub fn advance(state: &FlowState, catalog: &CommandCatalog) -> Result<Transition> {
    FlowController::new(catalog).advance(state)
}
