//! `igitt interactive`: menu-driven session in the terminal.
//!
//! [`TerminalPrompter`] renders each step with `dialoguer`. Esc on a menu or
//! confirmation, and Ctrl-C anywhere, become [`Answer::Cancel`].

use crate::commands::operations::dispatch_resolution;
use crate::core::{
    catalog::{CommandCatalog, StepId},
    config::IgittConfig,
    error::Result,
    flow::{Answer, BranchAction, BranchChoice, FlowController, FlowState},
    git::{is_inside_repository, GitRepo},
    icons::{branch_icon, commit_icon, link_icon, next_step_icon, no_next_step_icon},
    print_error, print_info,
    session::{run_session, PromptContext, Prompter, SessionOutcome},
};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::env;
use std::io;

const CREATE_NEW_BRANCH_LABEL: &str = "Create new branch";

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        cancel_on_interrupt(
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(0)
                .interact_opt(),
        )
    }

    fn input(&self, prompt: &str, allow_empty: bool) -> Result<Option<String>> {
        cancel_on_interrupt(
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(allow_empty)
                .interact_text()
                .map(Some),
        )
    }

    fn confirm(&self, prompt: &str) -> Result<Option<bool>> {
        cancel_on_interrupt(
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(false)
                .interact_opt(),
        )
    }

    fn ask_operation(&self, context: &PromptContext<'_>) -> Result<Answer> {
        if context.operations.is_empty() {
            print_info("No operations available here.");
            return Ok(Answer::Cancel);
        }

        let items: Vec<String> = context
            .operations
            .iter()
            .map(|operation| {
                let marker = match operation.next_step {
                    Some(_) => next_step_icon(context.icon_type),
                    None => no_next_step_icon(context.icon_type),
                };
                format!(
                    "{} {:<10} {} {}",
                    operation.icon(context.icon_type),
                    operation.name,
                    marker,
                    operation.description.bright_black()
                )
            })
            .collect();

        Ok(match self.select("Select an operation", &items)? {
            Some(index) => Answer::Operation(context.operations[index].id),
            None => Answer::Cancel,
        })
    }

    fn ask_branch(&self, context: &PromptContext<'_>) -> Result<Answer> {
        let icon = branch_icon(context.icon_type);
        let mut items = vec![format!("+ {CREATE_NEW_BRANCH_LABEL}")];
        items.extend(context.branches.iter().map(|branch| {
            if context.current_branch.as_deref() == Some(branch.as_str()) {
                format!("{icon} {} {}", branch.green(), "(current)".bright_black())
            } else {
                format!("{icon} {branch}")
            }
        }));

        let title = context.step_title.as_deref().unwrap_or("Choose a branch");
        Ok(match self.select(title, &items)? {
            Some(0) => Answer::Branch(BranchChoice::CreateNew),
            Some(index) => match context.branches.get(index - 1) {
                Some(name) => Answer::Branch(BranchChoice::Existing(name.clone())),
                None => Answer::Cancel,
            },
            None => Answer::Cancel,
        })
    }

    fn ask_branch_action(&self) -> Result<Answer> {
        let items: Vec<String> = BranchAction::ALL
            .iter()
            .map(|action| action.label().to_string())
            .collect();

        Ok(match self.select("What do you want to do?", &items)? {
            Some(index) => Answer::BranchAction(BranchAction::ALL[index]),
            None => Answer::Cancel,
        })
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, step: StepId, context: &PromptContext<'_>) -> Result<Answer> {
        if let Some(message) = &context.last_error {
            print_error(message);
        }

        let title = context.step_title.as_deref();
        let answer = match step {
            StepId::SelectOperation => self.ask_operation(context)?,
            StepId::ChooseBranch => self.ask_branch(context)?,
            StepId::ChooseBranchAction => self.ask_branch_action()?,
            StepId::EnterNewBranchName => self
                .input("New branch name", false)?
                .map_or(Answer::Cancel, Answer::NewBranchName),
            StepId::ConfirmDelete => self
                .confirm("Delete this branch?")?
                .map_or(Answer::Cancel, Answer::DeleteConfirmation),
            StepId::EnterRepoUrl => {
                let prompt = format!(
                    "{}{}",
                    link_icon(context.icon_type),
                    title.unwrap_or("Repository URL")
                );
                self.input(&prompt, false)?
                    .map_or(Answer::Cancel, Answer::RepoUrl)
            }
            StepId::EnterCommitMessage => {
                let prompt = format!(
                    "{}{}",
                    commit_icon(context.icon_type),
                    title.unwrap_or("Commit message")
                );
                self.input(&prompt, false)?
                    .map_or(Answer::Cancel, Answer::CommitMessage)
            }
            StepId::EnterAddArguments => self
                .input(title.unwrap_or("Files to add"), true)?
                .map_or(Answer::Cancel, Answer::AddArguments),
        };

        Ok(answer)
    }
}

/// Map Ctrl-C to a cancelled prompt, keep every other failure
fn cancel_on_interrupt<T>(result: std::result::Result<Option<T>, dialoguer::Error>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn execute_interactive() -> Result<()> {
    let config = IgittConfig::load_or_create()?;
    let catalog = CommandCatalog::embedded()?;
    let current_dir = env::current_dir()?;
    let inside_repo = is_inside_repository(&current_dir);

    let (current_branch, branches) = if inside_repo {
        let git_repo = GitRepo::open(&current_dir)?;
        (git_repo.current_branch()?, git_repo.local_branches()?)
    } else {
        (None, Vec::new())
    };

    log::debug!(
        "Starting interactive session (inside repo: {inside_repo}, branch: {current_branch:?})"
    );

    let context = PromptContext {
        operations: catalog.visible_operations(config.show_all_commands, inside_repo),
        branches,
        current_branch: current_branch.clone(),
        icon_type: config.icon_type,
        ..PromptContext::default()
    };

    let controller = FlowController::new(&catalog);
    let mut prompter = TerminalPrompter::new();
    match run_session(
        &controller,
        &mut prompter,
        FlowState::new(current_branch),
        context,
    )? {
        SessionOutcome::Dispatch(resolution) => dispatch_resolution(resolution),
        SessionOutcome::Cancelled => {
            print_info("Cancelled.");
            Ok(())
        }
    }
}
