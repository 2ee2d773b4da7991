//! Direct subcommands (`igitt commit "msg"`, `igitt push`, ...).
//!
//! Each one fills a [`FlowState`] the way the interactive wizard would and
//! hands it to the same resolver, so argument rules are shared.

use crate::core::{
    catalog::{CommandCatalog, OperationId},
    dispatch::{resolve, Resolution},
    error::{IgittError, Result},
    executor::execute,
    flow::FlowState,
    git::is_inside_repository,
    print_info,
};
use std::env;

pub fn execute_clone(repo_url: String) -> Result<()> {
    run_operation(FlowState {
        repo_url: Some(repo_url),
        ..FlowState::for_operation(OperationId::Clone)
    })
}

pub fn execute_init() -> Result<()> {
    run_operation(FlowState::for_operation(OperationId::Init))
}

pub fn execute_add(pathspecs: Vec<String>) -> Result<()> {
    run_operation(FlowState {
        add_arguments: Some(pathspecs.join(" ")),
        ..FlowState::for_operation(OperationId::Add)
    })
}

pub fn execute_commit(message: String) -> Result<()> {
    run_operation(FlowState {
        commit_message: Some(message),
        ..FlowState::for_operation(OperationId::Commit)
    })
}

pub fn execute_push() -> Result<()> {
    run_operation(FlowState::for_operation(OperationId::Push))
}

pub fn execute_pull() -> Result<()> {
    run_operation(FlowState::for_operation(OperationId::Pull))
}

fn run_operation(state: FlowState) -> Result<()> {
    if let Some(id) = state.selected_operation {
        ensure_repository_for(id)?;
    }
    dispatch_resolution(resolve(&state))
}

/// Repository-bound operations fail early outside a working tree
pub(crate) fn ensure_repository_for(id: OperationId) -> Result<()> {
    let catalog = CommandCatalog::embedded()?;
    let requires_repo = catalog
        .get(id)
        .map(|operation| operation.inside_repo_only)
        .unwrap_or(false);

    if requires_repo && !is_inside_repository(env::current_dir()?) {
        return Err(IgittError::NotInGitRepo);
    }
    Ok(())
}

/// Run an invocation, or explain why nothing ran
pub fn dispatch_resolution(resolution: Resolution) -> Result<()> {
    match resolution {
        Resolution::Invoke(invocation) => {
            log::debug!("Dispatching {invocation}");
            execute(&invocation)
        }
        Resolution::NoOp { reason } => {
            log::debug!("Nothing to dispatch: {reason}");
            print_info(&reason);
            Ok(())
        }
    }
}
