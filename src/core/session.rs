//! The interactive session loop.
//!
//! [`run_session`] owns one [`FlowState`] for the whole session and drives it
//! with an explicit loop: ask the controller for the next step, ask the
//! [`Prompter`] for an answer, submit it. Validation failures are shown on
//! the same prompt again; every other error ends the session.

use crate::core::{
    catalog::{Operation, StepId},
    dispatch::{resolve, Resolution},
    error::Result,
    flow::{Answer, FlowController, FlowState, Transition},
    icons::IconType,
};

/// What a prompter needs to render any step
#[derive(Debug, Clone, Default)]
pub struct PromptContext<'a> {
    /// Operations offered at `select-operation`
    pub operations: Vec<&'a Operation>,
    /// Local branches offered at `choose-branch`
    pub branches: Vec<String>,
    pub current_branch: Option<String>,
    pub icon_type: IconType,
    /// Catalog title for the selected operation's follow-up prompt
    pub step_title: Option<String>,
    /// Validation message from the previous answer to this step
    pub last_error: Option<String>,
}

/// Source of answers, implemented by the terminal UI and by test scripts
pub trait Prompter {
    fn ask(&mut self, step: StepId, context: &PromptContext<'_>) -> Result<Answer>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Dispatch(Resolution),
    Cancelled,
}

pub fn run_session<P: Prompter + ?Sized>(
    controller: &FlowController<'_>,
    prompter: &mut P,
    mut state: FlowState,
    mut context: PromptContext<'_>,
) -> Result<SessionOutcome> {
    loop {
        let step = match controller.advance(&state)? {
            Transition::Cancelled => {
                log::debug!("Session cancelled");
                return Ok(SessionOutcome::Cancelled);
            }
            Transition::Done => {
                log::debug!("Session complete");
                return Ok(SessionOutcome::Dispatch(resolve(&state)));
            }
            Transition::Prompt(step) => step,
        };

        context.step_title = state
            .selected_operation
            .and_then(|id| controller.catalog().get(id))
            .filter(|operation| operation.next_step == Some(step))
            .and_then(|operation| operation.next_step_title.clone());

        log::debug!("Prompting for {step}");
        let answer = prompter.ask(step, &context)?;

        match controller.submit(&mut state, answer) {
            Ok(()) => context.last_error = None,
            Err(err) if err.is_recoverable() => {
                log::debug!("Rejected answer for {step}: {err}");
                context.last_error = Some(err.to_string());
            }
            Err(err) => return Err(err),
        }
    }
}
