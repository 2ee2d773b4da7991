//! In-memory catalog of the operations offered in interactive mode.
//!
//! The catalog is shipped as JSON inside the binary and validated once at
//! load: every operation id must be known, ids must be unique and every
//! declared follow-up step must be an entry point its operation can use.
//! A bad `nextStep` is reported as [`IgittError::IllegalTransition`] here so
//! that the flow controller never meets an unknown step later on.
//!
//! # Public API
//! - [`OperationId`]: Tagged identifier of each operation
//! - [`StepId`]: Closed set of wizard steps
//! - [`Operation`]: One validated catalog record
//! - [`CommandCatalog`]: Lookup and visibility filtering

use crate::core::{
    error::{IgittError, Result},
    icons::{IconSet, IconType},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const EMBEDDED_CATALOG: &str = include_str!("commands.json");

/// Marker used in catalog data for "no follow-up step"
const NO_STEP: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationId {
    #[serde(rename = "op-clone")]
    Clone,
    #[serde(rename = "op-init")]
    Init,
    #[serde(rename = "op-status")]
    Status,
    #[serde(rename = "op-add")]
    Add,
    #[serde(rename = "op-commit")]
    Commit,
    #[serde(rename = "op-push")]
    Push,
    #[serde(rename = "op-pull")]
    Pull,
    #[serde(rename = "op-branches")]
    Branches,
}

impl OperationId {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationId::Clone => "op-clone",
            OperationId::Init => "op-init",
            OperationId::Status => "op-status",
            OperationId::Add => "op-add",
            OperationId::Commit => "op-commit",
            OperationId::Push => "op-push",
            OperationId::Pull => "op-pull",
            OperationId::Branches => "op-branches",
        }
    }

    /// Whether the resolver can act on the answer collected by `step`
    ///
    /// Init, status, push and pull take no input, so any follow-up step is
    /// illegal for them.
    pub fn accepts_step(&self, step: StepId) -> bool {
        match self {
            OperationId::Clone => step == StepId::EnterRepoUrl,
            OperationId::Add => step == StepId::EnterAddArguments,
            OperationId::Commit => step == StepId::EnterCommitMessage,
            OperationId::Branches => {
                matches!(step, StepId::ChooseBranch | StepId::EnterNewBranchName)
            }
            OperationId::Init | OperationId::Status | OperationId::Push | OperationId::Pull => {
                false
            }
        }
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every prompt the interactive flow can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    SelectOperation,
    ChooseBranch,
    EnterNewBranchName,
    ChooseBranchAction,
    ConfirmDelete,
    EnterRepoUrl,
    EnterCommitMessage,
    EnterAddArguments,
}

impl StepId {
    pub const ALL: [StepId; 8] = [
        StepId::SelectOperation,
        StepId::ChooseBranch,
        StepId::EnterNewBranchName,
        StepId::ChooseBranchAction,
        StepId::ConfirmDelete,
        StepId::EnterRepoUrl,
        StepId::EnterCommitMessage,
        StepId::EnterAddArguments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::SelectOperation => "select-operation",
            StepId::ChooseBranch => "choose-branch",
            StepId::EnterNewBranchName => "enter-new-branch-name",
            StepId::ChooseBranchAction => "choose-branch-action",
            StepId::ConfirmDelete => "confirm-delete",
            StepId::EnterRepoUrl => "enter-repo-url",
            StepId::EnterCommitMessage => "enter-commit-message",
            StepId::EnterAddArguments => "enter-add-arguments",
        }
    }

    pub fn from_id(id: &str) -> Option<StepId> {
        Self::ALL.into_iter().find(|step| step.as_str() == id)
    }

    /// Steps an operation may declare as its `nextStep`
    ///
    /// The branch action and delete confirmation are only reachable from
    /// inside the `choose-branch` sub-flow.
    pub fn is_entry_step(&self) -> bool {
        matches!(
            self,
            StepId::ChooseBranch
                | StepId::EnterNewBranchName
                | StepId::EnterRepoUrl
                | StepId::EnterCommitMessage
                | StepId::EnterAddArguments
        )
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog record as stored in JSON, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperation {
    id: OperationId,
    icons: IconSet,
    name: String,
    shortcut: String,
    description: String,
    #[serde(default)]
    next_step: Option<String>,
    #[serde(default)]
    next_step_title: Option<String>,
    #[serde(default)]
    inside_repo_only: bool,
    #[serde(default)]
    outside_repo_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub id: OperationId,
    pub icons: IconSet,
    pub name: String,
    pub shortcut: String,
    pub description: String,
    pub next_step: Option<StepId>,
    pub next_step_title: Option<String>,
    pub inside_repo_only: bool,
    pub outside_repo_only: bool,
}

impl Operation {
    fn from_raw(raw: RawOperation) -> Result<Self> {
        let next_step = match raw.next_step.as_deref().map(str::trim) {
            None | Some("") | Some(NO_STEP) => None,
            Some(step_id) => {
                let step = StepId::from_id(step_id)
                    .filter(|step| step.is_entry_step() && raw.id.accepts_step(*step))
                    .ok_or_else(|| IgittError::illegal_transition(raw.id.as_str(), step_id))?;
                Some(step)
            }
        };

        Ok(Self {
            id: raw.id,
            icons: raw.icons,
            name: raw.name,
            shortcut: raw.shortcut,
            description: raw.description,
            next_step,
            next_step_title: raw.next_step_title,
            inside_repo_only: raw.inside_repo_only,
            outside_repo_only: raw.outside_repo_only,
        })
    }

    pub fn icon(&self, variant: IconType) -> &str {
        self.icons.get(variant)
    }

    pub fn is_visible(&self, inside_repo: bool) -> bool {
        !((self.inside_repo_only && !inside_repo) || (self.outside_repo_only && inside_repo))
    }
}

/// Validated, immutable list of operations
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    operations: Vec<Operation>,
}

impl CommandCatalog {
    /// Load the catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawOperation> = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        let mut operations = Vec::with_capacity(raw.len());

        for record in raw {
            if !seen.insert(record.id) {
                return Err(IgittError::duplicate_operation(record.id.as_str()));
            }
            operations.push(Operation::from_raw(record)?);
        }

        log::debug!("Loaded command catalog with {} operations", operations.len());
        Ok(Self { operations })
    }

    pub fn get(&self, id: OperationId) -> Option<&Operation> {
        self.operations.iter().find(|op| op.id == id)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Operations to offer in the menu
    ///
    /// Repository-bound operations are hidden unless `show_all` is set.
    pub fn visible_operations(&self, show_all: bool, inside_repo: bool) -> Vec<&Operation> {
        self.operations
            .iter()
            .filter(|op| show_all || op.is_visible(inside_repo))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation_json(id: &str, next_step: &str) -> String {
        format!(
            r#"[{{
                "id": "{id}",
                "icons": {{ "unicode": "u", "emoji": "e", "nerdfont": "n", "ascii": "a" }},
                "name": "Test",
                "shortcut": "t",
                "description": "test operation",
                "nextStep": "{next_step}"
            }}]"#
        )
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = CommandCatalog::embedded().unwrap();
        assert_eq!(catalog.operations().len(), 8);

        let commit = catalog.get(OperationId::Commit).unwrap();
        assert_eq!(commit.next_step, Some(StepId::EnterCommitMessage));

        let branches = catalog.get(OperationId::Branches).unwrap();
        assert_eq!(branches.next_step, Some(StepId::ChooseBranch));

        let push = catalog.get(OperationId::Push).unwrap();
        assert_eq!(push.next_step, None);
    }

    #[test]
    fn test_step_ids_round_trip_through_names() {
        for step in StepId::ALL {
            assert_eq!(StepId::from_id(step.as_str()), Some(step));
        }
        assert_eq!(StepId::from_id("rename-branch"), None);
    }

    #[test]
    fn test_none_marker_means_no_next_step() {
        let catalog = CommandCatalog::from_json(&operation_json("op-push", "none")).unwrap();
        assert_eq!(catalog.get(OperationId::Push).unwrap().next_step, None);
    }

    #[test]
    fn test_missing_next_step_means_none() {
        let json = r#"[{
            "id": "op-pull",
            "icons": { "unicode": "u", "emoji": "e", "nerdfont": "n", "ascii": "a" },
            "name": "Pull",
            "shortcut": "pull",
            "description": "pull"
        }]"#;
        let catalog = CommandCatalog::from_json(json).unwrap();
        assert_eq!(catalog.get(OperationId::Pull).unwrap().next_step, None);
    }

    #[test]
    fn test_unknown_next_step_fails_at_load() {
        let result = CommandCatalog::from_json(&operation_json("op-branches", "rename-branch"));
        match result {
            Err(IgittError::IllegalTransition { operation, step }) => {
                assert_eq!(operation, "op-branches");
                assert_eq!(step, "rename-branch");
            }
            other => panic!("Expected IllegalTransition, got: {other:?}"),
        }
    }

    #[test]
    fn test_inner_step_is_not_an_entry_point() {
        let result = CommandCatalog::from_json(&operation_json("op-branches", "confirm-delete"));
        assert!(matches!(result, Err(IgittError::IllegalTransition { .. })));
    }

    #[test]
    fn test_step_must_match_operation() {
        for (id, step) in [
            ("op-commit", "enter-repo-url"),
            ("op-clone", "enter-commit-message"),
            ("op-add", "choose-branch"),
            ("op-push", "enter-commit-message"),
        ] {
            match CommandCatalog::from_json(&operation_json(id, step)) {
                Err(IgittError::IllegalTransition { operation, step: got }) => {
                    assert_eq!(operation, id);
                    assert_eq!(got, step);
                }
                other => panic!("Expected IllegalTransition for {id} + {step}, got: {other:?}"),
            }
        }
    }

    #[test]
    fn test_branches_may_start_at_new_branch_name() {
        let catalog =
            CommandCatalog::from_json(&operation_json("op-branches", "enter-new-branch-name"))
                .unwrap();
        assert_eq!(
            catalog.get(OperationId::Branches).unwrap().next_step,
            Some(StepId::EnterNewBranchName)
        );
    }

    #[test]
    fn test_embedded_steps_are_accepted_by_their_operations() {
        let catalog = CommandCatalog::embedded().unwrap();
        for operation in catalog.operations() {
            if let Some(step) = operation.next_step {
                assert!(operation.id.accepts_step(step), "{}", operation.id);
            }
        }
    }

    #[test]
    fn test_duplicate_operation_fails() {
        let one = operation_json("op-init", "none");
        let json = format!("[{},{}]", &one[1..one.len() - 1], &one[1..one.len() - 1]);
        let result = CommandCatalog::from_json(&json);
        assert!(matches!(result, Err(IgittError::DuplicateOperation { .. })));
    }

    #[test]
    fn test_unknown_operation_id_fails() {
        let result = CommandCatalog::from_json(&operation_json("op-rebase", "none"));
        assert!(matches!(result, Err(IgittError::Json(_))));
    }

    #[test]
    fn test_visibility_filter_inside_repo() {
        let catalog = CommandCatalog::embedded().unwrap();
        let ids: Vec<OperationId> = catalog
            .visible_operations(false, true)
            .iter()
            .map(|op| op.id)
            .collect();
        assert!(ids.contains(&OperationId::Commit));
        assert!(ids.contains(&OperationId::Branches));
        assert!(!ids.contains(&OperationId::Clone));
        assert!(!ids.contains(&OperationId::Init));
    }

    #[test]
    fn test_visibility_filter_outside_repo() {
        let catalog = CommandCatalog::embedded().unwrap();
        let ids: Vec<OperationId> = catalog
            .visible_operations(false, false)
            .iter()
            .map(|op| op.id)
            .collect();
        assert_eq!(ids, vec![OperationId::Clone, OperationId::Init]);
    }

    #[test]
    fn test_show_all_ignores_repo_flags() {
        let catalog = CommandCatalog::embedded().unwrap();
        assert_eq!(catalog.visible_operations(true, false).len(), 8);
        assert_eq!(catalog.visible_operations(true, true).len(), 8);
    }
}
