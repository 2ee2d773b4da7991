//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`IgittError`], the single error type returned by igitt
//! operations, and [`ValidationError`], the recoverable failures produced while
//! checking user input in the interactive flow.
//!
//! # Public API
//! - [`IgittError`]: Main error enum covering all failure modes
//! - [`ValidationError`]: Input rule violations reported back to the prompt
//! - [`Result<T>`]: Type alias for `std::result::Result<T, IgittError>`
//!
//! # Error Categories
//! - **Status parsing**: malformed porcelain lines are hard failures
//! - **Catalog data**: unknown follow-up steps fail at load time
//! - **Flow input**: validation errors never abort the session
//! - **Git invocation**: non-zero exits carry the captured output

use thiserror::Error;

/// Domain-specific error types for igitt
#[derive(Error, Debug)]
pub enum IgittError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    // Status classification
    #[error("Malformed status line {line_number}: '{line}' (expected '<code> <path>')")]
    MalformedStatusLine { line_number: usize, line: String },

    // Catalog and flow errors
    #[error("Operation '{operation}' declares unknown next step '{step}'")]
    IllegalTransition { operation: String, step: String },

    #[error("Operation '{operation}' is declared more than once")]
    DuplicateOperation { operation: String },

    #[error("Operation '{operation}' is not in the command catalog")]
    UnknownOperation { operation: String },

    #[error("Received an answer for '{received}' while waiting for '{expected}'")]
    UnexpectedAnswer { expected: String, received: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Git invocation
    #[error("git {command} failed: {output}")]
    GitCommandFailed { command: String, output: String },

    // Configuration
    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,
}

/// Rule violations for values typed into the interactive prompts.
///
/// These are recoverable: the prompt is shown again with the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Commit message cannot be empty")]
    EmptyCommitMessage,

    #[error("Repository URL cannot be empty")]
    EmptyRepoUrl,

    #[error("Branch name cannot be empty")]
    EmptyBranchName,

    #[error("Invalid branch name '{name}': {reason}")]
    InvalidBranchName { name: String, reason: String },
}

/// Convenience type alias for Results using IgittError
pub type Result<T> = std::result::Result<T, IgittError>;

impl IgittError {
    /// Create a malformed status line error
    pub fn malformed_status_line(line_number: usize, line: impl Into<String>) -> Self {
        Self::MalformedStatusLine {
            line_number,
            line: line.into(),
        }
    }

    /// Create an illegal transition error for a catalog entry
    pub fn illegal_transition(operation: impl Into<String>, step: impl Into<String>) -> Self {
        Self::IllegalTransition {
            operation: operation.into(),
            step: step.into(),
        }
    }

    /// Create a duplicate operation error
    pub fn duplicate_operation(operation: impl Into<String>) -> Self {
        Self::DuplicateOperation {
            operation: operation.into(),
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(operation: impl Into<String>) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
        }
    }

    /// Create an unexpected answer error
    pub fn unexpected_answer(expected: impl Into<String>, received: impl Into<String>) -> Self {
        Self::UnexpectedAnswer {
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Create a git command failed error
    pub fn git_command_failed(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            output: output.into(),
        }
    }

    /// Whether the session can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl ValidationError {
    /// Create an invalid branch name error
    pub fn invalid_branch_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBranchName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
