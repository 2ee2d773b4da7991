//! Core functionality for igitt.
//!
//! This module provides the status classification engine, the command
//! catalog, the interactive flow state machine and the dispatch resolver,
//! plus the git, configuration and output plumbing around them.

pub mod catalog;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod flow;
pub mod git;
pub mod icons;
pub mod output;
pub mod session;
pub mod status_classifier;
pub mod status_table;
pub mod validation;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{IgittError, Result, ValidationError};

// === Status classification ===
// Porcelain status codes turned into a sorted, titled report
pub use status_classifier::{classify, ClassifiedEntry, ClassifiedReport, StatusEntry};
pub use status_table::{describe, Descriptor, Emphasis, StatusCategory, StatusDescriptor};

// === Interactive flow ===
// Catalog, state machine and the resolver that turns answers into git calls
pub use catalog::{CommandCatalog, Operation, OperationId, StepId};
pub use dispatch::{resolve, Invocation, Resolution};
pub use flow::{advance, Answer, BranchAction, BranchChoice, FlowController, FlowState, Transition};
pub use session::{run_session, PromptContext, Prompter, SessionOutcome};

// === Git operations ===
pub use git::{is_inside_repository, GitRepo};

// === Configuration ===
pub use config::IgittConfig;
pub use icons::IconType;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header, print_success};
