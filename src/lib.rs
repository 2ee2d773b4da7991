//! igitt - an interactive front-end for everyday git operations.
//!
//! This library provides the core functionality for igitt: classifying
//! porcelain status output, the command catalog, the interactive flow state
//! machine and the resolver that maps a finished flow to a git invocation.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Status classification
//! - The flow controller and session loop
//! - Dispatch of invocations to git
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Flow
    advance,
    // Status classification
    classify,
    resolve,
    run_session,
    Answer,
    ClassifiedReport,
    CommandCatalog,
    FlowController,
    FlowState,
    // Git operations
    GitRepo,
    // Error handling
    IgittError,
    Invocation,
    OperationId,
    Prompter,
    Resolution,
    Result,
    StepId,
    Transition,
};
