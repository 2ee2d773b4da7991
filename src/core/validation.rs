//! Input rules for the values typed into interactive prompts.
//!
//! The same checks run twice: once when an answer is submitted to the flow
//! controller and again when the dispatch resolver builds an invocation.

use crate::core::error::ValidationError;

/// Characters git refuses anywhere in a branch name
const FORBIDDEN_BRANCH_CHARS: [char; 10] = [' ', '~', '^', ':', '?', '*', '[', ']', '\\', '\t'];

/// Sequences git refuses anywhere in a branch name
const FORBIDDEN_BRANCH_SEQUENCES: [&str; 3] = ["//", "@{", ".."];

pub fn validate_commit_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        return Err(ValidationError::EmptyCommitMessage);
    }
    Ok(())
}

pub fn validate_repo_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::EmptyRepoUrl);
    }
    Ok(())
}

pub fn validate_branch_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyBranchName);
    }

    if name == "@" {
        return Err(ValidationError::invalid_branch_name(
            name,
            "'@' alone is not a valid name",
        ));
    }

    if name.starts_with('-') {
        return Err(ValidationError::invalid_branch_name(name, "starts with '-'"));
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_BRANCH_CHARS.contains(c)) {
        let shown = match c {
            ' ' => "a space".to_string(),
            '\t' => "a tab".to_string(),
            other => format!("'{other}'"),
        };
        return Err(ValidationError::invalid_branch_name(
            name,
            format!("contains {shown}"),
        ));
    }

    if let Some(sequence) = FORBIDDEN_BRANCH_SEQUENCES
        .iter()
        .find(|sequence| name.contains(*sequence))
    {
        return Err(ValidationError::invalid_branch_name(
            name,
            format!("contains '{sequence}'"),
        ));
    }

    Ok(())
}
