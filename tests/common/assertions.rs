//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the clean-tree line
pub fn up_to_date() -> impl Predicate<str> {
    predicates::str::contains("Up to date.")
}

/// Creates a predicate that checks for the status report header
pub fn has_changes_header() -> impl Predicate<str> {
    predicates::str::contains("Files with changes:")
}

/// Creates a predicate that checks for a status title followed by a path
pub fn has_status_line(title: &str, path: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!(r"{}\s+{}", regex_escape(title), regex_escape(path)))
        .expect("valid status line pattern")
}

fn regex_escape(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            '(' | ')' | '.' | '[' | ']' | '?' | '*' | '+' | '&' | '\\' | '|' | '^' | '$' => {
                vec!['\\', c]
            }
            _ => vec![c],
        })
        .collect()
}
