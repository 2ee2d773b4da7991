//! Static table of porcelain status codes.
//!
//! Every two-character code that `git status --porcelain` can emit maps to a
//! [`StatusDescriptor`] carrying a category, a human-readable title and an
//! emphasis hint used for colouring. Codes that are not in the table are
//! represented by [`Descriptor::Unknown`] so that newer git versions never
//! cause a lookup to fail.
//!
//! # Public API
//! - [`StatusCategory`]: Broad grouping of a code (staged, unstaged, ...)
//! - [`Emphasis`]: Semantic colour tag for a code
//! - [`StatusDescriptor`]: One row of the table
//! - [`Descriptor`]: Known row or unknown raw code
//! - [`lookup`] / [`describe`]: Exact-match lookups
//!
//! See <https://git-scm.com/docs/git-status#_short_format>.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad grouping of a porcelain status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Change recorded in the index only
    Staged,
    /// Change in the work tree only
    Unstaged,
    /// Staged change with a further work tree change
    Combined,
    /// Merge conflict
    Unmerged,
    /// Untracked, ignored or unknown codes
    Other,
}

impl StatusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Staged => "staged",
            StatusCategory::Unstaged => "unstaged",
            StatusCategory::Combined => "combined",
            StatusCategory::Unmerged => "unmerged",
            StatusCategory::Other => "other",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic colour/weight tag attached to each status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    Muted,
}

/// One entry of the status code table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub code: &'static str,
    pub category: StatusCategory,
    pub title: &'static str,
    pub emphasis: Emphasis,
}

const fn row(
    code: &'static str,
    category: StatusCategory,
    title: &'static str,
    emphasis: Emphasis,
) -> StatusDescriptor {
    StatusDescriptor {
        code,
        category,
        title,
        emphasis,
    }
}

use Emphasis::{Blue, Cyan, Green, Magenta, Muted, Red, Yellow};
use StatusCategory::{Combined, Other, Staged, Unmerged, Unstaged};

/// All known porcelain status codes
pub static STATUS_TABLE: [StatusDescriptor; 35] = [
    // Index only
    row("D ", Staged, "Deleted (staged)", Red),
    row("A ", Staged, "New (staged)", Green),
    row("M ", Staged, "Modified (staged)", Yellow),
    row("R ", Staged, "Renamed (staged)", Blue),
    row("C ", Staged, "Copied (staged)", Cyan),
    row("T ", Staged, "Type changed (staged)", Magenta),
    // Work tree only
    row(" M", Unstaged, "Modified (unstaged)", Yellow),
    row(" T", Unstaged, "Type changed (unstaged)", Magenta),
    row(" D", Unstaged, "Deleted (unstaged)", Red),
    row(" R", Unstaged, "Renamed (unstaged)", Blue),
    // Index and work tree
    row("MM", Combined, "Modified (staged & partially unstaged)", Yellow),
    row("TT", Combined, "Type changed (staged & unstaged)", Magenta),
    row("AM", Combined, "New (staged), Modified (unstaged)", Yellow),
    row("RM", Combined, "Renamed (staged), Modified (unstaged)", Yellow),
    row("CM", Combined, "Copied (staged), Modified (unstaged)", Yellow),
    row("MT", Combined, "Modified (staged), Type changed (unstaged)", Magenta),
    row("MD", Combined, "Modified (staged), Deleted (unstaged)", Red),
    row("MR", Combined, "Modified (staged), Renamed (unstaged)", Yellow),
    row("MC", Combined, "Modified (staged), Copied (unstaged)", Yellow),
    row("TD", Combined, "Type changed (staged), Deleted (unstaged)", Red),
    row("TR", Combined, "Type changed (staged), Renamed (unstaged)", Magenta),
    row("TC", Combined, "Type changed (staged), Copied (unstaged)", Magenta),
    row("RT", Combined, "Renamed (staged), Type changed (unstaged)", Magenta),
    row("RD", Combined, "Renamed (staged), Deleted (unstaged)", Red),
    row("CD", Combined, "Copied (staged), Deleted (unstaged)", Red),
    row("CR", Combined, "Copied (staged), Renamed (unstaged)", Cyan),
    // Unmerged
    row("DD", Unmerged, "Unmerged, Both Deleted", Red),
    row("AU", Unmerged, "Unmerged, Added by Us", Green),
    row("UD", Unmerged, "Unmerged, Deleted by Them", Yellow),
    row("UA", Unmerged, "Unmerged, Added by Them", Green),
    row("DU", Unmerged, "Unmerged, Deleted by Us", Yellow),
    row("AA", Unmerged, "Unmerged, Both Added", Green),
    row("UU", Unmerged, "Unmerged, Both Modified", Yellow),
    // Other
    row("??", Other, "Untracked", Muted),
    row("!!", Other, "Ignored", Muted),
];

/// Exact-match lookup of a two-character code
pub fn lookup(code: &str) -> Option<&'static StatusDescriptor> {
    STATUS_TABLE.iter().find(|descriptor| descriptor.code == code)
}

/// Classification of a status code, known or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    Known(&'static StatusDescriptor),
    /// A code missing from the table; the raw code doubles as its title
    Unknown(String),
}

impl Descriptor {
    pub fn code(&self) -> &str {
        match self {
            Descriptor::Known(descriptor) => descriptor.code,
            Descriptor::Unknown(code) => code,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Descriptor::Known(descriptor) => descriptor.title,
            Descriptor::Unknown(code) => code,
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            Descriptor::Known(descriptor) => descriptor.category,
            Descriptor::Unknown(_) => StatusCategory::Other,
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            Descriptor::Known(descriptor) => descriptor.emphasis,
            Descriptor::Unknown(_) => Emphasis::Muted,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Descriptor::Known(_))
    }
}

/// Describe a code, falling back to [`Descriptor::Unknown`]
pub fn describe(code: &str) -> Descriptor {
    match lookup(code) {
        Some(descriptor) => Descriptor::Known(descriptor),
        None => {
            log::debug!("Unknown porcelain status code {code:?}");
            Descriptor::Unknown(code.to_string())
        }
    }
}
