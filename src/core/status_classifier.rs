//! Parsing and classification of `git status --porcelain` output.
//!
//! [`classify`] turns the raw text of a porcelain status query into a
//! [`ClassifiedReport`]: one entry per non-blank line, each paired with its
//! [`Descriptor`] and ordered by descriptor title so that changes with the
//! same meaning end up next to each other.

use crate::core::{
    error::{IgittError, Result},
    status_table::{describe, Descriptor, StatusCategory},
};

/// One parsed porcelain line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Always exactly two characters, spaces included
    pub code: String,
    /// Everything after the prefix, untrimmed
    pub path: String,
}

/// A status entry paired with its table descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub descriptor: Descriptor,
    pub entry: StatusEntry,
}

impl ClassifiedEntry {
    pub fn title(&self) -> &str {
        self.descriptor.title()
    }

    pub fn path(&self) -> &str {
        &self.entry.path
    }
}

/// Classified entries sorted by title; an empty report means a clean tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedReport {
    entries: Vec<ClassifiedEntry>,
}

impl ClassifiedReport {
    /// Build a report, sorting entries by title
    ///
    /// `sort_by` is stable, so equal titles keep their relative order.
    pub fn from_entries(mut entries: Vec<ClassifiedEntry>) -> Self {
        entries.sort_by(|a, b| a.title().cmp(b.title()));
        Self { entries }
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ClassifiedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedEntry> {
        self.entries.iter()
    }

    /// Character width of the longest title, for column alignment
    pub fn title_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.title().chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn count_in(&self, category: StatusCategory) -> usize {
        self.entries
            .iter()
            .filter(|e| e.descriptor.category() == category)
            .count()
    }
}

impl<'a> IntoIterator for &'a ClassifiedReport {
    type Item = &'a ClassifiedEntry;
    type IntoIter = std::slice::Iter<'a, ClassifiedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse a single porcelain line into a [`StatusEntry`]
///
/// The first two characters are the code, the third is the separator and the
/// remainder is the path. Lines shorter than the prefix are rejected.
pub fn parse_line(line_number: usize, line: &str) -> Result<StatusEntry> {
    // Char boundaries: 0, after 1st char, after 2nd char, ...
    let mut boundaries = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()));

    let (Some(code_end), Some(path_start)) = (boundaries.nth(2), boundaries.next()) else {
        return Err(IgittError::malformed_status_line(line_number, line));
    };

    Ok(StatusEntry {
        code: line[..code_end].to_string(),
        path: line[path_start..].to_string(),
    })
}

/// Classify raw porcelain status text
///
/// # Returns
/// * `Ok(report)` - Entries sorted by title, stable for equal titles; empty
///   when the working tree is clean
/// * `Err(IgittError::MalformedStatusLine)` - A line is shorter than `XY `
pub fn classify(raw_status: &str) -> Result<ClassifiedReport> {
    let mut entries = Vec::new();

    for (index, line) in raw_status.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = parse_line(index + 1, line)?;
        entries.push(ClassifiedEntry {
            descriptor: describe(&entry.code),
            entry,
        });
    }

    log::debug!("Classified {} status entries", entries.len());
    Ok(ClassifiedReport::from_entries(entries))
}
