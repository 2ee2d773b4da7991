//! Terminal colours for status emphasis.
//!
//! [`Emphasis`] is a semantic tag stored in the status table; this module is
//! the only place that turns it into an actual terminal colour.

use crate::core::status_classifier::ClassifiedEntry;
use crate::core::status_table::Emphasis;
use colored::*;

/// Extra columns between the title and the path in the status report
pub const TITLE_GAP: usize = 4;

/// Returns a closure that can be applied to any text to get the emphasis colour
pub fn get_emphasis_style(emphasis: Emphasis) -> Box<dyn Fn(&str) -> ColoredString> {
    match emphasis {
        Emphasis::Red => Box::new(|text: &str| text.bright_red()),
        Emphasis::Green => Box::new(|text: &str| text.bright_green()),
        Emphasis::Yellow => Box::new(|text: &str| text.bright_yellow()),
        Emphasis::Blue => Box::new(|text: &str| text.bright_blue()),
        Emphasis::Cyan => Box::new(|text: &str| text.bright_cyan()),
        Emphasis::Magenta => Box::new(|text: &str| text.bright_magenta()),
        Emphasis::Muted => Box::new(|text: &str| text.bright_black()),
    }
}

/// One report line: coloured title padded to `title_width + TITLE_GAP`, then the path
///
/// Padding is applied before colouring so escape codes don't skew the column.
pub fn format_status_line(entry: &ClassifiedEntry, title_width: usize) -> String {
    let color_fn = get_emphasis_style(entry.descriptor.emphasis());
    let padded = format!(
        "{:<width$}",
        entry.title(),
        width = title_width + TITLE_GAP
    );
    format!("{}{}", color_fn(&padded), entry.path())
}
