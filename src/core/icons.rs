//! Icon variants for menus and prompts.
//!
//! The icon style is chosen in the configuration file. Every operation in the
//! catalog carries one icon per variant; the helpers here cover the shared
//! decorations (next-step markers, branch, link and commit prefixes).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    #[default]
    Unicode,
    Emoji,
    #[serde(rename = "nerdfont")]
    NerdFont,
    Ascii,
}

impl IconType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::Unicode => "unicode",
            IconType::Emoji => "emoji",
            IconType::NerdFont => "nerdfont",
            IconType::Ascii => "ascii",
        }
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One icon per [`IconType`], as stored in the command catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub unicode: String,
    pub emoji: String,
    pub nerdfont: String,
    pub ascii: String,
}

impl IconSet {
    pub fn get(&self, variant: IconType) -> &str {
        match variant {
            IconType::Unicode => &self.unicode,
            IconType::Emoji => &self.emoji,
            IconType::NerdFont => &self.nerdfont,
            IconType::Ascii => &self.ascii,
        }
    }
}

/// Marker for operations that open a follow-up prompt
pub fn next_step_icon(variant: IconType) -> &'static str {
    match variant {
        IconType::Emoji => "⏩",
        IconType::NerdFont => "\u{f0da}",
        IconType::Ascii => ">",
        IconType::Unicode => "↪",
    }
}

/// Marker for operations that run immediately
pub fn no_next_step_icon(variant: IconType) -> &'static str {
    match variant {
        IconType::Emoji => "🎯",
        IconType::NerdFont => "\u{f140}",
        IconType::Ascii => "#",
        IconType::Unicode => "◎",
    }
}

pub fn branch_icon(variant: IconType) -> &'static str {
    match variant {
        IconType::Emoji => "🌿",
        IconType::NerdFont => "\u{e725}",
        IconType::Ascii => "Branch",
        IconType::Unicode => "⎇",
    }
}

/// Prefix for the repository URL prompt (empty for plain styles)
pub fn link_icon(variant: IconType) -> &'static str {
    match variant {
        IconType::Emoji => "🔗  ",
        IconType::NerdFont => "\u{f0c1}  ",
        IconType::Unicode | IconType::Ascii => "",
    }
}

pub fn commit_icon(variant: IconType) -> &'static str {
    match variant {
        IconType::Emoji => "📝  ",
        IconType::NerdFont => "\u{e729}  ",
        IconType::Ascii => "",
        IconType::Unicode => "✎  ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_type_serde_names() {
        let parsed: IconType = serde_json::from_str("\"nerdfont\"").unwrap();
        assert_eq!(parsed, IconType::NerdFont);
        assert_eq!(serde_json::to_string(&IconType::Emoji).unwrap(), "\"emoji\"");
        assert_eq!(IconType::default(), IconType::Unicode);
    }

    #[test]
    fn test_ascii_icons_are_plain() {
        for icon in [
            next_step_icon(IconType::Ascii),
            no_next_step_icon(IconType::Ascii),
            branch_icon(IconType::Ascii),
            link_icon(IconType::Ascii),
            commit_icon(IconType::Ascii),
        ] {
            assert!(icon.is_ascii(), "{icon:?}");
        }
    }

    #[test]
    fn test_icon_set_lookup() {
        let icons = IconSet {
            unicode: "u".to_string(),
            emoji: "e".to_string(),
            nerdfont: "n".to_string(),
            ascii: "a".to_string(),
        };
        assert_eq!(icons.get(IconType::Unicode), "u");
        assert_eq!(icons.get(IconType::NerdFont), "n");
        assert_eq!(icons.get(IconType::Ascii), "a");
    }
}
