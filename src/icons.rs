//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the
//! application, supporting emoji, Unicode, and ASCII fallbacks.

use crate::content::ContentKind;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

impl IconTheme {
    /// Parse a theme name from configuration.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "emoji" => Some(Self::Emoji),
            "unicode" => Some(Self::Unicode),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }
}

/// Per-category icons
#[derive(Debug, Clone)]
pub struct CategoryIcons {
    pub movies: &'static str,
    pub series: &'static str,
    pub music: &'static str,
    pub carousel: &'static str,
    pub users: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub info: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub category: CategoryIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Icon for a content category in the current theme
    #[must_use]
    pub fn kind(&self, kind: ContentKind) -> &'static str {
        let icons = self.icons().category;
        match kind {
            ContentKind::Movies => icons.movies,
            ContentKind::Series => icons.series,
            ContentKind::Music => icons.music,
            ContentKind::Carousel => icons.carousel,
            ContentKind::Users => icons.users,
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                movies: "🎬",
                series: "📺",
                music: "🎵",
                carousel: "🖼️",
                users: "👥",
            },
            ui: UiIcons {
                add: "➕",
                edit: "✏️",
                delete: "🗑️",
                info: "💡",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                movies: "▶",
                series: "◫",
                music: "♪",
                carousel: "◨",
                users: "◉",
            },
            ui: UiIcons {
                add: "+",
                edit: "✎",
                delete: "✗",
                info: "ⓘ",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            category: CategoryIcons {
                movies: "M",
                series: "S",
                music: "~",
                carousel: "#",
                users: "@",
            },
            ui: UiIcons {
                add: "+",
                edit: "e",
                delete: "x",
                info: "i",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_from_name() {
        assert_eq!(IconTheme::from_name("emoji"), Some(IconTheme::Emoji));
        assert_eq!(IconTheme::from_name("ascii"), Some(IconTheme::Ascii));
        assert_eq!(IconTheme::from_name("nerd-font"), None);
    }

    #[test]
    fn test_category_icons() {
        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.kind(ContentKind::Movies), "🎬");
        assert_eq!(service.kind(ContentKind::Users), "👥");

        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.kind(ContentKind::Music), "~");
    }
}
