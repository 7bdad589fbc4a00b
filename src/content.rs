//! Content model: the five fixed categories and the items they hold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// The closed set of content categories shown as dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Movies,
    Series,
    Music,
    Carousel,
    Users,
}

impl ContentKind {
    /// All categories in tab order.
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Movies,
        ContentKind::Series,
        ContentKind::Music,
        ContentKind::Carousel,
        ContentKind::Users,
    ];

    /// Human-readable tab label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Movies => "Movies",
            ContentKind::Series => "Series",
            ContentKind::Music => "Music",
            ContentKind::Carousel => "Carousel",
            ContentKind::Users => "Users",
        }
    }

    /// Lowercase identifier used in config files and messages.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            ContentKind::Movies => "movies",
            ContentKind::Series => "series",
            ContentKind::Music => "music",
            ContentKind::Carousel => "carousel",
            ContentKind::Users => "users",
        }
    }

    /// Position in the tab order.
    #[must_use]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping around.
    #[must_use]
    pub fn next(&self) -> ContentKind {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    #[must_use]
    pub fn previous(&self) -> ContentKind {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a string is not one of the five category slugs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content category '{0}' (expected movies, series, music, carousel or users)")]
pub struct ParseContentKindError(pub String);

impl FromStr for ContentKind {
    type Err = ParseContentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movies" => Ok(ContentKind::Movies),
            "series" => Ok(ContentKind::Series),
            "music" => Ok(ContentKind::Music),
            "carousel" => Ok(ContentKind::Carousel),
            "users" => Ok(ContentKind::Users),
            other => Err(ParseContentKindError(other.to_string())),
        }
    }
}

/// A single manageable entry in the dashboard.
///
/// `id` and `kind` are fixed at creation; only `title` and `description`
/// can change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: ContentKind,
}

impl ContentItem {
    /// Create a new item with a fresh random id.
    ///
    /// An empty description is stored as `None`.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, kind: ContentKind) -> Self {
        let description = description.into();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: if description.is_empty() { None } else { Some(description) },
            kind,
        }
    }

    /// Description text, or the empty string when absent.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("movies".parse::<ContentKind>(), Ok(ContentKind::Movies));
        assert_eq!("carousel".parse::<ContentKind>(), Ok(ContentKind::Carousel));
        assert!("podcasts".parse::<ContentKind>().is_err());
        assert!("Movies".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trip() {
        for kind in ContentKind::ALL {
            assert_eq!(kind.to_string().parse::<ContentKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(ContentKind::Users.next(), ContentKind::Movies);
        assert_eq!(ContentKind::Movies.previous(), ContentKind::Users);
        assert_eq!(ContentKind::Series.next(), ContentKind::Music);
    }

    #[test]
    fn test_empty_description_is_none() {
        let item = ContentItem::new("Dune", "", ContentKind::Movies);
        assert!(item.description.is_none());
        assert_eq!(item.description_text(), "");

        let item = ContentItem::new("Dune", "Sci-fi epic", ContentKind::Movies);
        assert_eq!(item.description.as_deref(), Some("Sci-fi epic"));
    }
}
