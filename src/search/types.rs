use serde::{Deserialize, Serialize};
use std::fmt;

pub const RECOMMENDATIONS_HEADER: &str = "🌐 **Web Search Recommendations:**";

/// A single result record returned by a search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub href: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl SearchHit {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: None,
        }
    }
}

/// What the augmenter found: provider links, or a hand-built search URL
/// when the provider failed or returned nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Links(Vec<String>),
    Fallback(String),
}

impl SearchOutcome {
    pub fn links(&self) -> Vec<&str> {
        match self {
            Self::Links(links) => links.iter().map(String::as_str).collect(),
            Self::Fallback(link) => vec![link.as_str()],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Renders the block appended to a ticket resolution.
impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n\n{}", RECOMMENDATIONS_HEADER)?;
        for link in self.links() {
            write!(f, "\n- {}", link)?;
        }
        Ok(())
    }
}
