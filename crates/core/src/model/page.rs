use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("unknown page identifier: {0}")]
    Unknown(String),
}

/// The four pages of the presentation, in the order a visit walks them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    #[default]
    Intro,
    Quiz,
    Gallery,
    Proposal,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::Intro,
        PageId::Quiz,
        PageId::Gallery,
        PageId::Proposal,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Intro => "intro",
            PageId::Quiz => "quiz",
            PageId::Gallery => "gallery",
            PageId::Proposal => "proposal",
        }
    }

    /// Linear successor. `Proposal` is terminal.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            PageId::Intro => Some(PageId::Quiz),
            PageId::Quiz => Some(PageId::Gallery),
            PageId::Gallery => Some(PageId::Proposal),
            PageId::Proposal => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = PageError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        PageId::ALL
            .into_iter()
            .find(|page| page.slug() == value)
            .ok_or_else(|| PageError::Unknown(raw.to_string()))
    }
}
