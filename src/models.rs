use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque GraphQL node id of a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(String);

impl RepoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Star control state as displayed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarGlyph {
    Filled,
    Empty,
}

impl StarGlyph {
    pub const FILLED: char = '★';
    pub const EMPTY: char = '☆';

    pub fn from_starred(viewer_has_starred: bool) -> Self {
        if viewer_has_starred {
            StarGlyph::Filled
        } else {
            StarGlyph::Empty
        }
    }

    pub fn as_char(self) -> char {
        match self {
            StarGlyph::Filled => Self::FILLED,
            StarGlyph::Empty => Self::EMPTY,
        }
    }

    pub fn is_filled(self) -> bool {
        self == StarGlyph::Filled
    }
}

impl fmt::Display for StarGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One repository row of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: RepoId,
    pub name: String,
    pub open_issues: u64,
    pub open_pull_requests: u64,
    /// Commits on `master`, zero when the ref is missing
    pub commit_count: u64,
    pub viewer_has_starred: bool,
}

/// Result of the repository list query, newest repositories first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryListResult {
    pub viewer_name: String,
    pub repositories: Vec<RepositorySummary>,
    pub total_count: u64,
}

/// Authoritative star state returned by addStar/removeStar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarMutationResult {
    pub name: String,
    pub viewer_has_starred: bool,
}
