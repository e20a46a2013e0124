//! GraphQL documents sent to the GitHub API.
//!
//! Every document is static text. The only runtime value, the repository
//! id used by the star mutations, travels as the `$repoId` variable.

use crate::models::StarGlyph;

/// Maximum number of repositories requested per load.
pub const REPOSITORY_PAGE_SIZE: usize = 12;

macro_rules! commit_fragment {
    () => {
        r#"
fragment commitFragment on Repository {
  ref(qualifiedName: "master") {
    target {
      ... on Commit {
        history {
          totalCount
        }
      }
    }
  }
}
"#
    };
}

/// Named fragment selecting the commit count reachable from `master`.
pub const COMMIT_COUNT_FRAGMENT: &str = commit_fragment!();

const REPOSITORY_LIST_QUERY: &str = concat!(
    r#"
{
  viewer {
    name
    repositories(first: 12, orderBy: {field: CREATED_AT, direction: DESC}) {
      totalCount
      nodes {
        name
        openIssues: issues(states: OPEN) {
          totalCount
        }
        openPRs: pullRequests(states: OPEN) {
          totalCount
        }
        ...commitFragment
        viewerHasStarred
        id
      }
    }
  }
}
"#,
    commit_fragment!()
);

const ADD_STAR_MUTATION: &str = r#"
mutation addStar($repoId: ID!) {
  addStar(input: {starrableId: $repoId}) {
    repo: starrable {
      ... on Repository {
        name
        viewerHasStarred
      }
    }
  }
}
"#;

const REMOVE_STAR_MUTATION: &str = r#"
mutation removeStar($repoId: ID!) {
  removeStar(input: {starrableId: $repoId}) {
    repo: starrable {
      ... on Repository {
        name
        viewerHasStarred
      }
    }
  }
}
"#;

/// Viewer name plus the newest repositories with their aggregate counts.
pub fn build_repository_list_query() -> &'static str {
    REPOSITORY_LIST_QUERY
}

pub fn build_add_star_mutation() -> &'static str {
    ADD_STAR_MUTATION
}

pub fn build_remove_star_mutation() -> &'static str {
    REMOVE_STAR_MUTATION
}

/// Which star mutation to send for a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarAction {
    Add,
    Remove,
}

impl StarAction {
    /// A filled star is removed, anything else is added.
    pub fn for_glyph(glyph: StarGlyph) -> Self {
        match glyph {
            StarGlyph::Filled => StarAction::Remove,
            StarGlyph::Empty => StarAction::Add,
        }
    }

    pub fn document(self) -> &'static str {
        match self {
            StarAction::Add => build_add_star_mutation(),
            StarAction::Remove => build_remove_star_mutation(),
        }
    }

    /// Top-level field of the mutation's `data` object.
    pub fn response_key(self) -> &'static str {
        match self {
            StarAction::Add => "addStar",
            StarAction::Remove => "removeStar",
        }
    }
}
