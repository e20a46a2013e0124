use crate::models::{RepoId, RepositoryListResult, RepositorySummary, StarMutationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// GraphQL wire structures
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryListData {
    pub viewer: Viewer,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub name: Option<String>,
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    pub total_count: u64,
    #[serde(default)]
    pub nodes: Option<Vec<Option<RepositoryNode>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub open_issues: Option<TotalCount>,
    #[serde(rename = "openPRs", default)]
    pub open_prs: Option<TotalCount>,
    #[serde(rename = "ref", default)]
    pub git_ref: Option<GitRef>,
    pub viewer_has_starred: bool,
}

#[derive(Debug, Deserialize)]
pub struct GitRef {
    #[serde(default)]
    pub target: Option<CommitTarget>,
}

// Non-commit targets deserialize with no history
#[derive(Debug, Deserialize)]
pub struct CommitTarget {
    #[serde(default)]
    pub history: Option<TotalCount>,
}

#[derive(Debug, Deserialize)]
pub struct StarPayload {
    pub repo: Option<StarredRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarredRepository {
    pub name: String,
    pub viewer_has_starred: bool,
}

impl RepositoryNode {
    pub fn commit_count(&self) -> u64 {
        self.git_ref
            .as_ref()
            .and_then(|r| r.target.as_ref())
            .and_then(|t| t.history.as_ref())
            .map(|h| h.total_count)
            .unwrap_or(0)
    }
}

impl From<RepositoryNode> for RepositorySummary {
    fn from(node: RepositoryNode) -> Self {
        let commit_count = node.commit_count();
        RepositorySummary {
            id: RepoId::new(node.id),
            name: node.name,
            open_issues: node.open_issues.unwrap_or_default().total_count,
            open_pull_requests: node.open_prs.unwrap_or_default().total_count,
            commit_count,
            viewer_has_starred: node.viewer_has_starred,
        }
    }
}

impl From<RepositoryListData> for RepositoryListResult {
    fn from(data: RepositoryListData) -> Self {
        let connection = data.viewer.repositories;
        RepositoryListResult {
            viewer_name: data.viewer.name.unwrap_or_default(),
            repositories: connection
                .nodes
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .map(RepositorySummary::from)
                .collect(),
            total_count: connection.total_count,
        }
    }
}

impl From<StarredRepository> for StarMutationResult {
    fn from(repo: StarredRepository) -> Self {
        StarMutationResult {
            name: repo.name,
            viewer_has_starred: repo.viewer_has_starred,
        }
    }
}
