use crate::error::{DashboardError, Result};
use crate::github::GraphQLTransport;
use crate::models::{RepoId, RepositoryListResult, StarGlyph, StarMutationResult};
use crate::queries::{build_repository_list_query, StarAction};
use crate::types::{RepositoryListData, StarPayload};
use crate::view::DashboardView;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Greeting set and the list rebuilt with this many repositories
    Rendered(usize),
    /// Greeting set, the viewer has no repositories and the list was left alone
    NoRepositories,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Updated(StarGlyph),
    UnknownRepository,
    Failed,
}

/// Reconciles the dashboard view with the GitHub API
pub struct Dashboard<'a, T: GraphQLTransport + ?Sized> {
    transport: &'a T,
    view: DashboardView,
}

impl<'a, T: GraphQLTransport + ?Sized> Dashboard<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self::with_view(transport, DashboardView::new())
    }

    pub fn with_view(transport: &'a T, view: DashboardView) -> Self {
        Dashboard { transport, view }
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// Fetch the viewer's repositories and render them.
    ///
    /// Any failure is logged and leaves the view exactly as it was.
    pub async fn load(&mut self) -> LoadOutcome {
        let result = match self.fetch_repositories().await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Failed to load repositories");
                return LoadOutcome::Failed;
            }
        };

        self.view.set_greeting(format!("Hello {}", result.viewer_name));

        if result.total_count == 0 {
            info!(viewer = %result.viewer_name, "Viewer has no repositories");
            return LoadOutcome::NoRepositories;
        }

        self.view.replace_list(&result.repositories);
        info!(
            viewer = %result.viewer_name,
            rendered = result.repositories.len(),
            total = result.total_count,
            "Rendered repository list"
        );
        LoadOutcome::Rendered(result.repositories.len())
    }

    /// Star or unstar a rendered repository.
    ///
    /// The mutation is picked from the glyph currently shown, but the glyph
    /// afterwards is whatever the server reports. Nothing changes until the
    /// response arrives, and nothing changes on failure.
    pub async fn toggle_star(&mut self, id: &RepoId) -> ToggleOutcome {
        let Some(current) = self.view.glyph(id) else {
            warn!(repo_id = %id, "No star control rendered for repository");
            return ToggleOutcome::UnknownRepository;
        };

        let action = StarAction::for_glyph(current);
        let result = match self.send_star_mutation(action, id).await {
            Ok(result) => result,
            Err(e) => {
                error!(repo_id = %id, ?action, error = %e, "Star mutation failed");
                return ToggleOutcome::Failed;
            }
        };

        let glyph = StarGlyph::from_starred(result.viewer_has_starred);
        self.view.set_glyph(id, glyph);
        debug!(repo_id = %id, repo = %result.name, %glyph, "Star control updated");
        ToggleOutcome::Updated(glyph)
    }

    async fn fetch_repositories(&self) -> Result<RepositoryListResult> {
        let data = self
            .transport
            .execute(build_repository_list_query(), json!({}))
            .await?;
        let data: RepositoryListData = serde_json::from_value(data)?;
        Ok(data.into())
    }

    async fn send_star_mutation(
        &self,
        action: StarAction,
        id: &RepoId,
    ) -> Result<StarMutationResult> {
        let mut data = self
            .transport
            .execute(action.document(), json!({ "repoId": id }))
            .await?;

        let payload = match data.get_mut(action.response_key()).map(Value::take) {
            Some(payload) if !payload.is_null() => payload,
            _ => {
                return Err(DashboardError::UnexpectedShape(format!(
                    "missing `{}` in mutation response",
                    action.response_key()
                )));
            }
        };

        let payload: StarPayload = serde_json::from_value(payload)?;
        payload.repo.map(StarMutationResult::from).ok_or_else(|| {
            DashboardError::UnexpectedShape("starrable is not a repository".to_string())
        })
    }
}
