use crate::error::{DashboardError, Result};
use std::fmt;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const TOKEN_ENV: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";
pub const ENDPOINT_ENV: &str = "GITHUB_GRAPHQL_URL";

/// Connection settings handed to the GraphQL client at construction
#[derive(Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    token: String,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(token, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(token: impl Into<String>, endpoint: &str) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DashboardError::AuthError(
                "Access token must not be empty".to_string(),
            ));
        }

        Ok(ClientConfig {
            endpoint: Url::parse(endpoint)?,
            token,
        })
    }

    /// Build from `GITHUB_PERSONAL_ACCESS_TOKEN` and optional `GITHUB_GRAPHQL_URL`
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| DashboardError::EnvError(format!("{} is not set", TOKEN_ENV)))?;
        let endpoint =
            std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(token, &endpoint)
    }

    pub fn authorization_header(&self) -> String {
        format!("bearer {}", self.token)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}
