use crate::config::ClientConfig;
use crate::error::{DashboardError, Result};
use crate::types::{GraphQLRequest, GraphQLResponse};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

const USER_AGENT: &str = "GitHub Dashboard/0.1.0";

/// Executes one GraphQL operation and yields its `data` object
#[async_trait]
pub trait GraphQLTransport: Send + Sync {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value>;
}

/// Transport against the GitHub GraphQL endpoint.
///
/// Holds a single HTTP client for its whole lifetime. Requests are sent
/// once: there is no retry, backoff or timeout.
pub struct GraphQLClient {
    client: Client,
    config: ClientConfig,
}

impl GraphQLClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(GraphQLClient { client, config })
    }
}

#[async_trait]
impl GraphQLTransport for GraphQLClient {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        let request = GraphQLRequest {
            query: document,
            variables,
        };

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(AUTHORIZATION, self.config.authorization_header())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: GraphQLResponse = serde_json::from_str(&body)?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            warn!(error_count = errors.len(), ?errors, "GraphQL request returned errors");
            return Err(DashboardError::GraphQL(errors));
        }

        let data = envelope.data.ok_or(DashboardError::MissingData)?;
        debug!(%data, "GraphQL request succeeded");
        Ok(data)
    }
}
