use crate::types::GraphQLError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("GraphQL error: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    #[error("GraphQL response contained no data")]
    MissingData,

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Environment error: {0}")]
    EnvError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, DashboardError>;
