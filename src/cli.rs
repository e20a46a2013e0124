use clap::{Parser, Subcommand};
use github_dashboard::config::{DEFAULT_ENDPOINT, ENDPOINT_ENV, TOKEN_ENV};

#[derive(Parser)]
#[command(name = "github-dashboard")]
#[command(about = "GitHub Dashboard - Lists your newest repositories and lets you star them")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub personal access token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: String,

    /// GitHub GraphQL endpoint
    #[arg(long, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the dashboard once and print it
    Show,
    /// Toggle the star on repositories (by position, id or name)
    Star {
        #[arg(required = true)]
        repositories: Vec<String>,
    },
    /// Load the dashboard and read commands from stdin
    Interactive,
}
