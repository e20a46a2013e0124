mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use colored::*;
use github_dashboard::config::ClientConfig;
use github_dashboard::dashboard::{Dashboard, LoadOutcome, ToggleOutcome};
use github_dashboard::github::{GraphQLClient, GraphQLTransport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = ClientConfig::with_endpoint(cli.token, &cli.endpoint)
        .context("Invalid client configuration")?;
    let client = GraphQLClient::new(config).context("Failed to build HTTP client")?;
    let mut dashboard = Dashboard::new(&client);

    if dashboard.load().await == LoadOutcome::Failed {
        eprintln!("{}", "Could not load repositories, see log for details".red());
    }

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Show => {
            print!("{}", dashboard.view());
        }
        Command::Star { repositories } => {
            for selector in &repositories {
                toggle(&mut dashboard, selector).await;
            }
            print!("{}", dashboard.view());
        }
        Command::Interactive => {
            print!("{}", dashboard.view());
            run_interactive(&mut dashboard).await?;
        }
    }

    Ok(())
}

async fn toggle<T: GraphQLTransport + ?Sized>(dashboard: &mut Dashboard<'_, T>, selector: &str) {
    let Some(id) = dashboard.view().find(selector).map(|card| card.id.clone()) else {
        eprintln!("{} {}", "No repository matches".yellow(), selector);
        return;
    };

    match dashboard.toggle_star(&id).await {
        ToggleOutcome::Updated(glyph) => println!("{} {}", glyph, selector),
        ToggleOutcome::UnknownRepository => {
            eprintln!("{} {}", "No repository matches".yellow(), selector)
        }
        ToggleOutcome::Failed => eprintln!("{} {}", "Could not update star for".red(), selector),
    }
}

async fn run_interactive<T: GraphQLTransport + ?Sized>(
    dashboard: &mut Dashboard<'_, T>,
) -> anyhow::Result<()> {
    println!("\nCommands: star <repo>, list, reload, help, quit\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "star" if !argument.is_empty() => toggle(dashboard, argument).await,
            "list" => print!("{}", dashboard.view()),
            "reload" => {
                if dashboard.load().await == LoadOutcome::Failed {
                    eprintln!("{}", "Reload failed, keeping previous list".red());
                }
                print!("{}", dashboard.view());
            }
            "quit" | "exit" => break,
            _ => println!("Commands: star <repo>, list, reload, help, quit"),
        }
    }

    Ok(())
}
