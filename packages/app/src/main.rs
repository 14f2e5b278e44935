#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use gitstat_app::cli::{Cli, Command};
use gitstat_app::config::Config;
use gitstat_app::{AppError, commands, interactive};
use gitstat_git_provider::GitProvider;
use gitstat_state::IssueSession;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from_env();
    log::debug!("Using GitHub API at {}", config.api_url);

    let provider: Arc<dyn GitProvider> = Arc::new(config.provider());

    match run(cli.command, provider).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, provider: Arc<dyn GitProvider>) -> Result<(), AppError> {
    match command {
        Command::Profile {
            target,
            json,
            repos,
        } => {
            println!("{}", commands::profile(provider, &target, json, repos).await?);
        }
        Command::Issues {
            repo,
            state,
            label,
            json,
            interactive,
        } => {
            let session = IssueSession::new(provider);
            commands::open_issues(&session, &repo, state, label).await?;

            if interactive {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                interactive::run(
                    &session,
                    stdin,
                    &mut std::io::stdout(),
                    &mut std::io::stderr(),
                )
                .await?;
            } else {
                println!("{}", commands::render_issues(&session, json).await?);
            }
        }
    }

    Ok(())
}
