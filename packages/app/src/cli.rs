use clap::{Parser, Subcommand};
use gitstat_app_ui::DEFAULT_REPO_LIMIT;
use gitstat_issues_models::{LabelFilter, StateFilter};

#[derive(Debug, Parser)]
#[command(name = "gitstat")]
#[command(about = "GitHub profile statistics and issue browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Show a user's profile, stats, languages and repositories")]
    Profile {
        /// Profile URL (`https://github.com/<user>`) or bare username
        target: String,

        #[arg(long)]
        json: bool,

        /// Repositories listed in the tracker
        #[arg(long, default_value_t = DEFAULT_REPO_LIMIT)]
        repos: usize,
    },
    #[command(about = "Browse a repository's issues")]
    Issues {
        /// Repository URL (`https://github.com/<owner>/<repo>`)
        repo: String,

        /// all, open or closed
        #[arg(long, default_value = "all")]
        state: StateFilter,

        /// Label name, or `all` for no label filter
        #[arg(long, default_value = "all")]
        label: LabelFilter,

        #[arg(long, conflicts_with = "interactive")]
        json: bool,

        /// Read paging and filter commands from stdin
        #[arg(short, long)]
        interactive: bool,
    },
}
