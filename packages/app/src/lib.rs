#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod interactive;

use gitstat_state::{IssueSessionError, ProfileViewError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Profile(#[from] ProfileViewError),
    #[error(transparent)]
    Issues(#[from] IssueSessionError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
