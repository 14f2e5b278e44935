#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod issue_list;
pub mod profile_card;

pub use issue_list::render_issue_browser;
pub use profile_card::{DEFAULT_REPO_LIMIT, render_profile};

const RULE: &str = "----------------------------------------";
