#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod aggregate;
pub mod aggregator;
pub mod streak;

pub use aggregate::{RepoTotals, aggregate_repos, tally_languages};
pub use aggregator::ProfileAggregator;
pub use streak::{current_streak, longest_streak, summarize_contributions};
