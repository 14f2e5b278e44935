#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod filter;
pub mod issue;

pub use filter::{IssueFilterState, IssueQuery, LabelFilter, StateFilter};
pub use issue::{IssueState, IssueSummary, Label, RepoInfo};

/// Issues requested per page.
pub const PAGE_SIZE: usize = 10;

/// Labels requested in the single label page fetched per repository.
pub const LABELS_PER_PAGE: usize = 100;
