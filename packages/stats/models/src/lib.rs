#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod contribution;
pub mod profile;
pub mod repo;

pub use contribution::{ContributionCalendar, ContributionDay, ContributionSummary};
pub use profile::{Profile, ProfileReport, ProfileStats};
pub use repo::{LanguageTally, RepoSummary};
