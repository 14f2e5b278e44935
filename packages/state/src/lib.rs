#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! View state owned by the profile and issue flows.
//!
//! State is only replaced after a fetch fully succeeds, so a failed request
//! always leaves the previously displayed data in place.

pub mod issue_session;
pub mod profile_view;

pub use issue_session::{FetchOutcome, IssueSession, IssueSessionError};
pub use profile_view::{DisplayedProfile, ProfileView, ProfileViewError};
