#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod graphql;
pub mod rest;

pub use graphql::{
    CONTRIBUTION_CALENDAR_QUERY, ContributionCalendarData, GraphQlError, GraphQlRequest,
    GraphQlResponse,
};
pub use rest::{
    GithubIssueResponse, GithubLabelResponse, GithubRepoResponse, GithubRepoSummaryResponse,
    GithubUserResponse,
};
