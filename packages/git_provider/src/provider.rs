use anyhow::Result;
use gitstat_identifier::RepoRef;
use gitstat_issues_models::{IssueQuery, IssueSummary, Label, RepoInfo};
use gitstat_stats_models::{ContributionCalendar, Profile, RepoSummary};

/// Remote service the profile and issue flows read from.
#[async_trait::async_trait]
pub trait GitProvider: Send + Sync {
    async fn get_profile(&self, owner: &str) -> Result<Profile>;

    /// Up to 100 repositories, most recently updated first.
    async fn list_repos(&self, owner: &str) -> Result<Vec<RepoSummary>>;

    /// Daily contribution counts for the provider's trailing window.
    async fn get_contribution_calendar(&self, owner: &str) -> Result<ContributionCalendar>;

    async fn get_repo(&self, repo: &RepoRef) -> Result<RepoInfo>;

    /// First page of labels only.
    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>>;

    /// One page of issues matching the query's filters.
    async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<IssueSummary>>;

    fn provider_name(&self) -> &str;
}
