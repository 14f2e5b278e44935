#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use gitstat_git_provider::GitProvider;
use gitstat_identifier::RepoRef;
use gitstat_issues_models::{
    IssueQuery, IssueState, IssueSummary, Label, PAGE_SIZE, RepoInfo, StateFilter,
};
use gitstat_stats_models::{ContributionCalendar, ContributionDay, Profile, RepoSummary};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Profile,
    Repos,
    Calendar,
    Repo,
    Labels,
    Issues,
}

/// In-memory [`GitProvider`] with per-endpoint failure injection and
/// per-query issue delays.
#[derive(Default)]
pub struct FakeProvider {
    profiles: HashMap<String, Profile>,
    repos: HashMap<String, Vec<RepoSummary>>,
    calendars: HashMap<String, ContributionCalendar>,
    repo_infos: HashMap<RepoRef, RepoInfo>,
    labels: HashMap<RepoRef, Vec<Label>>,
    issues: HashMap<RepoRef, Vec<IssueSummary>>,
    issue_delays: HashMap<IssueQuery, Duration>,
    failures: Mutex<HashSet<Endpoint>>,
    calls: Mutex<Vec<(Endpoint, String)>>,
}

impl FakeProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.insert(profile.login.clone(), profile);
        self
    }

    #[must_use]
    pub fn with_repos(mut self, owner: &str, repos: Vec<RepoSummary>) -> Self {
        self.repos.insert(owner.to_string(), repos);
        self
    }

    #[must_use]
    pub fn with_calendar(mut self, owner: &str, calendar: ContributionCalendar) -> Self {
        self.calendars.insert(owner.to_string(), calendar);
        self
    }

    #[must_use]
    pub fn with_repo(mut self, repo: &RepoRef, info: RepoInfo) -> Self {
        self.repo_infos.insert(repo.clone(), info);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, repo: &RepoRef, labels: Vec<Label>) -> Self {
        self.labels.insert(repo.clone(), labels);
        self
    }

    #[must_use]
    pub fn with_issues(mut self, repo: &RepoRef, issues: Vec<IssueSummary>) -> Self {
        self.issues.insert(repo.clone(), issues);
        self
    }

    /// Delay the response to one specific issue query.
    #[must_use]
    pub fn with_issue_delay(mut self, query: IssueQuery, delay: Duration) -> Self {
        self.issue_delays.insert(query, delay);
        self
    }

    #[must_use]
    pub fn with_failure(self, endpoint: Endpoint) -> Self {
        self.fail(endpoint);
        self
    }

    /// Make every later call to `endpoint` fail.
    ///
    /// # Panics
    ///
    /// * If the failure set lock is poisoned
    pub fn fail(&self, endpoint: Endpoint) {
        self.failures.lock().unwrap().insert(endpoint);
    }

    /// # Panics
    ///
    /// * If the failure set lock is poisoned
    pub fn recover(&self, endpoint: Endpoint) {
        self.failures.lock().unwrap().remove(&endpoint);
    }

    /// Number of calls made to `endpoint` so far.
    ///
    /// # Panics
    ///
    /// * If the call log lock is poisoned
    #[must_use]
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(called, _)| *called == endpoint)
            .count()
    }

    /// # Panics
    ///
    /// * If the call log lock is poisoned
    #[must_use]
    pub fn calls(&self) -> Vec<(Endpoint, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, endpoint: Endpoint, target: String) -> Result<()> {
        self.calls.lock().unwrap().push((endpoint, target));

        if self.failures.lock().unwrap().contains(&endpoint) {
            anyhow::bail!("GitHub API error: 500 Internal Server Error");
        }

        Ok(())
    }
}

fn not_found<T>(what: &str) -> Result<T> {
    anyhow::bail!("GitHub API error: 404 Not Found ({what})")
}

#[async_trait::async_trait]
impl GitProvider for FakeProvider {
    async fn get_profile(&self, owner: &str) -> Result<Profile> {
        self.record(Endpoint::Profile, owner.to_string())?;
        self.profiles
            .get(owner)
            .cloned()
            .map_or_else(|| not_found(owner), Ok)
    }

    async fn list_repos(&self, owner: &str) -> Result<Vec<RepoSummary>> {
        self.record(Endpoint::Repos, owner.to_string())?;
        self.repos
            .get(owner)
            .cloned()
            .map_or_else(|| not_found(owner), Ok)
    }

    async fn get_contribution_calendar(&self, owner: &str) -> Result<ContributionCalendar> {
        self.record(Endpoint::Calendar, owner.to_string())?;
        self.calendars
            .get(owner)
            .cloned()
            .map_or_else(|| not_found(owner), Ok)
    }

    async fn get_repo(&self, repo: &RepoRef) -> Result<RepoInfo> {
        self.record(Endpoint::Repo, repo.to_string())?;
        self.repo_infos
            .get(repo)
            .cloned()
            .map_or_else(|| not_found(&repo.to_string()), Ok)
    }

    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>> {
        self.record(Endpoint::Labels, repo.to_string())?;
        Ok(self.labels.get(repo).cloned().unwrap_or_default())
    }

    async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<IssueSummary>> {
        if let Some(delay) = self.issue_delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        self.record(Endpoint::Issues, query.to_string())?;

        let Some(issues) = self.issues.get(&query.repo) else {
            return not_found(&query.repo.to_string());
        };

        let skip = (query.filter.page.max(1) as usize - 1) * PAGE_SIZE;

        Ok(issues
            .iter()
            .filter(|issue| match query.filter.state {
                StateFilter::All => true,
                StateFilter::Open => issue.state == IssueState::Open,
                StateFilter::Closed => issue.state == IssueState::Closed,
            })
            .filter(|issue| {
                query
                    .filter
                    .label
                    .as_query()
                    .is_none_or(|name| issue.labels.iter().any(|label| label.name == name))
            })
            .skip(skip)
            .take(PAGE_SIZE)
            .cloned()
            .collect())
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[must_use]
pub fn repo_ref(owner: &str, repo: &str) -> RepoRef {
    RepoRef {
        owner: owner.to_string(),
        repo: repo.to_string(),
    }
}

/// # Panics
///
/// * Never; the fixed join date is valid
#[must_use]
pub fn profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/{login}"),
        name: Some(format!("{login} display")),
        followers: 42,
        following: 7,
        public_repos: 3,
        location: Some("Earth".to_string()),
        company: None,
        blog: None,
        created_at: Utc.with_ymd_and_hms(2015, 6, 1, 12, 0, 0).unwrap(),
    }
}

#[must_use]
pub fn repo_summary(id: u64, language: Option<&str>, stars: u64, forks: u64) -> RepoSummary {
    RepoSummary {
        id,
        name: format!("repo-{id}"),
        language: language.map(str::to_string),
        star_count: stars,
        fork_count: forks,
        url: format!("https://github.com/octocat/repo-{id}"),
    }
}

#[must_use]
pub fn repo_info(repo: &RepoRef) -> RepoInfo {
    RepoInfo {
        full_name: repo.to_string(),
        description: Some("A test repository".to_string()),
        star_count: 100,
        fork_count: 20,
        open_issue_count: 5,
    }
}

#[must_use]
pub fn label(id: u64, name: &str, color_hex: &str) -> Label {
    Label {
        id,
        name: name.to_string(),
        color_hex: color_hex.to_string(),
    }
}

#[must_use]
pub fn issue(number: u64, state: IssueState, labels: Vec<Label>) -> IssueSummary {
    IssueSummary {
        number,
        title: format!("Issue {number}"),
        author: "octocat".to_string(),
        comment_count: number % 4,
        state,
        labels,
        html_url: format!("https://github.com/octocat/hello-world/issues/{number}"),
    }
}

/// Consecutive days starting 2025-01-01 with the given counts.
///
/// # Panics
///
/// * Never; the fixed start date is valid
#[must_use]
pub fn days(counts: &[u32]) -> Vec<ContributionDay> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    start
        .iter_days()
        .zip(counts)
        .map(|(date, &count)| ContributionDay { date, count })
        .collect()
}

#[must_use]
pub fn calendar(counts: &[u32]) -> ContributionCalendar {
    let days = days(counts);
    ContributionCalendar {
        reported_total: Some(days.iter().map(|day| u64::from(day.count)).sum()),
        days,
    }
}
