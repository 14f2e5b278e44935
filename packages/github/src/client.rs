use anyhow::Result;
use gitstat_git_provider::GitProvider;
use gitstat_github_models::{
    CONTRIBUTION_CALENDAR_QUERY, ContributionCalendarData, GithubIssueResponse,
    GithubLabelResponse, GithubRepoResponse, GithubRepoSummaryResponse, GithubUserResponse,
    GraphQlRequest, GraphQlResponse,
};
use gitstat_identifier::RepoRef;
use gitstat_issues_models::{IssueQuery, IssueSummary, LABELS_PER_PAGE, Label, PAGE_SIZE, RepoInfo};
use gitstat_stats_models::{ContributionCalendar, Profile, RepoSummary};
use reqwest::Url;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const REPOS_PER_PAGE: usize = 100;

pub struct GitHubProvider {
    http_client: reqwest::Client,
    auth_token: Option<String>,
    base_url: String,
}

impl GitHubProvider {
    /// Create a new GitHub provider without authentication.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            auth_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("Invalid GitHub API base URL: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        log::debug!("{method} {url}");
        let request = self
            .http_client
            .request(method, url)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(USER_AGENT, "gitstat");

        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            log::error!("GitHub API error: {}", response.text().await?);
            anyhow::bail!("GitHub API error: {status}");
        }

        Ok(response.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T> {
        Self::send(self.request(reqwest::Method::GET, url).query(query)).await
    }
}

impl Default for GitHubProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GitProvider for GitHubProvider {
    async fn get_profile(&self, owner: &str) -> Result<Profile> {
        let url = self.endpoint(&["users", owner])?;
        let user: GithubUserResponse = self.get_json(url, &[]).await?;

        Ok(user.into())
    }

    async fn list_repos(&self, owner: &str) -> Result<Vec<RepoSummary>> {
        let url = self.endpoint(&["users", owner, "repos"])?;
        let repos: Vec<GithubRepoSummaryResponse> = self
            .get_json(
                url,
                &[
                    ("per_page", REPOS_PER_PAGE.to_string()),
                    ("sort", "updated".to_string()),
                ],
            )
            .await?;

        Ok(repos.into_iter().map(Into::into).collect())
    }

    async fn get_contribution_calendar(&self, owner: &str) -> Result<ContributionCalendar> {
        if self.auth_token.is_none() {
            anyhow::bail!("GitHub GraphQL API requires a token; set GITHUB_TOKEN");
        }

        let url = self.endpoint(&["graphql"])?;
        let body = GraphQlRequest {
            query: CONTRIBUTION_CALENDAR_QUERY,
            variables: serde_json::json!({ "login": owner }),
        };

        let response: GraphQlResponse<ContributionCalendarData> =
            Self::send(self.request(reqwest::Method::POST, url).json(&body)).await?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            let messages = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            log::error!("GitHub GraphQL error: {messages}");
            anyhow::bail!("GitHub GraphQL error: {messages}");
        }

        let user = response
            .data
            .and_then(|data| data.user)
            .ok_or_else(|| anyhow::anyhow!("GitHub user not found: {owner}"))?;

        Ok(user.contributions_collection.contribution_calendar.into())
    }

    async fn get_repo(&self, repo: &RepoRef) -> Result<RepoInfo> {
        let url = self.endpoint(&["repos", repo.owner.as_str(), repo.repo.as_str()])?;
        let info: GithubRepoResponse = self.get_json(url, &[]).await?;

        Ok(info.into())
    }

    async fn list_labels(&self, repo: &RepoRef) -> Result<Vec<Label>> {
        let url = self.endpoint(&[
            "repos",
            repo.owner.as_str(),
            repo.repo.as_str(),
            "labels",
        ])?;
        let labels: Vec<GithubLabelResponse> = self
            .get_json(
                url,
                &[
                    ("per_page", LABELS_PER_PAGE.to_string()),
                    ("page", "1".to_string()),
                ],
            )
            .await?;

        Ok(labels.into_iter().map(Into::into).collect())
    }

    async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<IssueSummary>> {
        let url = self.endpoint(&[
            "repos",
            query.repo.owner.as_str(),
            query.repo.repo.as_str(),
            "issues",
        ])?;

        let mut params = vec![
            ("state", query.filter.state.to_string()),
            ("per_page", PAGE_SIZE.to_string()),
            ("page", query.filter.page.to_string()),
        ];
        if let Some(label) = query.filter.label.as_query() {
            params.push(("labels", label.to_string()));
        }

        let issues: Vec<GithubIssueResponse> = self.get_json(url, &params).await?;

        Ok(issues.into_iter().map(Into::into).collect())
    }

    fn provider_name(&self) -> &'static str {
        "github"
    }
}
