use chrono::{DateTime, Utc};
use gitstat_issues_models::{IssueState, IssueSummary, Label, RepoInfo};
use gitstat_stats_models::{Profile, RepoSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct GithubUserResponse {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GithubUserResponse> for Profile {
    fn from(value: GithubUserResponse) -> Self {
        Self {
            login: value.login,
            avatar_url: value.avatar_url,
            name: value.name,
            followers: value.followers,
            following: value.following,
            public_repos: value.public_repos,
            location: value.location,
            company: value.company,
            // GitHub reports an unset blog as ""
            blog: value.blog.filter(|blog| !blog.is_empty()),
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GithubRepoSummaryResponse {
    pub id: u64,
    pub name: String,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub html_url: String,
}

impl From<GithubRepoSummaryResponse> for RepoSummary {
    fn from(value: GithubRepoSummaryResponse) -> Self {
        Self {
            id: value.id,
            name: value.name,
            language: value.language,
            star_count: value.stargazers_count,
            fork_count: value.forks_count,
            url: value.html_url,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GithubRepoResponse {
    pub full_name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
}

impl From<GithubRepoResponse> for RepoInfo {
    fn from(value: GithubRepoResponse) -> Self {
        Self {
            full_name: value.full_name,
            description: value.description,
            star_count: value.stargazers_count,
            fork_count: value.forks_count,
            open_issue_count: value.open_issues_count,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GithubLabelResponse {
    pub id: u64,
    pub name: String,
    pub color: String,
}

impl From<GithubLabelResponse> for Label {
    fn from(value: GithubLabelResponse) -> Self {
        Self {
            id: value.id,
            name: value.name,
            color_hex: value.color,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GithubIssueUser {
    pub login: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GithubIssueResponse {
    pub number: u64,
    pub title: String,
    pub user: GithubIssueUser,
    pub comments: u64,
    pub state: IssueState,
    #[serde(default)]
    pub labels: Vec<GithubLabelResponse>,
    pub html_url: String,
}

impl From<GithubIssueResponse> for IssueSummary {
    fn from(value: GithubIssueResponse) -> Self {
        Self {
            number: value.number,
            title: value.title,
            author: value.user.login,
            comment_count: value.comments,
            state: value.state,
            labels: value.labels.into_iter().map(Into::into).collect(),
            html_url: value.html_url,
        }
    }
}
