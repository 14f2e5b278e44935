use std::sync::Arc;

use gitstat_app_ui::{render_issue_browser, render_profile};
use gitstat_git_provider::GitProvider;
use gitstat_issues::IssueBrowser;
use gitstat_issues_models::{IssueFilterState, IssueSummary, Label, LabelFilter, RepoInfo, StateFilter};
use gitstat_state::{IssueSession, ProfileView};
use serde::Serialize;

use crate::AppError;

#[derive(Debug, Serialize)]
struct IssuePage<'a> {
    repo: Option<&'a RepoInfo>,
    labels: &'a [Label],
    filter: &'a IssueFilterState,
    issues: &'a [IssueSummary],
    has_next_page: bool,
}

impl<'a> From<&'a IssueBrowser> for IssuePage<'a> {
    fn from(browser: &'a IssueBrowser) -> Self {
        let loaded = browser.repo();
        Self {
            repo: loaded.map(|loaded| &loaded.info),
            labels: loaded.map_or(&[], |loaded| loaded.labels.as_slice()),
            filter: browser.filter(),
            issues: browser.issues(),
            has_next_page: browser.has_next_page(),
        }
    }
}

/// Fetch and render the profile report for `target`.
///
/// # Errors
///
/// * If `target` names no user or any fetch fails
/// * If the JSON output cannot be serialized
pub async fn profile(
    provider: Arc<dyn GitProvider>,
    target: &str,
    json: bool,
    repo_limit: usize,
) -> Result<String, AppError> {
    let view = ProfileView::new(provider);
    let displayed = view.search(target).await?;

    Ok(if json {
        serde_json::to_string_pretty(&displayed.report)?
    } else {
        render_profile(&displayed.report, repo_limit)
    })
}

/// Load `repo` into `session` and narrow it to the requested filters.
///
/// # Errors
///
/// * If `repo` is not a repository link or any fetch fails
pub async fn open_issues(
    session: &IssueSession,
    repo: &str,
    state: StateFilter,
    label: LabelFilter,
) -> Result<(), AppError> {
    session.load_repository(repo).await?;

    if state != StateFilter::default() || label != LabelFilter::default() {
        session.change_filter(Some(state), Some(label)).await?;
    }

    Ok(())
}

/// # Errors
///
/// * If the JSON output cannot be serialized
pub async fn render_issues(session: &IssueSession, json: bool) -> Result<String, AppError> {
    let browser = session.snapshot().await;

    Ok(if json {
        serde_json::to_string_pretty(&IssuePage::from(&browser))?
    } else {
        render_issue_browser(&browser)
    })
}

#[cfg(test)]
mod tests {
    use gitstat_issues_models::IssueState;
    use gitstat_testing::{
        Endpoint, FakeProvider, calendar, issue, label, profile as user_profile, repo_info,
        repo_ref, repo_summary,
    };

    use super::*;

    fn provider() -> FakeProvider {
        let repo = repo_ref("octocat", "hello-world");
        FakeProvider::new()
            .with_profile(user_profile("octocat"))
            .with_repos("octocat", vec![repo_summary(1, None, 3, 1)])
            .with_calendar("octocat", calendar(&[2, 1, 0]))
            .with_repo(&repo, repo_info(&repo))
            .with_labels(&repo, vec![label(1, "bug", "d73a4a")])
            .with_issues(
                &repo,
                vec![
                    issue(1, IssueState::Open, vec![label(1, "bug", "d73a4a")]),
                    issue(2, IssueState::Closed, vec![]),
                    issue(3, IssueState::Open, vec![]),
                ],
            )
    }

    #[tokio::test]
    async fn test_profile_text() {
        let output = profile(Arc::new(provider()), "octocat", false, 20)
            .await
            .unwrap();

        assert!(output.contains("Stars: 3   Forks: 1   Contributions: 3"));
        assert!(output.contains("Unknown"));
    }

    #[tokio::test]
    async fn test_profile_json() {
        let output = profile(Arc::new(provider()), "https://github.com/octocat", true, 20)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["stats"]["total_stars"], 3);
        assert_eq!(value["contributions"]["current_streak"], 2);
    }

    #[tokio::test]
    async fn test_profile_invalid_input() {
        let provider = Arc::new(provider());

        let err = profile(provider.clone(), "https://github.com/", false, 20)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Profile(_)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_open_issues_default_filter_fetches_once() {
        let provider = Arc::new(provider());
        let session = IssueSession::new(provider.clone());

        open_issues(
            &session,
            "https://github.com/octocat/hello-world",
            StateFilter::All,
            LabelFilter::All,
        )
        .await
        .unwrap();

        assert_eq!(provider.call_count(Endpoint::Issues), 1);
        let output = render_issues(&session, false).await.unwrap();
        assert!(output.contains("#3 Issue 3"));
    }

    #[tokio::test]
    async fn test_open_issues_with_filters_json() {
        let session = IssueSession::new(Arc::new(provider()));

        open_issues(
            &session,
            "https://github.com/octocat/hello-world",
            StateFilter::Open,
            LabelFilter::Named("bug".to_string()),
        )
        .await
        .unwrap();

        let output = render_issues(&session, true).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["repo"]["full_name"], "octocat/hello-world");
        assert_eq!(value["filter"]["state"], "open");
        assert_eq!(value["issues"].as_array().unwrap().len(), 1);
        assert_eq!(value["issues"][0]["number"], 1);
        assert_eq!(value["has_next_page"], false);
    }
}
