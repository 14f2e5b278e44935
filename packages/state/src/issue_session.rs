use std::sync::Arc;

use gitstat_git_provider::GitProvider;
use gitstat_identifier::{ExtractError, extract_repo};
use gitstat_issues::{ApplyOutcome, IssueBrowser, LoadedRepo, PageDelta};
use gitstat_issues_models::{IssueQuery, LabelFilter, StateFilter};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum IssueSessionError {
    #[error("Invalid repo link: {0}")]
    InvalidInput(#[from] ExtractError),
    #[error("Repo not found or API error: {0}")]
    Provider(#[from] anyhow::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The fetched page is now displayed.
    Applied,
    /// The filter changed while the request was in flight; result dropped.
    Stale,
    /// The transition was not allowed, nothing was requested.
    Rejected,
}

/// Drives an [`IssueBrowser`] against a provider.
///
/// The browser lock is never held across a request, so several transitions
/// may have fetches in flight at once; only the one matching the latest
/// filter tuple gets displayed.
pub struct IssueSession {
    provider: Arc<dyn GitProvider>,
    browser: RwLock<IssueBrowser>,
}

impl IssueSession {
    #[must_use]
    pub fn new(provider: Arc<dyn GitProvider>) -> Self {
        Self {
            provider,
            browser: RwLock::new(IssueBrowser::new()),
        }
    }

    /// Load the repository named by `input` and fetch its first issue page.
    ///
    /// # Errors
    ///
    /// * [`IssueSessionError::InvalidInput`] if `input` is not a repo link
    /// * [`IssueSessionError::Provider`] if the repository, its labels or
    ///   the first page cannot be fetched. A metadata failure leaves the
    ///   previous repository (or nothing) loaded.
    pub async fn load_repository(&self, input: &str) -> Result<FetchOutcome, IssueSessionError> {
        let repo = extract_repo(input)?;
        log::debug!("Loading repository {repo}");

        let (info, labels) = tokio::try_join!(
            self.provider.get_repo(&repo),
            self.provider.list_labels(&repo),
        )
        .inspect_err(|e| log::error!("Failed to load repository {repo}: {e:?}"))?;

        let query = self
            .browser
            .write()
            .await
            .load_repository(LoadedRepo { repo, info, labels });

        self.fetch(query).await
    }

    /// # Errors
    ///
    /// * [`IssueSessionError::Provider`] if the resulting page fetch fails
    ///   while still current
    pub async fn change_filter(
        &self,
        state: Option<StateFilter>,
        label: Option<LabelFilter>,
    ) -> Result<FetchOutcome, IssueSessionError> {
        let query = self.browser.write().await.change_filter(state, label);
        self.fetch_opt(query).await
    }

    /// # Errors
    ///
    /// * [`IssueSessionError::Provider`] if the resulting page fetch fails
    ///   while still current
    pub async fn change_page(&self, delta: PageDelta) -> Result<FetchOutcome, IssueSessionError> {
        let query = self.browser.write().await.change_page(delta);
        self.fetch_opt(query).await
    }

    /// # Errors
    ///
    /// * [`IssueSessionError::Provider`] if the page fetch fails while still
    ///   current
    pub async fn refresh(&self) -> Result<FetchOutcome, IssueSessionError> {
        let query = self.browser.read().await.refresh();
        self.fetch_opt(query).await
    }

    /// Copy of the browser state for rendering.
    pub async fn snapshot(&self) -> IssueBrowser {
        self.browser.read().await.clone()
    }

    async fn fetch_opt(&self, query: Option<IssueQuery>) -> Result<FetchOutcome, IssueSessionError> {
        match query {
            Some(query) => self.fetch(query).await,
            None => Ok(FetchOutcome::Rejected),
        }
    }

    async fn fetch(&self, query: IssueQuery) -> Result<FetchOutcome, IssueSessionError> {
        log::debug!("Fetching issues for {query}");
        let result = self.provider.list_issues(&query).await;

        let mut browser = self.browser.write().await;
        match result {
            Ok(issues) => Ok(match browser.apply(&query, issues) {
                ApplyOutcome::Applied => FetchOutcome::Applied,
                ApplyOutcome::Stale => FetchOutcome::Stale,
            }),
            Err(e) if browser.is_current(&query) => {
                log::error!("Failed to fetch issues for {query}: {e:?}");
                Err(e.into())
            }
            Err(e) => {
                log::debug!("Ignoring failure of stale request {query}: {e}");
                Ok(FetchOutcome::Stale)
            }
        }
    }
}
