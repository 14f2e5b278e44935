//! Issue list state machine.
//!
//! The browser never performs I/O. Every transition that needs data returns
//! the [`IssueQuery`] to fetch, and the caller hands the result back through
//! [`IssueBrowser::apply`]. A result is installed only if its query still
//! matches the browser's current filter tuple, so responses that arrive out
//! of order can never overwrite a newer selection.

use gitstat_identifier::RepoRef;
use gitstat_issues_models::{
    IssueFilterState, IssueQuery, IssueSummary, Label, LabelFilter, PAGE_SIZE, RepoInfo,
    StateFilter,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum BrowserPhase {
    /// No repository loaded.
    Idle,
    /// Repository metadata and labels are known; no issue page yet.
    RepoLoaded,
    /// At least one issue page has been applied for this repository.
    IssuesLoaded,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageDelta {
    Previous,
    Next,
}

impl TryFrom<i32> for PageDelta {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Previous),
            1 => Ok(Self::Next),
            other => Err(other),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The query no longer matches the current filter tuple.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedRepo {
    pub repo: RepoRef,
    pub info: RepoInfo,
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DisplayedPage {
    query: IssueQuery,
    issues: Vec<IssueSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueBrowser {
    repo: Option<LoadedRepo>,
    filter: IssueFilterState,
    displayed: Option<DisplayedPage>,
}

impl IssueBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> BrowserPhase {
        match (&self.repo, &self.displayed) {
            (None, _) => BrowserPhase::Idle,
            (Some(_), None) => BrowserPhase::RepoLoaded,
            (Some(_), Some(_)) => BrowserPhase::IssuesLoaded,
        }
    }

    #[must_use]
    pub const fn repo(&self) -> Option<&LoadedRepo> {
        self.repo.as_ref()
    }

    #[must_use]
    pub const fn filter(&self) -> &IssueFilterState {
        &self.filter
    }

    /// Issues of the most recently applied page.
    #[must_use]
    pub fn issues(&self) -> &[IssueSummary] {
        self.displayed
            .as_ref()
            .map_or(&[], |page| page.issues.as_slice())
    }

    /// Query the displayed issues were fetched with.
    #[must_use]
    pub fn displayed_query(&self) -> Option<&IssueQuery> {
        self.displayed.as_ref().map(|page| &page.query)
    }

    /// The filter tuple currently in effect, `None` while idle.
    #[must_use]
    pub fn current_query(&self) -> Option<IssueQuery> {
        self.repo.as_ref().map(|loaded| IssueQuery {
            repo: loaded.repo.clone(),
            filter: self.filter.clone(),
        })
    }

    #[must_use]
    pub fn is_current(&self, query: &IssueQuery) -> bool {
        self.repo
            .as_ref()
            .is_some_and(|loaded| loaded.repo == query.repo && self.filter == query.filter)
    }

    /// Whether the most recently applied page was full.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.displayed
            .as_ref()
            .is_some_and(|page| page.issues.len() >= PAGE_SIZE)
    }

    /// Switch to a freshly fetched repository and reset all filters.
    ///
    /// Returns the query for the repository's first page.
    pub fn load_repository(&mut self, loaded: LoadedRepo) -> IssueQuery {
        log::debug!(
            "Loaded {} with {} labels",
            loaded.repo,
            loaded.labels.len()
        );
        let query = IssueQuery {
            repo: loaded.repo.clone(),
            filter: IssueFilterState::default(),
        };

        self.repo = Some(loaded);
        self.filter = query.filter.clone();
        self.displayed = None;

        query
    }

    /// Update the given filters and go back to page 1.
    ///
    /// Returns `None` while no repository is loaded.
    pub fn change_filter(
        &mut self,
        state: Option<StateFilter>,
        label: Option<LabelFilter>,
    ) -> Option<IssueQuery> {
        self.repo.as_ref()?;

        if let Some(state) = state {
            self.filter.set_state(state);
        }
        if let Some(label) = label {
            self.filter.set_label(label);
        }
        self.filter.page = 1;

        self.current_query()
    }

    /// Move one page back or forward.
    ///
    /// Returns `None` (and changes nothing) when moving before page 1, past
    /// a short final page, or while no repository is loaded.
    pub fn change_page(&mut self, delta: PageDelta) -> Option<IssueQuery> {
        self.repo.as_ref()?;

        match delta {
            PageDelta::Previous if self.filter.page <= 1 => {
                log::debug!("Already on the first page");
                return None;
            }
            PageDelta::Previous => self.filter.page -= 1,
            PageDelta::Next if !self.has_next_page() => {
                log::debug!("No further pages after page {}", self.filter.page);
                return None;
            }
            PageDelta::Next => self.filter.page += 1,
        }

        self.current_query()
    }

    /// Re-request the current filter tuple.
    #[must_use]
    pub fn refresh(&self) -> Option<IssueQuery> {
        self.current_query()
    }

    /// Install a fetched page if `query` is still the current filter tuple.
    pub fn apply(&mut self, query: &IssueQuery, issues: Vec<IssueSummary>) -> ApplyOutcome {
        if !self.is_current(query) {
            log::debug!("Discarding stale issue page for {query}");
            return ApplyOutcome::Stale;
        }

        self.displayed = Some(DisplayedPage {
            query: query.clone(),
            issues,
        });

        ApplyOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use gitstat_issues_models::IssueState;
    use gitstat_testing::{issue, label, repo_info, repo_ref};

    use super::*;

    fn loaded_browser() -> (IssueBrowser, IssueQuery) {
        let repo = repo_ref("octocat", "hello-world");
        let mut browser = IssueBrowser::new();
        let query = browser.load_repository(LoadedRepo {
            info: repo_info(&repo),
            labels: vec![label(1, "bug", "d73a4a")],
            repo,
        });
        (browser, query)
    }

    fn page(count: u64) -> Vec<IssueSummary> {
        (1..=count)
            .map(|number| issue(number, IssueState::Open, vec![]))
            .collect()
    }

    #[test]
    fn test_new_browser_is_idle() {
        let mut browser = IssueBrowser::new();

        assert_eq!(browser.phase(), BrowserPhase::Idle);
        assert!(browser.current_query().is_none());
        assert!(browser.change_filter(Some(StateFilter::Open), None).is_none());
        assert!(browser.change_page(PageDelta::Next).is_none());
    }

    #[test]
    fn test_load_repository_resets_filter() {
        let (mut browser, _) = loaded_browser();
        browser.change_filter(Some(StateFilter::Closed), Some(LabelFilter::Named("bug".into())));

        let repo = repo_ref("octocat", "spoon-knife");
        let query = browser.load_repository(LoadedRepo {
            info: repo_info(&repo),
            labels: vec![],
            repo,
        });

        assert_eq!(query.filter, IssueFilterState::default());
        assert_eq!(browser.phase(), BrowserPhase::RepoLoaded);
        assert!(browser.issues().is_empty());
    }

    #[test]
    fn test_apply_moves_to_issues_loaded() {
        let (mut browser, query) = loaded_browser();

        assert_eq!(browser.apply(&query, page(3)), ApplyOutcome::Applied);

        assert_eq!(browser.phase(), BrowserPhase::IssuesLoaded);
        assert_eq!(browser.issues().len(), 3);
        assert_eq!(browser.displayed_query(), Some(&query));
    }

    #[test]
    fn test_change_filter_resets_page() {
        let (mut browser, query) = loaded_browser();
        browser.apply(&query, page(10));
        let second = browser.change_page(PageDelta::Next).unwrap();
        browser.apply(&second, page(10));
        let third = browser.change_page(PageDelta::Next).unwrap();
        assert_eq!(third.filter.page, 3);

        let query = browser.change_filter(Some(StateFilter::Open), None).unwrap();
        assert_eq!(query.filter.page, 1);
        assert_eq!(query.filter.state, StateFilter::Open);

        browser.filter.page = 5;
        let query = browser
            .change_filter(None, Some(LabelFilter::Named("bug".into())))
            .unwrap();
        assert_eq!(query.filter.page, 1);
        assert_eq!(query.filter.state, StateFilter::Open);
        assert_eq!(query.filter.label.as_query(), Some("bug"));
    }

    #[test]
    fn test_previous_on_first_page_is_noop() {
        let (mut browser, query) = loaded_browser();
        browser.apply(&query, page(10));

        assert!(browser.change_page(PageDelta::Previous).is_none());
        assert_eq!(browser.filter().page, 1);
    }

    #[test]
    fn test_next_after_short_page_is_noop() {
        let (mut browser, query) = loaded_browser();
        browser.apply(&query, page(9));

        assert!(!browser.has_next_page());
        assert!(browser.change_page(PageDelta::Next).is_none());
        assert_eq!(browser.filter().page, 1);
    }

    #[test]
    fn test_next_and_previous_after_full_page() {
        let (mut browser, query) = loaded_browser();
        browser.apply(&query, page(10));

        let next = browser.change_page(PageDelta::Next).unwrap();
        assert_eq!(next.filter.page, 2);

        let previous = browser.change_page(PageDelta::Previous).unwrap();
        assert_eq!(previous.filter.page, 1);
    }

    #[test]
    fn test_late_response_for_old_filter_is_discarded() {
        let (mut browser, _) = loaded_browser();

        let bug_query = browser
            .change_filter(
                Some(StateFilter::Open),
                Some(LabelFilter::Named("bug".into())),
            )
            .unwrap();
        let closed_query = browser
            .change_filter(Some(StateFilter::Closed), Some(LabelFilter::All))
            .unwrap();

        assert_eq!(
            browser.apply(&closed_query, vec![issue(2, IssueState::Closed, vec![])]),
            ApplyOutcome::Applied
        );
        assert_eq!(
            browser.apply(&bug_query, vec![issue(1, IssueState::Open, vec![])]),
            ApplyOutcome::Stale
        );

        assert_eq!(browser.issues().len(), 1);
        assert_eq!(browser.issues()[0].number, 2);
        assert_eq!(browser.displayed_query(), Some(&closed_query));
    }

    #[test]
    fn test_response_for_previous_repository_is_discarded() {
        let (mut browser, old_query) = loaded_browser();

        let repo = repo_ref("octocat", "spoon-knife");
        browser.load_repository(LoadedRepo {
            info: repo_info(&repo),
            labels: vec![],
            repo,
        });

        assert_eq!(browser.apply(&old_query, page(2)), ApplyOutcome::Stale);
        assert_eq!(browser.phase(), BrowserPhase::RepoLoaded);
    }

    #[test]
    fn test_page_delta_from_integer() {
        assert_eq!(PageDelta::try_from(1), Ok(PageDelta::Next));
        assert_eq!(PageDelta::try_from(-1), Ok(PageDelta::Previous));
        assert_eq!(PageDelta::try_from(2), Err(2));
    }
}
