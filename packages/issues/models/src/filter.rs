use std::{convert::Infallible, fmt, str::FromStr};

use gitstat_identifier::RepoRef;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StateFilter {
    #[default]
    All,
    Open,
    Closed,
}

/// Label restriction for an issue listing. `"all"` means no restriction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFilter {
    #[default]
    All,
    Named(String),
}

impl LabelFilter {
    /// Label name to send to the provider, `None` when unfiltered.
    #[must_use]
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl FromStr for LabelFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if s.is_empty() || s == "all" {
            Self::All
        } else {
            Self::Named(s.to_string())
        })
    }
}

impl fmt::Display for LabelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query().unwrap_or("all"))
    }
}

/// Filter and page the user is currently looking at.
///
/// Changing either filter puts the user back on page 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueFilterState {
    pub state: StateFilter,
    pub label: LabelFilter,
    pub page: u32,
}

impl Default for IssueFilterState {
    fn default() -> Self {
        Self {
            state: StateFilter::All,
            label: LabelFilter::All,
            page: 1,
        }
    }
}

impl IssueFilterState {
    pub fn set_state(&mut self, state: StateFilter) {
        self.state = state;
        self.page = 1;
    }

    pub fn set_label(&mut self, label: LabelFilter) {
        self.label = label;
        self.page = 1;
    }
}

impl fmt::Display for IssueFilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state={} label={} page={}",
            self.state, self.label, self.page
        )
    }
}

/// The filter tuple a single issue fetch was dispatched with.
///
/// Responses are matched back against the browser by comparing queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueQuery {
    pub repo: RepoRef,
    pub filter: IssueFilterState,
}

impl fmt::Display for IssueQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.repo, self.filter)
    }
}
