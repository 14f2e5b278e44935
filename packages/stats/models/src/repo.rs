use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub language: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub url: String,
}

/// Number of repositories per primary language.
///
/// Ordering carries no meaning; a sorted map just keeps output stable.
pub type LanguageTally = BTreeMap<String, u64>;
