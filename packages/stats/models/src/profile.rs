use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contribution::ContributionSummary;
use crate::repo::{LanguageTally, RepoSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub profile: Profile,
    /// Most recently updated first.
    pub repos: Vec<RepoSummary>,
    pub total_stars: u64,
    pub total_forks: u64,
    pub languages: LanguageTally,
}

/// Everything the profile view shows, fetched and derived together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub stats: ProfileStats,
    pub contributions: ContributionSummary,
}
