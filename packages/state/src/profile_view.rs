use std::sync::Arc;

use gitstat_git_provider::GitProvider;
use gitstat_identifier::{ExtractError, OwnerRef, extract_owner};
use gitstat_stats::ProfileAggregator;
use gitstat_stats_models::ProfileReport;
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum ProfileViewError {
    #[error("Invalid profile: {0}")]
    InvalidInput(#[from] ExtractError),
    #[error("API Error / User not found: {0}")]
    Provider(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedProfile {
    pub owner: OwnerRef,
    pub report: ProfileReport,
}

/// Profile view state: the last report that was fetched in full.
pub struct ProfileView {
    aggregator: ProfileAggregator,
    displayed: RwLock<Option<DisplayedProfile>>,
}

impl ProfileView {
    #[must_use]
    pub fn new(provider: Arc<dyn GitProvider>) -> Self {
        Self {
            aggregator: ProfileAggregator::new(provider),
            displayed: RwLock::new(None),
        }
    }

    /// Look up the user named by `input` and display their report.
    ///
    /// # Errors
    ///
    /// * [`ProfileViewError::InvalidInput`] if no owner can be extracted; no
    ///   request is made
    /// * [`ProfileViewError::Provider`] if any fetch fails; the previously
    ///   displayed profile is kept
    pub async fn search(&self, input: &str) -> Result<DisplayedProfile, ProfileViewError> {
        let owner = extract_owner(input)?;
        log::debug!("Searching profile {owner}");

        let report = self.aggregator.fetch_report(&owner).await.inspect_err(|e| {
            log::error!("Failed to fetch profile {owner}: {e:?}");
        })?;

        let displayed = DisplayedProfile { owner, report };
        *self.displayed.write().await = Some(displayed.clone());

        Ok(displayed)
    }

    pub async fn displayed(&self) -> Option<DisplayedProfile> {
        self.displayed.read().await.clone()
    }
}
