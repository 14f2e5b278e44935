use std::sync::Arc;

use anyhow::Result;
use gitstat_git_provider::GitProvider;
use gitstat_identifier::OwnerRef;
use gitstat_stats_models::{ContributionSummary, ProfileReport, ProfileStats};

use crate::aggregate::aggregate_repos;
use crate::streak::summarize_contributions;

/// Fetches a user's profile data and derives the dashboard statistics.
pub struct ProfileAggregator {
    provider: Arc<dyn GitProvider>,
}

impl ProfileAggregator {
    #[must_use]
    pub fn new(provider: Arc<dyn GitProvider>) -> Self {
        Self { provider }
    }

    /// # Errors
    ///
    /// * If the contribution calendar cannot be fetched
    pub async fn fetch_contribution_summary(&self, owner: &OwnerRef) -> Result<ContributionSummary> {
        let calendar = self.provider.get_contribution_calendar(&owner.owner).await?;
        log::debug!(
            "Fetched {} contribution days for {owner} from {}",
            calendar.days.len(),
            self.provider.provider_name()
        );
        Ok(summarize_contributions(&calendar))
    }

    /// # Errors
    ///
    /// * If either the profile or the repository list cannot be fetched
    pub async fn fetch_profile_stats(&self, owner: &OwnerRef) -> Result<ProfileStats> {
        let (profile, repos) = tokio::try_join!(
            self.provider.get_profile(&owner.owner),
            self.provider.list_repos(&owner.owner),
        )?;

        let totals = aggregate_repos(&repos);
        log::debug!(
            "Aggregated {} repos for {owner}: {} stars, {} forks, {} languages",
            repos.len(),
            totals.total_stars,
            totals.total_forks,
            totals.languages.len()
        );

        Ok(ProfileStats {
            profile,
            repos,
            total_stars: totals.total_stars,
            total_forks: totals.total_forks,
            languages: totals.languages,
        })
    }

    /// Fetch stats and contributions together. Either both succeed or the
    /// whole report fails.
    ///
    /// # Errors
    ///
    /// * If any of the underlying fetches fails
    pub async fn fetch_report(&self, owner: &OwnerRef) -> Result<ProfileReport> {
        let (stats, contributions) = tokio::try_join!(
            self.fetch_profile_stats(owner),
            self.fetch_contribution_summary(owner),
        )?;

        Ok(ProfileReport {
            stats,
            contributions,
        })
    }
}
