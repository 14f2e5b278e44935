use gitstat_stats_models::{LanguageTally, RepoSummary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoTotals {
    pub total_stars: u64,
    pub total_forks: u64,
    pub languages: LanguageTally,
}

/// Count one repository per primary language. Repositories without a
/// detected language are left out.
#[must_use]
pub fn tally_languages(repos: &[RepoSummary]) -> LanguageTally {
    repos
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .fold(LanguageTally::new(), |mut tally, language| {
            *tally.entry(language.to_string()).or_default() += 1;
            tally
        })
}

#[must_use]
pub fn aggregate_repos(repos: &[RepoSummary]) -> RepoTotals {
    RepoTotals {
        total_stars: repos.iter().map(|repo| repo.star_count).sum(),
        total_forks: repos.iter().map(|repo| repo.fork_count).sum(),
        languages: tally_languages(repos),
    }
}
