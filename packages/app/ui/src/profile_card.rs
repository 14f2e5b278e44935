use gitstat_stats_models::{
    ContributionSummary, LanguageTally, Profile, ProfileReport, ProfileStats, RepoSummary,
};

use crate::RULE;

/// Number of repositories listed in the tracker unless told otherwise.
pub const DEFAULT_REPO_LIMIT: usize = 20;

const UNKNOWN_LANGUAGE: &str = "Unknown";

#[must_use]
pub fn render_profile(report: &ProfileReport, repo_limit: usize) -> String {
    [
        render_profile_card(&report.stats.profile),
        render_stat_cards(&report.stats, &report.contributions),
        render_languages(&report.stats.languages),
        render_repo_tracker(&report.stats.repos, repo_limit),
    ]
    .join("\n")
}

fn render_profile_card(profile: &Profile) -> String {
    let mut lines = vec![match &profile.name {
        Some(name) => format!("{name} (@{})", profile.login),
        None => format!("@{}", profile.login),
    }];

    lines.push(format!(
        "{} followers · {} following · {} public repos",
        profile.followers, profile.following, profile.public_repos
    ));
    lines.push(format!("Avatar: {}", profile.avatar_url));

    let details = [
        ("Location", profile.location.as_deref()),
        ("Company", profile.company.as_deref()),
        ("Blog", profile.blog.as_deref()),
    ];
    lines.extend(
        details
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| format!("{key}: {value}"))),
    );

    lines.push(format!(
        "Joined {}",
        profile.created_at.format("%B %-d, %Y")
    ));
    lines.push(RULE.to_string());

    lines.join("\n") + "\n"
}

fn render_stat_cards(stats: &ProfileStats, contributions: &ContributionSummary) -> String {
    format!(
        "Stars: {}   Forks: {}   Contributions: {}\n\
         Current streak: {} days   Highest streak: {} days\n{RULE}\n",
        stats.total_stars,
        stats.total_forks,
        contributions.total,
        contributions.current_streak,
        contributions.longest_streak,
    )
}

fn render_languages(languages: &LanguageTally) -> String {
    if languages.is_empty() {
        return format!("Languages: none\n{RULE}\n");
    }

    let total: u64 = languages.values().sum();
    let mut sorted = languages.iter().collect::<Vec<_>>();
    sorted.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });

    let mut lines = vec!["Languages:".to_string()];
    lines.extend(sorted.into_iter().map(|(name, &count)| {
        let tenths = (count * 1000 + total / 2) / total;
        format!(
            "  {name:<16} {count:>3} repos  {}.{}%",
            tenths / 10,
            tenths % 10
        )
    }));
    lines.push(RULE.to_string());

    lines.join("\n") + "\n"
}

fn render_repo_tracker(repos: &[RepoSummary], limit: usize) -> String {
    if repos.is_empty() {
        return "Repositories: none\n".to_string();
    }

    let mut lines = vec![format!(
        "Repositories (showing {} of {}):",
        repos.len().min(limit),
        repos.len()
    )];
    lines.extend(repos.iter().take(limit).map(|repo| {
        format!(
            "  {:<32} {:<14} ★ {:<5} ⑂ {:<5} {}",
            repo.name,
            repo.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE),
            repo.star_count,
            repo.fork_count,
            repo.url
        )
    }));

    lines.join("\n") + "\n"
}
