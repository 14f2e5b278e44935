//! Streak statistics over a daily contribution calendar.
//!
//! Days are expected oldest first; the last day is "today".

use gitstat_stats_models::{ContributionCalendar, ContributionDay, ContributionSummary};

/// Length of the longest run of consecutive days with at least one
/// contribution.
#[must_use]
pub fn longest_streak(days: &[ContributionDay]) -> u32 {
    let mut longest = 0;
    let mut run = 0;

    for day in days {
        if day.count > 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    longest
}

/// Length of the run of active days ending today.
///
/// A zero count on the most recent day is skipped rather than treated as a
/// break, since today may simply not have been contributed to yet.
#[must_use]
pub fn current_streak(days: &[ContributionDay]) -> u32 {
    let remaining = match days.split_last() {
        Some((today, earlier)) if today.count == 0 => earlier,
        _ => days,
    };

    let active = remaining
        .iter()
        .rev()
        .take_while(|day| day.count > 0)
        .count();

    u32::try_from(active).unwrap_or(u32::MAX)
}

/// Derive the full summary from a calendar.
///
/// The provider-reported total wins when present. A disagreement with the
/// sum of daily counts is logged, not corrected.
#[must_use]
pub fn summarize_contributions(calendar: &ContributionCalendar) -> ContributionSummary {
    let daily_sum = calendar.daily_sum();

    let total = match calendar.reported_total {
        Some(reported) if reported != daily_sum => {
            log::warn!(
                "Reported contribution total {reported} differs from daily sum {daily_sum}"
            );
            reported
        }
        Some(reported) => reported,
        None => daily_sum,
    };

    ContributionSummary {
        total,
        current_streak: current_streak(&calendar.days),
        longest_streak: longest_streak(&calendar.days),
    }
}

#[cfg(test)]
mod tests {
    use gitstat_testing::days;

    use super::*;

    #[test]
    fn test_streaks_with_active_today() {
        let days = days(&[1, 0, 3, 2, 0, 0, 5]);

        assert_eq!(longest_streak(&days), 2);
        assert_eq!(current_streak(&days), 1);
    }

    #[test]
    fn test_current_streak_skips_inactive_today() {
        let days = days(&[2, 1, 0]);

        assert_eq!(current_streak(&days), 2);
        assert_eq!(longest_streak(&days), 2);
    }

    #[test]
    fn test_current_streak_only_skips_one_day() {
        let days = days(&[4, 4, 0, 0]);

        assert_eq!(current_streak(&days), 0);
    }

    #[test]
    fn test_current_streak_runs_to_sequence_start() {
        let days = days(&[1, 1, 1, 1]);

        assert_eq!(current_streak(&days), 4);
        assert_eq!(longest_streak(&days), 4);
    }

    #[test]
    fn test_empty_calendar() {
        assert_eq!(current_streak(&[]), 0);
        assert_eq!(longest_streak(&[]), 0);

        let summary = summarize_contributions(&ContributionCalendar::default());
        assert_eq!(summary, ContributionSummary::default());
    }

    #[test]
    fn test_single_inactive_day() {
        let days = days(&[0]);

        assert_eq!(current_streak(&days), 0);
        assert_eq!(longest_streak(&days), 0);
    }

    #[test]
    fn test_summary_uses_daily_sum_without_reported_total() {
        let calendar = ContributionCalendar {
            reported_total: None,
            days: days(&[1, 0, 3, 2, 0, 0, 5]),
        };

        let summary = summarize_contributions(&calendar);

        assert_eq!(summary.total, 11);
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 2);
    }

    #[test_log::test]
    fn test_summary_prefers_reported_total() {
        let calendar = ContributionCalendar {
            reported_total: Some(20),
            days: days(&[2, 1, 0]),
        };

        let summary = summarize_contributions(&calendar);

        assert_eq!(summary.total, 20);
        assert_eq!(summary.current_streak, 2);
    }
}
