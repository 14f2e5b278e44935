use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// Daily contribution counts for the trailing year, oldest day first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    /// Total as reported by the provider, if it reports one.
    pub reported_total: Option<u64>,
    pub days: Vec<ContributionDay>,
}

impl ContributionCalendar {
    #[must_use]
    pub fn daily_sum(&self) -> u64 {
        self.days.iter().map(|day| u64::from(day.count)).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionSummary {
    pub total: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
}
