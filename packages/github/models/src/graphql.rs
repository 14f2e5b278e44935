use chrono::NaiveDate;
use gitstat_stats_models::{ContributionCalendar, ContributionDay};
use serde::{Deserialize, Serialize};

pub const CONTRIBUTION_CALENDAR_QUERY: &str = r"
query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
";

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContributionCalendarData {
    pub user: Option<CalendarUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarUser {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: CalendarResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub total_contributions: u64,
    pub weeks: Vec<CalendarWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    pub contribution_days: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub contribution_count: u32,
    pub date: NaiveDate,
}

impl From<CalendarResponse> for ContributionCalendar {
    fn from(value: CalendarResponse) -> Self {
        Self {
            reported_total: Some(value.total_contributions),
            days: value
                .weeks
                .into_iter()
                .flat_map(|week| week.contribution_days)
                .map(|day| ContributionDay {
                    date: day.date,
                    count: day.contribution_count,
                })
                .collect(),
        }
    }
}
