use gitstat_issues::{BrowserPhase, IssueBrowser, LoadedRepo};
use gitstat_issues_models::{IssueState, IssueSummary, Label};

use crate::RULE;

#[must_use]
pub fn render_issue_browser(browser: &IssueBrowser) -> String {
    let Some(loaded) = browser.repo() else {
        return "No repository loaded\n".to_string();
    };

    let mut sections = vec![render_repo_header(loaded)];

    let filter = browser.filter();
    sections.push(format!(
        "State: {}   Label: {}   Page: {}\n",
        filter.state, filter.label, filter.page
    ));

    sections.push(match browser.phase() {
        BrowserPhase::IssuesLoaded if browser.issues().is_empty() => {
            "No issues match these filters\n".to_string()
        }
        BrowserPhase::IssuesLoaded => browser
            .issues()
            .iter()
            .map(render_issue)
            .collect::<String>(),
        BrowserPhase::RepoLoaded | BrowserPhase::Idle => "Loading issues...\n".to_string(),
    });

    sections.join(&format!("{RULE}\n"))
}

fn render_repo_header(loaded: &LoadedRepo) -> String {
    let info = &loaded.info;
    let mut header = format!("{}\n", info.full_name);

    if let Some(description) = info.description.as_deref().filter(|d| !d.is_empty()) {
        header.push_str(description);
        header.push('\n');
    }

    header.push_str(&format!(
        "★ {}   ⑂ {}   {} open issues\n",
        info.star_count, info.fork_count, info.open_issue_count
    ));

    if !loaded.labels.is_empty() {
        header.push_str("Labels: ");
        header.push_str(
            &loaded
                .labels
                .iter()
                .map(|label| label.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        );
        header.push('\n');
    }

    header
}

fn render_issue(issue: &IssueSummary) -> String {
    let state = match issue.state {
        IssueState::Open => "OPEN",
        IssueState::Closed => "CLOSED",
    };

    let mut lines = vec![
        format!("[{state:<6}] #{} {}", issue.number, issue.title),
        format!(
            "         by {} · {} comments",
            issue.author, issue.comment_count
        ),
        format!("         {}", issue.html_url),
    ];

    if !issue.labels.is_empty() {
        lines.push(format!("         {}", render_labels(&issue.labels)));
    }

    lines.join("\n") + "\n"
}

fn render_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| format!("[{} #{}]", label.name, label.color_hex))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use gitstat_issues_models::StateFilter;
    use gitstat_testing::{issue, label, repo_info, repo_ref};

    use super::*;

    fn loaded_browser() -> IssueBrowser {
        let repo = repo_ref("octocat", "hello-world");
        let mut browser = IssueBrowser::new();
        let query = browser.load_repository(LoadedRepo {
            info: repo_info(&repo),
            labels: vec![label(1, "bug", "d73a4a")],
            repo,
        });
        browser.apply(
            &query,
            vec![
                issue(1, IssueState::Open, vec![label(1, "bug", "d73a4a")]),
                issue(2, IssueState::Closed, vec![]),
            ],
        );
        browser
    }

    #[test]
    fn test_render_idle_browser() {
        assert_eq!(
            render_issue_browser(&IssueBrowser::new()),
            "No repository loaded\n"
        );
    }

    #[test]
    fn test_render_repo_header() {
        let output = render_issue_browser(&loaded_browser());

        assert!(output.starts_with("octocat/hello-world\nA test repository\n"));
        assert!(output.contains("★ 100   ⑂ 20   5 open issues"));
        assert!(output.contains("Labels: bug"));
        assert!(output.contains("State: all   Label: all   Page: 1"));
    }

    #[test]
    fn test_render_issues_with_state_and_labels() {
        let output = render_issue_browser(&loaded_browser());

        assert!(output.contains("[OPEN  ] #1 Issue 1"));
        assert!(output.contains("[CLOSED] #2 Issue 2"));
        assert!(output.contains("by octocat · 1 comments"));
        assert!(output.contains("[bug #d73a4a]"));
        assert!(output.contains("https://github.com/octocat/hello-world/issues/2"));
    }

    #[test]
    fn test_render_pending_page() {
        let mut browser = loaded_browser();
        browser.change_filter(Some(StateFilter::Open), None);

        let output = render_issue_browser(&browser);

        assert!(output.contains("State: open"));
        assert!(output.contains("#1 Issue 1"));
    }

    #[test]
    fn test_render_empty_page() {
        let repo = repo_ref("octocat", "hello-world");
        let mut browser = IssueBrowser::new();
        let query = browser.load_repository(LoadedRepo {
            info: repo_info(&repo),
            labels: vec![],
            repo,
        });
        assert!(render_issue_browser(&browser).contains("Loading issues..."));

        browser.apply(&query, vec![]);

        assert!(render_issue_browser(&browser).contains("No issues match these filters"));
    }
}
