use std::io::Write;
use std::str::FromStr;

use gitstat_app_ui::render_issue_browser;
use gitstat_issues::PageDelta;
use gitstat_issues_models::{LabelFilter, StateFilter};
use gitstat_state::{FetchOutcome, IssueSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::AppError;

pub const HELP: &str = "commands: n (next page), p (previous page), s <all|open|closed>, \
                        l <label|all>, r (refresh), q (quit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveCommand {
    Next,
    Previous,
    State(StateFilter),
    Label(LabelFilter),
    Refresh,
    Help,
    Quit,
}

impl FromStr for InteractiveCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (command, argument) = s
            .split_once(char::is_whitespace)
            .map_or((s, ""), |(command, argument)| (command, argument.trim()));

        match command {
            "n" | "next" => Ok(Self::Next),
            "p" | "prev" | "previous" => Ok(Self::Previous),
            "s" | "state" => argument
                .parse()
                .map(Self::State)
                .map_err(|_| format!("Unknown state '{argument}', expected all, open or closed")),
            "l" | "label" => Ok(Self::Label(LabelFilter::from_str(argument).unwrap_or_default())),
            "r" | "refresh" => Ok(Self::Refresh),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command '{other}'")),
        }
    }
}

/// Read commands line by line and drive `session` until `q` or end of input.
///
/// Rendered pages go to `out`; failures are reported on `err` and the
/// session stays usable.
///
/// # Errors
///
/// * If reading `input` or writing either output fails
pub async fn run<R, O, E>(
    session: &IssueSession,
    input: R,
    out: &mut O,
    err: &mut E,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    O: Write,
    E: Write,
{
    writeln!(out, "{}", render_issue_browser(&session.snapshot().await))?;
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<InteractiveCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(err, "error: {message}")?;
                continue;
            }
        };
        log::debug!("Interactive command: {command:?}");

        let result = match &command {
            InteractiveCommand::Quit => break,
            InteractiveCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            InteractiveCommand::Next => session.change_page(PageDelta::Next).await,
            InteractiveCommand::Previous => session.change_page(PageDelta::Previous).await,
            InteractiveCommand::State(state) => session.change_filter(Some(*state), None).await,
            InteractiveCommand::Label(label) => {
                session.change_filter(None, Some(label.clone())).await
            }
            InteractiveCommand::Refresh => session.refresh().await,
        };

        match result {
            Ok(FetchOutcome::Applied) => {
                writeln!(out, "{}", render_issue_browser(&session.snapshot().await))?;
            }
            Ok(FetchOutcome::Rejected) => {
                let reason = match command {
                    InteractiveCommand::Previous => "Already on the first page",
                    InteractiveCommand::Next => "No more pages",
                    _ => "No repository loaded",
                };
                writeln!(err, "{reason}")?;
            }
            Ok(FetchOutcome::Stale) => {}
            Err(e) => writeln!(err, "error: {e}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gitstat_issues_models::{IssueState, IssueSummary};
    use gitstat_testing::{Endpoint, FakeProvider, issue, label, repo_info, repo_ref};

    use super::*;

    const REPO_URL: &str = "https://github.com/octocat/hello-world";

    fn issues() -> Vec<IssueSummary> {
        (1..=15)
            .map(|number| {
                let labels = if number % 5 == 0 {
                    vec![label(1, "bug", "d73a4a")]
                } else {
                    vec![]
                };
                let state = if number % 2 == 0 {
                    IssueState::Closed
                } else {
                    IssueState::Open
                };
                issue(number, state, labels)
            })
            .collect()
    }

    async fn session(provider: Arc<FakeProvider>) -> IssueSession {
        let session = IssueSession::new(provider);
        session.load_repository(REPO_URL).await.unwrap();
        session
    }

    fn provider() -> Arc<FakeProvider> {
        let repo = repo_ref("octocat", "hello-world");
        Arc::new(
            FakeProvider::new()
                .with_repo(&repo, repo_info(&repo))
                .with_labels(&repo, vec![label(1, "bug", "d73a4a")])
                .with_issues(&repo, issues()),
        )
    }

    async fn run_script(session: &IssueSession, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(session, script.as_bytes(), &mut out, &mut err)
            .await
            .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("n".parse(), Ok(InteractiveCommand::Next));
        assert_eq!(" p ".parse(), Ok(InteractiveCommand::Previous));
        assert_eq!(
            "s closed".parse(),
            Ok(InteractiveCommand::State(StateFilter::Closed))
        );
        assert_eq!(
            "l good first issue".parse(),
            Ok(InteractiveCommand::Label(LabelFilter::Named(
                "good first issue".to_string()
            )))
        );
        assert_eq!("l all".parse(), Ok(InteractiveCommand::Label(LabelFilter::All)));
        assert_eq!("q".parse(), Ok(InteractiveCommand::Quit));
        assert!("s merged".parse::<InteractiveCommand>().is_err());
        assert!("x".parse::<InteractiveCommand>().is_err());
    }

    #[tokio::test]
    async fn test_paging_through_issues() {
        let provider = provider();
        let session = session(provider.clone()).await;

        let (out, err) = run_script(&session, "n\nn\np\nq\nn\n").await;

        assert!(out.contains("#11 Issue 11"));
        assert!(err.contains("No more pages"));
        assert_eq!(session.snapshot().await.filter().page, 1);
        assert_eq!(provider.call_count(Endpoint::Issues), 3);
    }

    #[tokio::test]
    async fn test_filter_commands_reset_page() {
        let session = session(provider()).await;

        let (out, _) = run_script(&session, "n\ns open\nl bug\n").await;

        let browser = session.snapshot().await;
        assert_eq!(browser.filter().page, 1);
        assert_eq!(browser.filter().state, StateFilter::Open);
        assert_eq!(browser.issues().len(), 2);
        assert!(out.contains("State: open   Label: bug   Page: 1"));
    }

    #[test_log::test(tokio::test)]
    async fn test_failure_keeps_session_alive() {
        let provider = provider();
        let session = session(provider.clone()).await;

        provider.fail(Endpoint::Issues);
        let (_, err) = run_script(&session, "r\nbogus\np\n").await;

        assert!(err.contains("error: Repo not found or API error"));
        assert!(err.contains("error: Unknown command 'bogus'"));
        assert!(err.contains("Already on the first page"));
        assert_eq!(session.snapshot().await.issues().len(), 10);
    }
}
