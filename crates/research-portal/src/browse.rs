//! Interactive browsing over stdin/stdout.
//!
//! Reads one command per line and re-renders the current page after each
//! command that changes it.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::client::PortalClient;
use crate::config::Config;
use crate::formatters;
use crate::query::FilterPredicate;
use crate::route::Route;
use crate::view::{PortalView, RefreshOutcome};

/// Help text listing browse commands.
pub const HELP: &str = "\
Commands:
  open <route>   go to a route, e.g. open /treatment/remdesivir?filters=clinical-trials
  search <text>  search papers
  more           show more papers
  peer           toggle peer-reviewed papers only
  clinical       toggle clinical trial results only (treatment pages)
  expand         expand or collapse paper summaries and abstracts
  details        expand or collapse treatment details
  reload         fetch the current page again
  help           show this help
  quit           exit
";

/// A parsed browse command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(Route),
    More,
    TogglePeerReviewed,
    ToggleClinicalTrials,
    Expand,
    Details,
    Reload,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line. Blank lines parse to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a message for unknown commands and unparseable routes.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word.to_ascii_lowercase().as_str() {
            "open" | "go" => Self::Open(Route::parse(rest).map_err(|e| e.to_string())?),
            "search" | "s" => {
                if rest.is_empty() {
                    return Err("search needs some text".to_string());
                }
                let path = format!("/search/{}", urlencoding::encode(rest));
                Self::Open(Route::parse(&path).map_err(|e| e.to_string())?)
            }
            "more" | "m" => Self::More,
            "peer" => Self::TogglePeerReviewed,
            "clinical" => Self::ToggleClinicalTrials,
            "expand" => Self::Expand,
            "details" => Self::Details,
            "reload" | "r" => Self::Reload,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("unknown command '{other}', type 'help'")),
        };
        Ok(Some(command))
    }
}

/// Run the browse loop until `quit` or end of input.
///
/// # Errors
///
/// Returns error on I/O failure.
pub async fn run_browse<R, W>(
    client: PortalClient,
    config: &Config,
    start: Route,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut view = PortalView::new(client.clone(), start, config);
    view.load().await;
    render(&view, config, &mut writer).await?;

    let mut line = String::new();
    loop {
        writer.write_all(b"> ").await?;
        writer.flush().await?;

        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            tracing::info!("Input closed, leaving browse mode");
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writer.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };
        tracing::debug!(?command, "Browse command");

        match command {
            Command::Quit => break,
            Command::Help => {
                writer.write_all(HELP.as_bytes()).await?;
                continue;
            }
            Command::Open(route) => {
                view = PortalView::new(client.clone(), route, config);
                view.load().await;
            }
            Command::More => {
                if !view.snapshot().await.has_more() {
                    writer.write_all(b"No more papers.\n").await?;
                    continue;
                }
                view.show_more().await;
            }
            Command::TogglePeerReviewed => {
                report(view.toggle_filter(FilterPredicate::PeerReviewed).await);
            }
            Command::ToggleClinicalTrials => {
                if !view.offers_clinical_filter() {
                    writer.write_all(b"Clinical trial filter is only offered on treatment pages.\n").await?;
                    continue;
                }
                report(view.toggle_filter(FilterPredicate::ClinicalTrials).await);
            }
            Command::Expand => {
                view.toggle_expanded().await;
            }
            Command::Details => {
                view.toggle_treatment_details().await;
            }
            Command::Reload => {
                report(view.refresh().await);
            }
        }

        render(&view, config, &mut writer).await?;
    }

    writer.flush().await?;
    Ok(())
}

fn report(outcome: RefreshOutcome) {
    if outcome != RefreshOutcome::Applied {
        tracing::debug!(?outcome, "Refresh not applied");
    }
}

async fn render<W: AsyncWrite + Unpin>(
    view: &PortalView,
    config: &Config,
    writer: &mut W,
) -> anyhow::Result<()> {
    let page = formatters::format_page(view.route(), &view.snapshot().await, config.debug);
    writer.write_all(page.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Topic;
    use crate::route::Page;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("more"), Ok(Some(Command::More)));
        assert_eq!(Command::parse("  PEER "), Ok(Some(Command::TogglePeerReviewed)));
        assert_eq!(Command::parse("q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("   "), Ok(None));
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn test_parse_open() {
        assert_eq!(
            Command::parse("open /vaccine"),
            Ok(Some(Command::Open(Route::new(Page::Topic(Topic::Vaccine)))))
        );
        assert!(Command::parse("open vaccine").is_err());
    }

    #[test]
    fn test_parse_search_encodes_text() {
        assert_eq!(
            Command::parse("search masks reused"),
            Ok(Some(Command::Open(Route::new(Page::Search { query: "masks reused".into() }))))
        );
        assert!(Command::parse("search").is_err());
    }
}
