use std::path::PathBuf;

use clap::{ArgAction, Parser};
use itemlist_fetch::OrderingPolicy;

use crate::config::{Overrides, OutputFormat};

#[derive(Clone, Debug, Parser)]
#[command(name = "itemlist", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// URL of the JSON item list.
    #[arg(long, short)]
    pub url: Option<String>,

    /// Ordering policy: `filter-and-sort` or `group-only`.
    #[arg(long, short)]
    pub policy: Option<OrderingPolicy>,

    /// Output format.
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Render one section per listId.
    #[arg(long, short, overrides_with = "no_grouped")]
    pub grouped: bool,

    /// Render a single flat list, even if grouping is configured elsewhere.
    #[arg(long, overrides_with = "grouped")]
    pub no_grouped: bool,

    /// Request timeout in seconds. Transport default when unset.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// User-Agent header to send.
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Configuration file. Defaults to `itemlist.toml` in the working directory, if present.
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (repeatable).
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(long, short)]
    pub quiet: bool,
}

impl App {
    /// Settings given on the command line, layered over every other source.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            url: self.url.clone(),
            policy: self.policy,
            format: self.format,
            grouped: self.grouping(),
            timeout_secs: self.timeout,
            user_agent: self.user_agent.clone(),
        }
    }

    fn grouping(&self) -> Option<bool> {
        match (self.grouped, self.no_grouped) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_flag() {
        let app = App::try_parse_from([
            "itemlist",
            "--url",
            "https://example.com/items.json",
            "--policy",
            "group-only",
            "--format",
            "json",
            "--grouped",
            "--timeout",
            "5",
            "-vv",
        ])
        .unwrap();

        let overrides = app.overrides();
        assert_eq!(overrides.url.as_deref(), Some("https://example.com/items.json"));
        assert_eq!(overrides.policy, Some(OrderingPolicy::GroupOnly));
        assert_eq!(overrides.format, Some(OutputFormat::Json));
        assert_eq!(overrides.grouped, Some(true));
        assert_eq!(overrides.timeout_secs, Some(5));
        assert_eq!(app.verbose, 2);
    }

    #[test]
    fn unset_flags_do_not_override() {
        let overrides = App::try_parse_from(["itemlist"]).unwrap().overrides();
        assert_eq!(overrides, Overrides::default());
    }

    #[test]
    fn no_grouped_turns_grouping_off() {
        let app = App::try_parse_from(["itemlist", "--no-grouped"]).unwrap();
        assert_eq!(app.overrides().grouped, Some(false));
    }

    #[test]
    fn last_grouping_flag_wins() {
        let app = App::try_parse_from(["itemlist", "--grouped", "--no-grouped"]).unwrap();
        assert_eq!(app.overrides().grouped, Some(false));

        let app = App::try_parse_from(["itemlist", "--no-grouped", "-g"]).unwrap();
        assert_eq!(app.overrides().grouped, Some(true));
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(App::try_parse_from(["itemlist", "--policy", "by-name"]).is_err());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(App::try_parse_from(["itemlist", "-v", "-q"]).is_err());
    }
}
