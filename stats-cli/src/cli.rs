use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use euro_stats_api::config::{self, SourceConfig};

#[derive(Debug, Parser)]
#[command(
    name = "stats-cli",
    version,
    about = "Euro 2024 standings and top scorers from varzesh3.com"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    #[command(flatten)]
    pub source: SourceArgs,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Page to scrape.
    #[arg(global = true, long, env = "EURO_STATS_URL")]
    pub url: Option<String>,
    /// Request timeout in seconds.
    #[arg(global = true, long, env = "EURO_STATS_TIMEOUT")]
    pub timeout: Option<u64>,
    #[arg(global = true, long, env = "EURO_STATS_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl SourceArgs {
    pub fn to_config(&self) -> SourceConfig {
        let mut config = SourceConfig::default();
        if let Some(url) = &self.url {
            config = config.with_url(url.as_str());
        }
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.as_str());
        }
        config.with_timeout(
            self.timeout
                .map(Duration::from_secs)
                .unwrap_or(config::DEFAULT_TIMEOUT),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Top scorers, filtered by country, with goal totals per country.
    Players(PlayersArgs),
    /// Group tables and goal statistics.
    Groups(GroupsArgs),
    /// Points per team for every group.
    Summary,
}

#[derive(Debug, Args)]
pub struct PlayersArgs {
    /// Countries to include (repeatable). Defaults to every country on the page.
    #[arg(long = "country", value_name = "COUNTRY")]
    pub countries: Vec<String>,
    /// Write playerstats.csv and total_goals.csv into this directory.
    #[arg(long, value_name = "DIR")]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GroupsArgs {
    /// Group to show, e.g. "Group A". Defaults to all groups.
    #[arg(long, conflicts_with = "all")]
    pub group: Option<String>,
    #[arg(long)]
    pub all: bool,
    /// Write the selected rows and the group statistics as CSV into this directory.
    #[arg(long, value_name = "DIR")]
    pub csv: Option<PathBuf>,
}
