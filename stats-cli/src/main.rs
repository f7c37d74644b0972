mod cli;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use euro_stats_api::export::{self, country_goals_rows, group_stats_rows};
use euro_stats_api::models::players::PlayerRecord;
use euro_stats_api::stats::{self, CountryGoals};
use euro_stats_api::view::{self, GroupSelection};
use euro_stats_api::{Snapshot, SnapshotCache};
use log::warn;

use crate::cli::{Cli, Commands, GroupsArgs, PlayersArgs};

fn init_logging(verbose: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(match verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.source.to_config();
    let mut cache = SnapshotCache::new();
    let snapshot = euro_stats_api::load_cached(&mut cache, &config)
        .with_context(|| format!("Failed to load {}", config.url))?;

    println!("Source: {} (fetched {})", snapshot.url, snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"));
    if snapshot.dropped() > 0 {
        warn!("{} malformed records were skipped", snapshot.dropped());
    }

    match cli.command {
        Commands::Players(args) => players(snapshot, args),
        Commands::Groups(args) => groups(snapshot, args),
        Commands::Summary => {
            summary(snapshot);
            Ok(())
        }
    }
}

fn players(snapshot: &Snapshot, args: PlayersArgs) -> anyhow::Result<()> {
    let records = &snapshot.players.records;
    let selected = match args.countries.is_empty() {
        true => view::unique_countries(records),
        false => args.countries,
    };
    let filtered = view::filter_players(records, &selected);

    println!("\nPlayer Stats of Selected Team(s)");
    println!("Data Dimension: {} rows and 3 columns.", filtered.len());
    let rows: Vec<Vec<String>> = filtered
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.country.clone(),
                p.goals.map(|g| g.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    print!("{}", render::table(&["Player", "Country", "Goals"], &rows));

    let goals = match filtered.is_empty() {
        true => None,
        false => Some(stats::sum_goals_by_country(records, &selected)),
    };
    if let Some(goals) = &goals {
        println!("\nTotal Goals by Team");
        let rows: Vec<Vec<String>> = goals
            .by_country
            .iter()
            .map(|(country, total)| vec![country.clone(), total.to_string()])
            .collect();
        print!("{}", render::table(&["Country", "Total Goals"], &rows));
        println!("\nTotal Number of Goals Scored: {}", goals.overall_total);
    }

    if let Some(dir) = args.csv {
        export_players(&dir, &filtered, goals.as_ref())?;
    }

    Ok(())
}

/// The player table is always written; the country sums only when there are
/// players to sum.
fn export_players(dir: &Path, players: &[&PlayerRecord], goals: Option<&CountryGoals>) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = vec![export::export_to_dir(dir, "playerstats", players)?];
    if let Some(goals) = goals {
        written.push(export::export_to_dir(dir, "total_goals", country_goals_rows(goals))?);
    }
    Ok(written)
}

fn groups(snapshot: &Snapshot, args: GroupsArgs) -> anyhow::Result<()> {
    let details = &snapshot.group_details.records;
    let selection = match (&args.group, args.all) {
        (Some(group), false) => group.parse::<GroupSelection>()?,
        _ => GroupSelection::All,
    };

    let group_view = match view::group_view(details, selection) {
        Some(v) => v,
        None => anyhow::bail!(
            "Unknown group, expected one of: {}, {}",
            view::unique_groups(details).join(", "),
            view::ALL_GROUPS
        ),
    };

    println!("\nTeams Stats of {}", group_view.selection);
    if group_view.selection != GroupSelection::All {
        let rows: Vec<Vec<String>> = group_view
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.group.clone(),
                    r.rank.clone(),
                    r.team.clone(),
                    r.matches.clone(),
                    r.wins.clone(),
                    r.draws.clone(),
                    r.losses.clone(),
                    r.goals_raw.clone(),
                    r.goal_difference.clone(),
                    r.points.clone(),
                ]
            })
            .collect();
        print!(
            "{}",
            render::table(
                &["Group", "Rank", "Team", "Matches", "Wins", "Draws", "Losses", "Goals", "Goal Difference", "Points"],
                &rows
            )
        );
    }

    let stats = &group_view.stats;
    println!("Total Matches Played: {}", stats.total_matches as u64);
    println!("Total Goals Scored: {}", stats.total_goals as u64);
    println!("Average Goals per Match: {}", render::average(stats.avg_goals_per_match));
    if stats.unbalanced {
        warn!("Match counts don't pair up, the table may be inconsistent");
    }

    if group_view.selection == GroupSelection::All {
        let totals: Vec<(String, f64)> = group_view
            .per_group
            .iter()
            .map(|(group, v)| (group.clone(), v.total_goals))
            .collect();
        println!();
        print!("{}", render::bar_chart("Total Goals Scored in Each Group", &totals));

        let averages: Vec<(String, f64)> = group_view
            .per_group
            .iter()
            .filter_map(|(group, v)| v.avg_goals_per_match.map(|avg| (group.clone(), avg)))
            .collect();
        println!();
        print!("{}", render::bar_chart("Average Goals Scored per Match in Each Group", &averages));
    }

    if let Some(dir) = args.csv {
        let name = format!("group_{}_stats", group_view.selection).replace(' ', "_");
        export::export_to_dir(&dir, &name, &group_view.rows)?;
        export::export_to_dir(&dir, "group_stats", group_stats_rows(&group_view.per_group))?;
    }

    Ok(())
}

fn summary(snapshot: &Snapshot) {
    let rows: Vec<Vec<String>> = snapshot
        .group_summaries
        .records
        .iter()
        .map(|r| vec![r.group.clone(), r.team.clone(), r.points.clone()])
        .collect();

    println!();
    print!("{}", render::table(&["Group", "Team", "Points"], &rows));
}
