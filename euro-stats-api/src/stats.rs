//! Group and country level aggregates derived from the extracted records.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::components::coerce;
use crate::models::group_detail::GroupDetailRecord;
use crate::models::players::PlayerRecord;

pub type GroupStatsMap = BTreeMap<String, GroupStats>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub total_matches: f64,
    pub total_goals: f64,
    /// `None` for a group without any played matches
    pub avg_goals_per_match: Option<f64>,
    /// Set when the per-team match counts add up to an odd number, which
    /// can't happen for a consistent table since every match has two teams.
    #[serde(skip)]
    pub unbalanced: bool,
}

impl GroupStats {
    /// Both sums count every match once per participating team.
    fn from_team_sums(match_sum: u64, goal_sum: u64) -> Self {
        let total_matches = match_sum as f64 / 2.0;
        let total_goals = goal_sum as f64 / 2.0;

        Self {
            total_matches,
            total_goals,
            avg_goals_per_match: match match_sum {
                0 => None,
                _ => Some(total_goals / total_matches),
            },
            unbalanced: match_sum % 2 != 0,
        }
    }
}

#[derive(Default)]
struct TeamSums {
    matches: u64,
    goals: u64,
}

/// Per-group totals. Unparseable match counts and goal strings contribute
/// zero instead of failing the group.
pub fn aggregate(details: &[GroupDetailRecord]) -> GroupStatsMap {
    let mut sums: BTreeMap<&str, TeamSums> = BTreeMap::new();

    for row in details {
        let entry = sums.entry(row.group.as_str()).or_default();

        match coerce::parse_int(&row.matches) {
            Some(v) => entry.matches += v as u64,
            None => warn!("Unreadable match count '{}' for {} in {}, counting 0", row.matches, row.team, row.group),
        }

        match coerce::goals_pair(&row.goals_raw) {
            Some((scored, conceded)) => entry.goals += scored as u64 + conceded as u64,
            None => warn!("Unreadable goals '{}' for {} in {}, counting 0", row.goals_raw, row.team, row.group),
        }
    }

    sums.into_iter()
        .map(|(group, sums)| {
            let stats = GroupStats::from_team_sums(sums.matches, sums.goals);
            if stats.unbalanced {
                warn!("Match counts in {} add up to an odd number ({})", group, sums.matches);
            }
            debug!("{}: {:?}", group, stats);
            (group.to_string(), stats)
        })
        .collect()
}

/// The "All groups" view: totals are summed, but the average is the mean of
/// the per-group averages rather than total goals over total matches.
pub fn combine(groups: &GroupStatsMap) -> GroupStats {
    let averages: Vec<f64> = groups
        .values()
        .filter_map(|v| v.avg_goals_per_match)
        .collect();

    GroupStats {
        total_matches: groups.values().map(|v| v.total_matches).sum(),
        total_goals: groups.values().map(|v| v.total_goals).sum(),
        avg_goals_per_match: match averages.len() {
            0 => None,
            n => Some(averages.iter().sum::<f64>() / n as f64),
        },
        unbalanced: groups.values().any(|v| v.unbalanced),
    }
}

pub fn aggregate_all(details: &[GroupDetailRecord]) -> GroupStats {
    combine(&aggregate(details))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryGoals {
    pub by_country: BTreeMap<String, u64>,
    pub overall_total: u64,
}

/// Goals per selected country. Players without a goal count are skipped,
/// though their country still gets an entry.
pub fn sum_goals_by_country(players: &[PlayerRecord], selected: &[String]) -> CountryGoals {
    let selected: BTreeSet<&str> = selected.iter().map(|v| v.as_str()).collect();
    let mut res = CountryGoals::default();

    for player in players.iter().filter(|p| selected.contains(p.country.as_str())) {
        let total = res.by_country.entry(player.country.clone()).or_insert(0);
        if let Some(goals) = player.goals {
            *total += goals as u64;
            res.overall_total += goals as u64;
        }
    }

    res
}
