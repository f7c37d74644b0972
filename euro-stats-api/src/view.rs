//! Selections a user can make over a snapshot.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::group_detail::GroupDetailRecord;
use crate::models::players::PlayerRecord;
use crate::stats::{self, GroupStats, GroupStatsMap};

pub const ALL_GROUPS: &'static str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupSelection {
    All,
    Group(String),
}

impl Default for GroupSelection {
    fn default() -> Self {
        GroupSelection::All
    }
}

impl FromStr for GroupSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            x if x.eq_ignore_ascii_case(ALL_GROUPS) => GroupSelection::All,
            x => GroupSelection::Group(x.to_string()),
        })
    }
}

impl fmt::Display for GroupSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSelection::All => f.write_str(ALL_GROUPS),
            GroupSelection::Group(group) => f.write_str(group),
        }
    }
}

/// Sorted, de-duplicated country names.
pub fn unique_countries(players: &[PlayerRecord]) -> Vec<String> {
    players
        .iter()
        .map(|p| p.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, de-duplicated group labels.
pub fn unique_groups(details: &[GroupDetailRecord]) -> Vec<String> {
    details
        .iter()
        .map(|d| d.group.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn filter_players<'a>(players: &'a [PlayerRecord], selected: &[String]) -> Vec<&'a PlayerRecord> {
    players
        .iter()
        .filter(|p| selected.iter().any(|c| *c == p.country))
        .collect()
}

pub fn filter_details<'a>(
    details: &'a [GroupDetailRecord],
    selection: &GroupSelection,
) -> Vec<&'a GroupDetailRecord> {
    details
        .iter()
        .filter(|d| match selection {
            GroupSelection::All => true,
            GroupSelection::Group(group) => d.group == *group,
        })
        .collect()
}

/// The rows and statistics shown for one group selection.
#[derive(Debug, Clone)]
pub struct GroupView<'a> {
    pub selection: GroupSelection,
    pub rows: Vec<&'a GroupDetailRecord>,
    pub stats: GroupStats,
    /// Per-group breakdown, used for the charts of the "All" view
    pub per_group: GroupStatsMap,
}

/// `None` if a single group was selected that has no rows.
pub fn group_view<'a>(details: &'a [GroupDetailRecord], selection: GroupSelection) -> Option<GroupView<'a>> {
    let per_group = stats::aggregate(details);
    let stats = match &selection {
        GroupSelection::All => stats::combine(&per_group),
        GroupSelection::Group(group) => per_group.get(group)?.clone(),
    };

    Some(GroupView {
        rows: filter_details(details, &selection),
        selection,
        stats,
        per_group,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(group: &str, team: &str, matches: &str, goals: &str) -> GroupDetailRecord {
        GroupDetailRecord {
            group: group.to_string(),
            rank: "1".to_string(),
            team: team.to_string(),
            matches: matches.to_string(),
            wins: "0".to_string(),
            draws: "0".to_string(),
            losses: "0".to_string(),
            goals_raw: goals.to_string(),
            goal_difference: "0".to_string(),
            points: "0".to_string(),
        }
    }

    #[test]
    fn test_group_selection_parse() {
        assert_eq!("All".parse::<GroupSelection>().unwrap(), GroupSelection::All);
        assert_eq!("all".parse::<GroupSelection>().unwrap(), GroupSelection::All);
        assert_eq!(
            " Group A ".parse::<GroupSelection>().unwrap(),
            GroupSelection::Group("Group A".to_string())
        );
        assert_eq!(GroupSelection::Group("Group A".to_string()).to_string(), "Group A");
    }

    #[test]
    fn test_group_view() {
        let details = vec![
            row("Group B", "Spain", "1", "2-0"),
            row("Group A", "Germany", "1", "1-0"),
            row("Group A", "Scotland", "1", "0-1"),
            row("Group B", "Italy", "1", "0-2"),
        ];

        assert_eq!(unique_groups(&details), vec!["Group A", "Group B"]);

        let view = group_view(&details, "Group A".parse().unwrap()).unwrap();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.stats.total_goals, 1.0);

        let all = group_view(&details, GroupSelection::All).unwrap();
        assert_eq!(all.rows.len(), 4);
        assert_eq!(all.stats.total_matches, 2.0);
        assert_eq!(all.per_group.len(), 2);

        assert!(group_view(&details, "Group Z".parse().unwrap()).is_none());
    }

    #[test]
    fn test_filter_players() {
        let players = vec![
            PlayerRecord { name: "Kane".to_string(), country: "England".to_string(), goals: Some(3) },
            PlayerRecord { name: "Olmo".to_string(), country: "Spain".to_string(), goals: Some(3) },
            PlayerRecord { name: "Saka".to_string(), country: "England".to_string(), goals: Some(1) },
        ];

        assert_eq!(unique_countries(&players), vec!["England", "Spain"]);

        let selected = vec!["Spain".to_string()];
        let filtered = filter_players(&players, &selected);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Olmo");
        assert!(filter_players(&players, &[]).is_empty());
    }
}
