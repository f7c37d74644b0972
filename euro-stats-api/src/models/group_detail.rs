use lazy_static::lazy_static;
use log::{trace, warn};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use super::{required_text, text_of, Extracted};
use crate::components::group_label;
use crate::error::RecordError;

/// rank, team, matches, wins, draws, losses, goals, goal difference, points
pub const COLUMN_COUNT: usize = 9;

lazy_static! {
    static ref GROUP_COMPLETE_INFO: Selector = Selector::parse("div.group-complete-info").unwrap();
    static ref GROUP_NAME: Selector = Selector::parse("span.group-name").unwrap();
    static ref TBODY: Selector = Selector::parse("tbody").unwrap();
    static ref ROW: Selector = Selector::parse("tr").unwrap();
    static ref CELL: Selector = Selector::parse("td").unwrap();
}

pub type GroupDetailList = Extracted<GroupDetailRecord>;

/// One team's row in a group table. Numeric columns are kept as they appear
/// on the page; the aggregator coerces what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetailRecord {
    pub group: String,
    pub rank: String,
    pub team: String,
    pub matches: String,
    pub wins: String,
    pub draws: String,
    pub losses: String,
    /// "scored-conceded", e.g. "5-2"
    pub goals_raw: String,
    pub goal_difference: String,
    pub points: String,
}

impl GroupDetailRecord {
    /// Builds a record from the cells of a row, in page order.
    pub fn from_cells(group: &str, cells: Vec<String>) -> Result<Self, RecordError> {
        let [rank, team, matches, wins, draws, losses, goals_raw, goal_difference, points]: [String; COLUMN_COUNT] =
            cells.try_into().map_err(|cells: Vec<String>| RecordError::ColumnCount {
                expected: COLUMN_COUNT,
                found: cells.len(),
            })?;

        Ok(Self {
            group: group.to_string(),
            rank,
            team,
            matches,
            wins,
            draws,
            losses,
            goals_raw,
            goal_difference,
            points,
        })
    }
}

pub fn parse(html: &Html) -> GroupDetailList {
    let mut res = GroupDetailList::default();

    for block in html.select(&GROUP_COMPLETE_INFO) {
        let rows: Vec<ElementRef> = match block.select(&TBODY).next() {
            Some(tbody) => tbody.select(&ROW).collect(),
            None => {
                warn!("Dropping group table without a body");
                res.dropped += 1;
                continue;
            }
        };

        let group = match required_text(block, &GROUP_NAME, "group-name") {
            Ok(v) => group_label::canonicalize(&v),
            Err(e) => {
                warn!("Dropping group table with {} rows: {}", rows.len(), e);
                res.dropped += rows.len().max(1);
                continue;
            }
        };

        for row in rows {
            let cells = row.select(&CELL).map(text_of).collect();
            match GroupDetailRecord::from_cells(&group, cells) {
                Ok(v) => res.records.push(v),
                Err(e) => {
                    warn!("Dropping row in {}: {}", group, e);
                    res.dropped += 1;
                }
            }
        }
    }

    trace!("Extracted {} group table rows ({} dropped)", res.len(), res.dropped);
    res
}
