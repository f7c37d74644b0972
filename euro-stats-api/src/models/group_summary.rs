use lazy_static::lazy_static;
use log::{trace, warn};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use super::{field_text, required_text, Extracted};
use crate::components::group_label;
use crate::error::RecordError;

lazy_static! {
    static ref GROUP: Selector = Selector::parse("div.group").unwrap();
    static ref GROUP_NAME: Selector = Selector::parse("span.group-name").unwrap();
    static ref TEAM_ITEM: Selector = Selector::parse("div.team-item").unwrap();
    static ref TEAM_NAME: Selector = Selector::parse("div.team-name").unwrap();
    static ref TEAM_SCORE: Selector = Selector::parse("div.team-score").unwrap();
}

pub type GroupSummaryList = Extracted<GroupSummaryRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummaryRecord {
    pub group: String,
    pub team: String,
    pub points: String,
}

pub fn parse(html: &Html) -> GroupSummaryList {
    let mut res = GroupSummaryList::default();

    for block in html.select(&GROUP) {
        let group = match required_text(block, &GROUP_NAME, "group-name") {
            Ok(v) => group_label::canonicalize(&v),
            Err(e) => {
                // every team listed under an unlabeled group is lost with it
                let teams = block.select(&TEAM_ITEM).count().max(1);
                warn!("Dropping group block with {} teams: {}", teams, e);
                res.dropped += teams;
                continue;
            }
        };

        for team in block.select(&TEAM_ITEM) {
            match parse_team(&group, team) {
                Ok(v) => res.records.push(v),
                Err(e) => {
                    warn!("Dropping team in {}: {}", group, e);
                    res.dropped += 1;
                }
            }
        }
    }

    trace!("Extracted {} group standings ({} dropped)", res.len(), res.dropped);
    res
}

fn parse_team(group: &str, team: ElementRef) -> Result<GroupSummaryRecord, RecordError> {
    Ok(GroupSummaryRecord {
        group: group.to_string(),
        team: required_text(team, &TEAM_NAME, "team-name")?,
        points: field_text(team, &TEAM_SCORE, "team-score")?,
    })
}
