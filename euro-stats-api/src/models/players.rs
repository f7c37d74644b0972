use lazy_static::lazy_static;
use log::{trace, warn};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use super::{field_text, required_text, Extracted};
use crate::components::coerce;
use crate::error::RecordError;

lazy_static! {
    static ref TOP_PLAYER: Selector = Selector::parse("div.top-player").unwrap();
    static ref PLAYER_NAME: Selector = Selector::parse("div.player-name").unwrap();
    static ref PLAYER_COUNTRY: Selector = Selector::parse("div.player-country-name").unwrap();
    static ref PLAYER_SCORE: Selector = Selector::parse("div.player-score").unwrap();
}

pub type PlayerList = Extracted<PlayerRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub country: String,
    /// `None` when the score field is missing its leading number
    pub goals: Option<u32>,
}

pub fn parse(html: &Html) -> PlayerList {
    let mut res = PlayerList::default();

    for block in html.select(&TOP_PLAYER) {
        match parse_block(block) {
            Ok(v) => res.records.push(v),
            Err(e) => {
                warn!("Dropping top-player block: {}", e);
                res.dropped += 1;
            }
        }
    }

    trace!("Extracted {} players ({} dropped)", res.len(), res.dropped);
    res
}

fn parse_block(block: ElementRef) -> Result<PlayerRecord, RecordError> {
    let name = required_text(block, &PLAYER_NAME, "player-name")?
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let country = required_text(block, &PLAYER_COUNTRY, "player-country-name")?;
    let score = field_text(block, &PLAYER_SCORE, "player-score")?;

    let goals = coerce::leading_int(&score);
    if goals.is_none() {
        trace!("No goal count in '{}' for {}", score, name);
    }

    Ok(PlayerRecord {
        name,
        country,
        goals,
    })
}
