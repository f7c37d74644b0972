use chrono::{DateTime, Utc};
use log::{info, warn};
use scraper::Html;
use serde::{Deserialize, Serialize};

pub use crate::cache::Cache;
pub use crate::config::SourceConfig;
pub use crate::error::{Error, RecordError, Result};
use crate::models::group_detail::GroupDetailList;
use crate::models::group_summary::GroupSummaryList;
use crate::models::players::PlayerList;
use crate::stats::GroupStatsMap;
pub use chrono;
pub use scraper;

pub mod cache;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod fetch;
pub mod models;
pub mod stats;
pub mod traits;
pub mod view;

#[cfg(test)]
mod tests;

pub type SnapshotCache = Cache<Snapshot>;

/// Everything extracted from one fetch of the standings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub players: PlayerList,
    pub group_summaries: GroupSummaryList,
    pub group_details: GroupDetailList,
}

impl Snapshot {
    /// Runs all three extractors over an already parsed page.
    pub fn from_html(url: &str, html: &Html) -> Self {
        let snapshot = Self {
            url: url.to_string(),
            fetched_at: Utc::now(),
            players: models::players::parse(html),
            group_summaries: models::group_summary::parse(html),
            group_details: models::group_detail::parse(html),
        };

        if snapshot.dropped() > 0 {
            warn!("Dropped {} malformed records from {}", snapshot.dropped(), url);
        }

        snapshot
    }

    /// Total number of blocks or rows skipped by the extractors.
    pub fn dropped(&self) -> usize {
        self.players.dropped + self.group_summaries.dropped + self.group_details.dropped
    }

    pub fn group_stats(&self) -> GroupStatsMap {
        stats::aggregate(&self.group_details.records)
    }
}

/// Fetches, parses and extracts the configured page.
pub fn load(config: &SourceConfig) -> Result<Snapshot> {
    let body = fetch::send_request(config)?;
    let html = document::parse(&body)?;
    let snapshot = Snapshot::from_html(&config.url, &html);

    info!(
        "Loaded {} players, {} group standings and {} group table rows",
        snapshot.players.len(),
        snapshot.group_summaries.len(),
        snapshot.group_details.len()
    );

    Ok(snapshot)
}

/// Like [`load`], but reuses the cached snapshot for the same URL.
pub fn load_cached<'a>(cache: &'a mut SnapshotCache, config: &SourceConfig) -> Result<&'a Snapshot> {
    cache.get_or_try_insert_with(&config.url, || load(config))
}
