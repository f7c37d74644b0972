use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;
use serde::Serialize;

use crate::stats::{CountryGoals, GroupStatsMap};
use crate::traits::CsvRecord;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatsRow<'a> {
    pub group: &'a str,
    pub total_matches: f64,
    pub total_goals: f64,
    pub avg_goals_per_match: Option<f64>,
}

impl CsvRecord for GroupStatsRow<'_> {
    const HEADERS: &'static [&'static str] = &["group", "totalMatches", "totalGoals", "avgGoalsPerMatch"];
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryGoalsRow<'a> {
    pub country: &'a str,
    pub total_goals: u64,
}

impl CsvRecord for CountryGoalsRow<'_> {
    const HEADERS: &'static [&'static str] = &["country", "totalGoals"];
}

pub fn group_stats_rows(stats: &GroupStatsMap) -> Vec<GroupStatsRow<'_>> {
    stats
        .iter()
        .map(|(group, v)| GroupStatsRow {
            group,
            total_matches: v.total_matches,
            total_goals: v.total_goals,
            avg_goals_per_match: v.avg_goals_per_match,
        })
        .collect()
}

pub fn country_goals_rows(goals: &CountryGoals) -> Vec<CountryGoalsRow<'_>> {
    goals
        .by_country
        .iter()
        .map(|(country, total_goals)| CountryGoalsRow {
            country,
            total_goals: *total_goals,
        })
        .collect()
}

/// Writes a header line followed by one line per record. Empty collections
/// still get the header. `None` values become empty fields.
pub fn write_csv<W, T>(writer: W, records: impl IntoIterator<Item = T>) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize + CsvRecord,
{
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    out.write_record(T::HEADERS)?;
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;

    Ok(())
}

pub fn to_csv_string<T>(records: impl IntoIterator<Item = T>) -> anyhow::Result<String>
where
    T: Serialize + CsvRecord,
{
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes `<dir>/<name>.csv`, creating `dir` if needed.
pub fn export_to_dir<T>(
    dir: &Path,
    name: &str,
    records: impl IntoIterator<Item = T>,
) -> anyhow::Result<PathBuf>
where
    T: Serialize + CsvRecord,
{
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(format!("{}.csv", name));
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(file, records).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {}", path.display());
    Ok(path)
}
