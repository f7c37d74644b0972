use crate::models::group_detail::GroupDetailRecord;
use crate::models::group_summary::GroupSummaryRecord;
use crate::models::players::PlayerRecord;

/// A record that can be written as one CSV line under a fixed header.
///
/// The header names must match the serialized field order.
pub trait CsvRecord {
    const HEADERS: &'static [&'static str];
}

impl CsvRecord for PlayerRecord {
    const HEADERS: &'static [&'static str] = &["name", "country", "goals"];
}

impl CsvRecord for GroupSummaryRecord {
    const HEADERS: &'static [&'static str] = &["group", "team", "points"];
}

impl CsvRecord for GroupDetailRecord {
    const HEADERS: &'static [&'static str] = &[
        "group",
        "rank",
        "team",
        "matches",
        "wins",
        "draws",
        "losses",
        "goalsRaw",
        "goalDifference",
        "points",
    ];
}

impl<T: CsvRecord> CsvRecord for &T {
    const HEADERS: &'static [&'static str] = T::HEADERS;
}
