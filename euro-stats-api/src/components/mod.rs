pub mod coerce;
pub mod group_label;
