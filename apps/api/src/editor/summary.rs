//! Compact one-line summary of a list entry, shown next to its Edit/Delete actions.

use crate::resume::{Record, Schema};

/// Labels worth showing in the compact list view.
pub const SUMMARY_LABELS: &[&str] = &[
    "Skill",
    "Level",
    "College",
    "Degree",
    "Company Name",
    "Position Title",
    "Project Name",
];

pub const SUMMARY_SEPARATOR: &str = " · ";

/// Non-empty values of summary-worthy labels, in schema order.
pub fn summary_parts(schema: &Schema, record: &Record) -> Vec<String> {
    schema
        .labels()
        .filter(|label| SUMMARY_LABELS.contains(label))
        .map(|label| record.get(label))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn summary_line(schema: &Schema, record: &Record) -> String {
    summary_parts(schema, record).join(SUMMARY_SEPARATOR)
}
