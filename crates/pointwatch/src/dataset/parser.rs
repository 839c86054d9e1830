use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::DatasetError;
use crate::clearance::domain::{SwtdRecord, ValidationStatus};
use crate::format::date;

/// Imports submission records from the backend's CSV export. Headers and
/// cells are trimmed; a row with an unknown status or a broken shape fails
/// the import rather than being silently dropped.
pub fn records_from_csv<R: Read>(reader: R) -> Result<Vec<SwtdRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        let row = row?;
        let validation_status: ValidationStatus = row.status.parse()?;

        records.push(SwtdRecord {
            id: row.id,
            title: row.title,
            points: row.points,
            term_id: row.term_id,
            author_id: row.author_id,
            validation_status,
            venue: None,
            category: None,
            role: None,
            date: row.date.as_deref().and_then(normalize_date),
            time_started: None,
            time_finished: None,
            benefits: None,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Points")]
    points: f64,
    #[serde(rename = "Term ID")]
    term_id: i64,
    #[serde(rename = "Author ID")]
    author_id: i64,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Date", default, deserialize_with = "empty_string_as_none")]
    date: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Exports carry either the backend wire format or ISO dates; store the wire
/// form, and drop anything unparseable rather than failing the whole import.
fn normalize_date(value: &str) -> Option<String> {
    date::parse_wire_date(value)
        .or_else(|| date::parse_input_date(value))
        .map(date::to_wire_date)
}
