use chrono::NaiveDate;

/// Backend wire format.
const WIRE_FORMAT: &str = "%m-%d-%Y";
/// HTML date-input format.
const INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), WIRE_FORMAT).ok()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

pub fn to_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

pub fn to_input_date(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Form-level check for the date field, which edits in input format.
pub fn is_valid_date(value: &str) -> bool {
    parse_input_date(value).is_some()
}
