use chrono::{NaiveTime, Timelike};

pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Renders a backend `HH:MM` time as the 12-hour string the pages display.
/// Blank or malformed input renders as an empty string, matching how the
/// pages treat missing times.
pub fn format_clock_time(value: &str) -> String {
    let Some(time) = parse_clock(value) else {
        return String::new();
    };

    let meridiem = if time.hour() >= 12 { "PM" } else { "AM" };
    let adjusted = match time.hour() % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{}:{:02} {}", adjusted, time.minute(), meridiem)
}

/// A submission may not finish before it starts.
pub fn time_range_valid(started: &str, finished: &str) -> bool {
    matches!(
        (parse_clock(started), parse_clock(finished)),
        (Some(start), Some(finish)) if start <= finish
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon_times_render_with_pm() {
        assert_eq!(format_clock_time("13:05"), "1:05 PM");
        assert_eq!(format_clock_time("23:59"), "11:59 PM");
    }

    #[test]
    fn midnight_and_noon_render_as_twelve() {
        assert_eq!(format_clock_time("00:30"), "12:30 AM");
        assert_eq!(format_clock_time("12:00"), "12:00 PM");
    }

    #[test]
    fn malformed_input_renders_empty() {
        assert_eq!(format_clock_time(""), "");
        assert_eq!(format_clock_time("25:00"), "");
        assert_eq!(format_clock_time("noonish"), "");
    }

    #[test]
    fn range_check_rejects_backwards_times() {
        assert!(time_range_valid("09:00", "17:00"));
        assert!(time_range_valid("09:00", "09:00"));
        assert!(!time_range_valid("17:00", "09:00"));
        assert!(!time_range_valid("", "09:00"));
    }
}
