//! Date and time formatting for list and detail views

use chrono::{DateTime, Utc};

/// Example: 2024-03-15T14:02:26.123Z -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(&parse("2024-03-15T14:02:26.123Z")),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime(&parse("2024-12-31T23:59:59Z")),
            "31.12.2024 23:59:59"
        );
        // always rendered in UTC
        assert_eq!(
            format_datetime(&parse("2024-03-16T01:00:00+02:00")),
            "15.03.2024 23:00:00"
        );
    }
}
