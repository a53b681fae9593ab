use chrono::{DateTime, NaiveDate};

/// Format a visit date for display ("October 31, 2027").
///
/// The backend stores dates as RFC 3339 strings but plain `YYYY-MM-DD`
/// values show up too (form input); anything unparseable is shown raw.
pub fn format_visit_date(date: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return parsed.format("%B %-d, %Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return parsed.format("%B %-d, %Y").to_string();
    }
    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_visit_date("2027-10-31T15:24:00.000Z"), "October 31, 2027");
    }

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_visit_date("2024-01-01"), "January 1, 2024");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(format_visit_date("someday"), "someday");
    }
}
