//! Calendar helpers. The host supplies "today"; everything here is pure
//! date arithmetic over `NaiveDate`.

use chrono::{Datelike, Duration, NaiveDate};

/// Format a date as the `YYYY-MM-DD` ledger key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a ledger key back into a date. Returns None for malformed keys.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// The calendar day immediately before `date`.
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

/// The last `n` calendar days ending at `today`, oldest first.
pub fn last_n_days(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..i64::from(n))
        .rev()
        .map(|i| today - Duration::days(i))
        .collect()
}

/// The 7 days of the week containing `today`, Sunday-start.
pub fn week_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    (0..7).map(|i| start + Duration::days(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn key_round_trips() {
        let d = date(2024, 3, 9);
        assert_eq!(date_key(d), "2024-03-09");
        assert_eq!(parse_date_key("2024-03-09"), Some(d));
        assert_eq!(parse_date_key("not a date"), None);
    }

    #[test]
    fn previous_day_crosses_month_boundary() {
        assert_eq!(previous_day(date(2024, 3, 1)), date(2024, 2, 29));
    }

    #[test]
    fn last_n_days_is_oldest_first_and_inclusive() {
        let days = last_n_days(date(2024, 1, 10), 3);
        assert_eq!(days, vec![date(2024, 1, 8), date(2024, 1, 9), date(2024, 1, 10)]);
    }

    #[test]
    fn week_starts_on_sunday() {
        // 2024-01-10 is a Wednesday; that week's Sunday is 2024-01-07.
        let week = week_dates(date(2024, 1, 10));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2024, 1, 7));
        assert_eq!(week[6], date(2024, 1, 13));
        // A Sunday is its own week start.
        assert_eq!(week_dates(date(2024, 1, 7))[0], date(2024, 1, 7));
    }
}
