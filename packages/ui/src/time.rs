use chrono::{DateTime, Utc};

/// Inbox-style age of `then` as seen at `now`: "Just now", "5m ago",
/// "3h ago", "2d ago", then the plain date after a week.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

/// `YYYY-MM-DD`, the value format of date inputs.
pub fn date_input_value(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse a date input's value as midnight UTC. Empty means "no date".
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let ago = |d: Duration| relative_time(now - d, now);
        assert_eq!(ago(Duration::seconds(30)), "Just now");
        assert_eq!(ago(Duration::minutes(5)), "5m ago");
        assert_eq!(ago(Duration::minutes(59)), "59m ago");
        assert_eq!(ago(Duration::hours(3)), "3h ago");
        assert_eq!(ago(Duration::days(2)), "2d ago");
        assert_eq!(ago(Duration::days(9)), "2024-05-01");
    }

    #[test]
    fn test_future_timestamps_are_just_now() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now + Duration::minutes(3), now), "Just now");
    }

    #[test]
    fn test_date_input_round_trip() {
        let parsed = parse_date_input("2024-05-01").unwrap();
        assert_eq!(date_input_value(Some(parsed)), "2024-05-01");
        assert!(parse_date_input("").is_none());
        assert_eq!(date_input_value(None), "");
    }
}
