use chrono::{DateTime, Utc};

/// Relative age of a timestamp in whole (truncated) units: "Just now" under
/// an hour, then hours up to a day, then days. Timestamps in the future
/// read as "Just now".
pub fn format_time_ago(now: DateTime<Utc>, timestamp: DateTime<Utc>) -> String {
    let hours = now.signed_duration_since(timestamp).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

/// Whole amount with comma thousands separators, e.g. `75,000`
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-24T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_under_an_hour() {
        assert_eq!(format_time_ago(now(), now()), "Just now");
        assert_eq!(format_time_ago(now(), now() - Duration::minutes(59)), "Just now");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_time_ago(now(), now() - Duration::minutes(60)), "1h ago");
        assert_eq!(format_time_ago(now(), now() - Duration::minutes(90)), "1h ago");
        assert_eq!(format_time_ago(now(), now() - Duration::hours(23)), "23h ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(format_time_ago(now(), now() - Duration::hours(24)), "1d ago");
        assert_eq!(format_time_ago(now(), now() - Duration::hours(25)), "1d ago");
        assert_eq!(format_time_ago(now(), now() - Duration::hours(71)), "2d ago");
    }

    #[test]
    fn test_future_timestamp() {
        assert_eq!(format_time_ago(now(), now() + Duration::hours(3)), "Just now");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1,000");
        assert_eq!(format_amount(75000), "75,000");
        assert_eq!(format_amount(250000), "250,000");
        assert_eq!(format_amount(1234567), "1,234,567");
    }
}
