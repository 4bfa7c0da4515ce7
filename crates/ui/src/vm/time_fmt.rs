use chrono::{DateTime, Local, TimeZone, Utc};

/// Submission time in the machine's local zone, e.g. `2023/11/14 23:13:20`.
#[must_use]
pub fn format_local_datetime(value: DateTime<Utc>) -> String {
    format_in_zone(value, &Local)
}

fn format_in_zone<Tz: TimeZone>(value: DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value
        .with_timezone(zone)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use listening_core::time::fixed_now;

    #[test]
    fn formats_in_the_given_zone() {
        let taipei = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_in_zone(fixed_now(), &taipei), "2023/11/15 06:13:20");
        assert_eq!(format_in_zone(fixed_now(), &Utc), "2023/11/14 22:13:20");
    }

    #[test]
    fn local_format_has_date_and_time() {
        let label = format_local_datetime(fixed_now());
        assert_eq!(label.len(), "2023/11/14 22:13:20".len());
        assert!(label.starts_with("2023/11/1"));
    }
}
