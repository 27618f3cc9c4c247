use chrono::{SecondsFormat, TimeZone, Utc};

pub fn now_ts() -> i64 {
    Utc::now().timestamp()
}

/// Format unix seconds the way clients emit dates: RFC 3339, UTC, millisecond
/// precision, `Z` suffix. Out-of-range values collapse to the epoch.
pub fn ts_to_rfc3339(ts: i64) -> String {
    Utc.timestamp_opt(ts, 0)
        .single()
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
