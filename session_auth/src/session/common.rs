use chrono::Utc;

/// Current time as fractional seconds since the epoch, millisecond resolution.
pub(super) fn now_secs() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
