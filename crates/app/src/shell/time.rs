use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MINUTE_SECONDS: u64 = 60;
const HOUR_SECONDS: u64 = 60 * 60;
const DAY_SECONDS: u64 = 60 * 60 * 24;

pub fn unix_now_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_secs()
}

/// Compact age label for list previews and message bubbles.
///
/// Elapsed-time buckets rather than calendar boundaries, so the label never
/// depends on the local timezone.
pub fn relative_age_label(sent_at_unix_seconds: u64, now_unix_seconds: u64) -> String {
    let age_seconds = now_unix_seconds.saturating_sub(sent_at_unix_seconds);

    if age_seconds < MINUTE_SECONDS {
        "Now".to_string()
    } else if age_seconds < HOUR_SECONDS {
        format!("{}m", age_seconds / MINUTE_SECONDS)
    } else if age_seconds < DAY_SECONDS {
        format!("{}h", age_seconds / HOUR_SECONDS)
    } else {
        format!("{}d", age_seconds / DAY_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_bucket_by_elapsed_time() {
        let now = 1_000_000;

        assert_eq!(relative_age_label(now, now), "Now");
        assert_eq!(relative_age_label(now - 59, now), "Now");
        assert_eq!(relative_age_label(now - 60, now), "1m");
        assert_eq!(relative_age_label(now - 59 * 60, now), "59m");
        assert_eq!(relative_age_label(now - 60 * 60, now), "1h");
        assert_eq!(relative_age_label(now - 5 * 60 * 60, now), "5h");
        assert_eq!(relative_age_label(now - 3 * 24 * 60 * 60, now), "3d");
    }

    #[test]
    fn future_timestamps_clamp_to_now() {
        assert_eq!(relative_age_label(2_000_000, 1_000_000), "Now");
    }
}
