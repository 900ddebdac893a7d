//! Rate limit reset reported by the GitHub API.
//!
//! When a listing call is rejected for exceeding the quota, the gateway asks
//! the `/rate_limit` endpoint when the window resets so the warning logged
//! for that repository can say when a rerun is worthwhile.

use chrono::{DateTime, SecondsFormat, Utc};

/// When the exhausted rate limit window opens again.
///
/// # Example
///
/// ```
/// use mergefeed::github::RateLimitInfo;
///
/// let info = RateLimitInfo::from_epoch_seconds(1_700_000_000).expect("valid epoch");
/// assert_eq!(info.to_string(), "2023-11-14T22:13:20Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    resets_at: DateTime<Utc>,
}

impl RateLimitInfo {
    /// Converts the `reset` field of a rate limit response.
    ///
    /// Returns `None` when the value does not fit a calendar timestamp.
    #[must_use]
    pub fn from_epoch_seconds(reset: u64) -> Option<Self> {
        let seconds = i64::try_from(reset).ok()?;
        DateTime::from_timestamp(seconds, 0).map(|resets_at| Self { resets_at })
    }

    /// Instant the window resets.
    #[must_use]
    pub const fn resets_at(&self) -> DateTime<Utc> {
        self.resets_at
    }
}

impl std::fmt::Display for RateLimitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.resets_at.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}
