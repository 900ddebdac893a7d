//! Record builders for tests that exercise the feed from outside the crate.

use chrono::{DateTime, TimeZone, Utc};

use super::record::{PullRequestRecord, RepositoryRef};

/// Returns 2024-01-`day` at `hour`:00:00 UTC, or the Unix epoch when the
/// pair is out of range.
///
/// ```
/// use mergefeed::feed::test_support::january;
///
/// assert_eq!(january(3, 10).to_rfc3339(), "2024-01-03T10:00:00+00:00");
/// ```
#[must_use]
pub fn january(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Builds a merged record for `repository` (an `owner/repo` name).
#[must_use]
pub fn merged_record(
    repository: &str,
    number: u64,
    merged_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> PullRequestRecord {
    PullRequestRecord {
        repository: RepositoryRef::new(repository, format!("https://github.com/{repository}")),
        number,
        title: format!("{repository} #{number}"),
        url: format!("https://github.com/{repository}/pull/{number}"),
        merged_at: Some(merged_at),
        updated_at,
        author_id: "octocat".to_owned(),
        author_url: "https://github.com/octocat".to_owned(),
    }
}

/// Builds a record that was closed without merging.
#[must_use]
pub fn unmerged_record(
    repository: &str,
    number: u64,
    updated_at: DateTime<Utc>,
) -> PullRequestRecord {
    PullRequestRecord {
        merged_at: None,
        ..merged_record(repository, number, updated_at, updated_at)
    }
}
