//! Merges per-repository contributions into one ordered snapshot.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::record::{PullRequestRecord, Snapshot};

/// Source of the snapshot generation time.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the wrapped instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Canonical snapshot ordering.
///
/// Most recently updated first; ties fall back to repository name and then
/// pull request number, both ascending.
#[must_use]
pub fn canonical_order(left: &PullRequestRecord, right: &PullRequestRecord) -> Ordering {
    right
        .updated_at
        .cmp(&left.updated_at)
        .then_with(|| left.repository.name().cmp(right.repository.name()))
        .then_with(|| left.number.cmp(&right.number))
}

/// Concatenates contributions and sorts them canonically.
///
/// The result does not depend on the order contributions arrive in.
#[must_use]
pub fn aggregate(
    account: &str,
    per_repository: Vec<Vec<PullRequestRecord>>,
    clock: &dyn Clock,
) -> Snapshot {
    let mut records: Vec<PullRequestRecord> = per_repository.into_iter().flatten().collect();
    records.sort_by(canonical_order);
    Snapshot {
        generated_at: clock.now(),
        account: account.to_owned(),
        records,
    }
}
