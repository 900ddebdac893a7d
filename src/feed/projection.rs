//! Display views over a snapshot's records.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::record::PullRequestRecord;

/// Which merged pull requests a view shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The most recently merged pull request of each repository.
    #[default]
    LatestPerTeam,
    /// Every merged pull request.
    All,
}

impl ViewMode {
    /// Maps a "latest only" switch onto a mode.
    #[must_use]
    pub const fn from_latest_only(latest_only: bool) -> Self {
        if latest_only {
            Self::LatestPerTeam
        } else {
            Self::All
        }
    }
}

/// Projects records into the requested view.
///
/// Unmerged records never appear. The output is ordered by merge time, newest
/// first, and projecting an already projected slice returns it unchanged.
#[must_use]
pub fn project(records: &[PullRequestRecord], mode: ViewMode) -> Vec<PullRequestRecord> {
    let merged = merged_newest_first(records);
    match mode {
        ViewMode::All => merged,
        ViewMode::LatestPerTeam => latest_per_team(merged),
    }
}

fn merged_newest_first(records: &[PullRequestRecord]) -> Vec<PullRequestRecord> {
    let mut merged: Vec<PullRequestRecord> = records
        .iter()
        .filter(|record| record.is_merged())
        .cloned()
        .collect();
    merged.sort_by(merge_order);
    merged
}

fn merge_order(left: &PullRequestRecord, right: &PullRequestRecord) -> Ordering {
    right
        .merged_at
        .cmp(&left.merged_at)
        .then_with(|| left.repository.name().cmp(right.repository.name()))
        .then_with(|| left.number.cmp(&right.number))
}

// Input must already be in merge order; the first record per URL wins.
fn latest_per_team(merged: Vec<PullRequestRecord>) -> Vec<PullRequestRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    merged
        .into_iter()
        .filter(|record| seen.insert(record.repository.url().to_owned()))
        .collect()
}
