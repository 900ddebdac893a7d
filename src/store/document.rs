//! On-disk JSON layout of a snapshot.
//!
//! ```json
//! {
//!   "last_update_at": "2024-01-03T10:00:00Z",
//!   "user": "microsoft",
//!   "data": [{ "team": "microsoft/a", "team_url": "...", "number": 7, ... }]
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::feed::{PullRequestRecord, RepositoryRef, Snapshot};

/// Top-level snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// When the snapshot was generated.
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_update_at: DateTime<Utc>,
    /// Account whose repositories were enumerated.
    pub user: String,
    /// Records in canonical order.
    pub data: Vec<PullRequestEntry>,
}

/// One pull request as stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestEntry {
    /// Repository `owner/repo` name.
    pub team: String,
    /// Repository browser URL.
    pub team_url: String,
    /// Pull request number.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Pull request browser URL.
    pub url: String,
    /// Merge time; serialised as `null` when the pull request was not merged.
    #[serde(
        serialize_with = "serialize_optional_timestamp",
        deserialize_with = "deserialize_optional_timestamp",
        default
    )]
    pub merged_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Author login.
    pub user_id: String,
    /// Author profile URL.
    pub user_url: String,
    /// Repository star count, when the run collected it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
}

impl From<&PullRequestRecord> for PullRequestEntry {
    fn from(record: &PullRequestRecord) -> Self {
        Self {
            team: record.repository.name().to_owned(),
            team_url: record.repository.url().to_owned(),
            number: record.number,
            title: record.title.clone(),
            url: record.url.clone(),
            merged_at: record.merged_at,
            updated_at: record.updated_at,
            user_id: record.author_id.clone(),
            user_url: record.author_url.clone(),
            stars: record.popularity(),
        }
    }
}

impl From<PullRequestEntry> for PullRequestRecord {
    fn from(entry: PullRequestEntry) -> Self {
        Self {
            repository: RepositoryRef::new(entry.team, entry.team_url)
                .with_popularity(entry.stars),
            number: entry.number,
            title: entry.title,
            url: entry.url,
            merged_at: entry.merged_at,
            updated_at: entry.updated_at,
            author_id: entry.user_id,
            author_url: entry.user_url,
        }
    }
}

impl From<&Snapshot> for SnapshotDocument {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            last_update_at: snapshot.generated_at,
            user: snapshot.account.clone(),
            data: snapshot.records.iter().map(PullRequestEntry::from).collect(),
        }
    }
}

impl From<SnapshotDocument> for Snapshot {
    fn from(document: SnapshotDocument) -> Self {
        Self {
            generated_at: document.last_update_at,
            account: document.user,
            records: document.data.into_iter().map(PullRequestRecord::from).collect(),
        }
    }
}

impl SnapshotDocument {
    /// Pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the encoder error; none is expected for well-formed records.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Parses a document.
    ///
    /// # Errors
    ///
    /// Returns the decoder error for malformed JSON or timestamps.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}

#[expect(
    clippy::ref_option,
    reason = "serde serialize_with passes a reference to the field"
)]
fn serialize_optional_timestamp<S>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(value) => serializer.serialize_str(&format_timestamp(value)),
        None => serializer.serialize_none(),
    }
}

fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| {
            DateTime::parse_from_rfc3339(value.trim())
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(<D::Error as serde::de::Error>::custom)
        })
        .transpose()
}
