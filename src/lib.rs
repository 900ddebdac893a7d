//! Mergefeed library crate: a ranked feed of merged GitHub pull requests.
//!
//! A run lists an account's most recently pushed repositories, fetches each
//! repository's latest closed pull requests through Octocrab, merges them
//! into one ordered snapshot, and replaces the stored JSON document. The
//! display projection turns a stored snapshot into the "latest per team" or
//! "all merged" views.

pub mod config;
pub mod feed;
pub mod github;
pub mod store;

pub use config::{MergefeedConfig, OperationMode, TOKEN_ENV_VAR, resolve_token};
pub use feed::{
    FeedError, FeedPipeline, PipelineSettings, PullRequestRecord, RunSummary, Snapshot, ViewMode,
    project,
};
pub use github::{
    AccountName, OctocrabGateway, PersonalAccessToken, PullRequestGateway, RepositoryGateway,
    SourceError,
};
pub use store::SnapshotStore;
