//! The merged pull request feed.
//!
//! A run enumerates an account's repositories, collects each repository's
//! recently closed pull requests, and aggregates them into a [`Snapshot`].
//! [`project`] derives the display views from a stored snapshot.

pub mod aggregator;
pub mod collector;
pub mod enrichment;
pub mod enumerator;
pub mod error;
pub mod pipeline;
pub mod projection;
pub mod record;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use aggregator::{Clock, FixedClock, SystemClock, aggregate, canonical_order};
pub use collector::{CollectionReport, PullRequestCollector};
pub use enrichment::{NoEnrichment, RepositoryEnrichment, StarCount};
pub use enumerator::RepositoryEnumerator;
pub use error::{CollectionFailure, FeedError};
pub use pipeline::{FeedPipeline, PipelineOutcome, PipelineSettings, RunSummary};
pub use projection::{ViewMode, project};
pub use record::{PullRequestRecord, RepositoryRef, Snapshot};
