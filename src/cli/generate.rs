//! Snapshot regeneration: the default operation mode.

use std::io::{self, Write};

use mergefeed::feed::{Clock, SystemClock};
use mergefeed::{
    FeedError, FeedPipeline, MergefeedConfig, OctocrabGateway, PersonalAccessToken,
    PullRequestGateway, RepositoryGateway, SnapshotStore, SourceError, resolve_token,
};
use tracing::info;
use url::Url;

use super::output::{write_run_summary, write_status};

/// Rebuilds the snapshot using the Octocrab gateway.
///
/// # Errors
///
/// Returns [`FeedError::MissingToken`] before any request when `GITHUB_TOKEN`
/// is unusable, [`FeedError::Enumeration`] when the repository listing fails,
/// and [`FeedError::SnapshotWrite`] when the snapshot cannot be replaced.
pub async fn run(config: &MergefeedConfig) -> Result<(), FeedError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabGateway::for_token, &SystemClock, &mut stdout).await
}

/// Rebuilds the snapshot using a custom gateway builder.
///
/// This function is exposed for testing with fake gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &MergefeedConfig,
    build_gateway: F,
    clock: &dyn Clock,
    writer: &mut W,
) -> Result<(), FeedError>
where
    G: RepositoryGateway + PullRequestGateway,
    F: FnOnce(&PersonalAccessToken, &Url) -> Result<G, SourceError>,
    W: Write,
{
    let token = resolve_token()?;
    let account = config.account_name()?;
    let api_base = config.api_base_url()?;

    let gateway = build_gateway(&token, &api_base).map_err(|error| FeedError::Configuration {
        message: format!("failed to build GitHub client: {error}"),
    })?;
    let store = SnapshotStore::new(config.output_path());
    let pipeline = FeedPipeline::new(&gateway, &gateway, config.settings())
        .with_enrichment(config.enrichment())
        .with_clock(clock);

    info!(account = account.as_str(), api_base = %api_base, "run started");
    let summary = pipeline.run(&account, &store).await?;

    write_run_summary(writer, &summary)?;
    write_status(writer, 0)
}
