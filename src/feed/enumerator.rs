//! Resolves an account into the repositories a run collects from.

use tracing::{debug, warn};

use crate::github::{AccountName, ListParams, RepositoryGateway, RepositoryLocator, SourceError};

use super::enrichment::RepositoryEnrichment;
use super::record::RepositoryRef;

/// Lists an account's most recently pushed repositories.
///
/// Reads a single page of at most `max_count` repositories. Errors are
/// returned to the caller unchanged; a run cannot continue without them.
pub struct RepositoryEnumerator<'a, Gateway>
where
    Gateway: RepositoryGateway,
{
    gateway: &'a Gateway,
    enrichment: &'a dyn RepositoryEnrichment,
}

impl<'a, Gateway> RepositoryEnumerator<'a, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Creates an enumerator that decorates repositories with `enrichment`.
    #[must_use]
    pub const fn new(gateway: &'a Gateway, enrichment: &'a dyn RepositoryEnrichment) -> Self {
        Self {
            gateway,
            enrichment,
        }
    }

    /// Returns the account's repositories in listing order.
    ///
    /// Entries whose name is not `owner/repo` are skipped with a warning, and
    /// a name listed twice is kept once.
    ///
    /// # Errors
    ///
    /// Returns the gateway's [`SourceError`] when the listing call fails or
    /// `max_count` is out of range.
    pub async fn enumerate(
        &self,
        account: &AccountName,
        max_count: u8,
    ) -> Result<Vec<RepositoryRef>, SourceError> {
        let listing = self
            .gateway
            .list_repositories(account, &ListParams::first_page(max_count))
            .await?;

        let mut repositories: Vec<RepositoryRef> = Vec::with_capacity(listing.len());
        for entry in listing.iter().take(usize::from(max_count)) {
            let locator = match RepositoryLocator::parse_full_name(&entry.full_name) {
                Ok(locator) => locator,
                Err(error) => {
                    warn!(repository = %entry.full_name, %error, "skipping repository with unusable name");
                    continue;
                }
            };
            if repositories
                .iter()
                .any(|known| known.name() == entry.full_name)
            {
                continue;
            }
            let repository = RepositoryRef::from_locator(&locator);
            repositories.push(self.enrichment.enrich(repository, entry));
        }

        debug!(
            account = account.as_str(),
            count = repositories.len(),
            "enumerated repositories"
        );
        Ok(repositories)
    }
}
