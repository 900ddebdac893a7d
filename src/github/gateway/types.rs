//! Query parameters shared by the listing gateways.

use crate::github::error::SourceError;

/// Largest page size GitHub accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Repository listings are ordered by most recent push.
pub(crate) const REPOSITORY_SORT: &str = "pushed";

/// Pull request listings are ordered by most recent update, descending.
pub(crate) const PULL_REQUEST_SORT: &str = "updated";

/// Single-page listing request.
///
/// Every listing in a run reads exactly one page; callers never follow
/// `Link: rel="next"` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (1..=100).
    pub per_page: u8,
}

impl ListParams {
    /// First page with the given page size.
    #[must_use]
    pub const fn first_page(per_page: u8) -> Self {
        Self { page: 1, per_page }
    }

    /// Checks the parameters against GitHub's limits.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidPagination` when `page` is zero or
    /// `per_page` is outside `1..=100`.
    pub fn validate(&self) -> Result<(), SourceError> {
        if self.page == 0 {
            return Err(SourceError::InvalidPagination {
                message: "page must be at least 1".to_owned(),
            });
        }

        if self.per_page == 0 {
            return Err(SourceError::InvalidPagination {
                message: "per_page must be at least 1".to_owned(),
            });
        }

        if self.per_page > MAX_PER_PAGE {
            return Err(SourceError::InvalidPagination {
                message: format!("per_page must not exceed {MAX_PER_PAGE}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ListParams;
    use crate::github::error::SourceError;

    #[rstest]
    #[case::smallest(1)]
    #[case::largest(100)]
    fn accepts_page_sizes_within_limits(#[case] per_page: u8) {
        assert_eq!(ListParams::first_page(per_page).validate(), Ok(()));
    }

    #[rstest]
    #[case::zero_page(ListParams { page: 0, per_page: 10 })]
    #[case::zero_per_page(ListParams { page: 1, per_page: 0 })]
    #[case::over_maximum(ListParams { page: 1, per_page: 101 })]
    fn rejects_out_of_range_params(#[case] params: ListParams) {
        let result = params.validate();
        assert!(
            matches!(result, Err(SourceError::InvalidPagination { .. })),
            "expected InvalidPagination, got {result:?}"
        );
    }
}
