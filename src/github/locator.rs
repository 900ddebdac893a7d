//! Identity wrappers for accounts, repositories, and tokens.

use url::Url;

use super::error::SourceError;

/// Public GitHub API root used when no other base is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Web root that repository URLs are derived from.
const WEB_BASE: &str = "https://github.com";

/// GitHub user or organisation whose repositories feed the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Validates that the account name is non-blank.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::MissingAccount` when the value is blank.
    pub fn new(value: &str) -> Result<Self, SourceError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SourceError::MissingAccount);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the account name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub(crate) fn repositories_path(&self) -> String {
        format!("/users/{}/repos", self.0)
    }
}

/// Repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    owner: String,
    name: String,
}

impl RepositoryLocator {
    /// Creates a locator from separate owner and name segments.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidRepositoryName` when either segment is
    /// empty or contains a slash.
    pub fn from_owner_repo(owner: &str, name: &str) -> Result<Self, SourceError> {
        let valid = |segment: &str| !segment.is_empty() && !segment.contains('/');
        if !valid(owner) || !valid(name) {
            return Err(SourceError::InvalidRepositoryName(format!("{owner}/{name}")));
        }
        Ok(Self {
            owner: owner.to_owned(),
            name: name.to_owned(),
        })
    }

    /// Parses a full repository name such as `octo/repo`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::InvalidRepositoryName` when the input is not
    /// exactly two non-empty segments separated by `/`.
    pub fn parse_full_name(full_name: &str) -> Result<Self, SourceError> {
        let (owner, name) = full_name
            .split_once('/')
            .ok_or_else(|| SourceError::InvalidRepositoryName(full_name.to_owned()))?;
        Self::from_owner_repo(owner, name)
    }

    /// Repository name without the owner.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Full `owner/repo` name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Browser URL of the repository.
    #[must_use]
    pub fn web_url(&self) -> String {
        format!("{WEB_BASE}/{}/{}", self.owner, self.name)
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!("/repos/{}/{}/pulls", self.owner, self.name)
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, SourceError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SourceError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Parses the configured API root, e.g. `https://api.github.com` or
/// `https://ghe.example.com/api/v3`.
///
/// # Errors
///
/// Returns `SourceError::InvalidUrl` when the input is not an absolute
/// `http(s)` URL with a host.
pub fn parse_api_base(input: &str) -> Result<Url, SourceError> {
    let parsed = Url::parse(input).map_err(|error| SourceError::InvalidUrl(error.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(SourceError::InvalidUrl(format!(
            "API base must be an http(s) URL with a host: {input}"
        )));
    }
    Ok(parsed)
}
