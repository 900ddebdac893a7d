//! Run configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach, lowest to highest
//! precedence:
//!
//! 1. **Defaults** – built-in values matching the published feed
//! 2. **Configuration file** – `.mergefeed.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `MERGEFEED_ACCOUNT`, `MERGEFEED_OUTPUT`, ...
//! 4. **Command-line arguments** – `--account`, `--output`, `--show`, ...
//!
//! ```toml
//! account = "microsoft"
//! max_repositories = 10
//! max_pull_requests = 100
//! concurrency = 4
//! output = "data/data.json"
//! with_stars = true
//! ```
//!
//! The access token is not a configuration value; it is only read from
//! `GITHUB_TOKEN`.

use std::env;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::feed::{
    FeedError, NoEnrichment, PipelineSettings, RepositoryEnrichment, StarCount, ViewMode,
};
use crate::github::{AccountName, DEFAULT_API_BASE, MAX_PER_PAGE, PersonalAccessToken, parse_api_base};

/// Environment variable holding the GitHub personal access token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// What the binary does once configuration is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Rebuild and persist the snapshot.
    Generate,
    /// Print the display projection of the stored snapshot.
    Show,
}

/// Configuration for a feed run.
///
/// # Example
///
/// ```no_run
/// use mergefeed::MergefeedConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MergefeedConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration out of range");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MERGEFEED",
    discovery(
        dotfile_name = ".mergefeed.toml",
        config_file_name = "mergefeed.toml",
        app_name = "mergefeed"
    )
)]
pub struct MergefeedConfig {
    /// GitHub user or organisation whose repositories are enumerated.
    #[ortho_config(cli_short = 'a')]
    pub account: String,

    /// Repositories requested from the account listing (1..=100).
    #[ortho_config(cli_short = 'r')]
    pub max_repositories: u8,

    /// Closed pull requests requested per repository (1..=100).
    #[ortho_config(cli_short = 'p')]
    pub max_pull_requests: u8,

    /// Pull request listings fetched at the same time.
    #[ortho_config()]
    pub concurrency: usize,

    /// Snapshot document path.
    #[ortho_config(cli_short = 'o')]
    pub output: String,

    /// API root; GitHub Enterprise uses `https://host/api/v3`.
    #[ortho_config(cli_short = 'b')]
    pub api_base: String,

    /// Records each repository's star count in the snapshot.
    #[ortho_config()]
    pub with_stars: bool,

    /// Prints the stored snapshot instead of rebuilding it.
    #[ortho_config(cli_short = 's')]
    pub show: bool,

    /// With `show`, lists every merged pull request instead of the latest
    /// one per repository.
    #[ortho_config(cli_short = 'A')]
    pub all: bool,

    /// Log verbosity: 0 info, 1 debug, 2 or more trace. `RUST_LOG` wins.
    #[ortho_config(cli_short = 'v')]
    pub verbose: u8,
}

impl Default for MergefeedConfig {
    fn default() -> Self {
        Self {
            account: "microsoft".to_owned(),
            max_repositories: 10,
            max_pull_requests: 100,
            concurrency: 4,
            output: "data/data.json".to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            with_stars: false,
            show: false,
            all: false,
            verbose: 0,
        }
    }
}

impl MergefeedConfig {
    /// Checks ranges and formats before anything touches the network.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Configuration`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FeedError> {
        self.account_name()?;
        check_page_size("max_repositories", self.max_repositories)?;
        check_page_size("max_pull_requests", self.max_pull_requests)?;
        if self.concurrency == 0 {
            return Err(configuration("concurrency must be at least 1"));
        }
        if self.output.trim().is_empty() {
            return Err(configuration("output path must not be empty"));
        }
        self.api_base_url()?;
        Ok(())
    }

    /// Validated account name.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Configuration`] when the account is blank.
    pub fn account_name(&self) -> Result<AccountName, FeedError> {
        AccountName::new(&self.account).map_err(|error| configuration(&error.to_string()))
    }

    /// Parsed API root.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Configuration`] for a non-HTTP or malformed URL.
    pub fn api_base_url(&self) -> Result<Url, FeedError> {
        parse_api_base(&self.api_base).map_err(|error| configuration(&error.to_string()))
    }

    /// Snapshot document path.
    #[must_use]
    pub fn output_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.output.trim())
    }

    /// Page sizes and fan-out for the pipeline.
    #[must_use]
    pub const fn settings(&self) -> PipelineSettings {
        PipelineSettings {
            max_repositories: self.max_repositories,
            max_pull_requests: self.max_pull_requests,
            concurrency: self.concurrency,
        }
    }

    /// Generate unless `show` is set.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.show {
            OperationMode::Show
        } else {
            OperationMode::Generate
        }
    }

    /// View used by `show`.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        ViewMode::from_latest_only(!self.all)
    }

    /// Enrichment applied to enumerated repositories.
    #[must_use]
    pub const fn enrichment(&self) -> &'static dyn RepositoryEnrichment {
        if self.with_stars {
            &StarCount
        } else {
            &NoEnrichment
        }
    }

    /// Default tracing filter directive for the configured verbosity.
    #[must_use]
    pub const fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Reads the access token from [`TOKEN_ENV_VAR`].
///
/// # Errors
///
/// Returns [`FeedError::MissingToken`] when the variable is unset, not valid
/// Unicode, or blank.
pub fn resolve_token() -> Result<PersonalAccessToken, FeedError> {
    let missing = FeedError::MissingToken {
        variable: TOKEN_ENV_VAR,
    };
    let value = env::var(TOKEN_ENV_VAR).map_err(|_| missing.clone())?;
    PersonalAccessToken::new(value).map_err(|_| missing)
}

fn check_page_size(field: &str, value: u8) -> Result<(), FeedError> {
    if value == 0 || value > MAX_PER_PAGE {
        return Err(configuration(&format!(
            "{field} must be between 1 and {MAX_PER_PAGE}, got {value}"
        )));
    }
    Ok(())
}

fn configuration(message: &str) -> FeedError {
    FeedError::Configuration {
        message: message.to_owned(),
    }
}

#[cfg(test)]
mod tests;
