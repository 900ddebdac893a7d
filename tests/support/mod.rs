//! Shared test utilities.

use camino::Utf8PathBuf;
use mergefeed::{OctocrabGateway, PersonalAccessToken, SnapshotStore};
use serde_json::{Value, json};
use tempfile::TempDir;
use url::Url;
use wiremock::MockServer;

/// Builds a gateway pointed at the mock server's `/api/v3` root.
///
/// # Panics
///
/// Panics if the mock server URL cannot be used as an API base.
pub fn gateway_for(server: &MockServer) -> OctocrabGateway {
    let token = PersonalAccessToken::new("ghp_example")
        .unwrap_or_else(|error| panic!("token should be valid: {error}"));
    let api_base = Url::parse(&format!("{}/api/v3", server.uri()))
        .unwrap_or_else(|error| panic!("mock server URL should parse: {error}"));
    OctocrabGateway::for_token(&token, &api_base)
        .unwrap_or_else(|error| panic!("gateway should build: {error}"))
}

/// A pull request as the listing endpoint returns it.
pub fn pull_request_json(
    repository: &str,
    number: u64,
    merged_at: Option<&str>,
    updated_at: &str,
) -> Value {
    json!({
        "number": number,
        "title": format!("Change {number}"),
        "html_url": format!("https://github.com/{repository}/pull/{number}"),
        "state": "closed",
        "merged_at": merged_at,
        "updated_at": updated_at,
        "user": {
            "login": "octocat",
            "html_url": "https://github.com/octocat"
        }
    })
}

/// Snapshot store rooted in a temporary directory.
pub struct SnapshotFixture {
    _dir: TempDir,
    /// Store writing to `<temp>/data/data.json`.
    pub store: SnapshotStore,
}

impl SnapshotFixture {
    /// Creates an empty fixture; the snapshot file does not exist yet.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let dir = TempDir::new()
            .unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .unwrap_or_else(|path| panic!("temporary directory is not UTF-8: {}", path.display()));
        let store = SnapshotStore::new(root.join("data").join("data.json"));
        Self { _dir: dir, store }
    }

    /// Writes raw contents at the snapshot path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn seed(&self, contents: &str) {
        if let Some(parent) = self.store.path().parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|error| panic!("failed to create {parent}: {error}"));
        }
        std::fs::write(self.store.path(), contents)
            .unwrap_or_else(|error| panic!("failed to seed snapshot: {error}"));
    }

    /// Raw contents of the snapshot file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn contents(&self) -> String {
        std::fs::read_to_string(self.store.path())
            .unwrap_or_else(|error| panic!("failed to read snapshot: {error}"))
    }

    /// The snapshot file parsed as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the file is not valid JSON.
    pub fn document(&self) -> Value {
        serde_json::from_str(&self.contents())
            .unwrap_or_else(|error| panic!("snapshot is not valid JSON: {error}"))
    }
}
