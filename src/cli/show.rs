//! Prints the display projection of the stored snapshot.

use std::io::{self, Write};

use mergefeed::{FeedError, MergefeedConfig, SnapshotStore, project};

use super::output::write_projection;

/// Reads the snapshot at the configured output path and prints its view.
///
/// # Errors
///
/// Returns [`FeedError::SnapshotRead`] when the snapshot is missing or
/// malformed, and [`FeedError::Io`] when stdout cannot be written.
pub fn run(config: &MergefeedConfig) -> Result<(), FeedError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(config, &mut stdout)
}

/// Prints the view to `writer`.
pub fn run_with_writer<W: Write>(config: &MergefeedConfig, writer: &mut W) -> Result<(), FeedError> {
    let snapshot = SnapshotStore::new(config.output_path()).read()?;
    let records = project(&snapshot.records, config.view_mode());
    write_projection(writer, &snapshot, &records)
}
