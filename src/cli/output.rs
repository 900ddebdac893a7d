//! Output formatting utilities for CLI operations.

use std::io::Write;

use chrono::{DateTime, Utc};
use mergefeed::{FeedError, PullRequestRecord, RunSummary, Snapshot};

/// Display format shared with the feed viewer.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Formats a timestamp as `YYYY/MM/DD HH:mm:ss` in UTC.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Writes the one-line summary of a generate run.
pub fn write_run_summary<W: Write>(writer: &mut W, summary: &RunSummary) -> Result<(), FeedError> {
    writeln!(
        writer,
        "Wrote {} pull requests from {} repositories ({} failed) to {}",
        summary.records,
        summary.repositories,
        summary.failures.len(),
        summary.path
    )
    .map_err(|e| io_error(&e))
}

/// Writes the final `run finished status = N` line.
pub fn write_status<W: Write>(writer: &mut W, status: i32) -> Result<(), FeedError> {
    writeln!(writer, "run finished status = {status}").map_err(|e| io_error(&e))
}

/// Writes a projected view of `snapshot`.
pub fn write_projection<W: Write>(
    writer: &mut W,
    snapshot: &Snapshot,
    records: &[PullRequestRecord],
) -> Result<(), FeedError> {
    writeln!(
        writer,
        "Merged pull requests for {} (updated {})",
        snapshot.account,
        format_timestamp(&snapshot.generated_at)
    )
    .map_err(|e| io_error(&e))?;

    for record in records {
        let merged_at = record
            .merged_at
            .as_ref()
            .map_or_else(|| "-".to_owned(), format_timestamp);
        writeln!(
            writer,
            "{merged_at}  {} #{} {} (@{})",
            record.repository.name(),
            record.number,
            record.title,
            record.author_id
        )
        .map_err(|e| io_error(&e))?;
    }

    if records.is_empty() {
        writeln!(writer, "No merged pull requests.").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Converts an I/O error into a [`FeedError::Io`].
fn io_error(error: &std::io::Error) -> FeedError {
    FeedError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use mergefeed::feed::test_support::{january, merged_record};
    use mergefeed::feed::CollectionFailure;
    use mergefeed::{RunSummary, Snapshot, SourceError};

    use super::{format_timestamp, write_projection, write_run_summary, write_status};

    fn render(write: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer);
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[test]
    fn timestamps_use_viewer_format() {
        assert_eq!(format_timestamp(&january(3, 9)), "2024/01/03 09:00:00");
    }

    #[test]
    fn run_summary_counts_records_repositories_and_failures() {
        let summary = RunSummary {
            repositories: 2,
            records: 5,
            failures: vec![CollectionFailure {
                repository: "orgX/b".to_owned(),
                error: SourceError::Network {
                    message: "timed out".to_owned(),
                },
            }],
            path: Utf8PathBuf::from("data/data.json"),
        };

        let output = render(|buffer| {
            write_run_summary(buffer, &summary).expect("write should succeed");
            write_status(buffer, 0).expect("write should succeed");
        });

        assert_eq!(
            output,
            "Wrote 5 pull requests from 2 repositories (1 failed) to data/data.json\n\
             run finished status = 0\n"
        );
    }

    #[test]
    fn projection_lists_header_then_one_line_per_record() {
        let record = merged_record("orgX/a", 7, january(3, 9), january(3, 10));
        let snapshot = Snapshot {
            generated_at: january(4, 12),
            account: "orgX".to_owned(),
            records: vec![record.clone()],
        };

        let output = render(|buffer| {
            write_projection(buffer, &snapshot, &[record]).expect("write should succeed");
        });

        assert_eq!(
            output,
            "Merged pull requests for orgX (updated 2024/01/04 12:00:00)\n\
             2024/01/03 09:00:00  orgX/a #7 orgX/a #7 (@octocat)\n"
        );
    }

    #[test]
    fn empty_projection_says_so() {
        let snapshot = Snapshot {
            generated_at: january(4, 12),
            account: "orgX".to_owned(),
            records: Vec::new(),
        };

        let output = render(|buffer| {
            write_projection(buffer, &snapshot, &[]).expect("write should succeed");
        });

        assert!(output.ends_with("No merged pull requests.\n"), "got: {output}");
    }
}
