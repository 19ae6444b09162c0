use crate::archive::{RawLine, discover_archives, read_archive, read_plain_log};
use crate::classify::{Classification, ClassifiedEvent, LineClassifier};
use crate::history::buffer::HistoryBuffer;
use std::path::{Path, PathBuf};

/// Uncompressed log the server is currently writing to.
pub const LATEST_LOG: &str = "latest.log";

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// Append `latest.log` after the archives.
    pub include_latest: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    pub files_read: usize,
    pub files_skipped: Vec<PathBuf>,
    pub lines: usize,
    pub events: usize,
    pub discarded: usize,
}

/// Builds the chronological history from every archive in `log_dir`.
///
/// Files are read oldest first and each keeps its own line order. A file that cannot be
/// read is logged and left out; the rest still contribute.
pub fn aggregate_history(
    log_dir: &Path,
    classifier: &dyn LineClassifier,
    options: AggregateOptions,
) -> (HistoryBuffer, AggregateSummary) {
    let mut summary = AggregateSummary::default();

    if !log_dir.is_dir() {
        tracing::warn!(log_dir = %log_dir.display(), "log folder not found, history is empty");
        return (HistoryBuffer::default(), summary);
    }

    let mut sources = match discover_archives(log_dir) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::warn!(log_dir = %log_dir.display(), error = %e, "failed to list log archives");
            Vec::new()
        }
    };

    let latest = log_dir.join(LATEST_LOG);
    let include_latest = options.include_latest && latest.is_file();
    if include_latest {
        sources.push(latest.clone());
    }

    let mut events = Vec::new();

    for (file_index, path) in sources.iter().enumerate() {
        let read = if include_latest && *path == latest {
            read_plain_log(path, file_index)
        } else {
            read_archive(path, file_index)
        };

        let lines = match read {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable log file");
                summary.files_skipped.push(path.clone());
                continue;
            }
        };

        let before = events.len();
        let discarded = classify_into(&lines, classifier, &mut events);

        tracing::debug!(
            path = %path.display(),
            lines = lines.len(),
            events = events.len() - before,
            "read log file"
        );

        summary.files_read += 1;
        summary.lines += lines.len();
        summary.discarded += discarded;
    }

    summary.events = events.len();

    tracing::info!(
        files = summary.files_read,
        skipped = summary.files_skipped.len(),
        events = summary.events,
        discarded = summary.discarded,
        "chat history built"
    );

    (HistoryBuffer::new(events), summary)
}

fn classify_into(
    lines: &[RawLine],
    classifier: &dyn LineClassifier,
    events: &mut Vec<ClassifiedEvent>,
) -> usize {
    let mut discarded = 0;

    for line in lines {
        match classifier.classify(&line.text) {
            Classification::Event(event) => events.push(event),
            Classification::Discarded(_) => discarded += 1,
        }
    }

    discarded
}
