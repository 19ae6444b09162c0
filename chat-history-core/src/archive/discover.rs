use crate::archive::error::ArchiveError;
use glob::{MatchOptions, Pattern, glob_with};
use std::path::{Path, PathBuf};

/// Debug logs rotate next to the regular ones and are never replayed.
pub const DEBUG_LOG_PREFIX: &str = "debug";

const ARCHIVE_PATTERN: &str = "*.gz";

/// Lists the archive files in `dir`, oldest first.
///
/// Matches the `.gz` extension case-insensitively, skips anything that is not a regular
/// file and any name starting with `debug`. A missing directory yields an empty list.
///
/// # Errors
///
/// Returns `ArchiveError::Glob` if the directory path cannot be turned into a pattern.
pub fn discover_archives(dir: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
    let root = Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&root)
        .join(ARCHIVE_PATTERN)
        .to_string_lossy()
        .into_owned();

    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut paths: Vec<_> = glob_with(&pattern, options)
        .map_err(|e| ArchiveError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .filter(|path| !is_debug_log(path))
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn is_debug_log(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with(DEBUG_LOG_PREFIX))
        .unwrap_or(false)
}
