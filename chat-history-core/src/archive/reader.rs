use crate::archive::error::ArchiveError;
use crate::archive::types::{RawLine, SourcePosition};
use crate::classify::normalize_line;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Decompresses one archive and returns its normalized lines in file order.
///
/// The whole file is read before anything is returned, so a file that fails halfway
/// contributes nothing.
pub fn read_archive(path: &Path, file_index: usize) -> Result<Vec<RawLine>, ArchiveError> {
    let file = File::open(path).map_err(|e| ArchiveError::open(path, e))?;
    let reader = BufReader::new(GzDecoder::new(BufReader::new(file)));

    read_lines(reader, file_index).map_err(|e| ArchiveError::read(path, e))
}

/// Reads an uncompressed log such as `latest.log`.
pub fn read_plain_log(path: &Path, file_index: usize) -> Result<Vec<RawLine>, ArchiveError> {
    let file = File::open(path).map_err(|e| ArchiveError::open(path, e))?;

    read_lines(BufReader::new(file), file_index).map_err(|e| ArchiveError::read(path, e))
}

/// Splits a reader into normalized lines.
///
/// Invalid UTF-8 is replaced rather than failing the whole source.
pub fn read_lines<R: BufRead>(mut reader: R, file_index: usize) -> io::Result<Vec<RawLine>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let mut end = buf.len();
        while end > 0 && matches!(buf[end - 1], b'\n' | b'\r') {
            end -= 1;
        }

        let text = String::from_utf8_lossy(&buf[..end]);
        lines.push(RawLine {
            text: normalize_line(&text).into_owned(),
            position: SourcePosition {
                file_index,
                line_index: lines.len(),
            },
        });
    }

    Ok(lines)
}
