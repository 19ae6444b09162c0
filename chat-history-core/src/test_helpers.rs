use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes `lines` gzip-compressed to `path`, one per line.
pub fn write_gz(path: &Path, lines: &[&str]) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for line in lines {
        encoder.write_all(line.as_bytes()).unwrap();
        encoder.write_all(b"\n").unwrap();
    }
    fs::write(path, encoder.finish().unwrap()).unwrap();
}

pub fn info(body: &str) -> String {
    format!("[12:00:00] [Server thread/INFO]: {body}")
}
