use chat_history_core::conf::{CONFIG_FILE_NAME, HistoryConfig, write_config};
use chat_history_core::runtime::{ChatHistoryRuntime, RuntimeOptions};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

pub fn info(body: &str) -> String {
    format!("[12:00:00] [Server thread/INFO]: {body}")
}

pub fn chat(speaker: &str, text: &str) -> String {
    info(&format!("<{speaker}> {text}"))
}

/// A throwaway game directory with a `logs/` folder and a `config/` folder.
pub struct LogDirBuilder {
    dir: TempDir,
}

impl Default for LogDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDirBuilder {
    pub fn new() -> Self {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("logs")).expect("failed to create logs dir");
        Self { dir }
    }

    pub fn game_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.dir.path().join("logs")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Writes a gzip archive into `logs/`.
    pub fn archive(self, name: &str, lines: &[String]) -> Self {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        for line in lines {
            writeln!(encoder, "{line}").expect("failed to compress line");
        }
        let bytes = encoder.finish().expect("failed to finish archive");
        fs::write(self.logs_dir().join(name), bytes).expect("failed to write archive");
        self
    }

    /// Writes raw bytes into `logs/`, for corrupt or foreign files.
    pub fn raw_file(self, name: &str, contents: &[u8]) -> Self {
        fs::write(self.logs_dir().join(name), contents).expect("failed to write file");
        self
    }

    pub fn latest_log(self, lines: &[String]) -> Self {
        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(self.logs_dir().join("latest.log"), contents).expect("failed to write latest");
        self
    }

    pub fn config(self, config: &HistoryConfig) -> Self {
        write_config(&self.config_dir().join(CONFIG_FILE_NAME), config)
            .expect("failed to write config");
        self
    }

    pub fn options(&self) -> RuntimeOptions {
        RuntimeOptions::new(self.game_dir(), &self.config_dir())
    }

    pub fn start(&self) -> ChatHistoryRuntime {
        ChatHistoryRuntime::start(self.options()).expect("failed to start runtime")
    }
}
