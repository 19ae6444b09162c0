use crate::history::HistoryLimit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `chat_history.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryConfig {
    /// Newest history entries to replay; any value `<= 0` replays everything.
    pub max_messages: i64,
    /// Log directory, relative to the game directory unless absolute.
    pub log_folder: PathBuf,
    /// Only operators receive history when set.
    pub operator_required: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_messages: -1,
            log_folder: PathBuf::from("logs"),
            operator_required: true,
        }
    }
}

impl HistoryConfig {
    pub fn history_limit(&self) -> HistoryLimit {
        HistoryLimit::from_max_messages(self.max_messages)
    }

    pub fn log_dir(&self, game_dir: &Path) -> PathBuf {
        if self.log_folder.is_absolute() {
            self.log_folder.clone()
        } else {
            game_dir.join(&self.log_folder)
        }
    }
}
