use crate::conf::error::ConfigError;
use crate::conf::types::HistoryConfig;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "chat_history.json";

/// Loads the config at `path`, creating it with defaults first if it does not exist.
///
/// Every failure is fatal to startup; there is no fallback to defaults for a file that
/// exists but cannot be read or parsed.
pub fn load_or_init(path: &Path) -> Result<HistoryConfig, ConfigError> {
    if path.exists() {
        return load_config(path);
    }

    let config = HistoryConfig::default();
    write_config(path, &config)?;

    tracing::info!(path = %path.display(), "created default chat history config");
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<HistoryConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    serde_json::from_str(&raw).map_err(|e| ConfigError::parse(path, e))
}

/// Writes `config` as pretty-printed JSON, creating parent directories.
pub fn write_config(path: &Path, config: &HistoryConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, json).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
