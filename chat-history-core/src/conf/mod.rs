mod error;
mod loader;
mod types;


pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, load_config, load_or_init, write_config};
pub use types::HistoryConfig;
