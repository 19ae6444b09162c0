use crate::conf::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to load chat history configuration")]
    Config(#[from] ConfigError),
}
