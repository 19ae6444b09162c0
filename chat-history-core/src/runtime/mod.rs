mod decoration;
mod error;
mod state;


pub use decoration::ChatDecoration;
pub use error::StartupError;
pub use state::{ChatHistoryRuntime, RuntimeOptions};
