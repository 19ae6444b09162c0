mod auth;
mod join;
mod types;


pub use auth::{OPERATOR_PERMISSION_LEVEL, may_view_history};
pub use join::JoinDispatcher;
pub use types::{ConnectedPlayer, PlayerId};
