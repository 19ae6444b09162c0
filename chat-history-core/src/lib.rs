pub mod archive;
pub mod classify;
pub mod conf;
pub mod dispatch;
pub mod history;
pub mod logging;
pub mod render;
pub mod runtime;

#[cfg(test)]
pub(crate) mod test_helpers;
