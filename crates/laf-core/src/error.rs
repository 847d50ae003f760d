//! Run-fatal error type for the LAF tooling.
//!
//! Per-file problems never surface here: the engine records them in the
//! [`crate::report::RunReport`] and keeps walking. `LafError` is reserved
//! for conditions that abort an entire invocation.

#[derive(Debug, thiserror::Error)]
pub enum LafError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unreadable root path '{path}': {source}")]
    RootPath {
        path: String,
        source: std::io::Error,
    },
}
