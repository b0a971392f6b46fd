//! Errors for the configuration surface
//!
//! The simulation itself never fails; only loading tuning data can.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
