use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgfError {
    // Builder usage errors
    #[error("UNKNOWN_REGION: '{0}' is not a template region")]
    UnknownRegion(String),

    #[error("LENGTH_MISMATCH: x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("NOT_SAVED: document has no file path yet, call save() first")]
    NotSaved,

    #[error("NO_TYPESETTER: no typesetter attached to this document")]
    NoTypesetter,

    // Config errors
    #[error("CONFIG_INVALID: failed to parse plot description: {0}")]
    ConfigInvalid(String),

    #[error("CONFIG_READ_ERROR: failed to read '{path}': {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    // Typesetting errors
    #[error("TYPESETTER_NOT_FOUND: '{engine}' not found (searched: {searched})")]
    TypesetterNotFound { engine: String, searched: String },

    #[error("TYPESETTER_EXEC_FAILED: {0}")]
    TypesetterExecFailed(String),

    #[error("TYPESET_FAILED: exit code {exit_code}\n{log_tail}")]
    TypesetFailed { exit_code: i32, log_tail: String },

    #[error("VIEWER_FAILED: {0}")]
    ViewerFailed(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for PgfError {
    fn from(err: toml::de::Error) -> Self {
        PgfError::ConfigInvalid(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PgfError>;
