use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a failure, independent of the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingResource,
    InvalidConfig,
    Serialization,
    Io,
}

#[derive(Error, Debug)]
pub enum NewickVizError {
    #[error("Failed to render template: IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render template: cannot read template resource {}: {source}", .path.display())]
    MissingResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render template: missing required config key(s): {}", .0.join(", "))]
    MissingConfigKeys(Vec<&'static str>),

    #[error("Failed to render template: invalid value for config key '{key}': {reason}")]
    InvalidConfigValue { key: &'static str, reason: String },

    #[error("Failed to render template: JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl NewickVizError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NewickVizError::Io(_) => ErrorKind::Io,
            NewickVizError::MissingResource { .. } => ErrorKind::MissingResource,
            NewickVizError::MissingConfigKeys(_) | NewickVizError::InvalidConfigValue { .. } => {
                ErrorKind::InvalidConfig
            }
            NewickVizError::JsonError(_) => ErrorKind::Serialization,
        }
    }
}

pub type Result<T> = std::result::Result<T, NewickVizError>;
