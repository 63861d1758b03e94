use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config file")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("{operation} rejected with status {status}: {message}")]
    Rejected {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("upload of company #{index} ({symbol}) failed")]
    Upload {
        index: usize,
        symbol: String,
        #[source]
        source: Box<ImportError>,
    },

    #[error("progress output failed")]
    Progress(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ImportError::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
