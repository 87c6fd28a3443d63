use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnecError {
    #[error("config error at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config parse error at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: String,
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("resource producer failed: {0}")]
    Producer(String),
}

pub type Result<T> = std::result::Result<T, OnecError>;
