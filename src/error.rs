use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepocheckError {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("snapshot parse error: {0}")]
    SnapshotParse(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepocheckError>;
