use thiserror::Error as TError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, TError)]
pub enum Error {
    #[error("AlreadyRegistered: {0}")]
    AlreadyRegistered(String),
    #[error("NotRegistered: {0}")]
    NotRegistered(String),
    #[error("MissingTypeMeta: {0}")]
    MissingTypeMeta(&'static str),
    #[error("InvalidApiVersion: {0}")]
    InvalidApiVersion(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
