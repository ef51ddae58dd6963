use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecomposeError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DecomposeError>;
