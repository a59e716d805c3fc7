use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("unknown generator profile `{0}`")]
    UnknownProfile(String),

    #[error("invalid profile options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
