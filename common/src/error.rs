#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    #[error("conversion provider request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("{0}")]
    Protocol(&'static str),
}

impl RelayError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RelayError::Validation(_))
    }
}
