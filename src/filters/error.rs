use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
