use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid value for {0}: {1}")]
    InvalidInput(String, String),
}
