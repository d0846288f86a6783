use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErError {
    #[error("Unknown emotion category: {0}")]
    UnknownCategory(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ErError>;
