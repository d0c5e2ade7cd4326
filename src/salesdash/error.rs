use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DashError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
