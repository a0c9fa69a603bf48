use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagozoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot pick from an empty {0} collection")]
    EmptyCollection(&'static str),

    #[error("Invalid rule table: {0}")]
    InvalidRuleTable(String),

    #[error("RagozoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for RagozoError {
    fn from(error: std::io::Error) -> Self {
        RagozoError::Io(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, RagozoError>;
