use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Invalid file format: {line}")]
    Format { line: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;
