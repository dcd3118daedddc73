use dohac_types::TextError;

/// Errors raised by the core services.
///
/// Each variant maps onto exactly one HTTP status at the API boundary; the display text is the
/// message returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Unsupported Content-Type: {0}. Must be 'application/json' or 'multipart/form-data'.")]
    UnsupportedMediaType(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<TextError> for CoreError {
    fn from(err: TextError) -> Self {
        CoreError::InvalidInput(err.to_string())
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
