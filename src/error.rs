pub type DeckResult<T> = Result<T, DeckError>;

#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid page registry: {0}")]
    InvalidRegistry(String),
    #[error("failed to encode page registry")]
    Encode(#[from] serde_json::Error),
}

impl DeckError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_registry(message: impl Into<String>) -> Self {
        Self::InvalidRegistry(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::DeckError;

    #[test]
    fn invalid_argument_error_formats_message() {
        let err = DeckError::invalid_argument("failed to parse nav config: bad key");
        assert_eq!(
            err.to_string(),
            "invalid argument: failed to parse nav config: bad key"
        );
    }

    #[test]
    fn invalid_registry_error_formats_reason() {
        let err = DeckError::invalid_registry("duplicate page id: 2.html");
        assert_eq!(
            err.to_string(),
            "invalid page registry: duplicate page id: 2.html"
        );
    }
}
