use thiserror::Error;

/// Failure reported to the user, already rendered as a message.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::new(format!("Could not read input: {}", error))
    }
}
