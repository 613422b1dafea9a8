use thiserror::Error;

// =============================================================================
// Error kinds raised by containers, pipelines and the demo runner
// =============================================================================

#[derive(Error, Debug)]
pub enum Error {
    /// A present container was requested for an absent input.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The held value was read from an absent container.
    #[error("Illegal state: {message}")]
    IllegalState { message: String },

    /// Raised by a caller-supplied error factory, e.g. fail-on-absence extraction.
    #[error("{message}")]
    UserRaised { message: String },

    #[error("Unknown example '{0}' (expected one of: {1})")]
    UnknownDemo(String, String),

    #[error("Failed to parse settings: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    pub fn user_raised(message: impl Into<String>) -> Self {
        Self::UserRaised {
            message: message.into(),
        }
    }

    /// True for the deliberate fail-fast signal, as opposed to contract violations.
    pub fn is_user_raised(&self) -> bool {
        matches!(self, Self::UserRaised { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Settings(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = Error::invalid_argument("absent value was given");
        assert_eq!(error.to_string(), "Invalid argument: absent value was given");
    }

    #[test]
    fn test_illegal_state_display() {
        let error = Error::illegal_state("no value present");
        assert!(error.to_string().contains("no value present"));
        assert!(!error.is_user_raised());
    }

    #[test]
    fn test_user_raised_keeps_message_verbatim() {
        let error = Error::user_raised("NULL was given!");
        assert_eq!(error.to_string(), "NULL was given!");
        assert!(error.is_user_raised());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
    }
}
