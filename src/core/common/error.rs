use std::fmt;

#[derive(Debug)]
pub enum OxirowError {
    InvalidArgument(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Configuration(String),
    Logging(String),
}

impl fmt::Display for OxirowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(s) => write!(f, "Invalid argument: {}", s),
            Self::Io(e) => write!(f, "IO Error: {}", e),
            Self::Json(e) => write!(f, "JSON Serialization/Deserialization Error: {}", e),
            Self::Configuration(s) => write!(f, "Configuration error: {}", s),
            Self::Logging(s) => write!(f, "Logging error: {}", s),
        }
    }
}

impl std::error::Error for OxirowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

// Manual From implementations
impl From<std::io::Error> for OxirowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for OxirowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl OxirowError {
    /// Shorthand for the error raised when a required argument is absent.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this error came from rejecting caller input.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
