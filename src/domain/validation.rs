use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidHeaderValue { field: &'static str },
    InvalidBaseUrl { input: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidHeaderValue { field } => {
                write!(f, "{field} contains characters not allowed in an HTTP header")
            }
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base url {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "number" };
        assert_eq!(err.to_string(), "number must not be empty");

        let err = ValidationError::InvalidHeaderValue { field: "api_key" };
        assert_eq!(
            err.to_string(),
            "api_key contains characters not allowed in an HTTP header"
        );

        let err = ValidationError::InvalidBaseUrl {
            input: "ftp://x".to_owned(),
            reason: "unsupported scheme `ftp`".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid base url \"ftp://x\": unsupported scheme `ftp`"
        );
    }
}
