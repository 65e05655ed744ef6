use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidApiKey,
    Empty { field: &'static str },
    NotNumeric { field: &'static str },
    InvalidCallbackSpec,
    InvalidIp,
}

impl ValidationError {
    /// Numeric error code the gateway uses for this class of failure.
    ///
    /// These are the same codes the gateway reports for server-side
    /// rejections, so callers can treat local and remote validation uniformly.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "18",
            Self::Empty { .. } => "1",
            Self::NotNumeric { .. } => "2",
            Self::InvalidCallbackSpec => "1",
            Self::InvalidIp => "15",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidApiKey => write!(f, "Invalid API key"),
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotNumeric { field } => write!(f, "Only numbers are allowed: {field}"),
            Self::InvalidCallbackSpec => write!(f, "Incorrect callback parameter format"),
            Self::InvalidIp => write!(f, "Parameter is invalid: ip"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::InvalidApiKey;
        assert_eq!(err.to_string(), "Invalid API key");

        let err = ValidationError::Empty { field: "message" };
        assert_eq!(err.to_string(), "message must not be empty");

        let err = ValidationError::NotNumeric { field: "number" };
        assert_eq!(err.to_string(), "Only numbers are allowed: number");

        let err = ValidationError::InvalidCallbackSpec;
        assert_eq!(err.to_string(), "Incorrect callback parameter format");

        let err = ValidationError::InvalidIp;
        assert_eq!(err.to_string(), "Parameter is invalid: ip");
    }

    #[test]
    fn codes_match_the_gateway_taxonomy() {
        assert_eq!(ValidationError::InvalidApiKey.code(), "18");
        assert_eq!(ValidationError::Empty { field: "message" }.code(), "1");
        assert_eq!(ValidationError::NotNumeric { field: "number" }.code(), "2");
        assert_eq!(ValidationError::InvalidCallbackSpec.code(), "1");
        assert_eq!(ValidationError::InvalidIp.code(), "15");
    }
}
