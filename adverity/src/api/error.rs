use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid instance URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Cannot resolve {link} against the API endpoint: {source}")]
    InvalidLink {
        link: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Instance URL cannot be used as an API base: {0}")]
    NotABaseUrl(String),

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("unsupported method: {method}, allowed: {allowed:?}")]
    UnsupportedMethod {
        method: String,
        allowed: &'static [&'static str],
    },

    #[error("status: {status}, body: {body}, expected: {expected:?}")]
    UnexpectedStatus {
        status: u16,
        body: String,
        expected: &'static [u16],
    },

    #[error("{operation}: failed to marshal {type_name}: {source}")]
    Marshal {
        operation: &'static str,
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation}: failed to unmarshal into {type_name}: {source}")]
    Unmarshal {
        operation: &'static str,
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Refusing to follow page link outside the API endpoint: {0}")]
    ForeignPageLink(String),
}

impl ApiError {
    /// HTTP status of a rejected response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
