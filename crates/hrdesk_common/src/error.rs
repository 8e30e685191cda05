//! Error types for HR Desk.

use thiserror::Error;

/// Failure of a backend data fetch.
///
/// The `Display` text is shown verbatim to the user in the diagnostic answer,
/// so every variant keeps the underlying message intact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode backend response: {0}")]
    Decode(String),

    #[error("Endpoint unavailable: {0}")]
    Unavailable(String),
}

impl EndpointError {
    /// Whether retrying the same request could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            EndpointError::Network(_) => true,
            EndpointError::Status { status, .. } => *status >= 500 || *status == 429,
            EndpointError::Decode(_) | EndpointError::Unavailable(_) => false,
        }
    }
}

/// Transport-level failures only. Non-2xx responses are mapped to `Status`
/// by the registry before the body is read.
impl From<reqwest::Error> for EndpointError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EndpointError::Decode(err.to_string())
        } else {
            EndpointError::Network(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum HrDeskError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HrDeskError {
    pub fn code(&self) -> i32 {
        match self {
            HrDeskError::Endpoint(EndpointError::Network(_)) => -32001,
            HrDeskError::Endpoint(EndpointError::Status { .. }) => -32002,
            HrDeskError::Endpoint(EndpointError::Decode(_)) => -32003,
            HrDeskError::Endpoint(EndpointError::Unavailable(_)) => -32004,
            HrDeskError::Config(_) => -32010,
            HrDeskError::Io(_) => -32006,
            HrDeskError::Json(_) => -32700,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_message() {
        let err = EndpointError::Network("network down".to_string());
        assert!(err.to_string().contains("network down"));

        let err = EndpointError::Status {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned HTTP 503: maintenance");
    }

    #[test]
    fn test_transient() {
        assert!(EndpointError::Network("reset".into()).is_transient());
        assert!(EndpointError::Status { status: 502, body: String::new() }.is_transient());
        assert!(!EndpointError::Status { status: 401, body: String::new() }.is_transient());
        assert!(!EndpointError::Decode("bad json".into()).is_transient());
    }

    #[test]
    fn test_codes() {
        let err: HrDeskError = EndpointError::Unavailable("x".into()).into();
        assert_eq!(err.code(), -32004);
        assert_eq!(HrDeskError::Config("bad".into()).code(), -32010);
    }
}
