//! Error types.

use reqwest::StatusCode;

/// Any error that can occur when calling the Steam Web API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An input was rejected before any request was made.
    #[error("Invalid parameter: {}", .0)]
    Parameter(#[from] ParameterError),
    /// The request could not be completed.
    #[error("Transport error: {}", .0)]
    Transport(#[from] TransportError),
    /// The response body did not match the expected schema.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// The request succeeded but Steam reported an error in the response body.
    #[error("Steam API error: {}", .0)]
    Api(String),
}

impl Error {
    /// Whether this error was caused by the request timing out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Timeout))
    }

    /// The HTTP status code, if the request failed with a non-2xx response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(TransportError::Http(status)) => Some(*status),
            _ => None,
        }
    }
}

/// An error returned by a [`Transport`](crate::transport::Transport).
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The response had a status outside of 200-299.
    #[error("Error {}", .0)]
    Http(StatusCode),
    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// Request error.
    #[error("Request error: {}", .0)]
    Reqwest(reqwest::Error),
    /// Request middleware error.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }

        match error.status() {
            Some(status) if !status.is_success() => Self::Http(status),
            _ => Self::Reqwest(error),
        }
    }
}

impl From<reqwest_middleware::Error> for TransportError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Self::from(e),
            reqwest_middleware::Error::Middleware(e) => Self::ReqwestMiddleware(e),
        }
    }
}

/// An input that cannot be sent to the API.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ParameterError {
    /// The endpoint requires an API key and none was configured.
    #[error("An API key is required for this request")]
    MissingApiKey,
    /// No Steam IDs were given.
    #[error("At least one Steam ID is required")]
    EmptySteamIds,
    /// More Steam IDs were given than the endpoint accepts in one request.
    #[error("Too many Steam IDs: {count} given, the maximum is {max}")]
    TooManySteamIds {
        /// The number of Steam IDs given.
        count: usize,
        /// The maximum accepted by the endpoint.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_distinguishable() {
        let error = Error::from(TransportError::Timeout);

        assert!(error.is_timeout());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn exposes_http_status() {
        let error = Error::from(TransportError::Http(StatusCode::FORBIDDEN));

        assert!(!error.is_timeout());
        assert_eq!(error.status(), Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn formats_too_many_steamids() {
        let error = ParameterError::TooManySteamIds { count: 101, max: 100 };

        assert_eq!(error.to_string(), "Too many Steam IDs: 101 given, the maximum is 100");
    }
}
