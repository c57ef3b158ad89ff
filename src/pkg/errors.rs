use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced by the function service. Parse and validation failures are
/// the caller's fault; everything else maps to a server error. Bodies stay
/// empty, only the status code carries the outcome.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("invalid request: {0}")]
    Validation(&'static str),
    #[error("service call failed: {0}")]
    Service(String),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("telemetry setup failed: {0}")]
    Telemetry(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::MalformedBody(_) | Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Service(_) | Error::Config(_) | Error::Telemetry(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            Error::MalformedBody(parse_err).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Validation("Field1 must be non-empty")
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn service_errors_map_to_server_error() {
        assert_eq!(
            Error::Service("backend down".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
