use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid inputs passed, please check your data.";
pub const UNRESOLVED_ADDRESS_MESSAGE: &str = "Could not find location for the specified address.";
pub const GEOCODING_UNAVAILABLE_MESSAGE: &str =
    "Could not reach the geocoding service, please try again later";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Geocoding(StatusCode),
    Persistence,
    Configuration,
}

impl ErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Geocoding(status) => *status,
            Self::Persistence | Self::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        kind: ErrorKind::InvalidInput,
        message: INVALID_INPUT_MESSAGE.into(),
    }
}

pub fn not_found_error(message: impl Into<String>) -> Error {
    Error {
        kind: ErrorKind::NotFound,
        message: message.into(),
    }
}

/// The address was understood by the geocoder but yields no location.
pub fn unresolved_address_error() -> Error {
    Error {
        kind: ErrorKind::Geocoding(StatusCode::UNPROCESSABLE_ENTITY),
        message: UNRESOLVED_ADDRESS_MESSAGE.into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        kind: ErrorKind::Geocoding(StatusCode::BAD_GATEWAY),
        message: GEOCODING_UNAVAILABLE_MESSAGE.into(),
    }
}

pub fn persistence_error(message: impl Into<String>) -> Error {
    Error {
        kind: ErrorKind::Persistence,
        message: message.into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!(error = ?err, "database operation failed");

    persistence_error("database error")
}

pub fn configuration_error(message: impl Into<String>) -> Error {
    Error {
        kind: ErrorKind::Configuration,
        message: message.into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::error!(error = %loggable(err), "geocoding request failed");

    upstream_error()
}

/// Request URLs carry the API key as a query parameter, so they never reach
/// the logs.
fn loggable(err: reqwest::Error) -> String {
    err.without_url().to_string()
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status())
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        configuration_error(format!("environment variable error: {err}"))
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(kind = ?self.kind, "{}", self.message);
        }

        let body = Json(json!({
            "message": self.message,
        }));

        (status, body).into_response()
    }
}
