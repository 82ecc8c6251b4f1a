//! Business error taxonomy shared by every layer.
//!
//! A fixed table maps each [`ErrorCode`] to a display message, an HTTP status and
//! a log level. Codes are grouped by numeric range:
//!
//! - `10xxx` - generic errors (internal, invalid params, unauthorized, not found)
//! - `20xxx` - user domain (already exists, not found, invalid credentials)
//! - `30xxx` - article domain (not found)
//!
//! A [`DetailError`] carries two views of the same failure. The
//! [`BusinessError`] (code + message) is safe to send to clients; the status,
//! log level and original cause are for the HTTP boundary and the logs only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Type-erased underlying failure kept inside a [`DetailError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Business error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,

    InternalServerError = 10001,
    InvalidParams = 10002,
    Unauthorized = 10003,
    NotFound = 10004,

    UserAlreadyExists = 20001,
    UserNotFound = 20002,
    InvalidCredentials = 20003,

    ArticleNotFound = 30001,
}

struct CodeEntry {
    message: &'static str,
    status: StatusCode,
    level: Level,
}

impl ErrorCode {
    /// Numeric value exposed to clients.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Looks up a raw numeric code.
    ///
    /// Unknown codes fall back to [`ErrorCode::InternalServerError`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Success,
            10001 => Self::InternalServerError,
            10002 => Self::InvalidParams,
            10003 => Self::Unauthorized,
            10004 => Self::NotFound,
            20001 => Self::UserAlreadyExists,
            20002 => Self::UserNotFound,
            20003 => Self::InvalidCredentials,
            30001 => Self::ArticleNotFound,
            _ => Self::InternalServerError,
        }
    }

    fn entry(self) -> CodeEntry {
        let (message, status, level) = match self {
            Self::Success => ("Success", StatusCode::OK, Level::INFO),
            Self::InternalServerError => (
                "Internal Server Error",
                StatusCode::INTERNAL_SERVER_ERROR,
                Level::ERROR,
            ),
            Self::InvalidParams => ("Invalid Parameters", StatusCode::BAD_REQUEST, Level::WARN),
            Self::Unauthorized => ("Unauthorized", StatusCode::UNAUTHORIZED, Level::WARN),
            Self::NotFound => ("Resource Not Found", StatusCode::NOT_FOUND, Level::WARN),
            Self::UserAlreadyExists => ("User already exists", StatusCode::BAD_REQUEST, Level::WARN),
            Self::UserNotFound => ("User not found", StatusCode::NOT_FOUND, Level::WARN),
            Self::InvalidCredentials => (
                "Invalid username or password",
                StatusCode::UNAUTHORIZED,
                Level::WARN,
            ),
            Self::ArticleNotFound => ("Article not found", StatusCode::NOT_FOUND, Level::WARN),
        };

        CodeEntry {
            message,
            status,
            level,
        }
    }

    /// Default display message for this code.
    pub fn message(self) -> &'static str {
        self.entry().message
    }

    /// HTTP status the boundary responds with.
    pub fn status(self) -> StatusCode {
        self.entry().status
    }

    /// Severity used when the failure is logged.
    pub fn level(self) -> Level {
        self.entry().level
    }
}

/// User-facing part of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessError {
    pub code: u32,
    pub message: String,
}

impl BusinessError {
    /// Serializes the error to its JSON wire form.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Full error object returned by the application layer.
///
/// `Display` renders the underlying cause. When no cause was supplied at
/// construction the table message is used, so a `DetailError` always has one.
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct DetailError {
    code: ErrorCode,
    business: BusinessError,
    status: StatusCode,
    level: Level,
    #[source]
    cause: BoxError,
}

impl DetailError {
    /// Builds an error from the taxonomy table.
    pub fn new(code: ErrorCode, cause: Option<BoxError>) -> Self {
        let entry = code.entry();
        let cause = cause.unwrap_or_else(|| entry.message.into());

        Self {
            code,
            business: BusinessError {
                code: code.as_u32(),
                message: entry.message.to_string(),
            },
            status: entry.status,
            level: entry.level,
            cause,
        }
    }

    /// Builds an error from a raw numeric code, falling back to
    /// [`ErrorCode::InternalServerError`] for codes outside the table.
    pub fn from_raw(code: u32, cause: Option<BoxError>) -> Self {
        Self::new(ErrorCode::from_raw(code), cause)
    }

    /// Message-only error; the table message doubles as the cause.
    pub fn of(code: ErrorCode) -> Self {
        Self::new(code, None)
    }

    /// Wraps an underlying failure under the given code.
    pub fn wrap<E>(code: ErrorCode, cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::new(code, Some(cause.into()))
    }

    pub fn internal<E: Into<BoxError>>(cause: E) -> Self {
        Self::wrap(ErrorCode::InternalServerError, cause)
    }

    pub fn invalid_params<E: Into<BoxError>>(cause: E) -> Self {
        Self::wrap(ErrorCode::InvalidParams, cause)
    }

    pub fn unauthorized<E: Into<BoxError>>(cause: E) -> Self {
        Self::wrap(ErrorCode::Unauthorized, cause)
    }

    /// Overrides the user-facing message, keeping code, status and cause.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.business.message = message.into();
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Safe-to-expose view.
    pub fn business(&self) -> &BusinessError {
        &self.business
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Original failure, for logs only.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }
}

impl From<validator::ValidationErrors> for DetailError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::invalid_params(errors)
    }
}

impl IntoResponse for DetailError {
    fn into_response(self) -> Response {
        let code = self.business.code;
        let message = self.business.message.as_str();
        let cause = self.cause.to_string();

        if self.level == Level::WARN {
            tracing::warn!(code, business_message = message, "{cause}");
        } else if self.level == Level::INFO {
            tracing::info!(code, business_message = message, "{cause}");
        } else {
            tracing::error!(code, business_message = message, "{cause}");
        }

        (self.status, Json(self.business)).into_response()
    }
}
