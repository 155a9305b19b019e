use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// The only failure responses the API ever produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    BadRequest,
    NotFound,
    Unprocessable,
}

impl Failure {
    pub fn status(self) -> StatusCode {
        match self {
            Failure::BadRequest => StatusCode::BAD_REQUEST,
            Failure::NotFound => StatusCode::NOT_FOUND,
            Failure::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Failure::BadRequest => "Bad request",
            Failure::NotFound => "Page not found",
            Failure::Unprocessable => "Unprocessable",
        }
    }

    fn into_error(self, detail: String) -> Error {
        match self {
            Failure::BadRequest => Error::BadRequest(detail),
            Failure::NotFound => Error::NotFound(detail),
            Failure::Unprocessable => Error::Unprocessable(detail),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl Error {
    pub fn failure(&self) -> Failure {
        match self {
            Error::BadRequest(_) => Failure::BadRequest,
            Error::NotFound(_) => Failure::NotFound,
            _ => Failure::Unprocessable,
        }
    }

    /// Reports this error as `failure`, whatever it was raised as.
    ///
    /// Each handler answers every failure inside it with a single status; the
    /// original cause is logged here and dropped from the response.
    pub fn respond_as(self, failure: Failure) -> Self {
        if self.failure() == failure {
            tracing::warn!(error = %self, "request failed");
            return self;
        }
        tracing::error!(error = %self, status = %failure.status(), "request failed");
        failure.into_error(self.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let failure = self.failure();
        let status = failure.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16().to_string(),
            "message": failure.message(),
        }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}
