use actix_web::{error, http::StatusCode, HttpResponse};
use derive_more::{Display, Error};

#[derive(Debug, Display, Error, serde::Deserialize, serde::Serialize)]
pub enum ApiError {
    #[display(fmt = "internal error")]
    InternalError,

    #[display(fmt = "bad request")]
    BadClientData,

    #[display(fmt = "authentication error")]
    AuthError,

    #[display(fmt = "not found")]
    NotFound,

    #[display(fmt = "this slot has already been booked")]
    SlotUnavailable,

    #[display(fmt = "an active booking already exists for this slot")]
    DuplicateBooking,

    #[display(fmt = "booking status does not allow this transition")]
    InvalidTransition,

    #[display(fmt = "this side has already rated the session")]
    DuplicateRating,

    #[display(fmt = "not eligible for this operation")]
    NotEligible,
}

impl error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadClientData => StatusCode::BAD_REQUEST,
            ApiError::AuthError => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::SlotUnavailable => StatusCode::CONFLICT,
            ApiError::DuplicateBooking => StatusCode::CONFLICT,
            ApiError::InvalidTransition => StatusCode::CONFLICT,
            ApiError::DuplicateRating => StatusCode::CONFLICT,
            ApiError::NotEligible => StatusCode::FORBIDDEN,
        }
    }
}

/// True when the error is the database rejecting a duplicate row. Callers
/// racing past an application-level pre-check land here and must map this
/// to their own taxonomy variant instead of a 500.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation)
    )
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            other => {
                log::error!("database error: {:?}", other);
                ApiError::InternalError
            }
        }
    }
}
