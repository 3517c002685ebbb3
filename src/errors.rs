use crate::models::ErrorListResponse;
use crate::profile::ValidationErrors;
use axum::{http::StatusCode, Json};

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub details: Vec<String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: errors.to_string(),
            details: errors.messages(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation(errors)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.details.is_empty() {
            (self.status, self.message).into_response()
        } else {
            let body = ErrorListResponse {
                errors: self.details,
            };
            (self.status, Json(body)).into_response()
        }
    }
}
