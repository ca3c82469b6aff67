use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    NameMissing,
    NumberMissing,
    NameTaken,
    PersonNotFound,
    MalformedPersonId,
    Store(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ApiError::NameMissing => "name missing",
            ApiError::NumberMissing => "number missing",
            ApiError::NameTaken => "name must be unique",
            ApiError::PersonNotFound => "person not found",
            ApiError::MalformedPersonId => "malformed id",
            ApiError::Store(details) => details.as_str(),
        };

        write!(f, "{}", message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NameMissing => StatusCode::BAD_REQUEST,
            ApiError::NumberMissing => StatusCode::BAD_REQUEST,
            ApiError::NameTaken => StatusCode::CONFLICT,
            ApiError::PersonNotFound => StatusCode::NOT_FOUND,
            ApiError::MalformedPersonId => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::PersonNotFound => HttpResponse::NotFound().finish(),
            ApiError::Store(details) => {
                error!("Person store failure: {}", details);
                HttpResponse::InternalServerError().finish()
            }
            ApiError::NameMissing
            | ApiError::NumberMissing
            | ApiError::NameTaken
            | ApiError::MalformedPersonId => {
                HttpResponse::build(self.status_code()).json(ErrorJson {
                    error: self.to_string(),
                })
            }
        }
    }
}
