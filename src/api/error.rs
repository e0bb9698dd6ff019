use crate::error::HotelError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for HotelError {
    fn status_code(&self) -> StatusCode {
        match self {
            HotelError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HotelError::NoResult { .. } | HotelError::HotelNotFound(_) => StatusCode::NOT_FOUND,
            // The target site timed out or broke its markup contract.
            HotelError::Transport { .. }
            | HotelError::MalformedResult(_)
            | HotelError::ReviewUnavailable { .. }
            | HotelError::InvalidNumberFormat(_) => StatusCode::BAD_GATEWAY,
            HotelError::Persistence(_)
            | HotelError::Migration(_)
            | HotelError::Client(_)
            | HotelError::Config(_)
            | HotelError::Selector(_)
            | HotelError::Io(_)
            | HotelError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
