/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Failure taxonomy of the booking path. Every failure leaving the
/// orchestration boundary is one of these, rendered as
/// `{ error, code, details? }` with the status code below. Faults without a
/// client-facing classification of their own (serialization, transport)
/// surface as `SERVER_ERROR` and carry their cause in `details`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    MissingFields {
        message: String,
        missing_fields: Vec<String>,
    },
    #[error("{0}")]
    InvalidRideType(String),
    #[error("{message}")]
    InvalidLocation { message: String, detail: String },
    #[error("Failed to get fare estimates and location data.")]
    ExternalApiError(String),
    #[error("An unexpected error occurred. Please try again later.")]
    InternalError(String),
    #[error("An unexpected error occurred. Please try again later.")]
    SerializationError(String),
    #[error("An unexpected error occurred. Please try again later.")]
    DeserializationError(String),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    UnprocessibleRequest(String),
    #[error("Request Timeout")]
    RequestTimeout,
}

impl AppError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn code(&self) -> String {
        match self {
            AppError::MissingFields { .. } => "BAD_REQUEST",
            AppError::InvalidRideType(_) => "INVALID_RIDE_TYPE",
            AppError::InvalidLocation { .. } => "INVALID_LOCATION",
            AppError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            AppError::InternalError(_)
            | AppError::SerializationError(_)
            | AppError::DeserializationError(_) => "SERVER_ERROR",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::UnprocessibleRequest(_) => "UNPROCESSIBLE_REQUEST",
            AppError::RequestTimeout => "REQUEST_TIMEOUT",
        }
        .to_string()
    }

    fn details(&self) -> Option<Value> {
        match self {
            AppError::MissingFields { missing_fields, .. } => {
                Some(json!({ "missing_fields": missing_fields }))
            }
            AppError::InvalidLocation { detail, .. } => Some(Value::String(detail.to_owned())),
            AppError::ExternalApiError(detail)
            | AppError::InternalError(detail)
            | AppError::SerializationError(detail)
            | AppError::DeserializationError(detail) => Some(Value::String(detail.to_owned())),
            _ => None,
        }
    }

    fn error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.message(),
            code: self.code(),
            details: self.details(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(self.error_body())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidRideType(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidLocation { .. } => StatusCode::BAD_REQUEST,
            AppError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DeserializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessibleRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}
