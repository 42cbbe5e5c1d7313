use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::error;
use utoipa::ToSchema;

use crate::core::{errors::CoursehubError, models::course::CoursePatch};

// Request structs for JSON payloads. Every field is optional so that a
// missing field surfaces as our own 400 instead of a body rejection.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub duration_in_months: Option<Number>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub duration_in_months: Option<Number>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        CoursePatch {
            name: req.name,
            duration_in_months: req.duration_in_months,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response wrapper shared by every route: `{isSuccessfull, message?, data?}`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub is_successfull: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Envelope {
            is_successfull: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: &str, data: T) -> Self {
        Envelope {
            is_successfull: true,
            message: Some(message.to_string()),
            data: Some(data),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub is_successfull: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            is_successfull: true,
            message: message.to_string(),
        }
    }
}

// Error response struct
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub is_successfull: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// JSON body extractor whose rejections go through [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

// Newtype wrapper for CoursehubError to implement IntoResponse
pub struct ApiError(pub CoursehubError);

impl From<CoursehubError> for ApiError {
    fn from(err: CoursehubError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(CoursehubError::InvalidInput(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            CoursehubError::CourseNotFound | CoursehubError::UserNotFound => StatusCode::NOT_FOUND,
            CoursehubError::InvalidId(_)
            | CoursehubError::MissingFields
            | CoursehubError::UserAlreadyExists
            | CoursehubError::InvalidCredentials
            | CoursehubError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CoursehubError::PasswordHashing(_)
            | CoursehubError::DatabaseError(_)
            | CoursehubError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = if status.is_server_error() {
            error!(error = %self.0, "request failed");
            ErrorResponse {
                is_successfull: false,
                message: "An error occurred".to_string(),
                data: Some(self.0.to_string()),
            }
        } else {
            ErrorResponse {
                is_successfull: false,
                message: self.0.to_string(),
                data: None,
            }
        };
        (status, Json(body)).into_response()
    }
}
