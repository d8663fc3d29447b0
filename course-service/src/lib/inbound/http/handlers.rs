use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::domain::auth::errors::AuthError;
use crate::domain::course::errors::CourseError;
use crate::domain::course::models::Course;

pub mod create_course;
pub mod delete_course;
pub mod get_course;
pub mod list_courses;
pub mod login;
pub mod profile;
pub mod register;
pub mod update_course;

/// Successful response: status code plus the bare JSON payload.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// JSON request body whose rejections render as `ApiError`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON with missing or mistyped fields
            JsonRejection::JsonDataError(e) => ApiError::UnprocessableEntity(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateEmail(_) => ApiError::Conflict(err.to_string()),
            AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::ExpiredToken => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::Hashing(_) | AuthError::Signing(_) | AuthError::User(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CourseError> for ApiError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CourseError::LevelAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            CourseError::InvalidCourseId(_) => ApiError::BadRequest(err.to_string()),
            CourseError::InvalidField(_) | CourseError::InvalidPrice(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            CourseError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Course representation shared by all course endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseResponseData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: String,
    pub price: f64,
}

impl From<&Course> for CourseResponseData {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name.as_str().to_string(),
            description: course.description.as_str().to_string(),
            level: course.level.as_str().to_string(),
            price: course.price.amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::UserError;

    #[test]
    fn test_auth_errors_map_to_client_statuses() {
        assert!(matches!(
            ApiError::from(AuthError::DuplicateEmail("a@x.com".to_string())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::ExpiredToken),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::User(UserError::DatabaseError("down".to_string()))),
            ApiError::InternalServerError(_)
        ));
    }

    #[test]
    fn test_course_errors_map_to_client_statuses() {
        assert!(matches!(
            ApiError::from(CourseError::NotFound("id".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(CourseError::LevelAlreadyExists("beginner".to_string())),
            ApiError::Conflict(_)
        ));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let response = ApiError::InternalServerError("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
