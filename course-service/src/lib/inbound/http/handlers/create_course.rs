use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CourseResponseData;
use super::JsonBody;
use crate::domain::course::errors::CourseError;
use crate::domain::course::models::CourseDescription;
use crate::domain::course::models::CourseLevel;
use crate::domain::course::models::CourseName;
use crate::domain::course::models::CreateCourseCommand;
use crate::domain::course::models::Price;
use crate::inbound::http::router::AppState;

pub async fn create_course(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateCourseRequest>,
) -> Result<ApiSuccess<CourseResponseData>, ApiError> {
    state
        .course_service
        .create_course(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref course| ApiSuccess::new(StatusCode::CREATED, course.into()))
}

/// HTTP request body for creating a course (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateCourseRequest {
    name: String,
    description: String,
    level: String,
    price: f64,
}

impl CreateCourseRequest {
    fn try_into_command(self) -> Result<CreateCourseCommand, CourseError> {
        Ok(CreateCourseCommand {
            name: CourseName::new(self.name)?,
            description: CourseDescription::new(self.description)?,
            level: CourseLevel::new(self.level)?,
            price: Price::new(self.price)?,
        })
    }
}
