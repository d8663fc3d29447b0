use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CourseResponseData;
use super::JsonBody;
use crate::domain::course::errors::CourseError;
use crate::domain::course::models::CourseDescription;
use crate::domain::course::models::CourseId;
use crate::domain::course::models::CourseLevel;
use crate::domain::course::models::CourseName;
use crate::domain::course::models::Price;
use crate::domain::course::models::UpdateCourseCommand;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a course (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
}

impl UpdateCourseRequest {
    fn try_into_command(self) -> Result<UpdateCourseCommand, CourseError> {
        // Validation happens here - errors are automatically converted via #[from]
        Ok(UpdateCourseCommand {
            name: self.name.map(CourseName::new).transpose()?,
            description: self.description.map(CourseDescription::new).transpose()?,
            level: self.level.map(CourseLevel::new).transpose()?,
            price: self.price.map(Price::new).transpose()?,
        })
    }
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateCourseRequest>,
) -> Result<ApiSuccess<CourseResponseData>, ApiError> {
    let course_id = CourseId::from_string(&id).map_err(CourseError::from)?;
    let command = req.try_into_command()?;

    state
        .course_service
        .update_course(&course_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref course| ApiSuccess::new(StatusCode::OK, course.into()))
}
