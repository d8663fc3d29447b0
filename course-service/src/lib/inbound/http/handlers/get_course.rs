use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::CourseResponseData;
use crate::domain::course::errors::CourseError;
use crate::domain::course::models::CourseId;
use crate::inbound::http::router::AppState;

pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<ApiSuccess<CourseResponseData>, ApiError> {
    let course_id = CourseId::from_string(&course_id).map_err(CourseError::from)?;

    state
        .course_service
        .get_course(&course_id)
        .await
        .map_err(ApiError::from)
        .map(|ref course| ApiSuccess::new(StatusCode::OK, course.into()))
}
