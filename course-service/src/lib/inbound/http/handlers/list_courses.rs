use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::CourseResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CourseResponseData>>, ApiError> {
    state
        .course_service
        .list_courses()
        .await
        .map_err(ApiError::from)
        .map(|courses| {
            ApiSuccess::new(
                StatusCode::OK,
                courses.iter().map(CourseResponseData::from).collect(),
            )
        })
}
