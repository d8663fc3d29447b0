use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::course::errors::CourseError;
use crate::domain::course::models::CourseId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let course_id = CourseId::from_string(&id).map_err(CourseError::from)?;

    state
        .course_service
        .delete_course(&course_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
