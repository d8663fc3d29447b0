use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::models::Course;
use crate::domain::course::models::CourseId;
use crate::domain::course::models::CreateCourseCommand;
use crate::domain::course::models::UpdateCourseCommand;
use crate::domain::course::ports::CourseRepository;
use crate::domain::course::ports::CourseServicePort;

/// Domain service implementation for course operations.
pub struct CourseService<CR>
where
    CR: CourseRepository,
{
    repository: Arc<CR>,
}

impl<CR> CourseService<CR>
where
    CR: CourseRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CourseServicePort for CourseService<CR>
where
    CR: CourseRepository,
{
    async fn create_course(&self, command: CreateCourseCommand) -> Result<Course, CourseError> {
        let course = Course {
            id: CourseId::new(),
            name: command.name,
            description: command.description,
            level: command.level,
            price: command.price,
        };

        let created = self.repository.create(course).await?;
        tracing::info!(course_id = %created.id, level = %created.level, "Course created");

        Ok(created)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, CourseError> {
        self.repository.list_all().await
    }

    async fn get_course(&self, id: &CourseId) -> Result<Course, CourseError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CourseError::NotFound(id.to_string()))
    }

    async fn update_course(
        &self,
        id: &CourseId,
        command: UpdateCourseCommand,
    ) -> Result<Course, CourseError> {
        let updated = self.repository.update(id, command).await?;
        tracing::info!(course_id = %updated.id, "Course updated");

        Ok(updated)
    }

    async fn delete_course(&self, id: &CourseId) -> Result<(), CourseError> {
        self.repository.delete(id).await?;
        tracing::info!(course_id = %id, "Course deleted");

        Ok(())
    }
}
