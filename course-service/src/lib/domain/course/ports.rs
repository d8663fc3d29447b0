use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::models::Course;
use crate::domain::course::models::CourseId;
use crate::domain::course::models::CreateCourseCommand;
use crate::domain::course::models::UpdateCourseCommand;

/// Port for course directory operations.
#[async_trait]
pub trait CourseServicePort: Send + Sync + 'static {
    /// Create a new course.
    ///
    /// # Errors
    /// * `LevelAlreadyExists` - Another course already uses this level
    /// * `DatabaseError` - Database operation failed
    async fn create_course(&self, command: CreateCourseCommand) -> Result<Course, CourseError>;

    /// List all courses ordered by level.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_courses(&self) -> Result<Vec<Course>, CourseError>;

    /// Retrieve a course by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Course does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_course(&self, id: &CourseId) -> Result<Course, CourseError>;

    /// Update the provided fields of a course.
    ///
    /// # Errors
    /// * `NotFound` - Course does not exist
    /// * `LevelAlreadyExists` - New level is used by another course
    /// * `DatabaseError` - Database operation failed
    async fn update_course(
        &self,
        id: &CourseId,
        command: UpdateCourseCommand,
    ) -> Result<Course, CourseError>;

    /// Delete a course.
    ///
    /// # Errors
    /// * `NotFound` - Course does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_course(&self, id: &CourseId) -> Result<(), CourseError>;
}

/// Persistence operations for courses.
#[async_trait]
pub trait CourseRepository: Send + Sync + 'static {
    /// Persist a new course.
    ///
    /// # Errors
    /// * `LevelAlreadyExists` - Level unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, course: Course) -> Result<Course, CourseError>;

    /// Retrieve all courses ordered by level.
    async fn list_all(&self) -> Result<Vec<Course>, CourseError>;

    /// Retrieve a course by identifier.
    ///
    /// # Returns
    /// Optional course (None if not found)
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseError>;

    /// Apply the provided fields of a partial update in a single write.
    ///
    /// Fields absent from the command keep their stored value, so concurrent
    /// updates of different fields do not overwrite each other.
    ///
    /// # Returns
    /// The course as stored after the update
    ///
    /// # Errors
    /// * `NotFound` - Course does not exist
    /// * `LevelAlreadyExists` - Level unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        id: &CourseId,
        command: UpdateCourseCommand,
    ) -> Result<Course, CourseError>;

    /// Remove a course.
    ///
    /// # Errors
    /// * `NotFound` - Course does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &CourseId) -> Result<(), CourseError>;
}
