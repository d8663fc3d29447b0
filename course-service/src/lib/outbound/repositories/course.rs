use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::course::errors::CourseError;
use crate::domain::course::models::Course;
use crate::domain::course::models::CourseDescription;
use crate::domain::course::models::CourseId;
use crate::domain::course::models::CourseLevel;
use crate::domain::course::models::CourseName;
use crate::domain::course::models::Price;
use crate::domain::course::models::UpdateCourseCommand;
use crate::domain::course::ports::CourseRepository;

const LEVEL_UNIQUE_CONSTRAINT: &str = "courses_level_key";

pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_course(row: PgRow) -> Result<Course, CourseError> {
        let id: uuid::Uuid = row.try_get("id").map_err(database_error)?;
        let name: String = row.try_get("name").map_err(database_error)?;
        let description: String = row.try_get("description").map_err(database_error)?;
        let level: String = row.try_get("level").map_err(database_error)?;
        let price: f64 = row.try_get("price").map_err(database_error)?;

        Ok(Course {
            id: CourseId(id),
            name: CourseName::new(name)?,
            description: CourseDescription::new(description)?,
            level: CourseLevel::new(level)?,
            price: Price::new(price)?,
        })
    }

    /// Map a write failure, recognising the level unique constraint.
    fn write_error(e: sqlx::Error, level: &str) -> CourseError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some(LEVEL_UNIQUE_CONSTRAINT)
            {
                return CourseError::LevelAlreadyExists(level.to_string());
            }
        }
        database_error(e)
    }
}

fn database_error(e: sqlx::Error) -> CourseError {
    CourseError::DatabaseError(e.to_string())
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn create(&self, course: Course) -> Result<Course, CourseError> {
        sqlx::query(
            r#"
            INSERT INTO courses (id, name, description, level, price)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(course.id.0)
        .bind(course.name.as_str())
        .bind(course.description.as_str())
        .bind(course.level.as_str())
        .bind(course.price.amount())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::write_error(e, course.level.as_str()))?;

        Ok(course)
    }

    async fn list_all(&self) -> Result<Vec<Course>, CourseError> {
        sqlx::query(
            r#"
            SELECT id, name, description, level, price
            FROM courses
            ORDER BY level ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Self::row_to_course)
        .collect()
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, CourseError> {
        sqlx::query(
            r#"
            SELECT id, name, description, level, price
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Self::row_to_course)
        .transpose()
    }

    async fn update(
        &self,
        id: &CourseId,
        command: UpdateCourseCommand,
    ) -> Result<Course, CourseError> {
        let level = command.level.as_ref().map(|level| level.as_str().to_string());

        sqlx::query(
            r#"
            UPDATE courses
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                level = COALESCE($4, level),
                price = COALESCE($5, price)
            WHERE id = $1
            RETURNING id, name, description, level, price
            "#,
        )
        .bind(id.0)
        .bind(command.name.as_ref().map(|name| name.as_str()))
        .bind(command.description.as_ref().map(|description| description.as_str()))
        .bind(level.as_deref())
        .bind(command.price.map(|price| price.amount()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::write_error(e, level.as_deref().unwrap_or_default()))?
        .map(Self::row_to_course)
        .transpose()?
        .ok_or_else(|| CourseError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &CourseId) -> Result<(), CourseError> {
        let result = sqlx::query(
            r#"
            DELETE FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(CourseError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
