use thiserror::Error;

/// Error type for CourseId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CourseIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for course text field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CourseFieldError {
    #[error("Course {field} is empty")]
    Empty { field: &'static str },

    #[error("Course {field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Error type for price validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price must not be negative")]
    Negative,

    #[error("Price must be a finite number")]
    NotFinite,
}

/// Top-level error type for all course-related operations
#[derive(Debug, Clone, Error)]
pub enum CourseError {
    #[error("Invalid course ID: {0}")]
    InvalidCourseId(#[from] CourseIdError),

    #[error("Invalid course field: {0}")]
    InvalidField(#[from] CourseFieldError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Course level already exists: {0}")]
    LevelAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
