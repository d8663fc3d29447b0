use std::fmt;

use uuid::Uuid;

use crate::domain::course::errors::CourseFieldError;
use crate::domain::course::errors::CourseIdError;
use crate::domain::course::errors::PriceError;

/// Course entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub name: CourseName,
    pub description: CourseDescription,
    pub level: CourseLevel,
    pub price: Price,
}

/// Course unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(pub Uuid);

impl CourseId {
    /// Generate a new random course ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a course ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CourseIdError> {
        Uuid::parse_str(s)
            .map(CourseId)
            .map_err(|e| CourseIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn required_text(
    field: &'static str,
    value: String,
    max: Option<usize>,
) -> Result<String, CourseFieldError> {
    let value = value.trim();
    let length = value.chars().count();

    if length == 0 {
        return Err(CourseFieldError::Empty { field });
    }

    match max {
        Some(max) if length > max => Err(CourseFieldError::TooLong {
            field,
            max,
            actual: length,
        }),
        _ => Ok(value.to_string()),
    }
}

/// Course display name (1-128 characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseName(String);

impl CourseName {
    const MAX_LENGTH: usize = 128;

    pub fn new(name: String) -> Result<Self, CourseFieldError> {
        required_text("name", name, Some(Self::MAX_LENGTH)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form course description; must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDescription(String);

impl CourseDescription {
    pub fn new(description: String) -> Result<Self, CourseFieldError> {
        required_text("description", description, None).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Course level. Unique across all courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLevel(String);

impl CourseLevel {
    const MAX_LENGTH: usize = 128;

    pub fn new(level: String) -> Result<Self, CourseFieldError> {
        required_text("level", level, Some(Self::MAX_LENGTH)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Course price: finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            Err(PriceError::NotFinite)
        } else if amount < 0.0 {
            Err(PriceError::Negative)
        } else {
            Ok(Self(amount))
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

/// Command to create a course with validated fields.
#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub name: CourseName,
    pub description: CourseDescription,
    pub level: CourseLevel,
    pub price: Price,
}

/// Command to update an existing course.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseCommand {
    pub name: Option<CourseName>,
    pub description: Option<CourseDescription>,
    pub level: Option<CourseLevel>,
    pub price: Option<Price>,
}

impl UpdateCourseCommand {
    /// Apply the provided fields to a course.
    pub fn apply_to(self, course: &mut Course) {
        if let Some(name) = self.name {
            course.name = name;
        }
        if let Some(description) = self.description {
            course.description = description;
        }
        if let Some(level) = self.level {
            course.level = level;
        }
        if let Some(price) = self.price {
            course.price = price;
        }
    }
}
