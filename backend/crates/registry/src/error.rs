//! Registry Error Types
//!
//! This module provides registry-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Registry-specific result type alias
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status codes
/// and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Referenced student does not exist
    #[error("Student with ID {0} not found")]
    StudentNotFound(i64),

    /// Referenced instructor does not exist
    #[error("No instructor with ID {0} found")]
    InstructorNotFound(i64),

    /// Referenced course does not exist
    ///
    /// Always carries the course id as requested by the caller.
    #[error("Course with ID {0} not found")]
    CourseNotFound(i64),

    /// Student is already enrolled in the course
    #[error("Student {student_id} already enrolled in course {course_id}")]
    AlreadyEnrolled { student_id: i64, course_id: i64 },

    /// Entity name is empty or whitespace-only
    #[error("Name must not be empty")]
    EmptyName,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::StudentNotFound(_)
            | RegistryError::InstructorNotFound(_)
            | RegistryError::CourseNotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::AlreadyEnrolled { .. } => StatusCode::BAD_REQUEST,
            RegistryError::EmptyName => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::StudentNotFound(_)
            | RegistryError::InstructorNotFound(_)
            | RegistryError::CourseNotFound(_) => ErrorKind::NotFound,
            RegistryError::AlreadyEnrolled { .. } => ErrorKind::BadRequest,
            RegistryError::EmptyName => ErrorKind::UnprocessableEntity,
            RegistryError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RegistryError::Database(e) => {
                tracing::error!(error = %e, "Registry database error");
            }
            RegistryError::AlreadyEnrolled {
                student_id,
                course_id,
            } => {
                tracing::debug!(
                    student_id = student_id,
                    course_id = course_id,
                    "Duplicate enrollment rejected"
                );
            }
            _ => {
                tracing::debug!(error = %self, "Registry error");
            }
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Database(e) => AppError::internal("Database error").with_source(e),
            _ => AppError::new(err.kind(), err.to_string()),
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
