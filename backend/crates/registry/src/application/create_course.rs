//! Create Course Use Case

use crate::domain::entities::NewCourse;
use crate::domain::repository::{CourseRepository, InstructorRepository};
use crate::error::{RegistryError, RegistryResult};
use kernel::id::{CourseId, InstructorId};
use std::sync::Arc;

/// Input DTO for create course
#[derive(Debug, Clone)]
pub struct CreateCourseInput {
    pub name: String,
    pub code: Option<String>,
    pub instructor_id: i64,
}

/// Create Course Use Case
pub struct CreateCourseUseCase<C, I>
where
    C: CourseRepository,
    I: InstructorRepository,
{
    course_repo: Arc<C>,
    instructor_repo: Arc<I>,
}

impl<C, I> CreateCourseUseCase<C, I>
where
    C: CourseRepository,
    I: InstructorRepository,
{
    pub fn new(course_repo: Arc<C>, instructor_repo: Arc<I>) -> Self {
        Self {
            course_repo,
            instructor_repo,
        }
    }

    pub async fn execute(&self, input: CreateCourseInput) -> RegistryResult<CourseId> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        // The owning instructor must exist before the row is inserted
        let instructor_id = InstructorId::from_i64(input.instructor_id);
        if self.instructor_repo.find(instructor_id).await?.is_none() {
            return Err(RegistryError::InstructorNotFound(input.instructor_id));
        }

        let course = NewCourse {
            name: name.to_string(),
            code: input.code,
            instructor_id,
        };

        let course_id = self.course_repo.create(&course).await?;

        tracing::info!(
            course_id = %course_id,
            instructor_id = %instructor_id,
            "Course created"
        );

        Ok(course_id)
    }
}
