//! Course Students Use Case
//!
//! Lists the students enrolled in one course.

use crate::domain::entities::Student;
use crate::domain::repository::{CourseRepository, EnrollmentRepository};
use crate::error::{RegistryError, RegistryResult};
use kernel::id::CourseId;
use std::sync::Arc;

/// Course Students Use Case
pub struct CourseStudentsUseCase<C, E>
where
    C: CourseRepository,
    E: EnrollmentRepository,
{
    course_repo: Arc<C>,
    enrollment_repo: Arc<E>,
}

impl<C, E> CourseStudentsUseCase<C, E>
where
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub fn new(course_repo: Arc<C>, enrollment_repo: Arc<E>) -> Self {
        Self {
            course_repo,
            enrollment_repo,
        }
    }

    pub async fn execute(&self, course_id: i64) -> RegistryResult<Vec<Student>> {
        let id = CourseId::from_i64(course_id);

        if self.course_repo.find(id).await?.is_none() {
            return Err(RegistryError::CourseNotFound(course_id));
        }

        self.enrollment_repo.students_for_course(id).await
    }
}
