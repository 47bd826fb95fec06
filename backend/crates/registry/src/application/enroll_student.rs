//! Enroll Student Use Case

use crate::domain::entities::Enrollment;
use crate::domain::repository::{CourseRepository, EnrollmentRepository, StudentRepository};
use crate::error::{RegistryError, RegistryResult};
use kernel::id::{CourseId, StudentId};
use std::sync::Arc;

/// Input DTO for enroll student
#[derive(Debug, Clone, Copy)]
pub struct EnrollStudentInput {
    pub student_id: i64,
    pub course_id: i64,
}

/// Enroll Student Use Case
///
/// Validation order: student existence, course existence, then the
/// duplicate-enrollment guard. Error messages always carry the identity
/// the caller supplied.
pub struct EnrollStudentUseCase<S, C, E>
where
    S: StudentRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    student_repo: Arc<S>,
    course_repo: Arc<C>,
    enrollment_repo: Arc<E>,
}

impl<S, C, E> EnrollStudentUseCase<S, C, E>
where
    S: StudentRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub fn new(student_repo: Arc<S>, course_repo: Arc<C>, enrollment_repo: Arc<E>) -> Self {
        Self {
            student_repo,
            course_repo,
            enrollment_repo,
        }
    }

    pub async fn execute(&self, input: EnrollStudentInput) -> RegistryResult<()> {
        let student_id = StudentId::from_i64(input.student_id);
        let course_id = CourseId::from_i64(input.course_id);

        if self.student_repo.find(student_id).await?.is_none() {
            return Err(RegistryError::StudentNotFound(input.student_id));
        }

        if self.course_repo.find(course_id).await?.is_none() {
            return Err(RegistryError::CourseNotFound(input.course_id));
        }

        if self
            .enrollment_repo
            .is_enrolled(student_id, course_id)
            .await?
        {
            return Err(RegistryError::AlreadyEnrolled {
                student_id: input.student_id,
                course_id: input.course_id,
            });
        }

        // The insert is conflict-guarded: if a concurrent request won the
        // race between the check above and this insert, zero rows land and
        // the same rejection is reported.
        let inserted = self
            .enrollment_repo
            .enroll(Enrollment {
                student_id,
                course_id,
            })
            .await?;

        if !inserted {
            return Err(RegistryError::AlreadyEnrolled {
                student_id: input.student_id,
                course_id: input.course_id,
            });
        }

        tracing::info!(
            student_id = %student_id,
            course_id = %course_id,
            "Student enrolled in course"
        );

        Ok(())
    }
}
