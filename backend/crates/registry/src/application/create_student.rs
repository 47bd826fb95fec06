//! Create Student Use Case

use crate::domain::repository::StudentRepository;
use crate::error::{RegistryError, RegistryResult};
use kernel::id::StudentId;
use std::sync::Arc;

/// Input DTO for create student
#[derive(Debug, Clone)]
pub struct CreateStudentInput {
    pub name: String,
}

/// Create Student Use Case
pub struct CreateStudentUseCase<S>
where
    S: StudentRepository,
{
    student_repo: Arc<S>,
}

impl<S> CreateStudentUseCase<S>
where
    S: StudentRepository,
{
    pub fn new(student_repo: Arc<S>) -> Self {
        Self { student_repo }
    }

    pub async fn execute(&self, input: CreateStudentInput) -> RegistryResult<StudentId> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let student_id = self.student_repo.create(name).await?;

        tracing::info!(student_id = %student_id, "Student created");

        Ok(student_id)
    }
}
