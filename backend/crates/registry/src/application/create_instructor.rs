//! Create Instructor Use Case

use crate::domain::repository::InstructorRepository;
use crate::error::{RegistryError, RegistryResult};
use kernel::id::InstructorId;
use std::sync::Arc;

/// Input DTO for create instructor
#[derive(Debug, Clone)]
pub struct CreateInstructorInput {
    pub name: String,
}

/// Create Instructor Use Case
pub struct CreateInstructorUseCase<I>
where
    I: InstructorRepository,
{
    instructor_repo: Arc<I>,
}

impl<I> CreateInstructorUseCase<I>
where
    I: InstructorRepository,
{
    pub fn new(instructor_repo: Arc<I>) -> Self {
        Self { instructor_repo }
    }

    pub async fn execute(&self, input: CreateInstructorInput) -> RegistryResult<InstructorId> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let instructor_id = self.instructor_repo.create(name).await?;

        tracing::info!(instructor_id = %instructor_id, "Instructor created");

        Ok(instructor_id)
    }
}
