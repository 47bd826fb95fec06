//! Catalog Use Cases
//!
//! Read-only listings of the three entity collections. Grouped in one
//! module; each listing is a thin pass-through to its repository.

use crate::domain::entities::{Course, Instructor, Student};
use crate::domain::repository::{CourseRepository, InstructorRepository, StudentRepository};
use crate::error::RegistryResult;
use std::sync::Arc;

/// List Students Use Case
pub struct ListStudentsUseCase<S>
where
    S: StudentRepository,
{
    student_repo: Arc<S>,
}

impl<S> ListStudentsUseCase<S>
where
    S: StudentRepository,
{
    pub fn new(student_repo: Arc<S>) -> Self {
        Self { student_repo }
    }

    pub async fn execute(&self) -> RegistryResult<Vec<Student>> {
        self.student_repo.list().await
    }
}

/// List Instructors Use Case
pub struct ListInstructorsUseCase<I>
where
    I: InstructorRepository,
{
    instructor_repo: Arc<I>,
}

impl<I> ListInstructorsUseCase<I>
where
    I: InstructorRepository,
{
    pub fn new(instructor_repo: Arc<I>) -> Self {
        Self { instructor_repo }
    }

    pub async fn execute(&self) -> RegistryResult<Vec<Instructor>> {
        self.instructor_repo.list().await
    }
}

/// List Courses Use Case
pub struct ListCoursesUseCase<C>
where
    C: CourseRepository,
{
    course_repo: Arc<C>,
}

impl<C> ListCoursesUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repo: Arc<C>) -> Self {
        Self { course_repo }
    }

    pub async fn execute(&self) -> RegistryResult<Vec<Course>> {
        self.course_repo.list().await
    }
}
