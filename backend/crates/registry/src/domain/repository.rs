//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Relationship traversal is explicit (`students_for_course`,
//! `courses_for_instructor`) rather than hidden behind managed collections.

use crate::domain::entities::{Course, Enrollment, Instructor, NewCourse, Student};
use crate::error::RegistryResult;
use kernel::id::{CourseId, InstructorId, StudentId};

/// Student repository trait
#[trait_variant::make(StudentRepository: Send)]
pub trait LocalStudentRepository {
    /// Insert a new student, returning the database-assigned identity
    async fn create(&self, name: &str) -> RegistryResult<StudentId>;

    /// Get a student by ID
    async fn find(&self, student_id: StudentId) -> RegistryResult<Option<Student>>;

    /// List all students in storage order
    async fn list(&self) -> RegistryResult<Vec<Student>>;
}

/// Instructor repository trait
#[trait_variant::make(InstructorRepository: Send)]
pub trait LocalInstructorRepository {
    /// Insert a new instructor, returning the database-assigned identity
    async fn create(&self, name: &str) -> RegistryResult<InstructorId>;

    /// Get an instructor by ID
    async fn find(&self, instructor_id: InstructorId) -> RegistryResult<Option<Instructor>>;

    /// List all instructors in storage order
    async fn list(&self) -> RegistryResult<Vec<Instructor>>;
}

/// Course repository trait
#[trait_variant::make(CourseRepository: Send)]
pub trait LocalCourseRepository {
    /// Insert a new course, returning the database-assigned identity
    ///
    /// The referenced instructor must already exist; callers check first.
    async fn create(&self, course: &NewCourse) -> RegistryResult<CourseId>;

    /// Get a course by ID
    async fn find(&self, course_id: CourseId) -> RegistryResult<Option<Course>>;

    /// List all courses in storage order
    async fn list(&self) -> RegistryResult<Vec<Course>>;

    /// List the courses owned by an instructor
    async fn courses_for_instructor(
        &self,
        instructor_id: InstructorId,
    ) -> RegistryResult<Vec<Course>>;
}

/// Enrollment repository trait
#[trait_variant::make(EnrollmentRepository: Send)]
pub trait LocalEnrollmentRepository {
    /// Record an enrollment
    ///
    /// Returns `false` when the (student, course) pair already exists; the
    /// storage layer settles concurrent duplicates to a single row.
    async fn enroll(&self, enrollment: Enrollment) -> RegistryResult<bool>;

    /// Check whether a student is enrolled in a course
    async fn is_enrolled(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> RegistryResult<bool>;

    /// List the students enrolled in a course, in enrollment order
    async fn students_for_course(&self, course_id: CourseId) -> RegistryResult<Vec<Student>>;
}
