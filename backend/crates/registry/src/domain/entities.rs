//! Domain Entities
//!
//! Core entities of the course registry. Identities are assigned by the
//! database on insert; constructors for new entities therefore only exist
//! for the insertable fields.

use chrono::{DateTime, Utc};
use kernel::id::{CourseId, InstructorId, StudentId};

/// Student entity
#[derive(Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Instructor entity
#[derive(Debug, Clone)]
pub struct Instructor {
    pub id: InstructorId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Course entity - always owned by exactly one instructor
#[derive(Debug, Clone)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub code: Option<String>,
    pub instructor_id: InstructorId,
    pub created_at: DateTime<Utc>,
}

/// Insertable course fields, before the database assigns an identity
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub code: Option<String>,
    pub instructor_id: InstructorId,
}

/// Enrollment - the association record linking one student to one course
///
/// The (student_id, course_id) pair is unique.
#[derive(Debug, Clone, Copy)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}
