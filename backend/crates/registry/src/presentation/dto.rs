//! API DTOs (Data Transfer Objects)
//!
//! Wire field names stay snake_case; this is the service's published
//! contract (`student_id`, `instructor_id`).

use crate::domain::entities::{Course, Instructor, Student};
use serde::{Deserialize, Serialize};

/// Request for POST /students
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
}

/// Request for POST /instructors
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstructorRequest {
    pub name: String,
}

/// Request for POST /courses
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub instructor_id: i64,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Request for POST /courses/{course_id}/students
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}

/// Response for creation endpoints - the database-assigned identity
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Student as serialized in listings
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id.as_i64(),
            name: student.name,
        }
    }
}

/// Instructor as serialized in listings
#[derive(Debug, Clone, Serialize)]
pub struct InstructorResponse {
    pub id: i64,
    pub name: String,
}

impl From<Instructor> for InstructorResponse {
    fn from(instructor: Instructor) -> Self {
        Self {
            id: instructor.id.as_i64(),
            name: instructor.name,
        }
    }
}

/// Course as serialized in listings
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub instructor_id: i64,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.as_i64(),
            name: course.name,
            code: course.code,
            instructor_id: course.instructor_id.as_i64(),
        }
    }
}
