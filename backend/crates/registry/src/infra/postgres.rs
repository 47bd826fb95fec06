//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{Course, Enrollment, Instructor, NewCourse, Student};
use crate::domain::repository::{
    CourseRepository, EnrollmentRepository, InstructorRepository, StudentRepository,
};
use crate::error::RegistryResult;
use kernel::id::{CourseId, InstructorId, StudentId};

/// PostgreSQL-backed registry repository
///
/// One pool, shared across all four repository traits. Every query checks a
/// connection out of the pool for its own duration, so each request holds
/// its session only while it is actually talking to the database.
#[derive(Clone)]
pub struct PgRegistryRepository {
    pool: PgPool,
}

impl PgRegistryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Student Repository Implementation
// ============================================================================

impl StudentRepository for PgRegistryRepository {
    async fn create(&self, name: &str) -> RegistryResult<StudentId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO students (student_name)
            VALUES ($1)
            RETURNING student_id
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(StudentId::from_i64(id))
    }

    async fn find(&self, student_id: StudentId) -> RegistryResult<Option<Student>> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT student_id, student_name, created_at
            FROM students
            WHERE student_id = $1
            "#,
        )
        .bind(student_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StudentRow::into_student))
    }

    async fn list(&self) -> RegistryResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT student_id, student_name, created_at
            FROM students
            ORDER BY student_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StudentRow::into_student).collect())
    }
}

// ============================================================================
// Instructor Repository Implementation
// ============================================================================

impl InstructorRepository for PgRegistryRepository {
    async fn create(&self, name: &str) -> RegistryResult<InstructorId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO instructors (instructor_name)
            VALUES ($1)
            RETURNING instructor_id
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(InstructorId::from_i64(id))
    }

    async fn find(&self, instructor_id: InstructorId) -> RegistryResult<Option<Instructor>> {
        let row = sqlx::query_as::<_, InstructorRow>(
            r#"
            SELECT instructor_id, instructor_name, created_at
            FROM instructors
            WHERE instructor_id = $1
            "#,
        )
        .bind(instructor_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(InstructorRow::into_instructor))
    }

    async fn list(&self) -> RegistryResult<Vec<Instructor>> {
        let rows = sqlx::query_as::<_, InstructorRow>(
            r#"
            SELECT instructor_id, instructor_name, created_at
            FROM instructors
            ORDER BY instructor_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(InstructorRow::into_instructor)
            .collect())
    }
}

// ============================================================================
// Course Repository Implementation
// ============================================================================

impl CourseRepository for PgRegistryRepository {
    async fn create(&self, course: &NewCourse) -> RegistryResult<CourseId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO courses (course_name, course_code, instructor_id)
            VALUES ($1, $2, $3)
            RETURNING course_id
            "#,
        )
        .bind(&course.name)
        .bind(course.code.as_deref())
        .bind(course.instructor_id.as_i64())
        .fetch_one(&self.pool)
        .await?;

        Ok(CourseId::from_i64(id))
    }

    async fn find(&self, course_id: CourseId) -> RegistryResult<Option<Course>> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT course_id, course_name, course_code, instructor_id, created_at
            FROM courses
            WHERE course_id = $1
            "#,
        )
        .bind(course_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CourseRow::into_course))
    }

    async fn list(&self) -> RegistryResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT course_id, course_name, course_code, instructor_id, created_at
            FROM courses
            ORDER BY course_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }

    async fn courses_for_instructor(
        &self,
        instructor_id: InstructorId,
    ) -> RegistryResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT course_id, course_name, course_code, instructor_id, created_at
            FROM courses
            WHERE instructor_id = $1
            ORDER BY course_id
            "#,
        )
        .bind(instructor_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_course).collect())
    }
}

// ============================================================================
// Enrollment Repository Implementation
// ============================================================================

impl EnrollmentRepository for PgRegistryRepository {
    async fn enroll(&self, enrollment: Enrollment) -> RegistryResult<bool> {
        // The composite primary key is the arbiter for concurrent duplicate
        // requests: the losing insert affects zero rows.
        let inserted = sqlx::query(
            r#"
            INSERT INTO enrollments (student_id, course_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, course_id) DO NOTHING
            "#,
        )
        .bind(enrollment.student_id.as_i64())
        .bind(enrollment.course_id.as_i64())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(inserted == 1)
    }

    async fn is_enrolled(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> RegistryResult<bool> {
        let enrolled = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM enrollments
                WHERE student_id = $1 AND course_id = $2
            )
            "#,
        )
        .bind(student_id.as_i64())
        .bind(course_id.as_i64())
        .fetch_one(&self.pool)
        .await?;

        Ok(enrolled)
    }

    async fn students_for_course(&self, course_id: CourseId) -> RegistryResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT s.student_id, s.student_name, s.created_at
            FROM students s
            JOIN enrollments e ON e.student_id = s.student_id
            WHERE e.course_id = $1
            ORDER BY e.enrolled_at, s.student_id
            "#,
        )
        .bind(course_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StudentRow::into_student).collect())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct StudentRow {
    student_id: i64,
    student_name: String,
    created_at: DateTime<Utc>,
}

impl StudentRow {
    fn into_student(self) -> Student {
        Student {
            id: StudentId::from_i64(self.student_id),
            name: self.student_name,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct InstructorRow {
    instructor_id: i64,
    instructor_name: String,
    created_at: DateTime<Utc>,
}

impl InstructorRow {
    fn into_instructor(self) -> Instructor {
        Instructor {
            id: InstructorId::from_i64(self.instructor_id),
            name: self.instructor_name,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CourseRow {
    course_id: i64,
    course_name: String,
    course_code: Option<String>,
    instructor_id: i64,
    created_at: DateTime<Utc>,
}

impl CourseRow {
    fn into_course(self) -> Course {
        Course {
            id: CourseId::from_i64(self.course_id),
            name: self.course_name,
            code: self.course_code,
            instructor_id: InstructorId::from_i64(self.instructor_id),
            created_at: self.created_at,
        }
    }
}
