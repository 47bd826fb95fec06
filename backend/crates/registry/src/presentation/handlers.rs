//! HTTP Handlers

use crate::application::catalog::{
    ListCoursesUseCase, ListInstructorsUseCase, ListStudentsUseCase,
};
use crate::application::course_students::CourseStudentsUseCase;
use crate::application::create_course::{CreateCourseInput, CreateCourseUseCase};
use crate::application::create_instructor::{CreateInstructorInput, CreateInstructorUseCase};
use crate::application::create_student::{CreateStudentInput, CreateStudentUseCase};
use crate::application::enroll_student::{EnrollStudentInput, EnrollStudentUseCase};
use crate::domain::repository::{
    CourseRepository, EnrollmentRepository, InstructorRepository, StudentRepository,
};
use crate::error::RegistryResult;
use crate::presentation::dto::{
    CourseResponse, CreateCourseRequest, CreateInstructorRequest, CreateStudentRequest,
    CreatedResponse, EnrollStudentRequest, InstructorResponse, StudentResponse,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

/// Shared state for registry handlers
#[derive(Clone)]
pub struct RegistryAppState<R>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
}

/// GET /students
pub async fn list_students<R>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<StudentResponse>>>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListStudentsUseCase::new(state.repo.clone());

    let students = use_case.execute().await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// GET /instructors
pub async fn list_instructors<R>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<InstructorResponse>>>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListInstructorsUseCase::new(state.repo.clone());

    let instructors = use_case.execute().await?;

    Ok(Json(instructors.into_iter().map(Into::into).collect()))
}

/// GET /courses
pub async fn list_courses<R>(
    State(state): State<RegistryAppState<R>>,
) -> RegistryResult<Json<Vec<CourseResponse>>>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = ListCoursesUseCase::new(state.repo.clone());

    let courses = use_case.execute().await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// GET /courses/{course_id}/students
pub async fn list_course_students<R>(
    State(state): State<RegistryAppState<R>>,
    Path(course_id): Path<i64>,
) -> RegistryResult<Json<Vec<StudentResponse>>>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = CourseStudentsUseCase::new(state.repo.clone(), state.repo.clone());

    let students = use_case.execute(course_id).await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// POST /students
pub async fn create_student<R>(
    State(state): State<RegistryAppState<R>>,
    Json(req): Json<CreateStudentRequest>,
) -> RegistryResult<impl IntoResponse>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = CreateStudentUseCase::new(state.repo.clone());

    let student_id = use_case
        .execute(CreateStudentInput { name: req.name })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: student_id.as_i64(),
        }),
    ))
}

/// POST /instructors
pub async fn create_instructor<R>(
    State(state): State<RegistryAppState<R>>,
    Json(req): Json<CreateInstructorRequest>,
) -> RegistryResult<impl IntoResponse>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = CreateInstructorUseCase::new(state.repo.clone());

    let instructor_id = use_case
        .execute(CreateInstructorInput { name: req.name })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: instructor_id.as_i64(),
        }),
    ))
}

/// POST /courses
pub async fn create_course<R>(
    State(state): State<RegistryAppState<R>>,
    Json(req): Json<CreateCourseRequest>,
) -> RegistryResult<impl IntoResponse>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = CreateCourseUseCase::new(state.repo.clone(), state.repo.clone());

    let input = CreateCourseInput {
        name: req.name,
        code: req.code,
        instructor_id: req.instructor_id,
    };

    let course_id = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: course_id.as_i64(),
        }),
    ))
}

/// POST /courses/{course_id}/students
pub async fn enroll_student<R>(
    State(state): State<RegistryAppState<R>>,
    Path(course_id): Path<i64>,
    Json(req): Json<EnrollStudentRequest>,
) -> RegistryResult<impl IntoResponse>
where
    R: StudentRepository
        + InstructorRepository
        + CourseRepository
        + EnrollmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = EnrollStudentUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
    );

    let input = EnrollStudentInput {
        student_id: req.student_id,
        course_id,
    };

    use_case.execute(input).await?;

    Ok((StatusCode::CREATED, ()))
}
