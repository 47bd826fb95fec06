//! Registry Router

use crate::domain::repository::{
    CourseRepository, EnrollmentRepository, InstructorRepository, StudentRepository,
};
use crate::infra::postgres::PgRegistryRepository;
use crate::presentation::handlers::{self, RegistryAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the registry router with PostgreSQL repository
pub fn registry_router(repo: PgRegistryRepository) -> Router {
    registry_router_generic(repo)
}

/// Create a generic registry router for any repository implementation
pub fn registry_router_generic<R>(repo: R) -> Router
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
    let state = RegistryAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/students",
            get(handlers::list_students::<R>).post(handlers::create_student::<R>),
        )
        .route(
            "/instructors",
            get(handlers::list_instructors::<R>).post(handlers::create_instructor::<R>),
        )
        .route(
            "/courses",
            get(handlers::list_courses::<R>).post(handlers::create_course::<R>),
        )
        .route(
            "/courses/{course_id}/students",
            get(handlers::list_course_students::<R>).post(handlers::enroll_student::<R>),
        )
        .with_state(state)
}
