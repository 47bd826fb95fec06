//! Unit tests for the registry crate
//!
//! Use cases and handlers are exercised against an in-memory repository
//! substituted through the same trait seam as PostgreSQL.

use crate::domain::entities::{Course, Enrollment, Instructor, NewCourse, Student};
use crate::domain::repository::{
    CourseRepository, EnrollmentRepository, InstructorRepository, StudentRepository,
};
use crate::error::RegistryResult;
use chrono::Utc;
use kernel::id::{CourseId, InstructorId, StudentId};
use std::sync::{Arc, Mutex};

/// In-memory repository backing all four traits
///
/// Identities are assigned sequentially per entity, mirroring the database's
/// serial columns. Enrollment insertion order is preserved.
#[derive(Clone, Default)]
struct MemRegistry {
    inner: Arc<Mutex<MemState>>,
}

#[derive(Default)]
struct MemState {
    students: Vec<Student>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl MemRegistry {
    fn new() -> Self {
        Self::default()
    }

    fn course_count(&self) -> usize {
        self.inner.lock().unwrap().courses.len()
    }

    fn enrollment_count(&self) -> usize {
        self.inner.lock().unwrap().enrollments.len()
    }
}

impl StudentRepository for MemRegistry {
    async fn create(&self, name: &str) -> RegistryResult<StudentId> {
        let mut state = self.inner.lock().unwrap();
        let id = StudentId::from_i64(state.students.len() as i64 + 1);
        state.students.push(Student {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find(&self, student_id: StudentId) -> RegistryResult<Option<Student>> {
        let state = self.inner.lock().unwrap();
        Ok(state.students.iter().find(|s| s.id == student_id).cloned())
    }

    async fn list(&self) -> RegistryResult<Vec<Student>> {
        Ok(self.inner.lock().unwrap().students.clone())
    }
}

impl InstructorRepository for MemRegistry {
    async fn create(&self, name: &str) -> RegistryResult<InstructorId> {
        let mut state = self.inner.lock().unwrap();
        let id = InstructorId::from_i64(state.instructors.len() as i64 + 1);
        state.instructors.push(Instructor {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find(&self, instructor_id: InstructorId) -> RegistryResult<Option<Instructor>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .instructors
            .iter()
            .find(|i| i.id == instructor_id)
            .cloned())
    }

    async fn list(&self) -> RegistryResult<Vec<Instructor>> {
        Ok(self.inner.lock().unwrap().instructors.clone())
    }
}

impl CourseRepository for MemRegistry {
    async fn create(&self, course: &NewCourse) -> RegistryResult<CourseId> {
        let mut state = self.inner.lock().unwrap();
        let id = CourseId::from_i64(state.courses.len() as i64 + 1);
        state.courses.push(Course {
            id,
            name: course.name.clone(),
            code: course.code.clone(),
            instructor_id: course.instructor_id,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find(&self, course_id: CourseId) -> RegistryResult<Option<Course>> {
        let state = self.inner.lock().unwrap();
        Ok(state.courses.iter().find(|c| c.id == course_id).cloned())
    }

    async fn list(&self) -> RegistryResult<Vec<Course>> {
        Ok(self.inner.lock().unwrap().courses.clone())
    }

    async fn courses_for_instructor(
        &self,
        instructor_id: InstructorId,
    ) -> RegistryResult<Vec<Course>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .courses
            .iter()
            .filter(|c| c.instructor_id == instructor_id)
            .cloned()
            .collect())
    }
}

impl EnrollmentRepository for MemRegistry {
    async fn enroll(&self, enrollment: Enrollment) -> RegistryResult<bool> {
        let mut state = self.inner.lock().unwrap();
        let exists = state.enrollments.iter().any(|e| {
            e.student_id == enrollment.student_id && e.course_id == enrollment.course_id
        });
        if exists {
            // Same contract as the conflict-guarded insert: zero rows land
            return Ok(false);
        }
        state.enrollments.push(enrollment);
        Ok(true)
    }

    async fn is_enrolled(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> RegistryResult<bool> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.course_id == course_id))
    }

    async fn students_for_course(&self, course_id: CourseId) -> RegistryResult<Vec<Student>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .filter_map(|e| state.students.iter().find(|s| s.id == e.student_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::*;
    use crate::application::catalog::ListStudentsUseCase;
    use crate::application::course_students::CourseStudentsUseCase;
    use crate::application::create_course::{CreateCourseInput, CreateCourseUseCase};
    use crate::application::create_instructor::{CreateInstructorInput, CreateInstructorUseCase};
    use crate::application::create_student::{CreateStudentInput, CreateStudentUseCase};
    use crate::application::enroll_student::{EnrollStudentInput, EnrollStudentUseCase};
    use crate::error::RegistryError;

    fn repo() -> Arc<MemRegistry> {
        Arc::new(MemRegistry::new())
    }

    async fn seed_student(repo: &Arc<MemRegistry>, name: &str) -> i64 {
        CreateStudentUseCase::new(repo.clone())
            .execute(CreateStudentInput {
                name: name.to_string(),
            })
            .await
            .unwrap()
            .as_i64()
    }

    async fn seed_instructor(repo: &Arc<MemRegistry>, name: &str) -> i64 {
        CreateInstructorUseCase::new(repo.clone())
            .execute(CreateInstructorInput {
                name: name.to_string(),
            })
            .await
            .unwrap()
            .as_i64()
    }

    async fn seed_course(repo: &Arc<MemRegistry>, name: &str, instructor_id: i64) -> i64 {
        CreateCourseUseCase::new(repo.clone(), repo.clone())
            .execute(CreateCourseInput {
                name: name.to_string(),
                code: None,
                instructor_id,
            })
            .await
            .unwrap()
            .as_i64()
    }

    #[tokio::test]
    async fn test_create_student_then_list_includes_once() {
        let repo = repo();
        let id = seed_student(&repo, "Ada").await;

        let students = ListStudentsUseCase::new(repo.clone()).execute().await.unwrap();
        let matching: Vec<_> = students.iter().filter(|s| s.id.as_i64() == id).collect();

        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_create_student_trims_name() {
        let repo = repo();
        seed_student(&repo, "  Ada  ").await;

        let students = ListStudentsUseCase::new(repo.clone()).execute().await.unwrap();
        assert_eq!(students[0].name, "Ada");
    }

    #[tokio::test]
    async fn test_create_student_rejects_empty_name() {
        let repo = repo();
        let result = CreateStudentUseCase::new(repo.clone())
            .execute(CreateStudentInput {
                name: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RegistryError::EmptyName)));
    }

    #[tokio::test]
    async fn test_sequential_identity_assignment() {
        let repo = repo();
        assert_eq!(seed_student(&repo, "A").await, 1);
        assert_eq!(seed_student(&repo, "B").await, 2);
        assert_eq!(seed_student(&repo, "C").await, 3);
    }

    #[tokio::test]
    async fn test_create_course_with_missing_instructor_creates_no_row() {
        let repo = repo();
        let result = CreateCourseUseCase::new(repo.clone(), repo.clone())
            .execute(CreateCourseInput {
                name: "Databases".to_string(),
                code: None,
                instructor_id: 42,
            })
            .await;

        assert!(matches!(result, Err(RegistryError::InstructorNotFound(42))));
        assert_eq!(repo.course_count(), 0);
    }

    #[tokio::test]
    async fn test_enroll_twice_rejects_second_and_keeps_count_at_one() {
        let repo = repo();
        let instructor_id = seed_instructor(&repo, "A").await;
        let course_id = seed_course(&repo, "X", instructor_id).await;
        let student_id = seed_student(&repo, "B").await;

        let use_case =
            EnrollStudentUseCase::new(repo.clone(), repo.clone(), repo.clone());
        let input = EnrollStudentInput {
            student_id,
            course_id,
        };

        use_case.execute(input).await.unwrap();
        let second = use_case.execute(input).await;

        assert!(matches!(
            second,
            Err(RegistryError::AlreadyEnrolled { .. })
        ));
        assert_eq!(repo.enrollment_count(), 1);
    }

    #[tokio::test]
    async fn test_enroll_missing_student_mutates_nothing() {
        let repo = repo();
        let instructor_id = seed_instructor(&repo, "A").await;
        let course_id = seed_course(&repo, "X", instructor_id).await;

        let result = EnrollStudentUseCase::new(repo.clone(), repo.clone(), repo.clone())
            .execute(EnrollStudentInput {
                student_id: 99,
                course_id,
            })
            .await;

        assert!(matches!(result, Err(RegistryError::StudentNotFound(99))));
        assert_eq!(repo.enrollment_count(), 0);
    }

    #[tokio::test]
    async fn test_enroll_missing_course_reports_requested_id() {
        let repo = repo();
        let student_id = seed_student(&repo, "B").await;

        let result = EnrollStudentUseCase::new(repo.clone(), repo.clone(), repo.clone())
            .execute(EnrollStudentInput {
                student_id,
                course_id: 77,
            })
            .await;

        match result {
            Err(RegistryError::CourseNotFound(id)) => assert_eq!(id, 77),
            other => panic!("expected CourseNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_enroll_checks_student_before_course() {
        let repo = repo();

        // Both absent: the student check runs first
        let result = EnrollStudentUseCase::new(repo.clone(), repo.clone(), repo.clone())
            .execute(EnrollStudentInput {
                student_id: 5,
                course_id: 7,
            })
            .await;

        assert!(matches!(result, Err(RegistryError::StudentNotFound(5))));
    }

    #[tokio::test]
    async fn test_course_students_of_missing_course_fails() {
        let repo = repo();
        let result = CourseStudentsUseCase::new(repo.clone(), repo.clone())
            .execute(12)
            .await;

        assert!(matches!(result, Err(RegistryError::CourseNotFound(12))));
    }

    #[tokio::test]
    async fn test_course_students_empty_roster() {
        let repo = repo();
        let instructor_id = seed_instructor(&repo, "A").await;
        let course_id = seed_course(&repo, "X", instructor_id).await;

        let students = CourseStudentsUseCase::new(repo.clone(), repo.clone())
            .execute(course_id)
            .await
            .unwrap();

        assert!(students.is_empty());
    }

    #[tokio::test]
    async fn test_storage_layer_settles_duplicate_enrollment() {
        // Two requests that both passed the is_enrolled check race to the
        // insert; the storage layer accepts exactly one.
        let repo = repo();
        let instructor_id = seed_instructor(&repo, "A").await;
        let course_id = seed_course(&repo, "X", instructor_id).await;
        let student_id = seed_student(&repo, "B").await;

        let enrollment = Enrollment {
            student_id: StudentId::from_i64(student_id),
            course_id: CourseId::from_i64(course_id),
        };

        assert!(EnrollmentRepository::enroll(&*repo, enrollment).await.unwrap());
        assert!(!EnrollmentRepository::enroll(&*repo, enrollment).await.unwrap());
        assert_eq!(repo.enrollment_count(), 1);
    }

    #[tokio::test]
    async fn test_courses_for_instructor() {
        let repo = repo();
        let first = seed_instructor(&repo, "A").await;
        let second = seed_instructor(&repo, "B").await;
        seed_course(&repo, "X", first).await;
        seed_course(&repo, "Y", second).await;
        seed_course(&repo, "Z", first).await;

        let courses =
            CourseRepository::courses_for_instructor(&*repo, InstructorId::from_i64(first))
                .await
                .unwrap();

        let names: Vec<_> = courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Z"]);
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use crate::presentation::router::registry_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, Response, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        registry_router_generic(MemRegistry::new())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_listings_start_empty() {
        let app = app();

        for uri in ["/students", "/instructors", "/courses"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!([]));
        }
    }

    #[tokio::test]
    async fn test_end_to_end_enrollment_scenario() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/instructors", json!({"name": "A"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"id": 1}));

        let response = app
            .clone()
            .oneshot(post_json(
                "/courses",
                json!({"instructor_id": 1, "name": "X"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"id": 1}));

        let response = app
            .clone()
            .oneshot(post_json("/students", json!({"name": "B"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"id": 1}));

        let response = app
            .clone()
            .oneshot(post_json("/courses/1/students", json!({"student_id": 1})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(get("/courses/1/students"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([{"id": 1, "name": "B"}]));
    }

    #[tokio::test]
    async fn test_duplicate_enrollment_returns_400_and_roster_stays_at_one() {
        let app = app();

        app.clone()
            .oneshot(post_json("/instructors", json!({"name": "A"})))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json(
                "/courses",
                json!({"instructor_id": 1, "name": "X"}),
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json("/students", json!({"name": "B"})))
            .await
            .unwrap();

        let first = app
            .clone()
            .oneshot(post_json("/courses/1/students", json!({"student_id": 1})))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .clone()
            .oneshot(post_json("/courses/1/students", json!({"student_id": 1})))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);

        let roster = app
            .clone()
            .oneshot(get("/courses/1/students"))
            .await
            .unwrap();
        assert_eq!(body_json(roster).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_students_of_missing_course_is_404_naming_the_id() {
        let app = app();

        let response = app
            .clone()
            .oneshot(get("/courses/99/students"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert!(
            body["detail"].as_str().unwrap().contains("99"),
            "detail should name the requested course id: {}",
            body
        );
    }

    #[tokio::test]
    async fn test_enroll_missing_student_is_404() {
        let app = app();

        app.clone()
            .oneshot(post_json("/instructors", json!({"name": "A"})))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json(
                "/courses",
                json!({"instructor_id": 1, "name": "X"}),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(post_json("/courses/1/students", json!({"student_id": 3})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("3"));
    }

    #[tokio::test]
    async fn test_create_course_with_missing_instructor_is_404() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/courses",
                json!({"instructor_id": 8, "name": "X"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let listing = app.clone().oneshot(get("/courses")).await.unwrap();
        assert_eq!(body_json(listing).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_student_with_empty_name_is_422() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/students", json!({"name": ""})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_course_listing_carries_code_and_instructor() {
        let app = app();

        app.clone()
            .oneshot(post_json("/instructors", json!({"name": "A"})))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json(
                "/courses",
                json!({"instructor_id": 1, "name": "Databases", "code": "CS-145"}),
            ))
            .await
            .unwrap();

        let response = app.clone().oneshot(get("/courses")).await.unwrap();
        assert_eq!(
            body_json(response).await,
            json!([{
                "id": 1,
                "name": "Databases",
                "code": "CS-145",
                "instructor_id": 1
            }])
        );
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_created_response_serialization() {
        let response = CreatedResponse { id: 7 };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"id":7}"#);
    }

    #[test]
    fn test_enroll_request_deserialization() {
        let json = r#"{"student_id": 3}"#;
        let request: EnrollStudentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.student_id, 3);
    }

    #[test]
    fn test_create_course_request_code_defaults_to_none() {
        let json = r#"{"instructor_id": 1, "name": "Compilers"}"#;
        let request: CreateCourseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.instructor_id, 1);
        assert_eq!(request.name, "Compilers");
        assert!(request.code.is_none());
    }

    #[test]
    fn test_course_response_field_names() {
        let json = serde_json::to_value(CourseResponse {
            id: 1,
            name: "Compilers".to_string(),
            code: None,
            instructor_id: 2,
        })
        .unwrap();

        assert_eq!(json["instructor_id"], 2);
        assert!(json["code"].is_null());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::RegistryError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(RegistryError, StatusCode)> = vec![
            (RegistryError::StudentNotFound(1), StatusCode::NOT_FOUND),
            (RegistryError::InstructorNotFound(1), StatusCode::NOT_FOUND),
            (RegistryError::CourseNotFound(1), StatusCode::NOT_FOUND),
            (
                RegistryError::AlreadyEnrolled {
                    student_id: 1,
                    course_id: 2,
                },
                StatusCode::BAD_REQUEST,
            ),
            (RegistryError::EmptyName, StatusCode::UNPROCESSABLE_ENTITY),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_messages_name_the_requested_id() {
        assert_eq!(
            RegistryError::StudentNotFound(3).to_string(),
            "Student with ID 3 not found"
        );
        assert_eq!(
            RegistryError::InstructorNotFound(4).to_string(),
            "No instructor with ID 4 found"
        );
        assert_eq!(
            RegistryError::CourseNotFound(5).to_string(),
            "Course with ID 5 not found"
        );
    }
}
