use super::*;
use crate::net::fake_transport::FakeTransport;
use crate::net::http::Method;
use crate::net::types::{EnglishLevel, FeedbackContent, Recommendation};

#[test]
fn mentor_students_endpoint_formats_expected_path() {
    assert_eq!(mentor_students_endpoint(77), "/api/mentor/77/students");
}

#[test]
fn student_feedback_endpoint_scopes_course_and_student() {
    assert_eq!(student_feedback_endpoint(11, 42), "/api/course/11/students/42/feedbacks");
}

#[tokio::test]
async fn fetch_session_unwraps_data_envelope() {
    let transport = FakeTransport::new().respond(
        200,
        serde_json::json!({ "data": { "githubId": "mentor-1", "courses": [] } }),
    );
    let api = PortalApi::new(transport);
    let session = api.fetch_session().await.unwrap();
    assert_eq!(session.github_id, "mentor-1");
    assert!(session.courses.is_empty());
}

#[tokio::test]
async fn fetch_mentor_students_decodes_list() {
    let transport = FakeTransport::new().respond(
        200,
        serde_json::json!({ "data": [
            { "id": 42, "githubId": "student-42", "name": "Ann Lee" },
            { "id": 7, "githubId": "student-7", "name": "Bo Chen" }
        ] }),
    );
    let api = PortalApi::new(transport);
    let students = api.fetch_mentor_students(501).await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].github_id, "student-42");
    assert_eq!(api.transport.requests()[0].path, "/api/mentor/501/students");
}

#[tokio::test]
async fn create_student_feedback_posts_payload() {
    let transport = FakeTransport::new().respond(201, serde_json::json!({ "id": 900 }));
    let api = PortalApi::new(transport);
    let payload = CreateStudentFeedback {
        recommendation: Recommendation::Hire,
        content: FeedbackContent {
            suggestions: String::new(),
            recommendation_comment: "Great".to_owned(),
            soft_skills: Vec::new(),
        },
        english_level: EnglishLevel::Unknown,
    };

    let created = api.create_student_feedback(11, 42, &payload).await.unwrap();
    assert_eq!(created, CreatedFeedback { id: 900 });

    let requests = api.transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/api/course/11/students/42/feedbacks");
    assert_eq!(requests[0].body.as_ref().unwrap()["recommendation"], "hire");
}
