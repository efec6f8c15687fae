use super::*;
use crate::net::fake_transport::FakeTransport;

fn course() -> FeedbackCourse {
    FeedbackCourse { id: 11, alias: "js-fe-2021".to_owned() }
}

fn filled_form() -> FeedbackForm {
    FeedbackForm {
        student_id: Some(42),
        recommendation: Some(Recommendation::Hire),
        recommendation_comment: Some("Great".to_owned()),
        ..FeedbackForm::default()
    }
}

fn student(id: i64) -> MentorStudent {
    MentorStudent { id, github_id: format!("student-{id}"), name: format!("Student {id}") }
}

// =============================================================
// Rating conversion
// =============================================================

#[test]
fn convert_soft_skill_value_maps_every_star_count() {
    assert_eq!(convert_soft_skill_value(None), SoftSkillValue::None);
    assert_eq!(convert_soft_skill_value(Some(0)), SoftSkillValue::None);
    assert_eq!(convert_soft_skill_value(Some(1)), SoftSkillValue::Poor);
    assert_eq!(convert_soft_skill_value(Some(2)), SoftSkillValue::Fair);
    assert_eq!(convert_soft_skill_value(Some(3)), SoftSkillValue::Good);
    assert_eq!(convert_soft_skill_value(Some(4)), SoftSkillValue::Great);
    assert_eq!(convert_soft_skill_value(Some(5)), SoftSkillValue::Excellent);
}

#[test]
fn convert_soft_skill_value_out_of_range_is_none() {
    assert_eq!(convert_soft_skill_value(Some(6)), SoftSkillValue::None);
    assert_eq!(convert_soft_skill_value(Some(u8::MAX)), SoftSkillValue::None);
}

#[test]
fn set_rating_clamps_and_clears() {
    let mut form = FeedbackForm::default();
    form.set_rating(SoftSkillId::Team, 9);
    assert_eq!(form.ratings.get(&SoftSkillId::Team), Some(&MAX_RATING));
    form.set_rating(SoftSkillId::Team, 0);
    assert!(form.ratings.is_empty());
}

// =============================================================
// Validation / payload
// =============================================================

#[test]
fn empty_form_reports_all_required_fields() {
    let errors = FeedbackForm::default().validate();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(&FormField::StudentId), Some(&REQUIRED_MESSAGE));
    assert!(errors.contains_key(&FormField::Recommendation));
    assert!(errors.contains_key(&FormField::RecommendationComment));
}

#[test]
fn blank_comment_is_treated_as_missing() {
    let form = FeedbackForm { recommendation_comment: Some(String::new()), ..filled_form() };
    let errors = form.validate();
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![FormField::RecommendationComment]);
}

#[test]
fn payload_defaults_suggestions_and_english_level() {
    let (student_id, payload) = filled_form().to_payload().unwrap();
    assert_eq!(student_id, 42);
    assert_eq!(payload.recommendation, Recommendation::Hire);
    assert_eq!(payload.content.recommendation_comment, "Great");
    assert_eq!(payload.content.suggestions, "");
    assert_eq!(payload.english_level, EnglishLevel::Unknown);

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["content"]["suggestions"], "");
    assert_eq!(json["englishLevel"], "unknown");
}

#[test]
fn payload_lists_every_soft_skill_in_catalog_order() {
    let mut form = filled_form();
    form.set_rating(SoftSkillId::Communicable, 4);
    form.set_rating(SoftSkillId::Responsible, 1);

    let (_, payload) = form.to_payload().unwrap();
    let skills: Vec<(SoftSkillId, SoftSkillValue)> =
        payload.content.soft_skills.iter().map(|s| (s.id, s.value)).collect();
    assert_eq!(
        skills,
        vec![
            (SoftSkillId::Responsible, SoftSkillValue::Poor),
            (SoftSkillId::Team, SoftSkillValue::None),
            (SoftSkillId::Communicable, SoftSkillValue::Great),
            (SoftSkillId::SelfImprove, SoftSkillValue::None),
        ]
    );
}

#[test]
fn payload_keeps_given_suggestions_and_level() {
    let form = FeedbackForm {
        suggestions: Some("More tests".to_owned()),
        english_level: Some(EnglishLevel::C1),
        ..filled_form()
    };
    let (_, payload) = form.to_payload().unwrap();
    assert_eq!(payload.content.suggestions, "More tests");
    assert_eq!(payload.english_level, EnglishLevel::C1);
}

// =============================================================
// Pre-selection
// =============================================================

#[test]
fn preselected_student_uses_query_once_students_loaded() {
    let students = vec![student(42), student(7)];
    assert_eq!(preselected_student(Some("42"), Some(students.as_slice())), Some(Some(42)));
}

#[test]
fn preselected_student_waits_for_students() {
    assert_eq!(preselected_student(Some("42"), None), None);
    assert_eq!(preselected_student(Some("42"), Some(&[][..])), None);
}

#[test]
fn preselected_student_clears_without_usable_query() {
    let students = vec![student(42)];
    assert_eq!(preselected_student(None, Some(students.as_slice())), Some(None));
    assert_eq!(preselected_student(Some("abc"), Some(students.as_slice())), Some(None));
}

// =============================================================
// submit_feedback
// =============================================================

#[tokio::test]
async fn submit_success_navigates_to_mentor_students() {
    let api = PortalApi::new(FakeTransport::new().respond(201, serde_json::json!({ "id": 1 })));
    let outcome = submit_feedback(&api, &course(), &filled_form()).await;

    assert_eq!(outcome.redirect(), Some(mentor_students_route("js-fe-2021").as_str()));
    assert_eq!(outcome.notice(), Some((NoticeKind::Success, SUCCESS_MESSAGE)));
    assert_eq!(outcome.status(), SubmitStatus::Success);
}

#[tokio::test]
async fn submit_failure_keeps_form_and_reports_error() {
    let api = PortalApi::new(FakeTransport::new().respond(500, serde_json::json!({ "message": "db down" })));
    let form = FeedbackForm { suggestions: Some("Keep going".to_owned()), ..filled_form() };
    let before = form.clone();

    let outcome = submit_feedback(&api, &course(), &form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(outcome.redirect(), None);
    assert_eq!(outcome.notice(), Some((NoticeKind::Error, ERROR_MESSAGE)));
    assert_eq!(outcome.status(), SubmitStatus::Failed);
    assert_eq!(form, before);
}

#[tokio::test]
async fn submit_transport_error_is_generic_failure() {
    let api = PortalApi::new(FakeTransport::new().fail("offline"));
    let outcome = submit_feedback(&api, &course(), &filled_form()).await;
    assert_eq!(outcome, SubmitOutcome::Failed);
}

#[tokio::test]
async fn invalid_form_never_reaches_network() {
    let api = PortalApi::new(FakeTransport::new());
    let form = FeedbackForm { recommendation: None, ..filled_form() };

    let outcome = submit_feedback(&api, &course(), &form).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.contains_key(&FormField::Recommendation)));
    assert_eq!(outcome.notice(), None);
    assert_eq!(outcome.status(), SubmitStatus::Idle);
}

// =============================================================
// Submit state machine
// =============================================================

#[test]
fn begin_submit_ignores_press_while_request_in_flight() {
    assert_eq!(begin_submit(SubmitStatus::Submitting, &filled_form()), SubmitAttempt::Busy);
    assert_eq!(begin_submit(SubmitStatus::Submitting, &FeedbackForm::default()), SubmitAttempt::Busy);
}

#[test]
fn begin_submit_reports_missing_fields_without_sending() {
    let attempt = begin_submit(SubmitStatus::Idle, &FeedbackForm::default());
    let SubmitAttempt::Invalid(errors) = attempt else {
        panic!("expected validation errors, got {attempt:?}");
    };
    assert_eq!(errors.len(), 3);
}

#[test]
fn begin_submit_sends_valid_form_from_idle() {
    assert_eq!(begin_submit(SubmitStatus::Idle, &filled_form()), SubmitAttempt::Send);
}

#[tokio::test]
async fn failed_submit_settles_idle_and_allows_retry() {
    let form = filled_form();
    let before = form.clone();

    let mut status = SubmitStatus::Idle;
    assert_eq!(begin_submit(status, &form), SubmitAttempt::Send);
    status = SubmitStatus::Submitting;
    assert_eq!(begin_submit(status, &form), SubmitAttempt::Busy);

    let api = PortalApi::new(FakeTransport::new().respond(503, serde_json::json!({})));
    let outcome = submit_feedback(&api, &course(), &form).await;
    status = outcome.settled_status();

    assert_eq!(outcome.status(), SubmitStatus::Failed);
    assert_eq!(status, SubmitStatus::Idle);
    assert_eq!(form, before);
    assert_eq!(begin_submit(status, &form), SubmitAttempt::Send);
}

#[tokio::test]
async fn successful_submit_settles_in_success() {
    let api = PortalApi::new(FakeTransport::new().respond(200, serde_json::json!({ "id": 9 })));
    let outcome = submit_feedback(&api, &course(), &filled_form()).await;
    assert_eq!(outcome.settled_status(), SubmitStatus::Success);
}

#[test]
fn invalid_outcome_settles_idle() {
    let outcome = SubmitOutcome::Invalid(FeedbackForm::default().validate());
    assert_eq!(outcome.settled_status(), SubmitStatus::Idle);
}
